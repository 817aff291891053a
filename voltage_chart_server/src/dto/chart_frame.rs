use crate::common::*;

use crate::enums::{chart_style::*, marker_shape::*, trace_color::*};

#[doc = r#"
    렌더링 백엔드와 무관한 차트 한 장의 구성 정보.

    모든 라인 트레이스는 `timestamps` 를 x 좌표로 공유하며, 값이 `None` 인 구간은 그리지 않는다.
    마커 트레이스는 자신만의 (timestamp, value) 좌표 목록을 가진다.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct ChartFrame {
    title: String,
    x_desc: String,
    y_desc: String,
    x_label_format: String,
    style: ChartStyle,
    width: u32,
    height: u32,
    timestamps: Vec<NaiveDateTime>,
    #[new(default)]
    lines: Vec<LineTrace>,
    #[new(default)]
    markers: Vec<MarkerTrace>,
}

#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct LineTrace {
    label: String,
    color: TraceColor,
    values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct MarkerTrace {
    label: String,
    color: TraceColor,
    shape: MarkerShape,
    points: Vec<(NaiveDateTime, f64)>,
}

impl ChartFrame {
    pub fn with_line(mut self, line: LineTrace) -> Self {
        self.lines.push(line);
        self
    }

    pub fn with_markers(mut self, markers: MarkerTrace) -> Self {
        self.markers.push(markers);
        self
    }

    pub fn find_markers(&self, label: &str) -> Option<&MarkerTrace> {
        self.markers.iter().find(|marker| marker.label == label)
    }

    #[doc = "(min, max) over every defined line value and marker value"]
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        let line_values = self
            .lines
            .iter()
            .flat_map(|line| line.values.iter().filter_map(|value| *value));
        let marker_values = self
            .markers
            .iter()
            .flat_map(|marker| marker.points.iter().map(|(_, value)| *value));

        line_values
            .chain(marker_values)
            .filter(|value| value.is_finite())
            .fold(None, |acc, value| match acc {
                None => Some((value, value)),
                Some((min, max)) => Some((min.min(value), max.max(value))),
            })
    }
}
