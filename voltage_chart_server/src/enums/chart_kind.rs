use crate::common::*;

use crate::model::configs::chart_config::*;

#[doc = r#"
    HTTP 경로 `/1` ~ `/5` 에 대응하는 다섯 가지 차트 종류.

    * `Raw` - 원본 값 라인 차트
    * `MovingAverage` - 원본 + 단기 이동평균
    * `PeaksAndLows` - 원본 + 단기 이동평균 + 극대/극소 마커
    * `LongMovingAverages` - 원본 + 두 개의 장기 이동평균 (presentation 스타일)
    * `DropAcceleration` - 원본 + 2차 차분이 하위 분위수 미만인 지점 마커
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Raw,
    MovingAverage,
    PeaksAndLows,
    LongMovingAverages,
    DropAcceleration,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::Raw,
        ChartKind::MovingAverage,
        ChartKind::PeaksAndLows,
        ChartKind::LongMovingAverages,
        ChartKind::DropAcceleration,
    ];

    pub fn chart_no(&self) -> u8 {
        match self {
            ChartKind::Raw => 1,
            ChartKind::MovingAverage => 2,
            ChartKind::PeaksAndLows => 3,
            ChartKind::LongMovingAverages => 4,
            ChartKind::DropAcceleration => 5,
        }
    }

    #[doc = "차트 제목. 이동평균 윈도우는 legend 와 같도록 설정값에서 가져온다"]
    pub fn title(&self, chart_config: &ChartConfig) -> String {
        match self {
            ChartKind::Raw => "Voltage Over Time".to_string(),
            ChartKind::MovingAverage => format!(
                "Voltage with {}-Day Moving Average",
                chart_config.short_window
            ),
            ChartKind::PeaksAndLows => "Voltage Over Time with Peaks & Lows".to_string(),
            ChartKind::LongMovingAverages => format!(
                "Values with {} and {} Value Moving Averages",
                chart_config.long_window, chart_config.longer_window
            ),
            ChartKind::DropAcceleration => "Values Drop Acceleration Points".to_string(),
        }
    }

    pub fn y_desc(&self) -> &'static str {
        match self {
            ChartKind::Raw | ChartKind::MovingAverage | ChartKind::PeaksAndLows => "Voltage",
            ChartKind::LongMovingAverages | ChartKind::DropAcceleration => "Values",
        }
    }
}

impl FromStr for ChartKind {
    type Err = anyhow::Error;

    fn from_str(chart_no: &str) -> Result<Self, Self::Err> {
        ChartKind::ALL
            .into_iter()
            .find(|kind| kind.chart_no().to_string() == chart_no)
            .ok_or_else(|| anyhow!("[ChartKind->from_str] Unknown chart number '{}'", chart_no))
    }
}
