use crate::common::*;

use crate::model::series::data_point::*;

#[doc = r#"
    시간순으로 정렬된 (timestamp, value) 시계열 테이블.

    생성 시점에 timestamp 기준으로 안정 정렬(stable sort)되며 이후에는 변경되지 않는다.
    동일한 timestamp 가 여러 개 존재하거나 간격이 불규칙해도 그대로 허용하며,
    동일 timestamp 의 행들은 원본 파일 순서를 유지한다.
"#]
#[derive(Debug, Clone)]
pub struct TimeSeries {
    points: Vec<DataPoint>,
}

impl TimeSeries {
    pub fn new(mut points: Vec<DataPoint>) -> Self {
        points.sort_by_key(|point| point.timestamp);
        TimeSeries { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn timestamps(&self) -> Vec<NaiveDateTime> {
        self.points.iter().map(|point| point.timestamp).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.value).collect()
    }

    pub fn first_timestamp(&self) -> Option<NaiveDateTime> {
        self.points.first().map(|point| point.timestamp)
    }

    pub fn last_timestamp(&self) -> Option<NaiveDateTime> {
        self.points.last().map(|point| point.timestamp)
    }

    #[doc = "Points at the given row positions, out-of-range positions are skipped"]
    pub fn select(&self, positions: &[usize]) -> Vec<DataPoint> {
        positions
            .iter()
            .filter_map(|pos| self.points.get(*pos).copied())
            .collect()
    }
}
