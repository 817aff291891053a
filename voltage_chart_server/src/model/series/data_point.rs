use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, new)]
pub struct DataPoint {
    pub timestamp: NaiveDateTime,
    pub value: f64,
}
