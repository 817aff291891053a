pub mod data_point;
pub mod time_series;
