pub mod chart_frame;
pub mod series_csv_row;
