pub mod chart_kind;
pub mod chart_style;
pub mod marker_shape;
pub mod trace_color;
