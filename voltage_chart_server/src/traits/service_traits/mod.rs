pub mod chart_service;
pub mod visualization_service;
