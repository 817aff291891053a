pub mod chart_service_impl;
pub mod visualization_service_impl;
