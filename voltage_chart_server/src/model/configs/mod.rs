pub mod chart_config;
pub mod dataset_config;
pub mod server_config;
pub mod total_config;
