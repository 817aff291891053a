use crate::common::*;

#[derive(Debug, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct DatasetConfig {
    pub csv_path: String,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    pub index_html_path: String,
}

fn default_timestamp_format() -> String {
    "%d-%m-%Y %H:%M:%S".to_string()
}
