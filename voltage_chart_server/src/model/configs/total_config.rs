use crate::common::*;

use crate::model::configs::{chart_config::*, dataset_config::*, server_config::*};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_server_config);

#[doc = "Function to initialize Server configuration information instances"]
pub fn initialize_server_config() -> TotalConfig {
    info!("initialize_server_config() START!");
    TotalConfig::new()
}

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    pub server: ServerConfig,
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

#[doc = "HTTP 바인딩 설정 정보"]
pub fn get_server_config_info() -> &'static ServerConfig {
    &TOTAL_CONFIG.server
}

#[doc = "CSV 데이터셋 및 랜딩 페이지 설정 정보"]
pub fn get_dataset_config_info() -> &'static DatasetConfig {
    &TOTAL_CONFIG.dataset
}

#[doc = "차트 설정 정보"]
pub fn get_chart_config_info() -> &'static ChartConfig {
    &TOTAL_CONFIG.chart
}

impl TotalConfig {
    #[doc = "설정 파일을 읽은 직후 섹션별 값의 유효성을 검사한다"]
    pub fn validate(&self) -> anyhow::Result<()> {
        self.server.socket_addr()?;
        self.chart.validate()?;
        Ok(())
    }

    fn new() -> Self {
        match read_toml_from_file::<TotalConfig>(&SERVER_CONFIG_PATH)
            .and_then(|config| config.validate().map(|_| config))
        {
            Ok(config) => config,
            Err(e) => {
                let err_msg: &str = "Failed to load or validate the TotalConfig structure from SERVER_CONFIG_PATH.";
                error!("[TotalConfig->new] {} {:?}", err_msg, e);
                std::process::exit(1);
            }
        }
    }
}
