/*
Author      : Seunghwan Shin
Create date : 2025-10-00
Description : Serves pre-rendered charts of a single voltage time series over HTTP.
              The CSV dataset is loaded once at startup and every chart is recomputed per request.

History     : 2025-10-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::csv_series_repository_impl::*;

mod env_configuration;

mod traits;
use traits::repository_traits::series_repository::*;

mod model;
use model::{configs::total_config::*, series::time_series::*};

mod dto;

mod enums;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{chart_service_impl::*, visualization_service_impl::*};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    let _logger_handle: LoggerHandle = set_global_logger();

    info!("Voltage chart server start!");

    /* 데이터셋은 프로세스 시작 시 한 번만 읽는다 */
    let dataset_config = get_dataset_config_info();
    let series_repository: CsvSeriesRepositoryImpl = CsvSeriesRepositoryImpl::new(
        PathBuf::from(dataset_config.csv_path()),
        dataset_config.timestamp_format().to_string(),
    );

    let time_series: TimeSeries = series_repository
        .load_time_series()
        .await
        .unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while loading the time series.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        });

    let bind_addr: SocketAddr = get_server_config_info().socket_addr().unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });

    /* 의존 주입 */
    let visualization_service: VisualizationServiceImpl = VisualizationServiceImpl::new(
        get_chart_config_info().clone(),
        dataset_config.timestamp_format().to_string(),
    );
    let chart_service: ChartServiceImpl = ChartServiceImpl::new();

    let main_controller: Arc<MainController<VisualizationServiceImpl, ChartServiceImpl>> =
        Arc::new(MainController::new(
            visualization_service,
            chart_service,
            Arc::new(time_series),
            PathBuf::from(dataset_config.index_html_path()),
        ));

    main_controller.main_task(bind_addr).await.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });
}
