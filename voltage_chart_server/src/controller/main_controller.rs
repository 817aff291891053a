use crate::common::*;

use axum::{
    Router,
    extract::{Path as UrlPath, State},
    http::header,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::controller::app_error::*;

use crate::dto::chart_frame::*;

use crate::enums::chart_kind::*;

use crate::model::series::time_series::*;

use crate::traits::service_traits::{chart_service::*, visualization_service::*};

#[derive(Debug, new)]
pub struct MainController<V: VisualizationService, C: ChartService> {
    visualization_service: V,
    chart_service: C,
    time_series: Arc<TimeSeries>,
    index_html_path: PathBuf,
}

impl<V, C> MainController<V, C>
where
    V: VisualizationService + 'static,
    C: ChartService + 'static,
{
    #[doc = r#"
        HTTP 서버를 실행하는 핵심 함수.

        1. 설정된 주소에 TCP 리스너를 바인딩한다
        2. `/` 와 `/1` ~ `/5` 라우트를 등록한 Router 를 생성한다
        3. 프로세스가 종료될 때까지 요청을 처리한다

        # Arguments
        * `addr` - 바인딩할 소켓 주소

        # Returns
        * `anyhow::Result<()>` - 바인딩 또는 서버 실행 실패 시 Err
    "#]
    pub async fn main_task(self: Arc<Self>, addr: SocketAddr) -> anyhow::Result<()> {
        let listener: TcpListener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("[MainController->main_task] Failed to bind {}", addr))?;

        info!("Listening on {}", addr);

        axum::serve(listener, self.router())
            .await
            .context("[MainController->main_task] HTTP server terminated")?;

        Ok(())
    }

    pub fn router(self: Arc<Self>) -> Router {
        Router::new()
            .route("/", get(Self::index_page))
            .route("/{chart_no}", get(Self::chart_image))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            .with_state(self)
    }

    #[doc = "랜딩 페이지 HTML 을 그대로 내려준다"]
    async fn index_page(State(controller): State<Arc<Self>>) -> Result<Html<String>, AppError> {
        let html: String = tokio::fs::read_to_string(&controller.index_html_path)
            .await
            .with_context(|| {
                format!(
                    "[MainController->index_page] Failed to read {:?}",
                    controller.index_html_path
                )
            })?;

        Ok(Html(html))
    }

    #[doc = "요청마다 파생 데이터를 다시 계산하여 차트를 PNG 로 내려준다"]
    async fn chart_image(
        State(controller): State<Arc<Self>>,
        UrlPath(chart_no): UrlPath<String>,
    ) -> Result<Response, AppError> {
        let kind: ChartKind = chart_no
            .parse::<ChartKind>()
            .map_err(|_| AppError::NotFound(format!("No chart at /{}", chart_no)))?;

        let png: Vec<u8> = controller.render_chart(kind).await?;

        Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
    }

    async fn render_chart(&self, kind: ChartKind) -> anyhow::Result<Vec<u8>> {
        let frame: ChartFrame = self
            .visualization_service
            .build_chart_frame(&self.time_series, kind)?;

        self.chart_service
            .render_png(frame)
            .await
            .with_context(|| format!("[MainController->render_chart] chart {}", kind.chart_no()))
    }
}
