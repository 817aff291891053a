use crate::common::*;

use crate::dto::chart_frame::*;

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Render a chart frame and return the encoded PNG bytes
        # Arguments
        * `frame` - Title, axis labels, canvas size, style, line and marker traces
    "]
    async fn render_png(&self, frame: ChartFrame) -> anyhow::Result<Vec<u8>>;
}
