use crate::dto::chart_frame::*;
use crate::enums::chart_kind::*;
use crate::model::series::time_series::*;

pub trait VisualizationService: Send + Sync {
    #[doc = "
        Derive the views a chart kind needs from the series and assemble its frame.
        Derived columns are recomputed on every call.
        # Arguments
        * `series` - The loaded, immutable time series
        * `kind` - Which of the five charts to build
    "]
    fn build_chart_frame(&self, series: &TimeSeries, kind: ChartKind) -> anyhow::Result<ChartFrame>;
}
