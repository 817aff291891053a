use crate::common::*;

use crate::model::series::time_series::*;

#[async_trait]
pub trait SeriesRepository {
    #[doc = "
        Load the whole dataset once and return it sorted by timestamp
        # Errors
        * unreadable source, missing columns, unparseable rows or an empty dataset
    "]
    async fn load_time_series(&self) -> anyhow::Result<TimeSeries>;
}
