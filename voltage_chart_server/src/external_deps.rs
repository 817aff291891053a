pub use chrono::{DateTime, NaiveDateTime, Utc};
pub use csv::{ReaderBuilder, StringRecord, Trim};
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
    Record,
};
pub use image::{ImageFormat, RgbImage};
pub use once_cell::sync::Lazy as once_lazy;
pub use tokio::net::TcpListener;
