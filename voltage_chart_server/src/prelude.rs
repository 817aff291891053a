pub use std::{
    env,
    io::{Cursor, Write},
    net::SocketAddr,
    path::PathBuf,
    str::FromStr,
    sync::Arc,
};

pub use anyhow::{Context, anyhow};
pub use async_trait::async_trait;
pub use derive_new::new;
pub use dotenv::dotenv;
pub use getset::Getters;
pub use log::{error, info};
pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
pub use serde_json::{Value, json};
