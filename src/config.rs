use std::{fmt::Display, net::SocketAddr, path::PathBuf, str::FromStr};

use anyhow::{anyhow, Context};
use tracing::info;

use crate::res::STATIC_DIR;

pub struct Config {
    pub addr: SocketAddr,
    pub static_dir: PathBuf,
}

impl Config {
    /// Reads the environment. Call `dotenv::dotenv()` first to pick up `.env`.
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self {
            addr: try_load("ASKBOX_ADDR", "0.0.0.0:8000")?,
            static_dir: try_load("ASKBOX_STATIC_DIR", STATIC_DIR)?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            static_dir: PathBuf::from(STATIC_DIR),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> anyhow::Result<T>
where
    T::Err: Display,
{
    let value = dotenv::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_owned()
    });

    value
        .parse()
        .map_err(|e| anyhow!("{e}"))
        .with_context(|| format!("invalid {key} value {value:?}"))
}
