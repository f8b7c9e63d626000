//! Loading the statistics payload.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::DataSource;
use crate::stats::StatsDataset;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request for {url} failed: {message}")]
    Network { url: String, message: String },
    #[error("server answered {status} for {url}")]
    Status { url: String, status: u16 },
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("statistics payload is not valid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0} cannot be loaded on this platform")]
    Unsupported(String),
}

pub fn parse_dataset(raw: &str) -> Result<StatsDataset, LoadError> {
    Ok(serde_json::from_str(raw)?)
}

/// Fetch (web) or read (desktop) the dataset once.
pub async fn load_dataset(source: &DataSource) -> Result<StatsDataset, LoadError> {
    let raw = read_source(source).await?;
    parse_dataset(&raw)
}

#[cfg(target_arch = "wasm32")]
async fn read_source(source: &DataSource) -> Result<String, LoadError> {
    match source {
        DataSource::Url(url) => fetch_text(url).await,
        DataSource::File(path) => Err(LoadError::Unsupported(path.display().to_string())),
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn read_source(source: &DataSource) -> Result<String, LoadError> {
    match source {
        DataSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })
        }
        DataSource::Url(url) => Err(LoadError::Unsupported(url.clone())),
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(url: &str) -> Result<String, LoadError> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let network = |err: JsValue| LoadError::Network {
        url: url.to_string(),
        message: err.as_string().unwrap_or_else(|| format!("{err:?}")),
    };

    let window = web_sys::window().ok_or_else(|| network(JsValue::from_str("no window")))?;
    let response: web_sys::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(network)?
        .dyn_into()
        .map_err(network)?;

    if !response.ok() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let text = JsFuture::from(response.text().map_err(network)?)
        .await
        .map_err(network)?;
    text.as_string()
        .ok_or_else(|| network(JsValue::from_str("response body is not text")))
}
