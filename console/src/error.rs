use std::path::PathBuf;

use shared::CatalogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("invalid value {value:?} for {key}")]
    InvalidSetting { key: &'static str, value: String },
    #[error("could not read catalog file {}: {source}", .path.display())]
    CatalogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog file {} is not valid JSON: {source}", .path.display())]
    CatalogJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog is malformed: {0}")]
    Catalog(#[from] CatalogError),
    #[error("terminal input failed: {0}")]
    Input(#[from] std::io::Error),
}
