//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    #[error("GeoJSON is a bare geometry, expected a FeatureCollection")]
    NotFeatureCollection,

    #[error("Unknown mode: {0} (intl/domestic)")]
    UnknownMode(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
