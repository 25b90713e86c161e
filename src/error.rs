use thiserror::Error;

#[derive(Error, Debug)]
pub enum TravelDiaryError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("旅行が見つかりません: {mode} #{id}")]
    TripNotFound { mode: String, id: u32 },

    #[error("カタログが不正: {0}")]
    InvalidCatalog(String),

    #[error("GeoJSON取得エラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GeoJSON取得エラー: HTTP {status} ({url})")]
    HttpStatus { status: u16, url: String },

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] travel_diary_common::Error),
}

pub type Result<T> = std::result::Result<T, TravelDiaryError>;
