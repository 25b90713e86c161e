pub mod cache;

use crate::error::{Result, TravelDiaryError};
use cache::GeometryDiskCache;
use geojson::FeatureCollection;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use travel_diary_common::parse_feature_collection;

/// ローカルのGeoJSONファイルを読み込み
pub fn load_file(path: &Path) -> Result<FeatureCollection> {
    if !path.exists() {
        return Err(TravelDiaryError::FileNotFound(path.display().to_string()));
    }
    let text = std::fs::read_to_string(path)?;
    Ok(parse_feature_collection(&text)?)
}

/// URLからGeoJSONを取得（キャッシュ対応）
///
/// `refresh` が真ならキャッシュを無視して再取得し、結果で上書きする。
pub async fn fetch(
    url: &str,
    cache: Option<&GeometryDiskCache>,
    refresh: bool,
) -> Result<FeatureCollection> {
    if !refresh {
        if let Some(text) = cache.and_then(|c| c.get(url)) {
            log::debug!("geometry cache hit: {}", url);
            return Ok(parse_feature_collection(&text)?);
        }
    }

    let text = download(url).await?;
    // パースできたものだけキャッシュする
    let geometry = parse_feature_collection(&text)?;

    if let Some(cache) = cache {
        if let Err(e) = cache.insert(url, &text) {
            log::warn!("キャッシュ保存失敗: {}", e);
        }
    }

    Ok(geometry)
}

async fn download(url: &str) -> Result<String> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("取得中: {}", url));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = async {
        let response = reqwest::get(url).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TravelDiaryError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text().await?)
    }
    .await;

    spinner.finish_and_clear();
    result
}
