//! 境界データ（GeoJSON）取得

use geojson::FeatureCollection;
use travel_diary_common::parse_feature_collection;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// GET でテキストを取得
async fn fetch_text(url: &str) -> Result<String, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("windowが取得できません"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTPエラー: {}", resp.status())));
    }

    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("レスポンスがテキストではありません"))
}

/// GeoJSON FeatureCollection を取得
pub async fn fetch_geometry(url: &str) -> Result<FeatureCollection, String> {
    let text = fetch_text(url)
        .await
        .map_err(|e| format!("取得に失敗: {:?}", e))?;
    parse_feature_collection(&text).map_err(|e| e.to_string())
}
