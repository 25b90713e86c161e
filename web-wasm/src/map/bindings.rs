//! Leaflet Bridge バインディング
//!
//! 地図の描画は `js/map-bridge.js` 経由で Leaflet に委譲する。

use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/map-bridge.js")]
extern "C" {
    /// 地図を生成してタイルレイヤーを追加
    ///
    /// # Returns
    /// Leaflet の map オブジェクト
    #[wasm_bindgen(js_name = "createMap", catch)]
    pub fn create_map_js(element_id: &str, lat: f64, lng: f64, zoom: u8)
        -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = "setView")]
    pub fn set_view_js(map: &JsValue, lat: f64, lng: f64, zoom: u8, animate: bool);

    #[wasm_bindgen(js_name = "flyTo")]
    pub fn fly_to_js(map: &JsValue, lat: f64, lng: f64, zoom: u8);

    #[wasm_bindgen(js_name = "clearMarkers")]
    pub fn clear_markers_js(map: &JsValue);

    /// 色付きピンを追加
    ///
    /// # Arguments
    /// * `on_click` - クリック時に呼ばれる関数
    #[wasm_bindgen(js_name = "addMarker")]
    pub fn add_marker_js(map: &JsValue, lat: f64, lng: f64, color: &str, on_click: &JsValue);

    /// 地域レイヤーを差し替え
    ///
    /// # Arguments
    /// * `geojson_json` - FeatureCollection のJSON文字列
    /// * `styles_json` - フィーチャ順のスタイル配列のJSON文字列
    #[wasm_bindgen(js_name = "setRegions", catch)]
    pub fn set_regions_js(
        map: &JsValue,
        geojson_json: &str,
        styles_json: &str,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = "removeRegions")]
    pub fn remove_regions_js(map: &JsValue);
}
