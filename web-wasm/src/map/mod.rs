//! Leaflet 地図ハンドル

pub mod bindings;

use bindings::*;
use geojson::FeatureCollection;
use travel_diary_common::{MarkerSpec, RegionStyle, Viewport};
use wasm_bindgen::prelude::*;

/// 地図要素のID
pub const MAP_ELEMENT_ID: &str = "map";

pub struct LeafletMap {
    map: JsValue,
    // マーカーが残っている間はクロージャを保持する
    marker_callbacks: Vec<Closure<dyn FnMut()>>,
}

impl LeafletMap {
    pub fn create(element_id: &str, viewport: Viewport) -> Result<Self, String> {
        let map = create_map_js(
            element_id,
            viewport.center.lat,
            viewport.center.lng,
            viewport.zoom,
        )
        .map_err(|e| format!("地図の生成に失敗: {:?}", e))?;

        Ok(Self {
            map,
            marker_callbacks: Vec::new(),
        })
    }

    pub fn set_view(&self, viewport: Viewport, animate: bool) {
        set_view_js(
            &self.map,
            viewport.center.lat,
            viewport.center.lng,
            viewport.zoom,
            animate,
        );
    }

    pub fn fly_to(&self, viewport: Viewport) {
        fly_to_js(&self.map, viewport.center.lat, viewport.center.lng, viewport.zoom);
    }

    /// マーカーを全て置き換える
    pub fn set_markers(&mut self, markers: &[MarkerSpec], on_click: impl Fn(u32) + Clone + 'static) {
        clear_markers_js(&self.map);
        self.marker_callbacks.clear();

        for marker in markers {
            let trip_id = marker.trip_id;
            let on_click = on_click.clone();
            let callback = Closure::wrap(Box::new(move || on_click(trip_id)) as Box<dyn FnMut()>);

            add_marker_js(
                &self.map,
                marker.position.lat,
                marker.position.lng,
                marker.color,
                callback.as_ref(),
            );
            self.marker_callbacks.push(callback);
        }
    }

    pub fn set_regions(
        &self,
        geometry: &FeatureCollection,
        styles: &[RegionStyle],
    ) -> Result<(), String> {
        let geojson_json = serde_json::to_string(geometry)
            .map_err(|e| format!("GeoJSONのシリアライズに失敗: {}", e))?;
        let styles_json = serde_json::to_string(styles)
            .map_err(|e| format!("スタイルのシリアライズに失敗: {}", e))?;

        set_regions_js(&self.map, &geojson_json, &styles_json)
            .map_err(|e| format!("地域レイヤーの描画に失敗: {:?}", e))
    }

    pub fn remove_regions(&self) {
        remove_regions_js(&self.map);
    }
}
