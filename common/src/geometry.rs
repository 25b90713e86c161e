//! 地域境界データ（GeoJSON）
//!
//! 取得元URLの定義と FeatureCollection のパース、モード別キャッシュ。

use crate::error::{Error, Result};
use crate::types::Mode;
use geojson::{FeatureCollection, GeoJson};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// 世界の国境データ
pub const WORLD_GEOJSON_URL: &str =
    "https://raw.githubusercontent.com/johan/world.geo.json/master/countries.geo.json";

/// 中国の省界データ（GitHub配信、CORSヘッダあり）
pub const CHINA_GEOJSON_URL: &str =
    "https://raw.githubusercontent.com/longwosion/geojson-map-china/master/china.json";

/// モード別の境界データ取得元
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometrySource {
    pub world_url: String,
    pub domestic_url: String,
}

impl GeometrySource {
    pub fn url_for(&self, mode: Mode) -> &str {
        match mode {
            Mode::Intl => &self.world_url,
            Mode::Domestic => &self.domestic_url,
        }
    }
}

impl Default for GeometrySource {
    fn default() -> Self {
        Self {
            world_url: WORLD_GEOJSON_URL.into(),
            domestic_url: CHINA_GEOJSON_URL.into(),
        }
    }
}

/// GeoJSON文字列を FeatureCollection としてパース
///
/// Feature単体はコレクションに包む。Geometry単体はエラー。
pub fn parse_feature_collection(text: &str) -> Result<FeatureCollection> {
    let geojson: GeoJson = text.parse()?;
    match geojson {
        GeoJson::FeatureCollection(fc) => Ok(fc),
        GeoJson::Feature(feature) => Ok(FeatureCollection {
            bbox: None,
            features: vec![feature],
            foreign_members: None,
        }),
        GeoJson::Geometry(_) => Err(Error::NotFeatureCollection),
    }
}

/// モード別の取得済みデータ
#[derive(Debug, Clone, Default)]
pub struct GeometryCache {
    entries: HashMap<Mode, Arc<FeatureCollection>>,
}

impl GeometryCache {
    pub fn get(&self, mode: Mode) -> Option<Arc<FeatureCollection>> {
        self.entries.get(&mode).cloned()
    }

    pub fn insert(&mut self, mode: Mode, geometry: FeatureCollection) -> Arc<FeatureCollection> {
        let geometry = Arc::new(geometry);
        self.entries.insert(mode, Arc::clone(&geometry));
        geometry
    }

    pub fn contains(&self, mode: Mode) -> bool {
        self.entries.contains_key(&mode)
    }
}
