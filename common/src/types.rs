//! 旅行データの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Mode: 国際版 / 国内版の表示モード
//! - TripRecord: 旅行1件分のレコード
//! - Viewport: 地図の中心座標とズーム

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// マーカークリック時のズームレベル
pub const FOCUS_ZOOM: u8 = 8;

/// 表示モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Intl,
    Domestic,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Intl, Mode::Domestic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Intl => "intl",
            Mode::Domestic => "domestic",
        }
    }

    /// モード切替時の地図表示範囲
    pub fn default_viewport(&self) -> Viewport {
        match self {
            Mode::Intl => Viewport::new(20.0, 0.0, 2),
            Mode::Domestic => Viewport::new(35.0, 105.0, 4),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "intl" | "international" => Ok(Mode::Intl),
            "domestic" => Ok(Mode::Domestic),
            other => Err(Error::UnknownMode(other.to_string())),
        }
    }
}

/// 緯度経度
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// 地図の表示範囲
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: u8,
}

impl Viewport {
    pub fn new(lat: f64, lng: f64, zoom: u8) -> Self {
        Self {
            center: LatLng::new(lat, lng),
            zoom,
        }
    }

    /// 地図生成直後の初期表示（中国・アジア周辺）
    pub fn initial() -> Self {
        Self::new(35.0, 105.0, 4)
    }
}

/// 旅行レコード
///
/// `name` は表示名であり、地域マッピングの検索キーも兼ねる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    pub id: u32,
    pub name: String,
    /// "2025-10-12 -- 2025-10-24" 形式の期間
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub photo: String,
}

impl TripRecord {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    /// 詳細表示用のビューポート
    pub fn focus_viewport(&self) -> Viewport {
        Viewport {
            center: self.position(),
            zoom: FOCUS_ZOOM,
        }
    }
}

/// BGMトラック
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_str() {
        assert_eq!("intl".parse::<Mode>().unwrap(), Mode::Intl);
        assert_eq!("Domestic".parse::<Mode>().unwrap(), Mode::Domestic);
        assert!(matches!("abroad".parse::<Mode>(), Err(Error::UnknownMode(_))));
    }

    #[test]
    fn test_mode_serde_tags() {
        assert_eq!(serde_json::to_string(&Mode::Intl).unwrap(), "\"intl\"");
        let mode: Mode = serde_json::from_str("\"domestic\"").unwrap();
        assert_eq!(mode, Mode::Domestic);
    }

    #[test]
    fn test_default_viewports() {
        assert_eq!(Mode::Intl.default_viewport(), Viewport::new(20.0, 0.0, 2));
        assert_eq!(Mode::Domestic.default_viewport(), Viewport::new(35.0, 105.0, 4));
    }

    #[test]
    fn test_trip_record_deserialize_without_desc() {
        let json = r#"{
            "id": 7,
            "name": "Japan - Kyoto",
            "date": "2024-04-01 -- 2024-04-05",
            "lat": 35.0116,
            "lng": 135.7681,
            "photo": "kyoto.jpg"
        }"#;

        let trip: TripRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(trip.id, 7);
        assert!(trip.desc.is_none());
        assert_eq!(trip.focus_viewport().zoom, FOCUS_ZOOM);
        assert!(trip.position().is_valid());
    }
}
