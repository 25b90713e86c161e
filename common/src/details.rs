//! 詳細パネル表示データ
//!
//! 選択された旅行の写真パス・名称・期間・説明を組み立てる。

use crate::types::{Mode, TripRecord};
use serde::{Deserialize, Serialize};

/// 説明が未設定の場合の表示
pub const DEFAULT_DESCRIPTION: &str = "暂无描述";

/// そのまま使う写真パスの接頭辞（URL・絶対パス・相対パス指定済み）
const VERBATIM_PREFIXES: [&str; 4] = ["http", "/", "file://", "."];

/// モード別の写真ベースパス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoBasePaths {
    pub intl: String,
    pub domestic: String,
}

impl PhotoBasePaths {
    pub fn for_mode(&self, mode: Mode) -> &str {
        match mode {
            Mode::Intl => &self.intl,
            Mode::Domestic => &self.domestic,
        }
    }
}

impl Default for PhotoBasePaths {
    fn default() -> Self {
        Self {
            intl: "./Inter-Data/".into(),
            domestic: "./Dome-Data/".into(),
        }
    }
}

/// 写真パスを解決
///
/// 接頭辞が `http` `/` `file://` `.` のいずれかならそのまま、
/// それ以外はベースパスを前置する（二重付与を避ける）。
pub fn resolve_photo_path(photo: &str, base: &str) -> String {
    if VERBATIM_PREFIXES.iter().any(|p| photo.starts_with(p)) {
        photo.to_string()
    } else {
        format!("{}{}", base, photo)
    }
}

/// 詳細パネルに表示する内容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDetails {
    pub trip_id: u32,
    pub photo_src: String,
    pub name: String,
    pub date: String,
    pub description: String,
}

impl TripDetails {
    pub fn from_trip(trip: &TripRecord, mode: Mode, bases: &PhotoBasePaths) -> Self {
        let description = trip
            .desc
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DESCRIPTION)
            .to_string();

        Self {
            trip_id: trip.id,
            photo_src: resolve_photo_path(&trip.photo, bases.for_mode(mode)),
            name: trip.name.clone(),
            date: trip.date.clone(),
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbatim_paths() {
        for photo in [
            "https://example.com/a.jpg",
            "http://example.com/a.jpg",
            "/photos/a.jpg",
            "file:///tmp/a.jpg",
            "./Inter-Data/a.jpg",
            "../shared/a.jpg",
        ] {
            assert_eq!(resolve_photo_path(photo, "./Inter-Data/"), photo);
        }
    }

    #[test]
    fn test_prefixed_paths() {
        let bases = PhotoBasePaths::default();
        assert_eq!(
            resolve_photo_path("2025Spain.jpg", bases.for_mode(Mode::Intl)),
            "./Inter-Data/2025Spain.jpg"
        );
        assert_eq!(
            resolve_photo_path("sub/2025Xiamen.jpg", bases.for_mode(Mode::Domestic)),
            "./Dome-Data/sub/2025Xiamen.jpg"
        );
    }

    #[test]
    fn test_details_default_description() {
        let mut trip = TripRecord {
            id: 9,
            name: "China - Chengdu".into(),
            date: "2026-01-01 -- 2026-01-03".into(),
            desc: None,
            lat: 30.67,
            lng: 104.06,
            photo: "chengdu.jpg".into(),
        };
        let bases = PhotoBasePaths::default();

        let details = TripDetails::from_trip(&trip, Mode::Domestic, &bases);
        assert_eq!(details.description, DEFAULT_DESCRIPTION);
        assert_eq!(details.photo_src, "./Dome-Data/chengdu.jpg");

        trip.desc = Some(String::new());
        let details = TripDetails::from_trip(&trip, Mode::Domestic, &bases);
        assert_eq!(details.description, DEFAULT_DESCRIPTION);

        trip.desc = Some("火锅".into());
        let details = TripDetails::from_trip(&trip, Mode::Domestic, &bases);
        assert_eq!(details.description, "火锅");
        assert_eq!(details.name, "China - Chengdu");
        assert_eq!(details.date, "2026-01-01 -- 2026-01-03");
    }
}
