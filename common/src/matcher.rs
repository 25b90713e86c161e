//! 地域マッチング
//!
//! 地図データの地域（国・省）が旅行カタログのどれに該当するかを判定し、
//! 塗り分け用のスタイルを返す。
//!
//! 判定順:
//! 1. エイリアス定義がある旅行: 地域名とエイリアスの双方向部分一致
//!    （"北京市" ⊃ "北京" のような行政区の接尾辞を許容）
//! 2. 定義がない旅行（国際版のみ）: 旅行名が地域名を含むか
//!    （"Spain - Madrid" ⊃ "Spain"）
//! 3. カタログ順で最初に一致した旅行を採用

use crate::alias::RegionMapping;
use crate::catalog::TripCatalog;
use crate::feature_name::NameChain;
use crate::palette::color_for_index;
use crate::types::{Mode, TripRecord};
use geojson::{Feature, JsonObject};
use serde::{Deserialize, Serialize};

/// 一致した旅行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitedRegion {
    /// カタログ内インデックス
    pub trip_index: usize,
    pub trip_id: u32,
}

impl VisitedRegion {
    pub fn color(&self) -> &'static str {
        color_for_index(self.trip_index)
    }
}

/// 地域レイヤーのスタイル（Leafletのpath optionsに対応）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionStyle {
    pub fill_color: String,
    pub weight: f32,
    pub opacity: f32,
    pub color: String,
    pub dash_array: String,
    pub fill_opacity: f32,
}

impl RegionStyle {
    pub fn visited(fill_color: &str) -> Self {
        Self {
            fill_color: fill_color.to_string(),
            weight: 1.0,
            opacity: 1.0,
            color: "white".into(),
            dash_array: "3".into(),
            fill_opacity: 0.6,
        }
    }

    /// 未訪問: 透明・グレー枠
    pub fn unvisited() -> Self {
        Self {
            fill_color: "transparent".into(),
            weight: 0.5,
            opacity: 1.0,
            color: "#ccc".into(),
            dash_array: "3".into(),
            fill_opacity: 0.0,
        }
    }

    pub fn for_match(visited: Option<VisitedRegion>) -> Self {
        match visited {
            Some(v) => Self::visited(v.color()),
            None => Self::unvisited(),
        }
    }
}

/// モード単位の地域マッチャ
#[derive(Debug, Clone, Copy)]
pub struct RegionMatcher<'a> {
    mode: Mode,
    trips: &'a [TripRecord],
    mapping: &'a RegionMapping,
    names: NameChain,
}

impl<'a> RegionMatcher<'a> {
    pub fn new(mode: Mode, catalog: &'a TripCatalog, mapping: &'a RegionMapping) -> Self {
        Self {
            mode,
            trips: catalog.trips(mode),
            mapping,
            names: NameChain::default(),
        }
    }

    /// 地域名候補からカタログ順に最初の一致を探す
    pub fn match_names(&self, geo_names: &[&str]) -> Option<VisitedRegion> {
        if geo_names.is_empty() {
            return None;
        }

        self.trips
            .iter()
            .position(|trip| self.trip_matches(trip, geo_names))
            .map(|trip_index| VisitedRegion {
                trip_index,
                trip_id: self.trips[trip_index].id,
            })
    }

    fn trip_matches(&self, trip: &TripRecord, geo_names: &[&str]) -> bool {
        if let Some(aliases) = self.mapping.aliases(self.mode, &trip.name) {
            let matched = geo_names.iter().any(|name| {
                aliases
                    .iter()
                    .filter(|alias| !alias.is_empty())
                    .any(|alias| name.contains(alias.as_str()) || alias.contains(name))
            });
            if matched {
                return true;
            }
        }

        // 国際版は英語名同士なので部分一致で十分安全
        self.mode == Mode::Intl && geo_names.iter().any(|name| trip.name.contains(name))
    }

    /// プロパティから地域名を抽出して判定
    pub fn is_visited(&self, props: Option<&JsonObject>) -> Option<VisitedRegion> {
        let geo_names = self.names.all_names(props);
        let visited = self.match_names(&geo_names);

        if let Some(v) = visited {
            log::debug!(
                "[{}] region {:?} -> trip #{} ({})",
                self.mode,
                self.names.primary_name(props).unwrap_or_default(),
                v.trip_id,
                v.color()
            );
        }

        visited
    }

    /// フィーチャ1件分のスタイル
    pub fn style_for(&self, feature: &Feature) -> RegionStyle {
        RegionStyle::for_match(self.is_visited(feature.properties.as_ref()))
    }

    /// 地域名（表示用）
    pub fn region_name<'f>(&self, feature: &'f Feature) -> Option<&'f str> {
        self.names.primary_name(feature.properties.as_ref())
    }
}

/// 単発判定: (一致したか, 色インデックス)
///
/// 一致しない場合の色インデックスは `None`。
pub fn is_visited(
    mode: Mode,
    props: Option<&JsonObject>,
    catalog: &TripCatalog,
    mapping: &RegionMapping,
) -> (bool, Option<usize>) {
    match RegionMatcher::new(mode, catalog, mapping).is_visited(props) {
        Some(v) => (true, Some(v.trip_index)),
        None => (false, None),
    }
}
