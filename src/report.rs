//! CLI向けの集計・検証レポート

use crate::dates::DateRange;
use geojson::FeatureCollection;
use std::collections::HashSet;
use travel_diary_common::{color_for_index, Mode, RegionMapping, RegionMatcher, TripCatalog};

/// 旅行一覧の1行
#[derive(Debug, Clone, PartialEq)]
pub struct TripRow {
    pub index: usize,
    pub id: u32,
    pub name: String,
    pub date: String,
    pub days: Option<i64>,
    pub color: &'static str,
}

pub fn trip_rows(catalog: &TripCatalog, mode: Mode) -> Vec<TripRow> {
    catalog
        .trips(mode)
        .iter()
        .enumerate()
        .map(|(index, trip)| TripRow {
            index,
            id: trip.id,
            name: trip.name.clone(),
            date: trip.date.clone(),
            days: DateRange::parse(&trip.date).map(|r| r.days()),
            color: color_for_index(index),
        })
        .collect()
}

/// 検証結果の重要度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub severity: Severity,
    pub mode: Mode,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub issues: Vec<Issue>,
}

impl CheckReport {
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    fn push(&mut self, severity: Severity, mode: Mode, message: String) {
        self.issues.push(Issue {
            severity,
            mode,
            message,
        });
    }
}

/// カタログと地域エイリアスの整合性チェック
///
/// - マッピングが参照する旅行名がカタログにない → 警告
/// - 同一モード内のID重複・座標範囲外 → エラー
/// - 期間がパースできない → 警告
pub fn check(catalog: &TripCatalog, mapping: &RegionMapping) -> CheckReport {
    let mut report = CheckReport::default();

    for mode in Mode::ALL {
        for name in mapping.orphans(mode, catalog) {
            report.push(
                Severity::Warning,
                mode,
                format!("マッピング '{}' に対応する旅行がありません", name),
            );
        }

        let mut seen = HashSet::new();
        for trip in catalog.trips(mode) {
            if !seen.insert(trip.id) {
                report.push(Severity::Error, mode, format!("ID重複: #{}", trip.id));
            }
            if !trip.position().is_valid() {
                report.push(
                    Severity::Error,
                    mode,
                    format!("座標が範囲外: #{} ({}, {})", trip.id, trip.lat, trip.lng),
                );
            }
            if DateRange::parse(&trip.date).is_none() {
                report.push(
                    Severity::Warning,
                    mode,
                    format!("期間を解釈できません: #{} '{}'", trip.id, trip.date),
                );
            }
        }
    }

    report
}

/// 塗り分けされる地域
#[derive(Debug, Clone, PartialEq)]
pub struct PaintedRegion {
    pub region: String,
    pub trip_name: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct RegionReport {
    pub total_features: usize,
    pub painted: Vec<PaintedRegion>,
    /// どの地域にも一致しなかった旅行
    pub unmatched_trips: Vec<String>,
}

pub fn region_report(
    mode: Mode,
    catalog: &TripCatalog,
    mapping: &RegionMapping,
    geometry: &FeatureCollection,
) -> RegionReport {
    let matcher = RegionMatcher::new(mode, catalog, mapping);
    let trips = catalog.trips(mode);
    let mut matched_trips = HashSet::new();
    let mut painted = Vec::new();

    for feature in &geometry.features {
        let Some(visited) = matcher.is_visited(feature.properties.as_ref()) else {
            continue;
        };
        matched_trips.insert(visited.trip_index);
        painted.push(PaintedRegion {
            region: matcher.region_name(feature).unwrap_or("?").to_string(),
            trip_name: trips[visited.trip_index].name.clone(),
            color: visited.color(),
        });
    }

    let unmatched_trips = trips
        .iter()
        .enumerate()
        .filter(|(index, _)| !matched_trips.contains(index))
        .map(|(_, trip)| trip.name.clone())
        .collect();

    RegionReport {
        total_features: geometry.features.len(),
        painted,
        unmatched_trips,
    }
}
