//! 地域塗り分けレポートテスト
//!
//! ローカルGeoJSONを読み込んで組み込みカタログと照合する

use tempfile::tempdir;
use travel_diary::{geometry, report};
use travel_diary_common::{Mode, RegionMapping, TripCatalog};

const PROVINCES: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature", "properties": {"id": "31", "name": "上海"}, "geometry": null},
        {"type": "Feature", "properties": {"id": "32", "name": "江苏"}, "geometry": null},
        {"type": "Feature", "properties": {"id": "33", "name": "浙江"}, "geometry": null},
        {"type": "Feature", "properties": {"id": "11", "name": "北京"}, "geometry": null},
        {"type": "Feature", "properties": {"id": "54", "name": "西藏"}, "geometry": null},
        {"type": "Feature", "properties": {"id": "99"}, "geometry": null}
    ]
}"#;

const COUNTRIES: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature", "id": "ESP", "properties": {"name": "Spain"}, "geometry": null},
        {"type": "Feature", "id": "FRA", "properties": {"name": "France"}, "geometry": null},
        {"type": "Feature", "id": "JPN", "properties": {"name": "Japan"}, "geometry": null}
    ]
}"#;

#[test]
fn test_domestic_report() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("china.json");
    std::fs::write(&path, PROVINCES).unwrap();

    let fc = geometry::load_file(&path).expect("GeoJSON読込失敗");
    let result = report::region_report(
        Mode::Domestic,
        &TripCatalog::builtin(),
        &RegionMapping::builtin(),
        &fc,
    );

    assert_eq!(result.total_features, 6);
    let painted: Vec<(&str, &str)> = result
        .painted
        .iter()
        .map(|p| (p.region.as_str(), p.trip_name.as_str()))
        .collect();
    // 北京はマッピングにあるがカタログにないので塗らない
    assert_eq!(
        painted,
        vec![
            ("上海", "China - Shanghai"),
            ("江苏", "China - Yangzhou"),
            ("浙江", "China - Ningbo"),
        ]
    );
    assert_eq!(result.painted[1].color, "#4ECDC4");
    // 南京は江蘇を揚州に取られる、厦門は福建がない
    assert_eq!(result.unmatched_trips, vec!["China - Xiamen", "China - Nanjing"]);
}

#[test]
fn test_intl_report() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("world.json");
    std::fs::write(&path, COUNTRIES).unwrap();

    let fc = geometry::load_file(&path).expect("GeoJSON読込失敗");
    let result = report::region_report(
        Mode::Intl,
        &TripCatalog::builtin(),
        &RegionMapping::builtin(),
        &fc,
    );

    assert_eq!(result.painted.len(), 1);
    assert_eq!(result.painted[0].region, "Spain");
    assert_eq!(result.painted[0].color, "#FF6B6B");
    assert!(result.unmatched_trips.is_empty());
}
