//! 境界データキャッシュテスト
//!
//! GeoJSONディスクキャッシュの動作を検証

use travel_diary::geometry::cache::GeometryDiskCache;
use tempfile::tempdir;

const WORLD_URL: &str = "https://example.com/world.geo.json";
const CHINA_URL: &str = "https://example.com/china.json";

/// 空のキャッシュ
#[test]
fn test_cache_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    let cache = GeometryDiskCache::new(dir.path().join("geometry"));

    assert!(cache.get(WORLD_URL).is_none());
    assert!(cache.entries().is_empty());
}

/// 保存と読み込み
#[test]
fn test_cache_insert_and_get() {
    let dir = tempdir().expect("Failed to create temp dir");
    let cache = GeometryDiskCache::new(dir.path().join("geometry"));

    cache
        .insert(WORLD_URL, r#"{"type":"FeatureCollection","features":[]}"#)
        .expect("キャッシュ保存失敗");

    let text = cache.get(WORLD_URL).expect("キャッシュが見つからない");
    assert!(text.contains("FeatureCollection"));
    assert!(cache.get(CHINA_URL).is_none());

    let entries = cache.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].url, WORLD_URL);
    assert_eq!(entries[0].byte_len, text.len() as u64);
}

/// 同じURLは上書き
#[test]
fn test_cache_overwrite() {
    let dir = tempdir().expect("Failed to create temp dir");
    let cache = GeometryDiskCache::new(dir.path());

    cache.insert(CHINA_URL, "old").unwrap();
    cache.insert(CHINA_URL, "new").unwrap();
    cache.insert(WORLD_URL, "world").unwrap();

    assert_eq!(cache.get(CHINA_URL).as_deref(), Some("new"));
    let entries = cache.entries();
    assert_eq!(entries.len(), 2);
    // URL順
    assert_eq!(entries[0].url, CHINA_URL);
}

/// バージョン不一致の索引は無視される
#[test]
fn test_cache_version_mismatch() {
    let dir = tempdir().expect("Failed to create temp dir");
    let cache = GeometryDiskCache::new(dir.path());

    cache.insert(WORLD_URL, "world").unwrap();
    std::fs::write(
        dir.path().join("index.json"),
        r#"{"version": 999, "entries": {}}"#,
    )
    .unwrap();

    assert!(cache.get(WORLD_URL).is_none());
}

/// 削除
#[test]
fn test_cache_clear() {
    let dir = tempdir().expect("Failed to create temp dir");
    let cache = GeometryDiskCache::new(dir.path().join("geometry"));

    assert!(!cache.clear().unwrap());

    cache.insert(WORLD_URL, "world").unwrap();
    assert!(cache.clear().unwrap());
    assert!(cache.get(WORLD_URL).is_none());
}

/// 壊れたインデックスは捨てて再生成
#[test]
fn test_cache_corrupt_index_is_rebuilt() {
    let dir = tempdir().expect("Failed to create temp dir");
    let cache_dir = dir.path().join("geometry");
    let cache = GeometryDiskCache::new(cache_dir.clone());

    cache.insert(WORLD_URL, "world").unwrap();
    std::fs::write(cache_dir.join("index.json"), "{not json").unwrap();

    assert!(cache.get(WORLD_URL).is_none());
    assert!(cache.entries().is_empty());

    cache.insert(CHINA_URL, "china").unwrap();
    assert_eq!(cache.get(CHINA_URL).as_deref(), Some("china"));
}
