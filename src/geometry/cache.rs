//! 境界データのディスクキャッシュ
//!
//! URLのSHA-256をキーにして取得済みGeoJSONを保存し、
//! 数MBある境界データの再ダウンロードを省く。

use crate::error::Result;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const INDEX_FILE_NAME: &str = "index.json";

/// キャッシュ索引
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheIndex {
    /// バージョン（互換性チェック用）
    version: u32,
    /// URLハッシュ → エントリ
    entries: HashMap<String, CacheEntry>,
}

/// キャッシュエントリ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub url: String,
    pub byte_len: u64,
    /// 取得日時（RFC3339）
    pub fetched_at: String,
}

impl CacheIndex {
    const CURRENT_VERSION: u32 = 1;

    fn load(dir: &Path) -> Self {
        let index_path = dir.join(INDEX_FILE_NAME);
        let file = match File::open(&index_path) {
            Ok(f) => f,
            Err(_) => return Self::default(),
        };

        match serde_json::from_reader::<_, CacheIndex>(BufReader::new(file)) {
            Ok(index) if index.version == Self::CURRENT_VERSION => index,
            Ok(_) => {
                log::warn!("キャッシュバージョン不一致、再生成します");
                Self::default()
            }
            Err(e) => {
                log::warn!("キャッシュインデックスが壊れています、再生成します: {}", e);
                Self::default()
            }
        }
    }

    fn save(&self, dir: &Path) -> Result<()> {
        let file = File::create(dir.join(INDEX_FILE_NAME))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}

impl Default for CacheIndex {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            entries: HashMap::new(),
        }
    }
}

/// URLのキャッシュキー
pub fn url_hash(url: &str) -> String {
    hex::encode(Sha256::digest(url.as_bytes()))
}

/// GeoJSONキャッシュディレクトリ
#[derive(Debug, Clone)]
pub struct GeometryDiskCache {
    dir: PathBuf,
}

impl GeometryDiskCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// ユーザーキャッシュ配下の既定ディレクトリ
    pub fn default_dir() -> Option<PathBuf> {
        dirs::cache_dir().map(|d| d.join("travel-diary").join("geometry"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn data_path(&self, url: &str) -> PathBuf {
        self.dir.join(format!("{}.geojson", url_hash(url)))
    }

    /// キャッシュを取得（なければNone）
    pub fn get(&self, url: &str) -> Option<String> {
        let index = CacheIndex::load(&self.dir);
        if !index.entries.contains_key(&url_hash(url)) {
            return None;
        }
        std::fs::read_to_string(self.data_path(url)).ok()
    }

    /// キャッシュに保存
    pub fn insert(&self, url: &str, text: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.data_path(url), text)?;

        let mut index = CacheIndex::load(&self.dir);
        index.entries.insert(
            url_hash(url),
            CacheEntry {
                url: url.to_string(),
                byte_len: text.len() as u64,
                fetched_at: chrono::Utc::now().to_rfc3339(),
            },
        );
        index.save(&self.dir)
    }

    /// 保存済みエントリ一覧（URL順）
    pub fn entries(&self) -> Vec<CacheEntry> {
        let mut entries: Vec<CacheEntry> =
            CacheIndex::load(&self.dir).entries.into_values().collect();
        entries.sort_by(|a, b| a.url.cmp(&b.url));
        entries
    }

    /// キャッシュを全削除（存在しなければfalse）
    pub fn clear(&self) -> Result<bool> {
        if !self.dir.exists() {
            return Ok(false);
        }
        std::fs::remove_dir_all(&self.dir)?;
        Ok(true)
    }
}
