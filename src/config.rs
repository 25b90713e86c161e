use crate::error::{Result, TravelDiaryError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use travel_diary_common::{GeometrySource, Mode, PhotoBasePaths, RegionMapping, TripCatalog};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub world_geometry_url: Option<String>,
    pub domestic_geometry_url: Option<String>,
    pub intl_photo_base: Option<String>,
    pub domestic_photo_base: Option<String>,
    pub catalog_path: Option<PathBuf>,
    pub cache_geometry: bool,
    /// 組み込みの地域エイリアスへの追加・上書き
    pub region_aliases: Option<RegionMapping>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world_geometry_url: None,
            domestic_geometry_url: None,
            intl_photo_base: None,
            domestic_photo_base: None,
            catalog_path: None,
            cache_geometry: true,
            region_aliases: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み（ファイルがなければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| TravelDiaryError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("travel-diary").join("config.json"))
    }

    /// 設定を反映した取得元
    pub fn geometry_source(&self) -> GeometrySource {
        let mut source = GeometrySource::default();
        if let Some(url) = &self.world_geometry_url {
            source.world_url = url.clone();
        }
        if let Some(url) = &self.domestic_geometry_url {
            source.domestic_url = url.clone();
        }
        source
    }

    pub fn photo_bases(&self) -> PhotoBasePaths {
        let mut bases = PhotoBasePaths::default();
        if let Some(base) = &self.intl_photo_base {
            bases.intl = base.clone();
        }
        if let Some(base) = &self.domestic_photo_base {
            bases.domestic = base.clone();
        }
        bases
    }

    /// カタログを読み込み（引数 > 設定 > 組み込み の順）
    pub fn catalog(&self, override_path: Option<&Path>) -> Result<TripCatalog> {
        let path = override_path.or(self.catalog_path.as_deref());
        match path {
            Some(path) if !path.exists() => {
                Err(TravelDiaryError::FileNotFound(path.display().to_string()))
            }
            Some(path) => {
                log::debug!("loading catalog from {}", path.display());
                Ok(TripCatalog::from_file(path)?)
            }
            None => Ok(TripCatalog::builtin()),
        }
    }

    /// 地域エイリアス（組み込み + 設定の上書き）
    pub fn region_mapping(&self) -> RegionMapping {
        let mut mapping = RegionMapping::builtin();
        if let Some(custom) = &self.region_aliases {
            mapping.merge(custom);
        }
        mapping
    }

    pub fn set_geometry_url(&mut self, mode: Mode, url: String) {
        match mode {
            Mode::Intl => self.world_geometry_url = Some(url),
            Mode::Domestic => self.domestic_geometry_url = Some(url),
        }
    }
}
