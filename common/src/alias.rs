//! 地域エイリアス（RegionMapping）
//!
//! 旅行名 → 地図データ側の地域名候補 の対応表。
//! 例: "China - Yangzhou" は省単位で描画されるので "江苏" 等に対応付ける。

use crate::catalog::TripCatalog;
use crate::error::Result;
use crate::types::Mode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// モード別の地域エイリアス定義
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionMapping {
    /// 国際版: 国名
    #[serde(default)]
    pub intl: HashMap<String, Vec<String>>,
    /// 国内版: 省名
    #[serde(default)]
    pub domestic: HashMap<String, Vec<String>>,
}

impl RegionMapping {
    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let mapping: Self = serde_json::from_str(json)?;
        Ok(mapping)
    }

    fn table(&self, mode: Mode) -> &HashMap<String, Vec<String>> {
        match mode {
            Mode::Intl => &self.intl,
            Mode::Domestic => &self.domestic,
        }
    }

    /// 旅行名に対するエイリアス（定義順）
    pub fn aliases(&self, mode: Mode, trip_name: &str) -> Option<&[String]> {
        self.table(mode).get(trip_name).map(Vec::as_slice)
    }

    /// カタログに存在しない旅行名を参照しているエントリ（ソート済み）
    pub fn orphans(&self, mode: Mode, catalog: &TripCatalog) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .table(mode)
            .keys()
            .filter(|name| !catalog.contains_name(mode, name))
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names
    }

    /// 設定をマージ（後から追加した設定が優先）
    pub fn merge(&mut self, other: &RegionMapping) {
        self.intl.extend(other.intl.clone());
        self.domestic.extend(other.domestic.clone());
    }

    /// 組み込みの対応表
    pub fn builtin() -> Self {
        let mut mapping = Self::default();

        mapping.insert(Mode::Intl, "Spain - Barcelona & Madrid & Seville", &["Spain"]);
        mapping.insert(Mode::Intl, "Japan - Kyoto", &["Japan"]);
        mapping.insert(Mode::Intl, "France - Paris", &["France"]);

        // 地図は省単位なので、都市は所属する省に対応付ける
        mapping.insert(Mode::Domestic, "China - Beijing", &["Beijing", "北京", "北京市"]);
        mapping.insert(Mode::Domestic, "China - Shanghai", &["Shanghai", "上海", "上海市"]);
        mapping.insert(Mode::Domestic, "China - Yangzhou", &["Jiangsu", "江苏", "江苏省"]);
        mapping.insert(Mode::Domestic, "China - Ningbo", &["Zhejiang", "浙江", "浙江省"]);
        mapping.insert(Mode::Domestic, "China - Xiamen", &["Fujian", "福建", "福建省"]);
        mapping.insert(Mode::Domestic, "China - Nanjing", &["Jiangsu", "江苏", "江苏省"]);
        mapping.insert(Mode::Domestic, "China - Taiwan", &["Taiwan", "台湾", "台湾省"]);
        mapping.insert(
            Mode::Domestic,
            "China - Hong Kong",
            &["Hong Kong", "香港", "香港特别行政区"],
        );
        mapping.insert(Mode::Domestic, "China - Macau", &["Macau", "澳门", "澳门特别行政区"]);

        mapping
    }

    fn insert(&mut self, mode: Mode, trip_name: &str, aliases: &[&str]) {
        let table = match mode {
            Mode::Intl => &mut self.intl,
            Mode::Domestic => &mut self.domestic,
        };
        table.insert(
            trip_name.to_string(),
            aliases.iter().map(|a| a.to_string()).collect(),
        );
    }
}
