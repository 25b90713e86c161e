//! 旅行カタログ
//!
//! モードごとの旅行レコード一覧。起動時に一度だけ読み込み、以降は変更しない。
//! カタログ内の順序がそのままマーカー色・地域色のインデックスになる。

use crate::error::Result;
use crate::types::{Mode, TripRecord};
use serde::{Deserialize, Serialize};

/// モード別の旅行カタログ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripCatalog {
    #[serde(default)]
    pub intl: Vec<TripRecord>,
    #[serde(default)]
    pub domestic: Vec<TripRecord>,
}

impl TripCatalog {
    /// JSONファイルから読み込み（非WASM環境のみ）
    #[cfg(not(feature = "wasm"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        Ok(catalog)
    }

    pub fn trips(&self, mode: Mode) -> &[TripRecord] {
        match mode {
            Mode::Intl => &self.intl,
            Mode::Domestic => &self.domestic,
        }
    }

    pub fn get(&self, mode: Mode, id: u32) -> Option<&TripRecord> {
        self.trips(mode).iter().find(|t| t.id == id)
    }

    /// カタログ内の位置（色インデックス）
    pub fn index_of(&self, mode: Mode, id: u32) -> Option<usize> {
        self.trips(mode).iter().position(|t| t.id == id)
    }

    pub fn contains_name(&self, mode: Mode, name: &str) -> bool {
        self.trips(mode).iter().any(|t| t.name == name)
    }

    /// 組み込みの旅行データ
    pub fn builtin() -> Self {
        Self {
            intl: vec![TripRecord {
                id: 1,
                name: "Spain - Barcelona & Madrid & Seville".into(),
                date: "2025-10-12 -- 2025-10-24".into(),
                desc: Some("小姚小朱第一次国外蜜月旅行～～.".into()),
                lat: 40.4167,
                lng: -3.7033,
                photo: "2025Spain.jpg".into(),
            }],
            domestic: vec![
                TripRecord {
                    id: 1,
                    name: "China - Shanghai".into(),
                    date: "2025-08-10 -- 2025-08-11".into(),
                    desc: Some("在一起的旅行，上海外滩的大明路上～～～.".into()),
                    lat: 31.2304,
                    lng: 121.4737,
                    photo: "2025Shanghai.jpg".into(),
                },
                TripRecord {
                    id: 2,
                    name: "China - Yangzhou".into(),
                    date: "2025-09-20 -- 2025-09-22".into(),
                    desc: Some("猪贱贱和猪宝贝担任起了实验室旅行团的导游职责～～～".into()),
                    lat: 32.3932,
                    lng: 119.4085,
                    photo: "2025Yangzhou.jpg".into(),
                },
                TripRecord {
                    id: 3,
                    name: "China - Ningbo".into(),
                    date: "2025-09-27 -- 2025-09-29".into(),
                    desc: Some("参加国家工业软件大会，顺便游览了宁波～～～".into()),
                    lat: 29.8750,
                    lng: 121.5497,
                    photo: "2025Ningbo.jpg".into(),
                },
                TripRecord {
                    id: 4,
                    name: "China - Xiamen".into(),
                    date: "2025-10-29 -- 2025-10-31".into(),
                    desc: Some("参加MIND会议，顺便游览了厦门～～～".into()),
                    lat: 24.4467,
                    lng: 118.0800,
                    photo: "2025Xiamen.jpg".into(),
                },
                TripRecord {
                    id: 5,
                    name: "China - Nanjing".into(),
                    date: "2025-12-09 -- 2025-12-12".into(),
                    desc: Some(
                        "猪贱贱在北京kuku工作，猪宝贝在杭州kuku工作，中间放松一下啦～～～".into(),
                    ),
                    lat: 32.0603,
                    lng: 118.7969,
                    photo: "2025Nanjing.jpg".into(),
                },
            ],
        }
    }
}
