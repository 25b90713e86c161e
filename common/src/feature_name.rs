//! GeoJSONフィーチャの地域名抽出
//!
//! データソースごとにプロパティのスキーマが異なるため、
//! 候補キーを順に試す抽出戦略のチェーンとして表現する。

use geojson::JsonObject;

/// 地域名の抽出戦略
pub type NameStrategy = fn(&JsonObject) -> Option<&str>;

/// 文字列プロパティを取得（空文字・非文字列は欠損扱い）
pub fn string_property<'a>(props: &'a JsonObject, key: &str) -> Option<&'a str> {
    props
        .get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.trim().is_empty())
}

fn lower_name(props: &JsonObject) -> Option<&str> {
    string_property(props, "name")
}

fn upper_name(props: &JsonObject) -> Option<&str> {
    string_property(props, "NAME")
}

fn title_name(props: &JsonObject) -> Option<&str> {
    string_property(props, "Name")
}

// 中国語名（一部の省界データ）
fn chinese_name(props: &JsonObject) -> Option<&str> {
    string_property(props, "chn_name")
}

/// 抽出戦略の順序付きリスト
#[derive(Clone, Copy)]
pub struct NameChain {
    strategies: &'static [NameStrategy],
}

impl NameChain {
    pub const DEFAULT_STRATEGIES: &'static [NameStrategy] =
        &[lower_name, upper_name, title_name, chinese_name];

    pub const fn new(strategies: &'static [NameStrategy]) -> Self {
        Self { strategies }
    }

    /// 最初に見つかった地域名
    pub fn primary_name<'a>(&self, props: Option<&'a JsonObject>) -> Option<&'a str> {
        let props = props?;
        self.strategies.iter().find_map(|strategy| strategy(props))
    }

    /// 全戦略の結果（戦略順、欠損は除外）
    pub fn all_names<'a>(&self, props: Option<&'a JsonObject>) -> Vec<&'a str> {
        match props {
            Some(props) => self
                .strategies
                .iter()
                .filter_map(|strategy| strategy(props))
                .collect(),
            None => Vec::new(),
        }
    }
}

impl Default for NameChain {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STRATEGIES)
    }
}

impl std::fmt::Debug for NameChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameChain")
            .field("strategies", &self.strategies.len())
            .finish()
    }
}
