use clap::{Parser, Subcommand};
use std::path::PathBuf;
use travel_diary_common::Mode;

#[derive(Parser)]
#[command(name = "travel-diary")]
#[command(about = "旅行日記マップのデータ管理ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 旅行カタログJSON（設定・組み込みデータより優先）
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 旅行一覧を表示
    Trips {
        /// 表示モード (intl/domestic)
        #[arg(short, long, default_value = "intl")]
        mode: Mode,
    },

    /// カタログと地域エイリアスの整合性を検証
    Check,

    /// 境界データを読み込み、塗り分けされる地域を表示
    Regions {
        /// 表示モード (intl/domestic)
        #[arg(short, long, default_value = "intl")]
        mode: Mode,

        /// ローカルのGeoJSONファイル（省略時は設定のURLから取得）
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// キャッシュを無視して再取得
        #[arg(long)]
        refresh: bool,
    },

    /// 詳細パネルの表示内容を確認
    Details {
        /// 表示モード (intl/domestic)
        #[arg(short, long, default_value = "intl")]
        mode: Mode,

        /// 旅行ID
        #[arg(long)]
        id: u32,
    },

    /// 設定を表示/編集
    Config {
        /// 世界の境界データURLを設定
        #[arg(long)]
        set_world_url: Option<String>,

        /// 国内の境界データURLを設定
        #[arg(long)]
        set_domestic_url: Option<String>,

        /// 旅行カタログJSONのパスを設定
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },

    /// 境界データキャッシュ管理
    Cache {
        /// キャッシュを削除
        #[arg(long)]
        clear: bool,
    },
}
