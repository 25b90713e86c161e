use clap::Parser;
use travel_diary::{cli, config, error, geometry, report};
use cli::{Cli, Commands};
use config::Config;
use error::{Result, TravelDiaryError};
use geometry::cache::GeometryDiskCache;
use report::Severity;
use travel_diary_common::{Mode, TripDetails};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = pretty_env_logger::formatted_builder();
    logger.filter_level(if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });
    if let Ok(filters) = std::env::var("RUST_LOG") {
        logger.parse_filters(&filters);
    }
    logger.init();

    let config = Config::load()?;
    let mapping = config.region_mapping();

    match cli.command {
        Commands::Trips { mode } => {
            let catalog = config.catalog(cli.catalog.as_deref())?;
            let rows = report::trip_rows(&catalog, mode);

            println!("🗺  travel-diary - {} ({}件)\n", mode, rows.len());
            for row in rows {
                let days = row
                    .days
                    .map(|d| format!("{}日", d))
                    .unwrap_or_else(|| "?".into());
                println!(
                    "  {:>2}. [{}] #{} {}  {} ({})",
                    row.index + 1,
                    row.color,
                    row.id,
                    row.name,
                    row.date,
                    days
                );
            }
        }

        Commands::Check => {
            let catalog = config.catalog(cli.catalog.as_deref())?;
            let result = report::check(&catalog, &mapping);

            for issue in &result.issues {
                match issue.severity {
                    Severity::Warning => log::warn!("[{}] {}", issue.mode, issue.message),
                    Severity::Error => log::error!("[{}] {}", issue.mode, issue.message),
                }
            }

            if result.has_errors() {
                return Err(TravelDiaryError::InvalidCatalog(format!(
                    "{}件の問題",
                    result.issues.len()
                )));
            }
            println!("✔ カタログ検証OK（警告 {}件）", result.issues.len());
        }

        Commands::Regions { mode, file, refresh } => {
            let catalog = config.catalog(cli.catalog.as_deref())?;

            let geometry = match file {
                Some(path) => geometry::load_file(&path)?,
                None => {
                    let source = config.geometry_source();
                    let cache = if config.cache_geometry {
                        GeometryDiskCache::default_dir().map(GeometryDiskCache::new)
                    } else {
                        None
                    };
                    geometry::fetch(source.url_for(mode), cache.as_ref(), refresh).await?
                }
            };

            let result = report::region_report(mode, &catalog, &mapping, &geometry);
            println!(
                "📍 {} - {}地域中 {}地域を塗り分け\n",
                mode,
                result.total_features,
                result.painted.len()
            );
            for region in &result.painted {
                println!("  {} {} ← {}", region.color, region.region, region.trip_name);
            }
            if !result.unmatched_trips.is_empty() {
                println!("\n一致する地域がない旅行:");
                for name in &result.unmatched_trips {
                    println!("  - {}", name);
                }
            }
        }

        Commands::Details { mode, id } => {
            let catalog = config.catalog(cli.catalog.as_deref())?;
            let trip = catalog
                .get(mode, id)
                .ok_or_else(|| TravelDiaryError::TripNotFound {
                    mode: mode.to_string(),
                    id,
                })?;

            let details = TripDetails::from_trip(trip, mode, &config.photo_bases());
            println!("{}", serde_json::to_string_pretty(&details)?);
        }

        Commands::Config { set_world_url, set_domestic_url, set_catalog, show } => {
            let mut config = config;
            let changed =
                set_world_url.is_some() || set_domestic_url.is_some() || set_catalog.is_some();

            if let Some(url) = set_world_url {
                config.set_geometry_url(Mode::Intl, url);
            }
            if let Some(url) = set_domestic_url {
                config.set_geometry_url(Mode::Domestic, url);
            }
            if let Some(path) = set_catalog {
                config.catalog_path = Some(path);
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                let source = config.geometry_source();
                let bases = config.photo_bases();
                println!("設定:");
                println!("  世界の境界データ: {}", source.world_url);
                println!("  国内の境界データ: {}", source.domestic_url);
                println!("  写真パス(intl): {}", bases.intl);
                println!("  写真パス(domestic): {}", bases.domestic);
                println!(
                    "  カタログ: {}",
                    config
                        .catalog_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "組み込み".into())
                );
                println!(
                    "  境界データキャッシュ: {}",
                    if config.cache_geometry { "有効" } else { "無効" }
                );
            }
        }

        Commands::Cache { clear } => {
            let Some(dir) = GeometryDiskCache::default_dir() else {
                return Err(TravelDiaryError::Config(
                    "キャッシュディレクトリが見つかりません".into(),
                ));
            };
            let cache = GeometryDiskCache::new(dir);

            if clear {
                match cache.clear()? {
                    true => println!("✔ キャッシュを削除しました: {}", cache.dir().display()),
                    false => println!("キャッシュが存在しません"),
                }
            } else {
                let entries = cache.entries();
                println!("キャッシュ情報:");
                println!("  パス: {}", cache.dir().display());
                println!("  件数: {}", entries.len());
                for entry in entries {
                    println!("  - {} ({} bytes, {})", entry.url, entry.byte_len, entry.fetched_at);
                }
            }
        }
    }

    Ok(())
}
