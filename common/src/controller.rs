//! ページ全体のコントローラ
//!
//! 外部イベント（ボタン・マーカークリック、GeoJSON取得完了、曲の終了）を
//! `Message` として1件ずつ処理し、ホストが実行すべき操作を `Effect` で返す。
//! 処理はすべて単一スレッドで完結し、次のメッセージまでに状態更新が終わる。

use crate::alias::RegionMapping;
use crate::audio::{AudioCommand, AudioController};
use crate::catalog::TripCatalog;
use crate::details::{PhotoBasePaths, TripDetails};
use crate::geometry::{GeometryCache, GeometrySource};
use crate::matcher::{RegionMatcher, RegionStyle};
use crate::palette::color_for_index;
use crate::types::{LatLng, Mode, Track, TripRecord, Viewport};
use geojson::FeatureCollection;
use std::collections::HashSet;
use std::sync::Arc;

/// コントローラへの入力
#[derive(Debug, Clone)]
pub enum Message {
    /// ページ読込完了
    Init,
    /// モード切替ボタン
    SelectMode(Mode),
    /// 境界データ取得成功
    GeometryLoaded {
        mode: Mode,
        geometry: FeatureCollection,
    },
    /// 境界データ取得失敗
    GeometryFailed { mode: Mode, error: String },
    /// 地図上のマーカー
    MarkerClicked(u32),
    /// 一覧の項目
    ListItemClicked(u32),
    /// 詳細パネルを閉じる
    CloseDetails,
    /// ウェルカム画面クリック（初回ユーザー操作）
    WelcomeClicked,
    /// 曲の再生終了
    TrackEnded,
    /// `play()` が拒否された（自動再生ポリシー）
    PlaybackRejected(String),
}

/// マーカー1件
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub trip_id: u32,
    pub position: LatLng,
    pub color: &'static str,
}

/// 一覧の項目
#[derive(Debug, Clone, PartialEq)]
pub struct TripListEntry {
    pub trip_id: u32,
    pub name: String,
    pub date: String,
}

/// ホスト側で実行する操作
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    CreateMap(Viewport),
    SetActiveMode(Mode),
    SetView { viewport: Viewport, animate: bool },
    FlyTo(Viewport),
    RenderMarkers(Vec<MarkerSpec>),
    RenderTripList(Vec<TripListEntry>),
    RemoveRegions,
    FetchGeometry { mode: Mode, url: String },
    PaintRegions {
        mode: Mode,
        geometry: Arc<FeatureCollection>,
        styles: Vec<RegionStyle>,
    },
    ShowDetails(TripDetails),
    HideDetails,
    HideWelcome,
    Audio(AudioCommand),
}

/// アプリケーションの状態
#[derive(Debug, Clone, Default)]
pub struct AppState {
    mode: Mode,
    selected: Option<u32>,
    welcome_visible: bool,
    geometry: GeometryCache,
    pending: HashSet<Mode>,
    audio: AudioController,
}

impl AppState {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn welcome_visible(&self) -> bool {
        self.welcome_visible
    }

    pub fn geometry(&self) -> &GeometryCache {
        &self.geometry
    }

    pub fn is_fetching(&self, mode: Mode) -> bool {
        self.pending.contains(&mode)
    }
}

/// 旅行日記ページのコントローラ
#[derive(Debug, Clone)]
pub struct Controller {
    catalog: TripCatalog,
    mapping: RegionMapping,
    photo_bases: PhotoBasePaths,
    sources: GeometrySource,
    state: AppState,
}

impl Controller {
    pub fn new(
        catalog: TripCatalog,
        mapping: RegionMapping,
        photo_bases: PhotoBasePaths,
        sources: GeometrySource,
        playlist: Vec<Track>,
    ) -> Self {
        Self {
            catalog,
            mapping,
            photo_bases,
            sources,
            state: AppState {
                welcome_visible: true,
                audio: AudioController::new(playlist),
                ..AppState::default()
            },
        }
    }

    /// 組み込みデータで構築
    pub fn builtin() -> Self {
        Self::new(
            TripCatalog::builtin(),
            RegionMapping::builtin(),
            PhotoBasePaths::default(),
            GeometrySource::default(),
            AudioController::builtin_playlist(),
        )
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn matcher(&self, mode: Mode) -> RegionMatcher<'_> {
        RegionMatcher::new(mode, &self.catalog, &self.mapping)
    }

    /// メッセージを1件処理
    pub fn handle(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::Init => self.init(),
            Message::SelectMode(mode) => self.select_mode(mode),
            Message::GeometryLoaded { mode, geometry } => self.geometry_loaded(mode, geometry),
            Message::GeometryFailed { mode, error } => {
                self.state.pending.remove(&mode);
                log::error!("GeoJSON load failed ({}): {}", mode, error);
                Vec::new()
            }
            Message::MarkerClicked(id) => self.show_trip(id, |trip| Effect::SetView {
                viewport: trip.focus_viewport(),
                animate: true,
            }),
            Message::ListItemClicked(id) => {
                self.show_trip(id, |trip| Effect::FlyTo(trip.focus_viewport()))
            }
            Message::CloseDetails => {
                self.state.selected = None;
                vec![
                    Effect::HideDetails,
                    Effect::SetView {
                        viewport: self.state.mode.default_viewport(),
                        animate: false,
                    },
                ]
            }
            Message::WelcomeClicked => {
                self.state.welcome_visible = false;
                let mut effects = vec![Effect::HideWelcome];
                effects.extend(self.state.audio.start().into_iter().map(Effect::Audio));
                effects
            }
            Message::TrackEnded => self
                .state
                .audio
                .on_ended()
                .into_iter()
                .map(Effect::Audio)
                .collect(),
            Message::PlaybackRejected(reason) => {
                log::warn!("Play failed even after click: {}", reason);
                Vec::new()
            }
        }
    }

    fn init(&mut self) -> Vec<Effect> {
        let mut effects = vec![Effect::CreateMap(Viewport::initial())];
        effects.extend(self.state.audio.preload().map(Effect::Audio));
        effects.extend(self.select_mode(self.state.mode));
        effects
    }

    fn select_mode(&mut self, mode: Mode) -> Vec<Effect> {
        self.state.mode = mode;

        let mut effects = vec![Effect::SetActiveMode(mode)];
        if self.state.selected.take().is_some() {
            effects.push(Effect::HideDetails);
        }
        effects.push(Effect::SetView {
            viewport: mode.default_viewport(),
            animate: false,
        });

        let trips = self.catalog.trips(mode);
        effects.push(Effect::RenderTripList(
            trips
                .iter()
                .map(|t| TripListEntry {
                    trip_id: t.id,
                    name: t.name.clone(),
                    date: t.date.clone(),
                })
                .collect(),
        ));
        effects.push(Effect::RenderMarkers(
            trips
                .iter()
                .enumerate()
                .map(|(index, t)| MarkerSpec {
                    trip_id: t.id,
                    position: t.position(),
                    color: color_for_index(index),
                })
                .collect(),
        ));

        effects.push(Effect::RemoveRegions);
        if let Some(geometry) = self.state.geometry.get(mode) {
            effects.push(self.paint(mode, geometry));
        } else if self.state.pending.insert(mode) {
            effects.push(Effect::FetchGeometry {
                mode,
                url: self.sources.url_for(mode).to_string(),
            });
        }

        effects
    }

    fn geometry_loaded(&mut self, mode: Mode, geometry: FeatureCollection) -> Vec<Effect> {
        self.state.pending.remove(&mode);
        let geometry = self.state.geometry.insert(mode, geometry);

        if mode != self.state.mode {
            log::warn!(
                "discarding stale {} geometry (current mode: {})",
                mode,
                self.state.mode
            );
            return Vec::new();
        }

        vec![Effect::RemoveRegions, self.paint(mode, geometry)]
    }

    fn paint(&self, mode: Mode, geometry: Arc<FeatureCollection>) -> Effect {
        let matcher = self.matcher(mode);
        let styles = geometry
            .features
            .iter()
            .map(|f| matcher.style_for(f))
            .collect();
        Effect::PaintRegions {
            mode,
            geometry,
            styles,
        }
    }

    fn show_trip(&mut self, id: u32, focus: impl Fn(&TripRecord) -> Effect) -> Vec<Effect> {
        let mode = self.state.mode;
        let Some(trip) = self.catalog.get(mode, id) else {
            log::warn!("trip #{} not found in {} catalog", id, mode);
            return Vec::new();
        };

        let details = TripDetails::from_trip(trip, mode, &self.photo_bases);
        let focus = focus(trip);
        self.state.selected = Some(id);
        vec![Effect::ShowDetails(details), focus]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::parse_feature_collection;

    const WORLD: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"name": "Spain"}, "geometry": null},
            {"type": "Feature", "properties": {"name": "Chad"}, "geometry": null}
        ]
    }"#;

    const CHINA: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"name": "江苏"}, "geometry": null},
            {"type": "Feature", "properties": {"name": "西藏"}, "geometry": null}
        ]
    }"#;

    fn fetches(effects: &[Effect]) -> Vec<Mode> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::FetchGeometry { mode, .. } => Some(*mode),
                _ => None,
            })
            .collect()
    }

    fn painted(effects: &[Effect]) -> Option<(Mode, Vec<RegionStyle>)> {
        effects.iter().find_map(|e| match e {
            Effect::PaintRegions { mode, styles, .. } => Some((*mode, styles.clone())),
            _ => None,
        })
    }

    #[test]
    fn test_init_creates_map_preloads_and_fetches_world() {
        let mut controller = Controller::builtin();
        let effects = controller.handle(Message::Init);

        assert_eq!(effects[0], Effect::CreateMap(Viewport::new(35.0, 105.0, 4)));
        assert!(effects.contains(&Effect::Audio(AudioCommand::Load {
            url: "music/autumn.mp3".into()
        })));
        assert!(!effects.contains(&Effect::Audio(AudioCommand::Play)));
        assert!(effects.contains(&Effect::SetView {
            viewport: Viewport::new(20.0, 0.0, 2),
            animate: false
        }));
        assert_eq!(fetches(&effects), vec![Mode::Intl]);
        assert!(controller.state().welcome_visible());
    }

    #[test]
    fn test_select_mode_renders_markers_in_catalog_colors() {
        let mut controller = Controller::builtin();
        let effects = controller.handle(Message::SelectMode(Mode::Domestic));

        let markers = effects
            .iter()
            .find_map(|e| match e {
                Effect::RenderMarkers(m) => Some(m.clone()),
                _ => None,
            })
            .expect("markers");
        assert_eq!(markers.len(), 5);
        assert_eq!(markers[0].color, "#FF6B6B");
        assert_eq!(markers[4].color, "#FFEEAD");
        assert_eq!(markers[1].position, LatLng::new(32.3932, 119.4085));
        assert_eq!(fetches(&effects), vec![Mode::Domestic]);
    }

    #[test]
    fn test_geometry_loaded_paints_with_matcher_styles() {
        let mut controller = Controller::builtin();
        controller.handle(Message::SelectMode(Mode::Domestic));

        let effects = controller.handle(Message::GeometryLoaded {
            mode: Mode::Domestic,
            geometry: parse_feature_collection(CHINA).unwrap(),
        });

        let (mode, styles) = painted(&effects).expect("paint");
        assert_eq!(mode, Mode::Domestic);
        // 江蘇: 揚州（カタログ2番目）の色
        assert_eq!(styles[0], RegionStyle::visited("#4ECDC4"));
        assert_eq!(styles[1], RegionStyle::unvisited());
        assert!(!controller.state().is_fetching(Mode::Domestic));
    }

    #[test]
    fn test_stale_geometry_is_cached_but_not_painted() {
        let mut controller = Controller::builtin();
        controller.handle(Message::SelectMode(Mode::Intl));
        controller.handle(Message::SelectMode(Mode::Domestic));

        let effects = controller.handle(Message::GeometryLoaded {
            mode: Mode::Intl,
            geometry: parse_feature_collection(WORLD).unwrap(),
        });
        assert!(effects.is_empty());
        assert!(controller.state().geometry().contains(Mode::Intl));

        // キャッシュ済みなら再取得せずに描画
        let effects = controller.handle(Message::SelectMode(Mode::Intl));
        assert!(fetches(&effects).is_empty());
        let (mode, styles) = painted(&effects).expect("paint");
        assert_eq!(mode, Mode::Intl);
        assert_eq!(styles[0].fill_color, "#FF6B6B");
    }

    #[test]
    fn test_pending_fetch_is_not_duplicated() {
        let mut controller = Controller::builtin();
        controller.handle(Message::SelectMode(Mode::Domestic));
        controller.handle(Message::SelectMode(Mode::Intl));
        let effects = controller.handle(Message::SelectMode(Mode::Domestic));

        assert!(fetches(&effects).is_empty());
        assert!(controller.state().is_fetching(Mode::Domestic));
    }

    #[test]
    fn test_geometry_failure_allows_retry_on_next_switch() {
        let mut controller = Controller::builtin();
        controller.handle(Message::SelectMode(Mode::Domestic));
        let effects = controller.handle(Message::GeometryFailed {
            mode: Mode::Domestic,
            error: "network".into(),
        });
        assert!(effects.is_empty());

        let effects = controller.handle(Message::SelectMode(Mode::Domestic));
        assert_eq!(fetches(&effects), vec![Mode::Domestic]);
    }

    #[test]
    fn test_marker_click_shows_details_and_recenters() {
        let mut controller = Controller::builtin();
        controller.handle(Message::SelectMode(Mode::Domestic));

        let effects = controller.handle(Message::MarkerClicked(4));
        assert_eq!(
            effects,
            vec![
                Effect::ShowDetails(TripDetails {
                    trip_id: 4,
                    photo_src: "./Dome-Data/2025Xiamen.jpg".into(),
                    name: "China - Xiamen".into(),
                    date: "2025-10-29 -- 2025-10-31".into(),
                    description: "参加MIND会议，顺便游览了厦门～～～".into(),
                }),
                Effect::SetView {
                    viewport: Viewport::new(24.4467, 118.0800, 8),
                    animate: true,
                },
            ]
        );
        assert_eq!(controller.state().selected(), Some(4));
    }

    #[test]
    fn test_list_click_flies_and_unknown_id_is_ignored() {
        let mut controller = Controller::builtin();
        controller.handle(Message::Init);

        let effects = controller.handle(Message::ListItemClicked(1));
        assert_eq!(effects[1], Effect::FlyTo(Viewport::new(40.4167, -3.7033, 8)));

        // 国際版に id=5 は存在しない
        assert!(controller.handle(Message::ListItemClicked(5)).is_empty());
    }

    #[test]
    fn test_close_details_resets_view() {
        let mut controller = Controller::builtin();
        controller.handle(Message::SelectMode(Mode::Domestic));
        controller.handle(Message::MarkerClicked(1));

        let effects = controller.handle(Message::CloseDetails);
        assert_eq!(
            effects,
            vec![
                Effect::HideDetails,
                Effect::SetView {
                    viewport: Mode::Domestic.default_viewport(),
                    animate: false
                },
            ]
        );
        assert_eq!(controller.state().selected(), None);
    }

    #[test]
    fn test_mode_switch_hides_open_details() {
        let mut controller = Controller::builtin();
        controller.handle(Message::SelectMode(Mode::Domestic));
        controller.handle(Message::MarkerClicked(2));

        let effects = controller.handle(Message::SelectMode(Mode::Intl));
        assert!(effects.contains(&Effect::HideDetails));
        assert_eq!(controller.state().selected(), None);
    }

    #[test]
    fn test_welcome_click_starts_music() {
        let mut controller = Controller::builtin();
        controller.handle(Message::Init);

        let effects = controller.handle(Message::WelcomeClicked);
        assert_eq!(
            effects,
            vec![
                Effect::HideWelcome,
                Effect::Audio(AudioCommand::Load {
                    url: "music/autumn.mp3".into()
                }),
                Effect::Audio(AudioCommand::Play),
            ]
        );
        assert!(!controller.state().welcome_visible());

        let effects = controller.handle(Message::TrackEnded);
        assert_eq!(effects.last(), Some(&Effect::Audio(AudioCommand::Play)));
        assert!(controller.handle(Message::PlaybackRejected("NotAllowedError".into())).is_empty());
    }
}
