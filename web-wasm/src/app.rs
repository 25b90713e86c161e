//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use travel_diary_common::{
    AudioCommand, Controller, Effect as PageEffect, Message, Mode, TripDetails, TripListEntry,
};

use crate::api::geometry::fetch_geometry;
use crate::audio::BgmPlayer;
use crate::components::{
    details_panel::DetailsPanel, header::Header, trip_list::TripList,
    welcome_overlay::WelcomeOverlay,
};
use crate::map::{LeafletMap, MAP_ELEMENT_ID};

/// コントローラとホスト側リソースの橋渡し
///
/// `send` でメッセージを処理し、返ってきた `Effect` を地図・DOM・audio に反映する。
#[derive(Clone, Copy)]
pub struct Dispatcher {
    controller: StoredValue<Controller, LocalStorage>,
    map: StoredValue<Option<LeafletMap>, LocalStorage>,
    player: StoredValue<Option<BgmPlayer>, LocalStorage>,
    set_mode: WriteSignal<Mode>,
    set_trips: WriteSignal<Vec<TripListEntry>>,
    set_details: WriteSignal<Option<TripDetails>>,
    set_welcome_visible: WriteSignal<bool>,
}

impl Dispatcher {
    pub fn send(self, message: Message) {
        let effects = self
            .controller
            .try_update_value(|c| c.handle(message))
            .unwrap_or_default();

        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(self, effect: PageEffect) {
        match effect {
            PageEffect::CreateMap(viewport) => match LeafletMap::create(MAP_ELEMENT_ID, viewport) {
                Ok(map) => self.map.set_value(Some(map)),
                Err(e) => log::error!("{}", e),
            },
            PageEffect::SetActiveMode(mode) => self.set_mode.set(mode),
            PageEffect::SetView { viewport, animate } => self.with_map(|m| m.set_view(viewport, animate)),
            PageEffect::FlyTo(viewport) => self.with_map(|m| m.fly_to(viewport)),
            PageEffect::RenderMarkers(markers) => {
                self.map.update_value(|map| {
                    if let Some(map) = map {
                        map.set_markers(&markers, move |id| self.send(Message::MarkerClicked(id)));
                    }
                });
            }
            PageEffect::RenderTripList(entries) => self.set_trips.set(entries),
            PageEffect::RemoveRegions => self.with_map(|m| m.remove_regions()),
            PageEffect::FetchGeometry { mode, url } => {
                log::info!("fetching {} geometry: {}", mode, url);
                spawn_local(async move {
                    let message = match fetch_geometry(&url).await {
                        Ok(geometry) => Message::GeometryLoaded { mode, geometry },
                        Err(error) => Message::GeometryFailed { mode, error },
                    };
                    self.send(message);
                });
            }
            PageEffect::PaintRegions {
                mode,
                geometry,
                styles,
            } => self.with_map(|m| {
                if let Err(e) = m.set_regions(&geometry, &styles) {
                    log::error!("{} regions: {}", mode, e);
                }
            }),
            PageEffect::ShowDetails(details) => self.set_details.set(Some(details)),
            PageEffect::HideDetails => self.set_details.set(None),
            PageEffect::HideWelcome => self.set_welcome_visible.set(false),
            PageEffect::Audio(command) => self.apply_audio(command),
        }
    }

    fn apply_audio(self, command: AudioCommand) {
        match command {
            AudioCommand::Load { url } => {
                self.player.with_value(|p| {
                    if let Some(player) = p {
                        player.load(&url);
                    }
                });
            }
            AudioCommand::Play => {
                let Some(element) = self.player.with_value(|p| p.as_ref().map(BgmPlayer::element))
                else {
                    return;
                };
                spawn_local(async move {
                    if let Err(reason) = BgmPlayer::play(element).await {
                        self.send(Message::PlaybackRejected(reason));
                    }
                });
            }
        }
    }

    fn with_map(self, f: impl FnOnce(&LeafletMap)) {
        self.map.with_value(|map| {
            if let Some(map) = map {
                f(map);
            }
        });
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (mode, set_mode) = signal(Mode::default());
    let (trips, set_trips) = signal(Vec::<TripListEntry>::new());
    let (details, set_details) = signal(None::<TripDetails>);
    let (welcome_visible, set_welcome_visible) = signal(true);

    let dispatcher = Dispatcher {
        controller: StoredValue::new_local(Controller::builtin()),
        map: StoredValue::new_local(None),
        player: StoredValue::new_local(None),
        set_mode,
        set_trips,
        set_details,
        set_welcome_visible,
    };

    match BgmPlayer::new(move || dispatcher.send(Message::TrackEnded)) {
        Ok(player) => dispatcher.player.set_value(Some(player)),
        Err(e) => log::error!("{}", e),
    }

    // #map がDOMに載ってから初期化
    Effect::new(move |_| untrack(move || dispatcher.send(Message::Init)));

    let on_select_mode = move |m: Mode| dispatcher.send(Message::SelectMode(m));
    let on_select_trip = move |id: u32| dispatcher.send(Message::ListItemClicked(id));
    let on_close = move |_: ()| dispatcher.send(Message::CloseDetails);
    let on_welcome = move |_: ()| dispatcher.send(Message::WelcomeClicked);

    view! {
        <div class="container">
            <Header mode=mode trips=trips on_select_mode=on_select_mode />

            <main class="main-content">
                <div id="map" class="map-container"></div>

                <aside class="sidebar">
                    <Show
                        when=move || details.get().is_some()
                        fallback=move || view! { <TripList trips=trips on_select=on_select_trip /> }
                    >
                        <DetailsPanel details=details on_close=on_close />
                    </Show>
                </aside>
            </main>

            <Show when=move || welcome_visible.get()>
                <WelcomeOverlay on_enter=on_welcome />
            </Show>
        </div>
    }
}
