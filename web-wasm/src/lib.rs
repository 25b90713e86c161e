//! Travel Diary Web App (Leptos + WASM)

mod api;
mod app;
mod audio;
mod components;
mod logger;
mod map;

use log::LevelFilter;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logger::init(if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    leptos::mount::mount_to_body(app::App);
}

#[cfg(all(target_arch = "wasm32", test))]
mod tests {
    use travel_diary_common::{Controller, Message, Mode, RegionMatcher, TripCatalog};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_builtin_controller_requests_world_geometry_first() {
        let mut controller = Controller::builtin();
        let effects = controller.handle(Message::Init);
        assert!(effects.iter().any(|e| matches!(
            e,
            travel_diary_common::Effect::FetchGeometry { mode: Mode::Intl, .. }
        )));
    }

    #[wasm_bindgen_test]
    fn test_matcher_runs_in_wasm() {
        let catalog = TripCatalog::builtin();
        let mapping = travel_diary_common::RegionMapping::builtin();
        let matcher = RegionMatcher::new(Mode::Domestic, &catalog, &mapping);
        let hit = matcher.match_names(&["上海市"]).map(|v| v.trip_index);
        assert_eq!(hit, Some(0));
    }
}
