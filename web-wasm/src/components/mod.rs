//! UIコンポーネント

pub mod details_panel;
pub mod header;
pub mod trip_list;
pub mod welcome_overlay;
