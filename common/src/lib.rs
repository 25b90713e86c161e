//! Travel Diary Common Library
//!
//! CLIとWeb(WASM)で共有される型・地域マッチング・ページ制御

pub mod types;
pub mod catalog;
pub mod alias;
pub mod palette;
pub mod feature_name;
pub mod matcher;
pub mod details;
pub mod audio;
pub mod geometry;
pub mod controller;
pub mod error;

pub use types::{LatLng, Mode, Track, TripRecord, Viewport, FOCUS_ZOOM};
pub use catalog::TripCatalog;
pub use alias::RegionMapping;
pub use palette::{color_for_index, MARKER_COLORS};
pub use feature_name::{NameChain, NameStrategy};
pub use matcher::{is_visited, RegionMatcher, RegionStyle, VisitedRegion};
pub use details::{resolve_photo_path, PhotoBasePaths, TripDetails, DEFAULT_DESCRIPTION};
pub use audio::{AudioCommand, AudioController};
pub use geometry::{parse_feature_collection, GeometryCache, GeometrySource};
pub use controller::{AppState, Controller, Effect, MarkerSpec, Message, TripListEntry};
pub use error::{Error, Result};
