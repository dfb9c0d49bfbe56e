#![forbid(unsafe_code)]

pub mod announce;
pub mod app;
pub mod context;
pub mod presenter;
pub mod vm;
pub mod views;

pub use announce::{ANNOUNCE_DELAY, DeferredAnnouncer, LiveRegion};
pub use app::App;
pub use context::{AppContext, UiApp, build_app_context};
pub use presenter::SignalPresenter;
