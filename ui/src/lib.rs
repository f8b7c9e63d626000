//! Shared UI crate for Chat Recap: statistics model, slide rendering and
//! carousel navigation. Platform shells only choose where `stats.json` lives.

pub mod carousel;
pub mod config;
pub mod core;
pub mod i18n;
pub mod slides;
pub mod stats;
pub mod views;

pub mod components {
    // Report title and subtitle (components/header.rs)
    pub mod header;
    pub use header::ReportHeader;

    // Background decoration (components/lights.rs)
    pub mod lights;
    pub use lights::Lights;

    // Arrows, dots and counter (components/nav.rs)
    pub mod nav;
    pub use nav::NavControls;
}

pub use config::{DataSource, ReportConfig};
pub use views::{ReportApp, THEME_CSS_INLINE};
