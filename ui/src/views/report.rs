//! Bootstrap: load the dataset once, then hand the resolved slides to the deck.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;
use tracing::{debug, error, info};

use crate::carousel::input::command_for_key;
use crate::carousel::{Carousel, NavCommand, SwipeTracker};
use crate::components::{Lights, NavControls, ReportHeader};
use crate::config::ReportConfig;
use crate::core::format::format_number;
use crate::core::loader::load_dataset;
use crate::core::platform::{self, Platform};
use crate::i18n;
use crate::slides::SlideTrack;
use crate::stats::{resolve, ResolvedCategory, StatsDataset};
use crate::t;

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Shared theme, inlined by native shells.
pub const THEME_CSS_INLINE: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/theme/main.css"));

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(StatsDataset),
    Failed,
}

/// Header line under the title for each load state.
pub fn report_subtitle(state: &LoadState) -> String {
    match state {
        LoadState::Loading => t!("report-loading"),
        LoadState::Loaded(dataset) => match &dataset.chat_summary {
            Some(summary) => t!(
                "report-subtitle-summary",
                messages = format_number(summary.total_messages),
                users = summary.total_users.to_string()
            ),
            None => t!("report-subtitle-year", year = dataset.year.to_string()),
        },
        LoadState::Failed => t!("report-load-failed"),
    }
}

/// Slides for a load state; anything but a loaded dataset has none.
pub fn slides_for(state: &LoadState) -> Vec<ResolvedCategory> {
    match state {
        LoadState::Loaded(dataset) => resolve(dataset),
        LoadState::Loading | LoadState::Failed => Vec::new(),
    }
}

/// Root component used by every platform shell.
#[component]
pub fn ReportApp(config: ReportConfig) -> Element {
    i18n::init();
    use_context_provider(|| config.clone());

    rsx! {
        if cfg!(target_arch = "wasm32") {
            document::Link { rel: "stylesheet", href: THEME_CSS }
        } else {
            document::Style { "{THEME_CSS_INLINE}" }
        }
        Lights {}
        main { class: "report", ReportView {} }
    }
}

#[component]
pub fn ReportView() -> Element {
    let config = use_context::<ReportConfig>();

    // Created once per mount: the dataset is loaded and rendered a single time.
    let dataset = use_resource(move || {
        let source = config.source.clone();
        async move {
            let result = load_dataset(&source).await;
            match &result {
                Ok(dataset) => info!("loaded statistics for {}", dataset.year),
                Err(err) => error!("failed to load statistics: {err}"),
            }
            result
        }
    });

    let state = match &*dataset.read_unchecked() {
        None => LoadState::Loading,
        Some(Ok(dataset)) => LoadState::Loaded(dataset.clone()),
        Some(Err(_)) => LoadState::Failed,
    };
    let subtitle = report_subtitle(&state);

    rsx! {
        ReportHeader { subtitle }
        if state != LoadState::Loading {
            ReportDeck { slides: slides_for(&state) }
        }
    }
}

/// Carousel over a fixed set of slides. The slide count is taken at mount.
#[component]
pub fn ReportDeck(slides: Vec<ResolvedCategory>) -> Element {
    let total = slides.len();
    let carousel = use_signal(move || Carousel::new(total));
    let swipe = use_hook(|| Rc::new(RefCell::new(SwipeTracker::default())));

    use_hook(move || info!("rendering {total} slides"));

    // Every input adapter funnels into this single consumer.
    let nav = use_coroutine(move |mut rx: UnboundedReceiver<NavCommand>| {
        let mut carousel = carousel;
        async move {
            while let Some(command) = rx.next().await {
                if carousel.with_mut(|c| c.apply(command)) {
                    let state = *carousel.peek();
                    debug!(?command, "slide {} of {}", state.position(), state.total());
                }
            }
        }
    });

    let global_keys = Platform::current().has_global_key_listener();
    use_hook(move || {
        if global_keys {
            platform::listen_for_keys(move |key| {
                if let Some(command) = command_for_key(&key) {
                    nav.send(command);
                }
            });
        }
    });

    let state = carousel();
    let swipe_start = swipe.clone();
    let swipe_move = swipe.clone();
    let swipe_end = swipe;

    rsx! {
        div {
            class: "report-deck",
            tabindex: 0,
            autofocus: true,
            onkeydown: move |evt: KeyboardEvent| {
                if global_keys {
                    return;
                }
                if let Some(command) = command_for_key(&evt.key().to_string()) {
                    evt.prevent_default();
                    nav.send(command);
                }
            },
            div {
                class: "carousel-container",
                ontouchstart: move |evt: TouchEvent| {
                    if let Some(point) = evt.touches().first() {
                        swipe_start.borrow_mut().begin(point.client_coordinates().x);
                    }
                },
                ontouchmove: move |evt: TouchEvent| {
                    if let Some(point) = evt.touches().first() {
                        swipe_move.borrow_mut().track(point.client_coordinates().x);
                    }
                },
                ontouchend: move |_| {
                    let command = swipe_end.borrow_mut().finish();
                    if let Some(command) = command {
                        nav.send(command);
                    }
                },
                SlideTrack { slides, offset_percent: state.offset_percent() }
            }
            NavControls { carousel: state, on_nav: move |command| nav.send(command) }
        }
    }
}
