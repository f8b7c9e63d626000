//! Slide rendering: one card per resolved category.
//!
//! All text goes into the virtual DOM as text nodes or attribute values, so
//! display names from the chat export are escaped by the renderer.

mod activity;
mod avatar;
mod card;
mod lists;
mod summary;

use dioxus::prelude::*;

pub use activity::ActivitySlide;
pub use avatar::{asset_path, initial, Avatar, AVATAR_SIZE, PAIR_AVATAR_SIZE};
pub use card::CategoryCard;
pub use lists::{display_limit, ranked, ListSlide, Rank, LIST_LIMIT, PAIR_LIMIT};
pub use summary::SummarySlide;

use crate::stats::{CategoryKind, ResolvedCategory};

/// Dispatch one resolved category to its builder.
#[component]
pub fn Slide(category: ResolvedCategory) -> Element {
    let icon = category.key.icon();
    match category.kind {
        CategoryKind::Summary(summary) => rsx! {
            SummarySlide { icon, summary }
        },
        CategoryKind::Activity(activity) => rsx! {
            ActivitySlide { icon, activity }
        },
        CategoryKind::List { header, items } => rsx! {
            ListSlide { icon, header, items }
        },
    }
}

/// The horizontal strip of slides, shifted so slide `offset_percent / 100` is visible.
#[component]
pub fn SlideTrack(slides: Vec<ResolvedCategory>, offset_percent: usize) -> Element {
    let cards = slides.into_iter().map(|category| {
        let key = category.key.as_str();
        rsx! {
            div { key: "{key}", class: "carousel-slide", "data-category": key,
                Slide { category }
            }
        }
    });

    rsx! {
        div {
            id: "carousel",
            class: "carousel",
            style: "transform: translateX(-{offset_percent}%)",
            {cards}
        }
    }
}
