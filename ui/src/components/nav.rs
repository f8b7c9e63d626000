use dioxus::prelude::*;

use crate::carousel::{Carousel, NavCommand};
use crate::t;

const DIMMED_OPACITY: &str = "0.3";

fn arrow_opacity(dimmed: bool) -> &'static str {
    if dimmed {
        DIMMED_OPACITY
    } else {
        "1"
    }
}

/// Arrow buttons, one dot per slide and the "N / total" counter.
#[component]
pub fn NavControls(carousel: Carousel, on_nav: EventHandler<NavCommand>) -> Element {
    let prev_opacity = arrow_opacity(carousel.at_start());
    let next_opacity = arrow_opacity(carousel.at_end());
    let position = carousel.position();
    let total = carousel.total();

    let dots = (0..total).map(|index| {
        let class = if carousel.is_active(index) {
            "nav-dot active"
        } else {
            "nav-dot"
        };
        let label = t!("nav-go-to", index = (index + 1).to_string());
        rsx! {
            button {
                key: "{index}",
                r#type: "button",
                class,
                aria_label: label,
                aria_current: carousel.is_active(index).then_some("true"),
                onclick: move |_| on_nav.call(NavCommand::GoTo(index)),
            }
        }
    });

    rsx! {
        nav { class: "carousel-nav",
            button {
                id: "prev-btn",
                r#type: "button",
                class: "nav-btn nav-btn--prev",
                style: "opacity: {prev_opacity}",
                aria_label: t!("nav-previous"),
                onclick: move |_| on_nav.call(NavCommand::Previous),
                "‹"
            }
            div { id: "nav-dots", class: "nav-dots", {dots} }
            button {
                id: "next-btn",
                r#type: "button",
                class: "nav-btn nav-btn--next",
                style: "opacity: {next_opacity}",
                aria_label: t!("nav-next"),
                onclick: move |_| on_nav.call(NavCommand::Next),
                "›"
            }
        }
        div { class: "slide-counter",
            span { id: "current-index", "{position}" }
            " / "
            span { id: "total-count", "{total}" }
        }
    }
}
