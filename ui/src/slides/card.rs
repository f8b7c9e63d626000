use dioxus::prelude::*;

/// Common frame of every slide: icon, title, subtitle, then the body.
#[component]
pub fn CategoryCard(
    icon: &'static str,
    title: String,
    subtitle: String,
    children: Element,
) -> Element {
    rsx! {
        div { class: "category-card",
            div { class: "category-header",
                span { class: "category-icon", "{icon}" }
                h2 { class: "category-title", "{title}" }
                p { class: "category-subtitle", "{subtitle}" }
            }
            {children}
        }
    }
}
