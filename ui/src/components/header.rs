use dioxus::prelude::*;

use crate::t;

#[component]
pub fn ReportHeader(subtitle: String) -> Element {
    rsx! {
        header { class: "report-header",
            h1 { class: "report-header__title", {t!("report-title")} }
            p { id: "chat-subtitle", class: "report-header__subtitle", "{subtitle}" }
        }
    }
}
