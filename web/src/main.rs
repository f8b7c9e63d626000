use dioxus::prelude::*;

use ui::{ReportApp, ReportConfig};

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Title { "Итоги года" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1, user-scalable=no" }

        // `stats.json`, `avatars/` and `stickers/` are served next to the page.
        ReportApp { config: ReportConfig::default() }
    }
}
