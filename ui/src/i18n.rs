//! Report wording, served from `i18n/ru-RU/recap-ui.ftl`.
//!
//! The report only ever renders in Russian (the exporter's titles and
//! weekday labels are Russian too), so there is exactly one locale and it is
//! also the fallback. Keeping the strings in Fluent still gives one place for
//! wording and month names, and `fl!` checks every key at compile time.
//!
//! Call [`init`] before the first lookup; it is cheap to call again.
//! Arguments are handed over already formatted (see `core::format`), which
//! is why bidi isolation is switched off.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// `t!("summary-title")`, `t!("extra-chars", count = format_number(n))`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

const DOMAIN: &str = "recap-ui";

pub const REPORT_LOCALE: &str = "ru-RU";

#[derive(Embed)]
#[folder = "i18n"]
struct ReportStrings;

pub static LOADER: Lazy<FluentLanguageLoader> =
    Lazy::new(|| FluentLanguageLoader::new(DOMAIN, report_locale()));

static INIT: Once = Once::new();

fn report_locale() -> LanguageIdentifier {
    REPORT_LOCALE
        .parse()
        .expect("REPORT_LOCALE is a valid language tag")
}

pub fn init() {
    INIT.call_once(|| {
        if let Err(err) = i18n_embed::select(&*LOADER, &ReportStrings, &[report_locale()]) {
            tracing::warn!("report strings unavailable ({err}); keys will show instead");
        }
        LOADER.set_use_isolating(false);
    });
}
