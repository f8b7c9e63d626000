use dioxus::prelude::*;

use super::card::CategoryCard;
use crate::core::format::{format_date, format_decimal, format_number};
use crate::stats::model::ChatSummary;
use crate::t;

fn date_or_dash(date: Option<&str>) -> String {
    date.and_then(format_date)
        .unwrap_or_else(|| t!("summary-date-missing"))
}

#[component]
pub fn SummarySlide(icon: &'static str, summary: ChatSummary) -> Element {
    let first = date_or_dash(summary.first_message_date.as_deref());
    let last = date_or_dash(summary.last_message_date.as_deref());

    let tiles = [
        ("💬", format_number(summary.total_messages), t!("summary-messages")),
        ("❤️", format_number(summary.total_reactions), t!("summary-reactions")),
        ("👥", summary.total_users.to_string(), t!("summary-users")),
        ("📈", format_decimal(summary.avg_messages_per_day), t!("summary-per-day")),
    ];

    rsx! {
        CategoryCard {
            icon,
            title: t!("summary-title"),
            subtitle: format!("{first} — {last}"),
            div { class: "summary-grid",
                for (glyph, value, label) in tiles {
                    div { key: "{label}", class: "summary-item",
                        div { class: "summary-icon", "{glyph}" }
                        div { class: "summary-value", "{value}" }
                        div { class: "summary-label", "{label}" }
                    }
                }
            }
        }
    }
}
