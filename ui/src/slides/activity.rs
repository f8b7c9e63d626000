use dioxus::prelude::*;

use super::card::CategoryCard;
use crate::core::format::format_number;
use crate::stats::chart::{bar_heights, hour_label, HOUR_FLOOR_PERCENT, WEEKDAY_FLOOR_PERCENT};
use crate::stats::model::ActivityRecord;
use crate::t;

#[component]
pub fn ActivitySlide(icon: &'static str, activity: ActivityRecord) -> Element {
    let weekday_heights = bar_heights(&activity.by_weekday, WEEKDAY_FLOOR_PERCENT);
    let hour_heights = bar_heights(&activity.by_hour, HOUR_FLOOR_PERCENT);

    let weekday_bars = activity
        .by_weekday
        .iter()
        .zip(weekday_heights)
        .enumerate()
        .map(|(day, (count, height))| {
            let label = activity.weekday_labels.get(day).cloned().unwrap_or_default();
            let tooltip = t!("activity-bar-tooltip", count = format_number(*count));
            rsx! {
                Bar { key: "{day}", height, label, tooltip }
            }
        });

    let hour_bars = hour_heights.into_iter().enumerate().map(|(hour, height)| {
        let label = hour_label(hour).map(|h| h.to_string()).unwrap_or_default();
        rsx! {
            Bar { key: "{hour}", height, label }
        }
    });

    rsx! {
        CategoryCard {
            icon,
            title: t!("activity-title"),
            subtitle: t!("activity-subtitle"),
            div { class: "activity-chart",
                div { class: "chart-title", {t!("activity-by-weekday")} }
                div { class: "bar-chart weekday-chart", {weekday_bars} }
            }
            div { class: "activity-chart activity-chart--hours",
                div { class: "chart-title", {t!("activity-by-hour")} }
                div { class: "bar-chart hour-chart", {hour_bars} }
            }
        }
    }
}

#[component]
fn Bar(height: f64, label: String, tooltip: Option<String>) -> Element {
    rsx! {
        div { class: "bar-container", title: tooltip,
            div { class: "bar-wrapper",
                div { class: "bar", style: "height: {height}%" }
            }
            span { class: "bar-label", "{label}" }
        }
    }
}
