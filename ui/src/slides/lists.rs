use dioxus::prelude::*;

use super::avatar::{Avatar, StickerImage, StickerThumb, PAIR_AVATAR_SIZE};
use super::card::CategoryCard;
use crate::core::format::{format_duration, format_metric, format_number};
use crate::stats::model::{
    top_emoji_glyphs, Metric, NamedValueItem, PairItem, UserItem, UserSummaryItem,
};
use crate::stats::{ListHeader, ListItems, UserExtraLine};
use crate::t;

/// Pair categories show a top-10.
pub const PAIR_LIMIT: usize = 10;
/// Every other list shows a top-11.
pub const LIST_LIMIT: usize = 11;

const STICKER_THUMBS: usize = 3;
const STAR_EMOJIS: usize = 5;
const PAIR_EMOJIS: usize = 4;

/// 1-based place within the displayed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank(usize);

impl Rank {
    pub fn place(self) -> usize {
        self.0
    }

    /// Podium places get their own styling.
    pub fn tier_class(self) -> &'static str {
        match self.0 {
            1 => "top-1",
            2 => "top-2",
            3 => "top-3",
            _ => "",
        }
    }
}

/// The first `limit` items paired with their rank.
pub fn ranked<T>(items: &[T], limit: usize) -> impl Iterator<Item = (Rank, &T)> {
    items
        .iter()
        .take(limit)
        .enumerate()
        .map(|(index, item)| (Rank(index + 1), item))
}

pub fn display_limit(items: &ListItems) -> usize {
    match items {
        ListItems::Pairs { .. } => PAIR_LIMIT,
        _ => LIST_LIMIT,
    }
}

#[component]
pub fn ListSlide(icon: &'static str, header: ListHeader, items: ListItems) -> Element {
    let limit = display_limit(&items);
    let unit = header.unit.clone();

    let rows: Vec<Element> = match &items {
        ListItems::UserSummaries(list) => ranked(list, limit)
            .map(|(rank, item)| {
                rsx! {
                    UserSummaryRow { key: "{rank.place()}", rank, item: item.clone() }
                }
            })
            .collect(),
        ListItems::Pairs { items: list, mutual } => ranked(list, limit)
            .map(|(rank, item)| {
                rsx! {
                    PairRow {
                        key: "{rank.place()}",
                        rank,
                        item: item.clone(),
                        unit: unit.clone(),
                        mutual: *mutual,
                    }
                }
            })
            .collect(),
        ListItems::Emoji(list) => ranked(list, limit)
            .map(|(rank, item)| {
                rsx! {
                    EmojiRow { key: "{rank.place()}", rank, item: item.clone(), unit: unit.clone() }
                }
            })
            .collect(),
        ListItems::Stickers(list) => ranked(list, limit)
            .map(|(rank, item)| {
                rsx! {
                    StickerRow { key: "{rank.place()}", rank, item: item.clone(), unit: unit.clone() }
                }
            })
            .collect(),
        ListItems::Users { items: list, extra } => ranked(list, limit)
            .map(|(rank, item)| {
                rsx! {
                    UserRow {
                        key: "{rank.place()}",
                        rank,
                        item: item.clone(),
                        unit: unit.clone(),
                        extra: *extra,
                    }
                }
            })
            .collect(),
    };

    rsx! {
        CategoryCard { icon, title: header.title, subtitle: header.subtitle,
            ul { class: "top-list", {rows.into_iter()} }
        }
    }
}

#[component]
fn RankBadge(rank: Rank) -> Element {
    rsx! {
        div { class: "place-badge", "{rank.place()}" }
    }
}

#[component]
fn ValueCell(value: String, unit: String) -> Element {
    rsx! {
        div { class: "item-value",
            span { class: "value-number", "{value}" }
            span { class: "value-unit", "{unit}" }
        }
    }
}

#[component]
fn EmojiStrip(glyphs: Vec<String>) -> Element {
    rsx! {
        div { class: "emoji-row",
            for (index, glyph) in glyphs.into_iter().enumerate() {
                span { key: "{index}", class: "emoji-small", "{glyph}" }
            }
        }
    }
}

fn row_class(base: &str, rank: Rank) -> String {
    let tier = rank.tier_class();
    if tier.is_empty() {
        base.to_string()
    } else {
        format!("{base} {tier}")
    }
}

#[component]
fn UserRow(rank: Rank, item: UserItem, unit: String, extra: UserExtraLine) -> Element {
    let value = format_metric(&item.value);
    rsx! {
        li { class: row_class("top-item", rank),
            RankBadge { rank }
            Avatar { path: item.avatar_path.clone(), name: item.display_name.clone() }
            div { class: "item-info",
                div { class: "item-name", "{item.display_name}" }
                {user_extra(&item, extra)}
            }
            ValueCell { value, unit }
        }
    }
}

fn positive(value: Option<u64>) -> Option<u64> {
    value.filter(|&n| n > 0)
}

fn non_zero(metric: Option<&Metric>) -> Option<&Metric> {
    metric.filter(|m| !m.is_zero())
}

/// Category-specific line under the user's name; zero counts are left out.
fn user_extra(item: &UserItem, kind: UserExtraLine) -> Element {
    let extra = item.extra();
    let line = match kind {
        UserExtraLine::Characters => positive(extra.total_chars)
            .map(|n| t!("extra-chars", count = format_number(n))),
        UserExtraLine::VoiceCount => {
            positive(extra.count).map(|n| t!("extra-messages", count = format_number(n)))
        }
        UserExtraLine::VideoMinutes => non_zero(extra.total_minutes.as_ref())
            .map(|m| t!("extra-minutes", count = format_metric(m))),
        UserExtraLine::MessageCount => {
            positive(extra.msg_count).map(|n| t!("extra-messages", count = format_number(n)))
        }
        UserExtraLine::StickerThumbnails => {
            let Some(stickers) = extra.top_stickers else {
                return rsx! {};
            };
            return rsx! {
                div { class: "sticker-row",
                    for (index, path) in stickers.into_iter().take(STICKER_THUMBS).enumerate() {
                        StickerThumb { key: "{index}", path }
                    }
                }
            };
        }
        UserExtraLine::TopEmojis => {
            let Some(counts) = extra.top_emojis.as_ref() else {
                return rsx! {};
            };
            let glyphs = top_emoji_glyphs(Some(counts), STAR_EMOJIS);
            return rsx! {
                EmojiStrip { glyphs }
            };
        }
        UserExtraLine::None => None,
    };

    match line {
        Some(text) => rsx! {
            div { class: "item-extra", "{text}" }
        },
        None => rsx! {},
    }
}

#[component]
fn PairRow(rank: Rank, item: PairItem, unit: String, mutual: bool) -> Element {
    let arrow = if mutual { "💕" } else { "→" };
    let value = format_metric(&item.value);
    let emojis = item.extra.as_ref().and_then(|extra| extra.top_emojis.as_ref());
    let glyphs = emojis.map(|counts| top_emoji_glyphs(Some(counts), PAIR_EMOJIS));

    rsx! {
        li { class: row_class("top-item pair-item", rank),
            RankBadge { rank }
            div { class: "pair-container",
                div { class: "pair-user",
                    Avatar {
                        path: item.user1_avatar.clone(),
                        name: item.user1_name.clone(),
                        size: PAIR_AVATAR_SIZE,
                    }
                    span { class: "pair-name", "{item.user1_name}" }
                }
                span { class: "pair-arrow", "{arrow}" }
                div { class: "pair-user",
                    Avatar {
                        path: item.user2_avatar.clone(),
                        name: item.user2_name.clone(),
                        size: PAIR_AVATAR_SIZE,
                    }
                    span { class: "pair-name", "{item.user2_name}" }
                }
            }
            if let Some(glyphs) = glyphs {
                EmojiStrip { glyphs }
            }
            ValueCell { value, unit }
        }
    }
}

#[component]
fn EmojiRow(rank: Rank, item: NamedValueItem, unit: String) -> Element {
    let value = format_metric(&item.value);
    rsx! {
        li { class: row_class("top-item", rank),
            RankBadge { rank }
            div { class: "emoji-display", "{item.item_name}" }
            div { class: "item-info",
                div { class: "item-name", "{item.item_name}" }
            }
            ValueCell { value, unit }
        }
    }
}

#[component]
fn StickerRow(rank: Rank, item: NamedValueItem, unit: String) -> Element {
    let value = format_metric(&item.value);
    let path = item.extra.as_ref().and_then(|extra| extra.sticker_path.clone());
    rsx! {
        li { class: row_class("top-item", rank),
            RankBadge { rank }
            StickerImage { path, name: item.item_name.clone() }
            div { class: "item-info",
                div { class: "item-name", "{item.item_name}" }
            }
            ValueCell { value, unit }
        }
    }
}

#[component]
fn UserSummaryRow(rank: Rank, item: UserSummaryItem) -> Element {
    let voice = (item.voice_seconds > 0.0).then(|| format_duration(item.voice_seconds));
    let video =
        (item.video_notes_seconds > 0.0).then(|| format_duration(item.video_notes_seconds));

    rsx! {
        li { class: row_class("top-item summary-item", rank),
            RankBadge { rank }
            Avatar { path: item.avatar_path.clone(), name: item.display_name.clone() }
            div { class: "item-info",
                div { class: "item-name", "{item.display_name}" }
                div { class: "summary-stats",
                    span { class: "stat-item", "💬 {format_number(item.messages_count)}" }
                    span { class: "stat-item", "⭐ {format_number(item.reactions_received)}" }
                    if let Some(voice) = voice {
                        span { class: "stat-item", "🎤 {voice}" }
                    }
                    if let Some(video) = video {
                        span { class: "stat-item", "⭕ {video}" }
                    }
                }
            }
            ValueCell {
                value: format_number(item.total_chars),
                unit: t!("user-summary-unit"),
            }
        }
    }
}
