//! Category resolution: fixed slide order plus a closed set of slide kinds.
//!
//! The kind of every category is decided here, once, so the slide renderer only
//! has to match on [`CategoryKind`].

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::model::{
    ActivityRecord, CategoryRecord, ChatSummary, NamedValueItem, PairItem, StatsDataset, UserItem,
    UserSummaryItem,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKey {
    ChatSummary,
    Activity,
    Messages,
    Voice,
    VideoNotes,
    ReactionStar,
    FavoritePerson,
    MutualLove,
    Reactions,
    Emoji,
    Stickers,
    StickerSenders,
    VerboseUsers,
    Forwarders,
    UserSummary,
}

impl CategoryKey {
    /// Slide order.
    pub const ORDER: [CategoryKey; 15] = [
        CategoryKey::ChatSummary,
        CategoryKey::Activity,
        CategoryKey::Messages,
        CategoryKey::Voice,
        CategoryKey::VideoNotes,
        CategoryKey::ReactionStar,
        CategoryKey::FavoritePerson,
        CategoryKey::MutualLove,
        CategoryKey::Reactions,
        CategoryKey::Emoji,
        CategoryKey::Stickers,
        CategoryKey::StickerSenders,
        CategoryKey::VerboseUsers,
        CategoryKey::Forwarders,
        CategoryKey::UserSummary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryKey::ChatSummary => "chat_summary",
            CategoryKey::Activity => "activity",
            CategoryKey::Messages => "messages",
            CategoryKey::Voice => "voice",
            CategoryKey::VideoNotes => "video_notes",
            CategoryKey::ReactionStar => "reaction_star",
            CategoryKey::FavoritePerson => "favorite_person",
            CategoryKey::MutualLove => "mutual_love",
            CategoryKey::Reactions => "reactions",
            CategoryKey::Emoji => "emoji",
            CategoryKey::Stickers => "stickers",
            CategoryKey::StickerSenders => "sticker_senders",
            CategoryKey::VerboseUsers => "verbose_users",
            CategoryKey::Forwarders => "forwarders",
            CategoryKey::UserSummary => "user_summary",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            CategoryKey::ChatSummary => "📊",
            CategoryKey::Activity => "📅",
            CategoryKey::Messages => "💬",
            CategoryKey::Voice => "🎤",
            CategoryKey::VideoNotes => "⭕",
            CategoryKey::ReactionStar => "⭐",
            CategoryKey::FavoritePerson => "💕",
            CategoryKey::MutualLove => "💞",
            CategoryKey::Reactions => "👍",
            CategoryKey::Emoji => "😀",
            CategoryKey::Stickers => "🎭",
            CategoryKey::StickerSenders => "🃏",
            CategoryKey::VerboseUsers => "📝",
            CategoryKey::Forwarders => "🔄",
            CategoryKey::UserSummary => "👥",
        }
    }

    /// `chat_summary` and `activity` live in dedicated top-level fields.
    pub fn is_structural(self) -> bool {
        matches!(self, CategoryKey::ChatSummary | CategoryKey::Activity)
    }

    /// Extra line shown under the name in a plain user top-list.
    fn user_extra_line(self) -> UserExtraLine {
        match self {
            CategoryKey::Messages => UserExtraLine::Characters,
            CategoryKey::Voice => UserExtraLine::VoiceCount,
            CategoryKey::VideoNotes => UserExtraLine::VideoMinutes,
            CategoryKey::VerboseUsers => UserExtraLine::MessageCount,
            CategoryKey::StickerSenders => UserExtraLine::StickerThumbnails,
            CategoryKey::ReactionStar => UserExtraLine::TopEmojis,
            _ => UserExtraLine::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCategory {
    pub key: CategoryKey,
    pub kind: CategoryKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CategoryKind {
    Summary(ChatSummary),
    Activity(ActivityRecord),
    List { header: ListHeader, items: ListItems },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListHeader {
    pub title: String,
    pub subtitle: String,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListItems {
    UserSummaries(Vec<UserSummaryItem>),
    Pairs { items: Vec<PairItem>, mutual: bool },
    Emoji(Vec<NamedValueItem>),
    Stickers(Vec<NamedValueItem>),
    Users { items: Vec<UserItem>, extra: UserExtraLine },
}

impl ListItems {
    pub fn len(&self) -> usize {
        match self {
            ListItems::UserSummaries(items) => items.len(),
            ListItems::Pairs { items, .. } => items.len(),
            ListItems::Emoji(items) | ListItems::Stickers(items) => items.len(),
            ListItems::Users { items, .. } => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserExtraLine {
    Characters,
    VoiceCount,
    VideoMinutes,
    MessageCount,
    StickerThumbnails,
    TopEmojis,
    None,
}

/// Walk [`CategoryKey::ORDER`] and collect every category present in `dataset`.
pub fn resolve(dataset: &StatsDataset) -> Vec<ResolvedCategory> {
    CategoryKey::ORDER
        .iter()
        .filter_map(|&key| {
            let kind = match key {
                CategoryKey::ChatSummary => dataset.chat_summary.clone().map(CategoryKind::Summary),
                CategoryKey::Activity => dataset.activity.clone().map(CategoryKind::Activity),
                _ => dataset
                    .categories
                    .as_ref()
                    .and_then(|map| map.get(key.as_str()))
                    .and_then(|raw| list_kind(key, raw)),
            }?;
            Some(ResolvedCategory { key, kind })
        })
        .collect()
}

fn list_kind(key: CategoryKey, raw: &Value) -> Option<CategoryKind> {
    if raw.is_null() {
        return None;
    }
    let record: CategoryRecord = match serde_json::from_value(raw.clone()) {
        Ok(record) => record,
        Err(err) => {
            warn!("skipping category {}: {err}", key.as_str());
            return None;
        }
    };

    let items = if record.is_summary {
        ListItems::UserSummaries(decode_items(key, &record.data))
    } else if record.is_pair {
        ListItems::Pairs {
            items: decode_items(key, &record.data),
            mutual: key == CategoryKey::MutualLove,
        }
    } else if matches!(key, CategoryKey::Emoji | CategoryKey::Reactions) {
        ListItems::Emoji(decode_items(key, &record.data))
    } else if key == CategoryKey::Stickers {
        ListItems::Stickers(decode_items(key, &record.data))
    } else {
        ListItems::Users {
            items: decode_items(key, &record.data),
            extra: key.user_extra_line(),
        }
    };

    Some(CategoryKind::List {
        header: ListHeader {
            title: record.title,
            subtitle: record.subtitle,
            unit: record.unit,
        },
        items,
    })
}

fn decode_items<T: DeserializeOwned>(key: CategoryKey, raw: &[Value]) -> Vec<T> {
    raw.iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value.clone()) {
            Ok(item) => Some(item),
            Err(err) => {
                warn!("skipping item {index} of {}: {err}", key.as_str());
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dataset(value: Value) -> StatsDataset {
        serde_json::from_value(value).unwrap()
    }

    fn keys(resolved: &[ResolvedCategory]) -> Vec<CategoryKey> {
        resolved.iter().map(|c| c.key).collect()
    }

    #[test]
    fn year_only_dataset_resolves_nothing() {
        assert!(resolve(&dataset(json!({ "year": 2024 }))).is_empty());
    }

    #[test]
    fn single_category_resolves_to_one_slide() {
        let resolved = resolve(&dataset(json!({
            "year": 2024,
            "categories": { "messages": { "title": "Болтуны", "unit": "сообщ.", "data": [] } }
        })));
        assert_eq!(keys(&resolved), vec![CategoryKey::Messages]);
        assert!(matches!(
            &resolved[0].kind,
            CategoryKind::List { items: ListItems::Users { extra: UserExtraLine::Characters, .. }, .. }
        ));
    }

    #[test]
    fn order_follows_fixed_keys_not_map_order() {
        let resolved = resolve(&dataset(json!({
            "year": 2024,
            "categories": {
                "user_summary": { "is_summary": true, "data": [] },
                "stickers": { "data": [] },
                "unknown_key": { "data": [] },
                "messages": { "data": [] }
            },
            "activity": { "by_weekday": [0,0,0,0,0,0,0], "weekday_labels": [], "by_hour": [] },
            "chat_summary": { "total_messages": 1 }
        })));
        assert_eq!(
            keys(&resolved),
            vec![
                CategoryKey::ChatSummary,
                CategoryKey::Activity,
                CategoryKey::Messages,
                CategoryKey::Stickers,
                CategoryKey::UserSummary,
            ]
        );
    }

    #[test]
    fn kind_flags_take_precedence_over_key_names() {
        let resolved = resolve(&dataset(json!({
            "year": 2024,
            "categories": {
                "mutual_love": { "is_pair": true, "data": [
                    { "user1_name": "A", "user2_name": "B", "value": 3 }
                ] },
                "favorite_person": { "is_pair": true, "data": [] },
                "reactions": { "data": [ { "item_name": "🔥", "value": 10 } ] },
                "sticker_senders": { "data": [] }
            }
        })));
        let kinds: Vec<_> = resolved.iter().map(|c| c.kind.clone()).collect();
        assert!(matches!(&kinds[0], CategoryKind::List { items: ListItems::Pairs { mutual: false, .. }, .. }));
        assert!(matches!(&kinds[1], CategoryKind::List { items: ListItems::Pairs { mutual: true, items }, .. } if items.len() == 1));
        assert!(matches!(&kinds[2], CategoryKind::List { items: ListItems::Emoji(items), .. } if items.len() == 1));
        assert!(matches!(
            &kinds[3],
            CategoryKind::List { items: ListItems::Users { extra: UserExtraLine::StickerThumbnails, .. }, .. }
        ));
    }

    #[test]
    fn malformed_items_and_categories_are_skipped() {
        let resolved = resolve(&dataset(json!({
            "year": 2024,
            "categories": {
                "voice": { "data": [
                    { "display_name": "Оля", "value": 4 },
                    { "display_name": "Петя", "value": { "nested": true } },
                    { "display_name": "Ира", "value": 2 }
                ] },
                "emoji": "not a record"
            }
        })));
        assert_eq!(keys(&resolved), vec![CategoryKey::Voice]);
        match &resolved[0].kind {
            CategoryKind::List { items, .. } => assert_eq!(items.len(), 2),
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn null_durations_keep_row_positions() {
        let resolved = resolve(&dataset(json!({
            "year": 2024,
            "categories": {
                "user_summary": { "is_summary": true, "title": null, "data": [
                    { "display_name": "A", "messages_count": 9, "voice_seconds": null },
                    { "display_name": "B", "messages_count": 4, "video_notes_seconds": null }
                ] }
            }
        })));
        match &resolved[0].kind {
            CategoryKind::List { header, items: ListItems::UserSummaries(rows) } => {
                assert_eq!(header.title, "");
                let names: Vec<_> = rows.iter().map(|r| r.display_name.as_str()).collect();
                assert_eq!(names, vec!["A", "B"]);
                assert_eq!(rows[0].voice_seconds, 0.0);
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn every_key_has_a_distinct_name() {
        let mut names: Vec<_> = CategoryKey::ORDER.iter().map(|k| k.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 15);
        assert_eq!(
            CategoryKey::ORDER.iter().filter(|k| k.is_structural()).count(),
            2
        );
    }
}
