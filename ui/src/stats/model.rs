//! Shape of the `stats.json` payload.
//!
//! Everything except `year` is optional. Category payloads stay as raw JSON
//! until [`crate::stats::resolve`] decodes them, so a malformed category (or
//! item) is skipped instead of failing the whole load. Scalars the exporter
//! writes as `null` read as their zero value.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// `null` reads as `T::default()`; absent fields are covered by `#[serde(default)]`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatsDataset {
    pub year: i32,
    #[serde(default)]
    pub chat_summary: Option<ChatSummary>,
    #[serde(default)]
    pub activity: Option<ActivityRecord>,
    #[serde(default)]
    pub categories: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ChatSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub total_messages: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_reactions: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_users: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub avg_messages_per_day: f64,
    pub first_message_date: Option<String>,
    pub last_message_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ActivityRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub by_weekday: Vec<u64>,
    #[serde(deserialize_with = "null_as_default")]
    pub weekday_labels: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub by_hour: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CategoryRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subtitle: String,
    #[serde(deserialize_with = "null_as_default")]
    pub unit: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_pair: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_summary: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub data: Vec<Value>,
}

/// A ranked value as exported: usually a count, sometimes an average or a
/// label the exporter already formatted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Metric {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Metric {
    /// Zero and empty values are treated as "nothing to show".
    pub fn is_zero(&self) -> bool {
        match self {
            Metric::Int(value) => *value == 0,
            Metric::Float(value) => *value == 0.0,
            Metric::Text(text) => text.is_empty(),
        }
    }
}

impl Default for Metric {
    fn default() -> Self {
        Self::Int(0)
    }
}

/// Emoji → count, in exporter order (most used first).
pub type EmojiCounts = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct UserItem {
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    pub avatar_path: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub value: Metric,
    pub extra: Option<UserExtra>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct UserExtra {
    pub total_chars: Option<u64>,
    pub count: Option<u64>,
    pub total_minutes: Option<Metric>,
    pub msg_count: Option<u64>,
    pub top_stickers: Option<Vec<String>>,
    pub top_emojis: Option<EmojiCounts>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PairItem {
    #[serde(deserialize_with = "null_as_default")]
    pub user1_name: String,
    pub user1_avatar: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub user2_name: String,
    pub user2_avatar: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub value: Metric,
    pub extra: Option<PairExtra>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PairExtra {
    pub top_emojis: Option<EmojiCounts>,
}

/// An emoji, reaction or sticker with its usage count.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct NamedValueItem {
    #[serde(deserialize_with = "null_as_default")]
    pub item_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: Metric,
    pub extra: Option<NamedExtra>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct NamedExtra {
    pub sticker_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct UserSummaryItem {
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    pub avatar_path: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub messages_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub reactions_received: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_chars: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub voice_seconds: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub video_notes_seconds: f64,
}

impl UserItem {
    pub fn extra(&self) -> UserExtra {
        self.extra.clone().unwrap_or_default()
    }
}

/// First `limit` emoji glyphs of an emoji → count map.
pub fn top_emoji_glyphs(counts: Option<&EmojiCounts>, limit: usize) -> Vec<String> {
    counts
        .map(|map| map.keys().take(limit).cloned().collect())
        .unwrap_or_default()
}
