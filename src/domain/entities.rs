//! Domain entities mirrored from the seeded store.
//!
//! Wire names are camelCase for compatibility with the JSON contract the
//! front end consumes.

use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Display date, free text in `YYYY/MM/DD` form. Parsing and ordering
    /// rules live in [`crate::domain::posts`].
    pub date: String,
    pub image_url: String,
    /// URL-safe lookup key. Uniqueness is assumed by slug lookups but not
    /// enforced at write time; duplicated slugs resolve to the
    /// first-inserted match.
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberRecord {
    pub id: Uuid,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub subscribed_at: OffsetDateTime,
}
