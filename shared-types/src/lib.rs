//! Shared types between the book library UI and its REST backend
//!
//! The backend owns every record; these types only describe what travels over
//! HTTP. Field names follow the backend's camelCase JSON.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

// ============================================================================
// Identifiers
// ============================================================================

/// Server-assigned book identifier, immutable after creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub i64);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Creation Date
// ============================================================================

/// Creation timestamp of a book.
///
/// Accepts the shapes a REST backend commonly emits for dates: RFC 3339,
/// ISO date-times with a colon-less offset (`+0000`), zone-less ISO
/// date-times (read as UTC), plain `YYYY-MM-DD`, and epoch milliseconds. Always written back as RFC 3339 with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CreationDate(pub DateTime<Utc>);

impl CreationDate {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(Self(dt.with_timezone(&Utc)));
        }

        if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
            return Some(Self(dt.with_timezone(&Utc)));
        }

        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(Self(naive.and_utc()));
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Self(naive.and_utc()))
    }

    pub fn from_epoch_millis(millis: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp_millis(millis).map(Self)
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn epoch_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// `2021-05-05T00:00:00.000Z`
    pub fn to_wire(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Calendar date only, `YYYY-MM-DD`. Used to seed edit inputs.
    pub fn to_iso_date(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl From<DateTime<Utc>> for CreationDate {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl Serialize for CreationDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

impl<'de> Deserialize<'de> for CreationDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawDate {
            Text(String),
            Millis(i64),
        }

        match RawDate::deserialize(deserializer)? {
            RawDate::Text(text) => Self::parse(&text)
                .ok_or_else(|| de::Error::custom(format!("unrecognized date: {text}"))),
            RawDate::Millis(millis) => Self::from_epoch_millis(millis)
                .ok_or_else(|| de::Error::custom(format!("date out of range: {millis}"))),
        }
    }
}

/// Decodes `dateCreation` without failing the enclosing record: a value that
/// is not a recognizable date becomes `None`.
fn lenient_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<CreationDate>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MaybeDate {
        Known(CreationDate),
        Unrecognized(de::IgnoredAny),
    }

    Ok(match Option::<MaybeDate>::deserialize(deserializer)? {
        Some(MaybeDate::Known(date)) => Some(date),
        _ => None,
    })
}

// ============================================================================
// Records
// ============================================================================

/// Book record as stored by the backend.
///
/// Every field but `id` is optional. Absent values are sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: Option<String>,
    pub author: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date_creation: Option<CreationDate>,
    pub pages: Option<i64>,
}

impl Book {
    pub fn from_draft(id: BookId, draft: BookDraft) -> Self {
        Self {
            id,
            title: draft.title,
            author: draft.author,
            date_creation: draft.date_creation,
            pages: draft.pages,
        }
    }

    pub fn to_draft(&self) -> BookDraft {
        BookDraft {
            title: self.title.clone(),
            author: self.author.clone(),
            date_creation: self.date_creation,
            pages: self.pages,
        }
    }
}

/// Body of a create request: a book the server has not assigned an id to yet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    pub title: Option<String>,
    pub author: Option<String>,
    pub date_creation: Option<CreationDate>,
    pub pages: Option<i64>,
}

// ============================================================================
// Collection Envelope
// ============================================================================

/// `GET /books` response: `{ "_embedded": { "books": [...] } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookCollection {
    #[serde(rename = "_embedded")]
    pub embedded: EmbeddedBooks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedBooks {
    pub books: Vec<Book>,
}

impl BookCollection {
    pub fn into_books(self) -> Vec<Book> {
        self.embedded.books
    }
}

// ============================================================================
// Tests
// ============================================================================
