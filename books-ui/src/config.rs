use shared_types::BookId;

/// Backend the UI talks to. Fixed at build time; there is no runtime lookup.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";
pub const DEFAULT_COLLECTION: &str = "books";
pub const DEFAULT_NOTICE_DURATION_MS: u32 = 4_000;
pub const DEFAULT_TABLE_TITLE: &str = "Books";

/// How HTTP status codes are interpreted.
///
/// Status codes are not inspected by default: a 4xx/5xx that still carries
/// a decodable body is indistinguishable from success, and a non-2xx delete
/// succeeds. `Strict` opts into treating non-2xx as a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Non-2xx responses are failures.
    Strict,
    /// Only a rejected network call (or an undecodable body) is a failure.
    #[default]
    Lenient,
}

impl StatusPolicy {
    pub fn accepts(&self, ok: bool) -> bool {
        match self {
            StatusPolicy::Strict => ok,
            StatusPolicy::Lenient => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LibraryConfig {
    pub api_base: String,
    pub collection: String,
    /// How long a success/failure notice stays visible
    pub notice_duration_ms: u32,
    pub title: String,
    pub status_policy: StatusPolicy,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            notice_duration_ms: DEFAULT_NOTICE_DURATION_MS,
            title: DEFAULT_TABLE_TITLE.to_string(),
            status_policy: StatusPolicy::default(),
        }
    }
}

impl LibraryConfig {
    /// `{base}/books`
    pub fn collection_url(&self) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            self.collection.trim_matches('/')
        )
    }

    /// `{base}/books/{id}`
    pub fn record_url(&self, id: BookId) -> String {
        format!("{}/{}", self.collection_url(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_urls_point_at_local_backend() {
        let config = LibraryConfig::default();
        assert_eq!(config.collection_url(), "http://localhost:8080/books");
        assert_eq!(config.record_url(BookId(42)), "http://localhost:8080/books/42");
    }

    #[test]
    fn trailing_slashes_are_not_doubled() {
        let config = LibraryConfig {
            api_base: "http://example.test/".to_string(),
            collection: "/books/".to_string(),
            ..LibraryConfig::default()
        };
        assert_eq!(config.collection_url(), "http://example.test/books");
    }

    #[test]
    fn status_policy_acceptance() {
        assert!(StatusPolicy::Strict.accepts(true));
        assert!(!StatusPolicy::Strict.accepts(false));
        assert!(StatusPolicy::Lenient.accepts(false));
    }

    #[test]
    fn status_codes_are_not_inspected_by_default() {
        let config = LibraryConfig::default();
        assert_eq!(config.status_policy, StatusPolicy::Lenient);
        assert!(config.status_policy.accepts(false));
    }
}
