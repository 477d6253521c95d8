use shared_types::{Book, BookId};

pub const MSG_ADDED: &str = "Book added";
pub const MSG_UPDATED: &str = "Book updated";
pub const MSG_DELETED: &str = "Book deleted";
pub const MSG_ADD_FAILED: &str = "Could not add book";
pub const MSG_UPDATE_FAILED: &str = "Could not update book";
pub const MSG_DELETE_FAILED: &str = "Could not delete book";

/// Lifecycle of one mount: `Loading -> Ready` or `Loading -> Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// Transient notification; `seq` tells a stale dismissal timer from a live one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LibraryEvent {
    Loaded(Vec<Book>),
    LoadFailed(String),
    BookAdded(Book),
    AddFailed,
    BookUpdated(Book),
    UpdateFailed,
    BookDeleted(BookId),
    DeleteFailed,
    NoticeExpired(u64),
    NoticeDismissed,
    Unmounted,
}

/// View state of the book library.
///
/// `books` is empty unless the phase is `Ready`. Mutation results are applied
/// in whatever order they arrive; there is no sequencing between overlapping
/// requests.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryState {
    pub phase: LoadPhase,
    pub books: Vec<Book>,
    pub notice: Option<Notice>,
    next_notice_seq: u64,
}

impl Default for LibraryState {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryState {
    pub fn new() -> Self {
        Self {
            phase: LoadPhase::Loading,
            books: Vec::new(),
            notice: None,
            next_notice_seq: 0,
        }
    }

    pub fn loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Empty string when there is no error.
    pub fn error(&self) -> &str {
        match &self.phase {
            LoadPhase::Failed(message) => message,
            _ => "",
        }
    }

    pub fn is_ready(&self) -> bool {
        self.phase == LoadPhase::Ready
    }

    /// Applies one event. Returns the notice raised by it, if any, so the
    /// caller can schedule its dismissal.
    pub fn apply(&mut self, event: LibraryEvent) -> Option<Notice> {
        match event {
            LibraryEvent::Loaded(books) => {
                if !self.loading() {
                    return self.ignored("Loaded");
                }
                self.books = books;
                self.phase = LoadPhase::Ready;
                None
            }
            LibraryEvent::LoadFailed(message) => {
                if !self.loading() {
                    return self.ignored("LoadFailed");
                }
                self.books.clear();
                self.phase = LoadPhase::Failed(message);
                None
            }
            LibraryEvent::BookAdded(book) => {
                if !self.is_ready() {
                    return self.ignored("BookAdded");
                }
                self.books.insert(0, book);
                self.raise(NoticeKind::Success, MSG_ADDED)
            }
            LibraryEvent::BookUpdated(book) => {
                if !self.is_ready() {
                    return self.ignored("BookUpdated");
                }
                // The replacement goes to the end, not back into its old slot.
                self.books.retain(|b| b.id != book.id);
                self.books.push(book);
                self.raise(NoticeKind::Success, MSG_UPDATED)
            }
            LibraryEvent::BookDeleted(id) => {
                if !self.is_ready() {
                    return self.ignored("BookDeleted");
                }
                self.books.retain(|b| b.id != id);
                self.raise(NoticeKind::Success, MSG_DELETED)
            }
            LibraryEvent::AddFailed => self.raise(NoticeKind::Failure, MSG_ADD_FAILED),
            LibraryEvent::UpdateFailed => self.raise(NoticeKind::Failure, MSG_UPDATE_FAILED),
            LibraryEvent::DeleteFailed => self.raise(NoticeKind::Failure, MSG_DELETE_FAILED),
            LibraryEvent::NoticeExpired(seq) => {
                if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
                    self.notice = None;
                }
                None
            }
            LibraryEvent::NoticeDismissed => {
                self.notice = None;
                None
            }
            LibraryEvent::Unmounted => {
                self.phase = LoadPhase::Loading;
                self.books.clear();
                self.notice = None;
                None
            }
        }
    }

    fn raise(&mut self, kind: NoticeKind, message: &str) -> Option<Notice> {
        self.next_notice_seq += 1;
        let notice = Notice {
            seq: self.next_notice_seq,
            kind,
            message: message.to_string(),
        };
        self.notice = Some(notice.clone());
        Some(notice)
    }

    fn ignored(&self, event: &str) -> Option<Notice> {
        dioxus_logger::tracing::debug!("Ignoring {} while in phase {:?}", event, self.phase);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i64, title: &str) -> Book {
        Book {
            id: BookId(id),
            title: Some(title.to_string()),
            author: None,
            date_creation: None,
            pages: None,
        }
    }

    fn ready_with(books: Vec<Book>) -> LibraryState {
        let mut state = LibraryState::new();
        state.apply(LibraryEvent::Loaded(books));
        state
    }

    fn ids(state: &LibraryState) -> Vec<i64> {
        state.books.iter().map(|b| b.id.0).collect()
    }

    #[test]
    fn starts_loading_and_empty() {
        let state = LibraryState::new();
        assert!(state.loading());
        assert_eq!(state.error(), "");
        assert!(state.books.is_empty());
        assert!(state.notice.is_none());
    }

    #[test]
    fn load_success_keeps_server_order() {
        let state = ready_with(vec![book(2, "b"), book(1, "a")]);
        assert!(!state.loading());
        assert_eq!(state.error(), "");
        assert_eq!(ids(&state), vec![2, 1]);
    }

    #[test]
    fn load_failure_sets_error_and_leaves_books_empty() {
        let mut state = LibraryState::new();
        state.apply(LibraryEvent::LoadFailed("Failed to fetch".to_string()));
        assert!(!state.loading());
        assert_eq!(state.error(), "Failed to fetch");
        assert!(state.books.is_empty());
    }

    #[test]
    fn failed_is_terminal_for_the_mount() {
        let mut state = LibraryState::new();
        state.apply(LibraryEvent::LoadFailed("boom".to_string()));
        state.apply(LibraryEvent::Loaded(vec![book(1, "a")]));
        state.apply(LibraryEvent::BookAdded(book(2, "b")));
        assert_eq!(state.error(), "boom");
        assert!(state.books.is_empty());
    }

    #[test]
    fn add_prepends_and_notifies() {
        let mut state = ready_with(vec![book(1, "a")]);
        let notice = state.apply(LibraryEvent::BookAdded(book(2, "b")));

        assert_eq!(ids(&state), vec![2, 1]);
        let notice = notice.expect("success notice");
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.message, MSG_ADDED);
        assert_eq!(state.notice, Some(notice));
    }

    #[test]
    fn update_replaces_one_and_moves_it_last() {
        let mut state = ready_with(vec![book(1, "a"), book(2, "b"), book(3, "c")]);
        state.apply(LibraryEvent::BookUpdated(book(1, "a2")));

        assert_eq!(ids(&state), vec![2, 3, 1]);
        assert_eq!(state.books[2].title.as_deref(), Some("a2"));
    }

    #[test]
    fn delete_removes_matching_record() {
        let mut state = ready_with(vec![book(1, "a"), book(2, "b")]);
        state.apply(LibraryEvent::BookDeleted(BookId(1)));
        assert_eq!(ids(&state), vec![2]);
    }

    #[test]
    fn failures_notify_without_touching_books() {
        let mut state = ready_with(vec![book(1, "a")]);
        let before = state.books.clone();

        for (event, message) in [
            (LibraryEvent::AddFailed, MSG_ADD_FAILED),
            (LibraryEvent::UpdateFailed, MSG_UPDATE_FAILED),
            (LibraryEvent::DeleteFailed, MSG_DELETE_FAILED),
        ] {
            let notice = state.apply(event).expect("failure notice");
            assert_eq!(notice.kind, NoticeKind::Failure);
            assert_eq!(notice.message, message);
        }
        assert_eq!(state.books, before);
    }

    #[test]
    fn stale_expiry_does_not_clear_newer_notice() {
        let mut state = ready_with(vec![]);
        let first = state.apply(LibraryEvent::BookAdded(book(1, "a"))).unwrap();
        let second = state.apply(LibraryEvent::BookDeleted(BookId(1))).unwrap();
        assert!(second.seq > first.seq);

        state.apply(LibraryEvent::NoticeExpired(first.seq));
        assert_eq!(state.notice.as_ref().map(|n| n.seq), Some(second.seq));

        state.apply(LibraryEvent::NoticeExpired(second.seq));
        assert!(state.notice.is_none());
    }

    #[test]
    fn unmount_resets_to_defaults() {
        let mut state = ready_with(vec![book(1, "a")]);
        state.apply(LibraryEvent::BookAdded(book(2, "b")));
        state.apply(LibraryEvent::Unmounted);

        assert!(state.loading());
        assert_eq!(state.error(), "");
        assert!(state.books.is_empty());
        assert!(state.notice.is_none());
    }
}
