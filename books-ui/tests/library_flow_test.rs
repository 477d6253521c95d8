//! End-to-end flows of the book library view state
//!
//! Drives the reducer and the display projection with the payloads the REST
//! backend sends, without a browser.
//!
//! Run with: cargo test -p books-ui --test library_flow_test

use books_ui::library::state::{LibraryEvent, LibraryState, NoticeKind};
use books_ui::presentation::{project_books, BookField, RowInput, UNKNOWN_LABEL};
use serde_json::json;
use shared_types::{Book, BookCollection, BookId};

fn loaded(body: serde_json::Value) -> LibraryState {
    let collection: BookCollection = serde_json::from_value(body).expect("valid envelope");
    let mut state = LibraryState::new();
    state.apply(LibraryEvent::Loaded(collection.into_books()));
    state
}

fn echo(body: serde_json::Value) -> Book {
    serde_json::from_value(body).expect("valid book")
}

#[test]
fn initial_fetch_renders_one_row() {
    let state = loaded(json!({
        "_embedded": {"books": [
            {"id": 1, "title": "Dune", "author": "Herbert", "dateCreation": "2020-01-01", "pages": 412}
        ]}
    }));

    assert!(!state.loading());
    assert_eq!(state.error(), "");

    let rows = project_books(&state.books);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].cell(BookField::Id), "1");
    assert_eq!(rows[0].cell(BookField::Title), "Dune");
    assert_eq!(rows[0].cell(BookField::Author), "Herbert");
    assert_eq!(rows[0].cell(BookField::DateCreation), "1/1/2020");
    assert_eq!(rows[0].cell(BookField::Pages), "412");
}

#[test]
fn failed_fetch_shows_only_the_message() {
    let mut state = LibraryState::new();
    state.apply(LibraryEvent::LoadFailed("Failed to fetch".to_string()));

    assert!(!state.loading());
    assert!(!state.is_ready());
    assert_eq!(state.error(), "Failed to fetch");
    assert!(state.books.is_empty());
}

#[test]
fn add_prepends_server_echo() {
    let mut state = loaded(json!({
        "_embedded": {"books": [{"id": 1, "title": "Dune"}]}
    }));

    let mut input = RowInput::default();
    input.set(BookField::Title, "New".to_string());
    input.set(BookField::DateCreation, "2021-05-05".to_string());
    input.set(BookField::Pages, "100".to_string());
    let body = serde_json::to_value(input.to_draft()).unwrap();
    assert_eq!(body["pages"], json!(100));
    assert_eq!(body["dateCreation"], json!("2021-05-05T00:00:00.000Z"));

    let created = echo(json!({
        "id": 2, "title": "New", "author": "", "dateCreation": "2021-05-05T00:00:00.000+00:00", "pages": 100
    }));
    let notice = state.apply(LibraryEvent::BookAdded(created)).unwrap();

    let ids: Vec<BookId> = state.books.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![BookId(2), BookId(1)]);
    assert_eq!(notice.kind, NoticeKind::Success);

    let rows = project_books(&state.books);
    assert_eq!(rows[0].author, UNKNOWN_LABEL);
}

#[test]
fn update_keeps_length_and_moves_record_last() {
    let mut state = loaded(json!({
        "_embedded": {"books": [
            {"id": 1, "title": "A"},
            {"id": 2, "title": "B"}
        ]}
    }));

    let mut edited = RowInput::from_book(&state.books[0]);
    edited.title = "A (2nd ed.)".to_string();
    let body = serde_json::to_value(edited.to_book(BookId(1))).unwrap();
    assert_eq!(body["id"], json!(1));
    assert_eq!(body["author"], json!(null));

    state.apply(LibraryEvent::BookUpdated(echo(body)));

    assert_eq!(state.books.len(), 2);
    assert_eq!(state.books[0].id, BookId(2));
    assert_eq!(state.books[1].title.as_deref(), Some("A (2nd ed.)"));
}

#[test]
fn delete_removes_exactly_one() {
    let mut state = loaded(json!({
        "_embedded": {"books": [{"id": 1}, {"id": 2}]}
    }));

    state.apply(LibraryEvent::BookDeleted(BookId(1)));

    assert_eq!(state.books.len(), 1);
    assert_eq!(state.books[0].id, BookId(2));
}

#[test]
fn failed_mutation_leaves_books_unchanged() {
    let mut state = loaded(json!({
        "_embedded": {"books": [{"id": 1}, {"id": 2}]}
    }));
    let before = state.books.clone();

    let notice = state.apply(LibraryEvent::DeleteFailed).unwrap();

    assert_eq!(notice.kind, NoticeKind::Failure);
    assert_eq!(state.books, before);
}
