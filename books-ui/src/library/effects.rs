use dioxus::prelude::{spawn, Signal, WritableExt};
use gloo_timers::future::TimeoutFuture;
use shared_types::BookId;

use crate::api::{create_book, delete_book, fetch_books, update_book, ApiError};
use crate::config::LibraryConfig;
use crate::library::state::{LibraryEvent, LibraryState, Notice};
use crate::presentation::RowInput;

pub async fn load_initial_books(config: LibraryConfig, mut state: Signal<LibraryState>) {
    match fetch_books(&config).await {
        Ok(books) => {
            dioxus_logger::tracing::info!("Loaded {} books", books.len());
            state.write().apply(LibraryEvent::Loaded(books));
        }
        Err(e) => {
            dioxus_logger::tracing::error!("Failed to load books: {}", e);
            state.write().apply(LibraryEvent::LoadFailed(e.to_string()));
        }
    }
}

pub async fn add_book(
    config: LibraryConfig,
    input: RowInput,
    mut state: Signal<LibraryState>,
) -> Result<(), ApiError> {
    let draft = input.to_draft();

    let outcome = create_book(&config, &draft).await;
    if let Err(e) = &outcome {
        dioxus_logger::tracing::warn!("Failed to add book: {}", e);
    }
    let (event, result) = settle(outcome, LibraryEvent::BookAdded, LibraryEvent::AddFailed);

    let notice = state.write().apply(event);
    schedule_notice_expiry(notice, config.notice_duration_ms, state);
    result
}

pub async fn edit_book(
    config: LibraryConfig,
    id: BookId,
    input: RowInput,
    mut state: Signal<LibraryState>,
) -> Result<(), ApiError> {
    let book = input.to_book(id);

    let outcome = update_book(&config, &book).await;
    if let Err(e) = &outcome {
        dioxus_logger::tracing::warn!("Failed to update book {}: {}", id, e);
    }
    let (event, result) = settle(outcome, LibraryEvent::BookUpdated, LibraryEvent::UpdateFailed);

    let notice = state.write().apply(event);
    schedule_notice_expiry(notice, config.notice_duration_ms, state);
    result
}

pub async fn remove_book(
    config: LibraryConfig,
    id: BookId,
    mut state: Signal<LibraryState>,
) -> Result<(), ApiError> {
    let outcome = delete_book(&config, id).await;
    if let Err(e) = &outcome {
        dioxus_logger::tracing::warn!("Failed to delete book {}: {}", id, e);
    }
    let (event, result) = settle(
        outcome,
        |()| LibraryEvent::BookDeleted(id),
        LibraryEvent::DeleteFailed,
    );

    let notice = state.write().apply(event);
    schedule_notice_expiry(notice, config.notice_duration_ms, state);
    result
}

/// Splits a mutation outcome into the reducer event and the result handed back
/// to the table, which alerts on `Err`.
fn settle<T>(
    outcome: Result<T, ApiError>,
    applied: impl FnOnce(T) -> LibraryEvent,
    failed: LibraryEvent,
) -> (LibraryEvent, Result<(), ApiError>) {
    match outcome {
        Ok(value) => (applied(value), Ok(())),
        Err(e) => (failed, Err(e)),
    }
}

fn schedule_notice_expiry(
    notice: Option<Notice>,
    duration_ms: u32,
    mut state: Signal<LibraryState>,
) {
    let Some(notice) = notice else {
        return;
    };

    spawn(async move {
        TimeoutFuture::new(duration_ms).await;
        dioxus_logger::tracing::debug!("Notice {} expired", notice.seq);
        state.write().apply(LibraryEvent::NoticeExpired(notice.seq));
    });
}
