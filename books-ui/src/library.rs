//! Book library view: the single page of the application
//!
//! Owns the view state, fires the initial load once per mount, and turns table
//! edits into REST calls whose results are folded back through
//! [`state::LibraryState::apply`].

use dioxus::prelude::*;
use futures_util::FutureExt;
use shared_types::BookId;

use crate::components::{BookTable, ErrorState, LoadingState, RowFuture, Snackbar};
use crate::config::LibraryConfig;
use crate::presentation::RowInput;

pub mod effects;
pub mod state;

use effects::{add_book, edit_book, load_initial_books, remove_book};
use state::{LibraryEvent, LibraryState, LoadPhase};

#[component]
pub fn BookLibrary(#[props(default)] config: LibraryConfig) -> Element {
    let mut state = use_signal(LibraryState::new);
    let mut load_started = use_signal(|| false);
    let config_signal = use_signal(|| config.clone());

    // Initial load, exactly once per mount
    use_effect(move || {
        if load_started() {
            return;
        }
        load_started.set(true);

        let config = config_signal();
        spawn(async move {
            load_initial_books(config, state).await;
        });
    });

    use_drop(move || {
        if let Ok(mut current) = state.try_write() {
            current.apply(LibraryEvent::Unmounted);
        }
    });

    let on_row_add = use_callback(move |input: RowInput| -> RowFuture {
        add_book(config_signal(), input, state).boxed_local()
    });

    let on_row_update = use_callback(move |(id, input): (BookId, RowInput)| -> RowFuture {
        edit_book(config_signal(), id, input, state).boxed_local()
    });

    let on_row_delete = use_callback(move |id: BookId| -> RowFuture {
        remove_book(config_signal(), id, state).boxed_local()
    });

    let on_dismiss_notice = use_callback(move |_: ()| {
        state.write().apply(LibraryEvent::NoticeDismissed);
    });

    let (phase, books, notice) = {
        let current = state.read();
        (
            current.phase.clone(),
            current.books.clone(),
            current.notice.clone(),
        )
    };
    let title = config_signal.read().title.clone();

    let body = match phase {
        LoadPhase::Loading => rsx! { LoadingState {} },
        LoadPhase::Failed(error) => rsx! { ErrorState { error } },
        LoadPhase::Ready => rsx! {
            div {
                class: "library-table",
                BookTable {
                    title,
                    books,
                    on_row_add,
                    on_row_update,
                    on_row_delete,
                }
            }
        },
    };

    let snackbar = notice.map(|notice| {
        rsx! {
            Snackbar { notice, on_dismiss: on_dismiss_notice }
        }
    });

    rsx! {
        style { {LIBRARY_STYLES} }
        {body}
        {snackbar}
    }
}

const LIBRARY_STYLES: &str = r#"
.library-table {
    margin: 3rem 2rem;
}
"#;
