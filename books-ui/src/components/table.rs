use dioxus::prelude::*;
use shared_types::{Book, BookId};

use crate::components::{EditRow, RowFuture};
use crate::interop::{alert, confirm};
use crate::library::state::{MSG_ADD_FAILED, MSG_DELETE_FAILED, MSG_UPDATE_FAILED};
use crate::presentation::{project_book, BookField, RowInput, COLUMNS};

const DELETE_PROMPT: &str = "Are you sure you want to delete this row?";

#[derive(Debug, Clone, PartialEq)]
enum TableMode {
    Idle,
    Adding(RowInput),
    Editing(BookId, RowInput),
}

/// Editable book grid.
///
/// Rows are rendered through the display projection; add/edit inputs are
/// seeded from the raw records. Every editing callback is awaited before the
/// table leaves its add/edit state, and a rejected call raises a blocking
/// alert.
#[component]
pub fn BookTable(
    title: String,
    books: Vec<Book>,
    on_row_add: Callback<RowInput, RowFuture>,
    on_row_update: Callback<(BookId, RowInput), RowFuture>,
    on_row_delete: Callback<BookId, RowFuture>,
) -> Element {
    let mut mode = use_signal(|| TableMode::Idle);
    let mut busy = use_signal(|| false);

    let start_add = move |_: MouseEvent| {
        if busy() {
            return;
        }
        mode.set(TableMode::Adding(RowInput::default()));
    };

    let change_field = use_callback(move |(field, value): (BookField, String)| {
        match &mut *mode.write() {
            TableMode::Adding(input) | TableMode::Editing(_, input) => input.set(field, value),
            TableMode::Idle => {}
        }
    });

    let cancel = use_callback(move |_: ()| {
        if !busy() {
            mode.set(TableMode::Idle);
        }
    });

    let save = use_callback(move |_: ()| {
        if busy() {
            return;
        }

        let (pending, failure_message) = match mode() {
            TableMode::Adding(input) => (on_row_add.call(input), MSG_ADD_FAILED),
            TableMode::Editing(id, input) => (on_row_update.call((id, input)), MSG_UPDATE_FAILED),
            TableMode::Idle => return,
        };

        busy.set(true);
        spawn(async move {
            if pending.await.is_err() {
                alert(failure_message);
            }
            busy.set(false);
            mode.set(TableMode::Idle);
        });
    });

    let delete_row = use_callback(move |id: BookId| {
        if busy() || !confirm(DELETE_PROMPT) {
            return;
        }

        let pending = on_row_delete.call(id);
        busy.set(true);
        spawn(async move {
            if pending.await.is_err() {
                alert(MSG_DELETE_FAILED);
            }
            busy.set(false);
        });
    });

    let current_mode = mode();
    let is_busy = busy();
    let handlers = RowHandlers {
        mode,
        change_field,
        save,
        cancel,
        delete_row,
    };

    let add_row = match current_mode.clone() {
        TableMode::Adding(input) => Some(rsx! {
            EditRow {
                id_label: String::new(),
                input,
                busy: is_busy,
                on_change: change_field,
                on_save: save,
                on_cancel: cancel,
            }
        }),
        _ => None,
    };

    rsx! {
        style { {TABLE_STYLES} }

        div {
            class: "book-table",

            div {
                class: "book-table-toolbar",
                h6 { class: "book-table-title", "{title}" }
                button {
                    class: "row-action add",
                    title: "Add",
                    disabled: is_busy || current_mode != TableMode::Idle,
                    onclick: start_add,
                    "+"
                }
            }

            table {
                thead {
                    tr {
                        th { class: "book-actions", "Actions" }
                        for column in COLUMNS.iter() {
                            th {
                                key: "{column.title}",
                                class: if column.numeric { "numeric" } else { "" },
                                "{column.title}"
                            }
                        }
                    }
                }

                tbody {
                    {add_row}

                    if books.is_empty() && current_mode == TableMode::Idle {
                        tr {
                            td {
                                class: "book-empty",
                                colspan: "{COLUMNS.len() + 1}",
                                "No records to display"
                            }
                        }
                    }

                    for book in books.iter() {
                        {render_row(book, &current_mode, is_busy, handlers)}
                    }
                }
            }
        }
    }
}

#[derive(Clone, Copy)]
struct RowHandlers {
    mode: Signal<TableMode>,
    change_field: Callback<(BookField, String)>,
    save: Callback<()>,
    cancel: Callback<()>,
    delete_row: Callback<BookId>,
}

fn render_row(book: &Book, current_mode: &TableMode, busy: bool, handlers: RowHandlers) -> Element {
    let id = book.id;

    if let TableMode::Editing(editing_id, input) = current_mode {
        if *editing_id == id {
            return rsx! {
                EditRow {
                    key: "{id}",
                    id_label: id.to_string(),
                    input: input.clone(),
                    busy,
                    on_change: handlers.change_field,
                    on_save: handlers.save,
                    on_cancel: handlers.cancel,
                }
            };
        }
    }

    let row = project_book(book);
    let seed = RowInput::from_book(book);
    let idle = *current_mode == TableMode::Idle && !busy;
    let mut mode = handlers.mode;
    let delete_row = handlers.delete_row;

    rsx! {
        tr {
            key: "{id}",
            class: "book-row",

            td {
                class: "book-actions",
                button {
                    class: "row-action edit",
                    title: "Edit",
                    disabled: !idle,
                    onclick: move |_| mode.set(TableMode::Editing(id, seed.clone())),
                    "✎"
                }
                button {
                    class: "row-action delete",
                    title: "Delete",
                    disabled: !idle,
                    onclick: move |_| delete_row.call(id),
                    "🗑"
                }
            }

            for column in COLUMNS.iter() {
                td {
                    key: "{column.title}",
                    class: if column.numeric { "book-cell numeric" } else { "book-cell" },
                    "{row.cell(column.field)}"
                }
            }
        }
    }
}

const TABLE_STYLES: &str = r#"
.book-table {
    background: var(--window-bg, #ffffff);
    border-radius: 4px;
    box-shadow: 0 2px 1px -1px rgba(0,0,0,0.2), 0 1px 1px 0 rgba(0,0,0,0.14), 0 1px 3px 0 rgba(0,0,0,0.12);
    overflow-x: auto;
}

.book-table-toolbar {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0 1.5rem;
    min-height: 64px;
}

.book-table-title {
    font-size: 1.25rem;
    font-weight: 500;
    margin: 0;
}

.book-table table {
    width: 100%;
    border-collapse: collapse;
}

.book-table th,
.book-table td {
    padding: 1rem;
    border-bottom: 1px solid var(--border-color, rgba(224, 224, 224, 1));
    text-align: left;
    font-size: 0.875rem;
}

.book-table th.numeric,
.book-table td.numeric {
    text-align: right;
}

.book-row.busy {
    opacity: 0.6;
}

.book-actions {
    white-space: nowrap;
    width: 1%;
}

.row-action {
    background: none;
    border: none;
    cursor: pointer;
    font-size: 1.1rem;
    padding: 0.25rem 0.5rem;
    color: var(--text-secondary, rgba(0, 0, 0, 0.54));
}

.row-action:disabled {
    cursor: default;
    opacity: 0.4;
}

.book-input {
    width: 100%;
    padding: 0.25rem 0;
    border: none;
    border-bottom: 1px solid var(--text-secondary, rgba(0, 0, 0, 0.42));
    background: transparent;
    font: inherit;
}

.book-empty {
    text-align: center;
    color: var(--text-muted, rgba(0, 0, 0, 0.54));
}
"#;
