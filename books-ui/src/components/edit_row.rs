use dioxus::prelude::*;

use crate::presentation::{BookField, RowInput, COLUMNS};

/// Inline input row used both for adding and for editing a book.
#[component]
pub fn EditRow(
    id_label: String,
    input: RowInput,
    busy: bool,
    on_change: Callback<(BookField, String)>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
) -> Element {
    rsx! {
        tr {
            class: if busy { "book-row editing busy" } else { "book-row editing" },

            td {
                class: "book-actions",
                button {
                    class: "row-action save",
                    title: "Save",
                    disabled: busy,
                    onclick: move |_| on_save.call(()),
                    "✓"
                }
                button {
                    class: "row-action cancel",
                    title: "Cancel",
                    disabled: busy,
                    onclick: move |_| on_cancel.call(()),
                    "✕"
                }
            }

            for column in COLUMNS.iter().copied() {
                td {
                    key: "{column.title}",
                    class: if column.numeric { "book-cell numeric" } else { "book-cell" },
                    if column.editable {
                        input {
                            class: "book-input",
                            r#type: if column.numeric { "number" } else { "text" },
                            placeholder: placeholder_for(column.field),
                            value: "{input.value(column.field)}",
                            disabled: busy,
                            oninput: move |e| on_change.call((column.field, e.value())),
                            onkeydown: move |e| {
                                if e.key() == Key::Enter {
                                    on_save.call(());
                                } else if e.key() == Key::Escape {
                                    on_cancel.call(());
                                }
                            },
                        }
                    } else {
                        span { class: "book-id", "{id_label}" }
                    }
                }
            }
        }
    }
}

fn placeholder_for(field: BookField) -> &'static str {
    match field {
        BookField::Id => "",
        BookField::Title => "Title",
        BookField::Author => "Author",
        BookField::DateCreation => "YYYY-MM-DD",
        BookField::Pages => "Pages",
    }
}
