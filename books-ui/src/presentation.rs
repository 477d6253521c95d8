//! Book display projection: pure functions, no RSX, no signals
//!
//! Rows shown in the table are a one-way projection of the records. Edits go
//! back through [`RowInput`], which rebuilds typed values from the raw strings.

use shared_types::{Book, BookDraft, BookId, CreationDate};

pub const UNKNOWN_LABEL: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookField {
    Id,
    Title,
    Author,
    DateCreation,
    Pages,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    pub field: BookField,
    pub editable: bool,
    pub numeric: bool,
}

pub const COLUMNS: [Column; 5] = [
    Column {
        title: "Id",
        field: BookField::Id,
        editable: false,
        numeric: false,
    },
    Column {
        title: "Title",
        field: BookField::Title,
        editable: true,
        numeric: false,
    },
    Column {
        title: "Author",
        field: BookField::Author,
        editable: true,
        numeric: false,
    },
    Column {
        title: "Creation Date",
        field: BookField::DateCreation,
        editable: true,
        numeric: false,
    },
    Column {
        title: "Pages",
        field: BookField::Pages,
        editable: true,
        numeric: true,
    },
];

/// One table row, every cell already rendered to text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRow {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub date_creation: String,
    pub pages: String,
}

impl BookRow {
    pub fn cell(&self, field: BookField) -> String {
        match field {
            BookField::Id => self.id.to_string(),
            BookField::Title => self.title.clone(),
            BookField::Author => self.author.clone(),
            BookField::DateCreation => self.date_creation.clone(),
            BookField::Pages => self.pages.clone(),
        }
    }
}

pub fn project_book(book: &Book) -> BookRow {
    BookRow {
        id: book.id,
        title: text_or_unknown(book.title.as_deref()),
        author: text_or_unknown(book.author.as_deref()),
        date_creation: book
            .date_creation
            .map(format_locale_date)
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
        pages: match book.pages {
            Some(pages) if pages != 0 => pages.to_string(),
            _ => UNKNOWN_LABEL.to_string(),
        },
    }
}

pub fn project_books(books: &[Book]) -> Vec<BookRow> {
    books.iter().map(project_book).collect()
}

fn text_or_unknown(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => UNKNOWN_LABEL.to_string(),
    }
}

/// Calendar date in the browser's locale.
#[cfg(target_arch = "wasm32")]
pub fn format_locale_date(date: CreationDate) -> String {
    let js_date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(date.epoch_millis() as f64));
    js_date
        .to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

/// Calendar date in en-US form (`1/1/2020`) when no browser locale exists.
#[cfg(not(target_arch = "wasm32"))]
pub fn format_locale_date(date: CreationDate) -> String {
    date.timestamp().format("%-m/%-d/%Y").to_string()
}

// ============================================================================
// Edit translation
// ============================================================================

/// Raw strings typed into an add/edit row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowInput {
    pub title: String,
    pub author: String,
    pub date_creation: String,
    pub pages: String,
    /// Record the row was seeded from; `None` while adding.
    base: Option<Book>,
}

impl RowInput {
    /// Seeds inputs from the record itself, not from its display labels,
    /// so an untouched "Unknown" is never written back.
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone().unwrap_or_default(),
            author: book.author.clone().unwrap_or_default(),
            date_creation: book
                .date_creation
                .map(|d| d.to_iso_date())
                .unwrap_or_default(),
            pages: book.pages.map(|p| p.to_string()).unwrap_or_default(),
            base: Some(book.clone()),
        }
    }

    pub fn value(&self, field: BookField) -> &str {
        match field {
            BookField::Id => "",
            BookField::Title => &self.title,
            BookField::Author => &self.author,
            BookField::DateCreation => &self.date_creation,
            BookField::Pages => &self.pages,
        }
    }

    pub fn set(&mut self, field: BookField, value: String) {
        match field {
            BookField::Id => {}
            BookField::Title => self.title = value,
            BookField::Author => self.author = value,
            BookField::DateCreation => self.date_creation = value,
            BookField::Pages => self.pages = value,
        }
    }

    pub fn to_draft(&self) -> BookDraft {
        let base = self.base.as_ref();
        BookDraft {
            title: text_input(&self.title, base.map(|b| &b.title)),
            author: text_input(&self.author, base.map(|b| &b.author)),
            date_creation: parse_date_input(&self.date_creation),
            pages: parse_int_prefix(&self.pages),
        }
    }

    pub fn to_book(&self, id: BookId) -> Book {
        Book::from_draft(id, self.to_draft())
    }
}

/// Empty text stays absent if the seeded record had no value there.
fn text_input(raw: &str, seeded: Option<&Option<String>>) -> Option<String> {
    match seeded {
        Some(None) if raw.is_empty() => None,
        _ => Some(raw.to_string()),
    }
}

/// Invalid or empty input yields `None`, which is sent as `null`.
pub fn parse_date_input(raw: &str) -> Option<CreationDate> {
    let raw = raw.trim();
    CreationDate::parse(raw).or_else(|| {
        chrono::NaiveDate::parse_from_str(raw, "%m/%d/%Y")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| CreationDate(naive.and_utc()))
    })
}

/// Leading-integer parse: `"  100abc"` is 100, `"abc"` is `None`.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn browser_locale_date_mentions_the_year() {
        let date = CreationDate::parse("2020-06-15").unwrap();
        let label = format_locale_date(date);
        assert!(label.contains("2020"), "unexpected locale date: {label}");
    }
}
