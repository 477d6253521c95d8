use futures_util::future::LocalBoxFuture;

use crate::api::ApiError;

mod edit_row;
mod snackbar;
mod status_views;
mod table;

pub use edit_row::EditRow;
pub use snackbar::Snackbar;
pub use status_views::{ErrorState, LoadingState};
pub use table::BookTable;

/// What the table's editing callbacks hand back: the table awaits it before
/// leaving its add/edit row, and alerts if it resolves to an error.
pub type RowFuture = LocalBoxFuture<'static, Result<(), ApiError>>;
