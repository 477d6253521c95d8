use gloo_net::http::{Request, Response};
use shared_types::{Book, BookCollection, BookDraft, BookId};

use crate::config::LibraryConfig;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The network layer rejected the call (offline, CORS, refused connection)
    #[error("{0}")]
    Request(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to parse JSON: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            // Keep the browser's own wording, e.g. "Failed to fetch".
            gloo_net::Error::JsError(js) => ApiError::Request(js.message),
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Request(other.to_string()),
        }
    }
}

fn check_status(config: &LibraryConfig, response: &Response) -> Result<(), ApiError> {
    if config.status_policy.accepts(response.ok()) {
        Ok(())
    } else {
        Err(ApiError::Status(response.status()))
    }
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET /books`, unwrapped from the embedded collection envelope.
pub async fn fetch_books(config: &LibraryConfig) -> Result<Vec<Book>, ApiError> {
    let url = config.collection_url();

    let response = Request::get(&url).send().await?;
    check_status(config, &response)?;

    let collection: BookCollection = decode(response).await?;
    Ok(collection.into_books())
}

/// `POST /books`; the server answers with the stored record and its new id.
pub async fn create_book(config: &LibraryConfig, draft: &BookDraft) -> Result<Book, ApiError> {
    let url = config.collection_url();

    let response = Request::post(&url)
        .json(draft)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await?;
    check_status(config, &response)?;

    decode(response).await
}

/// `PUT /books/{id}` with the full record.
pub async fn update_book(config: &LibraryConfig, book: &Book) -> Result<Book, ApiError> {
    let url = config.record_url(book.id);

    let response = Request::put(&url)
        .json(book)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await?;
    check_status(config, &response)?;

    decode(response).await
}

/// `DELETE /books/{id}`. Any response body is ignored.
pub async fn delete_book(config: &LibraryConfig, id: BookId) -> Result<(), ApiError> {
    let url = config.record_url(id);

    let response = Request::delete(&url).send().await?;
    check_status(config, &response)?;

    Ok(())
}
