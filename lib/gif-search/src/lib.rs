mod request;
mod response;
mod search;

pub use request::APIConfig;
pub use response::SearchResponse;
pub use search::GifSearch;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Request Error {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream returned {0}")]
    Status(reqwest::StatusCode),

    #[error("Invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}
