//! Minimal blocking HTTP/1.1 server
//!
//! One request per connection and one thread per connection, responses are always sent with
//! `Connection: close`.

mod connection;
mod headers;
mod routes;
mod server;

pub use connection::HttpConnection;
pub use headers::{ContentHeaders, ContentType, HttpMethod, ResponseHeaders, TextEncoding};
pub use routes::ControlRoutes;
pub use server::{HttpHandler, HttpServer};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed request")]
    Parse,
    #[error("Request has no body")]
    NoData,
    #[error("Request body exceeds {0} bytes")]
    TooLarge(usize),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Status to answer a request that failed with this error, if the
    /// connection is still usable.
    pub fn status_code(&self) -> Option<headers::StatusCode> {
        match self {
            Error::Io(_) => None,
            Error::Parse | Error::NoData | Error::Json(_) => Some(400),
            Error::TooLarge(_) => Some(413),
        }
    }
}

pub type HttpResult = Result<(), Error>;
