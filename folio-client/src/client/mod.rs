//! Transports for the folio API.
//!
//! [`NetworkHttpClient`] talks to a remote server; [`OneshotHttpClient`]
//! (feature `in-process`) calls an axum `Router` directly.

pub mod http;
#[cfg(feature = "in-process")]
pub mod http_oneshot;

pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http_oneshot::OneshotHttpClient;
