//! Folio Mock - in-memory folio numbering server
//!
//! Serves folio sequences and CFDI invoice series over the same JSON API the
//! client speaks, backed by a locked in-memory store.

pub mod api;
pub mod config;
pub mod logger;
pub mod state;
pub mod store;

pub use api::build_router;
pub use config::Config;
pub use state::AppState;
pub use store::FolioStore;
