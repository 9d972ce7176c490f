//! Error model shared by the folio mock server and its client
//!
//! Every failure carries an [`ErrorCode`] whose number picks its
//! [`ErrorCategory`]: 0xxx general, 40xx sequences, 41xx invoice series, 42xx tax profiles, 9xxx system.
//! [`AppError`] adds a message and structured details; the server
//! answers with it wrapped in an [`ApiResponse`].
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::SeriesInUse).with_detail("id", 7);
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(4104));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
