//! # prosemeter-web
//!
//! HTTP surface for Prosemeter:
//!
//! - `GET /` — input form, no analysis
//! - `GET /get_advice` — JSON `{"advice": "..."}`, always 200
//! - `POST /analyze` — form field `text`, renders the analyzed page
//!
//! Each request is self-contained: statistics come from `prosemeter-core`,
//! upstream lookups from `prosemeter-client`, and every upstream failure
//! degrades to a partial page rather than an error response.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod render;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use handlers::{router, AppState};
