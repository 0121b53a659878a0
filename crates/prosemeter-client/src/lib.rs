//! # prosemeter-client
//!
//! HTTP clients for the two upstream services Prosemeter talks to:
//!
//! - a dictionary-definition API keyed by word ([`DictionaryClient`])
//! - a random-advice API ([`AdviceClient`])
//!
//! Both clients convert every failure — non-success status, timeout,
//! transport error, unexpected body shape — into a tagged result variant
//! at their boundary. Callers never see an `Err` or a panic from a lookup;
//! they see [`LookupResult::Failure`] or [`AdviceResult::Failure`] with a
//! human-readable reason.
//!
//! Client configuration (timeout, upstream URLs) lives in [`HttpConfig`],
//! a plain value passed into each client rather than ambient global state.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod advice;
pub mod config;
pub mod dictionary;
pub mod error;

pub use advice::{AdviceClient, AdviceResult, ADVICE_FALLBACK};
pub use config::HttpConfig;
pub use dictionary::{DictionaryClient, LookupResult};
pub use error::{Error, Result};
