//! Custom extractors for request handling.
//!
//! Every rejection is an `AppError`, so clients always get a `{message}` body.

mod json_body;
mod params;

pub use json_body::JsonBody;
pub use params::{PathParams, QueryParams};
