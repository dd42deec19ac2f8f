//! Shared types for list endpoints and response bodies.

mod pagination;
mod response;

pub use pagination::{ListParams, ListQuery, PageWindow, SortOrder};
pub use response::MessageResponse;
