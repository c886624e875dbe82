//! Request extractors that turn rejections into our error body.

mod json;
mod query;

pub use json::AppJson;
pub use query::AppQuery;
