//! Response normalization: content-type parsing and the result handed to callers.

mod content_type;
mod model;

pub use content_type::{ContentType, content_type_header};
pub use model::FetchResult;
