pub mod aggregate;
pub mod error;
pub mod models;
pub mod traits;

pub use aggregate::{aggregate, group_merge_requests, MergeRequestReport};
pub use error::{MrError, Result};
pub use models::*;
pub use traits::MergeRequestSource;
