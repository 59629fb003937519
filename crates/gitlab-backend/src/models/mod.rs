mod merge_request;
mod project;
mod user;

pub use merge_request::*;
pub use project::*;
pub use user::*;
