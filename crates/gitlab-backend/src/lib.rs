pub mod client;
mod convert;
pub mod error;
pub mod models;
mod trait_impl;


pub use client::GitLabClient;
pub use error::{GitLabError, Result};
pub use models::*;

pub use mr_core::{MergeRequestSource, MrError};
