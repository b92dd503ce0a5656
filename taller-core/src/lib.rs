mod auth;
mod error;
mod repository;
mod seed;
mod store;

pub mod daily;
pub mod domain;
pub mod report;

pub use auth::*;
pub use error::*;
pub use report::*;
pub use repository::*;
pub use seed::*;
pub use store::*;
