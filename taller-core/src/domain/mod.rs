mod project;
mod time_log;
mod worker;

pub use project::*;
pub use time_log::*;
pub use worker::*;
