pub mod config;
pub mod document;
pub mod error;
pub mod fetch;
pub mod job;
pub mod normalize;
pub mod platform;

pub use config::Config;
pub use error::{CurioError, Result};
pub use platform::Platform;
