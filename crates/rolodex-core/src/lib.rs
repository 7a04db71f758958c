pub mod config;
pub mod error;
pub mod types;

pub use config::RolodexConfig;
pub use error::{Result, RolodexError};
pub use types::*;
