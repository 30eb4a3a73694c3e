pub mod api;
pub mod baseline;
pub mod cache;
pub mod config;
pub mod error;
pub mod key;
pub mod optimizer;
pub mod scorer;
// cmd and reports are binary modules (in main.rs or distinct files).

pub use error::{CfResult, CipherForgeError};
