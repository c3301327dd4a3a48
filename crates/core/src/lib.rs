//! Core types for the WELF backend
//!
//! Domain types shared by the storage, service, HTTP and client crates.

pub mod constants;
pub mod env_config;
mod error;
mod impact;
pub mod motion;
mod price;
mod resource;
mod story;

pub use error::*;
pub use impact::*;
pub use price::*;
pub use resource::*;
pub use story::*;
