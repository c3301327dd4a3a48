//! Service layer for the WELF backend
//!
//! Business logic between the HTTP/CLI front ends and the stores.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Services hold trait objects")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure vars are idiomatic")]

mod error;
mod impact_service;
mod resource_service;
mod story_service;


pub use error::ServiceError;
pub use impact_service::{FlatMarker, GlobeMarker, ImpactService};
pub use resource_service::ResourceService;
pub use story_service::StoryService;
