//! Jargon domain model
//!
//! The record types exchanged with the slang dictionary service and the
//! client-side checks that run before anything touches the network:
//! - [`SlangTerm`]: a server-owned dictionary entry
//! - [`NewSlangTerm`]: a submission payload (no `id`, no server-computed fields)
//! - [`ValidationError`]: pre-submission rejection reasons

mod term;
mod validate;

pub use term::{NewSlangTerm, SimilarTerm, SlangTerm};
pub use validate::ValidationError;
