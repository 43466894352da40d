//! JSON schema plumbing for structured LLM output.

pub mod schema;
pub(crate) mod validation;

pub use schema::{apply_doc_comments, CompletionSchema, SchemaHandle};
