//! Procedural macros for `trip-planner-rs`.
//!
//! `#[completion_schema]` turns a named-field struct into an LLM output target:
//! it implements `CompletionSchema` with a lazily built, cached JSON schema whose
//! title and property descriptions come from the struct's doc comments.

mod completion_schema;
mod schema_extraction;

use proc_macro::TokenStream;

/// Register a struct as a structured completion target.
///
/// Optional arguments: `name = "..."` overrides the schema name sent to the
/// model, `description = "..."` overrides the struct doc comment.
#[proc_macro_attribute]
pub fn completion_schema(attr: TokenStream, item: TokenStream) -> TokenStream {
    completion_schema::completion_schema(attr, item)
}
