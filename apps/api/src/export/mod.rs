// Export pipeline: validate request → build document → package DOCX → respond.
// Nothing here outlives a single request.

pub mod builder;
pub mod filename;
pub mod handlers;
pub mod markdown;
pub mod validation;
