//! Typed TypeScript HTTP client generation from OpenAPI/Swagger documents.
//!
//! For each resource tag the generator produces two artifacts: a type
//! document with one declaration per payload, response, and referenced
//! definition, and a request document with one axios-based function per
//! operation. Loading the document from disk, pretty-printing, and
//! persistence are the caller's concern; this crate turns an in-memory
//! document into ordered text.

mod error;
pub mod generate;
pub mod spec;

pub use error::GenerateError;
pub use generate::{TagArtifacts, TypeDeclaration, generate_for_tag};
pub use spec::Document;
