//! Generation pipeline for one resource tag.
//!
//! `generate_for_tag` walks the tag's operations, assembles each one into
//! declarations and a request function, then drains the reference closure
//! so every named definition reachable from the operations is declared
//! exactly once, in dependency order.

mod assemble;
mod closure;
mod emit;
mod naming;
mod resolve;
mod utils;

use tracing::{debug, info};

use crate::error::GenerateError;
use crate::spec::Document;

pub use assemble::TypeDeclaration;
pub use emit::TagArtifacts;

/// Generate the artifacts for one tag.
///
/// A tag with no matching operations yields an empty, valid artifact
/// pair. Broken references and operation-name collisions are fatal for
/// the tag.
pub fn generate_for_tag(document: &Document, tag: &str) -> Result<TagArtifacts, GenerateError> {
    let mut declarations = Vec::new();
    let mut functions = Vec::new();
    let mut references = closure::ReferenceSet::new();
    let mut stems = naming::StemRegistry::new();

    for (path, methods) in document.paths_for_tag(tag) {
        for method in methods {
            let Some(operation) = document.operation(path, method) else {
                continue;
            };
            let stem = naming::operation_stem(method, path);
            stems.claim(&stem, method, path)?;
            debug!(%method, %path, %stem, "assembling operation");

            let assembled = assemble::assemble(&stem, path, method, operation, &mut |ref_path| {
                references.discover(ref_path);
            });
            declarations.extend(assembled.declarations);
            functions.push(assembled.function);
        }
    }

    closure::drain(document, references, &mut declarations)?;

    info!(
        tag,
        declarations = declarations.len(),
        functions = functions.len(),
        "generated artifacts"
    );
    Ok(TagArtifacts {
        declarations,
        functions,
    })
}
