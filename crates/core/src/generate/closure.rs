//! Reference closure: declare every definition reachable from the
//! references discovered during assembly, each exactly once.

use std::collections::HashSet;

use crate::error::GenerateError;
use crate::spec::{Document, SchemaShape};

use super::assemble::TypeDeclaration;
use super::resolve::{INTERFACE_PREFIX, ref_type_name, resolve};

/// Pending worklist of reference paths, gated by the set of names already
/// discovered. A reference whose derived name was seen before is not
/// re-enqueued, which keeps self- and mutually-recursive definitions from
/// being declared twice or re-queued forever.
#[derive(Debug, Default)]
pub struct ReferenceSet {
    pending: Vec<String>,
    known: HashSet<String>,
}

impl ReferenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a reference discovered during resolution.
    pub fn discover(&mut self, ref_path: &str) {
        if self.known.insert(ref_type_name(ref_path)) {
            self.pending.push(ref_path.to_string());
        }
    }

    fn pop(&mut self) -> Option<String> {
        self.pending.pop()
    }
}

/// Drain the worklist, prepending one internal declaration per definition.
///
/// Removal is most-recently-discovered-first and finished declarations are
/// prepended, so every definition ends up textually before the
/// declarations that reference it. A reference that resolves to nothing
/// aborts the run for this tag.
pub fn drain(
    document: &Document,
    mut references: ReferenceSet,
    declarations: &mut Vec<TypeDeclaration>,
) -> Result<(), GenerateError> {
    while let Some(ref_path) = references.pop() {
        let (name, schema) = document.resolve_ref(&ref_path)?;
        let rendered = resolve(schema, None, true, 0, &mut |path| references.discover(path));
        let declared_name = format!("{INTERFACE_PREFIX}{name}");
        let text = match schema.shape() {
            SchemaShape::Object { .. } | SchemaShape::Map(_) => {
                format!("interface {declared_name} {rendered}")
            }
            _ => format!("type {declared_name} = {rendered}"),
        };
        declarations.insert(
            0,
            TypeDeclaration {
                name: declared_name,
                exported: false,
                text,
            },
        );
    }
    Ok(())
}
