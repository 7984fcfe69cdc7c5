//! Recursive schema-to-type-text resolution.
//!
//! [`resolve`] maps one schema node to a TypeScript type fragment. Symbolic
//! references are not followed here; they are reported to the `on_reference`
//! callback and rendered by their derived name, and the closure engine
//! declares them later. Unsupported shapes degrade to `unknown` so that
//! resolution itself never fails.

use tracing::debug;

use crate::spec::{Schema, SchemaShape};

/// Prefix applied to every generated type name.
pub const INTERFACE_PREFIX: &str = "I";

const INDENT: &str = "  ";

/// Indentation for the given nesting depth.
pub fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}

/// Declaration name derived from a reference path: the prefix plus the
/// path's last segment.
pub fn ref_type_name(ref_path: &str) -> String {
    let name = ref_path.rsplit('/').next().unwrap_or(ref_path);
    format!("{INTERFACE_PREFIX}{name}")
}

/// Frame a resolved type as a field. With a name, renders `name: T` or
/// `name?: T`; without one (array items, anonymous responses), the bare
/// type text passes through. Every field in generated output goes through
/// this one function.
pub fn frame_field(name: Option<&str>, required: bool, type_text: &str) -> String {
    match name {
        Some(name) if required => format!("{name}: {type_text}"),
        Some(name) => format!("{name}?: {type_text}"),
        None => type_text.to_string(),
    }
}

/// Resolve a schema node to its type text, framed via [`frame_field`].
///
/// `depth` is the nesting depth of the node's own line; nested object
/// fields are indented one level further.
pub fn resolve(
    schema: &Schema,
    field: Option<&str>,
    required: bool,
    depth: usize,
    on_reference: &mut dyn FnMut(&str),
) -> String {
    let type_text = match schema.shape() {
        SchemaShape::Reference(ref_path) => {
            on_reference(ref_path);
            ref_type_name(ref_path)
        }
        SchemaShape::Object {
            properties,
            required: required_names,
        } => {
            if properties.is_empty() {
                "{}".to_string()
            } else {
                let inner = indent(depth + 1);
                let fields = properties
                    .iter()
                    .map(|(name, property)| {
                        let is_required = required_names.iter().any(|r| r == name);
                        let rendered =
                            resolve(property, Some(name), is_required, depth + 1, on_reference);
                        format!("{inner}{rendered}")
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                format!("{{\n{fields}\n{}}}", indent(depth))
            }
        }
        SchemaShape::Map(value) => {
            let value_text = match value {
                Some(value) => resolve(value, None, true, depth + 1, on_reference),
                None => "unknown".to_string(),
            };
            format!(
                "{{\n{}[key: string]: {value_text}\n{}}}",
                indent(depth + 1),
                indent(depth)
            )
        }
        SchemaShape::Array(item) => {
            // Items are never individually optional.
            let item_text = match item {
                Some(item) => resolve(item, None, true, depth, on_reference),
                None => "unknown".to_string(),
            };
            format!("({item_text})[]")
        }
        SchemaShape::Enum(values) => values
            .iter()
            .map(|value| format!("'{}'", super::utils::escape_single_quoted(value)))
            .collect::<Vec<_>>()
            .join(" | "),
        SchemaShape::String => "string".to_string(),
        SchemaShape::Number => "number".to_string(),
        SchemaShape::Boolean => "boolean".to_string(),
        SchemaShape::Unknown => {
            debug!(?field, "unsupported schema shape, falling back to unknown");
            "unknown".to_string()
        }
    };
    frame_field(field, required, &type_text)
}
