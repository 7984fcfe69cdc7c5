//! OpenAPI document model and spec accessor.
//!
//! This module defines a minimal serde view over the subset of an
//! OpenAPI/Swagger document that the generator consumes: the tag list, the
//! paths table with one operation per lowercase HTTP method, and the shared
//! `components/schemas` section reachable through `$ref`.
//!
//! Everything outside that subset is ignored during deserialization. The
//! accessor methods on [`Document`] are the only way generation code touches
//! the tree: tag listing, tag-filtered path selection, operation lookup, and
//! symbolic reference resolution.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::error::GenerateError;

/// HTTP methods the paths table models; other path-item keys (path-level
/// `parameters`, `summary`, vendor extensions) are dropped on load.
const HTTP_METHODS: [&str; 5] = ["get", "put", "post", "delete", "patch"];

/// Root document.
#[derive(Debug, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub tags: Vec<TagDecl>,
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
    pub components: Option<Components>,
}

/// A declared resource tag.
#[derive(Debug, Deserialize)]
pub struct TagDecl {
    pub name: String,
}

/// Components section containing reusable schema definitions.
#[derive(Debug, Deserialize)]
pub struct Components {
    pub schemas: Option<IndexMap<String, Schema>>,
}

/// Operations of one path template, keyed by lowercase HTTP method in
/// document order.
#[derive(Debug, Default)]
pub struct PathItem {
    pub operations: IndexMap<String, Operation>,
}

impl<'de> Deserialize<'de> for PathItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, serde_json::Value>::deserialize(deserializer)?;
        let mut operations = IndexMap::new();
        for (key, value) in raw {
            if HTTP_METHODS.contains(&key.as_str()) {
                let operation = Operation::deserialize(value).map_err(serde::de::Error::custom)?;
                operations.insert(key, operation);
            }
        }
        Ok(PathItem { operations })
    }
}

/// An API operation (one path + method).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default)]
    pub tags: Vec<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    pub request_body: Option<RequestBody>,
    #[serde(default)]
    pub responses: IndexMap<String, Response>,
}

/// A parameter declaration. Only `path` and `query` locations are consumed
/// by assembly; others are carried through and dropped there.
#[derive(Debug, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: String,
    #[serde(default)]
    pub required: bool,
    pub schema: Option<Schema>,
    pub summary: Option<String>,
    pub description: Option<String>,
}

/// A request body definition.
#[derive(Debug, Deserialize)]
pub struct RequestBody {
    #[serde(default)]
    pub required: bool,
    pub description: Option<String>,
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

/// A response definition for one status code (or `default`).
#[derive(Debug, Deserialize)]
pub struct Response {
    pub content: Option<IndexMap<String, MediaType>>,
}

/// Media type content (e.g. `application/json`).
#[derive(Debug, Deserialize)]
pub struct MediaType {
    pub schema: Option<Schema>,
}

/// A schema node from the specification.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: Option<String>,

    /// Reference to a named definition elsewhere in the document.
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,

    /// Properties for closed object types, in document order.
    pub properties: Option<IndexMap<String, Schema>>,

    /// Required property names for closed object types.
    pub required: Option<Vec<String>>,

    /// Item schema for array types.
    pub items: Option<Box<Schema>>,

    /// Permitted literal values for string types, order preserved.
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<String>>,

    /// Value schema for open (map-shaped) object types.
    pub additional_properties: Option<AdditionalProperties>,
}

/// Additional properties can be a boolean or a schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Bool(bool),
    Schema(Box<Schema>),
}

/// Explicit classification of a schema node. Exactly one shape is active;
/// an object node is either closed (explicit properties) or an open map,
/// never both, and the fallback is an auditable branch rather than an
/// implicit else.
#[derive(Debug)]
pub enum SchemaShape<'a> {
    /// A symbolic reference carrying its path string.
    Reference(&'a str),
    /// Closed object: explicit properties plus the required-name set.
    Object {
        properties: &'a IndexMap<String, Schema>,
        required: &'a [String],
    },
    /// Open object keyed by arbitrary strings, with an optional value schema.
    Map(Option<&'a Schema>),
    /// Array with an optional item schema.
    Array(Option<&'a Schema>),
    /// String restricted to an ordered list of literals.
    Enum(&'a [String]),
    String,
    /// Integer and number collapse to one numeric shape.
    Number,
    Boolean,
    /// Anything the generator does not model.
    Unknown,
}

impl Schema {
    /// Classify this node into its active shape.
    pub fn shape(&self) -> SchemaShape<'_> {
        if let Some(ref_path) = &self.ref_path {
            return SchemaShape::Reference(ref_path);
        }
        match self.schema_type.as_deref() {
            Some("object") => match &self.properties {
                Some(properties) => SchemaShape::Object {
                    properties,
                    required: self.required.as_deref().unwrap_or(&[]),
                },
                None => match &self.additional_properties {
                    Some(AdditionalProperties::Schema(value)) => SchemaShape::Map(Some(value)),
                    _ => SchemaShape::Map(None),
                },
            },
            Some("array") => SchemaShape::Array(self.items.as_deref()),
            Some("string") => match &self.enum_values {
                Some(values) => SchemaShape::Enum(values),
                None => SchemaShape::String,
            },
            Some("integer") | Some("number") => SchemaShape::Number,
            Some("boolean") => SchemaShape::Boolean,
            _ => SchemaShape::Unknown,
        }
    }
}

impl Document {
    /// Parse a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, GenerateError> {
        serde_json::from_str(json).map_err(GenerateError::Parse)
    }

    /// Names of the declared resource tags, in document order.
    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(|tag| tag.name.as_str()).collect()
    }

    /// Ordered `(path, [methods])` pairs whose operations carry `tag`.
    /// Paths with no matching operation are omitted.
    pub fn paths_for_tag(&self, tag: &str) -> Vec<(&str, Vec<&str>)> {
        self.paths
            .iter()
            .filter_map(|(path, item)| {
                let methods: Vec<&str> = item
                    .operations
                    .iter()
                    .filter(|(_, operation)| operation.tags.iter().any(|t| t == tag))
                    .map(|(method, _)| method.as_str())
                    .collect();
                if methods.is_empty() {
                    None
                } else {
                    Some((path.as_str(), methods))
                }
            })
            .collect()
    }

    /// Look up the operation at (path, method).
    pub fn operation(&self, path: &str, method: &str) -> Option<&Operation> {
        self.paths
            .get(path)
            .and_then(|item| item.operations.get(method))
    }

    /// Resolve a `#/components/schemas/<Name>` reference to its definition.
    pub fn resolve_ref<'a>(
        &'a self,
        ref_path: &'a str,
    ) -> Result<(&'a str, &'a Schema), GenerateError> {
        let broken = || GenerateError::BrokenReference {
            path: ref_path.to_string(),
        };
        let name = ref_path
            .strip_prefix("#/components/schemas/")
            .ok_or_else(broken)?;
        let schema = self
            .components
            .as_ref()
            .and_then(|components| components.schemas.as_ref())
            .and_then(|schemas| schemas.get(name))
            .ok_or_else(broken)?;
        Ok((name, schema))
    }
}
