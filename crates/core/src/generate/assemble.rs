//! Per-operation assembly: payload type, response type, request function.
//!
//! One call per (path, method). Path parameters become a required `params`
//! sub-object, query parameters an optional `querys` sub-object, and the
//! request body a `data` field (an opaque `FormData` for binary uploads,
//! a resolved schema type otherwise). The response is picked from the
//! first content-bearing entry in a fixed success-code priority order and
//! degrades to `void` when nothing usable exists.

use tracing::debug;

use crate::spec::{Operation, Parameter, RequestBody, Schema, SchemaShape};

use super::resolve::{INTERFACE_PREFIX, frame_field, indent, resolve};
use super::utils::{doc_comment, escape_single_quoted};

/// Success-code selection order for the response schema.
const RESPONSE_PRIORITY: [&str; 5] = ["200", "201", "202", "204", "default"];

/// Media types treated as raw-binary uploads rather than JSON schemas.
const BINARY_MEDIA_TYPES: [&str; 2] = ["application/octet-stream", "multipart/form-data"];

const JSON_MEDIA_TYPE: &str = "application/json";

/// A named unit of generated type text.
#[derive(Debug)]
pub struct TypeDeclaration {
    pub name: String,
    pub exported: bool,
    pub text: String,
}

/// Everything one operation contributes to the artifacts.
#[derive(Debug)]
pub struct AssembledOperation {
    pub declarations: Vec<TypeDeclaration>,
    pub function: String,
}

/// Assemble one operation. `stem` is the shared identifier stem for the
/// payload type, the response type, and the function.
pub fn assemble(
    stem: &str,
    path: &str,
    method: &str,
    operation: &Operation,
    on_reference: &mut dyn FnMut(&str),
) -> AssembledOperation {
    let mut path_params: Vec<&Parameter> = Vec::new();
    let mut query_params: Vec<&Parameter> = Vec::new();
    for parameter in &operation.parameters {
        match parameter.location.as_str() {
            "path" => path_params.push(parameter),
            "query" => query_params.push(parameter),
            location => {
                debug!(name = %parameter.name, location, "dropping parameter in unsupported location");
            }
        }
    }

    let mut members: Vec<String> = Vec::new();
    if !path_params.is_empty() {
        members.push(sub_object_member("params", true, &path_params, on_reference));
    }
    if !query_params.is_empty() {
        members.push(sub_object_member("querys", false, &query_params, on_reference));
    }
    let mut has_data = false;
    if let Some(body) = &operation.request_body {
        if let Some(member) = data_member(body, on_reference) {
            members.push(member);
            has_data = true;
        }
    }

    let mut declarations = Vec::new();

    let has_payload = !members.is_empty();
    if has_payload {
        let payload_name = format!("{INTERFACE_PREFIX}{stem}Payload");
        let text = format!(
            "export interface {payload_name} {{\n{}\n}}",
            members.join("\n")
        );
        declarations.push(TypeDeclaration {
            name: payload_name,
            exported: true,
            text,
        });
    }

    let response_type = match response_schema(operation) {
        Some(schema) => {
            let response_name = format!("{INTERFACE_PREFIX}{stem}Response");
            let rendered = resolve(schema, None, true, 0, on_reference);
            let text = match schema.shape() {
                SchemaShape::Object { .. } | SchemaShape::Map(_) => {
                    format!("export interface {response_name} {rendered}")
                }
                _ => format!("export type {response_name} = {rendered}"),
            };
            declarations.push(TypeDeclaration {
                name: response_name.clone(),
                exported: true,
                text,
            });
            response_name
        }
        None => "void".to_string(),
    };

    let function = request_function(
        stem,
        path,
        method,
        operation,
        &path_params,
        !query_params.is_empty(),
        has_payload,
        has_data,
        &response_type,
    );

    AssembledOperation {
        declarations,
        function,
    }
}

/// Render a `params`/`querys` payload member from its parameter list.
fn sub_object_member(
    name: &str,
    required: bool,
    parameters: &[&Parameter],
    on_reference: &mut dyn FnMut(&str),
) -> String {
    let inner = indent(2);
    let fields = parameters
        .iter()
        .map(|parameter| {
            let mut lines = Vec::new();
            if let Some(doc) = doc_comment(
                parameter.summary.as_deref(),
                parameter.description.as_deref(),
            ) {
                for line in doc.lines() {
                    lines.push(format!("{inner}{line}"));
                }
            }
            let field = match &parameter.schema {
                Some(schema) => resolve(
                    schema,
                    Some(&parameter.name),
                    parameter.required,
                    2,
                    on_reference,
                ),
                None => frame_field(Some(&parameter.name), parameter.required, "unknown"),
            };
            lines.push(format!("{inner}{field}"));
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n");
    let object_text = format!("{{\n{fields}\n{}}}", indent(1));
    format!("{}{}", indent(1), frame_field(Some(name), required, &object_text))
}

/// Render the `data` payload member from the request body, if it carries
/// usable content.
fn data_member(body: &RequestBody, on_reference: &mut dyn FnMut(&str)) -> Option<String> {
    let mut lines = Vec::new();
    if let Some(doc) = doc_comment(None, body.description.as_deref()) {
        for line in doc.lines() {
            lines.push(format!("{}{line}", indent(1)));
        }
    }

    let is_binary = body
        .content
        .keys()
        .any(|media| BINARY_MEDIA_TYPES.contains(&media.as_str()));
    let field = if is_binary {
        frame_field(Some("data"), true, "FormData")
    } else {
        let schema = body
            .content
            .get(JSON_MEDIA_TYPE)
            .and_then(|media| media.schema.as_ref())
            .or_else(|| body.content.values().find_map(|media| media.schema.as_ref()));
        match schema {
            Some(schema) => resolve(schema, Some("data"), body.required, 1, on_reference),
            None => {
                debug!("request body has no usable content, dropping data member");
                return None;
            }
        }
    };
    lines.push(format!("{}{field}", indent(1)));
    Some(lines.join("\n"))
}

/// Pick the response schema: first content-bearing entry in priority
/// order, JSON media preferred within an entry.
fn response_schema(operation: &Operation) -> Option<&Schema> {
    RESPONSE_PRIORITY.iter().find_map(|code| {
        let content = operation.responses.get(*code)?.content.as_ref()?;
        content
            .get(JSON_MEDIA_TYPE)
            .and_then(|media| media.schema.as_ref())
            .or_else(|| content.values().find_map(|media| media.schema.as_ref()))
    })
}

#[allow(clippy::too_many_arguments)]
fn request_function(
    stem: &str,
    path: &str,
    method: &str,
    operation: &Operation,
    path_params: &[&Parameter],
    has_querys: bool,
    has_payload: bool,
    has_data: bool,
    response_type: &str,
) -> String {
    let url = if path_params.is_empty() {
        format!("'{}'", escape_single_quoted(path))
    } else {
        let mut template = path.to_string();
        for parameter in path_params {
            template = template.replace(
                &format!("{{{}}}", parameter.name),
                &format!("${{payload.params.{}}}", parameter.name),
            );
        }
        format!("`{template}`")
    };

    // GET and DELETE requests take no body argument.
    let body_arg = match method {
        "get" | "delete" => None,
        _ if has_data => Some("payload.data"),
        _ => Some("null"),
    };

    let mut options = String::from("{\n");
    if has_querys {
        options.push_str("    params: payload.querys,\n");
    }
    options.push_str("    ...config,\n  }");

    let mut args = vec![url];
    if let Some(body_arg) = body_arg {
        args.push(body_arg.to_string());
    }
    args.push(options);

    let signature = if has_payload {
        format!(
            "(\n  payload: {INTERFACE_PREFIX}{stem}Payload,\n  config: AxiosRequestConfig = {{}},\n)"
        )
    } else {
        "(config: AxiosRequestConfig = {})".to_string()
    };

    let mut lines = Vec::new();
    if let Some(doc) = doc_comment(
        operation.summary.as_deref(),
        operation.description.as_deref(),
    ) {
        lines.push(doc);
    }
    lines.push(format!(
        "export const {stem} = {signature} => {{\n  return axios.{method}<{response_type}>({})\n}}",
        args.join(", ")
    ));
    lines.join("\n")
}
