//! OpenAPI document normalization
//!
//! Walks a raw OpenAPI 2.x/3.x JSON document and produces one
//! [`EndpointRecord`] per `(path, verb)` operation. The walk is tolerant:
//! a missing or malformed `paths` object yields an empty list, and
//! individual malformed operations are skipped with a log line so that one
//! bad entry never sinks the rest of the document.

use serde_json::Value;
use specscout_domain::{EndpointParameter, EndpointRecord, HttpMethod, RequestBody, ResponseEntry};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from [`normalize`].
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The document root is not a JSON object, so there is nothing to walk.
    #[error("OpenAPI document root is not a JSON object (got {0})")]
    NotAnObject(&'static str),
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Normalize a raw OpenAPI document into endpoint records for `provider`.
///
/// Records come back in deterministic order (paths sorted, then verbs
/// sorted within each path), which downstream ranking relies on for stable
/// tie-breaking.
pub fn normalize(provider: &str, spec: &Value) -> Result<Vec<EndpointRecord>, NormalizeError> {
    let root = spec
        .as_object()
        .ok_or_else(|| NormalizeError::NotAnObject(json_type_name(spec)))?;

    let paths = match root.get("paths") {
        None => {
            debug!("Spec for '{}' has no 'paths' object", provider);
            return Ok(Vec::new());
        }
        Some(Value::Object(paths)) => paths,
        Some(other) => {
            warn!(
                "Spec for '{}' has a non-object 'paths' value ({}); treating as empty",
                provider,
                json_type_name(other)
            );
            return Ok(Vec::new());
        }
    };

    let mut records = Vec::new();
    for (path, path_item) in paths {
        let Some(operations) = path_item.as_object() else {
            warn!("Skipping non-object path item '{}' in '{}'", path, provider);
            continue;
        };
        for (key, operation) in operations {
            // Non-verb keys under a path (parameters, $ref, vendor
            // extensions) are not operations.
            let Some(method) = HttpMethod::parse(key) else {
                continue;
            };
            let Some(operation) = operation.as_object() else {
                warn!(
                    "Skipping malformed operation {} {} in '{}'",
                    method, path, provider
                );
                continue;
            };
            records.push(build_record(provider, path, method, operation));
        }
    }

    Ok(records)
}

fn build_record(
    provider: &str,
    path: &str,
    method: HttpMethod,
    operation: &serde_json::Map<String, Value>,
) -> EndpointRecord {
    let mut record = EndpointRecord::new(provider, path, method);

    if let Some(summary) = operation.get("summary").and_then(Value::as_str) {
        if !summary.trim().is_empty() {
            record = record.with_summary(summary);
        }
    }
    if let Some(description) = operation.get("description").and_then(Value::as_str) {
        if !description.is_empty() {
            record = record.with_description(description);
        }
    }

    let parameters = extract_parameters(operation.get("parameters"));
    if !parameters.is_empty() {
        record = record.with_parameters(parameters);
    }

    if let Some(body) = operation.get("requestBody").and_then(Value::as_object) {
        record = record.with_request_body(extract_request_body(body));
    }

    let responses = extract_responses(operation.get("responses"));
    if !responses.is_empty() {
        record = record.with_responses(responses);
    }

    if let Some(examples) = operation.get("examples") {
        if !examples.is_null() {
            record = record.with_examples(examples.clone());
        }
    }

    if let Some(tags) = operation.get("tags").and_then(Value::as_array) {
        let tags: Vec<String> = tags
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect();
        if !tags.is_empty() {
            record = record.with_tags(tags);
        }
    }

    if let Some(true) = operation.get("deprecated").and_then(Value::as_bool) {
        record = record.with_deprecated(true);
    }

    record.rendered()
}

fn extract_parameters(value: Option<&Value>) -> Vec<EndpointParameter> {
    let Some(entries) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    let mut parameters = Vec::new();
    for entry in entries {
        let Some(entry) = entry.as_object() else {
            continue;
        };
        // A parameter without a name cannot be referenced; skip it.
        let Some(name) = entry.get("name").and_then(Value::as_str) else {
            debug!("Skipping parameter entry without a 'name'");
            continue;
        };
        let location = entry
            .get("in")
            .and_then(Value::as_str)
            .unwrap_or("query");
        let required = entry
            .get("required")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let mut parameter = EndpointParameter::new(name, location, required);
        if let Some(description) = entry.get("description").and_then(Value::as_str) {
            if !description.is_empty() {
                parameter = parameter.with_description(description);
            }
        }
        if let Some(schema) = entry.get("schema") {
            if !schema.is_null() {
                parameter = parameter.with_schema(schema.clone());
            }
        }
        parameters.push(parameter);
    }
    parameters
}

fn extract_request_body(body: &serde_json::Map<String, Value>) -> RequestBody {
    let description = body
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string);
    let content_types = body
        .get("content")
        .and_then(Value::as_object)
        .map(|content| content.keys().cloned().collect())
        .unwrap_or_default();
    RequestBody {
        description,
        content_types,
    }
}

fn extract_responses(value: Option<&Value>) -> Vec<ResponseEntry> {
    let Some(responses) = value.and_then(Value::as_object) else {
        return Vec::new();
    };
    responses
        .iter()
        .map(|(code, entry)| {
            let description = entry
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string);
            ResponseEntry::new(code, description)
        })
        .collect()
}
