//! Tool domain traits
//!
//! Contains pure domain logic traits for tool-call validation.
//! The async executor port is defined in the application layer (ports).

use super::entities::{ToolCall, ToolDefinition};

/// Validator for tool calls
///
/// This is a pure domain trait that validates tool calls against their
/// definitions without any I/O. Validation failures are a distinct error
/// class from execution failures.
pub trait ToolValidator {
    /// Validate a tool call against its definition
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String>;
}

/// Default implementation of ToolValidator
///
/// Checks required-parameter presence, rejects unknown parameters, and
/// enforces declared types ("string", "integer", "boolean", "array") plus
/// enum membership where a parameter declares allowed values. Enum matching
/// is case-insensitive, mirroring how the method filter is interpreted.
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String> {
        // Check that all required parameters are present
        for param in &definition.parameters {
            if param.required && !call.arguments.contains_key(&param.name) {
                return Err(format!(
                    "Missing required parameter '{}' for tool '{}'",
                    param.name, definition.name
                ));
            }
        }

        // Check that all provided arguments are valid parameters
        let valid_params: std::collections::HashSet<&str> = definition
            .parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect();

        for arg_name in call.arguments.keys() {
            if !valid_params.contains(arg_name.as_str()) {
                return Err(format!(
                    "Unknown parameter '{}' for tool '{}'",
                    arg_name, definition.name
                ));
            }
        }

        // Check declared types and enum membership
        for param in &definition.parameters {
            let Some(value) = call.arguments.get(&param.name) else {
                continue;
            };

            let type_ok = match param.param_type.as_str() {
                "string" => value.is_string(),
                "integer" => value.is_i64() || value.is_u64(),
                "boolean" => value.is_boolean(),
                "array" => value.is_array(),
                _ => true,
            };
            if !type_ok {
                return Err(format!(
                    "Parameter '{}' for tool '{}' must be of type {}",
                    param.name, definition.name, param.param_type
                ));
            }

            if !param.allowed_values.is_empty()
                && let Some(s) = value.as_str()
                && !param
                    .allowed_values
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(s))
            {
                return Err(format!(
                    "Parameter '{}' for tool '{}' must be one of: {}",
                    param.name,
                    definition.name,
                    param.allowed_values.join(", ")
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::entities::ToolParameter;

    fn search_definition() -> ToolDefinition {
        ToolDefinition::new("search_spec", "Search cached endpoints")
            .with_parameter(ToolParameter::new("provider", "Provider name", true))
            .with_parameter(ToolParameter::new("query", "Search query", true))
            .with_parameter(
                ToolParameter::new("method", "HTTP method filter", false)
                    .with_allowed_values(["GET", "POST", "PUT", "DELETE", "all"]),
            )
            .with_parameter(ToolParameter::new("limit", "Max results", false).with_type("integer"))
    }

    #[test]
    fn test_validator_missing_required() {
        let validator = DefaultToolValidator;
        let call = ToolCall::new("search_spec").with_arg("provider", "petstore");
        let result = validator.validate(&call, &search_definition());
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Missing required parameter"));
    }

    #[test]
    fn test_validator_unknown_param() {
        let validator = DefaultToolValidator;
        let call = ToolCall::new("search_spec")
            .with_arg("provider", "petstore")
            .with_arg("query", "pets")
            .with_arg("fuzzy", true);
        let result = validator.validate(&call, &search_definition());
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unknown parameter"));
    }

    #[test]
    fn test_validator_type_mismatch() {
        let validator = DefaultToolValidator;
        let call = ToolCall::new("search_spec")
            .with_arg("provider", "petstore")
            .with_arg("query", "pets")
            .with_arg("limit", "five");
        let result = validator.validate(&call, &search_definition());
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("type integer"));
    }

    #[test]
    fn test_validator_enum_membership() {
        let validator = DefaultToolValidator;
        let call = ToolCall::new("search_spec")
            .with_arg("provider", "petstore")
            .with_arg("query", "pets")
            .with_arg("method", "FETCH");
        let result = validator.validate(&call, &search_definition());
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("must be one of"));
    }

    #[test]
    fn test_validator_enum_is_case_insensitive() {
        let validator = DefaultToolValidator;
        let call = ToolCall::new("search_spec")
            .with_arg("provider", "petstore")
            .with_arg("query", "pets")
            .with_arg("method", "delete");
        assert!(validator.validate(&call, &search_definition()).is_ok());
    }

    #[test]
    fn test_validator_valid_call() {
        let validator = DefaultToolValidator;
        let call = ToolCall::new("search_spec")
            .with_arg("provider", "petstore")
            .with_arg("query", "pets")
            .with_arg("method", "GET")
            .with_arg("limit", 10);
        assert!(validator.validate(&call, &search_definition()).is_ok());
    }
}
