use serde::{Deserialize, Serialize};

/// One documented request body field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Concatenation of every text run in the name cell.
    pub name: String,
    /// OpenAPI data type of the first text run in the type cell.
    #[serde(rename = "type")]
    pub param_type: String,
    pub description: String,
    /// Empty when the table has no default column.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default: String,
    pub required: bool,
}

impl Parameter {
    pub fn new(required: bool) -> Self {
        Self {
            required,
            ..Self::default()
        }
    }
}

/// Documented type names and the OpenAPI data type they map to.
///
/// See <https://swagger.io/docs/specification/data-models/data-types/>.
/// `obect` is a misspelling found in the docs.
const OPENAPI_DATA_TYPES: &[(&str, &str)] = &[
    ("obect", "object"),
    ("to-one relationship", "object"),
    ("array", "array"),
    ("to-many relationship", "array"),
    ("string", "string"),
    ("number", "number"),
    ("integer", "integer"),
    ("boolean", "boolean"),
];

const FALLBACK_DATA_TYPE: &str = "object";

/// Normalizes a documented type name to an OpenAPI data type.
///
/// Exact, case-sensitive match; anything unknown is an `object`.
pub fn to_openapi_data_type(documented: &str) -> &'static str {
    OPENAPI_DATA_TYPES
        .iter()
        .find(|(name, _)| *name == documented)
        .map_or(FALLBACK_DATA_TYPE, |&(_, data_type)| data_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("to-one relationship", "object")]
    #[case("array", "array")]
    #[case("to-many relationship", "array")]
    #[case("string", "string")]
    #[case("number", "number")]
    #[case("integer", "integer")]
    #[case("boolean", "boolean")]
    #[case("obect", "object")]
    #[case("widget", "object")]
    #[case("", "object")]
    fn test_to_openapi_data_type(#[case] documented: &str, #[case] expected: &str) {
        assert_eq!(to_openapi_data_type(documented), expected);
    }

    #[rstest]
    #[case("String")]
    #[case("ARRAY")]
    #[case(" string")]
    #[case("array of strings")]
    fn test_to_openapi_data_type_is_exact_match(#[case] documented: &str) {
        assert_eq!(to_openapi_data_type(documented), "object");
    }

    #[test]
    fn test_new_parameter_is_empty_with_flag() {
        let param = Parameter::new(true);

        assert!(param.required);
        assert!(param.name.is_empty());
        assert!(param.param_type.is_empty());
        assert!(param.description.is_empty());
        assert!(param.default.is_empty());
    }
}
