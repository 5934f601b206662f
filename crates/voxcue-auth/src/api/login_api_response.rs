use serde_json::Value;

/// The fields of a login response body that matter for classification.
///
/// Read leniently from an arbitrary JSON value: a field that is missing, not a string, or an
/// empty string is treated as absent.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct LoginApiResponse {
    pub token: Option<String>,
    pub error: Option<String>,
}

impl From<&Value> for LoginApiResponse {
    fn from(value: &Value) -> Self {
        Self {
            token: non_empty_string(value.get("token")),
            error: non_empty_string(value.get("error")),
        }
    }
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}
