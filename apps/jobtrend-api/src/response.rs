use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// Success envelope shared by every JSON route: `{ success: true, data, ... }`.
/// Optional fields are omitted when unset; `extra` keys are inlined.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<&'static str>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
            timestamp: None,
            region: None,
            extra: Map::new(),
        }
    }

    pub fn message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }

    pub fn stamped(mut self) -> Self {
        self.timestamp = Some(Utc::now());
        self
    }

    pub fn region(mut self, region: &'static str) -> Self {
        self.region = Some(region);
        self
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_fields_are_omitted() {
        let value = serde_json::to_value(ApiResponse::ok(vec![1, 2])).unwrap();
        assert_eq!(value, json!({ "success": true, "data": [1, 2] }));
    }

    #[test]
    fn test_extra_keys_are_inlined() {
        let value = serde_json::to_value(
            ApiResponse::ok(json!([]))
                .region("India")
                .with("userId", "42"),
        )
        .unwrap();
        assert_eq!(value["region"], "India");
        assert_eq!(value["userId"], "42");
        assert!(value.get("extra").is_none());
    }
}
