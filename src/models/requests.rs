//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

// == Request Limits ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB

/// Request body for the SAVE operation (PUT /save)
///
/// The TTL is fixed per cache, so a request carries only the key and value.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: String,
}

impl SaveRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        if self.key.len() > MAX_KEY_LENGTH {
            return Some(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            ));
        }
        if self.value.len() > MAX_VALUE_SIZE {
            return Some(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(key: &str, value: &str) -> SaveRequest {
        SaveRequest {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_save_request_deserialize() {
        let json = r#"{"key": "test", "value": "hello"}"#;
        let req: SaveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.key, "test");
        assert_eq!(req.value, "hello");
    }

    #[test]
    fn test_validate_empty_key() {
        assert!(request("", "test").validate().is_some());
    }

    #[test]
    fn test_validate_key_too_long() {
        let key = "x".repeat(MAX_KEY_LENGTH + 1);
        assert!(request(&key, "test").validate().is_some());
    }

    #[test]
    fn test_validate_value_too_large() {
        let value = "x".repeat(MAX_VALUE_SIZE + 1);
        assert!(request("key", &value).validate().is_some());
    }

    #[test]
    fn test_validate_valid_request() {
        assert!(request("valid_key", "test").validate().is_none());
    }
}
