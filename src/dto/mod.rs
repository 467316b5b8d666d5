//! Response shapes exposed by the API.

use serde::Serialize;

pub mod auth;
pub mod registro_tempo;

/// The `{ success, data, total, error }` envelope every endpoint returns.
/// Absent fields are omitted rather than serialized as `null`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            total: None,
            error: None,
        }
    }

    pub fn ok_with_total(data: T, total: usize) -> Self {
        Self {
            success: true,
            data: Some(data),
            total: Some(total as i64),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            total: None,
            error: Some(message.into()),
        }
    }
}

impl ApiResponse<()> {
    /// Bare `{ "success": true }` for deletes and other data-less answers.
    pub fn success() -> Self {
        Self {
            success: true,
            data: None,
            total: None,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_omits_absent_fields() {
        let ok = serde_json::to_value(ApiResponse::ok(vec![1, 2])).unwrap();
        assert_eq!(ok["success"], true);
        assert_eq!(ok["data"], serde_json::json!([1, 2]));
        assert!(ok.get("total").is_none());
        assert!(ok.get("error").is_none());

        let err = serde_json::to_value(ApiResponse::<()>::error("falhou")).unwrap();
        assert_eq!(err["success"], false);
        assert_eq!(err["error"], "falhou");
        assert!(err.get("data").is_none());
    }

    #[test]
    fn envelope_carries_total_for_lists() {
        let page = serde_json::to_value(ApiResponse::ok_with_total(vec!["a"], 57)).unwrap();
        assert_eq!(page["total"], 57);
    }
}
