//! Error handling integration tests
//!
//! Tests for error types, conversions and HTTP error bodies.

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;
    use cohort_dashboard::utils::error::{DashboardError, ErrorResponse};

    fn body_of(err: &DashboardError) -> ErrorResponse {
        let bytes = err
            .error_response()
            .into_body()
            .try_into_bytes()
            .expect("error bodies are buffered");
        serde_json::from_slice(&bytes).unwrap()
    }

    // ==================== Status Codes ====================

    #[test]
    fn test_status_codes() {
        let cases = [
            (DashboardError::config("bad"), 500, "CONFIG_ERROR"),
            (DashboardError::fetch("HTTP 500"), 502, "FETCH_FAILED"),
            (DashboardError::not_found("Student 9"), 404, "NOT_FOUND"),
            (DashboardError::view_not_found("abc"), 404, "VIEW_NOT_FOUND"),
            (DashboardError::bad_request("tab"), 400, "BAD_REQUEST"),
            (DashboardError::timeout("slow"), 504, "TIMEOUT"),
            (DashboardError::unavailable("full"), 503, "SERVICE_UNAVAILABLE"),
            (DashboardError::internal("oops"), 500, "INTERNAL_ERROR"),
        ];

        for (err, status, code) in cases {
            assert_eq!(err.status_code().as_u16(), status, "{}", err);
            assert_eq!(body_of(&err).error.code, code);
        }
    }

    // ==================== Messages ====================

    /// Test that client-facing errors keep their message
    #[test]
    fn test_client_errors_keep_message() {
        let body = body_of(&DashboardError::view_not_found("1234"));
        assert_eq!(body.error.message, "View not found: 1234");
        assert!(body.error.request_id.is_none());
    }

    /// Test that internal details are not echoed to clients
    #[test]
    fn test_internal_details_hidden() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("key: \"/etc/secret").unwrap_err();
        let yaml = DashboardError::from(yaml_err);
        assert!(!body_of(&yaml).error.message.contains("/etc/secret"));

        let internal = DashboardError::internal("pool poisoned");
        assert_eq!(body_of(&internal).error.message, "An internal error occurred");
    }

    // ==================== Conversions ====================

    #[test]
    fn test_conversions() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("a: [").unwrap_err();
        assert!(matches!(DashboardError::from(yaml_err), DashboardError::Yaml(_)));
    }
}
