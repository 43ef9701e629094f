//! Error conversions - framework integrations for [`AppError`]

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Field-carrying errors name the offending request field; everything
        // else is a plain message body.
        let body = match self.field() {
            Some(field) => serde_json::json!({
                "field": field,
                "error": self.message(),
            }),
            None => serde_json::json!({
                "message": self.message(),
            }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(all(test, feature = "axum"))]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_status_is_preserved() {
        let res = AppError::unauthorized("nope").into_response();
        assert_eq!(res.status(), axum::http::StatusCode::UNAUTHORIZED);

        let res = AppError::bad_request("bad").with_field("email").into_response();
        assert_eq!(res.status(), axum::http::StatusCode::BAD_REQUEST);
    }
}
