use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::{Error, ErrorKind, ErrorType};

/// HTTP response builder for Error enum
impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = match self.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::BadRequest | ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
            ErrorKind::Internal => match self.error_type {
                ErrorType::ExternalServiceError { .. } => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        };

        (status, Json(&self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{create_database_error, create_error};

    #[test]
    fn maps_errors_to_status_codes() {
        let cases = [
            (create_error!(UnknownEvent), StatusCode::NOT_FOUND),
            (create_error!(InvalidCheckInCode), StatusCode::BAD_REQUEST),
            (create_error!(ScancodeTaken), StatusCode::CONFLICT),
            (create_error!(NotPrivileged), StatusCode::FORBIDDEN),
            (create_error!(InvalidSession), StatusCode::UNAUTHORIZED),
            (
                create_error!(FailedValidation {
                    error: "title".to_string()
                }),
                StatusCode::BAD_REQUEST,
            ),
            (
                create_error!(ExternalServiceError {
                    service: "discord".to_string()
                }),
                StatusCode::BAD_GATEWAY,
            ),
            (
                create_database_error!("find", "events"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }
}
