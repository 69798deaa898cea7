#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

#[cfg(feature = "axum")]
pub mod axum;

/// Result type with custom Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error information
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct Error {
    /// Type of error and additional information
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub error_type: ErrorType,

    /// Where this error occurred
    pub location: String,
}

/// Possible error types
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    /// This error was not labeled :(
    LabelMe,

    // ? User related errors
    UnknownUser,

    // ? Event related errors
    UnknownEvent,

    // ? Check-in related errors
    InvalidScancode,
    InvalidCheckInCode,
    UnknownScancode,
    ScancodeTaken,
    RsvpConflict,

    // ? Permission errors
    MissingRole {
        role: String,
    },
    NotPrivileged,
    NotOwner,

    // ? Session errors
    NotAuthenticated,
    InvalidSession,

    // ? General errors
    DatabaseError {
        operation: String,
        collection: String,
    },
    ExternalServiceError {
        service: String,
    },
    InternalError,
    InvalidOperation,
    InvalidProperty,
    NotFound,
    FailedValidation {
        error: String,
    },
}

/// Broad classification of an error, independent of transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    BadRequest,
    Conflict,
    Forbidden,
    Validation,
    Unauthenticated,
    Internal,
}

impl ErrorType {
    /// Which class of failure this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorType::UnknownUser
            | ErrorType::UnknownEvent
            | ErrorType::UnknownScancode
            | ErrorType::NotFound => ErrorKind::NotFound,

            ErrorType::InvalidScancode
            | ErrorType::InvalidCheckInCode
            | ErrorType::InvalidOperation
            | ErrorType::InvalidProperty => ErrorKind::BadRequest,

            ErrorType::ScancodeTaken | ErrorType::RsvpConflict => ErrorKind::Conflict,

            ErrorType::MissingRole { .. } | ErrorType::NotPrivileged | ErrorType::NotOwner => {
                ErrorKind::Forbidden
            }

            ErrorType::FailedValidation { .. } => ErrorKind::Validation,

            ErrorType::NotAuthenticated | ErrorType::InvalidSession => ErrorKind::Unauthenticated,

            ErrorType::LabelMe
            | ErrorType::DatabaseError { .. }
            | ErrorType::ExternalServiceError { .. }
            | ErrorType::InternalError => ErrorKind::Internal,
        }
    }
}

impl Error {
    /// Shorthand for `self.error_type.kind()`
    pub fn kind(&self) -> ErrorKind {
        self.error_type.kind()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} occurred in {}", self.error_type, self.location)
    }
}

impl std::error::Error for Error {}

#[macro_export]
macro_rules! create_error {
    ( $error: ident $( $tt:tt )? ) => {
        $crate::Error {
            error_type: $crate::ErrorType::$error $( $tt )?,
            location: format!("{}:{}:{}", file!(), line!(), column!()),
        }
    };
}

#[macro_export]
macro_rules! create_database_error {
    ( $operation: expr, $collection: expr ) => {
        $crate::create_error!(DatabaseError {
            operation: $operation.to_string(),
            collection: $collection.to_string()
        })
    };
}

#[macro_export]
macro_rules! query {
    ( $self: ident, $type: ident, $collection: expr, $($rest:expr),+ ) => {
        $self.$type($collection, $($rest),+).await
            .map_err(|err| {
                log::error!("{} on {} failed: {err}", stringify!($type), $collection);
                $crate::create_database_error!(stringify!($type), $collection)
            })
    };
}

#[cfg(test)]
mod tests {
    use crate::{ErrorKind, ErrorType};

    #[test]
    fn use_macro_to_construct_error() {
        let error = create_error!(LabelMe);
        assert!(matches!(error.error_type, ErrorType::LabelMe));
        assert!(error.location.contains("lib.rs"));
    }

    #[test]
    fn use_macro_to_construct_complex_error() {
        let error = create_error!(MissingRole {
            role: "mentor".to_string()
        });
        assert!(matches!(error.error_type, ErrorType::MissingRole { .. }));
        assert_eq!(error.kind(), ErrorKind::Forbidden);
    }

    #[test]
    fn database_errors_are_internal() {
        let error = create_database_error!("insert_one", "rsvps");
        assert_eq!(
            error.error_type,
            ErrorType::DatabaseError {
                operation: "insert_one".to_string(),
                collection: "rsvps".to_string()
            }
        );
        assert_eq!(error.kind(), ErrorKind::Internal);
    }

    #[test]
    fn check_in_failures_are_bad_requests() {
        assert_eq!(ErrorType::InvalidScancode.kind(), ErrorKind::BadRequest);
        assert_eq!(ErrorType::InvalidCheckInCode.kind(), ErrorKind::BadRequest);
        assert_eq!(ErrorType::ScancodeTaken.kind(), ErrorKind::Conflict);
        assert_eq!(
            ErrorType::FailedValidation {
                error: "bad".into()
            }
            .kind(),
            ErrorKind::Validation
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialises_with_type_tag() {
        let error = create_error!(InvalidScancode);
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value["type"], "InvalidScancode");
        assert!(value["location"].is_string());
    }
}
