use iso8601_timestamp::Timestamp;
use once_cell::sync::Lazy;
use regex::Regex;

#[cfg(feature = "validator")]
use validator::Validate;

/// Regex for valid scancodes
///
/// Printable ASCII without whitespace
pub static RE_SCANCODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[!-~]+$").unwrap());

auto_derived!(
    /// Code linked to a user, presented at events to check in
    pub struct Scancode {
        /// The code itself
        pub code: String,
        /// Owning user
        pub user: String,
        /// Time at which the code was registered
        pub created_at: Timestamp,
    }

    /// New scancode
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataCreateScancode {
        /// Code to register
        #[cfg_attr(
            feature = "validator",
            validate(length(min = 1, max = 128), regex(path = *RE_SCANCODE))
        )]
        pub code: String,
    }

    /// Scanned code presented at an event
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataScanIn {
        /// Code that was scanned
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 128)))]
        pub code: String,
    }
);

#[cfg(test)]
mod tests {
    use super::RE_SCANCODE;

    #[test]
    fn scancode_format() {
        assert!(RE_SCANCODE.is_match("A1B2-C3"));
        assert!(!RE_SCANCODE.is_match("has space"));
        assert!(!RE_SCANCODE.is_match(""));
    }
}
