use dating_profile::api::{ApiResponse, ErrorCode};
use dating_profile::errors::{ProfileError, Result};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_decode_error() {
        let error = ProfileError::decode("missing field `id`");

        assert!(matches!(error, ProfileError::Decode(_)));
        assert_eq!(error.code(), "E001");
        assert!(error.to_string().contains("Decode Error"));
        assert!(error.to_string().contains("missing field `id`"));
    }

    #[test]
    fn test_invalid_location_type_error() {
        let error = ProfileError::invalid_location_type("code 4");

        assert!(matches!(error, ProfileError::InvalidLocationType(_)));
        assert_eq!(error.error_type(), "Invalid Location Type");
        assert_eq!(error.message(), "code 4");
    }

    #[test]
    fn test_export_error() {
        let error = ProfileError::export("permission denied");

        assert!(matches!(error, ProfileError::Export(_)));
        assert_eq!(error.format_simple(), "Type Export Error: permission denied");
    }

    #[test]
    fn test_colored_format_contains_code() {
        let error = ProfileError::config("bad level");
        let colored = error.format_colored();
        assert!(colored.contains("E006"));
        assert!(colored.contains("bad level"));
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: ProfileError = io_error.into();

        assert!(matches!(error, ProfileError::FileOperation(_)));
        assert!(error.to_string().contains("file not found"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("[1,").unwrap_err();
        let error: ProfileError = json_error.into();

        assert!(matches!(error, ProfileError::Decode(_)));
    }

    #[test]
    fn test_question_mark_propagation() {
        fn parse(input: &str) -> Result<serde_json::Value> {
            Ok(serde_json::from_str(input)?)
        }
        assert!(parse("{}").is_ok());
        assert!(parse("{").is_err());
    }

    #[test]
    fn test_error_trait_object() {
        let error: Box<dyn Error> = Box::new(ProfileError::validation("x"));
        assert!(error.source().is_none());
        assert_eq!(error.to_string(), "Validation Error: x");
    }
}

#[cfg(test)]
mod api_mapping_tests {
    use super::*;

    #[test]
    fn test_error_envelope_from_profile_error() {
        let error = ProfileError::decode("bad body");
        let resp = ApiResponse::from(&error);
        assert_eq!(resp.code, ErrorCode::ProfileDecodeFailed);
        assert_eq!(resp.message, "bad body");
        assert!(resp.data.is_none());
    }

    #[test]
    fn test_internal_errors_map_to_500_family() {
        for error in [
            ProfileError::encode("x"),
            ProfileError::file_operation("x"),
            ProfileError::export("x"),
        ] {
            assert_eq!(ErrorCode::from(&error), ErrorCode::InternalServerError);
        }
    }
}
