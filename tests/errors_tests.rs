use ipintel::errors::{IpIntelError, Result};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_wkt_parse_error() {
        let error = IpIntelError::wkt_parse("unexpected token");

        assert!(matches!(error, IpIntelError::WktParse(_)));
        assert!(error.to_string().contains("WKT Parse Error"));
        assert!(error.to_string().contains("unexpected token"));
    }

    #[test]
    fn test_type_mismatch_error() {
        let error = IpIntelError::type_mismatch("Expected a string value, found number");

        assert!(matches!(error, IpIntelError::TypeMismatch(_)));
        assert!(error.to_string().contains("Type Mismatch"));
        assert!(error.to_string().contains("found number"));
    }

    #[test]
    fn test_lookup_error() {
        let error = IpIntelError::lookup("timeout");

        assert!(matches!(error, IpIntelError::Lookup(_)));
        assert_eq!(error.message(), "timeout");
    }

    #[test]
    fn test_codes_are_unique() {
        let errors = [
            IpIntelError::wkt_parse(""),
            IpIntelError::projection(""),
            IpIntelError::type_mismatch(""),
            IpIntelError::marshal(""),
            IpIntelError::config(""),
            IpIntelError::validation(""),
            IpIntelError::lookup(""),
            IpIntelError::serialization(""),
            IpIntelError::file_operation(""),
        ];

        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
        assert!(codes.iter().all(|c| c.starts_with('E')));
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "data file missing");
        let error: IpIntelError = io_error.into();

        assert!(matches!(error, IpIntelError::FileOperation(_)));
        assert!(error.to_string().contains("data file missing"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{invalid json").unwrap_err();
        let error: IpIntelError = json_error.into();

        assert!(matches!(error, IpIntelError::Serialization(_)));
        assert!(error.to_string().contains("Serialization Error"));
    }

    #[test]
    fn test_question_mark_propagation() {
        fn read_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/nonexistent/ipintel/file")?)
        }

        assert!(matches!(read_missing(), Err(IpIntelError::FileOperation(_))));
    }
}

#[cfg(test)]
mod error_format_tests {
    use super::*;

    #[test]
    fn test_format_simple() {
        let error = IpIntelError::config("missing resource key");
        assert_eq!(
            error.format_simple(),
            "Configuration Error: missing resource key"
        );
    }

    #[test]
    fn test_format_colored_contains_parts() {
        colored::control::set_override(false);
        let error = IpIntelError::projection("zone 0");
        let text = error.format_colored();

        assert!(text.contains("[ERROR]"));
        assert!(text.contains(error.code()));
        assert!(text.contains("Projection Error"));
        assert!(text.contains("zone 0"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = IpIntelError::validation("bad ip");

        let error_trait: &dyn Error = &error;
        assert!(!error_trait.to_string().is_empty());
        assert!(error_trait.source().is_none());
    }
}
