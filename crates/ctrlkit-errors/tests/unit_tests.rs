//! Unit tests for all error variants.
//!
//! Tests Display implementations, std::error::Error implementations,
//! and From conversions.

use ctrlkit_errors::{
    Result,
    common::{ControlError, ErrorCategory, ErrorContext, ErrorSeverity, ResultExt},
    validation::ValidationError,
};

mod validation_error_tests {
    use super::*;

    #[test]
    fn test_all_variants_display() -> Result<()> {
        let variants = vec![
            ValidationError::out_of_range("alpha", 2.0_f32, 0.0, 1.0),
            ValidationError::non_finite("kp", f32::INFINITY),
            ValidationError::inverted_range("integral", 5.0_f32, -5.0),
            ValidationError::required("pid"),
            ValidationError::constraint("cutoff must be below sample_freq / 2"),
        ];

        for variant in variants {
            let msg = variant.to_string();
            assert!(
                !msg.is_empty(),
                "ValidationError variant should have display message"
            );
        }
        Ok(())
    }

    #[test]
    fn test_std_error_impl() -> Result<()> {
        let err = ValidationError::required("dt");
        let _: &dyn std::error::Error = &err;
        Ok(())
    }

    #[test]
    fn test_field_accessor() -> Result<()> {
        assert_eq!(
            ValidationError::out_of_range("alpha", 2.0_f32, 0.0, 1.0).field(),
            Some("alpha")
        );
        assert_eq!(ValidationError::required("pid").field(), Some("pid"));
        assert_eq!(ValidationError::constraint("x").field(), None);
        Ok(())
    }
}

mod control_error_tests {
    use super::*;

    #[test]
    fn test_from_validation() -> Result<()> {
        let err: ControlError = ValidationError::required("pid").into();
        assert!(matches!(err, ControlError::Validation(_)));
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.severity(), ErrorSeverity::Error);
        Ok(())
    }

    #[test]
    fn test_source_chain_for_io() -> Result<()> {
        use std::error::Error as _;

        let err: ControlError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(err.source().is_some());
        assert!(err.to_string().contains("denied"));
        Ok(())
    }

    #[test]
    fn test_constructors() -> Result<()> {
        assert!(matches!(ControlError::config("bad"), ControlError::Config(_)));
        assert!(matches!(ControlError::other("bad"), ControlError::Other(_)));
        assert!(matches!(
            ControlError::parse("json", "expected value"),
            ControlError::Parse { format: "json", .. }
        ));
        Ok(())
    }
}

mod context_tests {
    use super::*;

    #[test]
    fn test_context_wraps_message() -> Result<()> {
        let result: std::result::Result<(), ControlError> = Err(ControlError::config("missing pid"));
        let ctx = ErrorContext::new("load_profile").with("path", "loop.json");
        let wrapped = result.context(ctx);
        assert!(wrapped.is_err());
        if let Err(err) = wrapped {
            let msg = err.to_string();
            assert!(msg.contains("load_profile"));
            assert!(msg.contains("loop.json"));
            assert!(msg.contains("missing pid"));
            assert_eq!(err.category(), ErrorCategory::Config);
        }
        Ok(())
    }

    #[test]
    fn test_ok_passes_through() -> Result<()> {
        let result: std::result::Result<u8, ValidationError> = Ok(7);
        assert_eq!(result.with_context("noop")?, 7);
        Ok(())
    }
}
