//! Property-based tests for error composition and context preservation.

use ctrlkit_errors::{
    common::{ControlError, ErrorCategory, ErrorContext, ErrorSeverity, ResultExt},
    validation::ValidationError,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_error_severity_ordering(a in 0u8..=3, b in 0u8..=3) {
        let to_severity = |v: u8| match v {
            0 => ErrorSeverity::Info,
            1 => ErrorSeverity::Warning,
            2 => ErrorSeverity::Error,
            _ => ErrorSeverity::Critical,
        };

        prop_assert_eq!(a.cmp(&b), to_severity(a).cmp(&to_severity(b)));
    }

    #[test]
    fn test_error_context_preserves_operation(operation in ".*") {
        let ctx = ErrorContext::new(&operation);
        prop_assert!(ctx.to_string().contains(&operation) || operation.is_empty());
    }

    #[test]
    fn test_out_of_range_mentions_field(field in "[a-z_]+", value in -1e6f32..1e6f32) {
        let err = ValidationError::out_of_range(&field, value, -1.0, 1.0);
        let msg = err.to_string();
        prop_assert!(msg.contains(&field));
        prop_assert_eq!(err.field(), Some(field.as_str()));
    }

    #[test]
    fn test_error_category_consistency(code in 0u8..=4u8) {
        let err: ControlError = match code {
            0 => ValidationError::required("test").into(),
            1 => ControlError::parse("json", "eof"),
            2 => ControlError::config("test"),
            3 => std::io::Error::other("test").into(),
            _ => ControlError::other("test"),
        };

        let category = err.category();
        prop_assert!(matches!(category,
            ErrorCategory::Validation |
            ErrorCategory::Parse |
            ErrorCategory::Config |
            ErrorCategory::IO |
            ErrorCategory::Other
        ));
        prop_assert!(err.is_recoverable());
    }
}

mod result_ext_property_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_result_ext_preserves_key_values(
            op in "op[0-9]+",
            key in "key[0-9]+",
            val in "val[0-9]+"
        ) {
            let result: std::result::Result<(), ValidationError> =
                Err(ValidationError::required("kp"));
            let ctx = ErrorContext::new(&op).with(&key, &val);
            let msg = match result.context(ctx) {
                Ok(()) => String::new(),
                Err(e) => e.to_string(),
            };

            prop_assert!(msg.contains(&op));
            prop_assert!(msg.contains(&key));
            prop_assert!(msg.contains(&val));
            prop_assert!(msg.contains("kp"));
        }
    }
}
