//! Unwrap helpers with good error messages.
//!
//! Workspace lints deny `unwrap()` and `expect()` everywhere, tests included.
//! These helpers are the sanctioned replacement: they panic with the error
//! value and, thanks to `#[track_caller]`, point at the test line.

use std::fmt::Debug;
use std::str::FromStr;

/// Unwrap a `Result`, panicking with the error value on `Err`.
///
/// # Example
///
/// ```rust
/// use ctrlkit_test_helpers::must;
///
/// let value = must("0.25".parse::<f32>());
/// assert!((value - 0.25).abs() < f32::EPSILON);
/// ```
///
/// # Panics
///
/// Panics if the result is `Err`.
#[track_caller]
pub fn must<T, E: Debug>(result: Result<T, E>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("must: unexpected Err: {e:?}"),
    }
}

/// Unwrap a `Result`, prefixing the panic message with `context`.
///
/// # Panics
///
/// Panics if the result is `Err`.
#[track_caller]
pub fn must_with<T, E: Debug>(result: Result<T, E>, context: &str) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("must_with: {context}: {e:?}"),
    }
}

/// Unwrap an `Option`, panicking with `msg` if `None`.
///
/// # Example
///
/// ```rust
/// use ctrlkit_test_helpers::must_some;
///
/// let last = must_some([1.0_f32, 2.0].last().copied(), "non-empty samples");
/// assert!(last > 1.0);
/// ```
///
/// # Panics
///
/// Panics if the option is `None`.
#[track_caller]
pub fn must_some<T>(option: Option<T>, msg: &str) -> T {
    match option {
        Some(v) => v,
        None => panic!("must_some: {msg}"),
    }
}

/// Unwrap an `Err`, panicking if the result unexpectedly succeeded.
///
/// Handy for validation tests that need to inspect the error.
///
/// # Panics
///
/// Panics if the result is `Ok`.
#[track_caller]
pub fn must_err<T: Debug, E>(result: Result<T, E>) -> E {
    match result {
        Ok(v) => panic!("must_err: expected Err, got Ok({v:?})"),
        Err(e) => e,
    }
}

/// Parse a string, panicking on failure.
///
/// # Panics
///
/// Panics if parsing fails.
#[track_caller]
pub fn must_parse<T: FromStr>(s: &str) -> T
where
    T::Err: Debug,
{
    s.parse()
        .unwrap_or_else(|e| panic!("must_parse: failed to parse {s:?}: {e:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_must_ok() {
        let r: Result<u8, &str> = Ok(3);
        assert_eq!(must(r), 3);
    }

    #[test]
    #[should_panic(expected = "must: unexpected Err")]
    fn test_must_err_panics() {
        let r: Result<u8, &str> = Err("boom");
        must(r);
    }

    #[test]
    #[should_panic(expected = "must_with: loading profile")]
    fn test_must_with_context() {
        let r: Result<u8, &str> = Err("boom");
        must_with(r, "loading profile");
    }

    #[test]
    fn test_must_err_returns_error() {
        let r: Result<u8, &str> = Err("bad gain");
        assert_eq!(must_err(r), "bad gain");
    }

    #[test]
    #[should_panic(expected = "expected Err")]
    fn test_must_err_panics_on_ok() {
        let r: Result<u8, &str> = Ok(1);
        must_err(r);
    }

    #[test]
    #[should_panic(expected = "must_some: missing")]
    fn test_must_some_none() {
        must_some::<u8>(None, "missing");
    }

    #[test]
    fn test_must_parse() {
        let v: i64 = must_parse("-12");
        assert_eq!(v, -12);
    }
}
