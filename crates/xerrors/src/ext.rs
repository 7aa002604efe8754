//! Annotating `Result` errors at the point of detection.

use std::error::Error;

use crate::annotated::AnnotatedError;
use crate::param::IntoParam;

/// Extension trait for wrapping the error of a `Result` in an
/// [`AnnotatedError`] stamped with the caller's site.
pub trait ResultExt<T> {
    /// Wrap the error, recording the caller's file and line.
    fn annotate(self) -> Result<T, AnnotatedError>;

    /// Wrap the error and attach parameters (only built on error).
    fn annotate_with<F, I>(self, params: F) -> Result<T, AnnotatedError>
    where
        F: FnOnce() -> I,
        I: IntoIterator,
        I::Item: IntoParam;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[track_caller]
    fn annotate(self) -> Result<T, AnnotatedError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(AnnotatedError::new(err)),
        }
    }

    #[track_caller]
    fn annotate_with<F, I>(self, params: F) -> Result<T, AnnotatedError>
    where
        F: FnOnce() -> I,
        I: IntoIterator,
        I::Item: IntoParam,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(AnnotatedError::new(err).with_params(params())),
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use std::num::ParseIntError;

    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(text: &str) -> Result<u32, ParseIntError> {
        text.parse()
    }

    #[test]
    fn ok_passes_through() {
        assert_eq!(parse("7").annotate().ok(), Some(7));
        let value = parse("8").annotate_with(|| -> Vec<String> {
            unreachable!("params are only built on error")
        });
        assert_eq!(value.ok(), Some(8));
    }

    #[test]
    fn annotate_records_caller_line() {
        let line = line!() + 1;
        let err = parse("x").annotate().unwrap_err();
        assert_eq!(err.line(), line);
        assert_eq!(err.file(), "ext.rs");
        assert_eq!(err.message(), "invalid digit found in string");
    }

    #[test]
    fn annotate_with_attaches_params() {
        let input = "12a";
        let line = line!() + 1;
        let err = parse(input).annotate_with(|| [format!("input={input}")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("ext.rs:{line} invalid digit found in string\ninput=12a\n")
        );
    }
}
