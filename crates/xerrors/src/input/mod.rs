//! Classification of aggregate inputs.
//!
//! [`ErrorInput`] is the closed set of shapes the aggregate constructor
//! understands. The `errors!` macro picks the variant for each argument at
//! compile time through the `kind` module; callers building inputs by hand
//! use the `From` impls and [`ErrorInput::failure`].

#[doc(hidden)]
pub mod kind;

use std::error::Error;
use std::sync::Arc;

use crate::annotated::{AnnotatedError, DynError};
use crate::list::ErrorList;
use crate::param::display_text;

/// One input to the aggregate constructor.
#[derive(Clone, Debug)]
pub enum ErrorInput {
    /// An existing aggregate; its members are spliced in place.
    List(ErrorList),
    /// An already annotated error; appended as-is, keeping its own site.
    Annotated(AnnotatedError),
    /// A bare failure; wrapped at the aggregate constructor's call site.
    Failure(Arc<DynError>),
    /// A text message; turned into a failure and wrapped like `Failure`.
    Text(String),
    /// Anything else. Contributes no members.
    Ignored,
}

impl ErrorInput {
    /// Classify a bare failure value.
    pub fn failure<E>(failure: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        ErrorInput::Failure(Arc::new(failure))
    }

    /// Whether this input will be skipped by the aggregate constructor.
    pub fn is_ignored(&self) -> bool {
        matches!(self, ErrorInput::Ignored)
    }
}

impl From<ErrorList> for ErrorInput {
    fn from(list: ErrorList) -> Self {
        ErrorInput::List(list)
    }
}

impl From<AnnotatedError> for ErrorInput {
    fn from(err: AnnotatedError) -> Self {
        ErrorInput::Annotated(err)
    }
}

impl From<Box<DynError>> for ErrorInput {
    fn from(failure: Box<DynError>) -> Self {
        ErrorInput::Failure(Arc::from(failure))
    }
}

// Failures that cannot cross threads keep only their message.
impl From<Box<dyn Error>> for ErrorInput {
    fn from(failure: Box<dyn Error>) -> Self {
        ErrorInput::Text(display_text(&*failure))
    }
}

impl From<Box<dyn Error + Send>> for ErrorInput {
    fn from(failure: Box<dyn Error + Send>) -> Self {
        ErrorInput::Text(display_text(&*failure))
    }
}

impl From<String> for ErrorInput {
    fn from(text: String) -> Self {
        ErrorInput::Text(text)
    }
}

impl From<&str> for ErrorInput {
    fn from(text: &str) -> Self {
        ErrorInput::Text(text.to_owned())
    }
}

impl<T> From<Option<T>> for ErrorInput
where
    T: Into<ErrorInput>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(ErrorInput::Ignored, Into::into)
    }
}
