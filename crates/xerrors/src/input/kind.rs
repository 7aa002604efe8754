//! Compile-time classification used by the `errors!` macro.
//!
//! Each argument is borrowed into a [`Probe`] and `input_kind` is called on
//! `&&&Probe`. Method resolution tries the receiver with three references
//! first and strips one per step, so the traits below are implemented at
//! decreasing depths to rank the shapes:
//!
//! | Depth | Shape |
//! |---|---|
//! | `&&&Probe` | aggregate, annotated error, prebuilt input, boxed error (thread-safe or not), option |
//! | `&&Probe` | any other `Error + Send + Sync + 'static`, or an option of one |
//! | `&Probe` | text (`AsRef<str>`) |
//! | `Probe` | everything else, ignored |
//!
//! The returned tag then consumes the argument and yields an [`ErrorInput`].

use std::error::Error;
use std::sync::Arc;

use super::ErrorInput;
use crate::annotated::{AnnotatedError, DynError};
use crate::list::ErrorList;

/// Borrowed view of one macro argument, used only for dispatch.
pub struct Probe<'a, T>(pub &'a T);

// The fallback arm takes `Probe` by value through `&&&Probe`; a derive would
// require `T: Copy`.
impl<T> Clone for Probe<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Probe<'_, T> {}

// Exact shapes.

/// Splices an aggregate.
pub struct ListTag;

impl ListTag {
    /// Consume the argument.
    pub fn into_input(self, list: ErrorList) -> ErrorInput {
        ErrorInput::List(list)
    }
}

/// Selects [`ListTag`] for an owned aggregate.
pub trait ListKind: Sized {
    /// Pick the tag for this argument.
    fn input_kind(self) -> ListTag {
        ListTag
    }
}

impl ListKind for &&&Probe<'_, ErrorList> {}

/// Splices a clone of a borrowed aggregate.
pub struct ListRefTag;

impl ListRefTag {
    /// Consume the argument.
    pub fn into_input(self, list: &ErrorList) -> ErrorInput {
        ErrorInput::List(list.clone())
    }
}

/// Selects [`ListRefTag`] for `&ErrorList`.
pub trait ListRefKind: Sized {
    /// Pick the tag for this argument.
    fn input_kind(self) -> ListRefTag {
        ListRefTag
    }
}

impl ListRefKind for &&&Probe<'_, &ErrorList> {}

/// Keeps an annotated error as-is.
pub struct AnnotatedTag;

impl AnnotatedTag {
    /// Consume the argument.
    pub fn into_input(self, err: AnnotatedError) -> ErrorInput {
        ErrorInput::Annotated(err)
    }
}

/// Selects [`AnnotatedTag`] for an owned annotated error.
pub trait AnnotatedKind: Sized {
    /// Pick the tag for this argument.
    fn input_kind(self) -> AnnotatedTag {
        AnnotatedTag
    }
}

impl AnnotatedKind for &&&Probe<'_, AnnotatedError> {}

/// Keeps a clone of a borrowed annotated error.
pub struct AnnotatedRefTag;

impl AnnotatedRefTag {
    /// Consume the argument.
    pub fn into_input(self, err: &AnnotatedError) -> ErrorInput {
        ErrorInput::Annotated(err.clone())
    }
}

/// Selects [`AnnotatedRefTag`] for `&AnnotatedError`.
pub trait AnnotatedRefKind: Sized {
    /// Pick the tag for this argument.
    fn input_kind(self) -> AnnotatedRefTag {
        AnnotatedRefTag
    }
}

impl AnnotatedRefKind for &&&Probe<'_, &AnnotatedError> {}

/// Passes a prebuilt input through.
pub struct InputTag;

impl InputTag {
    /// Consume the argument.
    pub fn into_input(self, input: ErrorInput) -> ErrorInput {
        input
    }
}

/// Selects [`InputTag`] for an [`ErrorInput`].
pub trait InputKind: Sized {
    /// Pick the tag for this argument.
    fn input_kind(self) -> InputTag {
        InputTag
    }
}

impl InputKind for &&&Probe<'_, ErrorInput> {}

/// Wraps a boxed thread-safe failure.
pub struct BoxedTag;

impl BoxedTag {
    /// Consume the argument.
    pub fn into_input(self, failure: Box<DynError>) -> ErrorInput {
        ErrorInput::Failure(Arc::from(failure))
    }
}

/// Selects [`BoxedTag`] for `Box<dyn Error + Send + Sync>`.
pub trait BoxedKind: Sized {
    /// Pick the tag for this argument.
    fn input_kind(self) -> BoxedTag {
        BoxedTag
    }
}

impl BoxedKind for &&&Probe<'_, Box<DynError>> {}

/// Converts a boxed failure that is not thread-safe into a message.
pub struct LocalBoxedTag;

impl LocalBoxedTag {
    /// Consume the argument.
    pub fn into_input<T: Into<ErrorInput>>(self, failure: T) -> ErrorInput {
        failure.into()
    }
}

/// Selects [`LocalBoxedTag`] for `Box<dyn Error>` and `Box<dyn Error + Send>`.
pub trait LocalBoxedKind: Sized {
    /// Pick the tag for this argument.
    fn input_kind(self) -> LocalBoxedTag {
        LocalBoxedTag
    }
}

impl LocalBoxedKind for &&&Probe<'_, Box<dyn Error>> {}

impl LocalBoxedKind for &&&Probe<'_, Box<dyn Error + Send>> {}

/// Classifies the contents of an option, skipping `None`.
pub struct OptionTag;

impl OptionTag {
    /// Consume the argument.
    pub fn into_input<T: Into<ErrorInput>>(self, value: Option<T>) -> ErrorInput {
        value.into()
    }
}

/// Selects [`OptionTag`] for options of convertible values.
pub trait OptionKind: Sized {
    /// Pick the tag for this argument.
    fn input_kind(self) -> OptionTag {
        OptionTag
    }
}

impl<T: Into<ErrorInput>> OptionKind for &&&Probe<'_, Option<T>> {}

// Failures.

/// Wraps a bare failure.
pub struct FailureTag;

impl FailureTag {
    /// Consume the argument.
    pub fn into_input<E>(self, failure: E) -> ErrorInput
    where
        E: Error + Send + Sync + 'static,
    {
        ErrorInput::failure(failure)
    }
}

/// Selects [`FailureTag`] for any `Error + Send + Sync + 'static`.
pub trait FailureKind: Sized {
    /// Pick the tag for this argument.
    fn input_kind(self) -> FailureTag {
        FailureTag
    }
}

impl<E> FailureKind for &&Probe<'_, E> where E: Error + Send + Sync + 'static {}

/// Wraps the failure inside an option, skipping `None`.
pub struct OptionFailureTag;

impl OptionFailureTag {
    /// Consume the argument.
    pub fn into_input<E>(self, failure: Option<E>) -> ErrorInput
    where
        E: Error + Send + Sync + 'static,
    {
        failure.map_or(ErrorInput::Ignored, ErrorInput::failure)
    }
}

/// Selects [`OptionFailureTag`] for options of bare failures.
pub trait OptionFailureKind: Sized {
    /// Pick the tag for this argument.
    fn input_kind(self) -> OptionFailureTag {
        OptionFailureTag
    }
}

impl<E> OptionFailureKind for &&Probe<'_, Option<E>> where E: Error + Send + Sync + 'static {}

// Text.

/// Turns text into a message failure.
pub struct TextTag;

impl TextTag {
    /// Consume the argument.
    pub fn into_input<S: AsRef<str>>(self, text: S) -> ErrorInput {
        ErrorInput::Text(text.as_ref().to_owned())
    }
}

/// Selects [`TextTag`] for `AsRef<str>` values.
pub trait TextKind: Sized {
    /// Pick the tag for this argument.
    fn input_kind(self) -> TextTag {
        TextTag
    }
}

impl<S: AsRef<str>> TextKind for &Probe<'_, S> {}

// Fallback.

/// Drops the argument.
pub struct IgnoredTag;

impl IgnoredTag {
    /// Consume the argument.
    pub fn into_input<T>(self, _value: T) -> ErrorInput {
        ErrorInput::Ignored
    }
}

/// Selects [`IgnoredTag`] for everything not matched above.
pub trait IgnoredKind: Sized {
    /// Pick the tag for this argument.
    fn input_kind(self) -> IgnoredTag {
        IgnoredTag
    }
}

impl<T> IgnoredKind for Probe<'_, T> {}
