//! The error aggregate: an ordered, flat list of annotated errors.
//!
//! Inputs are classified left to right:
//! - an aggregate has its members spliced in place (never nested),
//! - an annotated error is kept as-is with its own site,
//! - a bare failure or a text message is wrapped at the constructor's call
//!   site with no parameters,
//! - anything else is skipped.

use std::error::Error;
use std::fmt;
use std::slice;
use std::sync::Arc;
use std::vec;

use crate::annotated::{AnnotatedError, Message};
use crate::input::ErrorInput;
use crate::render::{plural_s, RenderConfig};
use crate::site::Site;

/// An ordered collection of annotated errors.
///
/// Members are always leaves: building an aggregate from another aggregate
/// splices the inner members in rather than nesting. An aggregate may be
/// empty, so check [`ErrorList::is_empty`] (or use
/// [`ErrorList::into_result`]) to decide whether anything failed.
///
/// # Example
///
/// ```
/// use xerrors::errors;
///
/// let inner = errors!["a"];
/// let outer = errors![inner, "b", 42_i32];
/// assert_eq!(outer.len(), 2);
/// assert!(errors![].is_empty());
/// ```
#[derive(Clone, Debug, Default)]
#[must_use = "error lists should be checked, returned, or reported"]
pub struct ErrorList {
    members: Vec<AnnotatedError>,
}

impl ErrorList {
    /// Create an empty aggregate.
    pub fn new() -> Self {
        ErrorList {
            members: Vec::new(),
        }
    }

    /// Build an aggregate from mixed inputs.
    ///
    /// Bare failures and text inputs are stamped with the caller's file and
    /// line.
    #[track_caller]
    pub fn from_inputs<I>(inputs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ErrorInput>,
    {
        Self::from_inputs_at(Site::caller(), inputs)
    }

    /// Build an aggregate from mixed inputs, stamping bare inputs with an
    /// explicitly supplied site.
    pub fn from_inputs_at<I>(site: Site, inputs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ErrorInput>,
    {
        let mut members = Vec::new();
        for input in inputs {
            match input.into() {
                ErrorInput::List(list) => members.extend(list.members),
                ErrorInput::Annotated(err) => members.push(err),
                ErrorInput::Failure(failure) => {
                    members.push(AnnotatedError::from_shared(site.clone(), failure));
                }
                ErrorInput::Text(text) => {
                    let failure = Arc::new(Message::new(text));
                    members.push(AnnotatedError::from_shared(site.clone(), failure));
                }
                ErrorInput::Ignored => {}
            }
        }
        ErrorList { members }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the aggregate has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The members, in order.
    pub fn members(&self) -> &[AnnotatedError] {
        &self.members
    }

    /// Iterate over the members in order.
    pub fn iter(&self) -> slice::Iter<'_, AnnotatedError> {
        self.members.iter()
    }

    /// Take the members out of the aggregate.
    pub fn into_members(self) -> Vec<AnnotatedError> {
        self.members
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ErrorList> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Render with a custom configuration.
    pub fn render(&self, config: &RenderConfig) -> String {
        let mut out = String::new();
        // Members render message and parameters to text first, so every
        // write here goes into a String.
        let _ = self.write_to(&mut out, config);
        out
    }

    fn write_to(&self, out: &mut impl fmt::Write, config: &RenderConfig) -> fmt::Result {
        let shown = config.visible_members(self.members.len());
        for member in &self.members[..shown] {
            member.write_to(out, config)?;
        }
        let hidden = self.members.len() - shown;
        if hidden > 0 {
            writeln!(out, "... {hidden} more error{}", plural_s(hidden))?;
        }
        Ok(())
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, &RenderConfig::default())
    }
}

impl Error for ErrorList {}

impl IntoIterator for ErrorList {
    type Item = AnnotatedError;
    type IntoIter = vec::IntoIter<AnnotatedError>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a AnnotatedError;
    type IntoIter = slice::Iter<'a, AnnotatedError>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
