//! The annotated error: one failure, the site it was wrapped at, and the
//! diagnostic parameters that came with it.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::param::{display_text, IntoParam, Param};
use crate::render::{PathStyle, RenderConfig};
use crate::site::Site;

/// A thread-safe failure value behind a trait object.
pub type DynError = dyn Error + Send + Sync + 'static;

/// A failure that is nothing but a message.
///
/// Text handed to [`AnnotatedError::msg`] or to the aggregate constructor is
/// turned into one of these before it is wrapped.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{0}")]
pub struct Message(String);

impl Message {
    /// Create a message failure.
    pub fn new(text: impl Into<String>) -> Self {
        Message(text.into())
    }

    /// The message text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A failure annotated with its capture site and diagnostic parameters.
///
/// The site is fixed when the value is built and never changes afterwards.
/// Cloning is cheap: the failure and the parameters are shared.
///
/// # Example
///
/// ```
/// use xerrors::{annotate, Message};
///
/// let err = annotate!(Message::new("disk full"), "retry=3");
/// assert!(err.to_string().ends_with(" disk full\nretry=3\n"));
/// ```
#[derive(Clone)]
#[must_use = "annotated errors should be returned or reported, not silently dropped"]
pub struct AnnotatedError {
    underlying: Arc<DynError>,
    site: Site,
    params: Vec<Param>,
}

impl AnnotatedError {
    /// Wrap `failure`, recording the caller's file and line.
    #[track_caller]
    pub fn new<E>(failure: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::at(Site::caller(), failure)
    }

    /// Wrap a plain text message, recording the caller's file and line.
    #[track_caller]
    pub fn msg(text: impl Into<String>) -> Self {
        Self::at(Site::caller(), Message::new(text))
    }

    /// Wrap an already boxed failure, recording the caller's file and line.
    #[track_caller]
    pub fn from_boxed(failure: Box<DynError>) -> Self {
        Self::from_shared(Site::caller(), Arc::from(failure))
    }

    /// Wrap `failure` at an explicitly supplied site.
    pub fn at<E>(site: Site, failure: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from_shared(site, Arc::new(failure))
    }

    pub(crate) fn from_shared(site: Site, underlying: Arc<DynError>) -> Self {
        AnnotatedError {
            underlying,
            site,
            params: Vec::new(),
        }
    }

    /// Append one diagnostic parameter.
    pub fn with_param(mut self, param: impl IntoParam) -> Self {
        self.params.push(param.into_param());
        self
    }

    /// Append several diagnostic parameters, keeping their order.
    pub fn with_params<I>(mut self, params: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoParam,
    {
        self.params
            .extend(params.into_iter().map(IntoParam::into_param));
        self
    }

    /// The wrapped failure.
    pub fn underlying(&self) -> &DynError {
        &*self.underlying
    }

    /// Where this error was annotated.
    pub fn site(&self) -> &Site {
        &self.site
    }

    /// Base name of the file this error was annotated in.
    pub fn file(&self) -> &str {
        self.site.file()
    }

    /// Line this error was annotated at.
    pub fn line(&self) -> u32 {
        self.site.line()
    }

    /// The diagnostic parameters, in insertion order.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// The underlying failure's message.
    pub fn message(&self) -> String {
        display_text(&*self.underlying)
    }

    /// Render with a custom configuration.
    pub fn render(&self, config: &RenderConfig) -> String {
        let mut out = String::new();
        // Message and parameters are rendered to text first, so the only
        // writes left go into a String.
        let _ = self.write_to(&mut out, config);
        out
    }

    pub(crate) fn write_to(&self, out: &mut impl fmt::Write, config: &RenderConfig) -> fmt::Result {
        let file = match config.path_style {
            PathStyle::Basename => self.site.file(),
            PathStyle::Full => self.site.path(),
        };
        writeln!(out, "{}:{} {}", file, self.site.line(), self.message())?;
        for param in &self.params {
            writeln!(out, "{}", param.text())?;
        }
        Ok(())
    }
}

impl fmt::Display for AnnotatedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, &RenderConfig::default())
    }
}

impl fmt::Debug for AnnotatedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnotatedError")
            .field("underlying", &self.underlying)
            .field("site", &self.site)
            .field("params", &self.params)
            .finish()
    }
}

impl Error for AnnotatedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.underlying)
    }
}

#[cfg(test)]
mod tests;
