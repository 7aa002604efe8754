//! Diagnostic parameters attached to an annotated error.

use std::fmt;
use std::sync::Arc;

/// Text substituted for a value whose `Display` impl returns an error.
pub const UNPRINTABLE: &str = "<unprintable>";

/// Render `value`, substituting [`UNPRINTABLE`] if its formatter fails.
pub(crate) fn display_text<T>(value: &T) -> String
where
    T: fmt::Display + ?Sized,
{
    let mut text = String::new();
    match fmt::write(&mut text, format_args!("{value}")) {
        Ok(()) => text,
        Err(fmt::Error) => UNPRINTABLE.to_owned(),
    }
}

/// One diagnostic value, kept as a shared render-to-text capability.
///
/// Any `Display` type converts through [`IntoParam`]. Types that only
/// implement `Debug` go through [`Param::debug`], which renders them with
/// `{:?}`. Either way the text is produced on demand and is deterministic
/// for a given value.
#[derive(Clone)]
pub struct Param(Arc<dyn fmt::Display + Send + Sync>);

impl Param {
    /// Wrap a value rendered with its `Display` impl.
    pub fn display<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Param(Arc::new(value))
    }

    /// Wrap a value rendered with its `Debug` impl.
    pub fn debug<T>(value: T) -> Self
    where
        T: fmt::Debug + Send + Sync + 'static,
    {
        Param(Arc::new(Dumped(value)))
    }

    /// The text this parameter renders as.
    ///
    /// A value whose `Display` impl fails renders as [`UNPRINTABLE`].
    pub fn text(&self) -> String {
        display_text(&*self.0)
    }
}

impl fmt::Debug for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Param").field(&self.text()).finish()
    }
}

/// Conversion into a [`Param`].
///
/// Implemented for every `Display + Send + Sync + 'static` type and for
/// `Param` itself, so builders accept either a plain value or a value
/// already wrapped with [`Param::debug`].
pub trait IntoParam {
    fn into_param(self) -> Param;
}

impl<T> IntoParam for T
where
    T: fmt::Display + Send + Sync + 'static,
{
    fn into_param(self) -> Param {
        Param::display(self)
    }
}

impl IntoParam for Param {
    fn into_param(self) -> Param {
        self
    }
}

/// Adapter that renders a `Debug` value through `Display`.
struct Dumped<T>(T);

impl<T: fmt::Debug> fmt::Display for Dumped<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
