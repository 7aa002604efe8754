//! Capture sites: where an error was first wrapped.
//!
//! A [`Site`] is taken from [`std::panic::Location`] via `#[track_caller]`,
//! so the recorded position is the caller of whichever constructor asked for
//! it. Code that forwards its own caller's position can build a `Site`
//! explicitly and thread it through the `*_at` constructors instead.

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

/// File name recorded when the capture site cannot be determined.
pub const UNKNOWN_FILE: &str = "<unknown>";

/// The file and line an error was annotated at.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Site {
    path: Cow<'static, str>,
    file: Cow<'static, str>,
    line: u32,
}

impl Site {
    /// Capture the location of the caller.
    ///
    /// Inside a function marked `#[track_caller]` this resolves to that
    /// function's caller, which is how the constructors in this crate record
    /// the site one level up from themselves.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }

    /// Build a site from an already captured location.
    pub fn from_location(location: &'static Location<'static>) -> Self {
        let path = location.file();
        match basename(path) {
            Some(file) => Site {
                path: Cow::Borrowed(path),
                file: Cow::Borrowed(file),
                line: location.line(),
            },
            None => Self::unknown(),
        }
    }

    /// Build a site from an explicit path and line.
    ///
    /// Falls back to [`Site::unknown`] when `path` has no file name.
    pub fn new(path: impl Into<Cow<'static, str>>, line: u32) -> Self {
        let path = path.into();
        let Some(file) = basename(&path).map(str::to_owned) else {
            return Self::unknown();
        };
        Site {
            path,
            file: Cow::Owned(file),
            line,
        }
    }

    /// The sentinel site: unknown file, line 0.
    pub const fn unknown() -> Self {
        Site {
            path: Cow::Borrowed(UNKNOWN_FILE),
            file: Cow::Borrowed(UNKNOWN_FILE),
            line: 0,
        }
    }

    /// Base name of the source file, without directories.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Path of the source file as recorded by the compiler.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// 1-based line number, or 0 for the sentinel site.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Whether this is the sentinel produced when capture failed.
    pub fn is_unknown(&self) -> bool {
        self.line == 0 && self.file == UNKNOWN_FILE
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Last path component, accepting both `/` and `\` separators.
///
/// Returns `None` for paths that end in a separator or are empty.
fn basename(path: &str) -> Option<&str> {
    path.rsplit(['/', '\\'])
        .next()
        .filter(|name| !name.is_empty() && *name != "." && *name != "..")
}
