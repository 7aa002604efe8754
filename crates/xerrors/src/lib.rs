//! Call-site annotated errors and flat error aggregates.
//!
//! Two values do all the work:
//! - [`AnnotatedError`] wraps one failure together with the file and line it
//!   was wrapped at and any number of diagnostic parameters.
//! - [`ErrorList`] collects failures of mixed shapes (aggregates, annotated
//!   errors, bare errors, text) into one ordered list that never nests.
//!
//! Both render as plain text:
//!
//! ```text
//! disk.rs:12 disk full
//! retry=3
//! ```
//!
//! Annotate where a failure is detected, aggregate where several independent
//! failures are reported together, and render or [`report`](ErrorList::report)
//! at the outermost boundary.
//!
//! ```
//! use xerrors::{annotate, errors, Message};
//!
//! fn check(name: &str, port: u32) -> Result<(), xerrors::ErrorList> {
//!     let name_err = name.is_empty().then(|| annotate!(Message::new("name is empty")));
//!     let port_err = (port == 0).then_some("port must be non-zero");
//!     errors![name_err, port_err].into_result()
//! }
//!
//! assert!(check("svc", 80).is_ok());
//! assert_eq!(check("", 0).unwrap_err().len(), 2);
//! ```

mod annotated;
mod ext;
pub mod input;
mod list;
mod param;
mod render;
mod report;
mod site;

pub use annotated::{AnnotatedError, DynError, Message};
pub use ext::ResultExt;
pub use input::ErrorInput;
pub use list::ErrorList;
pub use param::{IntoParam, Param, UNPRINTABLE};
pub use render::{PathStyle, RenderConfig};
pub use site::{Site, UNKNOWN_FILE};

/// Wrap a failure with the invocation site and optional parameters.
///
/// ```
/// use xerrors::{annotate, Message, Param};
///
/// let err = annotate!(Message::new("disk full"), "retry=3", Param::debug(vec![1, 2]));
/// assert_eq!(err.params().len(), 2);
/// ```
#[macro_export]
macro_rules! annotate {
    ($failure:expr $(, $param:expr)* $(,)?) => {
        $crate::AnnotatedError::new($failure)$(.with_param($param))*
    };
}

/// Build an [`ErrorList`] from arguments of mixed kinds.
///
/// Each argument is classified by its type: aggregates are flattened,
/// annotated errors kept, other errors and text wrapped at the invocation
/// site, `None` and anything unrecognized skipped.
///
/// ```
/// use xerrors::{errors, Message};
///
/// let list = errors![Message::new("a"), "b", 7_u8, None::<&str>];
/// assert_eq!(list.len(), 2);
/// ```
#[macro_export]
macro_rules! errors {
    ($($input:expr),* $(,)?) => {{
        let inputs: ::std::vec::Vec<$crate::ErrorInput> = ::std::vec![$(
            match $input {
                input => {
                    #[allow(unused_imports)]
                    use $crate::input::kind::*;
                    (&&&$crate::input::kind::Probe(&input))
                        .input_kind()
                        .into_input(input)
                }
            }
        ),*];
        $crate::ErrorList::from_inputs(inputs)
    }};
}
