//! Reporting annotated errors to a `tracing` subscriber.
//!
//! This is the outermost-boundary sink: one `ERROR` event per annotated
//! error, carrying the capture site and the rendered parameters as
//! structured fields. Nothing in this crate logs while errors are built.

use crate::annotated::AnnotatedError;
use crate::list::ErrorList;
use crate::param::Param;

impl AnnotatedError {
    /// Emit this error as a `tracing` error event.
    pub fn report(&self) {
        let params: Vec<String> = self.params().iter().map(Param::text).collect();
        tracing::error!(
            file = %self.file(),
            line = self.line(),
            params = ?params,
            "{}",
            self.underlying()
        );
    }
}

impl ErrorList {
    /// Emit every member as a `tracing` error event, in order.
    ///
    /// An empty aggregate emits nothing at `ERROR` level.
    pub fn report(&self) {
        tracing::debug!(count = self.len(), "reporting error list");
        for member in self {
            member.report();
        }
    }
}
