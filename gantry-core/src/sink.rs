use crate::Error;
use std::{
    fmt::{self, Debug},
    sync::Arc,
};

/// Replaceable callback the fail-soft client operations report failures to.
///
/// The default sink logs the error chain and returns. Clones share the same
/// underlying callback.
#[derive(Clone)]
pub struct ErrorSink {
    handler: Arc<dyn Fn(&Error) + Send + Sync>,
}

impl ErrorSink {
    pub fn new(handler: impl Fn(&Error) + Send + Sync + 'static) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }
    /// Reports one failure to the callback.
    pub fn handle(&self, error: &Error) {
        (self.handler)(error);
    }
}

impl Default for ErrorSink {
    fn default() -> Self {
        Self::new(|error| log::error!("{error:#}"))
    }
}

impl Debug for ErrorSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ErrorSink")
    }
}
