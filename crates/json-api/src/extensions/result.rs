//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use tracing::{debug, error};

use crate::envelope::ApiError;

/// Map any error to an envelope error with a fixed public message.
pub(crate) trait ResultExt<T> {
    /// Log the error and respond 500 with `message`.
    fn or_500(self, message: &str) -> Result<T, ApiError>;

    /// Respond 400 with `message`; the underlying error is only logged at debug.
    fn or_400(self, message: &str) -> Result<T, ApiError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, message: &str) -> Result<T, ApiError> {
        self.map_err(|error| {
            error!("{message}: {error}");

            ApiError::internal(message)
        })
    }

    fn or_400(self, message: &str) -> Result<T, ApiError> {
        self.map_err(|error| {
            debug!("{message}: {error}");

            ApiError::bad_request(message)
        })
    }
}
