//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use tracing::error;

use crate::envelope::{DEFAULT_SERVER_ERROR_MESSAGE, Envelope};

/// Map any error to a logged server error envelope.
pub(crate) trait ResultExt<T> {
    fn or_500(self, context: &str) -> Result<T, Envelope>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, Envelope> {
        self.map_err(|error| {
            error!("{context}: {error}");

            Envelope::server_error(DEFAULT_SERVER_ERROR_MESSAGE)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_becomes_server_error_envelope() {
        let result: Result<(), &str> = Err("boom");

        let envelope = result.or_500("doing work").err();

        assert_eq!(
            envelope.map(|envelope| (envelope.status_code, envelope.message)),
            Some((500, DEFAULT_SERVER_ERROR_MESSAGE.to_string()))
        );
    }

    #[test]
    fn ok_passes_through() {
        let result: Result<u8, &str> = Ok(7);

        assert_eq!(result.or_500("doing work").ok(), Some(7));
    }
}
