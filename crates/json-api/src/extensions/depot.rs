//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::Depot;
use tracing::error;

use crate::envelope::{DEFAULT_SERVER_ERROR_MESSAGE, Envelope};

/// Helpers for mapping depot extraction failures to envelopes.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, Envelope>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, Envelope> {
        self.obtain::<T>().map_err(|_ignored| {
            error!(
                "missing {} in depot; is the state injected?",
                std::any::type_name::<T>()
            );

            Envelope::server_error(DEFAULT_SERVER_ERROR_MESSAGE)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_is_server_error() {
        let depot = Depot::new();

        let result = depot.obtain_or_500::<String>();

        assert_eq!(
            result.err().map(|envelope| envelope.status_code),
            Some(500)
        );
    }

    #[test]
    fn present_value_is_returned() {
        let mut depot = Depot::new();

        depot.inject(String::from("catalog"));

        assert_eq!(
            depot.obtain_or_500::<String>().ok().map(String::as_str),
            Some("catalog")
        );
    }
}
