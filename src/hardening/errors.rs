/// Errors from the hardening layer.
use std::io;

use thiserror::Error;

/// Typed errors from dumpability syscalls.
#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum HardeningError {
    /// The platform has no notion of a dumpable flag we know how to reach.
    #[error("Dumpability control is not supported on this platform")]
    Unsupported,

    /// The syscall itself failed.
    #[error("{call} failed: {source}")]
    Os {
        /// Name of the failing call, e.g. `prctl(PR_SET_DUMPABLE)`.
        call: &'static str,
        /// `errno` captured right after the call.
        #[source]
        source: io::Error,
    },
}

impl HardeningError {
    /// Capture `errno` for a syscall that just returned -1.
    #[must_use]
    pub fn last_os_error(call: &'static str) -> Self {
        Self::Os {
            call,
            source: io::Error::last_os_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_error_names_the_call() {
        let err = HardeningError::Os {
            call: "prctl(PR_SET_DUMPABLE)",
            source: io::Error::from_raw_os_error(1),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("prctl(PR_SET_DUMPABLE) failed: "));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_unsupported_has_no_source() {
        let err = HardeningError::Unsupported;
        assert!(std::error::Error::source(&err).is_none());
    }
}
