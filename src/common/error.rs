// src/common/error.rs

// thiserror is used with default-features = false, so this works in no_std.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RangeError<E = ()>
where
    E: core::fmt::Debug, // Need Debug for the generic Io error
{
    /// Underlying register access error from the transport.
    #[error("register I/O error: {0:?}")]
    Io(E),

    /// The ready bit was not set before the configured I/O timeout elapsed.
    #[error("measurement timed out")]
    Timeout,
}

impl<E: core::fmt::Debug> RangeError<E> {
    /// True for the measurement timeout, false for transport failures.
    #[inline]
    pub fn is_timeout(&self) -> bool {
        matches!(self, RangeError::Timeout)
    }
}

// No blanket `From<E>` here: it would overlap with `From<T> for T`.
// Callers map transport errors with `.map_err(RangeError::Io)`.

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct MockBusError;

    #[test]
    fn test_is_timeout() {
        assert!(RangeError::<MockBusError>::Timeout.is_timeout());
        assert!(!RangeError::Io(MockBusError).is_timeout());
    }

    #[test]
    fn test_map_err_wraps_transport_error() {
        let res: Result<u8, MockBusError> = Err(MockBusError);
        let mapped = res.map_err(RangeError::Io);
        assert_eq!(mapped, Err(RangeError::Io(MockBusError)));
    }
}
