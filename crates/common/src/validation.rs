//! Emptiness checks for byte buffers crossing a service boundary.
//!
//! Slices cannot be null in Rust, so "null" is modelled as `None`. Callers that
//! hold an optional buffer (a missing JSON field, an absent header) can gate on
//! [`NullOrEmpty::is_null_or_empty`] with the same semantics as a plain slice.

/// Reports whether a buffer is absent or has zero length.
pub trait NullOrEmpty {
    /// Returns `true` when the buffer is `None` or zero-length.
    fn is_null_or_empty(&self) -> bool;
}

impl NullOrEmpty for [u8] {
    fn is_null_or_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<const N: usize> NullOrEmpty for [u8; N] {
    fn is_null_or_empty(&self) -> bool {
        N == 0
    }
}

impl NullOrEmpty for Vec<u8> {
    fn is_null_or_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T: NullOrEmpty + ?Sized> NullOrEmpty for &T {
    fn is_null_or_empty(&self) -> bool {
        (**self).is_null_or_empty()
    }
}

impl<T: NullOrEmpty> NullOrEmpty for Option<T> {
    fn is_null_or_empty(&self) -> bool {
        self.as_ref().map_or(true, |buf| buf.is_null_or_empty())
    }
}
