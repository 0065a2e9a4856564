//! Error types for the queue.

#[cfg(feature = "std")]
use std::error::Error;

use core::fmt;

/// Error value indicating that the queue's capacity ceiling is exhausted.
///
/// Operations that take an element by value hand it back through the
/// `element` field, so a rejected push loses nothing.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct CapacityError<T = ()> {
    /// The element that could not be inserted.
    pub element: T,
}

const CAPERROR: &str = "capacity exceeded";

impl<T> CapacityError<T> {
    /// Extract the rejected element.
    pub fn into_element(self) -> T {
        self.element
    }

    /// Forget the rejected element, keeping only the error condition.
    pub fn simplify(self) -> CapacityError {
        CapacityError { element: () }
    }
}

#[cfg(feature = "std")]
impl<T> Error for CapacityError<T> {}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", CAPERROR)
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", "CapacityError", CAPERROR)
    }
}
