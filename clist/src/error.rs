//! List error types.

use std::error::Error;
use std::fmt;

use crate::List;

/// Errors that can occur while building or walking a [`List`](crate::List).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListError {
    /// The allocator could not provide memory for a new node.
    AllocationFailure {
        /// Size of the node that was requested.
        bytes: usize,
    },
    /// An operation was invoked with a required argument missing.
    PreconditionViolation {
        /// Name of the operation that rejected the call.
        operation: &'static str,
    },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailure { bytes } => {
                write!(f, "failed to allocate a list node of {bytes} bytes")
            }
            Self::PreconditionViolation { operation } => {
                write!(f, "{operation} called without a visitor")
            }
        }
    }
}

impl Error for ListError {}

/// A failed [`List::prepend`], holding the list it was called on.
#[derive(Debug)]
pub struct PrependError {
    list: List,
    error: ListError,
}

impl PrependError {
    pub(crate) fn new(list: List, error: ListError) -> Self {
        Self { list, error }
    }

    pub fn error(&self) -> &ListError {
        &self.error
    }

    /// Gives back the list, unchanged by the failed prepend.
    pub fn into_list(self) -> List {
        self.list
    }

    pub fn into_parts(self) -> (List, ListError) {
        (self.list, self.error)
    }
}

impl fmt::Display for PrependError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "prepend failed: {}", self.error)
    }
}

impl Error for PrependError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}

impl From<PrependError> for ListError {
    fn from(e: PrependError) -> Self {
        e.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure() {
        let e = ListError::AllocationFailure { bytes: 16 };
        assert_eq!(e.to_string(), "failed to allocate a list node of 16 bytes");

        let e = ListError::PreconditionViolation {
            operation: "try_traverse",
        };
        assert_eq!(e.to_string(), "try_traverse called without a visitor");
    }

    #[test]
    fn prepend_error_hands_back_the_list() {
        let list = List::new().prepend(9).unwrap();
        let e = PrependError::new(list, ListError::AllocationFailure { bytes: 16 });
        assert_eq!(e.to_string(), "prepend failed: failed to allocate a list node of 16 bytes");
        assert!(e.source().is_some());

        let (list, error) = e.into_parts();
        assert_eq!(error, ListError::AllocationFailure { bytes: 16 });
        assert_eq!(list.iter().collect::<Vec<_>>(), vec![9]);
    }
}
