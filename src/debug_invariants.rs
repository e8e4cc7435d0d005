//! Structural self-checks for the mesh graph and the crossing tracker.
//!
//! Checks are cheap enough to run after every build in debug builds; release
//! builds skip them unless the `strict-invariants` or `check-invariants`
//! feature is enabled.

use crate::knot_error::KnotError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), KnotError>;

    /// Panic on a broken invariant when invariant checking is enabled.
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "debug_assert_invariants");
    }
}

/// Run a fallible check and panic with context when invariant checking is
/// enabled; a no-op otherwise.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}

/// Turn a failed condition into [`KnotError::InvariantViolation`].
pub(crate) fn ensure(cond: bool, msg: impl FnOnce() -> String) -> Result<(), KnotError> {
    if cond {
        Ok(())
    } else {
        Err(KnotError::InvariantViolation(msg()))
    }
}
