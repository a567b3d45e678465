use std::fmt;

/// Marker error for a regular shutdown requested from [`Game::update`].
///
/// The runtime treats it as a successful exit instead of a failure.
///
/// [`Game::update`]: super::Game::update
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Termination;

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("regular termination")
    }
}

impl std::error::Error for Termination {}

impl Termination {
    /// Returns true when `err` is (or wraps) a `Termination`.
    pub fn is_termination(err: &anyhow::Error) -> bool {
        err.chain().any(|cause| cause.is::<Termination>())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use super::*;

    #[test]
    fn detects_bare_termination() {
        let err = anyhow::Error::new(Termination);
        assert!(Termination::is_termination(&err));
    }

    #[test]
    fn detects_termination_behind_context() {
        let err = Err::<(), _>(Termination)
            .context("leaving main menu")
            .unwrap_err();
        assert!(Termination::is_termination(&err));
    }

    #[test]
    fn other_errors_are_not_termination() {
        let err = anyhow::anyhow!("out of lives");
        assert!(!Termination::is_termination(&err));
    }
}
