use std::fmt;

/// Why a [`GameLoop`](super::GameLoop) stopped running updates.
#[derive(Debug)]
pub enum LoopError {
    /// `update` returned [`Termination`](crate::core::Termination); a clean exit.
    Terminated,
    /// `update` failed; the run must end.
    Update(anyhow::Error),
}

impl LoopError {
    pub(crate) fn from_update(err: anyhow::Error) -> Self {
        if crate::core::Termination::is_termination(&err) {
            LoopError::Terminated
        } else {
            LoopError::Update(err)
        }
    }

    /// Converts into the runtime's result: clean termination is success.
    pub fn into_result(self) -> anyhow::Result<()> {
        match self {
            LoopError::Terminated => Ok(()),
            LoopError::Update(err) => Err(err.context("game update failed")),
        }
    }
}

impl fmt::Display for LoopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoopError::Terminated => f.write_str("game requested termination"),
            LoopError::Update(err) => write!(f, "game update failed: {err:#}"),
        }
    }
}

impl std::error::Error for LoopError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoopError::Terminated => None,
            LoopError::Update(err) => Some(&**err),
        }
    }
}
