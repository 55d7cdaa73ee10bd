use std::path::PathBuf;

/// Errors surfaced by the tracker core. All of these are recoverable; the
/// caller returns to an interactive state after reporting them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed user input: a bad date, a negative amount, a non-digit PIN.
    #[error("{0}")]
    Validation(String),

    /// The PIN and its confirmation differed during PIN creation.
    #[error("PIN and confirmation do not match")]
    PinMismatch,

    /// A well-formed PIN whose digest does not match the stored hash.
    #[error("invalid PIN")]
    Auth,

    /// An unlock was attempted before any PIN was created.
    #[error("no PIN has been created yet")]
    PinNotConfigured,

    /// A gated operation was attempted before unlocking.
    #[error("the tracker is locked; unlock it with your PIN first")]
    Locked,

    /// A cycle reset was attempted with nothing to archive.
    #[error("no current-cycle data to reset")]
    EmptyCycle,

    /// The in-memory state could not be written to disk. The mutation that
    /// triggered the save is kept; memory and disk may diverge until the
    /// next successful save.
    #[error("unable to access tracker storage at {}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An export payload could not be serialized.
    #[error("unable to serialize export data: {0}")]
    Export(String),
}

impl Error {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Persistence {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
