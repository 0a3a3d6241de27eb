use thiserror::Error;

/// Errors raised while building or running a menu
#[derive(Debug, Error)]
pub enum MenuError {
    /// A `MenuSpec` that can't be laid out
    #[error("invalid menu configuration: {0}")]
    InvalidConfiguration(String),

    /// A terminal primitive failed; the environment is unusable
    #[error("terminal I/O failed: {0}")]
    TerminalIo(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MenuError>;
