use thiserror::Error;

/// Problems with a target number read from the console or the command line.
#[derive(Error, Debug)]
pub enum InputError {
    /// The token is not a decimal integer at all.
    #[error("invalid input '{0}': not a number")]
    Malformed(String),

    /// The token is an integer outside `[0, max]`.
    #[error("{value} is not between 0 and {max}")]
    OutOfRange { value: String, max: u64 },

    /// Input ended before a valid number was read.
    #[error("no number was entered")]
    Eof,

    /// Reading the console or writing the prompt failed.
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while dispatching or joining scan workers.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Target lies outside the configured range.
    #[error("target {target} is not between 0 and {max}")]
    TargetOutOfRange { target: u64, max: u64 },

    /// The OS refused to start a worker thread.
    #[error("failed to spawn worker {worker_id}: {source}")]
    Spawn {
        worker_id: usize,
        #[source]
        source: std::io::Error,
    },

    /// A worker thread panicked before reporting.
    #[error("worker {worker_id} panicked")]
    WorkerPanicked { worker_id: usize },
}

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
