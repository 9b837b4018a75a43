//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// The engine itself only ever fails at construction (a bad frame size).
/// The remaining variants belong to the collaborators around it: input
/// parsing, file loading and rendering.
#[derive(Debug, Error)]
pub enum Error {
    /// Frame size is not a positive integer.
    ///
    /// This is the configuration error raised when an engine is built with
    /// zero frames, or when the user asks for a negative frame count.
    #[error("Invalid frame size {0}: must be at least 1")]
    InvalidFrameSize(i64),

    /// Frame size text could not be read as an integer.
    #[error("Invalid frame size '{0}': expected an integer")]
    InvalidFrameSizeInput(String),

    /// A token in the reference sequence is not a page number.
    ///
    /// Page numbers are `u32`, so anything above 4294967295 lands here
    /// too. `position` is 1-based so it can be shown to users as is.
    #[error("Invalid page '{token}' at position {position}: expected an integer from 0 to 4294967295")]
    InvalidPage { token: String, position: usize },

    /// Policy name is not one of the supported replacement policies.
    #[error("Unknown policy '{0}': expected lru, true-lru or optimal")]
    UnknownPolicy(String),

    /// Neither inline pages nor an input file were given.
    #[error("No reference sequence given: use --pages or --input")]
    MissingInput,

    /// Both inline pages and an input file were given.
    #[error("Conflicting inputs: use either --pages or --input, not both")]
    ConflictingInput,

    /// I/O error from reading input or writing rendered output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize a trace record.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
