//! Input layer - turning user text into engine parameters.
//!
//! The engine assumes a well-formed sequence and a positive frame size;
//! this module is where malformed input is caught and reported.
//!
//! - [`parse_sequence`] - Reference string from text
//! - [`parse_frame_size`] - Frame count from text
//! - [`load_sequence`] - Reference string from a file
//! - [`select_sequence`] - Inline text or file, exactly one of them

mod parser;

pub use parser::{load_sequence, parse_frame_size, parse_sequence, select_sequence};
