// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong. Only the demo binary can
// fail at all — the drawing library itself silently tolerates bad input.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    Buffer(String), // Pixel buffer didn't match the declared dimensions
    Encode(String), // Writing the image file failed
}

impl Display for Error {
    // This decides how the error is printed to your console.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Buffer(s) => write!(f, "Buffer error: {s}"),
            Error::Encode(s) => write!(f, "Encode error: {s}"),
        }
    }
}

// We don't implement std::error::Error for now to keep things minimal.
// It's easy to add later when we wire in more components.
