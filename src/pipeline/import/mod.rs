pub mod format;
pub mod hash;

pub use format::{detect_format, FileCategory, FormatDetection};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported format for import")]
    UnsupportedFormat,
}
