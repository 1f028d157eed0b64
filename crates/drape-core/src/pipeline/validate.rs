//! Input validation before decoding.

use image::ImageFormat;

use crate::config::LimitsConfig;
use crate::error::{PipelineError, PipelineResult};

/// Rejects oversized or non-image byte buffers before a full decode.
pub struct Validator {
    limits: LimitsConfig,
}

impl Validator {
    pub fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    /// Quick checks on raw input bytes.
    ///
    /// - Size is within `max_file_size_mb`
    /// - Leading bytes match a signature of a format the decoder reads
    pub fn validate(&self, bytes: &[u8]) -> PipelineResult<()> {
        let max_bytes = self.limits.max_file_size_mb * 1024 * 1024;
        if bytes.len() as u64 > max_bytes {
            return Err(PipelineError::InputTooLarge {
                size_mb: bytes.len() as u64 / (1024 * 1024),
                max_mb: self.limits.max_file_size_mb,
            });
        }

        if bytes.len() < 4 {
            return Err(PipelineError::ImageDecode {
                message: "Input too small to be a valid image".to_string(),
            });
        }

        match sniff_format(bytes) {
            Some(_) => Ok(()),
            None => Err(PipelineError::ImageDecode {
                message: "Unrecognized image format (invalid magic bytes)".to_string(),
            }),
        }
    }
}

/// Identify the container format from its leading bytes.
///
/// Uses the decoder's own signature table, so every format the `image`
/// build can read passes and nothing else does.
pub fn sniff_format(header: &[u8]) -> Option<ImageFormat> {
    image::guess_format(header)
        .ok()
        .filter(|format| format.reading_enabled())
}
