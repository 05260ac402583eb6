//! Per-file and aggregate size ceilings
//!
//! Sizes are raw bytes on disk, checked before any encoding.

use super::LocaleError;
use crate::config::LocaleLimits;

/// Tracks the running total of accepted locale bytes
#[derive(Debug, Clone)]
pub struct SizeEnforcer {
    limits: LocaleLimits,
    total_bytes: u64,
}

impl SizeEnforcer {
    pub fn new(limits: LocaleLimits) -> Self {
        Self {
            limits,
            total_bytes: 0,
        }
    }

    /// Admit one file, in discovery order.
    ///
    /// The per-file ceiling is checked first; the file's bytes only count
    /// toward the total once both checks pass.
    pub fn admit(&mut self, filename: &str, size_bytes: u64) -> Result<(), LocaleError> {
        if size_bytes > self.limits.max_file_bytes {
            return Err(LocaleError::FileTooLarge {
                filename: filename.to_string(),
                size_bytes,
                limit_bytes: self.limits.max_file_bytes,
            });
        }

        let total_bytes = self.total_bytes.saturating_add(size_bytes);
        if total_bytes > self.limits.max_bundle_bytes {
            return Err(LocaleError::BundleTooLarge {
                total_bytes,
                limit_bytes: self.limits.max_bundle_bytes,
            });
        }

        self.total_bytes = total_bytes;
        Ok(())
    }
}
