//! Builder pattern for configuring a [`BatchProcessor`].
//!
//! # Example
//!
//! ```
//! use galoisfield::{BatchProcessorBuilder, ValueFormat};
//!
//! let processor = BatchProcessorBuilder::new()
//!     .parallel_threshold(64)
//!     .value_format(ValueFormat::Coefficients)
//!     .build();
//!
//! assert_eq!(processor.config().parallel_threshold, 64);
//! assert_eq!(processor.config().value_format, ValueFormat::Coefficients);
//! ```
//!
//! Unset options keep the values of [`BatchConfig::default`].

use crate::batch::{BatchConfig, BatchProcessor, ValueFormat};

/// Builder for a [`BatchProcessor`].
#[derive(Debug, Clone, Default)]
pub struct BatchProcessorBuilder {
    parallel_threshold: Option<usize>,
    value_format: Option<ValueFormat>,
}

impl BatchProcessorBuilder {
    /// Create a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the batch size from which requests are evaluated in parallel.
    ///
    /// Only takes effect with the `parallel` feature. A threshold of 0 makes
    /// every batch parallel.
    #[must_use]
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = Some(threshold);
        self
    }

    /// Set how extension-field results are rendered.
    #[must_use]
    pub fn value_format(mut self, format: ValueFormat) -> Self {
        self.value_format = Some(format);
        self
    }

    /// Build the processor.
    #[must_use]
    pub fn build(self) -> BatchProcessor {
        let defaults = BatchConfig::default();
        BatchProcessor::with_config(BatchConfig {
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
            value_format: self.value_format.unwrap_or(defaults.value_format),
        })
    }
}
