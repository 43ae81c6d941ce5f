//! Configuration for SVG export

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::ExportError;

/// Largest supported number of fractional digits
pub const MAX_PRECISION: u32 = 21;

/// Configuration options for SVG export
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Fractional digits kept in coordinates (0..=21)
    pub precision: u32,

    /// Whether to write the document on a single line
    pub minify: bool,

    /// Path of the file to write
    pub output: PathBuf,

    /// Whether the viewBox always contains the origin.
    ///
    /// The bounding box starts as a zero-sized box at (0, 0), so a drawing
    /// that does not touch the origin still gets a viewBox reaching it.
    /// Disable for a viewBox fitted tightly around the curves.
    pub include_origin: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            precision: 4,
            minify: false,
            output: PathBuf::from("output.svg"),
            include_origin: true,
        }
    }
}

impl ExportSettings {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the coordinate precision
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Set whether to write a single-line document
    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    /// Set the output file path
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Set whether the viewBox is anchored at the origin
    pub fn with_include_origin(mut self, include_origin: bool) -> Self {
        self.include_origin = include_origin;
        self
    }

    /// Check that the settings are within their supported ranges
    pub fn validate(&self) -> Result<(), ExportError> {
        if self.precision > MAX_PRECISION {
            return Err(ExportError::InvalidPrecision(self.precision));
        }
        Ok(())
    }
}
