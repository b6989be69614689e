//! Symbol localization
//!
//! This module contains the geometric front half of the pipeline:
//! - Rectangle detection (quiet-zone bounded corners from run-length scans)
//! - Finder pattern observations with running-average refinement
//! - Triangle scoring to keep only consistent finder pattern triples

/// Finder triple scoring (right isosceles consistency)
pub mod analyzer;
/// Finder pattern model
pub mod finder;
/// Monochrome rectangle corner detection
pub mod rectangle;

pub use analyzer::FinderPatternAnalyzer;
pub use finder::FinderPattern;
pub use rectangle::RectangleDetector;
