//! Error types for floor-plan extraction.
//!
//! Only a document that fails to parse as markup is fatal. Everything at
//! shape granularity is recovered: the shape is skipped and the parse goes
//! on, so one broken outline never costs the caller the rest of the floor.

use thiserror::Error;

/// Fatal failure parsing one floor-plan document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The document text is not well-formed markup. No partial result is
    /// produced for this floor; other floors are unaffected.
    #[error("floor plan `{floor}` is not valid SVG markup: {source}")]
    Document {
        floor: String,
        #[source]
        source: roxmltree::Error,
    },
}

/// Failure deriving a room record from a single shape.
///
/// Recovered by the parser: logged with the offending identifier, skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("shape `{raw_id}` could not be resolved: {reason}")]
pub struct ShapeError {
    pub raw_id: String,
    pub reason: String,
}
