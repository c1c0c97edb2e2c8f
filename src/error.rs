//! Error types for node construction and bounded rendering.

use std::time::Duration;

/// Errors reported by this crate.
///
/// Rendering itself never fails: node shapes the renderer does not understand
/// degrade to an empty string. The variants here cover building nodes and
/// rendering under a caller-supplied deadline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	/// An element was constructed without a tag name.
	#[error("element tag name must not be empty")]
	EmptyTagName,

	/// A render did not settle before the configured deadline, usually
	/// because a live widget never produced its first snapshot.
	#[error("render did not settle within {0:?}")]
	Timeout(Duration),
}

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
