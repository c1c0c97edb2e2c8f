//! Void elements: tags rendered without a closing tag.

/// Membership test for elements that never get a closing tag.
///
/// Implementations receive the tag name already lowercased.
pub trait VoidElements: Send + Sync {
	/// Returns `true` when `tag` must not be closed.
	fn is_void(&self, tag: &str) -> bool;
}

/// The HTML void elements, including the obsolete `command`, `keygen` and
/// `param` which browsers still parse as void.
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
	"meta", "param", "source", "track", "wbr",
];

/// Default table backed by [`VOID_ELEMENTS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlVoidElements;

impl VoidElements for HtmlVoidElements {
	fn is_void(&self, tag: &str) -> bool {
		is_void_element(tag)
	}
}

/// Returns whether the lowercase `tag` is an HTML void element.
pub fn is_void_element(tag: &str) -> bool {
	VOID_ELEMENTS.contains(&tag)
}
