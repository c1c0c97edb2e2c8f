//! HTML entity escaping.
//!
//! One escaping table is shared by text content and attribute names/values:
//!
//! - `&` → `&amp;`
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `"` → `&quot;`
//! - `'` → `&#39;`

use std::borrow::Cow;

const SPECIAL: [char; 5] = ['&', '<', '>', '"', '\''];

/// Escapes HTML special characters in text content.
///
/// The input is scanned once, so an `&` produced by a replacement is never
/// escaped a second time. Returns the input borrowed when nothing needs
/// escaping.
///
/// # Example
///
/// ```
/// use reactive_vdom_html::escape::encode;
///
/// assert_eq!(encode("<span>&\"'"), "&lt;span&gt;&amp;&quot;&#39;");
/// assert_eq!(encode("plain"), "plain");
/// ```
pub fn encode(s: &str) -> Cow<'_, str> {
	if !s.contains(SPECIAL) {
		return Cow::Borrowed(s);
	}

	let mut escaped = String::with_capacity(s.len() + 8);
	for c in s.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}

/// Escapes an attribute name or value.
///
/// Attribute tokens are always double-quoted, so the text table is
/// sufficient.
pub fn encode_attribute(s: &str) -> Cow<'_, str> {
	encode(s)
}
