//! Inline style serialization.

use convert_case::{Boundary, Case, Casing};

use crate::node::{Properties, PropertyValue};

/// Word boundaries for CSS property names. Digits stay attached to the
/// preceding word (`gridArea2` is `grid-area2`).
const CSS_BOUNDARIES: &[Boundary] = &[
	Boundary::Hyphen,
	Boundary::Underscore,
	Boundary::Space,
	Boundary::LowerUpper,
	Boundary::Acronym,
];

/// Converts a CSS property name to kebab-case.
///
/// Word boundaries are a lowercase letter followed by an uppercase letter,
/// an uppercase run followed by a capitalized word, and the `-`, `_` and
/// space separators. Custom properties (`--main-color`) are kept verbatim.
///
/// # Example
///
/// ```
/// use reactive_vdom_html::style::param_case;
///
/// assert_eq!(param_case("zIndex"), "z-index");
/// assert_eq!(param_case("WebkitTransition"), "webkit-transition");
/// ```
pub fn param_case(name: &str) -> String {
	if name.starts_with("--") {
		return name.to_string();
	}
	name.with_boundaries(CSS_BOUNDARIES).to_case(Case::Kebab)
}

/// Serializes a style map to a declaration list.
///
/// Every non-null entry becomes `name: value;`, entries separated by one
/// space. Non-scalar values render as an empty value. Null entries are left
/// out rather than written as `name: null;`.
pub fn to_css(style: &Properties) -> String {
	let mut css = String::new();
	for (name, value) in style {
		if value.is_null() {
			continue;
		}
		let text = value.as_text().unwrap_or_default();
		css.push_str(&param_case(name));
		css.push_str(": ");
		css.push_str(&text);
		css.push_str("; ");
	}
	css.trim().to_string()
}

/// Convenience for building a style map from pairs.
pub fn style_map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> PropertyValue
where
	K: Into<String>,
	V: Into<PropertyValue>,
{
	entries.into_iter().collect()
}
