//! Open and close tag assembly.

use crate::attributes::AttributeRenderer;
use crate::node::{PropertyValue, VElement};
use crate::style;
use crate::void::VoidElements;

/// Builds `<tag attr1 attr2 ...>` for an element.
///
/// Properties are visited in insertion order. Entries of the `attributes`
/// map and hooked values go through the raw path and always contribute a
/// leading space, even when the renderer suppresses them; every other
/// property contributes `" " + token` only for a non-empty token.
pub fn open_tag(element: &VElement, attributes: &dyn AttributeRenderer) -> String {
	let mut tag = String::from("<");
	tag.push_str(&element.tag_name().to_lowercase());

	for (name, value) in element.properties() {
		match (name.as_str(), value) {
			(_, PropertyValue::Null) => {}
			("attributes", PropertyValue::Map(raw)) => {
				for (raw_name, raw_value) in raw {
					push_raw(&mut tag, attributes.render(raw_name, raw_value, true));
				}
			}
			("attributes", _) => {
				tracing::debug!("ignoring `attributes` property that is not a map");
			}
			("style", PropertyValue::Map(declarations)) => {
				let css = PropertyValue::String(style::to_css(declarations));
				push_token(&mut tag, attributes.render("style", &css, false));
			}
			(_, PropertyValue::Hook(hook)) => {
				push_raw(&mut tag, attributes.render(name, hook.value(), true));
			}
			_ => push_token(&mut tag, attributes.render(name, value, false)),
		}
	}

	tag.push('>');
	tag
}

/// Returns `</tag>`, or an empty string for void elements.
pub fn close_tag(element: &VElement, void_elements: &dyn VoidElements) -> String {
	let tag = element.tag_name().to_lowercase();
	if void_elements.is_void(&tag) {
		String::new()
	} else {
		format!("</{tag}>")
	}
}

// Raw tokens keep their separator even when empty.
fn push_raw(tag: &mut String, token: Option<String>) {
	tag.push(' ');
	if let Some(token) = token {
		tag.push_str(&token);
	}
}

fn push_token(tag: &mut String, token: Option<String>) {
	if let Some(token) = token.filter(|t| !t.is_empty()) {
		tag.push(' ');
		tag.push_str(&token);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::attributes::HtmlAttributeRenderer;
	use crate::node::{RenderHook, VElement};
	use crate::void::HtmlVoidElements;
	use rstest::rstest;

	fn open(element: &VElement) -> String {
		open_tag(element, &HtmlAttributeRenderer)
	}

	#[rstest]
	fn test_bare_tag_lowercased() {
		assert_eq!(open(&VElement::new("SPAN")), "<span>");
	}

	#[rstest]
	fn test_properties_in_insertion_order() {
		let el = VElement::new("form")
			.raw_property("className", "login")
			.raw_property("acceptCharset", "ISO-8859-1")
			.raw_property("accessKey", "h");
		assert_eq!(
			open(&el),
			"<form class=\"login\" accept-charset=\"ISO-8859-1\" accesskey=\"h\">"
		);
	}

	#[rstest]
	fn test_null_and_unknown_properties_skipped() {
		let el = VElement::new("web-component")
			.raw_property("className", PropertyValue::Null)
			.raw_property("random-prop", "random!")
			.on("click", || {});
		assert_eq!(open(&el), "<web-component>");
	}

	#[rstest]
	fn test_false_boolean_leaves_no_space() {
		let el = VElement::new("input")
			.raw_property("autofocus", true)
			.raw_property("disabled", false);
		assert_eq!(open(&el), "<input autofocus>");
	}

	#[rstest]
	fn test_raw_null_attribute_keeps_space() {
		let el = VElement::new("circle")
			.attribute("cx", "60")
			.attribute("cy", "60")
			.attribute("r", PropertyValue::Null);
		assert_eq!(open(&el), "<circle cx=\"60\" cy=\"60\" >");
	}

	#[rstest]
	fn test_style_map() {
		let el = VElement::new("div")
			.style("background", "black")
			.style("zIndex", "1");
		assert_eq!(open(&el), "<div style=\"background: black; z-index: 1;\">");
	}

	#[rstest]
	fn test_scalar_style_passes_through() {
		let el = VElement::new("div").raw_property("style", "color: red");
		assert_eq!(open(&el), "<div style=\"color: red\">");
	}

	#[rstest]
	fn test_hook_renders_raw() {
		let el = VElement::new("use").raw_property(
			"xlink:href",
			RenderHook::attribute(Some(crate::node::XLINK_NAMESPACE), "/abc.jpg"),
		);
		assert_eq!(open(&el), "<use xlink:href=\"/abc.jpg\">");
	}

	#[rstest]
	fn test_non_map_attributes_ignored() {
		let el = VElement::new("div").raw_property("attributes", "oops");
		assert_eq!(open(&el), "<div>");
	}

	#[rstest]
	#[case("input", "")]
	#[case("BR", "")]
	#[case("div", "</div>")]
	#[case("SPAN", "</span>")]
	fn test_close_tag(#[case] tag: &str, #[case] expected: &str) {
		assert_eq!(close_tag(&VElement::new(tag), &HtmlVoidElements), expected);
	}
}
