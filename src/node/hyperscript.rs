//! Hyperscript helpers.
//!
//! [`h`] builds an element from a CSS-like selector (`div.card#main`) and
//! [`svg`] builds an element in the SVG namespace. Properties set through
//! [`VElement::property`] follow the same conversions a hyperscript layer
//! applies before handing nodes to a renderer.

use super::{HookKind, PropertyValue, RenderHook, VElement};

/// SVG namespace URI.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
/// XLink namespace URI.
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";
/// XML namespace URI.
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Properties an SVG element keeps as properties instead of moving them to
/// the `attributes` map.
const SVG_KEPT_PROPERTIES: &[&str] = &["attributes", "className", "id", "innerHTML", "style"];

/// Creates an element from a selector.
///
/// The selector is a tag name optionally followed by `.class` and `#id`
/// parts. A selector that starts with `.` or `#` creates a `div`.
///
/// # Example
///
/// ```
/// use reactive_vdom_html::node::{h, PropertyValue};
///
/// let el = h("span.badge.large#count");
/// assert_eq!(el.tag_name(), "span");
/// assert!(matches!(
///     el.properties().get("className"),
///     Some(PropertyValue::String(s)) if s == "badge large"
/// ));
/// ```
pub fn h(selector: &str) -> VElement {
	let parsed = parse_selector(selector);
	let mut element = VElement::new(parsed.tag);
	if !parsed.classes.is_empty() {
		element
			.properties
			.insert("className".to_string(), parsed.classes.join(" ").into());
	}
	if let Some(id) = parsed.id {
		element.properties.insert("id".to_string(), id.into());
	}
	element
}

/// Creates an element in the SVG namespace.
///
/// Scalar properties other than `className`, `id`, `style`, `innerHTML` and
/// `attributes` are stored as raw attributes so their case survives
/// (`viewBox`). Names prefixed `xlink:` or `xml:` become namespaced
/// attribute hooks.
pub fn svg(selector: &str) -> VElement {
	h(selector).namespace(SVG_NAMESPACE)
}

struct Selector<'a> {
	tag: &'a str,
	id: Option<&'a str>,
	classes: Vec<&'a str>,
}

fn parse_selector(selector: &str) -> Selector<'_> {
	let mut parts = Vec::new();
	let mut start = 0;
	for (i, c) in selector.char_indices() {
		if (c == '.' || c == '#') && i > start {
			parts.push(&selector[start..i]);
			start = i;
		} else if c == '.' || c == '#' {
			start = i;
		}
	}
	if start < selector.len() {
		parts.push(&selector[start..]);
	}

	let mut parsed = Selector {
		tag: "div",
		id: None,
		classes: Vec::new(),
	};
	for (index, part) in parts.into_iter().enumerate() {
		if let Some(class) = part.strip_prefix('.') {
			if !class.is_empty() {
				parsed.classes.push(class);
			}
		} else if let Some(id) = part.strip_prefix('#') {
			if !id.is_empty() {
				parsed.id = Some(id);
			}
		} else if index == 0 && !part.trim().is_empty() {
			parsed.tag = part.trim();
		}
	}
	parsed
}

pub(super) fn set_property(element: &mut VElement, name: String, value: PropertyValue) {
	if element.namespace.as_deref() == Some(SVG_NAMESPACE)
		&& !SVG_KEPT_PROPERTIES.contains(&name.as_str())
		&& matches!(
			value,
			PropertyValue::String(_) | PropertyValue::Number(_) | PropertyValue::Bool(_)
		) {
		match attribute_namespace(&name) {
			Some(namespace) => {
				let hook = RenderHook::attribute(Some(namespace), value);
				element.properties.insert(name, PropertyValue::Hook(hook));
			}
			None => {
				element.nested_map("attributes").insert(name, value);
			}
		}
		return;
	}

	if name == "value"
		&& element.namespace.is_none()
		&& element.tag_name.eq_ignore_ascii_case("input")
		&& !matches!(value, PropertyValue::Hook(_) | PropertyValue::Null)
	{
		let hook = RenderHook {
			kind: HookKind::SoftSet,
			value: Box::new(value),
		};
		element.properties.insert(name, PropertyValue::Hook(hook));
		return;
	}

	if name == "className" {
		if let (Some(PropertyValue::String(existing)), Some(added)) =
			(element.properties.get_mut("className"), value.as_text())
		{
			existing.push(' ');
			existing.push_str(&added);
			return;
		}
	}

	element.properties.insert(name, value);
}

fn attribute_namespace(name: &str) -> Option<&'static str> {
	if name.starts_with("xlink:") {
		Some(XLINK_NAMESPACE)
	} else if name.starts_with("xml:") {
		Some(XML_NAMESPACE)
	} else {
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn class_name(el: &VElement) -> Option<String> {
		el.properties()
			.get("className")
			.and_then(|v| v.as_text())
			.map(|s| s.into_owned())
	}

	#[rstest]
	#[case("span", "span", None, None)]
	#[case("div.foo", "div", Some("foo"), None)]
	#[case(".foo.bar", "div", Some("foo bar"), None)]
	#[case("#main", "div", None, Some("main"))]
	#[case("section.card#intro", "section", Some("card"), Some("intro"))]
	fn test_parse_selector(
		#[case] selector: &str,
		#[case] tag: &str,
		#[case] classes: Option<&str>,
		#[case] id: Option<&str>,
	) {
		let el = h(selector);
		assert_eq!(el.tag_name(), tag);
		assert_eq!(class_name(&el).as_deref(), classes);
		assert_eq!(
			el.properties().get("id").and_then(|v| v.as_text()).as_deref(),
			id
		);
	}

	#[rstest]
	fn test_class_name_accumulates() {
		let el = h("div.foo").property("className", "bar");
		assert_eq!(class_name(&el).as_deref(), Some("foo bar"));
	}

	#[rstest]
	fn test_input_value_becomes_soft_set_hook() {
		let el = h("input").property("value", "add");
		match el.properties().get("value") {
			Some(PropertyValue::Hook(hook)) => assert_eq!(hook.kind(), &HookKind::SoftSet),
			other => panic!("expected hook, got {other:?}"),
		}
	}

	#[rstest]
	fn test_svg_moves_plain_attributes() {
		let el = svg("svg").property("viewBox", "0 0 10 10");
		assert!(el.properties().get("viewBox").is_none());
		match el.properties().get("attributes") {
			Some(PropertyValue::Map(map)) => {
				assert_eq!(map.len(), 1);
				assert_eq!(
					map.get("viewBox").and_then(|v| v.as_text()).as_deref(),
					Some("0 0 10 10")
				);
			}
			other => panic!("expected attributes map, got {other:?}"),
		}
	}

	#[rstest]
	fn test_svg_namespaced_attribute_hook() {
		let el = svg("use").property("xlink:href", "/abc.jpg");
		match el.properties().get("xlink:href") {
			Some(PropertyValue::Hook(hook)) => assert_eq!(
				hook.kind(),
				&HookKind::Attribute {
					namespace: Some(XLINK_NAMESPACE.to_string())
				}
			),
			other => panic!("expected hook, got {other:?}"),
		}
	}
}
