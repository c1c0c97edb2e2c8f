//! Attribute rendering.
//!
//! The renderer turns each element property into an attribute token through
//! an [`AttributeRenderer`]. The default [`HtmlAttributeRenderer`] consults
//! the DOM property table in [`properties`].

pub mod properties;

use crate::escape::encode_attribute;
use crate::node::PropertyValue;
use properties::PropertyKind;

/// Turns a property name/value pair into an attribute token.
pub trait AttributeRenderer: Send + Sync {
	/// Renders one attribute.
	///
	/// `raw` is set for entries of the `attributes` map and for hooked
	/// values: the name is used as-is instead of going through the property
	/// table.
	///
	/// Returns `None` when the property has no attribute form. An empty
	/// string means the attribute is suppressed (a false boolean, a null raw
	/// value).
	fn render(&self, name: &str, value: &PropertyValue, raw: bool) -> Option<String>;
}

/// Attribute renderer for HTML documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlAttributeRenderer;

impl AttributeRenderer for HtmlAttributeRenderer {
	fn render(&self, name: &str, value: &PropertyValue, raw: bool) -> Option<String> {
		let value = value.unhooked();

		if let Some(info) = properties::lookup(name) {
			if should_skip(info.kind, value) {
				return Some(String::new());
			}
			let attribute = info.attribute_name();
			match info.kind {
				PropertyKind::Boolean => return Some(encode_attribute(&attribute).into_owned()),
				PropertyKind::OverloadedBoolean if matches!(value, PropertyValue::Bool(true)) => {
					return Some(encode_attribute(&attribute).into_owned());
				}
				_ => {}
			}
			let Some(text) = value.as_text() else {
				tracing::debug!(property = name, "dropping property with a non-scalar value");
				return None;
			};
			return Some(quoted(&attribute, &text));
		}

		if raw {
			if value.is_null() {
				return Some(String::new());
			}
			let text = value.as_text()?;
			return Some(quoted(name, &text));
		}

		tracing::debug!(property = name, "dropping property with no attribute mapping");
		None
	}
}

fn should_skip(kind: PropertyKind, value: &PropertyValue) -> bool {
	match kind {
		_ if value.is_null() => true,
		PropertyKind::Boolean => !value.is_truthy(),
		PropertyKind::OverloadedBoolean => matches!(value, PropertyValue::Bool(false)),
		PropertyKind::Plain => false,
	}
}

fn quoted(name: &str, value: &str) -> String {
	format!(
		"{}=\"{}\"",
		encode_attribute(name),
		encode_attribute(value)
	)
}
