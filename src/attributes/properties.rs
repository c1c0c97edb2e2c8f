//! DOM property table.
//!
//! Maps DOM property names (`className`, `htmlFor`, `acceptCharset`, ...) to
//! the attribute they render as, together with how their value is
//! interpreted. Names missing from this table are not rendered unless they
//! come through the raw attribute path.

/// How a property value turns into an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
	/// `name="value"`.
	Plain,
	/// Bare name when truthy, dropped when falsy.
	Boolean,
	/// Bare name for `true`, dropped for `false`, `name="value"` otherwise.
	OverloadedBoolean,
}

/// A table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyInfo {
	/// DOM property name.
	pub property: &'static str,
	/// Attribute name when it differs from the lowercased property name.
	pub attribute: Option<&'static str>,
	/// Value interpretation.
	pub kind: PropertyKind,
}

impl PropertyInfo {
	/// Returns the attribute name this property renders as.
	pub fn attribute_name(&self) -> String {
		match self.attribute {
			Some(name) => name.to_string(),
			None => self.property.to_ascii_lowercase(),
		}
	}
}

use PropertyKind::{Boolean, OverloadedBoolean, Plain};

const fn entry(property: &'static str, kind: PropertyKind) -> PropertyInfo {
	PropertyInfo {
		property,
		attribute: None,
		kind,
	}
}

const fn renamed(property: &'static str, attribute: &'static str) -> PropertyInfo {
	PropertyInfo {
		property,
		attribute: Some(attribute),
		kind: Plain,
	}
}

/// Known HTML properties.
pub const PROPERTIES: &[PropertyInfo] = &[
	entry("accept", Plain),
	renamed("acceptCharset", "accept-charset"),
	entry("accessKey", Plain),
	entry("action", Plain),
	entry("allowFullScreen", Boolean),
	entry("allowTransparency", Plain),
	entry("alt", Plain),
	entry("async", Boolean),
	entry("autoCapitalize", Plain),
	entry("autoComplete", Plain),
	entry("autoCorrect", Plain),
	entry("autoFocus", Boolean),
	entry("autoPlay", Boolean),
	entry("autoSave", Plain),
	entry("capture", Boolean),
	entry("cellPadding", Plain),
	entry("cellSpacing", Plain),
	entry("challenge", Plain),
	entry("charSet", Plain),
	entry("checked", Boolean),
	entry("cite", Plain),
	entry("classID", Plain),
	renamed("className", "class"),
	entry("cols", Plain),
	entry("colSpan", Plain),
	entry("content", Plain),
	entry("contentEditable", Plain),
	entry("contextMenu", Plain),
	entry("controls", Boolean),
	entry("coords", Plain),
	entry("crossOrigin", Plain),
	entry("data", Plain),
	entry("dateTime", Plain),
	entry("default", Boolean),
	entry("defer", Boolean),
	entry("dir", Plain),
	entry("disabled", Boolean),
	entry("download", OverloadedBoolean),
	entry("draggable", Plain),
	entry("encType", Plain),
	entry("form", Plain),
	entry("formAction", Plain),
	entry("formEncType", Plain),
	entry("formMethod", Plain),
	entry("formNoValidate", Boolean),
	entry("formTarget", Plain),
	entry("frameBorder", Plain),
	entry("headers", Plain),
	entry("height", Plain),
	entry("hidden", Boolean),
	entry("high", Plain),
	entry("href", Plain),
	entry("hrefLang", Plain),
	renamed("htmlFor", "for"),
	renamed("httpEquiv", "http-equiv"),
	entry("icon", Plain),
	entry("id", Plain),
	entry("inert", Boolean),
	entry("inputMode", Plain),
	entry("integrity", Plain),
	entry("is", Plain),
	entry("itemID", Plain),
	entry("itemProp", Plain),
	entry("itemRef", Plain),
	entry("itemScope", Boolean),
	entry("itemType", Plain),
	entry("keyParams", Plain),
	entry("keyType", Plain),
	entry("kind", Plain),
	entry("label", Plain),
	entry("lang", Plain),
	entry("list", Plain),
	entry("loop", Boolean),
	entry("low", Plain),
	entry("manifest", Plain),
	entry("marginHeight", Plain),
	entry("marginWidth", Plain),
	entry("max", Plain),
	entry("maxLength", Plain),
	entry("media", Plain),
	entry("mediaGroup", Plain),
	entry("method", Plain),
	entry("min", Plain),
	entry("minLength", Plain),
	entry("multiple", Boolean),
	entry("muted", Boolean),
	entry("name", Plain),
	entry("noModule", Boolean),
	entry("nonce", Plain),
	entry("noValidate", Boolean),
	entry("open", Boolean),
	entry("optimum", Plain),
	entry("pattern", Plain),
	entry("placeholder", Plain),
	entry("playsInline", Boolean),
	entry("poster", Plain),
	entry("preload", Plain),
	entry("property", Plain),
	entry("radioGroup", Plain),
	entry("readOnly", Boolean),
	entry("referrerPolicy", Plain),
	entry("rel", Plain),
	entry("required", Boolean),
	entry("reversed", Boolean),
	entry("role", Plain),
	entry("rows", Plain),
	entry("rowSpan", Plain),
	entry("sandbox", Plain),
	entry("scope", Plain),
	entry("scoped", Boolean),
	entry("scrolling", Plain),
	entry("seamless", Boolean),
	entry("selected", Boolean),
	entry("shape", Plain),
	entry("size", Plain),
	entry("sizes", Plain),
	entry("span", Plain),
	entry("spellCheck", Plain),
	entry("src", Plain),
	entry("srcDoc", Plain),
	entry("srcLang", Plain),
	entry("srcSet", Plain),
	entry("start", Plain),
	entry("step", Plain),
	entry("style", Plain),
	entry("summary", Plain),
	entry("tabIndex", Plain),
	entry("target", Plain),
	entry("title", Plain),
	entry("type", Plain),
	entry("unselectable", Plain),
	entry("useMap", Plain),
	entry("value", Plain),
	entry("width", Plain),
	entry("wmode", Plain),
	entry("wrap", Plain),
];

/// Looks up a property by its DOM name or by the all-lowercase spelling of
/// that name (`autofocus` finds `autoFocus`).
pub fn lookup(name: &str) -> Option<&'static PropertyInfo> {
	PROPERTIES
		.iter()
		.find(|info| info.property == name)
		.or_else(|| {
			PROPERTIES
				.iter()
				.find(|info| info.property.eq_ignore_ascii_case(name) && is_lowercase(name))
		})
}

fn is_lowercase(name: &str) -> bool {
	!name.chars().any(|c| c.is_ascii_uppercase())
}
