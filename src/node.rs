//! Virtual-node types.
//!
//! ## Overview
//!
//! [`Node`] is the input of the renderer. It is a tagged union over the node
//! kinds a hyperscript layer produces: elements, text, lazy thunks and live
//! widgets whose content arrives asynchronously. [`Node::Empty`] stands in
//! for absent input and renders as nothing.
//!
//! ## Example
//!
//! ```
//! use reactive_vdom_html::node::{IntoNode, VElement};
//!
//! let node = VElement::new("div")
//!     .property("className", "container")
//!     .child("Hello, World!")
//!     .into_node();
//! ```

pub mod hyperscript;

use indexmap::IndexMap;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::widget::LiveWidget;

pub use hyperscript::{SVG_NAMESPACE, XLINK_NAMESPACE, XML_NAMESPACE, h, svg};

/// Insertion-ordered property map. Output order of attributes follows it.
pub type Properties = IndexMap<String, PropertyValue>;

/// Event handler stored under an `ev-*` property. Never rendered.
pub type EventHandler = Arc<dyn Fn() + Send + Sync + 'static>;

/// The value of an element property.
#[derive(Clone, Default)]
pub enum PropertyValue {
	/// An absent value; the property is skipped.
	#[default]
	Null,
	/// A boolean.
	Bool(bool),
	/// A number.
	Number(f64),
	/// A string.
	String(String),
	/// A nested mapping, used by the reserved `attributes` and `style` names.
	Map(Properties),
	/// A value forced through the raw attribute path.
	Hook(RenderHook),
	/// An event handler.
	Callback(EventHandler),
}

impl fmt::Debug for PropertyValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => f.write_str("Null"),
			Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
			Self::Number(n) => f.debug_tuple("Number").field(n).finish(),
			Self::String(s) => f.debug_tuple("String").field(s).finish(),
			Self::Map(m) => f.debug_tuple("Map").field(m).finish(),
			Self::Hook(h) => f.debug_tuple("Hook").field(h).finish(),
			Self::Callback(_) => f.write_str("Callback(..)"),
		}
	}
}

impl PropertyValue {
	/// Returns `true` for [`PropertyValue::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Truthiness as a boolean attribute sees it: `false`, `0`, `NaN`, the
	/// empty string and null are falsy, everything else is truthy.
	pub fn is_truthy(&self) -> bool {
		match self {
			Self::Null => false,
			Self::Bool(b) => *b,
			Self::Number(n) => *n != 0.0 && !n.is_nan(),
			Self::String(s) => !s.is_empty(),
			Self::Hook(hook) => hook.value().is_truthy(),
			Self::Map(_) | Self::Callback(_) => true,
		}
	}

	/// Scalar text form of the value.
	///
	/// Returns `None` for null, nested maps and callbacks. Hooks yield the
	/// text of the value they carry.
	pub fn as_text(&self) -> Option<Cow<'_, str>> {
		match self {
			Self::Bool(true) => Some(Cow::Borrowed("true")),
			Self::Bool(false) => Some(Cow::Borrowed("false")),
			Self::Number(n) => Some(Cow::Owned(format_number(*n))),
			Self::String(s) => Some(Cow::Borrowed(s.as_str())),
			Self::Hook(hook) => hook.value().as_text(),
			Self::Null | Self::Map(_) | Self::Callback(_) => None,
		}
	}

	/// Strips any number of hook wrappers.
	pub fn unhooked(&self) -> &PropertyValue {
		match self {
			Self::Hook(hook) => hook.value().unhooked(),
			other => other,
		}
	}
}

/// Formats a number the way markup expects: integral values without a
/// fractional part, `NaN` and `Infinity` spelled out, and magnitudes from
/// `1e21` up or below `1e-6` in exponent form (`1e+21`, `1.5e-7`).
fn format_number(n: f64) -> String {
	if n.is_nan() {
		"NaN".to_string()
	} else if n.is_infinite() {
		if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
	} else if n == 0.0 {
		"0".to_string()
	} else if n.abs() >= 1e21 || n.abs() < 1e-6 {
		let formatted = format!("{n:e}");
		match formatted.split_once('e') {
			Some((mantissa, exponent)) if !exponent.starts_with('-') => {
				format!("{mantissa}e+{exponent}")
			}
			_ => formatted,
		}
	} else {
		n.to_string()
	}
}

impl From<&str> for PropertyValue {
	fn from(value: &str) -> Self {
		Self::String(value.to_string())
	}
}

impl From<String> for PropertyValue {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<&String> for PropertyValue {
	fn from(value: &String) -> Self {
		Self::String(value.clone())
	}
}

impl From<bool> for PropertyValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

macro_rules! impl_number_property {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for PropertyValue {
				fn from(value: $ty) -> Self {
					Self::Number(value as f64)
				}
			}
		)*
	};
}

impl_number_property!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64);

impl From<Properties> for PropertyValue {
	fn from(value: Properties) -> Self {
		Self::Map(value)
	}
}

impl From<RenderHook> for PropertyValue {
	fn from(value: RenderHook) -> Self {
		Self::Hook(value)
	}
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

impl<K: Into<String>, V: Into<PropertyValue>> FromIterator<(K, V)> for PropertyValue {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self::Map(
			iter.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		)
	}
}

/// How a [`RenderHook`] was attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookKind {
	/// Set-once property hook (hyperscript uses it for `value` on inputs).
	SoftSet,
	/// Attribute hook, optionally namespaced (`xlink:href`).
	Attribute {
		/// Attribute namespace URI.
		namespace: Option<String>,
	},
}

/// Wraps a property value so that it renders as an attribute even when the
/// name is normally a DOM-only property.
#[derive(Debug, Clone)]
pub struct RenderHook {
	kind: HookKind,
	value: Box<PropertyValue>,
}

impl RenderHook {
	/// Creates a soft-set hook.
	pub fn soft_set(value: impl Into<PropertyValue>) -> Self {
		Self {
			kind: HookKind::SoftSet,
			value: Box::new(value.into()),
		}
	}

	/// Creates an attribute hook.
	pub fn attribute(namespace: Option<&str>, value: impl Into<PropertyValue>) -> Self {
		Self {
			kind: HookKind::Attribute {
				namespace: namespace.map(str::to_string),
			},
			value: Box::new(value.into()),
		}
	}

	/// Returns how the hook was attached.
	pub fn kind(&self) -> &HookKind {
		&self.kind
	}

	/// Returns the carried value.
	pub fn value(&self) -> &PropertyValue {
		&self.value
	}
}

/// An element node.
#[derive(Debug, Clone)]
pub struct VElement {
	/// The tag name, as given. Lowercased on render.
	tag_name: String,
	properties: Properties,
	children: Vec<Node>,
	key: Option<String>,
	namespace: Option<String>,
}

impl VElement {
	/// Creates an element with no properties and no children.
	///
	/// # Panics
	///
	/// Panics if `tag_name` is empty. Use [`VElement::try_new`] for
	/// untrusted input.
	pub fn new(tag_name: impl Into<String>) -> Self {
		match Self::try_new(tag_name) {
			Ok(element) => element,
			Err(err) => panic!("{err}"),
		}
	}

	/// Creates an element, rejecting an empty tag name.
	pub fn try_new(tag_name: impl Into<String>) -> Result<Self> {
		let tag_name = tag_name.into();
		if tag_name.is_empty() {
			return Err(Error::EmptyTagName);
		}
		Ok(Self {
			tag_name,
			properties: Properties::new(),
			children: Vec::new(),
			key: None,
			namespace: None,
		})
	}

	/// Sets a property with hyperscript semantics.
	///
	/// - On SVG elements, plain scalar attributes move into the `attributes`
	///   map and `xlink:`/`xml:` names become namespaced attribute hooks.
	/// - `value` on an `input` becomes a soft-set hook.
	/// - `className` accumulates onto classes already present (for example
	///   from an `h("div.a")` selector).
	///
	/// Use [`VElement::raw_property`] to store a value untouched.
	pub fn property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
		hyperscript::set_property(&mut self, name.into(), value.into());
		self
	}

	/// Stores a property exactly as given.
	pub fn raw_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
		self.properties.insert(name.into(), value.into());
		self
	}

	/// Adds an entry to the raw `attributes` map.
	pub fn attribute(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
		self.nested_map("attributes").insert(name.into(), value.into());
		self
	}

	/// Adds an entry to the `style` map. Names may be camelCase.
	pub fn style(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
		self.nested_map("style").insert(name.into(), value.into());
		self
	}

	/// Sets literal inner markup. Children are ignored when this is set.
	pub fn inner_html(self, html: impl Into<String>) -> Self {
		self.raw_property("innerHTML", html.into())
	}

	/// Attaches an event handler under `ev-<event>`.
	pub fn on<F>(self, event: &str, handler: F) -> Self
	where
		F: Fn() + Send + Sync + 'static,
	{
		self.raw_property(
			format!("ev-{event}"),
			PropertyValue::Callback(Arc::new(handler)),
		)
	}

	/// Sets the diffing key. Keys are not rendered.
	pub fn key(mut self, key: impl Into<String>) -> Self {
		self.key = Some(key.into());
		self
	}

	/// Sets the element namespace. Namespaces are not rendered.
	pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
		self.namespace = Some(namespace.into());
		self
	}

	/// Adds a child node.
	pub fn child(mut self, child: impl IntoNode) -> Self {
		self.children.push(child.into_node());
		self
	}

	/// Adds multiple child nodes.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoNode>) -> Self {
		self.children
			.extend(children.into_iter().map(IntoNode::into_node));
		self
	}

	/// Adds a child mutably.
	pub fn add_child(&mut self, child: impl IntoNode) {
		self.children.push(child.into_node());
	}

	/// Returns the tag name as given.
	pub fn tag_name(&self) -> &str {
		&self.tag_name
	}

	/// Returns the properties in insertion order.
	pub fn properties(&self) -> &Properties {
		&self.properties
	}

	/// Returns mutable access to the properties.
	pub fn properties_mut(&mut self) -> &mut Properties {
		&mut self.properties
	}

	/// Returns the child nodes.
	pub fn child_nodes(&self) -> &[Node] {
		&self.children
	}

	/// Returns the key, if any.
	pub fn key_str(&self) -> Option<&str> {
		self.key.as_deref()
	}

	/// Returns the namespace, if any.
	pub fn namespace_uri(&self) -> Option<&str> {
		self.namespace.as_deref()
	}

	/// Returns the literal inner markup when a non-null `innerHTML` property
	/// is present. Non-scalar values yield an empty string.
	pub fn literal_inner_html(&self) -> Option<Cow<'_, str>> {
		match self.properties.get("innerHTML") {
			None | Some(PropertyValue::Null) => None,
			Some(value) => Some(value.as_text().unwrap_or(Cow::Borrowed(""))),
		}
	}

	/// Returns the nested map stored under `name`, replacing any non-map
	/// value.
	fn nested_map(&mut self, name: &str) -> &mut Properties {
		let slot = self
			.properties
			.entry(name.to_string())
			.or_insert_with(|| PropertyValue::Map(Properties::new()));
		if !matches!(slot, PropertyValue::Map(_)) {
			*slot = PropertyValue::Map(Properties::new());
		}
		match slot {
			PropertyValue::Map(map) => map,
			_ => unreachable!("slot was just replaced with a map"),
		}
	}
}

/// A text node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VText {
	text: String,
}

impl VText {
	/// Creates a text node.
	pub fn new(text: impl Into<String>) -> Self {
		Self { text: text.into() }
	}

	/// Returns the text.
	pub fn text(&self) -> &str {
		&self.text
	}
}

/// A lazy node producer. Invoking it yields a fresh node; nothing is cached.
#[derive(Clone)]
pub struct Thunk {
	render: Arc<dyn Fn() -> Node + Send + Sync + 'static>,
}

impl fmt::Debug for Thunk {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Thunk").finish_non_exhaustive()
	}
}

impl Thunk {
	/// Creates a thunk from a factory closure.
	pub fn new<F, N>(render: F) -> Self
	where
		F: Fn() -> N + Send + Sync + 'static,
		N: IntoNode,
	{
		Self {
			render: Arc::new(move || render().into_node()),
		}
	}

	/// Invokes the factory.
	pub fn render(&self) -> Node {
		(self.render)()
	}
}

/// A unified representation of renderable input.
#[derive(Debug, Clone, Default)]
pub enum Node {
	/// An element.
	Element(VElement),
	/// A text node.
	Text(VText),
	/// A lazy node producer.
	Thunk(Thunk),
	/// A widget whose content arrives as a stream of snapshots.
	Widget(Arc<dyn LiveWidget>),
	/// Absent input. Renders as an empty string.
	#[default]
	Empty,
}

impl Node {
	/// Creates an element.
	pub fn element(tag_name: impl Into<String>) -> VElement {
		VElement::new(tag_name)
	}

	/// Creates a text node.
	pub fn text(text: impl Into<String>) -> Self {
		Self::Text(VText::new(text))
	}

	/// Creates a thunk node.
	pub fn thunk<F, N>(render: F) -> Self
	where
		F: Fn() -> N + Send + Sync + 'static,
		N: IntoNode,
	{
		Self::Thunk(Thunk::new(render))
	}

	/// Wraps a live widget.
	pub fn widget(widget: impl LiveWidget + 'static) -> Self {
		Self::Widget(Arc::new(widget))
	}

	/// Creates an empty node.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Returns the element when this node is one.
	pub fn as_element(&self) -> Option<&VElement> {
		match self {
			Self::Element(element) => Some(element),
			_ => None,
		}
	}
}

/// Conversion into a [`Node`].
pub trait IntoNode {
	/// Converts self into a node.
	fn into_node(self) -> Node;
}

impl IntoNode for Node {
	fn into_node(self) -> Node {
		self
	}
}

impl IntoNode for VElement {
	fn into_node(self) -> Node {
		Node::Element(self)
	}
}

impl IntoNode for VText {
	fn into_node(self) -> Node {
		Node::Text(self)
	}
}

impl IntoNode for Thunk {
	fn into_node(self) -> Node {
		Node::Thunk(self)
	}
}

impl IntoNode for Arc<dyn LiveWidget> {
	fn into_node(self) -> Node {
		Node::Widget(self)
	}
}

impl IntoNode for String {
	fn into_node(self) -> Node {
		Node::Text(VText::new(self))
	}
}

impl IntoNode for &String {
	fn into_node(self) -> Node {
		Node::Text(VText::new(self.clone()))
	}
}

impl IntoNode for &str {
	fn into_node(self) -> Node {
		Node::Text(VText::new(self))
	}
}

macro_rules! impl_number_node {
	($($ty:ty),*) => {
		$(
			impl IntoNode for $ty {
				fn into_node(self) -> Node {
					Node::Text(VText::new(self.to_string()))
				}
			}
		)*
	};
}

impl_number_node!(i32, i64, u32, u64, usize);

impl IntoNode for f64 {
	fn into_node(self) -> Node {
		Node::Text(VText::new(format_number(self)))
	}
}

impl<T: IntoNode> IntoNode for Option<T> {
	fn into_node(self) -> Node {
		match self {
			Some(v) => v.into_node(),
			None => Node::Empty,
		}
	}
}

impl IntoNode for () {
	fn into_node(self) -> Node {
		Node::Empty
	}
}
