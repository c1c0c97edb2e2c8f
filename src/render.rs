//! Asynchronous renderer for virtual-node trees.
//!
//! ## Overview
//!
//! [`Renderer`] walks a [`Node`] tree and produces HTML. Element and text
//! nodes resolve immediately; thunks are invoked; live widgets are
//! subscribed to and their snapshots re-rendered. Two entry points share
//! that machinery:
//!
//! - [`Renderer::render`] settles with the first complete document, i.e.
//!   once every live widget in the tree has produced a snapshot.
//! - [`Renderer::updates`] yields a complete document every time a live
//!   widget produces a new snapshot.
//!
//! A widget that never emits keeps both pending. Bound the wait with
//! [`RenderOptions::with_timeout`] and [`Renderer::try_render`].
//!
//! ## Example
//!
//! ```
//! use reactive_vdom_html::node::{h, IntoNode};
//! use reactive_vdom_html::render::Renderer;
//!
//! # futures::executor::block_on(async {
//! let node = h("p.greeting").child("Hello & welcome").into_node();
//! let html = Renderer::new().render(&node).await;
//! assert_eq!(html, "<p class=\"greeting\">Hello &amp; welcome</p>");
//! # });
//! ```

mod content;
pub mod tag;

use futures::future::{self, BoxFuture, FutureExt};
use futures::stream::{self, BoxStream, Stream, StreamExt};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use crate::attributes::{AttributeRenderer, HtmlAttributeRenderer};
use crate::error::{Error, Result};
use crate::escape::encode;
use crate::node::{Node, VElement, VText};
use crate::void::{HtmlVoidElements, VoidElements};
use crate::widget::LiveWidget;

pub use tag::{close_tag, open_tag};

/// A deferred markup string.
pub type RenderResult = BoxFuture<'static, String>;

/// A sequence of complete markup strings, one per update.
pub type RenderStream = BoxStream<'static, String>;

/// Options for rendering.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
	/// Upper bound applied by [`Renderer::try_render`].
	pub timeout: Option<Duration>,
}

impl RenderOptions {
	/// Creates default options: no timeout.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the deadline used by [`Renderer::try_render`].
	///
	/// # Example
	///
	/// ```
	/// use reactive_vdom_html::render::RenderOptions;
	/// use std::time::Duration;
	///
	/// let options = RenderOptions::new().with_timeout(Duration::from_secs(2));
	/// assert_eq!(options.timeout, Some(Duration::from_secs(2)));
	/// ```
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}
}

/// The HTML renderer.
///
/// Cheap to clone; the attribute renderer and void-element table are shared.
#[derive(Clone)]
pub struct Renderer {
	options: RenderOptions,
	attributes: Arc<dyn AttributeRenderer>,
	void_elements: Arc<dyn VoidElements>,
}

impl std::fmt::Debug for Renderer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Renderer")
			.field("options", &self.options)
			.finish_non_exhaustive()
	}
}

impl Default for Renderer {
	fn default() -> Self {
		Self::new()
	}
}

impl Renderer {
	/// Creates a renderer with default options and the HTML collaborators.
	pub fn new() -> Self {
		Self::with_options(RenderOptions::default())
	}

	/// Creates a renderer with custom options.
	pub fn with_options(options: RenderOptions) -> Self {
		Self {
			options,
			attributes: Arc::new(HtmlAttributeRenderer),
			void_elements: Arc::new(HtmlVoidElements),
		}
	}

	/// Replaces the attribute renderer.
	pub fn with_attribute_renderer(mut self, attributes: impl AttributeRenderer + 'static) -> Self {
		self.attributes = Arc::new(attributes);
		self
	}

	/// Replaces the void-element table.
	pub fn with_void_elements(mut self, void_elements: impl VoidElements + 'static) -> Self {
		self.void_elements = Arc::new(void_elements);
		self
	}

	/// Returns the options.
	pub fn options(&self) -> &RenderOptions {
		&self.options
	}

	/// Renders a node to its first complete document.
	pub fn render(&self, node: &Node) -> RenderResult {
		self.render_in(node, None)
	}

	/// Renders a node in the context of `parent`.
	///
	/// The parent only matters for text nodes: text whose parent is a
	/// `script` element is emitted unescaped.
	pub fn render_in(&self, node: &Node, parent: Option<&VElement>) -> RenderResult {
		let mut updates = self.updates_in(node, parent);
		async move { updates.next().await.unwrap_or_default() }.boxed()
	}

	/// Renders a node, failing with [`Error::Timeout`] when the configured
	/// timeout elapses first. Without a timeout this never fails.
	pub async fn try_render(&self, node: &Node) -> Result<String> {
		let rendering = self.render(node);
		match self.options.timeout {
			Some(limit) => tokio::time::timeout(limit, rendering).await.map_err(|_| {
				tracing::warn!(timeout = ?limit, "render did not settle before the deadline");
				Error::Timeout(limit)
			}),
			None => Ok(rendering.await),
		}
	}

	/// Renders a node to a stream of complete documents.
	pub fn updates(&self, node: &Node) -> RenderStream {
		self.updates_in(node, None)
	}

	/// Renders a node in the context of `parent` to a stream of complete
	/// documents.
	///
	/// Nodes without live widgets yield exactly one document. A live widget
	/// yields one document per snapshot; an enclosing element re-emits
	/// whenever one of its children does, once all of them have emitted.
	pub fn updates_in(&self, node: &Node, parent: Option<&VElement>) -> RenderStream {
		match node {
			Node::Empty => single(String::new()),
			Node::Thunk(thunk) => {
				tracing::trace!("invoking thunk");
				let produced = thunk.render();
				self.updates_in(&produced, parent)
			}
			Node::Widget(widget) => self.widget_updates(widget.as_ref()),
			Node::Element(element) => {
				let open = open_tag(element, self.attributes.as_ref());
				let close = close_tag(element, self.void_elements.as_ref());
				self.content(element)
					.map(move |content| format!("{open}{content}{close}"))
					.boxed()
			}
			Node::Text(text) => single(render_text(text, parent)),
		}
	}

	fn widget_updates(&self, widget: &dyn LiveWidget) -> RenderStream {
		let rendered = LatestSnapshot {
			snapshots: Some(widget.content()),
			current: None,
			renderer: self.clone(),
		};
		or_empty(rendered.boxed())
	}
}

/// Renders a widget's snapshots, following only the most recent one.
///
/// Output already available from the current snapshot is yielded first. When
/// a newer snapshot arrives, the previous snapshot's render stream is dropped,
/// which unsubscribes every live widget it contained. Snapshots render without
/// parent context.
struct LatestSnapshot {
	snapshots: Option<BoxStream<'static, Node>>,
	current: Option<RenderStream>,
	renderer: Renderer,
}

impl Stream for LatestSnapshot {
	type Item = String;

	fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<String>> {
		let this = &mut *self;
		loop {
			if let Some(current) = this.current.as_mut() {
				match current.poll_next_unpin(cx) {
					Poll::Ready(Some(html)) => return Poll::Ready(Some(html)),
					Poll::Ready(None) => this.current = None,
					Poll::Pending => {}
				}
			}

			let Some(snapshots) = this.snapshots.as_mut() else {
				return finished_unless(this.current.is_some());
			};
			match snapshots.poll_next_unpin(cx) {
				Poll::Ready(Some(snapshot)) => {
					tracing::trace!("live widget produced a snapshot");
					this.current = Some(this.renderer.updates_in(&snapshot, None));
				}
				Poll::Ready(None) => {
					this.snapshots = None;
					return finished_unless(this.current.is_some());
				}
				Poll::Pending => return Poll::Pending,
			}
		}
	}
}

fn finished_unless(running: bool) -> Poll<Option<String>> {
	if running {
		Poll::Pending
	} else {
		Poll::Ready(None)
	}
}

/// Renders a node with a default [`Renderer`].
pub fn render(node: &Node) -> RenderResult {
	Renderer::new().render(node)
}

/// Renders a node to a stream of documents with a default [`Renderer`].
pub fn render_updates(node: &Node) -> RenderStream {
	Renderer::new().updates(node)
}

fn render_text(text: &VText, parent: Option<&VElement>) -> String {
	match parent {
		Some(parent) if parent.tag_name().to_lowercase() == "script" => text.text().to_string(),
		_ => encode(text.text()).into_owned(),
	}
}

pub(crate) fn single(html: String) -> RenderStream {
	stream::once(future::ready(html)).boxed()
}

/// Yields an empty string when `updates` completes without yielding.
fn or_empty(updates: RenderStream) -> RenderStream {
	updates
		.map(Some)
		.chain(stream::once(future::ready(None)))
		.scan(false, |emitted, item| {
			let out = match item {
				Some(html) => {
					*emitted = true;
					Some(html)
				}
				None if !*emitted => Some(String::new()),
				None => None,
			};
			future::ready(Some(out))
		})
		.filter_map(future::ready)
		.boxed()
}
