//! # reactive-vdom-html
//!
//! Asynchronous HTML rendering for virtual-DOM trees.
//!
//! A tree is built from [`Node`]s: elements with properties and children,
//! text, thunks that produce a subtree on demand, and live widgets whose
//! content arrives over time as a stream of snapshots. Rendering produces
//! a single HTML string once every live widget has produced content, or a
//! stream of complete documents that re-emits as widgets update.
//!
//! ## Quick start
//!
//! ```
//! use reactive_vdom_html::{h, render, IntoNode};
//!
//! # futures::executor::block_on(async {
//! let page = h("ul.items")
//! 	.child(h("li").child("one"))
//! 	.child(h("li").child("two & three"))
//! 	.into_node();
//!
//! assert_eq!(
//! 	render(&page).await,
//! 	"<ul class=\"items\"><li>one</li><li>two &amp; three</li></ul>"
//! );
//! # });
//! ```
//!
//! ## Live widgets
//!
//! ```
//! use futures::StreamExt;
//! use reactive_vdom_html::{h, render_updates, watch_widget, IntoNode};
//!
//! # futures::executor::block_on(async {
//! let (handle, widget) = watch_widget();
//! let page = h("div").child(widget).into_node();
//! let mut updates = render_updates(&page);
//!
//! handle.set("loading");
//! assert_eq!(updates.next().await.as_deref(), Some("<div>loading</div>"));
//! # });
//! ```
//!
//! ## Modules
//!
//! - [`node`]: the virtual-node model and the `h`/`svg` builders
//! - [`render`]: the renderer, its options and tag assembly
//! - [`attributes`]: property-to-attribute mapping
//! - [`widget`]: live widget implementations
//! - [`escape`], [`style`], [`void`]: text encoding, inline styles and void elements

pub mod attributes;
pub mod error;
pub mod escape;
pub mod node;
pub mod render;
pub mod style;
pub mod void;
pub mod widget;

pub use attributes::{AttributeRenderer, HtmlAttributeRenderer};
pub use error::{Error, Result};
pub use node::{
	IntoNode, Node, Properties, PropertyValue, RenderHook, Thunk, VElement, VText, h, svg,
};
pub use render::{RenderOptions, RenderResult, RenderStream, Renderer, render, render_updates};
pub use void::{HtmlVoidElements, VoidElements};
pub use widget::{LiveWidget, StreamWidget, WatchWidget, WidgetHandle, live, watch_widget};
