//! Live widgets: nodes whose content arrives asynchronously.
//!
//! A [`LiveWidget`] exposes its content as a stream of [`Node`] snapshots,
//! each one the widget's complete current content. The renderer re-renders
//! every snapshot. A widget that emits once and completes is the common case;
//! a widget that never emits keeps every enclosing render pending.
//!
//! Two implementations are provided:
//!
//! - [`StreamWidget`] wraps a closure returning a fresh stream per
//!   subscription.
//! - [`WatchWidget`] is fed through a [`WidgetHandle`] backed by a
//!   `tokio::sync::watch` channel. Dropping the handle completes the
//!   sequence.

use futures::future;
use futures::stream::{BoxStream, Stream, StreamExt};
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::node::{IntoNode, Node};

/// A node whose content is produced asynchronously.
///
/// Each call to [`LiveWidget::content`] starts a new subscription; the
/// returned stream yields full content snapshots. Dropping the stream
/// unsubscribes.
pub trait LiveWidget: Send + Sync {
	/// Subscribes to the widget's content.
	fn content(&self) -> BoxStream<'static, Node>;
}

impl fmt::Debug for dyn LiveWidget {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("LiveWidget")
	}
}

/// A widget backed by a stream factory.
///
/// # Example
///
/// ```
/// use futures::stream;
/// use reactive_vdom_html::node::{IntoNode, Node, VElement};
/// use reactive_vdom_html::widget::StreamWidget;
///
/// let widget = StreamWidget::new(|| stream::iter([VElement::new("span").into_node()]));
/// let node = Node::widget(widget);
/// ```
pub struct StreamWidget<F> {
	factory: F,
}

impl<F, S> StreamWidget<F>
where
	F: Fn() -> S + Send + Sync,
	S: Stream<Item = Node> + Send + 'static,
{
	/// Creates a widget that calls `factory` once per subscription.
	pub fn new(factory: F) -> Self {
		Self { factory }
	}
}

impl<F, S> LiveWidget for StreamWidget<F>
where
	F: Fn() -> S + Send + Sync,
	S: Stream<Item = Node> + Send + 'static,
{
	fn content(&self) -> BoxStream<'static, Node> {
		(self.factory)().boxed()
	}
}

impl<F> fmt::Debug for StreamWidget<F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("StreamWidget").finish_non_exhaustive()
	}
}

/// Shorthand for a [`Node::Widget`] wrapping a [`StreamWidget`].
pub fn live<F, S>(factory: F) -> Node
where
	F: Fn() -> S + Send + Sync + 'static,
	S: Stream<Item = Node> + Send + 'static,
{
	Node::widget(StreamWidget::new(factory))
}

/// Creates a channel-fed widget and the handle that feeds it.
///
/// The widget yields nothing until the first [`WidgetHandle::set`]. Every
/// subscriber sees the latest snapshot, then subsequent ones; snapshots
/// published faster than a subscriber polls are coalesced.
pub fn watch_widget() -> (WidgetHandle, WatchWidget) {
	let (sender, receiver) = watch::channel(None);
	(WidgetHandle { sender }, WatchWidget { receiver })
}

/// Producer side of a [`WatchWidget`].
#[derive(Debug)]
pub struct WidgetHandle {
	sender: watch::Sender<Option<Node>>,
}

impl WidgetHandle {
	/// Publishes a new content snapshot.
	pub fn set(&self, content: impl IntoNode) {
		self.sender.send_replace(Some(content.into_node()));
	}

	/// Returns the number of live subscriptions, the widget itself included.
	pub fn subscriber_count(&self) -> usize {
		self.sender.receiver_count()
	}
}

/// Consumer side of a [`watch_widget`] channel.
#[derive(Debug, Clone)]
pub struct WatchWidget {
	receiver: watch::Receiver<Option<Node>>,
}

impl LiveWidget for WatchWidget {
	fn content(&self) -> BoxStream<'static, Node> {
		WatchStream::new(self.receiver.clone())
			.filter_map(future::ready)
			.boxed()
	}
}

impl IntoNode for WatchWidget {
	fn into_node(self) -> Node {
		Node::Widget(Arc::new(self))
	}
}

impl<F, S> IntoNode for StreamWidget<F>
where
	F: Fn() -> S + Send + Sync + 'static,
	S: Stream<Item = Node> + Send + 'static,
{
	fn into_node(self) -> Node {
		Node::Widget(Arc::new(self))
	}
}
