//! Element content resolution.

use futures::future;
use futures::stream::{self, StreamExt};

use super::{RenderStream, Renderer, single};
use crate::node::VElement;

impl Renderer {
	/// Resolves an element's content.
	///
	/// A non-null `innerHTML` property is emitted literally and the children
	/// are ignored. Otherwise every child is rendered with `element` as its
	/// parent and the results are joined in child order, however the
	/// children settle. Each time a live child emits again after all
	/// children have produced output, the joined content is emitted again.
	pub fn content(&self, element: &VElement) -> RenderStream {
		if let Some(html) = element.literal_inner_html() {
			return single(html.into_owned());
		}

		let children = element.child_nodes();
		if children.is_empty() {
			return single(String::new());
		}

		join_in_order(
			children
				.iter()
				.map(|child| self.updates_in(child, Some(element)))
				.collect(),
		)
	}
}

/// Latest output per child plus the number of children still silent.
struct Slots {
	latest: Vec<Option<String>>,
	pending: usize,
}

impl Slots {
	fn new(len: usize) -> Self {
		Self {
			latest: vec![None; len],
			pending: len,
		}
	}

	fn update(&mut self, index: usize, html: String) -> Option<String> {
		if self.latest[index].replace(html).is_none() {
			self.pending -= 1;
		}
		if self.pending > 0 {
			return None;
		}
		Some(self.latest.iter().flatten().map(String::as_str).collect())
	}
}

/// Polls all child streams concurrently and emits their concatenation in
/// index order once every child has produced a value.
fn join_in_order(children: Vec<RenderStream>) -> RenderStream {
	let slots = Slots::new(children.len());
	let indexed = children
		.into_iter()
		.enumerate()
		.map(|(index, child)| child.map(move |html| (index, html)).boxed());

	stream::select_all(indexed)
		.scan(slots, |slots, (index, html)| {
			future::ready(Some(slots.update(index, html)))
		})
		.filter_map(future::ready)
		.boxed()
}
