//! The widget trait implemented by host-toolkit adapters.
//!
//! Everything this library does flows through [`Widget`]: the finders walk
//! [`Widget::children`], the interaction helpers deliver events through
//! [`Widget::handle_mouse`], and the snapshot engine rasterizes through
//! [`Widget::paint`]. An adapter implements the trait for its toolkit's
//! widget handles and leaves the defaults in place for everything the
//! toolkit has no concept of.
//!
//! The library never creates or destroys widgets. It reads the tree the
//! toolkit owns and sends synthetic events into it, nothing more.

use crate::event::MouseEvent;
use crate::geometry::{Rect, Size};
use image::RgbaImage;
use std::any::Any;
use thiserror::Error;

/// A widget could not be rasterized.
///
/// Returned by [`Widget::paint`] implementations when drawing is impossible,
/// for example because the widget's backing store is gone or a required
/// resource failed to load.
#[derive(Debug, Error)]
#[error("failed to render widget: {reason}")]
pub struct RenderError {
	/// Adapter-supplied description of what went wrong.
	pub reason: String,
}

impl RenderError {
	/// Render error with the given reason.
	pub fn new(reason: impl Into<String>) -> Self {
		Self {
			reason: reason.into(),
		}
	}
}

/// A node in the host toolkit's retained widget tree.
///
/// Object safe; the library works with `&dyn Widget` throughout. The `Any`
/// supertrait gives the finders exact-type identity via downcasting, so
/// adapters need no extra boilerplate to make their types searchable.
///
/// Only [`Widget::bounds`] is required. The other methods default to
/// "nothing there": no name, no text, no children, events ignored, paint
/// draws nothing.
pub trait Widget: Any {
	/// Concrete type name, used in error messages and tree dumps.
	///
	/// The default is the fully qualified Rust type name; display sites
	/// trim it to the final path segment. Override to report a
	/// toolkit-level label instead.
	fn type_label(&self) -> &'static str {
		std::any::type_name_of_val(self)
	}

	/// Identifier assigned by the application, if any.
	///
	/// This is what [`find_child`](crate::find_child) matches on.
	fn name(&self) -> Option<&str> {
		None
	}

	/// Displayed text, for widgets that have a text concept.
	fn text(&self) -> Option<&str> {
		None
	}

	/// Current bounds: position within the parent plus on-screen size.
	///
	/// A widget that has never been laid out may report a zero size; the
	/// snapshot engine falls back to [`Widget::preferred_size`] and then to
	/// a fixed default when sizing its canvas.
	fn bounds(&self) -> Rect;

	/// Size the widget would choose for itself.
	fn preferred_size(&self) -> Size {
		Size::ZERO
	}

	/// Whether the widget is currently shown.
	fn visible(&self) -> bool {
		true
	}

	/// Direct children, in containment order.
	///
	/// Containment order is the order the finders traverse in, so it
	/// decides which match is "first".
	fn children(&self) -> Vec<&dyn Widget> {
		Vec::new()
	}

	/// Deliver a synthetic mouse event.
	///
	/// Adapters route this into the same dispatch path the toolkit uses for
	/// real input, so listeners cannot tell a simulated click from a real
	/// one. The event's position is in this widget's own coordinates.
	fn handle_mouse(&self, event: &MouseEvent) {
		let _ = event;
	}

	/// Paint the widget and its subtree onto `canvas`.
	///
	/// The canvas covers the widget's own coordinate space: pixel (0, 0) is
	/// the widget's top-left corner. Implementations must paint
	/// deterministically for snapshot comparisons to be meaningful.
	fn paint(&self, canvas: &mut RgbaImage) -> Result<(), RenderError> {
		let _ = canvas;
		Ok(())
	}
}
