//! Simulated user interactions.
//!
//! Each helper builds a synthetic [`MouseEvent`] and delivers it through
//! [`Widget::handle_mouse`], the same seam the toolkit dispatches real
//! input through, so listeners react exactly as they would to a user. All
//! helpers are synchronous and fire-and-forget.
//!
//! Nothing here checks that the widget is attached to a visible window;
//! events are delivered regardless, and what an unrealized widget does
//! with them is the adapter's business.

use crate::event::{MouseEvent, MouseEventKind, center_of};
use crate::find::{FindError, find_child_by_text};
use crate::geometry::Point;
use crate::widget::Widget;

/// Simulate a single left click at the widget's center.
///
/// Delivers a `Clicked` then a `Released` event, the pair toolkits hand to
/// listeners for a completed click.
pub fn do_click(widget: &dyn Widget) {
	do_click_at(widget, center_of(widget.bounds()));
}

/// Simulate a single left click at an explicit widget-local position.
pub fn do_click_at(widget: &dyn Widget, position: Point) {
	widget.handle_mouse(&MouseEvent::click(MouseEventKind::Clicked, position, 1));
	widget.handle_mouse(&MouseEvent::click(MouseEventKind::Released, position, 1));
}

/// Simulate a double click at the widget's center.
///
/// A double click is one `Clicked`/`Released` pair with a click count of
/// 2. It is distinguishable from two independent single clicks, which
/// deliver two pairs with a click count of 1.
pub fn do_double_click(widget: &dyn Widget) {
	let position = center_of(widget.bounds());
	widget.handle_mouse(&MouseEvent::click(MouseEventKind::Clicked, position, 2));
	widget.handle_mouse(&MouseEvent::click(MouseEventKind::Released, position, 2));
}

/// Simulate the pointer entering the widget.
pub fn do_hover(widget: &dyn Widget) {
	widget.handle_mouse(&MouseEvent::motion(
		MouseEventKind::Entered,
		center_of(widget.bounds()),
	));
}

/// Simulate the pointer leaving the widget.
pub fn do_hover_away(widget: &dyn Widget) {
	widget.handle_mouse(&MouseEvent::motion(
		MouseEventKind::Exited,
		center_of(widget.bounds()),
	));
}

/// Simulate the pointer moving within the widget.
pub fn do_mouse_move(widget: &dyn Widget) {
	widget.handle_mouse(&MouseEvent::motion(
		MouseEventKind::Moved,
		center_of(widget.bounds()),
	));
}

/// Find the descendant of type `T` with the given text and click it.
///
/// Convenience for the common "press the button labelled X" step. The
/// lookup has the same single-match contract as
/// [`find_child_by_text`](crate::find_child_by_text).
pub fn click_child<T: Widget>(root: &dyn Widget, text: &str) -> Result<(), FindError> {
	let child = find_child_by_text::<T>(root, text)?;
	do_click(child);
	Ok(())
}
