//! Synthetic mouse events for interaction simulation.
//!
//! The interaction helpers in [`crate::interact`] build these events and
//! deliver them through [`Widget::handle_mouse`](crate::Widget::handle_mouse).
//! Positions are widget-local: (0, 0) is the top-left corner of the widget
//! receiving the event, regardless of where that widget sits in its parent.
//!
//! A click is a `Clicked` event followed by a `Released` event, the pair
//! convention retained-mode toolkits use at the listener level. A double
//! click is one such pair with [`MouseEvent::clicks`] set to 2, not two
//! separate single clicks.

use crate::geometry::{Point, Rect};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
	/// Left (primary) mouse button.
	Left,
	/// Middle mouse button.
	Middle,
	/// Right (secondary) mouse button.
	Right,
}

/// The kind of mouse event being delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
	/// A button went down and up over the widget.
	Clicked,
	/// A button was released over the widget.
	Released,
	/// The pointer entered the widget's bounds.
	Entered,
	/// The pointer left the widget's bounds.
	Exited,
	/// The pointer moved within the widget's bounds.
	Moved,
}

/// A synthetic mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
	/// What happened.
	pub kind: MouseEventKind,
	/// Position in the target widget's own coordinates.
	pub position: Point,
	/// Button involved, `None` for pure motion events.
	pub button: Option<MouseButton>,
	/// Consecutive click count; 0 for events that are not part of a click.
	pub clicks: u8,
}

impl MouseEvent {
	/// Left-button click-pair event (`Clicked` or `Released`) at `position`.
	pub fn click(kind: MouseEventKind, position: Point, clicks: u8) -> Self {
		Self {
			kind,
			position,
			button: Some(MouseButton::Left),
			clicks,
		}
	}

	/// Buttonless motion event (`Entered`, `Exited`, or `Moved`) at `position`.
	pub fn motion(kind: MouseEventKind, position: Point) -> Self {
		Self {
			kind,
			position,
			button: None,
			clicks: 0,
		}
	}
}

/// Center of a widget's bounds, in the widget's own coordinates.
///
/// Only the dimensions matter; the rectangle's position describes where the
/// widget sits in its parent and does not shift the local center.
pub fn center_of(bounds: Rect) -> Point {
	Point::new((bounds.width / 2) as i32, (bounds.height / 2) as i32)
}
