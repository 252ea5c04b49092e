//! Plain geometry types shared by the widget trait and the event model.
//!
//! Coordinates are pixels. Event positions are widget-local (origin at the
//! target widget's top-left corner) and signed, so positions just outside a
//! widget are representable. Sizes are unsigned.

/// A position in widget-local pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
	/// Horizontal offset from the widget's left edge.
	pub x: i32,
	/// Vertical offset from the widget's top edge.
	pub y: i32,
}

impl Point {
	/// Point at the given offsets.
	pub const fn new(x: i32, y: i32) -> Self {
		Self { x, y }
	}
}

/// A width and height in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
	/// Width in pixels.
	pub width: u32,
	/// Height in pixels.
	pub height: u32,
}

impl Size {
	/// The zero size, reported by widgets with no size preference.
	pub const ZERO: Self = Self {
		width: 0,
		height: 0,
	};

	/// Size with the given dimensions.
	pub const fn new(width: u32, height: u32) -> Self {
		Self { width, height }
	}
}

/// A widget's rectangle: position within its parent plus on-screen size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
	/// Left edge, relative to the parent widget.
	pub x: i32,
	/// Top edge, relative to the parent widget.
	pub y: i32,
	/// Width in pixels.
	pub width: u32,
	/// Height in pixels.
	pub height: u32,
}

impl Rect {
	/// Rectangle from position and dimensions.
	pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	/// The rectangle's dimensions, ignoring its position.
	pub const fn size(&self) -> Size {
		Size::new(self.width, self.height)
	}
}
