//! A miniature retained-mode toolkit used to exercise the library from the
//! outside. Panels own boxed children, buttons record the events they
//! receive, and labels paint a deterministic block pattern so renderings
//! are stable across runs.

#![allow(dead_code)]

use image::{Rgba, RgbaImage};
use std::cell::{Cell, RefCell};
use widget_testkit::geometry::{Rect, Size};
use widget_testkit::{MouseEvent, MouseEventKind, RenderError, Widget};

/// Initialise logging once per test binary; safe to call repeatedly.
pub fn init_logging() {
	let _ = env_logger::builder().is_test(true).try_init();
}

/// Plain container widget.
pub struct Panel {
	pub name: Option<String>,
	pub bounds: Rect,
	pub children: Vec<Box<dyn Widget>>,
}

impl Panel {
	pub fn new() -> Self {
		Self {
			name: None,
			bounds: Rect::new(0, 0, 320, 240),
			children: Vec::new(),
		}
	}

	pub fn push(&mut self, child: impl Widget) {
		self.children.push(Box::new(child));
	}
}

impl Widget for Panel {
	fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	fn bounds(&self) -> Rect {
		self.bounds
	}

	fn children(&self) -> Vec<&dyn Widget> {
		self.children.iter().map(|child| child.as_ref()).collect()
	}
}

/// Push button that records every event delivered to it.
#[derive(Debug)]
pub struct Button {
	pub text: String,
	pub name: Option<String>,
	pub bounds: Rect,
	events: RefCell<Vec<MouseEvent>>,
}

impl Button {
	pub fn new(text: &str) -> Self {
		Self {
			text: text.to_string(),
			name: None,
			bounds: Rect::new(0, 0, 80, 24),
			events: RefCell::new(Vec::new()),
		}
	}

	pub fn named(text: &str, name: &str) -> Self {
		let mut button = Self::new(text);
		button.name = Some(name.to_string());
		button
	}

	/// Events received so far, in delivery order.
	pub fn events(&self) -> Vec<MouseEvent> {
		self.events.borrow().clone()
	}

	/// Number of received events of the given kind.
	pub fn count_of(&self, kind: MouseEventKind) -> usize {
		self.events
			.borrow()
			.iter()
			.filter(|event| event.kind == kind)
			.count()
	}
}

impl Widget for Button {
	fn text(&self) -> Option<&str> {
		Some(&self.text)
	}

	fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	fn bounds(&self) -> Rect {
		self.bounds
	}

	fn handle_mouse(&self, event: &MouseEvent) {
		self.events.borrow_mut().push(*event);
	}
}

/// Two-state toggle that flips on every click.
#[derive(Debug)]
pub struct Checkbox {
	pub text: String,
	pub name: Option<String>,
	pub bounds: Rect,
	pub checked: Cell<bool>,
}

impl Checkbox {
	pub fn new(text: &str) -> Self {
		Self {
			text: text.to_string(),
			name: None,
			bounds: Rect::new(0, 0, 100, 24),
			checked: Cell::new(false),
		}
	}
}

impl Widget for Checkbox {
	fn text(&self) -> Option<&str> {
		Some(&self.text)
	}

	fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	fn bounds(&self) -> Rect {
		self.bounds
	}

	fn handle_mouse(&self, event: &MouseEvent) {
		if event.kind == MouseEventKind::Clicked {
			self.checked.set(!self.checked.get());
		}
	}
}

/// Text label whose rendering is a pure function of its text and size.
pub struct Label {
	pub text: String,
	pub name: Option<String>,
	pub bounds: Rect,
	pub preferred: Size,
}

impl Label {
	pub fn new(text: &str) -> Self {
		Self {
			text: text.to_string(),
			name: None,
			bounds: Rect::default(),
			preferred: Size::ZERO,
		}
	}

	pub fn sized(text: &str, width: u32, height: u32) -> Self {
		let mut label = Self::new(text);
		label.bounds = Rect::new(0, 0, width, height);
		label
	}

	pub fn set_text(&mut self, text: &str) {
		self.text = text.to_string();
	}
}

impl Widget for Label {
	fn text(&self) -> Option<&str> {
		Some(&self.text)
	}

	fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	fn bounds(&self) -> Rect {
		self.bounds
	}

	fn preferred_size(&self) -> Size {
		self.preferred
	}

	fn paint(&self, canvas: &mut RgbaImage) -> Result<(), RenderError> {
		let height = canvas.height();
		fill(canvas, Rgba([245, 245, 245, 255]));
		// One tinted column per character, shade keyed off the character,
		// so different text is guaranteed to paint differently.
		for (idx, ch) in self.text.chars().enumerate() {
			let shade = 40 + ((ch as u32 * 7) % 160) as u8;
			fill_rect(
				canvas,
				idx as u32 * 8 + 2,
				4,
				6,
				height.saturating_sub(8),
				Rgba([shade, 80, 160, 255]),
			);
		}
		Ok(())
	}
}

/// Widget whose paint always fails.
pub struct BrokenCanvas;

impl Widget for BrokenCanvas {
	fn bounds(&self) -> Rect {
		Rect::new(0, 0, 60, 60)
	}

	fn paint(&self, _canvas: &mut RgbaImage) -> Result<(), RenderError> {
		Err(RenderError::new("backing store detached"))
	}
}

/// Top-level application window.
pub struct AppWindow {
	pub title: String,
	pub content: Panel,
}

impl AppWindow {
	pub fn new(title: &str) -> Self {
		Self {
			title: title.to_string(),
			content: Panel::new(),
		}
	}
}

impl Widget for AppWindow {
	fn text(&self) -> Option<&str> {
		Some(&self.title)
	}

	fn bounds(&self) -> Rect {
		Rect::new(0, 0, 640, 480)
	}

	fn children(&self) -> Vec<&dyn Widget> {
		vec![&self.content]
	}
}

/// Modal dialog window.
pub struct DialogWindow {
	pub title: String,
	pub content: Panel,
}

impl DialogWindow {
	pub fn new(title: &str) -> Self {
		Self {
			title: title.to_string(),
			content: Panel::new(),
		}
	}
}

impl std::fmt::Debug for DialogWindow {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DialogWindow")
			.field("title", &self.title)
			.finish_non_exhaustive()
	}
}

impl Widget for DialogWindow {
	fn text(&self) -> Option<&str> {
		Some(&self.title)
	}

	fn bounds(&self) -> Rect {
		Rect::new(0, 0, 400, 200)
	}

	fn children(&self) -> Vec<&dyn Widget> {
		vec![&self.content]
	}
}

fn fill(canvas: &mut RgbaImage, color: Rgba<u8>) {
	for pixel in canvas.pixels_mut() {
		*pixel = color;
	}
}

fn fill_rect(canvas: &mut RgbaImage, x0: u32, y0: u32, width: u32, height: u32, color: Rgba<u8>) {
	let (canvas_width, canvas_height) = canvas.dimensions();
	for y in y0..(y0 + height).min(canvas_height) {
		for x in x0..(x0 + width).min(canvas_width) {
			canvas.put_pixel(x, y, color);
		}
	}
}
