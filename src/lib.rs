//! Test support for retained-mode widget toolkits.
//!
//! This library backs integration tests for desktop GUI code with three
//! groups of helpers:
//!
//! - **Tree search**: find descendant widgets by concrete type plus name,
//!   text, or predicate, and top-level windows by type
//!   ([`find_all`], [`find_child`], [`find_window`]).
//! - **Synthetic interaction**: deliver click, double-click, hover, and
//!   motion events through the toolkit's own dispatch seam
//!   ([`do_click`], [`do_hover`], [`click_child`]).
//! - **Snapshot testing**: render a widget to a bitmap and compare it
//!   against a PNG reference stored in the repository, with an update mode
//!   for recording references ([`Snapshotter`], [`verify_snapshot`]).
//!
//! The host toolkit plugs in through the [`Widget`] trait: an adapter
//! implements it for the toolkit's widget handles and everything above
//! works unchanged. The library never creates or destroys widgets; it
//! reads the tree the toolkit owns and sends events into it.
//!
//! # Example
//!
//! ```
//! use widget_testkit::geometry::Rect;
//! use widget_testkit::{Widget, do_click, find_child_by_text};
//!
//! struct Button {
//! 	label: String,
//! }
//!
//! impl Widget for Button {
//! 	fn text(&self) -> Option<&str> {
//! 		Some(&self.label)
//! 	}
//!
//! 	fn bounds(&self) -> Rect {
//! 		Rect::new(0, 0, 80, 24)
//! 	}
//! }
//!
//! struct Panel {
//! 	children: Vec<Box<dyn Widget>>,
//! }
//!
//! impl Widget for Panel {
//! 	fn bounds(&self) -> Rect {
//! 		Rect::new(0, 0, 320, 240)
//! 	}
//!
//! 	fn children(&self) -> Vec<&dyn Widget> {
//! 		self.children.iter().map(|child| child.as_ref()).collect()
//! 	}
//! }
//!
//! let panel = Panel {
//! 	children: vec![Box::new(Button { label: "Save".into() })],
//! };
//!
//! let save = find_child_by_text::<Button>(&panel, "Save").unwrap();
//! do_click(save);
//! ```
//!
//! # Snapshot workflow
//!
//! References live at `<root>/__snapshots__/<suite>/<name>.png`, rooted at
//! the consuming crate's `tests/` directory by default. A missing
//! reference fails the test with instructions; run with
//! `UPDATE_SNAPSHOTS=1` to record references, then commit them like any
//! other fixture.
//!
//! ```ignore
//! use widget_testkit::snapshotter;
//!
//! #[test]
//! fn settings_panel_defaults() {
//! 	let panel = build_settings_panel();
//! 	snapshotter!().assert_matches(&panel, "defaults");
//! }
//! ```

pub mod event;
pub mod find;
pub mod geometry;
pub mod interact;
pub mod snapshot;
pub mod utils;
pub mod widget;

pub use event::{MouseButton, MouseEvent, MouseEventKind, center_of};
pub use find::{FindError, find_all, find_child, find_child_by_text, find_child_with, find_window};
pub use geometry::{Point, Rect, Size};
pub use interact::{
	click_child, do_click, do_click_at, do_double_click, do_hover, do_hover_away, do_mouse_move,
};
pub use snapshot::{
	SnapshotConfig, SnapshotError, SnapshotOutcome, Snapshotter, images_match, render_widget,
	suite_from_module_path, verify_snapshot,
};
pub use utils::wait::wait_until;
pub use widget::{RenderError, Widget};

#[cfg(test)]
use env_logger as _;
#[cfg(test)]
use tempfile as _;

/// Build a [`Snapshotter`] whose suite identity is the calling module.
///
/// The suite comes from `module_path!()` at the call site with `::`
/// rewritten to `.`, so references land in a directory named after the
/// test module. With no argument the configuration is read from the
/// environment; pass a [`SnapshotConfig`] to override it.
///
/// ```ignore
/// let shots = snapshotter!();
/// let pinned = snapshotter!(SnapshotConfig::new("tests/fixtures"));
/// ```
#[macro_export]
macro_rules! snapshotter {
	() => {
		$crate::Snapshotter::with_config(
			$crate::suite_from_module_path(module_path!()),
			$crate::SnapshotConfig::from_env(),
		)
	};
	($config:expr) => {
		$crate::Snapshotter::with_config($crate::suite_from_module_path(module_path!()), $config)
	};
}
