//! Searching widget trees and window registries.
//!
//! The child finders walk a widget's subtree depth-first in containment
//! order and select descendants by concrete type plus a filter (name, text,
//! or caller predicate). The root itself is never a candidate; searches
//! start below it. Nothing is cached, so every call sees the tree as it is
//! at that moment.
//!
//! Lookups that expect a single widget treat ambiguity as an error rather
//! than silently taking the first match, and their errors embed a dump of
//! the searched tree so the failure is diagnosable from the test output
//! alone.

use crate::utils::tree::{format_widget_tree, short_type_name};
use crate::widget::Widget;
use std::any::Any;
use thiserror::Error;

/// Errors from tree and window searches.
#[derive(Debug, Error)]
pub enum FindError {
	/// No descendant matched the search criteria.
	#[error("found no {type_label} matching {criteria}\n\nWidget tree:\n\n{tree}")]
	NotFound {
		/// Short name of the searched-for widget type.
		type_label: String,
		/// Description of the filter that was applied.
		criteria: String,
		/// Dump of the searched tree at the time of the failure.
		tree: String,
	},

	/// More than one descendant matched a search that expects at most one.
	#[error(
		"found {count} {type_label}s matching {criteria}, expected exactly one\n\nWidget tree:\n\n{tree}"
	)]
	Ambiguous {
		/// How many descendants matched.
		count: usize,
		/// Short name of the searched-for widget type.
		type_label: String,
		/// Description of the filter that was applied.
		criteria: String,
		/// Dump of the searched tree at the time of the failure.
		tree: String,
	},

	/// No open window matched the search.
	#[error("no open window of type {type_label} matched")]
	WindowNotFound {
		/// Short name of the searched-for window type.
		type_label: String,
	},
}

/// Collect every descendant of `root` with concrete type `T`, depth-first
/// in pre-order. `root` itself is excluded.
///
/// Matching is by exact runtime type, not by any subtype relation; search
/// for a base behavior across types with [`find_child_with`] per type, or
/// model the commonality in the adapter. Repeated calls without tree
/// mutation return identical results.
pub fn find_all<'a, T: Widget>(root: &'a dyn Widget) -> Vec<&'a T> {
	let mut found = Vec::new();
	collect_descendants(root, &mut found);
	found
}

fn collect_descendants<'a, T: Widget>(widget: &'a dyn Widget, found: &mut Vec<&'a T>) {
	for child in widget.children() {
		if let Some(typed) = downcast_widget::<T>(child) {
			found.push(typed);
		}
		collect_descendants(child, found);
	}
}

fn downcast_widget<'a, T: Widget>(widget: &'a dyn Widget) -> Option<&'a T> {
	let any: &dyn Any = widget;
	any.downcast_ref::<T>()
}

/// Find the descendant of type `T` whose [`Widget::name`] equals `name`.
///
/// Exactly one descendant must match: zero produce [`FindError::NotFound`]
/// and two or more produce [`FindError::Ambiguous`]. Ambiguity is never
/// resolved by picking the first match, because duplicate names in a tree
/// under test are nearly always themselves the bug worth surfacing.
pub fn find_child<'a, T: Widget>(root: &'a dyn Widget, name: &str) -> Result<&'a T, FindError> {
	unique_match(root, &format!("name [{name:?}]"), |widget: &T| {
		widget.name() == Some(name)
	})
}

/// Find the descendant of type `T` whose [`Widget::text`] equals `text`.
///
/// Same single-match contract as [`find_child`].
pub fn find_child_by_text<'a, T: Widget>(
	root: &'a dyn Widget,
	text: &str,
) -> Result<&'a T, FindError> {
	unique_match(root, &format!("text [{text:?}]"), |widget: &T| {
		widget.text() == Some(text)
	})
}

/// Find the descendant of type `T` satisfying `predicate`.
///
/// Same single-match contract as [`find_child`]. Passing `|_| true`
/// expresses "the only `T` in this tree".
pub fn find_child_with<'a, T: Widget>(
	root: &'a dyn Widget,
	predicate: impl Fn(&T) -> bool,
) -> Result<&'a T, FindError> {
	unique_match(root, "a caller predicate", predicate)
}

fn unique_match<'a, T: Widget>(
	root: &'a dyn Widget,
	criteria: &str,
	predicate: impl Fn(&T) -> bool,
) -> Result<&'a T, FindError> {
	let matches: Vec<&T> = find_all::<T>(root)
		.into_iter()
		.filter(|widget| predicate(widget))
		.collect();

	if matches.len() > 1 {
		return Err(FindError::Ambiguous {
			count: matches.len(),
			type_label: searched_type_name::<T>(),
			criteria: criteria.to_string(),
			tree: format_widget_tree(root),
		});
	}

	matches.into_iter().next().ok_or_else(|| FindError::NotFound {
		type_label: searched_type_name::<T>(),
		criteria: criteria.to_string(),
		tree: format_widget_tree(root),
	})
}

/// Search open top-level windows for the first `W` satisfying `predicate`.
///
/// The host's window registry is supplied by the caller as whatever
/// iterator the toolkit exposes over its open windows; this library holds
/// no global window state. Unlike the child finders this returns the first
/// match: registry order (usually stacking or creation order) gives
/// "first" a meaning, and a transiently duplicated window is a legitimate
/// state to query.
pub fn find_window<'a, W: Widget>(
	windows: impl IntoIterator<Item = &'a dyn Widget>,
	predicate: impl Fn(&W) -> bool,
) -> Result<&'a W, FindError> {
	windows
		.into_iter()
		.filter_map(downcast_widget::<W>)
		.find(|window| predicate(window))
		.ok_or_else(|| FindError::WindowNotFound {
			type_label: searched_type_name::<W>(),
		})
}

fn searched_type_name<T>() -> String {
	short_type_name(std::any::type_name::<T>())
}
