use crate::widget::Widget;

/// Render a widget tree as a one-line-per-widget indented dump.
///
/// Each widget shows its short type name, then `- "text"` if it has text,
/// `[name: ...]` if it has a name, and `(hidden)` if it is not visible.
/// Children are marked with `|-` and indented two spaces per level. The
/// find errors embed this dump so a failed lookup shows what the tree
/// actually contained.
pub fn format_widget_tree(root: &dyn Widget) -> String {
	let mut lines = Vec::new();
	append_widget(&mut lines, root, 0);
	lines.join("\n")
}

fn append_widget(lines: &mut Vec<String>, widget: &dyn Widget, depth: usize) {
	let mut line = String::new();
	if depth > 0 {
		line.push_str(&"  ".repeat(depth - 1));
		line.push_str("|- ");
	}
	line.push_str(&describe_widget(widget));
	lines.push(line);

	for child in widget.children() {
		append_widget(lines, child, depth + 1);
	}
}

fn describe_widget(widget: &dyn Widget) -> String {
	let mut desc = short_type_name(widget.type_label());
	if let Some(text) = widget.text() {
		desc.push_str(&format!(" - {text:?}"));
	}
	if let Some(name) = widget.name() {
		desc.push_str(&format!(" [name: {name}]"));
	}
	if !widget.visible() {
		desc.push_str(" (hidden)");
	}
	desc
}

/// Trim module paths out of a type name, keeping generic parameters.
///
/// `widget_testkit::utils::tree::Example` becomes `Example`, and
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub fn short_type_name(full: &str) -> String {
	let mut out = String::with_capacity(full.len());
	let mut segment_start = 0;
	for (idx, ch) in full.char_indices() {
		match ch {
			':' => segment_start = idx + 1,
			'<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' => {
				out.push_str(&full[segment_start..idx]);
				out.push(ch);
				segment_start = idx + 1;
			}
			_ => {}
		}
	}
	out.push_str(&full[segment_start..]);
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geometry::Rect;

	struct Group {
		children: Vec<Box<dyn Widget>>,
	}

	impl Widget for Group {
		fn bounds(&self) -> Rect {
			Rect::new(0, 0, 100, 100)
		}

		fn children(&self) -> Vec<&dyn Widget> {
			self.children.iter().map(|child| child.as_ref()).collect()
		}
	}

	struct Item {
		text: String,
		name: Option<String>,
		visible: bool,
	}

	impl Item {
		fn new(text: &str, name: Option<&str>, visible: bool) -> Self {
			Self {
				text: text.to_string(),
				name: name.map(str::to_string),
				visible,
			}
		}
	}

	impl Widget for Item {
		fn bounds(&self) -> Rect {
			Rect::new(0, 0, 10, 10)
		}

		fn text(&self) -> Option<&str> {
			Some(&self.text)
		}

		fn name(&self) -> Option<&str> {
			self.name.as_deref()
		}

		fn visible(&self) -> bool {
			self.visible
		}
	}

	#[test]
	fn shortens_plain_and_generic_type_names() {
		assert_eq!(short_type_name("Button"), "Button");
		assert_eq!(short_type_name("app::widgets::Button"), "Button");
		assert_eq!(
			short_type_name("alloc::vec::Vec<alloc::string::String>"),
			"Vec<String>"
		);
		assert_eq!(short_type_name("(app::A, app::B)"), "(A, B)");
	}

	#[test]
	fn dumps_nested_tree_with_decorations() {
		let root = Group {
			children: vec![
				Box::new(Item::new("hello", Some("greeting"), true)),
				Box::new(Group {
					children: vec![Box::new(Item::new("bye", None, false))],
				}),
			],
		};

		insta::assert_snapshot!(format_widget_tree(&root), @r#"
		Group
		|- Item - "hello" [name: greeting]
		|- Group
		  |- Item - "bye" (hidden)
		"#);
	}

	#[test]
	fn dump_of_a_leaf_is_a_single_line() {
		let item = Item::new("alone", None, true);
		assert_eq!(format_widget_tree(&item), r#"Item - "alone""#);
	}
}
