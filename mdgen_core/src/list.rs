use crate::Block;
use crate::Inline;
use crate::MdgenError;
use crate::MdgenResult;
use crate::Paragraph;

/// A single entry of an [`MdList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
	/// A top-level item. Receives a marker and (optionally) a checkbox.
	Leaf(Block),
	/// A sublist, indented under the item that precedes it.
	Nested(MdList),
}

impl ListItem {
	fn is_leaf(&self) -> bool {
		matches!(self, Self::Leaf(_))
	}
}

impl From<&str> for ListItem {
	fn from(text: &str) -> Self {
		Self::Leaf(Block::Paragraph(Paragraph::from(text)))
	}
}

impl From<String> for ListItem {
	fn from(text: String) -> Self {
		Self::Leaf(Block::Paragraph(Paragraph::from(text)))
	}
}

impl From<&String> for ListItem {
	fn from(text: &String) -> Self {
		Self::Leaf(Block::Paragraph(Paragraph::from(text)))
	}
}

impl From<Inline> for ListItem {
	fn from(inline: Inline) -> Self {
		Self::Leaf(Block::Paragraph(Paragraph::from(inline)))
	}
}

impl From<Paragraph> for ListItem {
	fn from(paragraph: Paragraph) -> Self {
		Self::Leaf(Block::Paragraph(paragraph))
	}
}

impl From<MdList> for ListItem {
	fn from(list: MdList) -> Self {
		Self::Nested(list)
	}
}

impl From<Block> for ListItem {
	fn from(block: Block) -> Self {
		match block {
			Block::List(list) => Self::Nested(list),
			other => Self::Leaf(other),
		}
	}
}

/// Checkbox state of a checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Checked {
	/// The same state for every top-level item.
	All(bool),
	/// One state per top-level item, in order. Nested lists are not counted.
	Each(Vec<bool>),
}

impl From<bool> for Checked {
	fn from(checked: bool) -> Self {
		Self::All(checked)
	}
}

impl From<Vec<bool>> for Checked {
	fn from(checked: Vec<bool>) -> Self {
		Self::Each(checked)
	}
}

/// A markdown list: ordered (`1.`), unordered (`-`) or a checklist
/// (`- [ ]`).
///
/// ```
/// use mdgen_core::MdList;
///
/// let list = MdList::ordered(["Goku", "Piccolo", "Vegeta"]);
/// assert_eq!(list.render(), "1. Goku\n2. Piccolo\n3. Vegeta");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MdList {
	items: Vec<ListItem>,
	ordered: bool,
	checked: Option<Checked>,
}

impl MdList {
	/// Create a list. Fails when `checked` is [`Checked::Each`] and its length
	/// differs from the number of top-level items.
	pub fn new<I, T>(items: I, ordered: bool, checked: Option<Checked>) -> MdgenResult<Self>
	where
		I: IntoIterator<Item = T>,
		T: Into<ListItem>,
	{
		let items: Vec<ListItem> = items.into_iter().map(Into::into).collect();

		if let Some(Checked::Each(states)) = &checked {
			let top_level = items.iter().filter(|item| item.is_leaf()).count();
			if top_level != states.len() {
				return Err(MdgenError::ChecklistMismatch {
					items: top_level,
					checked: states.len(),
				});
			}
		}

		let list = Self {
			items,
			ordered,
			checked,
		};
		tracing::debug!(?list, "created list");

		Ok(list)
	}

	pub fn unordered<I, T>(items: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Into<ListItem>,
	{
		Self::infallible(items, false, None)
	}

	pub fn ordered<I, T>(items: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Into<ListItem>,
	{
		Self::infallible(items, true, None)
	}

	/// An unordered list where every top-level item has an unchecked box.
	pub fn checklist<I, T>(items: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Into<ListItem>,
	{
		Self::infallible(items, false, Some(Checked::All(false)))
	}

	fn infallible<I, T>(items: I, ordered: bool, checked: Option<Checked>) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Into<ListItem>,
	{
		let list = Self {
			items: items.into_iter().map(Into::into).collect(),
			ordered,
			checked,
		};
		tracing::debug!(?list, "created list");
		list
	}

	pub fn items(&self) -> &[ListItem] {
		&self.items
	}

	pub fn is_ordered(&self) -> bool {
		self.ordered
	}

	pub fn checked(&self) -> Option<&Checked> {
		self.checked.as_ref()
	}

	/// Number of items that are not nested lists.
	pub fn top_level_count(&self) -> usize {
		self.items.iter().filter(|item| item.is_leaf()).count()
	}

	/// Spaces a sublist is indented by when it follows the item at `index`.
	/// Ordered markers grow with the number of digits in the index.
	fn indent_size(&self, index: usize) -> usize {
		if self.ordered {
			2 + index.to_string().len()
		} else {
			2
		}
	}

	pub fn render(&self) -> String {
		let list = self.render_with_prefix("");
		tracing::debug!(rendered = %list, "rendered list");
		list
	}

	fn render_with_prefix(&self, prefix: &str) -> String {
		let mut output = Vec::with_capacity(self.items.len());
		let mut index = 1;

		for item in &self.items {
			match item {
				ListItem::Nested(list) => {
					let nested_prefix = format!("{prefix}{}", " ".repeat(self.indent_size(index)));
					output.push(list.render_with_prefix(&nested_prefix));
				}
				ListItem::Leaf(block) => {
					let mut row = if self.ordered {
						format!("{prefix}{index}.")
					} else {
						format!("{prefix}-")
					};

					let checked = match &self.checked {
						Some(Checked::All(checked)) => Some(*checked),
						Some(Checked::Each(states)) => states.get(index - 1).copied(),
						None => None,
					};
					if let Some(checked) = checked {
						row.push_str(if checked { " [X]" } else { " [ ]" });
					}

					row.push(' ');
					row.push_str(&block.render());
					output.push(row);
					index += 1;
				}
			}
		}

		output.join("\n")
	}
}
