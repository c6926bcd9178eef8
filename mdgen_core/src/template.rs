use std::ops::RangeInclusive;

use crate::CsvTable;
use crate::Element;
use crate::Heading;
use crate::Inline;
use crate::ListItem;
use crate::MdList;

/// Heading levels included in a table of contents when none are given.
pub const DEFAULT_TOC_LEVELS: RangeInclusive<u8> = 2..=2;

/// An element whose content depends on the finished document.
///
/// Templates are placeholders: they hold no document content themselves.
/// Rendering happens in two explicit phases. First the template is
/// [resolved](Template::resolve) against the complete element sequence of the
/// document, producing a [`ResolvedTemplate`] which borrows that sequence.
/// Only a resolved template can be rendered, and the borrow ends with it, so
/// a template can neither keep nor modify the elements it observes.
///
/// [`Document::render`](crate::Document::render) performs both phases.
/// Templates rendered outside of a document can be resolved against any
/// slice of elements, including an empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Template {
	TableOfContents(TableOfContents),
	CsvTable(CsvTable),
}

impl Template {
	/// Bind this template to the elements of the document it will be rendered
	/// in.
	pub fn resolve<'a>(&'a self, elements: &'a [Element]) -> ResolvedTemplate<'a> {
		ResolvedTemplate {
			template: self,
			elements,
		}
	}
}

impl From<TableOfContents> for Template {
	fn from(toc: TableOfContents) -> Self {
		Self::TableOfContents(toc)
	}
}

impl From<CsvTable> for Template {
	fn from(table: CsvTable) -> Self {
		Self::CsvTable(table)
	}
}

/// A [`Template`] bound to the elements of a document, ready to render.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedTemplate<'a> {
	template: &'a Template,
	elements: &'a [Element],
}

impl ResolvedTemplate<'_> {
	pub fn render(&self) -> String {
		match self.template {
			Template::TableOfContents(toc) => toc.build(self.elements).render(),
			Template::CsvTable(table) => table.render(),
		}
	}
}

/// An ordered list of links to the headings of a document, nested to mirror
/// the heading hierarchy.
///
/// Only headings whose level lies in [`TableOfContents::levels`] are
/// included. The table of contents can sit anywhere in the document; it always
/// sees every heading, including those that come after it.
///
/// ```
/// use mdgen_core::Document;
///
/// let mut document = Document::new();
/// document.add_table_of_contents(2..=2);
/// document.add_heading("First Item", 2)?;
/// document.add_heading("Second Item", 2)?;
///
/// assert_eq!(
/// 	document.render(),
/// 	"1. [First Item](#first-item)\n2. [Second Item](#second-item)\n\n## First Item\n\n## \
/// 	 Second Item"
/// );
/// # Ok::<(), mdgen_core::MdgenError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOfContents {
	levels: RangeInclusive<u8>,
}

impl Default for TableOfContents {
	fn default() -> Self {
		Self::new(DEFAULT_TOC_LEVELS)
	}
}

impl TableOfContents {
	pub fn new(levels: RangeInclusive<u8>) -> Self {
		tracing::debug!(?levels, "created table of contents");
		Self { levels }
	}

	pub fn levels(&self) -> &RangeInclusive<u8> {
		&self.levels
	}

	/// Build the nested list for the headings found in `elements`.
	pub fn build(&self, elements: &[Element]) -> MdList {
		let headings: Vec<&Heading> = elements
			.iter()
			.filter_map(Element::as_heading)
			.filter(|heading| self.levels.contains(&heading.level()))
			.collect();

		// Grouping starts at the level of the first matching heading and stops
		// at the first heading shallower than it.
		let Some(first) = headings.first() else {
			return MdList::ordered(Vec::<ListItem>::new());
		};

		let (list, _) = assemble(&headings, 0, first.level());
		list
	}
}

/// Group `headings[position..]` into an ordered list at `level`.
///
/// Headings at `level` become entries; deeper headings are gathered into a
/// nested sublist by a recursive call; a shallower heading ends the group.
/// Returns the list and the number of headings consumed.
fn assemble(headings: &[&Heading], position: usize, level: u8) -> (MdList, usize) {
	let mut items: Vec<ListItem> = Vec::new();
	let mut index = position;

	while let Some(heading) = headings.get(index) {
		let current = heading.level();

		if current < level {
			break;
		}

		if current == level {
			let text = heading.text();
			let link = anchor(&text);
			items.push(ListItem::from(Inline::new(text).with_link(link)));
			index += 1;
		} else {
			let (sublist, consumed) = assemble(headings, index, current);
			items.push(ListItem::Nested(sublist));
			index += consumed;
		}
	}

	(MdList::ordered(items), index - position)
}

/// The in-page link target for a heading: `#` followed by the lowercased
/// text with every whitespace run replaced by a single hyphen.
///
/// ```
/// assert_eq!(mdgen_core::anchor("Getting  Started"), "#getting-started");
/// ```
pub fn anchor(text: &str) -> String {
	let slug = text.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-");
	format!("#{slug}")
}
