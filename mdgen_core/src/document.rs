use std::fmt;
use std::ops::RangeInclusive;
use std::path::PathBuf;

use derive_more::Deref;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::Align;
use crate::Block;
use crate::Code;
use crate::CodeBody;
use crate::CsvTable;
use crate::Heading;
use crate::HorizontalRule;
use crate::Inline;
use crate::ListItem;
use crate::MdList;
use crate::MdgenResult;
use crate::Paragraph;
use crate::Quote;
use crate::Raw;
use crate::ResolvedTemplate;
use crate::Table;
use crate::TableOfContents;
use crate::Template;
use crate::config::OutputConfig;
use crate::output::write_document;

/// Anything that can be placed in a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
	Block(Block),
	Template(Template),
}

impl Element {
	pub fn as_block(&self) -> Option<&Block> {
		match self {
			Self::Block(block) => Some(block),
			Self::Template(_) => None,
		}
	}

	pub fn as_template(&self) -> Option<&Template> {
		match self {
			Self::Template(template) => Some(template),
			Self::Block(_) => None,
		}
	}

	pub fn as_heading(&self) -> Option<&Heading> {
		self.as_block().and_then(Block::as_heading)
	}

	/// Bind templates to `elements`. Blocks are passed through untouched.
	pub fn resolve<'a>(&'a self, elements: &'a [Element]) -> ResolvedElement<'a> {
		match self {
			Self::Block(block) => ResolvedElement::Block(block),
			Self::Template(template) => ResolvedElement::Template(template.resolve(elements)),
		}
	}
}

/// An element whose templates, if any, have been bound to a document.
#[derive(Debug, Clone, Copy)]
pub enum ResolvedElement<'a> {
	Block(&'a Block),
	Template(ResolvedTemplate<'a>),
}

impl ResolvedElement<'_> {
	pub fn render(&self) -> String {
		match self {
			Self::Block(block) => block.render(),
			Self::Template(template) => template.render(),
		}
	}
}

macro_rules! element_from {
	($($wrap:ident($via:ident) <= $ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for Element {
				fn from(value: $ty) -> Self {
					Self::$wrap($via::from(value))
				}
			}
		)*
	};
}

element_from! {
	Block(Block) <= Block,
	Block(Block) <= Heading,
	Block(Block) <= Paragraph,
	Block(Block) <= Raw,
	Block(Block) <= Code,
	Block(Block) <= HorizontalRule,
	Block(Block) <= Quote,
	Block(Block) <= MdList,
	Block(Block) <= Table,
	Template(Template) <= Template,
	Template(Template) <= TableOfContents,
	Template(Template) <= CsvTable,
}

/// Append `$value` as `Block::$variant` and return a mutable reference to it.
macro_rules! push_block {
	($self:ident, $variant:ident, $value:expr) => {{
		$self.elements.push(Element::Block(Block::$variant($value)));
		match $self.elements.last_mut() {
			Some(Element::Block(Block::$variant(value))) => value,
			_ => unreachable!(concat!("a ", stringify!($variant), " block was just appended")),
		}
	}};
}

/// A markdown document: an ordered sequence of elements rendered with a
/// blank line between each.
///
/// The typed `add_*` methods build an element, append it and hand back a
/// mutable reference so it can be adjusted further. The elements themselves
/// are readable through `Deref<Target = Vec<Element>>`, but the document can
/// only grow through its own methods.
///
/// ```
/// use mdgen_core::Document;
///
/// let mut document = Document::new();
/// document.add_heading("First", 1)?;
/// assert_eq!(document.render(), "# First");
/// # Ok::<(), mdgen_core::MdgenError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct Document {
	elements: Vec<Element>,
}

impl Document {
	pub fn new() -> Self {
		let document = Self::default();
		tracing::info!("created new document");
		document
	}

	pub fn from_elements(elements: impl IntoIterator<Item = Element>) -> Self {
		let document = Self {
			elements: elements.into_iter().collect(),
		};
		tracing::info!(elements = document.elements.len(), "created new document");
		document
	}

	pub fn elements(&self) -> &[Element] {
		&self.elements
	}

	/// Append any element and return a mutable reference to it.
	pub fn add_element(&mut self, element: impl Into<Element>) -> &mut Element {
		let element = element.into();
		tracing::info!(?element, "added element to document");
		self.elements.push(element);
		let index = self.elements.len() - 1;
		&mut self.elements[index]
	}

	/// Append text exactly as given.
	pub fn add_raw(&mut self, text: impl Into<String>) -> &mut Raw {
		let raw = Raw::new(text);
		tracing::info!(?raw, "added raw block to document");
		push_block!(self, Raw, raw)
	}

	pub fn add_heading(&mut self, text: impl Into<Inline>, level: u8) -> MdgenResult<&mut Heading> {
		let heading = Heading::new(text, level)?;
		tracing::info!(?heading, "added heading to document");
		Ok(push_block!(self, Heading, heading))
	}

	pub fn add_paragraph(&mut self, text: impl Into<Inline>) -> &mut Paragraph {
		let paragraph = Paragraph::new([text]);
		tracing::info!(?paragraph, "added paragraph to document");
		push_block!(self, Paragraph, paragraph)
	}

	pub fn add_ordered_list<I, T>(&mut self, items: I) -> &mut MdList
	where
		I: IntoIterator<Item = T>,
		T: Into<ListItem>,
	{
		let list = MdList::ordered(items);
		tracing::info!(?list, "added ordered list to document");
		push_block!(self, List, list)
	}

	pub fn add_unordered_list<I, T>(&mut self, items: I) -> &mut MdList
	where
		I: IntoIterator<Item = T>,
		T: Into<ListItem>,
	{
		let list = MdList::unordered(items);
		tracing::info!(?list, "added unordered list to document");
		push_block!(self, List, list)
	}

	/// Append an unordered list with an unchecked box on every item.
	pub fn add_checklist<I, T>(&mut self, items: I) -> &mut MdList
	where
		I: IntoIterator<Item = T>,
		T: Into<ListItem>,
	{
		let list = MdList::checklist(items);
		tracing::info!(?list, "added checklist to document");
		push_block!(self, List, list)
	}

	/// Append a table. `align`, when given, must hold one alignment per
	/// column.
	pub fn add_table<H, C, B, R, D>(
		&mut self,
		header: H,
		rows: B,
		align: Option<Vec<Align>>,
		indent: usize,
	) -> MdgenResult<&mut Table>
	where
		H: IntoIterator<Item = C>,
		C: Into<Paragraph>,
		B: IntoIterator<Item = R>,
		R: IntoIterator<Item = D>,
		D: Into<Paragraph>,
	{
		let mut table = Table::new(header, rows)?.with_indent(indent);
		if let Some(align) = align {
			table = table.with_alignment(align)?;
		}
		tracing::info!(?table, "added table to document");
		Ok(push_block!(self, Table, table))
	}

	pub fn add_code(&mut self, code: impl Into<CodeBody>, lang: impl Into<String>) -> &mut Code {
		let code = Code::new(code, lang);
		tracing::info!(?code, "added code block to document");
		push_block!(self, Code, code)
	}

	pub fn add_quote(&mut self, text: impl Into<String>) -> &mut Quote {
		let quote = Quote::from(text.into());
		tracing::info!(?quote, "added quote to document");
		push_block!(self, Quote, quote)
	}

	pub fn add_horizontal_rule(&mut self) -> &mut HorizontalRule {
		tracing::info!("added horizontal rule to document");
		push_block!(self, HorizontalRule, HorizontalRule)
	}

	/// Append a table of contents covering the given heading levels. It may be
	/// added before the headings it lists.
	pub fn add_table_of_contents(&mut self, levels: RangeInclusive<u8>) -> &mut TableOfContents {
		let toc = TableOfContents::new(levels);
		tracing::info!(?toc, "added table of contents to document");
		self.elements
			.push(Element::Template(Template::TableOfContents(toc)));
		match self.elements.last_mut() {
			Some(Element::Template(Template::TableOfContents(toc))) => toc,
			_ => unreachable!("a table of contents was just appended"),
		}
	}

	/// Shuffle the elements into a random order.
	pub fn scramble(&mut self) {
		self.scramble_with(&mut rand::rng());
	}

	/// Shuffle the elements using the given random number generator.
	pub fn scramble_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
		self.elements.shuffle(rng);
		tracing::info!("scrambled document");
	}

	/// Render the document to markdown.
	///
	/// Every template is resolved against the full element sequence before any
	/// element is rendered, then the rendered elements are joined with a blank
	/// line. An empty document renders to an empty string.
	pub fn render(&self) -> String {
		let resolved: Vec<ResolvedElement<'_>> = self
			.elements
			.iter()
			.map(|element| element.resolve(&self.elements))
			.collect();

		let document = resolved
			.iter()
			.map(ResolvedElement::render)
			.collect::<Vec<_>>()
			.join("\n\n");

		tracing::info!(
			elements = self.elements.len(),
			bytes = document.len(),
			"rendered document"
		);
		document
	}

	/// Write the rendered document to `{directory}/{name}.{extension}` as
	/// described by `output`. Returns the path written.
	pub fn dump(&self, name: &str, output: &OutputConfig) -> MdgenResult<PathBuf> {
		write_document(self, name, output)
	}
}

impl From<Vec<Element>> for Document {
	fn from(elements: Vec<Element>) -> Self {
		Self::from_elements(elements)
	}
}

impl FromIterator<Element> for Document {
	fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
		Self::from_elements(iter)
	}
}

impl fmt::Display for Document {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}
