use std::fmt;

use crate::Code;
use crate::Heading;
use crate::Inline;
use crate::MdList;
use crate::Paragraph;
use crate::Quote;
use crate::Table;

/// Text inserted into the document without any processing. Use it for
/// pre-rendered markdown or content such as front matter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Raw {
	text: String,
}

impl Raw {
	pub fn new(text: impl Into<String>) -> Self {
		Self { text: text.into() }
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn render(&self) -> String {
		self.text.clone()
	}
}

impl From<&str> for Raw {
	fn from(text: &str) -> Self {
		Self::new(text)
	}
}

impl From<String> for Raw {
	fn from(text: String) -> Self {
		Self::new(text)
	}
}

impl From<Inline> for Raw {
	fn from(inline: Inline) -> Self {
		Self::new(inline.render())
	}
}

/// A thematic break. Always rendered as `***` so it can never be mistaken
/// for an unordered list item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HorizontalRule;

impl HorizontalRule {
	pub fn render(&self) -> String {
		"***".to_string()
	}
}

/// A standalone, newline-delimited markdown construct.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Block {
	Heading(Heading),
	Paragraph(Paragraph),
	Raw(Raw),
	Code(Code),
	HorizontalRule(HorizontalRule),
	Quote(Quote),
	List(MdList),
	Table(Table),
}

impl Block {
	pub fn render(&self) -> String {
		match self {
			Self::Heading(heading) => heading.render(),
			Self::Paragraph(paragraph) => paragraph.render(),
			Self::Raw(raw) => raw.render(),
			Self::Code(code) => code.render(),
			Self::HorizontalRule(rule) => rule.render(),
			Self::Quote(quote) => quote.render(),
			Self::List(list) => list.render(),
			Self::Table(table) => table.render(),
		}
	}

	pub fn as_heading(&self) -> Option<&Heading> {
		match self {
			Self::Heading(heading) => Some(heading),
			_ => None,
		}
	}
}

/// Implement `Display` by delegating to the type's `render` method, and
/// `From<T> for Block` for each block type.
macro_rules! block_impls {
	($($variant:ident => $ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for Block {
				fn from(value: $ty) -> Self {
					Self::$variant(value)
				}
			}

			impl fmt::Display for $ty {
				fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
					f.write_str(&self.render())
				}
			}
		)*
	};
}

block_impls! {
	Heading => Heading,
	Paragraph => Paragraph,
	Raw => Raw,
	Code => Code,
	HorizontalRule => HorizontalRule,
	Quote => Quote,
	List => MdList,
	Table => Table,
}

impl fmt::Display for Block {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}
