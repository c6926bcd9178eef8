use crate::Block;
use crate::Inline;
use crate::Raw;

/// A single line of a [`Quote`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteLine {
	/// Any block; every physical line of its rendering is prefixed with the
	/// quote markers.
	Leaf(Block),
	/// A quote nested one level deeper than its container.
	Nested(Quote),
}

impl From<&str> for QuoteLine {
	fn from(text: &str) -> Self {
		Self::Leaf(Block::Raw(Raw::new(text)))
	}
}

impl From<String> for QuoteLine {
	fn from(text: String) -> Self {
		Self::Leaf(Block::Raw(Raw::new(text)))
	}
}

impl From<Inline> for QuoteLine {
	fn from(inline: Inline) -> Self {
		Self::Leaf(Block::Raw(Raw::from(inline)))
	}
}

impl From<Quote> for QuoteLine {
	fn from(quote: Quote) -> Self {
		Self::Nested(quote)
	}
}

impl From<Block> for QuoteLine {
	fn from(block: Block) -> Self {
		match block {
			Block::Quote(quote) => Self::Nested(quote),
			other => Self::Leaf(other),
		}
	}
}

/// A block quote. Quotes may contain other blocks and other quotes.
///
/// Nested quotes are padded with an empty quote line on either side so they
/// stay visually distinct:
///
/// ```text
/// > Outer quote
/// >
/// > > Inner quote
/// >
/// > Outer quote
/// ```
///
/// The depth of a nested quote is always its container's depth plus one. It
/// is passed down while rendering, so the same quote renders differently
/// depending on where it is placed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quote {
	lines: Vec<QuoteLine>,
}

impl Quote {
	pub fn new<I, L>(lines: I) -> Self
	where
		I: IntoIterator<Item = L>,
		L: Into<QuoteLine>,
	{
		let quote = Self {
			lines: lines.into_iter().map(Into::into).collect(),
		};
		tracing::debug!(?quote, "created quote");
		quote
	}

	pub fn lines(&self) -> &[QuoteLine] {
		&self.lines
	}

	/// Append a line to the end of the quote.
	pub fn push(&mut self, line: impl Into<QuoteLine>) -> &mut Self {
		self.lines.push(line.into());
		self
	}

	pub fn render(&self) -> String {
		let quote = self.render_at_depth(1);
		tracing::debug!(rendered = %quote, "rendered quote");
		quote
	}

	fn render_at_depth(&self, depth: usize) -> String {
		let markers = "> ".repeat(depth);
		let mut formatted: Vec<String> = Vec::with_capacity(self.lines.len());

		for line in &self.lines {
			match line {
				QuoteLine::Nested(quote) => {
					formatted.push(markers.clone());
					formatted.push(quote.render_at_depth(depth + 1));
					formatted.push(markers.clone());
				}
				QuoteLine::Leaf(block) => {
					let rendered = block.render();
					let separator = format!("\n{markers}");
					let joined = rendered.lines().collect::<Vec<_>>().join(&separator);
					formatted.push(format!("{markers}{joined}"));
				}
			}
		}

		formatted.join("\n")
	}
}

impl From<&str> for Quote {
	fn from(text: &str) -> Self {
		Self::new([text])
	}
}

impl From<String> for Quote {
	fn from(text: String) -> Self {
		Self::new([text])
	}
}
