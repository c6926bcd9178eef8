use serde::Deserialize;
use serde::Serialize;

use crate::MdgenError;
use crate::MdgenResult;
use crate::Paragraph;

/// Column alignment, rendered as colons in the separator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
	/// `:----`
	Left,
	/// `----:`
	Right,
	/// `:---:`
	Center,
}

impl Align {
	fn separator(self, width: usize) -> String {
		match self {
			Self::Left => format!(":{}", "-".repeat(width.saturating_sub(1))),
			Self::Right => format!("{}:", "-".repeat(width.saturating_sub(1))),
			Self::Center => format!(":{}:", "-".repeat(width.saturating_sub(2))),
		}
	}
}

/// A pipe table. Every cell is a [`Paragraph`] and every column is padded to
/// the width of its widest cell so the source stays readable.
///
/// ```
/// use mdgen_core::Table;
///
/// let mut table = Table::new(["Rank", "Player"], [["1st", "Crosby"], ["2nd", "McDavid"]])?;
/// table.add_row(["3rd", "Matthews"])?;
/// assert_eq!(
/// 	table.render(),
/// 	"| Rank | Player   |\n| ---- | -------- |\n| 1st  | Crosby   |\n| 2nd  | McDavid  |\n| 3rd  | \
/// 	 Matthews |"
/// );
/// # Ok::<(), mdgen_core::MdgenError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
	header: Vec<Paragraph>,
	body: Vec<Vec<Paragraph>>,
	align: Option<Vec<Align>>,
	indent: usize,
	widths: Vec<usize>,
}

impl Table {
	/// Create a table from a header row and body rows.
	///
	/// Fails when body rows differ in length, or when the header length
	/// differs from the body row length.
	pub fn new<H, C, B, R, D>(header: H, body: B) -> MdgenResult<Self>
	where
		H: IntoIterator<Item = C>,
		C: Into<Paragraph>,
		B: IntoIterator<Item = R>,
		R: IntoIterator<Item = D>,
		D: Into<Paragraph>,
	{
		let header: Vec<Paragraph> = header.into_iter().map(Into::into).collect();
		let body: Vec<Vec<Paragraph>> = body
			.into_iter()
			.map(|row| row.into_iter().map(Into::into).collect())
			.collect();

		if let Some((first, rest)) = body.split_first() {
			if rest.iter().any(|row| row.len() != first.len()) {
				return Err(MdgenError::UnevenTableRows);
			}
			if header.len() != first.len() {
				return Err(MdgenError::TableHeaderMismatch {
					header: header.len(),
					row: first.len(),
				});
			}
		}

		let widths = column_widths(&header, &body);
		let table = Self {
			header,
			body,
			align: None,
			indent: 0,
			widths,
		};
		tracing::debug!(?table, "created table");

		Ok(table)
	}

	/// Create a table with a header and no body rows.
	pub fn with_header<H, C>(header: H) -> Self
	where
		H: IntoIterator<Item = C>,
		C: Into<Paragraph>,
	{
		let header: Vec<Paragraph> = header.into_iter().map(Into::into).collect();
		let widths = column_widths(&header, &[]);
		Self {
			header,
			body: Vec::new(),
			align: None,
			indent: 0,
			widths,
		}
	}

	/// Set one alignment per column. Fails when the number of alignments does
	/// not match the number of columns.
	pub fn with_alignment(mut self, align: impl IntoIterator<Item = Align>) -> MdgenResult<Self> {
		let align: Vec<Align> = align.into_iter().collect();
		if align.len() != self.header.len() {
			return Err(MdgenError::AlignmentMismatch {
				columns: self.header.len(),
				alignments: align.len(),
			});
		}

		self.align = Some(align);
		Ok(self)
	}

	/// Indent every row of the table by `indent` spaces.
	pub fn with_indent(mut self, indent: usize) -> Self {
		self.indent = indent;
		self
	}

	/// Append a row to the end of the table, widening columns where needed.
	/// Fails without modifying the table when the row width differs from the
	/// header width.
	pub fn add_row<R, D>(&mut self, row: R) -> MdgenResult<&mut Self>
	where
		R: IntoIterator<Item = D>,
		D: Into<Paragraph>,
	{
		let row: Vec<Paragraph> = row.into_iter().map(Into::into).collect();
		tracing::debug!(?row, "adding row to table");

		if row.len() != self.header.len() {
			return Err(MdgenError::RowWidthMismatch {
				row: row.len(),
				header: self.header.len(),
			});
		}

		for (width, cell) in self.widths.iter_mut().zip(&row) {
			*width = (*width).max(display_width(cell));
		}
		self.body.push(row);

		Ok(self)
	}

	pub fn header(&self) -> &[Paragraph] {
		&self.header
	}

	pub fn rows(&self) -> &[Vec<Paragraph>] {
		&self.body
	}

	pub fn alignment(&self) -> Option<&[Align]> {
		self.align.as_deref()
	}

	pub fn indent(&self) -> usize {
		self.indent
	}

	/// Display width of each column: the widest rendered cell in that column.
	pub fn widths(&self) -> &[usize] {
		&self.widths
	}

	pub fn render(&self) -> String {
		let indent = " ".repeat(self.indent);
		let mut rows = Vec::with_capacity(self.body.len() + 2);

		rows.push(format!("{indent}| {} |", self.justify(&self.header)));

		let separator = match &self.align {
			Some(align) => align
				.iter()
				.zip(&self.widths)
				.map(|(align, width)| align.separator(*width))
				.collect::<Vec<_>>(),
			None => self.widths.iter().map(|width| "-".repeat(*width)).collect(),
		};
		rows.push(format!("{indent}| {} |", separator.join(" | ")));

		for row in &self.body {
			rows.push(format!("{indent}| {} |", self.justify(row)));
		}

		let table = rows.join("\n");
		tracing::debug!(rendered = %table, "rendered table");
		table
	}

	/// Render the cells of a row, each left-justified to its column width.
	fn justify(&self, row: &[Paragraph]) -> String {
		row.iter()
			.zip(&self.widths)
			.map(|(cell, &width)| format!("{:<width$}", cell.render()))
			.collect::<Vec<_>>()
			.join(" | ")
	}
}

fn display_width(cell: &Paragraph) -> usize {
	cell.render().chars().count()
}

fn column_widths(header: &[Paragraph], body: &[Vec<Paragraph>]) -> Vec<usize> {
	let mut widths: Vec<usize> = header.iter().map(display_width).collect();

	for row in body {
		for (width, cell) in widths.iter_mut().zip(row) {
			*width = (*width).max(display_width(cell));
		}
	}

	widths
}
