use std::io::Read;
use std::path::Path;

use encoding_rs::Encoding;

use crate::MdgenError;
use crate::MdgenResult;
use crate::Paragraph;
use crate::Table;

/// A [`Table`] loaded from CSV data. The first record is the header.
///
/// This is a template only so that it can sit alongside other templates in a
/// document; its content is fixed when it is created and does not depend on
/// the rest of the document.
///
/// ```
/// use mdgen_core::CsvTable;
///
/// let table = CsvTable::from_reader("Place,Name\n1st,Robert\n".as_bytes())?;
/// assert_eq!(table.render(), "| Place | Name   |\n| ----- | ------ |\n| 1st   | Robert |");
/// # Ok::<(), mdgen_core::MdgenError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
	table: Table,
}

impl CsvTable {
	/// Read CSV records from `reader`. Rows whose width differs from the
	/// header fail with [`MdgenError::RowWidthMismatch`].
	pub fn from_reader(reader: impl Read) -> MdgenResult<Self> {
		let mut reader = csv::ReaderBuilder::new()
			.has_headers(false)
			.flexible(true)
			.from_reader(reader);
		let mut records = reader.records();

		let header = records.next().ok_or(MdgenError::EmptyCsv)??;
		let mut table = Table::with_header(header.iter());

		for record in records {
			let record = record?;
			table.add_row(record.iter())?;
		}

		tracing::debug!(
			columns = table.header().len(),
			rows = table.rows().len(),
			"loaded csv table"
		);

		Ok(Self { table })
	}

	/// Read a CSV file stored in the given text encoding (a WHATWG label
	/// such as `utf-8` or `windows-1252`). A byte order mark, if present,
	/// takes precedence over the label.
	pub fn from_path(path: impl AsRef<Path>, encoding: &str) -> MdgenResult<Self> {
		let path = path.as_ref();
		let encoding = Encoding::for_label(encoding.as_bytes())
			.ok_or_else(|| MdgenError::UnknownEncoding(encoding.to_string()))?;

		let bytes = std::fs::read(path)?;
		let (text, used, had_errors) = encoding.decode(&bytes);
		if had_errors {
			return Err(MdgenError::Csv(format!(
				"`{}` is not valid {}",
				path.display(),
				used.name()
			)));
		}

		tracing::debug!(path = %path.display(), encoding = used.name(), "reading csv file");
		Self::from_reader(text.as_bytes())
	}

	/// Build from records that were already parsed.
	pub fn from_records<H, C, B, R, D>(header: H, rows: B) -> MdgenResult<Self>
	where
		H: IntoIterator<Item = C>,
		C: Into<Paragraph>,
		B: IntoIterator<Item = R>,
		R: IntoIterator<Item = D>,
		D: Into<Paragraph>,
	{
		let mut table = Table::with_header(header);
		for row in rows {
			table.add_row(row)?;
		}

		Ok(Self { table })
	}

	pub fn table(&self) -> &Table {
		&self.table
	}

	pub fn render(&self) -> String {
		self.table.render()
	}
}
