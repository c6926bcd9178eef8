use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum MdgenError {
	#[error(transparent)]
	#[diagnostic(code(mdgen::io_error))]
	Io(#[from] std::io::Error),

	#[error("heading level must be between 1 and 6 but was {0}")]
	#[diagnostic(
		code(mdgen::invalid_heading_level),
		help("markdown only supports heading levels `#` through `######`")
	)]
	InvalidHeadingLevel(u8),

	#[error("table rows are not all the same length")]
	#[diagnostic(code(mdgen::uneven_table_rows))]
	UnevenTableRows,

	#[error("table header has {header} column(s) but rows have {row}")]
	#[diagnostic(code(mdgen::table_header_mismatch))]
	TableHeaderMismatch { header: usize, row: usize },

	#[error("unable to add row with width {row} to table with header of width {header}")]
	#[diagnostic(
		code(mdgen::row_width_mismatch),
		help("every row must have exactly one cell per header column")
	)]
	RowWidthMismatch { row: usize, header: usize },

	#[error("table has {columns} column(s) but {alignments} alignment(s) were supplied")]
	#[diagnostic(code(mdgen::alignment_mismatch))]
	AlignmentMismatch { columns: usize, alignments: usize },

	#[error(
		"number of top-level elements in checklist ({items}) does not match number of booleans \
		 supplied ({checked})"
	)]
	#[diagnostic(
		code(mdgen::checklist_mismatch),
		help("nested lists are not counted as top-level elements")
	)]
	ChecklistMismatch { items: usize, checked: usize },

	#[error("failed to read csv data: {0}")]
	#[diagnostic(code(mdgen::csv))]
	Csv(String),

	#[error("csv data has no header row")]
	#[diagnostic(
		code(mdgen::empty_csv),
		help("the first record of the csv source is used as the table header")
	)]
	EmptyCsv,

	#[error("unknown text encoding: `{0}`")]
	#[diagnostic(
		code(mdgen::unknown_encoding),
		help("use a WHATWG encoding label such as `utf-8`, `windows-1252` or `shift_jis`")
	)]
	UnknownEncoding(String),

	#[error("document contains characters that cannot be represented in `{0}`")]
	#[diagnostic(code(mdgen::unmappable_characters))]
	UnmappableCharacters(String),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(mdgen::config_parse),
		help("check that mdgen.toml is valid TOML with [output] and/or [defaults] sections")
	)]
	ConfigParse(String),

	#[error("failed to load manifest `{path}`: {reason}")]
	#[diagnostic(code(mdgen::manifest_parse))]
	ManifestParse { path: String, reason: String },

	#[error("unsupported manifest format: `{0}`")]
	#[diagnostic(
		code(mdgen::unsupported_format),
		help("supported formats: json, toml, yaml, yml")
	)]
	UnsupportedManifestFormat(String),
}

impl From<csv::Error> for MdgenError {
	fn from(error: csv::Error) -> Self {
		Self::Csv(error.to_string())
	}
}

pub type MdgenResult<T> = Result<T, MdgenError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
