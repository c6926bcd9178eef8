use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use mdgen_core::Align;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Generate markdown documents from manifests and CSV data.",
	long_about = "mdgen builds markdown documents out of headings, paragraphs, lists, tables, \
	              quotes, code blocks and tables of contents, then renders them into valid, \
	              readably formatted markdown.\n\nQuick start:\n  mdgen init                 \
	              Create a sample config and manifest\n  mdgen build document.toml  Render \
	              the manifest to a file\n  mdgen table data.csv       Print a CSV file as a \
	              markdown table"
)]
pub struct MdgenCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Create a sample `mdgen.toml` and `document.toml` in the project root.
	///
	/// Existing files are left untouched.
	Init,
	/// Build a document from a manifest and write it to disk.
	///
	/// The manifest may be JSON, TOML or YAML and lists the elements of the
	/// document in order. Output settings come from `mdgen.toml` and can be
	/// overridden with flags.
	Build {
		/// Path to the manifest, relative to the project root.
		manifest: PathBuf,

		/// Name of the written file without extension. Defaults to the
		/// manifest file stem.
		#[arg(long, short)]
		name: Option<String>,

		/// Directory to write the document to.
		#[arg(long)]
		out_dir: Option<PathBuf>,

		/// File extension of the written document.
		#[arg(long)]
		ext: Option<String>,

		/// Text encoding of the written document, as a WHATWG label.
		#[arg(long)]
		encoding: Option<String>,

		/// Print the rendered document instead of writing it.
		#[arg(long, default_value_t = false)]
		stdout: bool,
	},
	/// Print a CSV file as a markdown table.
	///
	/// The first record is used as the header row.
	Table {
		/// Path to the CSV file, relative to the project root.
		csv: PathBuf,

		/// Comma separated column alignments, one per column.
		#[arg(long, value_enum, value_delimiter = ',')]
		align: Vec<ColumnAlign>,

		/// Number of spaces to indent every row by.
		#[arg(long, default_value_t = 0)]
		indent: usize,

		/// Text encoding of the CSV file, as a WHATWG label.
		#[arg(long, default_value = "utf-8")]
		encoding: String,
	},
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ColumnAlign {
	#[default]
	Left,
	Right,
	Center,
}

impl From<ColumnAlign> for Align {
	fn from(align: ColumnAlign) -> Self {
		match align {
			ColumnAlign::Left => Self::Left,
			ColumnAlign::Right => Self::Right,
			ColumnAlign::Center => Self::Center,
		}
	}
}
