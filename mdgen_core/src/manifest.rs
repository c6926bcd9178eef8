use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::Align;
use crate::Checked;
use crate::Code;
use crate::CsvTable;
use crate::Document;
use crate::ListItem;
use crate::MdList;
use crate::MdgenError;
use crate::MdgenResult;
use crate::Paragraph;
use crate::Quote;
use crate::QuoteLine;
use crate::config::DEFAULT_ENCODING;
use crate::config::MdgenConfig;

/// A serialized description of a document, one entry per element in
/// document order.
///
/// ```toml
/// [[elements]]
/// type = "heading"
/// text = "Title"
/// level = 1
///
/// [[elements]]
/// type = "unordered_list"
/// items = ["One", ["Nested A", "Nested B"], "Two"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DocumentManifest {
	#[serde(default)]
	pub elements: Vec<ElementSpec>,
}

/// One element of a [`DocumentManifest`], selected by its `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementSpec {
	Heading {
		text: String,
		level: u8,
	},
	Paragraph {
		text: String,
		/// Words in `text` to turn into links.
		#[serde(default)]
		links: Vec<LinkSpec>,
	},
	Raw {
		text: String,
	},
	Code {
		code: String,
		/// Falls back to `defaults.code_lang` from the config.
		#[serde(default)]
		lang: Option<String>,
	},
	HorizontalRule,
	Quote {
		/// Strings become quote lines; arrays become nested quotes.
		lines: Vec<ItemSpec>,
	},
	OrderedList {
		items: Vec<ItemSpec>,
	},
	UnorderedList {
		items: Vec<ItemSpec>,
	},
	Checklist {
		items: Vec<ItemSpec>,
		/// A single flag for every item or one flag per top-level item.
		/// Defaults to unchecked.
		#[serde(default)]
		checked: Option<CheckedSpec>,
	},
	Table {
		header: Vec<String>,
		#[serde(default)]
		rows: Vec<Vec<String>>,
		#[serde(default)]
		align: Option<Vec<Align>>,
		#[serde(default)]
		indent: usize,
	},
	TableOfContents {
		/// Inclusive `[first, last]` heading levels. Falls back to
		/// `defaults.toc_levels` from the config.
		#[serde(default)]
		levels: Option<[u8; 2]>,
	},
	CsvTable {
		/// Resolved relative to the manifest's directory.
		path: PathBuf,
		#[serde(default)]
		encoding: Option<String>,
	},
}

/// A list item or quote line: plain text or a nested group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ItemSpec {
	Text(String),
	Nested(Vec<ItemSpec>),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CheckedSpec {
	All(bool),
	Each(Vec<bool>),
}

impl From<CheckedSpec> for Checked {
	fn from(spec: CheckedSpec) -> Self {
		match spec {
			CheckedSpec::All(checked) => Self::All(checked),
			CheckedSpec::Each(checked) => Self::Each(checked),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkSpec {
	/// The text to link.
	pub target: String,
	pub url: String,
	/// Maximum number of occurrences to link. All of them when omitted.
	#[serde(default)]
	pub count: Option<usize>,
}

/// Serialization formats a manifest can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
	Json,
	Toml,
	Yaml,
}

impl ManifestFormat {
	/// Pick the format from the file extension.
	pub fn from_path(path: &Path) -> MdgenResult<Self> {
		let extension = path
			.extension()
			.and_then(|ext| ext.to_str())
			.unwrap_or_default()
			.to_ascii_lowercase();

		match extension.as_str() {
			"json" => Ok(Self::Json),
			"toml" => Ok(Self::Toml),
			"yaml" | "yml" => Ok(Self::Yaml),
			other => Err(MdgenError::UnsupportedManifestFormat(other.to_string())),
		}
	}
}

impl DocumentManifest {
	/// Read and parse a manifest file. The format is chosen from the file
	/// extension.
	pub fn load(path: &Path) -> MdgenResult<Self> {
		let format = ManifestFormat::from_path(path)?;
		let content = std::fs::read_to_string(path)?;
		let manifest = Self::parse(&content, format, &path.display().to_string())?;
		tracing::debug!(
			path = %path.display(),
			elements = manifest.elements.len(),
			"loaded manifest"
		);

		Ok(manifest)
	}

	/// Parse manifest `content` in the given format. `path_display` is only
	/// used in error messages.
	pub fn parse(content: &str, format: ManifestFormat, path_display: &str) -> MdgenResult<Self> {
		parse_content(content, format, path_display)
	}

	/// Construct the document described by this manifest. CSV paths are
	/// resolved against `base_dir`.
	pub fn build(&self, base_dir: &Path, config: &MdgenConfig) -> MdgenResult<Document> {
		let mut document = Document::new();

		for element in &self.elements {
			add_element(&mut document, element, base_dir, config)?;
		}

		Ok(document)
	}
}

fn parse_content<T: DeserializeOwned>(
	content: &str,
	format: ManifestFormat,
	path_display: &str,
) -> MdgenResult<T> {
	let manifest_error = |reason: String| {
		MdgenError::ManifestParse {
			path: path_display.to_string(),
			reason,
		}
	};

	match format {
		ManifestFormat::Json => serde_json::from_str(content).map_err(|e| manifest_error(e.to_string())),
		ManifestFormat::Toml => toml::from_str(content).map_err(|e| manifest_error(e.to_string())),
		ManifestFormat::Yaml => {
			serde_yaml_ng::from_str(content).map_err(|e| manifest_error(e.to_string()))
		}
	}
}

fn add_element(
	document: &mut Document,
	element: &ElementSpec,
	base_dir: &Path,
	config: &MdgenConfig,
) -> MdgenResult<()> {
	match element {
		ElementSpec::Heading { text, level } => {
			document.add_heading(text.as_str(), *level)?;
		}
		ElementSpec::Paragraph { text, links } => {
			let paragraph = document.add_paragraph(text.as_str());
			for link in links {
				paragraph.insert_link(&link.target, &link.url, link.count);
			}
		}
		ElementSpec::Raw { text } => {
			document.add_raw(text.as_str());
		}
		ElementSpec::Code { code, lang } => {
			let lang = lang.as_deref().unwrap_or(&config.defaults.code_lang);
			document.add_element(Code::new(code.as_str(), lang));
		}
		ElementSpec::HorizontalRule => {
			document.add_horizontal_rule();
		}
		ElementSpec::Quote { lines } => {
			document.add_element(quote(lines));
		}
		ElementSpec::OrderedList { items } => {
			document.add_ordered_list(list_items(items, true));
		}
		ElementSpec::UnorderedList { items } => {
			document.add_unordered_list(list_items(items, false));
		}
		ElementSpec::Checklist { items, checked } => {
			let checked = checked.clone().map_or(Checked::All(false), Checked::from);
			let list = MdList::new(list_items(items, false), false, Some(checked))?;
			document.add_element(list);
		}
		ElementSpec::Table {
			header,
			rows,
			align,
			indent,
		} => {
			document.add_table(header, rows, align.clone(), *indent)?;
		}
		ElementSpec::TableOfContents { levels } => {
			let levels = levels.map_or_else(|| config.defaults.toc_levels(), |[first, last]| first..=last);
			document.add_table_of_contents(levels);
		}
		ElementSpec::CsvTable { path, encoding } => {
			let path = base_dir.join(path);
			let encoding = encoding.as_deref().unwrap_or(DEFAULT_ENCODING);
			document.add_element(CsvTable::from_path(&path, encoding)?);
		}
	}

	Ok(())
}

/// Nested groups become sublists that share the parent's numbering style.
fn list_items(items: &[ItemSpec], ordered: bool) -> Vec<ListItem> {
	items
		.iter()
		.map(|item| {
			match item {
				ItemSpec::Text(text) => ListItem::from(Paragraph::from(text)),
				ItemSpec::Nested(nested) => {
					let items = list_items(nested, ordered);
					let list = if ordered {
						MdList::ordered(items)
					} else {
						MdList::unordered(items)
					};
					ListItem::Nested(list)
				}
			}
		})
		.collect()
}

fn quote(lines: &[ItemSpec]) -> Quote {
	Quote::new(lines.iter().map(|line| {
		match line {
			ItemSpec::Text(text) => QuoteLine::from(text.as_str()),
			ItemSpec::Nested(nested) => QuoteLine::Nested(quote(nested)),
		}
	}))
}
