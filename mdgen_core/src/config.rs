use std::ops::RangeInclusive;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::DEFAULT_CODE_LANG;
use crate::MdgenError;
use crate::MdgenResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["mdgen.toml", ".mdgen.toml", ".config/mdgen.toml"];

/// Default extension for written documents.
pub const DEFAULT_EXTENSION: &str = "md";

/// Default text encoding for written documents.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Configuration loaded from an `mdgen.toml` file.
///
/// ```toml
/// [output]
/// directory = "docs"
/// extension = "md"
/// encoding = "utf-8"
///
/// [defaults]
/// code_lang = "generic"
/// toc_levels = [2, 3]
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct MdgenConfig {
	/// Where and how rendered documents are written.
	#[serde(default)]
	pub output: OutputConfig,
	/// Defaults used when building documents from manifests.
	#[serde(default)]
	pub defaults: DefaultsConfig,
}

/// Controls where rendered documents are written.
///
/// ```toml
/// [output]
/// directory = "docs"
/// extension = "md"
/// encoding = "utf-8"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
	/// Directory documents are written to, created if missing. An empty path
	/// means the current working directory.
	#[serde(default)]
	pub directory: PathBuf,
	/// File extension without the leading dot.
	#[serde(default = "default_extension")]
	pub extension: String,
	/// WHATWG label of the text encoding to write with.
	#[serde(default = "default_encoding")]
	pub encoding: String,
}

impl Default for OutputConfig {
	fn default() -> Self {
		Self {
			directory: PathBuf::new(),
			extension: default_extension(),
			encoding: default_encoding(),
		}
	}
}

/// Defaults applied by the manifest builder when an element leaves a setting
/// out.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DefaultsConfig {
	/// Language tag for code blocks without one.
	#[serde(default = "default_code_lang")]
	pub code_lang: String,
	/// Inclusive `[first, last]` heading levels for tables of contents.
	#[serde(default = "default_toc_levels")]
	pub toc_levels: [u8; 2],
}

impl DefaultsConfig {
	pub fn toc_levels(&self) -> RangeInclusive<u8> {
		self.toc_levels[0]..=self.toc_levels[1]
	}

	/// A reversed `toc_levels` pair would silently produce empty tables of
	/// contents.
	fn validate(&self) -> MdgenResult<()> {
		let [first, last] = self.toc_levels;
		if first > last {
			return Err(MdgenError::ConfigParse(format!(
				"`defaults.toc_levels` must be `[first, last]` with first <= last, got [{first}, {last}]"
			)));
		}

		Ok(())
	}
}

impl Default for DefaultsConfig {
	fn default() -> Self {
		Self {
			code_lang: default_code_lang(),
			toc_levels: default_toc_levels(),
		}
	}
}

fn default_extension() -> String {
	DEFAULT_EXTENSION.to_string()
}

fn default_encoding() -> String {
	DEFAULT_ENCODING.to_string()
}

fn default_code_lang() -> String {
	DEFAULT_CODE_LANG.to_string()
}

fn default_toc_levels() -> [u8; 2] {
	[2, 2]
}

impl MdgenConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> MdgenResult<Option<MdgenConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config: MdgenConfig =
			toml::from_str(&content).map_err(|e| MdgenError::ConfigParse(e.to_string()))?;
		config.defaults.validate()?;
		tracing::debug!(path = %config_path.display(), "loaded config");

		Ok(Some(config))
	}

	/// Like [`MdgenConfig::load`] but falls back to the defaults when no
	/// config file exists.
	pub fn load_or_default(root: &Path) -> MdgenResult<MdgenConfig> {
		Ok(Self::load(root)?.unwrap_or_default())
	}
}
