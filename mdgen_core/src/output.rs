use std::path::PathBuf;

use encoding_rs::Encoding;
use encoding_rs::UTF_16BE;
use encoding_rs::UTF_16LE;

use crate::Document;
use crate::MdgenError;
use crate::MdgenResult;
use crate::config::OutputConfig;

/// Render `document` and write it to `{directory}/{name}.{extension}`.
///
/// The output directory and its parents are created when missing. The text is
/// encoded with the label in [`OutputConfig::encoding`]. Returns the path of
/// the written file.
pub fn write_document(document: &Document, name: &str, output: &OutputConfig) -> MdgenResult<PathBuf> {
	let rendered = document.render();
	let bytes = encode_text(&rendered, &output.encoding)?;

	if !output.directory.as_os_str().is_empty() {
		std::fs::create_dir_all(&output.directory)?;
	}

	let path = output.directory.join(file_name(name, &output.extension));
	std::fs::write(&path, bytes)?;
	tracing::info!(
		path = %path.display(),
		encoding = %output.encoding,
		"wrote document"
	);

	Ok(path)
}

/// The file name for a document called `name`. An empty extension produces
/// a bare name.
pub fn file_name(name: &str, extension: &str) -> String {
	let extension = extension.trim_start_matches('.');
	if extension.is_empty() {
		name.to_string()
	} else {
		format!("{name}.{extension}")
	}
}

/// Encode `text` with the encoding identified by the WHATWG `label`.
///
/// UTF-16 output starts with a byte order mark. Fails when the label is
/// unknown or when `text` holds characters the encoding cannot represent.
pub fn encode_text(text: &str, label: &str) -> MdgenResult<Vec<u8>> {
	let encoding = Encoding::for_label(label.trim().as_bytes())
		.ok_or_else(|| MdgenError::UnknownEncoding(label.to_string()))?;

	if encoding == UTF_16LE {
		return Ok(encode_utf16(text, [0xFF, 0xFE], u16::to_le_bytes));
	}
	if encoding == UTF_16BE {
		return Ok(encode_utf16(text, [0xFE, 0xFF], u16::to_be_bytes));
	}

	let (bytes, used, had_unmappable) = encoding.encode(text);
	if had_unmappable {
		return Err(MdgenError::UnmappableCharacters(used.name().to_string()));
	}

	Ok(bytes.into_owned())
}

fn encode_utf16(text: &str, bom: [u8; 2], to_bytes: fn(u16) -> [u8; 2]) -> Vec<u8> {
	let mut bytes = Vec::with_capacity(2 + text.len() * 2);
	bytes.extend_from_slice(&bom);
	for unit in text.encode_utf16() {
		bytes.extend_from_slice(&to_bytes(unit));
	}
	bytes
}
