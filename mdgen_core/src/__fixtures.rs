use std::path::Path;

use markdown::ParseOptions;
use markdown::mdast::Node;
use markdown::to_mdast;

use crate::Document;
use crate::MdgenResult;

/// A document with a table of contents placed before the headings it lists.
pub fn headings_document(levels: std::ops::RangeInclusive<u8>) -> MdgenResult<Document> {
	let mut document = Document::new();
	document.add_table_of_contents(levels);
	document.add_heading("Intro", 2)?;
	document.add_heading("Setup", 2)?;
	document.add_heading("Prereqs", 3)?;
	document.add_heading("Usage", 2)?;
	Ok(document)
}

/// One of every block kind, in a fixed order.
pub fn kitchen_sink_document() -> MdgenResult<Document> {
	let mut document = Document::new();
	document.add_heading("Kitchen Sink", 1)?;
	document.add_paragraph("Some text.");
	document.add_code("let x = 5;", "rust");
	document.add_quote("Be yourself.");
	document.add_unordered_list(["One", "Two"]);
	document.add_table(["Name", "Role"], [["Ada", "Engineer"]], None, 0)?;
	document.add_horizontal_rule();
	Ok(document)
}

/// The kind of every top-level node of `content` parsed as GFM markdown.
pub fn block_kinds(content: &str) -> Vec<&'static str> {
	let root = to_mdast(content, &ParseOptions::gfm()).unwrap_or_else(|e| panic!("parse: {e}"));
	let Node::Root(root) = root else {
		panic!("expected a root node");
	};

	root.children
		.iter()
		.map(|node| {
			match node {
				Node::Heading(_) => "heading",
				Node::Paragraph(_) => "paragraph",
				Node::Code(_) => "code",
				Node::Blockquote(_) => "blockquote",
				Node::List(_) => "list",
				Node::Table(_) => "table",
				Node::ThematicBreak(_) => "thematic_break",
				Node::Html(_) => "html",
				_ => "other",
			}
		})
		.collect()
}

pub fn write_file(path: &Path, content: impl AsRef<[u8]>) {
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent).unwrap_or_else(|e| panic!("create dir: {e}"));
	}
	std::fs::write(path, content).unwrap_or_else(|e| panic!("write: {e}"));
}
