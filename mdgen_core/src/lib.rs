//! `mdgen_core` is the core library for `mdgen`. It provides a markdown
//! document model and a deterministic renderer: build a document out of
//! composable text and block elements, then serialize it into valid,
//! readably formatted markdown.
//!
//! ## Element Model
//!
//! ```text
//! Document
//!   → Element::Block    (Heading, Paragraph, Raw, Code, HorizontalRule, Quote, MdList, Table)
//!   → Element::Template (TableOfContents, CsvTable)
//! ```
//!
//! Every text-bearing element is built from [`Inline`] segments so that
//! styling survives until render time. Templates are resolved against the
//! finished document before anything is rendered, which lets a table of
//! contents list headings that appear after it.
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading from `mdgen.toml`.
//! - [`output`]: Writing rendered documents to disk in a chosen text
//!   encoding.
//! - [`manifest`]: Building documents from JSON, TOML or YAML descriptions.
//!
//! ## Quick Start
//!
//! ```rust
//! use mdgen_core::Document;
//! use mdgen_core::Inline;
//!
//! let mut document = Document::new();
//! document.add_heading("Why Use mdgen?", 1)?;
//! document
//! 	.add_paragraph("mdgen is a quick and easy way to generate markdown.")
//! 	.insert_link("markdown", "https://commonmark.org", Some(1));
//! document.add_unordered_list(["Fast", "Deterministic"]);
//! document.add_paragraph(Inline::new("Happy writing!").bold());
//!
//! assert_eq!(
//! 	document.render(),
//! 	"# Why Use mdgen?\n\nmdgen is a quick and easy way to generate \
//! 	 [markdown](https://commonmark.org).\n\n- Fast\n- Deterministic\n\n**Happy writing!**"
//! );
//! # Ok::<(), mdgen_core::MdgenError>(())
//! ```

pub use block::*;
pub use code::*;
pub use csv_table::*;
pub use document::*;
pub use error::*;
pub use heading::*;
pub use inline::*;
pub use list::*;
pub use paragraph::*;
pub use quote::*;
pub use table::*;
pub use template::*;

mod block;
mod code;
pub mod config;
mod csv_table;
mod document;
#[allow(unused_assignments)]
mod error;
mod heading;
mod inline;
mod list;
pub mod manifest;
pub mod output;
mod paragraph;
mod quote;
mod table;
mod template;

#[cfg(test)]
mod __fixtures;
