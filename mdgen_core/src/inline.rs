use std::fmt;

/// The basic unit of styled text. Every element that contains text is built
/// from `Inline` segments rather than bare strings so that styling survives
/// until render time.
///
/// Styles are applied in a fixed order regardless of which ones are set:
/// image, link, bold, italics, strikethrough and finally code. An inline that
/// is both a link and code therefore renders as `` `[text](target)` ``.
///
/// ```
/// use mdgen_core::Inline;
///
/// let inline = Inline::new("docs").bold().with_link("https://example.com");
/// assert_eq!(inline.render(), "**[docs](https://example.com)**");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inline {
	text: String,
	image: Option<String>,
	link: Option<String>,
	bold: bool,
	italics: bool,
	strikethrough: bool,
	code: bool,
}

impl Inline {
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			..Self::default()
		}
	}

	/// Render this segment as an image with the given source.
	pub fn with_image(mut self, source: impl Into<String>) -> Self {
		self.image = Some(source.into());
		self
	}

	pub fn without_image(mut self) -> Self {
		self.image = None;
		self
	}

	/// Wrap this segment in a link to `target`.
	pub fn with_link(mut self, target: impl Into<String>) -> Self {
		self.link = Some(target.into());
		self
	}

	pub fn without_link(mut self) -> Self {
		self.link = None;
		self
	}

	pub fn bold(mut self) -> Self {
		self.bold = true;
		self
	}

	pub fn unbold(mut self) -> Self {
		self.bold = false;
		self
	}

	pub fn italicize(mut self) -> Self {
		self.italics = true;
		self
	}

	pub fn unitalicize(mut self) -> Self {
		self.italics = false;
		self
	}

	pub fn strikethrough(mut self) -> Self {
		self.strikethrough = true;
		self
	}

	pub fn unstrikethrough(mut self) -> Self {
		self.strikethrough = false;
		self
	}

	pub fn code(mut self) -> Self {
		self.code = true;
		self
	}

	pub fn uncode(mut self) -> Self {
		self.code = false;
		self
	}

	/// Remove every style, link and image, keeping only the text.
	pub fn reset(self) -> Self {
		Self::new(self.text)
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn link(&self) -> Option<&str> {
		self.link.as_deref()
	}

	pub fn image(&self) -> Option<&str> {
		self.image.as_deref()
	}

	pub fn is_bold(&self) -> bool {
		self.bold
	}

	pub fn is_italic(&self) -> bool {
		self.italics
	}

	pub fn is_strikethrough(&self) -> bool {
		self.strikethrough
	}

	pub fn is_code(&self) -> bool {
		self.code
	}

	pub fn is_link(&self) -> bool {
		self.link.is_some()
	}

	/// Returns true when this segment is plain text, i.e. not code, an image
	/// or a link. Emphasis styles do not count.
	pub fn is_text(&self) -> bool {
		!(self.code || self.image.is_some() || self.link.is_some())
	}

	pub(crate) fn set_link(&mut self, target: impl Into<String>) {
		self.link = Some(target.into());
	}

	pub fn render(&self) -> String {
		let mut text = self.text.clone();

		if let Some(image) = &self.image {
			text = format!("![{text}]({image})");
		}
		if let Some(link) = &self.link {
			text = format!("[{text}]({link})");
		}
		if self.bold {
			text = format!("**{text}**");
		}
		if self.italics {
			text = format!("_{text}_");
		}
		if self.strikethrough {
			text = format!("~~{text}~~");
		}
		if self.code {
			text = format!("`{text}`");
		}

		tracing::trace!(rendered = %text, "rendered inline text");
		text
	}
}

impl fmt::Display for Inline {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}

impl From<&str> for Inline {
	fn from(text: &str) -> Self {
		Self::new(text)
	}
}

impl From<String> for Inline {
	fn from(text: String) -> Self {
		Self::new(text)
	}
}

impl From<&String> for Inline {
	fn from(text: &String) -> Self {
		Self::new(text.as_str())
	}
}
