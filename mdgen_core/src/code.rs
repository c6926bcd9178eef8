/// The language tag used when none is given.
pub const DEFAULT_CODE_LANG: &str = "generic";

/// The fence length of a code block that does not nest another one.
const BASE_FENCE_LENGTH: usize = 3;

/// The payload of a [`Code`] block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeBody {
	/// Preformatted source. Whitespace is preserved.
	Text(String),
	/// Another code block, rendered verbatim (fences included) inside this one.
	Nested(Box<Code>),
}

impl From<&str> for CodeBody {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

impl From<String> for CodeBody {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<Code> for CodeBody {
	fn from(code: Code) -> Self {
		Self::Nested(Box::new(code))
	}
}

/// A fenced code block.
///
/// Nesting one code block inside another grows the outer fence by one
/// backtick per level so the inner fences never terminate the outer block.
///
/// ```
/// use mdgen_core::Code;
///
/// let inner = Code::new("x = 5", "python");
/// let outer = Code::new(inner, "markdown");
/// assert_eq!(outer.render(), "````markdown\n```python\nx = 5\n```\n````");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
	body: CodeBody,
	lang: String,
}

impl Code {
	pub fn new(body: impl Into<CodeBody>, lang: impl Into<String>) -> Self {
		let code = Self {
			body: body.into(),
			lang: lang.into(),
		};
		tracing::debug!(?code, "created code block");
		code
	}

	/// A code block tagged with [`DEFAULT_CODE_LANG`].
	pub fn generic(body: impl Into<CodeBody>) -> Self {
		Self::new(body, DEFAULT_CODE_LANG)
	}

	pub fn body(&self) -> &CodeBody {
		&self.body
	}

	pub fn lang(&self) -> &str {
		&self.lang
	}

	/// Number of backticks in the opening and closing fence.
	pub fn fence_length(&self) -> usize {
		match &self.body {
			CodeBody::Text(_) => BASE_FENCE_LENGTH,
			CodeBody::Nested(inner) => inner.fence_length() + 1,
		}
	}

	pub fn render(&self) -> String {
		let fence = "`".repeat(self.fence_length());
		let body = match &self.body {
			CodeBody::Text(text) => text.clone(),
			CodeBody::Nested(inner) => inner.render(),
		};
		let code = format!("{fence}{}\n{body}\n{fence}", self.lang);
		tracing::debug!(rendered = %code, "rendered code block");
		code
	}
}
