use crate::Inline;
use crate::MdgenError;
use crate::MdgenResult;

/// The lowest heading level (`#`).
pub const MIN_HEADING_LEVEL: u8 = 1;
/// The highest heading level (`######`).
pub const MAX_HEADING_LEVEL: u8 = 6;

/// A section title rendered with one `#` per level.
///
/// ```
/// use mdgen_core::Heading;
///
/// let heading = Heading::new("Usage", 2)?;
/// assert_eq!(heading.render(), "## Usage");
/// # Ok::<(), mdgen_core::MdgenError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
	segments: Vec<Inline>,
	level: u8,
}

impl Heading {
	/// Create a heading from a single text segment.
	pub fn new(text: impl Into<Inline>, level: u8) -> MdgenResult<Self> {
		Self::from_segments([text.into()], level)
	}

	/// Create a heading from several segments, giving finer control over the
	/// styling of each part.
	pub fn from_segments<I, S>(segments: I, level: u8) -> MdgenResult<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<Inline>,
	{
		if !(MIN_HEADING_LEVEL..=MAX_HEADING_LEVEL).contains(&level) {
			return Err(MdgenError::InvalidHeadingLevel(level));
		}

		let heading = Self {
			segments: segments.into_iter().map(Into::into).collect(),
			level,
		};
		tracing::debug!(?heading, "created heading");

		Ok(heading)
	}

	/// Move the heading one level up (towards `#`). Saturates at level 1.
	pub fn promote(&mut self) -> &mut Self {
		if self.level > MIN_HEADING_LEVEL {
			self.level -= 1;
		}
		self
	}

	/// Move the heading one level down (towards `######`). Saturates at
	/// level 6.
	pub fn demote(&mut self) -> &mut Self {
		if self.level < MAX_HEADING_LEVEL {
			self.level += 1;
		}
		self
	}

	pub fn level(&self) -> u8 {
		self.level
	}

	pub fn segments(&self) -> &[Inline] {
		&self.segments
	}

	/// The heading text without any styling or links.
	pub fn text(&self) -> String {
		self.segments.iter().map(Inline::text).collect()
	}

	pub fn render(&self) -> String {
		let text: String = self.segments.iter().map(Inline::render).collect();
		let heading = format!("{} {text}", "#".repeat(usize::from(self.level)));
		tracing::debug!(rendered = %heading, "rendered heading");
		heading
	}
}
