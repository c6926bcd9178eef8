use crate::Inline;

/// A standalone block of text. Whitespace is not respected: every run of
/// spaces, tabs and newlines collapses into a single space when rendered. Use
/// [`Raw`](crate::Raw) when the exact layout matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
	segments: Vec<Inline>,
}

impl Paragraph {
	pub fn new<I, S>(segments: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<Inline>,
	{
		let paragraph = Self {
			segments: segments.into_iter().map(Into::into).collect(),
		};
		tracing::debug!(?paragraph, "created paragraph");
		paragraph
	}

	pub fn segments(&self) -> &[Inline] {
		&self.segments
	}

	/// Append a segment to the end of the paragraph.
	pub fn add(&mut self, segment: impl Into<Inline>) -> &mut Self {
		self.segments.push(segment.into());
		self
	}

	/// Replace occurrences of `target` inside plain-text segments with
	/// `replacement`. `count` limits the number of replacements; `None`
	/// replaces every occurrence.
	pub fn replace(&mut self, target: &str, replacement: &str, count: Option<usize>) -> &mut Self {
		self.replace_any(target, &Inline::new(replacement), count)
	}

	/// Turn occurrences of `target` inside plain-text segments into links to
	/// `link`. Text which is already linked is left alone; see
	/// [`Paragraph::replace_link`] for changing existing links.
	///
	/// ```
	/// use mdgen_core::Paragraph;
	///
	/// let mut paragraph = Paragraph::from("Go here for docs");
	/// paragraph.insert_link("here", "https://example.com", None);
	/// assert_eq!(paragraph.render(), "Go [here](https://example.com) for docs");
	/// ```
	pub fn insert_link(&mut self, target: &str, link: &str, count: Option<usize>) -> &mut Self {
		self.replace_any(target, &Inline::new(target).with_link(link), count)
	}

	/// Point segments linking to `target_link` at `replacement_link` instead,
	/// regardless of their anchor text.
	pub fn replace_link(
		&mut self,
		target_link: &str,
		replacement_link: &str,
		count: Option<usize>,
	) -> &mut Self {
		let mut remaining = count;

		for segment in &mut self.segments {
			if remaining == Some(0) {
				break;
			}

			if segment.link() == Some(target_link) {
				segment.set_link(replacement_link);
				remaining = remaining.map(|n| n - 1);
			}
		}

		self
	}

	/// Split plain-text segments around `target` and splice `replacement` in
	/// between. Pieces keep the styling of the segment they came from.
	fn replace_any(&mut self, target: &str, replacement: &Inline, count: Option<usize>) -> &mut Self {
		if target.is_empty() {
			return self;
		}

		let mut remaining = count;
		let mut segments = Vec::with_capacity(self.segments.len());

		for segment in self.segments.drain(..) {
			if !segment.is_text() || !segment.text().contains(target) {
				segments.push(segment);
				continue;
			}

			let mut pieces = segment.text().split(target);
			let mut pending = pieces.next().unwrap_or_default().to_string();

			for piece in pieces {
				if remaining == Some(0) {
					pending.push_str(target);
					pending.push_str(piece);
					continue;
				}

				if !pending.is_empty() {
					segments.push(restyle(&segment, std::mem::take(&mut pending)));
				}
				segments.push(replacement.clone());
				remaining = remaining.map(|n| n - 1);
				pending.push_str(piece);
			}

			if !pending.is_empty() {
				segments.push(restyle(&segment, pending));
			}
		}

		self.segments = segments;
		self
	}

	pub fn render(&self) -> String {
		let joined: String = self.segments.iter().map(Inline::render).collect();
		let paragraph = joined.split_whitespace().collect::<Vec<_>>().join(" ");
		tracing::debug!(rendered = %paragraph, "rendered paragraph");
		paragraph
	}
}

/// Build a new segment with `text` and the same emphasis styles as `source`.
fn restyle(source: &Inline, text: String) -> Inline {
	let mut inline = Inline::new(text);
	if source.is_bold() {
		inline = inline.bold();
	}
	if source.is_italic() {
		inline = inline.italicize();
	}
	if source.is_strikethrough() {
		inline = inline.strikethrough();
	}
	inline
}

impl From<&str> for Paragraph {
	fn from(text: &str) -> Self {
		Self::new([text])
	}
}

impl From<String> for Paragraph {
	fn from(text: String) -> Self {
		Self::new([text])
	}
}

impl From<&String> for Paragraph {
	fn from(text: &String) -> Self {
		Self::new([text.as_str()])
	}
}

impl From<Inline> for Paragraph {
	fn from(segment: Inline) -> Self {
		Self::new([segment])
	}
}
