use std::fmt;

/// Separator between path segments.
pub const DELIMITER: char = '/';

/// A lookup path with its empty segments removed.
///
/// Leading, trailing and repeated delimiters carry no meaning, so
/// `"/a//b/"` and `"a/b"` parse to the same segments. A path with no
/// segments at all (including `""` and `"///"`) addresses the root itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SegmentPath<'p> {
    segments: Vec<&'p str>,
}

impl<'p> SegmentPath<'p> {
    /// Split `raw` on [`DELIMITER`] and keep the non-empty pieces in order.
    ///
    /// Segments are not trimmed or case-folded: `" a "` stays `" a "`.
    pub fn parse(raw: &'p str) -> Self {
        let segments = raw.split(DELIMITER).filter(|s| !s.is_empty()).collect();
        SegmentPath { segments }
    }

    pub fn segments(&self) -> &[&'p str] {
        &self.segments
    }

    /// True when the path selects the root value.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Same as [`SegmentPath::is_root`]: no segments left after parsing.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'p str> + '_ {
        self.segments.iter().copied()
    }
}

impl fmt::Display for SegmentPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", DELIMITER)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl<'p> From<&'p str> for SegmentPath<'p> {
    fn from(raw: &'p str) -> Self {
        SegmentPath::parse(raw)
    }
}
