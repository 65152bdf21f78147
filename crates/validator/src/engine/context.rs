//! Path bookkeeping for one traversal

use std::fmt;

use smallvec::SmallVec;

/// Stack of rendered path segments.
///
/// Segments already carry their separators (`"guest."`, `"list[2]"`), so the
/// path is rendered by plain concatenation.
///
/// # Examples
///
/// ```rust
/// use warden_validator::PathContext;
///
/// let mut path = PathContext::new();
/// path.push("guests[1].");
/// path.push("age");
/// assert_eq!(path.render(), "guests[1].age");
///
/// path.pop();
/// assert_eq!(path.render(), "guests[1].");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathContext {
    segments: SmallVec<[String; 8]>,
}

impl PathContext {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a segment onto the path.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Pops the last segment from the path.
    pub fn pop(&mut self) -> Option<String> {
        self.segments.pop()
    }

    /// Renders the current path.
    #[must_use]
    pub fn render(&self) -> String {
        self.segments.concat()
    }

    /// Number of pushed segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if no segment is pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for PathContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.segments.iter().try_for_each(|segment| f.write_str(segment))
    }
}
