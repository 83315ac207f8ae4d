//! Active-section lookup for the navigation highlighter

/// Vertical extent of a `section[id]`, in document pixels
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open `[top, top + height)`
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Section under the probe line `scroll_y + offset`.
///
/// Sections are given in document order; when several overlap the probe the
/// last one wins. `None` means nothing is under the probe and the current
/// highlight should stay as it is.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<&str> {
    let probe = scroll_y + offset;
    sections
        .iter()
        .rev()
        .find(|s| s.contains(probe))
        .map(|s| s.id.as_str())
}

/// `href` of the nav link pointing at a section
pub fn link_href(section_id: &str) -> String {
    format!("#{section_id}")
}
