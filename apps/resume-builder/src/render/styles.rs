//! Fixed text styles used by every renderer.

pub const FONT_NAME: &str = "Times New Roman";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub bold: bool,
    pub font_name: &'static str,
    pub size_pt: u32,
}

impl TextStyle {
    const fn regular(size_pt: u32) -> Self {
        Self {
            bold: false,
            font_name: FONT_NAME,
            size_pt,
        }
    }

    const fn bold(size_pt: u32) -> Self {
        Self {
            bold: true,
            font_name: FONT_NAME,
            size_pt,
        }
    }

    /// Word measures run size in half-points.
    pub fn half_points(&self) -> usize {
        self.size_pt as usize * 2
    }
}

pub const NAME: TextStyle = TextStyle::regular(18);
pub const LINKS: TextStyle = TextStyle::regular(14);
pub const POINT: TextStyle = TextStyle::regular(12);
pub const POINT_HEADING: TextStyle = TextStyle::bold(12);
pub const SECTION_HEADING: TextStyle = TextStyle::bold(13);

/// Page margins in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMargins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

pub const PAGE_MARGINS: PageMargins = PageMargins {
    top: 0.437,
    right: 0.5,
    bottom: 0.287,
    left: 0.5,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_points() {
        assert_eq!(NAME.half_points(), 36);
        assert_eq!(SECTION_HEADING.half_points(), 26);
        assert_eq!(POINT.half_points(), 24);
    }

    #[test]
    fn test_only_headings_are_bold() {
        assert!(POINT_HEADING.bold && SECTION_HEADING.bold);
        assert!(!NAME.bold && !LINKS.bold && !POINT.bold);
    }
}
