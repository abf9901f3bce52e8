//! Page geometry and document-wide font defaults.
//!
//! Every export starts from the same [`PageSetup`]: US letter, a single
//! ATS-safe font at 11pt, and margins reduced to 0.5" top/bottom and 0.75"
//! left/right so a full resume fits on one page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font family enum
// ────────────────────────────────────────────────────────────────────────────

/// Fonts that applicant tracking systems extract reliably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    /// Word's default body font since 2007.
    Calibri,
    Arial,
    Georgia,
    TimesNewRoman,
}

impl FontFamily {
    /// Name as written into `w:rFonts`.
    pub fn name(self) -> &'static str {
        match self {
            FontFamily::Calibri => "Calibri",
            FontFamily::Arial => "Arial",
            FontFamily::Georgia => "Georgia",
            FontFamily::TimesNewRoman => "Times New Roman",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported font '{0}' (expected Calibri, Arial, Georgia or Times New Roman)")]
pub struct UnknownFont(String);

impl FromStr for FontFamily {
    type Err = UnknownFont;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "calibri" => Ok(FontFamily::Calibri),
            "arial" => Ok(FontFamily::Arial),
            "georgia" => Ok(FontFamily::Georgia),
            "timesnewroman" | "times" => Ok(FontFamily::TimesNewRoman),
            _ => Err(UnknownFont(s.to_string())),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Page setup
// ────────────────────────────────────────────────────────────────────────────

/// Page and font defaults for one exported document.
///
/// Lengths are in inches, font sizes in points. The DOCX writer converts them
/// to twips and half-points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSetup {
    pub font: FontFamily,
    pub font_size_pt: f32,
    pub page_width_in: f32,
    pub page_height_in: f32,
    pub margin_top_in: f32,
    pub margin_bottom_in: f32,
    pub margin_left_in: f32,
    pub margin_right_in: f32,
}

/// Returns the export defaults for the given font family.
///
/// Assumes: US letter (8.5" × 11"), 11pt body text, 0.5" top/bottom and
/// 0.75" left/right margins.
pub fn default_page_setup(font: FontFamily) -> PageSetup {
    PageSetup {
        font,
        font_size_pt: 11.0,
        page_width_in: 8.5,
        page_height_in: 11.0,
        margin_top_in: 0.5,
        margin_bottom_in: 0.5,
        margin_left_in: 0.75,
        margin_right_in: 0.75,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_setup_uses_narrow_margins() {
        let setup = default_page_setup(FontFamily::Calibri);
        assert_eq!(setup.font_size_pt, 11.0);
        assert_eq!(setup.margin_top_in, 0.5);
        assert_eq!(setup.margin_bottom_in, 0.5);
        assert_eq!(setup.margin_left_in, 0.75);
        assert_eq!(setup.margin_right_in, 0.75);
    }

    #[test]
    fn test_font_parsing_is_lenient() {
        assert_eq!("calibri".parse::<FontFamily>().unwrap(), FontFamily::Calibri);
        assert_eq!(
            "Times New Roman".parse::<FontFamily>().unwrap(),
            FontFamily::TimesNewRoman
        );
        assert_eq!(
            "times_new_roman".parse::<FontFamily>().unwrap(),
            FontFamily::TimesNewRoman
        );
        assert_eq!(" ARIAL ".parse::<FontFamily>().unwrap(), FontFamily::Arial);
    }

    #[test]
    fn test_unknown_font_rejected() {
        let err = "Comic Sans".parse::<FontFamily>().unwrap_err();
        assert!(err.to_string().contains("Comic Sans"));
    }

    #[test]
    fn test_font_display_matches_docx_name() {
        assert_eq!(FontFamily::TimesNewRoman.to_string(), "Times New Roman");
    }
}
