//! Display glyphs and colors for access outcomes.

use console::{Color, Style};

use crate::constants;
use crate::types::AccessOutcome;

/// Terminal independent color of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorCategory {
    #[default]
    None,
    Green,
    Red,
    Purple,
}

impl ColorCategory {
    /// Foreground style wrapping a cell of this color, `None` for uncolored cells.
    ///
    /// Styling is forced on: whether to color at all is decided by the caller.
    pub fn style(self) -> Option<Style> {
        let color = match self {
            ColorCategory::None => return None,
            ColorCategory::Green => Color::Green,
            ColorCategory::Red => Color::Red,
            ColorCategory::Purple => Color::Magenta,
        };
        Some(Style::new().fg(color).force_styling(true))
    }
}

pub fn glyph(outcome: AccessOutcome) -> &'static str {
    match outcome {
        AccessOutcome::Allowed => constants::ALLOWED_GLYPH,
        AccessOutcome::Denied => constants::DENIED_GLYPH,
        AccessOutcome::NotApplicable => constants::NOT_APPLICABLE_GLYPH,
        AccessOutcome::RequestError => constants::REQUEST_ERROR_GLYPH,
    }
}

pub fn color_category(outcome: AccessOutcome) -> ColorCategory {
    match outcome {
        AccessOutcome::Allowed => ColorCategory::Green,
        AccessOutcome::Denied => ColorCategory::Red,
        AccessOutcome::NotApplicable => ColorCategory::None,
        AccessOutcome::RequestError => ColorCategory::Purple,
    }
}
