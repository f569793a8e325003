//! Theme configuration.
//!
//! A theme is a structured document with `palette`, `typography`, `layout`
//! and `components` sections. It feeds the shared stylesheet and nothing
//! else; every section and field may be omitted and falls back to the
//! built-in look. Themes are plain values threaded through the render
//! pipeline — there is no global configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A complete theme document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Color palette.
    pub palette: Palette,
    /// Fonts and text sizes.
    pub typography: Typography,
    /// Slide geometry.
    pub layout: LayoutConfig,
    /// Component-specific styling.
    pub components: Components,
}

impl Theme {
    /// Parse a theme from its JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Theme(e.to_string()))
    }
}

/// Theme color palette.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Brand colors.
    pub primary: PrimaryColors,
    /// Functional colors.
    pub functional: FunctionalColors,
}

/// Brand colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimaryColors {
    /// Main brand color; used for the slide title.
    pub main: String,
    /// Secondary brand color; used for headings and accents.
    pub secondary: String,
}

impl Default for PrimaryColors {
    fn default() -> Self {
        Self {
            main: "#F4F0E8".to_string(),
            secondary: "#AB955F".to_string(),
        }
    }
}

/// Functional colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionalColors {
    /// Slide background.
    pub background: String,
    /// Body text color.
    pub text: String,
    /// Text color on dark surfaces.
    pub text_inverse: String,
    /// Positive accent; also the strong-emphasis color.
    pub success: String,
    /// Warning accent.
    pub warning: String,
}

impl Default for FunctionalColors {
    fn default() -> Self {
        Self {
            background: "#FFFFFF".to_string(),
            text: "#4A4A3E".to_string(),
            text_inverse: "#F4F0E8".to_string(),
            success: "#648651".to_string(),
            warning: "#C77D2E".to_string(),
        }
    }
}

/// Fonts and text sizes. Sizes are complete CSS values including units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    /// Font family stacks.
    pub font_family: FontFamily,
    /// Text sizes.
    pub sizes: FontSizes,
    /// Line heights.
    pub line_height: LineHeight,
}

/// Font family stacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontFamily {
    /// Body font stack.
    pub base: String,
    /// Heading font stack.
    pub heading: String,
}

impl FontFamily {
    /// First family of the base stack, stripped of quotes. This is what a
    /// renderer without CSS font fallback should use.
    pub fn base_primary(&self) -> String {
        self.base
            .split(',')
            .next()
            .unwrap_or(&self.base)
            .trim()
            .trim_matches(|c| c == '\'' || c == '"')
            .to_string()
    }
}

impl Default for FontFamily {
    fn default() -> Self {
        Self {
            base: "'Noto Sans JP', sans-serif".to_string(),
            heading: "'Noto Sans JP', sans-serif".to_string(),
        }
    }
}

/// Text sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    /// Slide title size.
    pub slide_title: String,
    /// Section heading size.
    pub section_header: String,
    /// Body text size.
    pub body: String,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            slide_title: "24pt".to_string(),
            section_header: "16pt".to_string(),
            body: "11pt".to_string(),
        }
    }
}

/// Line heights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineHeight {
    /// Base line height multiplier.
    pub base: f32,
}

impl Default for LineHeight {
    fn default() -> Self {
        Self { base: 1.5 }
    }
}

/// Slide geometry, in points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Slide dimensions.
    pub slide: SlideGeometry,
    /// Header region.
    pub header: HeaderGeometry,
    /// Content region.
    pub content: ContentGeometry,
}

/// Slide dimensions (16:9 by default).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideGeometry {
    /// Width in points.
    pub width_pt: f32,
    /// Height in points.
    pub height_pt: f32,
}

impl Default for SlideGeometry {
    fn default() -> Self {
        Self {
            width_pt: 720.0,
            height_pt: 405.0,
        }
    }
}

/// Header region geometry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderGeometry {
    /// Title box position.
    pub title: TitleGeometry,
}

/// Title box position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleGeometry {
    /// Left offset in points.
    pub x_pt: f32,
    /// Top offset in points.
    pub y_pt: f32,
}

impl Default for TitleGeometry {
    fn default() -> Self {
        Self {
            x_pt: 30.0,
            y_pt: 18.0,
        }
    }
}

/// Content region geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentGeometry {
    /// Left offset in points.
    pub x_pt: f32,
    /// Top offset in points.
    pub y_pt: f32,
    /// Width in points.
    pub w_pt: f32,
    /// Height in points.
    pub h_pt: f32,
}

impl Default for ContentGeometry {
    fn default() -> Self {
        Self {
            x_pt: 30.0,
            y_pt: 70.0,
            w_pt: 660.0,
            h_pt: 320.0,
        }
    }
}

/// Component-specific styling.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Components {
    /// Styled box defaults.
    #[serde(rename = "box")]
    pub boxed: BoxStyle,
}

/// Styled box defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxStyle {
    /// Box background color.
    pub background_color: String,
    /// Left border width in points.
    pub border_left_width_pt: f32,
    /// Inner padding in points.
    pub padding_pt: f32,
    /// CSS box shadow.
    pub shadow: String,
    /// Gap between items inside the box, in points.
    pub inner_gap_pt: Option<f32>,
}

impl BoxStyle {
    /// Inner gap with its fallback applied.
    pub fn inner_gap(&self) -> f32 {
        self.inner_gap_pt.unwrap_or(8.0)
    }
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            background_color: "#FAF9F5".to_string(),
            border_left_width_pt: 3.0,
            padding_pt: 10.0,
            shadow: "1pt 1pt 3pt rgba(0,0,0,0.08)".to_string(),
            inner_gap_pt: None,
        }
    }
}
