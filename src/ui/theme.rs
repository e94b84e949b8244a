use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub accent: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub spinner: ColorSpec,
    pub toggle: ColorSpec,
    pub footer: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Names of the built-in palettes.
    ///
    pub const NAMES: [&'static str; 2] = ["tokyo-night", "rose-pine-dawn"];

    /// Look up a built-in palette by name.
    ///
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            _ => None,
        }
    }

    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec::new(122, 162, 247), // Blue
            accent: ColorSpec::new(187, 154, 247),  // Purple
            text: ColorSpec::new(192, 202, 245),
            text_muted: ColorSpec::new(86, 95, 137),
            border_active: ColorSpec::new(122, 162, 247),
            border_normal: ColorSpec::new(59, 66, 97),
            spinner: ColorSpec::new(125, 207, 255), // Cyan
            toggle: ColorSpec::new(224, 175, 104),  // Orange
            footer: ColorSpec::new(169, 177, 214),
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: ColorSpec::new(40, 105, 131), // Pine
            accent: ColorSpec::new(144, 122, 169), // Iris
            text: ColorSpec::new(87, 82, 121),
            text_muted: ColorSpec::new(152, 147, 165),
            border_active: ColorSpec::new(40, 105, 131),
            border_normal: ColorSpec::new(223, 218, 217),
            spinner: ColorSpec::new(86, 148, 159), // Foam
            toggle: ColorSpec::new(234, 157, 52),  // Gold
            footer: ColorSpec::new(121, 117, 147),
        }
    }
}
