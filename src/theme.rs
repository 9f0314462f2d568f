//! Colour schemes for the snake's body
use crate::util::EnumExt;
use enum_map::Enum;
use ratatui::style::Color;
use serde::Deserialize;
use std::fmt;

/// Cosmetic colouring rule for the snake; has no effect on gameplay
#[derive(Clone, Copy, Debug, Default, Deserialize, Enum, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Theme {
    #[default]
    Pink,
    Green,
    Blue,
    Rainbow,
}

/// The colours cycled through by [`Theme::Rainbow`], starting from the head
const RAINBOW: [Color; 7] = [
    Color::Rgb(148, 0, 211),
    Color::Rgb(75, 0, 130),
    Color::Rgb(0, 0, 255),
    Color::Rgb(0, 255, 0),
    Color::Rgb(255, 255, 0),
    Color::Rgb(255, 127, 0),
    Color::Rgb(255, 0, 0),
];

impl Theme {
    /// Return the theme after this one in the cycle Pink → Green → Blue →
    /// Rainbow → Pink
    pub(crate) fn next(self) -> Theme {
        self.next_cyclic()
    }

    /// Return the colour of the snake segment at `index`, counting the head
    /// as zero
    pub(crate) fn segment_color(self, index: usize) -> Color {
        match self {
            Theme::Pink => Color::Rgb(255, 105, 180),
            Theme::Green => Color::Rgb(0, 255, 0),
            Theme::Blue => Color::Rgb(0, 150, 255),
            Theme::Rainbow => RAINBOW[index % RAINBOW.len()],
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Theme::Pink => "pink",
            Theme::Green => "green",
            Theme::Blue => "blue",
            Theme::Rainbow => "rainbow",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
