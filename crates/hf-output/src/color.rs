//! RGB colors and the named palette offered on the command line.

use std::str::FromStr;

use crate::OutputError;

/// An 8-bit-per-channel RGB color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

static PALETTE: [(&str, Color); 6] = [
    ("white", Color::WHITE),
    ("black", Color::BLACK),
    ("red", Color::new(255, 0, 0)),
    ("green", Color::new(0, 255, 0)),
    ("blue", Color::new(0, 0, 255)),
    ("yellow", Color::new(255, 255, 0)),
];

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Names accepted by [`Color::from_str`], in palette order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        PALETTE.iter().map(|(name, _)| *name)
    }

    /// Move each channel `ratio` of the way toward 255.
    ///
    /// `ratio = 1` gives white, `ratio = 0` leaves the color unchanged.
    /// Channels truncate toward zero.
    pub fn lighten(self, ratio: f64) -> Color {
        let ratio = ratio.clamp(0.0, 1.0);
        let f = |v: u8| (v as f64 + ratio * (255.0 - v as f64)) as u8;
        Color::new(f(self.r), f(self.g), f(self.b))
    }

    /// Move each channel `ratio` of the way toward 0.
    ///
    /// `ratio = 1` gives black, `ratio = 0` leaves the color unchanged.
    pub fn darken(self, ratio: f64) -> Color {
        let ratio = ratio.clamp(0.0, 1.0);
        let f = |v: u8| (v as f64 - ratio * v as f64) as u8;
        Color::new(f(self.r), f(self.g), f(self.b))
    }

    #[inline]
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Color {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PALETTE
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, c)| *c)
            .ok_or_else(|| OutputError::UnknownColor(s.to_owned()))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
