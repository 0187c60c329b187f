//! Colors and the day-type color table.

use std::fmt;

use termcal_calendar::DayType;

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Pure white.
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    /// Pure black.
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to `0.0..=1.0`.
    pub fn to_unit(self) -> [f32; 3] {
        [self.r, self.g, self.b].map(|c| f32::from(c) / 255.0)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Cell background color for each [`DayType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    colors: [Rgb; 8],
}

impl Default for ColorTable {
    fn default() -> Self {
        // Weekend and Holiday stay white.
        Self {
            colors: [Rgb::WHITE; 8],
        }
        .with_color(DayType::A, Rgb::new(0xe7, 0x4c, 0x3c))
        .with_color(DayType::B, Rgb::new(0xf1, 0xc4, 0x0f))
        .with_color(DayType::C, Rgb::new(0x2e, 0xcc, 0x71))
        .with_color(DayType::Legal, Rgb::new(0x9b, 0x59, 0xb6))
        .with_color(DayType::Planning, Rgb::new(0xad, 0xd8, 0xe6))
        .with_color(DayType::Recess, Rgb::new(0xcc, 0xcc, 0xcc))
    }
}

impl ColorTable {
    /// Overrides the color of one category.
    pub fn with_color(mut self, day_type: DayType, color: Rgb) -> Self {
        self.colors[day_type as usize] = color;
        self
    }

    /// Returns the color of `day_type`.
    pub fn color(&self, day_type: DayType) -> Rgb {
        self.colors[day_type as usize]
    }

    /// Fill for a cell whose date may be unclassified; unclassified dates
    /// are white.
    pub fn fill(&self, day_type: Option<DayType>) -> Rgb {
        day_type.map_or(Rgb::WHITE, |t| self.color(t))
    }
}
