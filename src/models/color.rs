//! Color math for palettes.
//!
//! Colors are stored as 8-bit sRGB and converted through the `palette` crate
//! whenever HSL or linear-light values are needed.

use crate::models::error::PaletteError;
use palette::{FromColor, Hsl, LinSrgb, Mix, Srgb};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// An 8-bit sRGB color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Lowercase `#rrggbb` form
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    fn to_srgb(self) -> Srgb {
        Srgb::new(self.red, self.green, self.blue).into_format()
    }

    fn from_srgb(rgb: Srgb) -> Self {
        let rgb: Srgb<u8> = rgb.into_format();
        Self::new(rgb.red, rgb.green, rgb.blue)
    }

    /// Decomposes the color into hue (degrees in `[0, 360)`), saturation and lightness.
    pub fn to_hsl(self) -> HslOffsets {
        let hsl: Hsl = Hsl::from_color(self.to_srgb());
        HslOffsets {
            hue: hsl.hue.into_positive_degrees(),
            saturation: hsl.saturation,
            lightness: hsl.lightness,
        }
    }

    pub fn from_hsl(values: HslOffsets) -> Self {
        let hsl: Hsl = Hsl::new(values.hue, values.saturation, values.lightness);
        Self::from_srgb(Srgb::from_color(hsl))
    }

    /// WCAG relative luminance in `[0, 1]`.
    pub fn luminance(self) -> f32 {
        let lin: LinSrgb = self.to_srgb().into_linear();
        0.2126 * lin.red + 0.7152 * lin.green + 0.0722 * lin.blue
    }

    pub fn contrast_text(self) -> TextTone {
        TextTone::for_luminance(self.luminance())
    }

    /// Interpolates towards `other` in sRGB space.
    pub fn mix(self, other: Color, factor: f32) -> Color {
        let factor = factor.clamp(0.0, 1.0);
        Self::from_srgb(self.to_srgb().mix(other.to_srgb(), factor))
    }

    fn with_channel(self, channel: Channel, value: f32) -> Color {
        let mut hsl = self.to_hsl();
        hsl.set(channel, value);
        Color::from_hsl(hsl)
    }

    /// Gradient stops for a saturation slider: fully desaturated to fully saturated.
    pub fn saturation_scale(self) -> [Color; 2] {
        [
            self.with_channel(Channel::Saturation, 0.0),
            self.with_channel(Channel::Saturation, 1.0),
        ]
    }

    /// Gradient stops for a lightness slider: black, the color at half lightness, white.
    pub fn lightness_scale(self) -> [Color; 3] {
        [
            Color::BLACK,
            self.with_channel(Channel::Lightness, 0.5),
            Color::WHITE,
        ]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl FromStr for Color {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !matches!(digits.len(), 3 | 6) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(PaletteError::InvalidHex(s.to_string()));
        }

        let rgb: Srgb<u8> = digits
            .parse()
            .map_err(|_| PaletteError::InvalidHex(s.to_string()))?;
        Ok(Self::new(rgb.red, rgb.green, rgb.blue))
    }
}

impl TryFrom<String> for Color {
    type Error = PaletteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.hex()
    }
}

/// Draws a color with every 8-bit channel uniformly random.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::new(
        rng.gen_range(0..=u8::MAX),
        rng.gen_range(0..=u8::MAX),
        rng.gen_range(0..=u8::MAX),
    )
}

/// Text color that stays readable on a given background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTone {
    Black,
    White,
}

impl TextTone {
    /// Black strictly above 0.5 luminance, white otherwise.
    pub fn for_luminance(luminance: f32) -> Self {
        if luminance > 0.5 {
            TextTone::Black
        } else {
            TextTone::White
        }
    }

    pub fn color(self) -> Color {
        match self {
            TextTone::Black => Color::BLACK,
            TextTone::White => Color::WHITE,
        }
    }
}

/// One of the three adjustable HSL channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Hue,
    Saturation,
    Lightness,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Hue, Channel::Saturation, Channel::Lightness];

    pub fn range(self) -> RangeInclusive<f32> {
        match self {
            Channel::Hue => 0.0..=360.0,
            Channel::Saturation | Channel::Lightness => 0.0..=1.0,
        }
    }

    pub fn contains(self, value: f32) -> bool {
        self.range().contains(&value)
    }

    pub fn clamp(self, value: f32) -> f32 {
        let range = self.range();
        value.clamp(*range.start(), *range.end())
    }

    pub fn label(self) -> &'static str {
        match self {
            Channel::Hue => "Hue",
            Channel::Saturation => "Saturation",
            Channel::Lightness => "Brightness",
        }
    }

    pub fn next(self) -> Channel {
        match self {
            Channel::Hue => Channel::Saturation,
            Channel::Saturation => Channel::Lightness,
            Channel::Lightness => Channel::Hue,
        }
    }

    pub fn previous(self) -> Channel {
        match self {
            Channel::Hue => Channel::Lightness,
            Channel::Saturation => Channel::Hue,
            Channel::Lightness => Channel::Saturation,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Hue => "hue",
            Channel::Saturation => "saturation",
            Channel::Lightness => "lightness",
        };
        f.write_str(name)
    }
}

/// Per-channel HSL values of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HslOffsets {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl HslOffsets {
    pub fn get(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Hue => self.hue,
            Channel::Saturation => self.saturation,
            Channel::Lightness => self.lightness,
        }
    }

    pub fn set(&mut self, channel: Channel, value: f32) {
        match channel {
            Channel::Hue => self.hue = value,
            Channel::Saturation => self.saturation = value,
            Channel::Lightness => self.lightness = value,
        }
    }
}

/// Fixed rainbow behind the hue slider.
pub const HUE_SCALE: [Color; 7] = [
    Color::new(204, 75, 75),
    Color::new(204, 204, 75),
    Color::new(75, 204, 75),
    Color::new(75, 204, 204),
    Color::new(75, 75, 204),
    Color::new(204, 75, 204),
    Color::new(204, 75, 75),
];

/// Samples evenly spaced gradient stops at `t` in `[0, 1]`.
pub fn sample_scale(stops: &[Color], t: f32) -> Color {
    match stops {
        [] => Color::BLACK,
        [only] => *only,
        _ => {
            let position = t.clamp(0.0, 1.0) * (stops.len() - 1) as f32;
            let index = (position.floor() as usize).min(stops.len() - 2);
            stops[index].mix(stops[index + 1], position - index as f32)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn hex(s: &str) -> Color {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_format_hex() {
        assert_eq!(hex("#FF8000"), Color::new(255, 128, 0));
        assert_eq!(hex("ff8000").hex(), "#ff8000");
        assert_eq!(hex("#abc"), Color::new(0xaa, 0xbb, 0xcc));
        assert_eq!(Color::new(1, 2, 3).to_string(), "#010203");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "#", "#12345", "#gg0000", "+f0000", "#ff00001", "red"] {
            assert!(
                matches!(bad.parse::<Color>(), Err(PaletteError::InvalidHex(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::new(255, 0, 16)).unwrap();
        assert_eq!(json, "\"#ff0010\"");

        let color: Color = serde_json::from_str("\"#00FF00\"").unwrap();
        assert_eq!(color, Color::new(0, 255, 0));
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }

    #[test]
    fn test_hsl_decomposition() {
        let red = hex("#ff0000").to_hsl();
        assert!(red.hue.abs() < 0.01);
        assert!((red.saturation - 1.0).abs() < 0.001);
        assert!((red.lightness - 0.5).abs() < 0.001);

        let blue = hex("#0000ff").to_hsl();
        assert!((blue.hue - 240.0).abs() < 0.01);
    }

    #[test]
    fn test_hsl_round_trip() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let color = random_color(&mut rng);
            assert_eq!(Color::from_hsl(color.to_hsl()), color);
        }
    }

    #[test]
    fn test_from_hsl() {
        let cyan = Color::from_hsl(HslOffsets {
            hue: 180.0,
            saturation: 1.0,
            lightness: 0.5,
        });
        assert_eq!(cyan, hex("#00ffff"));

        let wrapped = Color::from_hsl(HslOffsets {
            hue: 360.0,
            saturation: 1.0,
            lightness: 0.5,
        });
        assert_eq!(wrapped, hex("#ff0000"));
    }

    #[test]
    fn test_luminance() {
        assert!(Color::BLACK.luminance().abs() < 1e-6);
        assert!((Color::WHITE.luminance() - 1.0).abs() < 1e-4);
        assert!((hex("#00ff00").luminance() - 0.7152).abs() < 1e-3);
        assert!((hex("#ff0000").luminance() - 0.2126).abs() < 1e-3);
    }

    #[test]
    fn test_contrast_boundary() {
        assert_eq!(TextTone::for_luminance(0.5), TextTone::White);
        assert_eq!(TextTone::for_luminance(0.500_001), TextTone::Black);
        assert_eq!(TextTone::for_luminance(0.0), TextTone::White);
        assert_eq!(TextTone::for_luminance(1.0), TextTone::Black);
    }

    #[test]
    fn test_contrast_text_matches_luminance() {
        assert_eq!(Color::WHITE.contrast_text(), TextTone::Black);
        assert_eq!(Color::BLACK.contrast_text(), TextTone::White);
        assert_eq!(hex("#00ff00").contrast_text(), TextTone::Black);
        assert_eq!(hex("#0000ff").contrast_text(), TextTone::White);

        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let color = random_color(&mut rng);
            let expected = if color.luminance() > 0.5 {
                TextTone::Black
            } else {
                TextTone::White
            };
            assert_eq!(color.contrast_text(), expected);
        }
    }

    #[test]
    fn test_channel_ranges() {
        assert!(Channel::Hue.contains(360.0));
        assert!(!Channel::Hue.contains(-0.1));
        assert!(!Channel::Saturation.contains(1.01));
        assert!(!Channel::Lightness.contains(f32::NAN));
        assert_eq!(Channel::Saturation.clamp(3.0), 1.0);
        assert_eq!(Channel::Hue.next().previous(), Channel::Hue);
    }

    #[test]
    fn test_slider_scales() {
        let color = hex("#cc3333");
        let [grey, vivid] = color.saturation_scale();
        assert_eq!(grey.red, grey.green);
        assert_eq!(grey.green, grey.blue);
        assert!(vivid.to_hsl().saturation > 0.99);

        let [dark, mid, light] = color.lightness_scale();
        assert_eq!(dark, Color::BLACK);
        assert_eq!(light, Color::WHITE);
        assert!((mid.to_hsl().lightness - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_sample_scale() {
        let stops = [Color::BLACK, Color::WHITE];
        assert_eq!(sample_scale(&stops, 0.0), Color::BLACK);
        assert_eq!(sample_scale(&stops, 1.0), Color::WHITE);
        assert_eq!(sample_scale(&stops, 2.0), Color::WHITE);
        assert_eq!(sample_scale(&HUE_SCALE, 0.0), HUE_SCALE[0]);
        assert_eq!(sample_scale(&HUE_SCALE, 1.0), HUE_SCALE[6]);
        assert_eq!(sample_scale(&[hex("#123456")], 0.3), hex("#123456"));
    }
}
