use serde::{Deserialize, Serialize};
use std::fmt;

/// ARGB color representation.
///
/// Represents a color using alpha, red, green, and blue components, each in
/// the range 0-255. Spreadsheet colors are stored alpha-first (`AARRGGBB`).
///
/// # Examples
///
/// ```rust
/// use sheetgrid::common::Color;
///
/// // Create an opaque red color
/// let red = Color::new(255, 0, 0);
/// assert_eq!(red.to_hex(), "FF0000");
///
/// // Parse an alpha-first hex string
/// let blue = Color::from_hex("800000FF").unwrap();
/// assert_eq!(blue.a, 0x80);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Alpha component (0-255, 255 is opaque)
    pub a: u8,
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::new(0, 0, 0);

    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::with_alpha(0, 0, 0, 0);

    /// Create a new opaque color.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sheetgrid::common::Color;
    ///
    /// let color = Color::new(255, 128, 0); // Orange
    /// assert_eq!(color.a, 255);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { a: 0xFF, r, g, b }
    }

    /// Create a color with an explicit alpha component.
    #[inline]
    pub const fn with_alpha(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Create a color from a packed `0xAARRGGBB` value.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Pack into a `0xAARRGGBB` value.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Create a color from a hex string.
    ///
    /// Accepts `RRGGBB` (opaque) or alpha-first `AARRGGBB`, with or without a
    /// leading `#`. Anything else yields `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sheetgrid::common::Color;
    ///
    /// assert_eq!(Color::from_hex("#FF0000"), Some(Color::new(255, 0, 0)));
    /// assert_eq!(Color::from_hex("FF00FF00"), Some(Color::new(0, 255, 0)));
    /// assert_eq!(Color::from_hex("red"), None);
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        match hex.len() {
            6 => u32::from_str_radix(hex, 16)
                .ok()
                .map(|rgb| Self::from_argb(0xFF00_0000 | rgb)),
            8 => u32::from_str_radix(hex, 16).ok().map(Self::from_argb),
            _ => None,
        }
    }

    /// Convert to an `RRGGBB` hex string (without # prefix).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sheetgrid::common::Color;
    ///
    /// let color = Color::new(255, 0, 0);
    /// assert_eq!(color.to_hex(), "FF0000");
    /// ```
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Convert to an alpha-first `AARRGGBB` hex string (without # prefix).
    pub fn to_argb_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }

    /// Hex string in the requested width: 6 digits, or 8 alpha-first digits.
    #[inline]
    pub fn hex(&self, with_alpha: bool) -> String {
        if with_alpha {
            self.to_argb_hex()
        } else {
            self.to_hex()
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}
