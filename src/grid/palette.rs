//! Legacy indexed color palette.

use crate::common::Color;

/// Revision of [`INDEXED_PALETTE`]. Bump when the table changes.
pub const PALETTE_VERSION: u32 = 1;

/// Index of the system foreground sentinel.
pub const SYSTEM_FOREGROUND: u32 = 64;

/// Index of the system background sentinel.
pub const SYSTEM_BACKGROUND: u32 = 65;

/// SpreadsheetML default `indexedColors` palette (0..=63), ARGB.
pub const INDEXED_PALETTE: [u32; 64] = [
    0xFF000000, 0xFFFFFFFF, 0xFFFF0000, 0xFF00FF00, 0xFF0000FF, 0xFFFFFF00, 0xFFFF00FF, 0xFF00FFFF,
    0xFF000000, 0xFFFFFFFF, 0xFFFF0000, 0xFF00FF00, 0xFF0000FF, 0xFFFFFF00, 0xFFFF00FF, 0xFF00FFFF,
    0xFF800000, 0xFF008000, 0xFF000080, 0xFF808000, 0xFF800080, 0xFF008080, 0xFFC0C0C0, 0xFF808080,
    0xFF9999FF, 0xFF993366, 0xFFFFFFCC, 0xFFCCFFFF, 0xFF660066, 0xFFFF8080, 0xFF0066CC, 0xFFCCCCFF,
    0xFF000080, 0xFFFF00FF, 0xFFFFFF00, 0xFF00FFFF, 0xFF800080, 0xFF800000, 0xFF008080, 0xFF0000FF,
    0xFF00CCFF, 0xFFCCFFFF, 0xFFCCFFCC, 0xFFFFFF99, 0xFF99CCFF, 0xFFFF99CC, 0xFFCC99FF, 0xFFFFCC99,
    0xFF3366FF, 0xFF33CCCC, 0xFF99CC00, 0xFFFFCC00, 0xFFFF9900, 0xFFFF6600, 0xFF666699, 0xFF969696,
    0xFF003366, 0xFF339966, 0xFF003300, 0xFF333300, 0xFF993300, 0xFF993366, 0xFF333399, 0xFF333333,
];

/// Palette color for an index.
///
/// The system sentinels (64, 65) and anything past the table have no color of
/// their own; the caller falls back to what the context implies.
#[inline]
pub fn indexed_color(index: u32) -> Option<Color> {
    INDEXED_PALETTE
        .get(index as usize)
        .map(|&argb| Color::from_argb(argb))
}
