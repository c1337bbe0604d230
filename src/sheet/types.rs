//! Raw worksheet descriptors.
//!
//! These are the per-cell presentation records a spreadsheet reader produces
//! before any resolution happens: colors are still references, border sides
//! are still line-style enums and merge ranges are still sheet-absolute.

use crate::common::{Color, Side};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Default column width in character units when a sheet does not declare one.
pub const DEFAULT_COLUMN_WIDTH: f64 = 8.43;

/// Default row height in points when a sheet does not declare one.
pub const DEFAULT_ROW_HEIGHT: f64 = 15.0;

/// Types of data that can be stored in a cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum CellValue {
    /// Empty cell
    #[default]
    Empty,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// String value
    String(String),
    /// Error value (e.g. `#DIV/0!`)
    Error(String),
}

impl CellValue {
    /// Check if the value is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(true) => f.write_str("TRUE"),
            CellValue::Bool(false) => f.write_str("FALSE"),
            CellValue::Int(i) => write!(f, "{}", i),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::String(s) | CellValue::Error(s) => f.write_str(s),
        }
    }
}

/// A sheet-absolute cell coordinate (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellRef {
    /// Row number (1-based)
    pub row: u32,
    /// Column number (1-based)
    pub col: u32,
}

impl CellRef {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// A color reference as stored in the workbook, before resolution.
///
/// A missing color is represented by `Option::<ColorRef>::None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColorRef {
    /// Index into the legacy indexed palette
    Indexed(u32),
    /// Literal `RRGGBB` or `AARRGGBB` hex value with a tint
    Rgb {
        hex: String,
        #[serde(default)]
        tint: f64,
    },
    /// Index into the workbook theme with a tint
    Theme {
        index: u32,
        #[serde(default)]
        tint: f64,
    },
    /// System automatic color
    Auto,
}

impl ColorRef {
    /// An untinted RGB reference.
    #[inline]
    pub fn rgb(hex: impl Into<String>) -> Self {
        ColorRef::Rgb {
            hex: hex.into(),
            tint: 0.0,
        }
    }

    /// An untinted theme reference.
    #[inline]
    pub fn theme(index: u32) -> Self {
        ColorRef::Theme { index, tint: 0.0 }
    }
}

/// Workbook theme colors, in the order style records index them
/// (`0=lt1, 1=dk1, 2=lt2, 3=dk2, 4..=9=accent1..6, 10=hlink, 11=folHlink`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemeTable {
    colors: Vec<Color>,
}

impl ThemeTable {
    /// Create a theme table from base colors.
    #[inline]
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// The default Office theme palette.
    pub fn office() -> Self {
        Self::new(
            [
                0xFFFFFF, 0x000000, 0xE7E6E6, 0x44546A, 0x4472C4, 0xED7D31, 0xA5A5A5, 0xFFC000,
                0x5B9BD5, 0x70AD47, 0x0563C1, 0x954F72,
            ]
            .into_iter()
            .map(|rgb| Color::from_argb(0xFF00_0000 | rgb))
            .collect(),
        )
    }

    /// Base color for a theme index.
    #[inline]
    pub fn get(&self, index: u32) -> Option<Color> {
        self.colors.get(index as usize).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Underline variants. All of them render as a single underline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Underline {
    Single,
    Double,
    SingleAccounting,
    DoubleAccounting,
}

/// Font descriptor of a cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FontDescriptor {
    /// Italic flag
    pub italic: bool,
    /// Bold flag
    pub bold: bool,
    /// Underline variant, if any
    pub underline: Option<Underline>,
    /// Font name/family (e.g., "Calibri", "Arial")
    pub family: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Font color
    pub color: Option<ColorRef>,
}

/// Fill descriptor of a cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FillDescriptor {
    /// Pattern type as authored (e.g., "solid", "gray125"); `None` or
    /// `"none"` means no pattern
    pub pattern: Option<String>,
    /// Foreground (pattern) color
    pub fg_color: Option<ColorRef>,
    /// Background color
    pub bg_color: Option<ColorRef>,
}

impl FillDescriptor {
    /// Create a solid fill with the given foreground color.
    #[inline]
    pub fn solid(color: ColorRef) -> Self {
        Self {
            pattern: Some("solid".to_string()),
            fg_color: Some(color),
            bg_color: None,
        }
    }

    /// Check if a fill pattern is present.
    #[inline]
    pub fn has_pattern(&self) -> bool {
        matches!(self.pattern.as_deref(), Some(p) if !p.is_empty() && p != "none")
    }
}

/// Border line styles as named by SpreadsheetML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineStyle {
    #[default]
    None,
    Thin,
    Medium,
    Thick,
    Double,
    Hair,
    Dotted,
    Dashed,
    DashDot,
    DashDotDot,
    MediumDashed,
    MediumDashDot,
    MediumDashDotDot,
    SlantDashDot,
}

/// One raw border side.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderSideRaw {
    /// Line style as authored
    pub style: LineStyle,
    /// Line color
    pub color: Option<ColorRef>,
}

impl BorderSideRaw {
    #[inline]
    pub fn new(style: LineStyle, color: Option<ColorRef>) -> Self {
        Self { style, color }
    }
}

/// The four raw border sides of a cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderDescriptor {
    pub top: BorderSideRaw,
    pub right: BorderSideRaw,
    pub bottom: BorderSideRaw,
    pub left: BorderSideRaw,
}

impl BorderDescriptor {
    /// The same side on all four edges.
    pub fn uniform(side: BorderSideRaw) -> Self {
        Self {
            top: side.clone(),
            right: side.clone(),
            bottom: side.clone(),
            left: side,
        }
    }

    /// Raw descriptor for one side.
    #[inline]
    pub fn side(&self, side: Side) -> &BorderSideRaw {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }

    /// Mutable raw descriptor for one side.
    #[inline]
    pub fn side_mut(&mut self, side: Side) -> &mut BorderSideRaw {
        match side {
            Side::Top => &mut self.top,
            Side::Right => &mut self.right,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
        }
    }

    /// Check if all four sides have the same line style and color.
    pub fn is_uniform(&self) -> bool {
        self.top == self.right && self.top == self.bottom && self.top == self.left
    }
}

/// Horizontal alignment options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HorizontalAlignment {
    General,
    Left,
    Center,
    Right,
    Fill,
    Justify,
    CenterContinuous,
    Distributed,
}

/// Vertical alignment options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
    Justify,
    Distributed,
}

/// Alignment information for cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Alignment {
    pub horizontal: Option<HorizontalAlignment>,
    pub vertical: Option<VerticalAlignment>,
}

/// A cell's raw presentation record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCell {
    /// Row number (1-based)
    pub row: u32,
    /// Column number (1-based)
    pub col: u32,
    /// Cell value
    pub value: CellValue,
    /// Font descriptor
    pub font: FontDescriptor,
    /// Fill descriptor
    pub fill: FillDescriptor,
    /// Border descriptor
    pub border: BorderDescriptor,
    /// Alignment
    pub alignment: Alignment,
    /// Hyperlink target
    pub hyperlink: Option<String>,
}

impl RawCell {
    /// Create an empty, unstyled cell at the given position.
    #[inline]
    pub fn new(row: u32, col: u32) -> Self {
        Self {
            row,
            col,
            ..Default::default()
        }
    }

    /// The cell coordinate.
    #[inline]
    pub fn coord(&self) -> CellRef {
        CellRef::new(self.row, self.col)
    }

    pub fn with_value(mut self, value: CellValue) -> Self {
        self.value = value;
        self
    }

    pub fn with_font(mut self, font: FontDescriptor) -> Self {
        self.font = font;
        self
    }

    pub fn with_fill(mut self, fill: FillDescriptor) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_border(mut self, border: BorderDescriptor) -> Self {
        self.border = border;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_hyperlink(mut self, target: impl Into<String>) -> Self {
        self.hyperlink = Some(target.into());
        self
    }
}

/// Merged cell range.
///
/// Sheet-absolute and inclusive on all sides; not clipped to any window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MergeRange {
    /// Top-left cell (the merge anchor)
    pub first: CellRef,
    /// Bottom-right cell
    pub last: CellRef,
}

impl MergeRange {
    /// Create a merge range from any two opposite corners.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sheetgrid::sheet::{CellRef, MergeRange};
    ///
    /// // Merge cells B2:C3
    /// let merged = MergeRange::new(CellRef::new(3, 3), CellRef::new(2, 2));
    /// assert_eq!(merged.first, CellRef::new(2, 2));
    /// ```
    pub fn new(a: CellRef, b: CellRef) -> Self {
        Self {
            first: CellRef::new(a.row.min(b.row), a.col.min(b.col)),
            last: CellRef::new(a.row.max(b.row), a.col.max(b.col)),
        }
    }

    /// Check if the range covers a coordinate.
    #[inline]
    pub fn contains(&self, at: CellRef) -> bool {
        (self.first.row..=self.last.row).contains(&at.row)
            && (self.first.col..=self.last.col).contains(&at.col)
    }
}

/// Column width and row height metadata of a sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetLayout {
    /// Explicit column widths in character units, keyed by column (1-based)
    pub column_widths: HashMap<u32, f64>,
    /// Explicit row heights in points, keyed by row (1-based)
    pub row_heights: HashMap<u32, f64>,
    /// Width for columns without an explicit entry
    pub default_column_width: f64,
    /// Height for rows without an explicit entry
    pub default_row_height: f64,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            column_widths: HashMap::new(),
            row_heights: HashMap::new(),
            default_column_width: DEFAULT_COLUMN_WIDTH,
            default_row_height: DEFAULT_ROW_HEIGHT,
        }
    }
}

impl SheetLayout {
    /// Width of a column in character units.
    #[inline]
    pub fn column_width(&self, col: u32) -> f64 {
        self.column_widths
            .get(&col)
            .copied()
            .unwrap_or(self.default_column_width)
    }

    /// Height of a row in points.
    #[inline]
    pub fn row_height(&self, row: u32) -> f64 {
        self.row_heights
            .get(&row)
            .copied()
            .unwrap_or(self.default_row_height)
    }
}

/// The real extent of a sheet's used area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetExtents {
    /// Last used row (1-based)
    pub max_row: u32,
    /// Last used column (1-based)
    pub max_col: u32,
}

impl SheetExtents {
    #[inline]
    pub const fn new(max_row: u32, max_col: u32) -> Self {
        Self { max_row, max_col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_display() {
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::Bool(true).to_string(), "TRUE");
        assert_eq!(CellValue::Int(-7).to_string(), "-7");
        assert_eq!(CellValue::Float(1.5).to_string(), "1.5");
        assert_eq!(CellValue::Error("#N/A".into()).to_string(), "#N/A");
    }

    #[test]
    fn test_fill_pattern_presence() {
        assert!(!FillDescriptor::default().has_pattern());
        assert!(FillDescriptor::solid(ColorRef::Auto).has_pattern());

        let none = FillDescriptor {
            pattern: Some("none".into()),
            ..Default::default()
        };
        assert!(!none.has_pattern());
    }

    #[test]
    fn test_border_uniformity() {
        let thin = BorderSideRaw::new(LineStyle::Thin, Some(ColorRef::rgb("FF000000")));
        let mut border = BorderDescriptor::uniform(thin.clone());
        assert!(border.is_uniform());

        border.side_mut(Side::Left).color = Some(ColorRef::rgb("FFFF0000"));
        assert!(!border.is_uniform());
        assert!(BorderDescriptor::default().is_uniform());
    }

    #[test]
    fn test_merge_range_contains() {
        let range = MergeRange::new(CellRef::new(2, 2), CellRef::new(3, 4));
        assert!(range.contains(CellRef::new(2, 2)));
        assert!(range.contains(CellRef::new(3, 4)));
        assert!(!range.contains(CellRef::new(1, 2)));
        assert!(!range.contains(CellRef::new(2, 5)));
    }

    #[test]
    fn test_layout_defaults() {
        let mut layout = SheetLayout::default();
        layout.column_widths.insert(2, 20.0);
        assert_eq!(layout.column_width(1), DEFAULT_COLUMN_WIDTH);
        assert_eq!(layout.column_width(2), 20.0);
        assert_eq!(layout.row_height(9), DEFAULT_ROW_HEIGHT);
    }

    #[test]
    fn test_office_theme() {
        let theme = ThemeTable::office();
        assert_eq!(theme.len(), 12);
        assert_eq!(theme.get(0), Some(Color::new(0xFF, 0xFF, 0xFF)));
        assert_eq!(theme.get(4), Some(Color::new(0x44, 0x72, 0xC4)));
        assert_eq!(theme.get(12), None);
    }
}
