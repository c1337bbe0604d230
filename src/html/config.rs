/// Configuration options for HTML rendering.
///
/// # Examples
///
/// ```rust
/// use sheetgrid::html::HtmlOptions;
///
/// // Create with defaults
/// let options = HtmlOptions::default();
///
/// // Or customize
/// let options = HtmlOptions::new()
///     .with_indent(4)
///     .with_dimensions(false)
///     .with_table_class("sheet");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Indentation per nesting level (spaces)
    pub indent: usize,
    /// Whether to emit inline `style` attributes (fonts, fills, borders, alignment)
    pub include_styles: bool,
    /// Whether to emit column widths and row heights
    pub include_dimensions: bool,
    /// Class attribute of the `<table>` element
    pub table_class: Option<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            include_styles: true,
            include_dimensions: true,
            table_class: None,
        }
    }
}

impl HtmlOptions {
    /// Create a new `HtmlOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation per nesting level (number of spaces).
    ///
    /// Zero puts every row on its own line without leading spaces.
    #[inline]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set whether to emit inline cell styles.
    ///
    /// When disabled, only the table structure, spans, text and hyperlinks
    /// are written.
    #[inline]
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Set whether to emit pixel widths and heights.
    #[inline]
    pub fn with_dimensions(mut self, include: bool) -> Self {
        self.include_dimensions = include;
        self
    }

    /// Set the class attribute of the table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sheetgrid::html::HtmlOptions;
    ///
    /// let options = HtmlOptions::new().with_table_class("report");
    /// assert_eq!(options.table_class.as_deref(), Some("report"));
    /// ```
    #[inline]
    pub fn with_table_class(mut self, class: impl Into<String>) -> Self {
        self.table_class = Some(class.into());
        self
    }
}
