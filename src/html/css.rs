//! Inline CSS generation for resolved cells.
//!
//! All functions write straight into the output buffer instead of building
//! intermediate strings.

use crate::common::{Color, Side};
use crate::grid::{BorderAttr, BorderLine, FontStyle, ResolvedCell};
use crate::sheet::{Alignment, HorizontalAlignment, VerticalAlignment};
use std::fmt::Write;

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Write a pixel length such as `60px`.
#[inline]
pub fn write_px(buf: &mut String, n: u32) {
    let mut b = itoa::Buffer::new();
    buf.push_str(b.format(n));
    buf.push_str("px");
}

/// Write a point size, dropping a trailing `.0` (`11pt`, `10.5pt`).
#[inline]
pub fn write_pt(buf: &mut String, n: f64) {
    let mut b = ryu::Buffer::new();
    let s = b.format(n);
    buf.push_str(s.strip_suffix(".0").unwrap_or(s));
    buf.push_str("pt");
}

/// Write a CSS hex color: `#rrggbb` when opaque, `#rrggbbaa` otherwise.
#[inline]
pub fn write_color(buf: &mut String, color: Color) {
    buf.push('#');
    let channels = [color.r, color.g, color.b];
    for byte in channels {
        push_hex_byte(buf, byte);
    }
    if color.a != 0xFF {
        push_hex_byte(buf, color.a);
    }
}

#[inline]
fn push_hex_byte(buf: &mut String, byte: u8) {
    buf.push(HEX[(byte >> 4) as usize] as char);
    buf.push(HEX[(byte & 0x0F) as usize] as char);
}

/// Write one border declaration value: `2px solid #000000`.
pub fn write_border_line(buf: &mut String, line: &BorderLine) {
    write_px(buf, line.width_px as u32);
    buf.push(' ');
    buf.push_str(line.kind.css_name());
    buf.push(' ');
    write_color(buf, line.color);
}

/// Font and fill declarations.
pub fn write_font(buf: &mut String, font: &FontStyle) {
    if font.bold {
        buf.push_str("font-weight:bold;");
    }
    if font.italic {
        buf.push_str("font-style:italic;");
    }
    if font.underline {
        buf.push_str("text-decoration:underline;");
    }
    if let Some(family) = &font.family {
        // Quotes are escaped with the rest of the attribute value
        let _ = write!(buf, "font-family:'{}';", family);
    }
    if let Some(size) = font.size.filter(|s| s.is_finite() && *s > 0.0) {
        buf.push_str("font-size:");
        write_pt(buf, size);
        buf.push(';');
    }
    if let Some(color) = font.color {
        buf.push_str("color:");
        write_color(buf, color);
        buf.push(';');
    }
    if let Some(background) = font.background {
        buf.push_str("background-color:");
        write_color(buf, background);
        buf.push(';');
    }
}

/// Border declarations. A side without a line gets no declaration.
pub fn write_borders(buf: &mut String, border: &BorderAttr) {
    match border {
        BorderAttr::Unified(line) => {
            buf.push_str("border:");
            write_border_line(buf, line);
            buf.push(';');
        },
        BorderAttr::Sides(lines) => {
            for side in Side::ALL {
                if let Some(line) = &lines[side] {
                    buf.push_str("border-");
                    buf.push_str(side.name());
                    buf.push(':');
                    write_border_line(buf, line);
                    buf.push(';');
                }
            }
        },
    }
}

/// Alignment declarations.
pub fn write_alignment(buf: &mut String, alignment: &Alignment) {
    let horizontal = alignment.horizontal.and_then(|h| match h {
        HorizontalAlignment::Left => Some("left"),
        HorizontalAlignment::Center | HorizontalAlignment::CenterContinuous => Some("center"),
        HorizontalAlignment::Right => Some("right"),
        HorizontalAlignment::Justify | HorizontalAlignment::Distributed => Some("justify"),
        HorizontalAlignment::General | HorizontalAlignment::Fill => None,
    });
    if let Some(value) = horizontal {
        buf.push_str("text-align:");
        buf.push_str(value);
        buf.push(';');
    }

    let vertical = alignment.vertical.map(|v| match v {
        VerticalAlignment::Top => "top",
        VerticalAlignment::Center | VerticalAlignment::Justify | VerticalAlignment::Distributed => {
            "middle"
        },
        VerticalAlignment::Bottom => "bottom",
    });
    if let Some(value) = vertical {
        buf.push_str("vertical-align:");
        buf.push_str(value);
        buf.push(';');
    }
}

/// Full inline style of a cell, without the surrounding attribute.
pub fn cell_style(cell: &ResolvedCell, styles: bool, dimensions: bool) -> String {
    let mut buf = String::with_capacity(128);
    if styles {
        write_font(&mut buf, &cell.font);
        write_borders(&mut buf, &cell.border);
        write_alignment(&mut buf, &cell.alignment);
    }
    if dimensions {
        buf.push_str("width:");
        write_px(&mut buf, cell.width_px);
        buf.push(';');
    }
    buf
}
