//! Drawing primitives the slide builders are composed from.
//!
//! Each helper appends shapes to a slide and never touches shapes that are
//! already there, so the call order of the helpers is the z-order.

use super::table::TableSpec;
use super::theme::Theme;
use crate::common::unit::inches;
use crate::common::{RGBColor, Rect};
use crate::ooxml::pptx::{
    Alignment, Bullet, Geometry, GraphicTable, LineStyle, MutableShape, MutableSlide,
    ParagraphSpec, TableCell, TextStyle,
};

/// Space after every bullet paragraph, in points.
pub const BULLET_SPACE_AFTER: f64 = 8.0;

/// Outline width of rounded panels, in points.
pub const BORDER_WIDTH: f64 = 2.0;

/// Fill the full-canvas background with a solid color.
pub fn set_background(slide: &mut MutableSlide, color: RGBColor) {
    slide.set_background(color);
}

/// Single-paragraph, word-wrapped text box.
pub fn draw_text_box<'a>(
    slide: &'a mut MutableSlide,
    rect: Rect,
    text: &str,
    style: &TextStyle,
) -> &'a MutableShape {
    slide.add_text_box(rect, vec![ParagraphSpec::plain(text, style.clone())])
}

/// Text box with one bulleted paragraph per entry.
///
/// Every paragraph carries the `•` glyph in `bullet_color` and 8 pt of
/// space after it.
pub fn draw_bullet_list<'a, S: AsRef<str>>(
    slide: &'a mut MutableSlide,
    rect: Rect,
    bullets: &[S],
    style: &TextStyle,
    bullet_color: RGBColor,
) -> &'a MutableShape {
    let bullet = Bullet::round(bullet_color);
    let paragraphs = bullets
        .iter()
        .map(|text| {
            ParagraphSpec::bulleted(text.as_ref(), style.clone(), bullet)
                .with_space_after(BULLET_SPACE_AFTER)
        })
        .collect();
    slide.add_text_box(rect, paragraphs)
}

/// Borderless filled rectangle.
pub fn draw_bar(slide: &mut MutableSlide, rect: Rect, fill: RGBColor) -> &MutableShape {
    slide.add_autoshape(Geometry::Rectangle, rect, Some(fill), LineStyle::None)
}

/// Dark banner across the top of a content slide with a bold title and an
/// optional subtitle beneath it.
pub fn draw_title_bar(slide: &mut MutableSlide, theme: &Theme, title: &str, subtitle: Option<&str>) {
    draw_bar(slide, theme.title_bar_rect(), theme.dark_blue);

    let title_style = theme.text(32.0).bold(true).color(theme.white);
    draw_text_box(slide, Rect::inches(0.6, 0.15, 12.0, 0.7), title, &title_style);

    if let Some(subtitle) = subtitle {
        let subtitle_style = theme.text(14.0).color(theme.subtitle_gray);
        draw_text_box(slide, Rect::inches(0.6, 0.75, 12.0, 0.4), subtitle, &subtitle_style);
    }
}

/// Styled table: dark header row, then data rows alternating light gray
/// (even index) and white (odd index).
pub fn draw_table<'a>(
    slide: &'a mut MutableSlide,
    theme: &Theme,
    rect: Rect,
    table: &TableSpec,
) -> &'a MutableShape {
    let header_style = theme
        .text(14.0)
        .bold(true)
        .color(theme.white)
        .align(Alignment::Center);

    let mut rows = Vec::with_capacity(table.row_count() + 1);
    rows.push(
        table
            .headers()
            .iter()
            .map(|header| TableCell {
                paragraph: ParagraphSpec::plain(header.as_str(), header_style.clone()),
                fill: Some(theme.dark_blue),
            })
            .collect(),
    );

    for (i, values) in table.rows().iter().enumerate() {
        let fill = if i % 2 == 0 { theme.light_gray } else { theme.white };
        let cells = values
            .iter()
            .enumerate()
            .map(|(j, value)| {
                let alignment = if j == 0 { Alignment::Left } else { Alignment::Center };
                TableCell {
                    paragraph: ParagraphSpec::plain(value.to_string(), theme.text(13.0).align(alignment)),
                    fill: Some(fill),
                }
            })
            .collect();
        rows.push(cells);
    }

    slide.add_table(GraphicTable {
        rect,
        column_widths: table.column_widths(rect.width),
        rows,
    })
}

/// Rounded rectangle with a solid fill and a 2 pt border.
pub fn draw_rounded_box(
    slide: &mut MutableSlide,
    rect: Rect,
    fill: RGBColor,
    border: RGBColor,
) -> &MutableShape {
    slide.add_autoshape(
        Geometry::RoundedRectangle,
        rect,
        Some(fill),
        LineStyle::Solid {
            color: border,
            width_pt: BORDER_WIDTH,
        },
    )
}

/// Widths of `n` equal columns sharing `total_inches`, in EMU.
pub fn even_widths(total_inches: f64, n: usize) -> Vec<i64> {
    if n == 0 {
        return Vec::new();
    }
    vec![inches(total_inches / n as f64); n]
}
