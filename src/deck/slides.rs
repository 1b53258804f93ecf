//! The eleven slide builders.
//!
//! Every builder appends exactly one slide to the presentation and returns
//! it. Inputs are validated before the slide is added, so a builder that
//! fails leaves the presentation unchanged.
//!
//! Content slides share a white background and start with a title bar; the
//! title and recommendation slides use the dark background instead.

use super::draw::{
    draw_bar, draw_bullet_list, draw_rounded_box, draw_table, draw_text_box, draw_title_bar,
    even_widths, set_background,
};
use super::table::{Cell, TableSpec};
use super::theme::Theme;
use crate::common::unit::inches;
use crate::common::{InputError, RGBColor, Rect, Result};
use crate::ooxml::pptx::{Alignment, Geometry, LineStyle, MutablePresentation, MutableSlide};

const DISCLAIMER: &str =
    "This analysis is for informational purposes only and does not constitute investment advice.";

/// Upside of `target` over `price` in percent, unrounded.
///
/// Slides print it with [`format_upside`].
///
/// ```
/// use stockdeck::deck::slides::upside_pct;
/// assert_eq!(upside_pct(8.0, 9.0).unwrap(), 12.5);
/// assert!(upside_pct(0.0, 130.0).is_err());
/// ```
pub fn upside_pct(price: f64, target: f64) -> Result<f64> {
    if !price.is_finite() || price <= 0.0 {
        return Err(InputError::InvalidPrice(price).into());
    }
    Ok((target - price) / price * 100.0)
}

/// Upside as whole percent text.
///
/// Ties round to even and a small negative upside keeps its sign.
///
/// ```
/// use stockdeck::deck::slides::format_upside;
/// assert_eq!(format_upside(12.5), "12");
/// assert_eq!(format_upside(-25.0), "-25");
/// assert_eq!(format_upside(-0.3), "-0");
/// ```
pub fn format_upside(upside: f64) -> String {
    format!("{:.0}", upside)
}

/// `true` when the rating is a buy, compared case-insensitively.
pub fn is_positive_rating(rating: &str) -> bool {
    matches!(rating.to_uppercase().as_str(), "BUY" | "STRONG BUY")
}

/// Recommendation badge color: green for a buy rating, red for anything else.
pub fn badge_color(theme: &Theme, rating: &str) -> RGBColor {
    if is_positive_rating(rating) {
        theme.accent_green
    } else {
        theme.accent_red
    }
}

fn price_target_line(price: f64, target: f64) -> Result<String> {
    Ok(format!(
        "Price Target: ${:.2} ({}% upside)",
        target,
        format_upside(upside_pct(price, target)?)
    ))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Add a white slide with the title bar drawn.
fn content_slide<'a>(
    pres: &'a mut MutablePresentation,
    theme: &Theme,
    title: &str,
) -> Result<&'a mut MutableSlide> {
    let slide = pres.add_slide()?;
    set_background(slide, theme.white);
    draw_title_bar(slide, theme, title, None);
    Ok(slide)
}

/// An empty note is treated as no note.
fn present(note: Option<&str>) -> Option<&str> {
    note.filter(|n| !n.is_empty())
}

fn draw_note(slide: &mut MutableSlide, theme: &Theme, rect: Rect, text: &str, alignment: Alignment) {
    let style = theme.text(13.0).color(theme.medium_gray).align(alignment);
    draw_text_box(slide, rect, text, &style);
}

/// Slide 1: dark title slide with rating and price target.
#[allow(clippy::too_many_arguments)]
pub fn build_title_slide<'a>(
    pres: &'a mut MutablePresentation,
    theme: &Theme,
    ticker: &str,
    company: &str,
    date: &str,
    rating: &str,
    price: f64,
    target: f64,
) -> Result<&'a MutableSlide> {
    let price_target = price_target_line(price, target)?;

    let slide = pres.add_slide()?;
    set_background(slide, theme.dark_blue);

    draw_bar(slide, Rect::inches(1.5, 2.8, 10.333, 0.05), theme.accent_blue);

    let title_style = theme
        .text(40.0)
        .bold(true)
        .color(theme.white)
        .align(Alignment::Center);
    draw_text_box(
        slide,
        Rect::inches(1.5, 1.5, 10.333, 1.2),
        &format!("Investment Analysis: {} ({})", company, ticker),
        &title_style,
    );

    let subtitle_style = theme
        .text(22.0)
        .color(theme.subtitle_gray)
        .align(Alignment::Center);
    draw_text_box(
        slide,
        Rect::inches(1.5, 3.1, 10.333, 0.8),
        &format!(
            "{}  |  Rating: {}  |  {}",
            date,
            rating.to_uppercase(),
            price_target
        ),
        &subtitle_style,
    );

    let footer_style = theme
        .text(12.0)
        .color(theme.medium_gray)
        .align(Alignment::Center);
    draw_text_box(
        slide,
        Rect::inches(1.5, 5.5, 10.333, 0.5),
        "Confidential  |  For Investment Purposes Only",
        &footer_style,
    );

    Ok(slide)
}

/// Slide 2: executive summary bullets.
pub fn build_executive_summary<'a, S: AsRef<str>>(
    pres: &'a mut MutablePresentation,
    theme: &Theme,
    bullets: &[S],
) -> Result<&'a MutableSlide> {
    let slide = content_slide(pres, theme, "Executive Summary")?;
    draw_bullet_list(
        slide,
        Rect::inches(0.8, 1.6, 11.5, 5.0),
        bullets,
        &theme.text(20.0),
        theme.accent_blue,
    );
    Ok(slide)
}

/// Slide 3: metric / value / interpretation table.
pub fn build_valuation_snapshot<'a>(
    pres: &'a mut MutablePresentation,
    theme: &Theme,
    metrics: &[Vec<Cell>],
) -> Result<&'a MutableSlide> {
    let table = TableSpec::new(
        strings(&["Metric", "Value", "Interpretation"]),
        metrics.to_vec(),
        Some(vec![inches(3.0), inches(2.5), inches(6.2)]),
    )?;

    let slide = content_slide(pres, theme, "Valuation Snapshot")?;
    draw_table(slide, theme, Rect::inches(0.8, 1.8, 11.7, 3.5), &table);
    Ok(slide)
}

/// `["Line Item"] + years` style table with a 3.5 in label column.
fn yearly_table(
    label: &str,
    years: &[String],
    rows: &[Vec<Cell>],
    field: &'static str,
) -> Result<TableSpec> {
    if years.is_empty() {
        return Err(InputError::EmptyField(field).into());
    }

    let mut headers = Vec::with_capacity(years.len() + 1);
    headers.push(label.to_string());
    headers.extend(years.iter().cloned());

    let mut widths = vec![inches(3.5)];
    widths.extend(even_widths(8.2, years.len()));

    Ok(TableSpec::new(headers, rows.to_vec(), Some(widths))?)
}

/// Slide 4: income statement across the given fiscal years.
///
/// The title spans from the last year label to the first, so years listed
/// most recent first read as `Income Statement (FY2023–FY2025)`.
pub fn build_income_statement<'a>(
    pres: &'a mut MutablePresentation,
    theme: &Theme,
    years: &[String],
    rows: &[Vec<Cell>],
    note: Option<&str>,
) -> Result<&'a MutableSlide> {
    let table = yearly_table("Line Item", years, rows, "income_years")?;
    let (first, last) = match (years.first(), years.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(InputError::EmptyField("income_years").into()),
    };

    let title = format!("Income Statement ({}\u{2013}{})", last, first);
    let slide = content_slide(pres, theme, &title)?;
    draw_table(slide, theme, Rect::inches(0.8, 1.8, 11.7, 3.5), &table);

    if let Some(note) = present(note) {
        draw_note(
            slide,
            theme,
            Rect::inches(0.8, 5.6, 11.7, 0.5),
            &format!("Note: {}", note),
            Alignment::Left,
        );
    }
    Ok(slide)
}

/// Slide 5: balance sheet and cash flow table.
pub fn build_balance_sheet_cashflow<'a>(
    pres: &'a mut MutablePresentation,
    theme: &Theme,
    years: &[String],
    rows: &[Vec<Cell>],
    note: Option<&str>,
) -> Result<&'a MutableSlide> {
    let table = yearly_table("Metric", years, rows, "balance_years")?;

    let slide = content_slide(pres, theme, "Balance Sheet & Cash Flow")?;
    draw_table(slide, theme, Rect::inches(0.8, 1.8, 11.7, 3.0), &table);

    if let Some(note) = present(note) {
        draw_note(
            slide,
            theme,
            Rect::inches(0.8, 5.2, 11.7, 0.6),
            &format!("Note: {}", note),
            Alignment::Left,
        );
    }
    Ok(slide)
}

/// Slide 6: the company against its peers, one column each.
pub fn build_peer_comparison<'a>(
    pres: &'a mut MutablePresentation,
    theme: &Theme,
    ticker: &str,
    peers: &[String],
    rows: &[Vec<Cell>],
) -> Result<&'a MutableSlide> {
    let mut headers = Vec::with_capacity(peers.len() + 2);
    headers.push("Metric".to_string());
    headers.push(ticker.to_string());
    headers.extend(peers.iter().cloned());

    let mut widths = vec![inches(2.8)];
    widths.extend(even_widths(8.9, headers.len() - 1));

    let table = TableSpec::new(headers, rows.to_vec(), Some(widths))?;

    let slide = content_slide(pres, theme, "Competitive Position")?;
    draw_table(slide, theme, Rect::inches(0.8, 1.8, 11.7, 3.5), &table);
    Ok(slide)
}

/// Slide 7: fair value by method with weights.
pub fn build_valuation_summary<'a>(
    pres: &'a mut MutablePresentation,
    theme: &Theme,
    rows: &[Vec<Cell>],
    note: Option<&str>,
) -> Result<&'a MutableSlide> {
    let table = TableSpec::new(
        strings(&["Method", "Fair Value", "vs Current", "Weight"]),
        rows.to_vec(),
        Some(vec![inches(3.0), inches(2.9), inches(2.9), inches(2.9)]),
    )?;

    let slide = content_slide(pres, theme, "Valuation Summary")?;
    draw_table(slide, theme, Rect::inches(0.8, 1.8, 11.7, 3.0), &table);

    if let Some(note) = present(note) {
        draw_note(slide, theme, Rect::inches(0.8, 5.2, 11.7, 0.6), note, Alignment::Left);
    }
    Ok(slide)
}

/// Slide 8: DCF fair value for each FCF scenario (rows) and WACC (columns).
pub fn build_sensitivity_analysis<'a>(
    pres: &'a mut MutablePresentation,
    theme: &Theme,
    scenarios: &[String],
    waccs: &[String],
    matrix: &[Vec<Cell>],
    note: Option<&str>,
) -> Result<&'a MutableSlide> {
    if waccs.is_empty() {
        return Err(InputError::EmptyField("sensitivity_waccs").into());
    }
    if scenarios.len() != matrix.len() {
        return Err(InputError::ScenarioCount {
            scenarios: scenarios.len(),
            rows: matrix.len(),
        }
        .into());
    }

    let mut headers = Vec::with_capacity(waccs.len() + 1);
    headers.push("FCF Scenario".to_string());
    headers.extend(waccs.iter().cloned());

    let rows = scenarios
        .iter()
        .zip(matrix)
        .map(|(label, values)| {
            let mut row = Vec::with_capacity(values.len() + 1);
            row.push(Cell::Text(label.clone()));
            row.extend(values.iter().cloned());
            row
        })
        .collect();

    let mut widths = vec![inches(3.0)];
    widths.extend(even_widths(7.3, waccs.len()));

    let table = TableSpec::new(headers, rows, Some(widths))?;

    let slide = content_slide(pres, theme, "DCF Sensitivity Analysis")?;
    draw_table(slide, theme, Rect::inches(1.5, 2.0, 10.3, 2.5), &table);

    if let Some(note) = present(note) {
        draw_note(slide, theme, Rect::inches(1.5, 5.0, 10.3, 0.5), note, Alignment::Center);
    }
    Ok(slide)
}

/// Slide 9: bull case (left, green) beside bear case (right, red).
pub fn build_bull_bear<'a, S: AsRef<str>>(
    pres: &'a mut MutablePresentation,
    theme: &Theme,
    bull_points: &[S],
    bear_points: &[S],
) -> Result<&'a MutableSlide> {
    let slide = content_slide(pres, theme, "Investment Thesis")?;

    let panels = [
        (0.6, 0.9, "BULL CASE", theme.bull_fill, theme.accent_green, bull_points),
        (6.9, 7.2, "BEAR CASE", theme.bear_fill, theme.accent_red, bear_points),
    ];
    for (left, text_left, heading, fill, accent, points) in panels {
        draw_rounded_box(slide, Rect::inches(left, 1.6, 5.8, 5.0), fill, accent);

        let heading_style = theme
            .text(24.0)
            .bold(true)
            .color(accent)
            .align(Alignment::Center);
        draw_text_box(
            slide,
            Rect::inches(text_left, 1.8, 5.2, 0.6),
            heading,
            &heading_style,
        );

        draw_bullet_list(
            slide,
            Rect::inches(text_left, 2.5, 5.2, 3.8),
            points,
            &theme.text(15.0),
            theme.accent_blue,
        );
    }

    Ok(slide)
}

/// Slide 10: catalysts and their timeline.
pub fn build_catalysts<'a, S: AsRef<str>>(
    pres: &'a mut MutablePresentation,
    theme: &Theme,
    catalysts: &[S],
) -> Result<&'a MutableSlide> {
    let slide = content_slide(pres, theme, "Key Catalysts & Timeline")?;
    draw_bullet_list(
        slide,
        Rect::inches(0.8, 1.8, 11.5, 4.5),
        catalysts,
        &theme.text(22.0),
        theme.accent_blue,
    );
    Ok(slide)
}

/// Slide 11: rating badge, recommendation bullets and disclaimer.
#[allow(clippy::too_many_arguments)]
pub fn build_recommendation<'a>(
    pres: &'a mut MutablePresentation,
    theme: &Theme,
    rating: &str,
    price: f64,
    target: f64,
    risk: &str,
    consensus: &str,
    summary: &str,
) -> Result<&'a MutableSlide> {
    let bullets = [
        price_target_line(price, target)?,
        "Time Horizon: 12 months".to_string(),
        format!("Risk Level: {}", risk),
        format!("Analyst Consensus: {}", consensus),
        summary.to_string(),
    ];
    let badge = badge_color(theme, rating);

    let slide = pres.add_slide()?;
    set_background(slide, theme.dark_blue);

    slide.add_autoshape(
        Geometry::RoundedRectangle,
        Rect::inches(4.667, 0.5, 4.0, 1.2),
        Some(badge),
        LineStyle::None,
    );

    let badge_style = theme
        .text(30.0)
        .bold(true)
        .color(theme.white)
        .align(Alignment::Center);
    draw_text_box(
        slide,
        Rect::inches(4.667, 0.6, 4.0, 1.0),
        &format!("RECOMMENDATION: {}", rating.to_uppercase()),
        &badge_style,
    );

    draw_bullet_list(
        slide,
        Rect::inches(2.0, 2.2, 9.333, 4.5),
        &bullets,
        &theme.text(22.0).color(theme.white),
        badge,
    );

    let disclaimer_style = theme
        .text(10.0)
        .color(theme.medium_gray)
        .align(Alignment::Center);
    draw_text_box(
        slide,
        Rect::inches(1.5, 6.5, 10.333, 0.5),
        DISCLAIMER,
        &disclaimer_style,
    );

    Ok(slide)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::ooxml::pptx::ShapeType;
    use proptest::prelude::*;

    fn labels(items: &[&str]) -> Vec<String> {
        strings(items)
    }

    fn num_row(values: &[i64]) -> Vec<Cell> {
        values.iter().map(|&v| Cell::from(v)).collect()
    }

    #[test]
    fn test_title_slide_upside() {
        let theme = Theme::default();
        let mut pres = MutablePresentation::new();
        let slide =
            build_title_slide(&mut pres, &theme, "TEST", "Test Corp", "2026-02-17", "Buy", 100.0, 130.0)
                .unwrap();

        assert_eq!(slide.background(), Some(theme.dark_blue));
        let texts = slide.texts();
        assert_eq!(texts[0], "Investment Analysis: Test Corp (TEST)");
        assert_eq!(
            texts[1],
            "2026-02-17  |  Rating: BUY  |  Price Target: $130.00 (30% upside)"
        );
    }

    #[test]
    fn test_invalid_price_adds_no_slide() {
        let theme = Theme::default();
        let mut pres = MutablePresentation::new();
        let err = build_title_slide(&mut pres, &theme, "T", "C", "d", "Buy", 0.0, 1.0).unwrap_err();
        assert!(matches!(err, Error::Input(InputError::InvalidPrice(_))));
        assert_eq!(pres.slide_count(), 0);
    }

    #[test]
    fn test_content_slides_start_with_title_bar() {
        let theme = Theme::default();
        let mut pres = MutablePresentation::new();
        let slide = build_executive_summary(&mut pres, &theme, &["a", "b", "c"]).unwrap();

        assert_eq!(slide.background(), Some(theme.white));
        assert_eq!(slide.shapes()[0].fill(), Some(theme.dark_blue));
        assert_eq!(slide.texts()[0], "Executive Summary");
        assert_eq!(slide.shapes()[2].paragraphs().len(), 3);
    }

    #[test]
    fn test_income_statement_title_and_note() {
        let theme = Theme::default();
        let mut pres = MutablePresentation::new();
        let years = labels(&["FY2025", "FY2024", "FY2023"]);
        let rows = vec![vec!["Revenue".into(), "$10.0B".into(), "$9.0B".into(), "$8.0B".into()]];

        let slide =
            build_income_statement(&mut pres, &theme, &years, &rows, Some("Test note")).unwrap();
        let texts = slide.texts();
        assert_eq!(texts[0], "Income Statement (FY2023\u{2013}FY2025)");
        assert_eq!(texts.last().map(String::as_str), Some("Note: Test note"));

        let table = slide.table().unwrap();
        assert_eq!(table.row_text(0), vec!["Line Item", "FY2025", "FY2024", "FY2023"]);
        assert_eq!(table.column_widths[0], inches(3.5));
        assert_eq!(table.column_widths[1], inches(8.2 / 3.0));
    }

    #[test]
    fn test_missing_note_draws_nothing() {
        let theme = Theme::default();
        let mut pres = MutablePresentation::new();
        let years = labels(&["FY2025"]);
        let rows = vec![vec!["Cash".into(), "$5.0B".into()]];

        let slide = build_balance_sheet_cashflow(&mut pres, &theme, &years, &rows, None).unwrap();
        // banner, title, table
        assert_eq!(slide.shape_count(), 3);
    }

    #[test]
    fn test_empty_years_rejected() {
        let theme = Theme::default();
        let mut pres = MutablePresentation::new();
        let err = build_income_statement(&mut pres, &theme, &[], &[], None).unwrap_err();
        assert!(matches!(err, Error::Input(InputError::EmptyField("income_years"))));
        assert_eq!(pres.slide_count(), 0);
    }

    #[test]
    fn test_peer_header() {
        let theme = Theme::default();
        let mut pres = MutablePresentation::new();
        let peers = labels(&["EA", "NTES", "UBSFY"]);
        let rows = vec![vec![
            "Market Cap".into(),
            "$40B".into(),
            "$35B".into(),
            "$30B".into(),
            "$12B".into(),
        ]];

        let slide = build_peer_comparison(&mut pres, &theme, "TTWO", &peers, &rows).unwrap();
        let table = slide.table().unwrap();
        assert_eq!(table.row_text(0), vec!["Metric", "TTWO", "EA", "NTES", "UBSFY"]);
        assert_eq!(table.column_count(), 2 + peers.len());
    }

    #[test]
    fn test_peer_row_length_mismatch() {
        let theme = Theme::default();
        let mut pres = MutablePresentation::new();
        let rows = vec![vec!["Market Cap".into(), "$40B".into()]];

        let err = build_peer_comparison(&mut pres, &theme, "TTWO", &labels(&["EA"]), &rows)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Input(InputError::RowLength {
                row: 0,
                expected: 3,
                got: 2
            })
        ));
        assert_eq!(pres.slide_count(), 0);
    }

    #[test]
    fn test_sensitivity_table() {
        let theme = Theme::default();
        let mut pres = MutablePresentation::new();
        let scenarios = labels(&["Bear", "Base", "Bull"]);
        let waccs = labels(&["8%", "10%"]);
        let matrix = vec![num_row(&[1, 2]), num_row(&[3, 4]), num_row(&[5, 6])];

        let slide =
            build_sensitivity_analysis(&mut pres, &theme, &scenarios, &waccs, &matrix, None)
                .unwrap();
        let table = slide.table().unwrap();
        assert_eq!(table.row_count(), 4);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.row_text(0), vec!["FCF Scenario", "8%", "10%"]);
        assert_eq!(table.row_text(1), vec!["Bear", "1", "2"]);
    }

    #[test]
    fn test_sensitivity_mismatches() {
        let theme = Theme::default();
        let mut pres = MutablePresentation::new();
        let waccs = labels(&["8%", "10%"]);

        let err = build_sensitivity_analysis(
            &mut pres,
            &theme,
            &labels(&["Bear", "Base"]),
            &waccs,
            &[num_row(&[1, 2])],
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Input(InputError::ScenarioCount {
                scenarios: 2,
                rows: 1
            })
        ));

        let err = build_sensitivity_analysis(
            &mut pres,
            &theme,
            &labels(&["Bear"]),
            &waccs,
            &[num_row(&[1, 2, 3])],
            None,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Input(InputError::RowLength { .. })));
        assert_eq!(pres.slide_count(), 0);
    }

    #[test]
    fn test_bull_bear_panels() {
        let theme = Theme::default();
        let mut pres = MutablePresentation::new();
        let slide =
            build_bull_bear(&mut pres, &theme, &["Strong growth"], &["High valuation"]).unwrap();

        let panels: Vec<_> = slide
            .shapes()
            .iter()
            .filter(|s| s.geometry() == Some(Geometry::RoundedRectangle))
            .collect();
        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0].fill(), Some(theme.bull_fill));
        assert_eq!(panels[1].fill(), Some(theme.bear_fill));
        assert_eq!(panels[1].rect().x, inches(6.9));

        let texts = slide.texts();
        assert!(texts.contains(&"BULL CASE".to_string()));
        assert!(texts.contains(&"BEAR CASE".to_string()));
    }

    #[test]
    fn test_badge_color() {
        let theme = Theme::default();
        assert_eq!(badge_color(&theme, "Buy"), theme.accent_green);
        assert_eq!(badge_color(&theme, "STRONG BUY"), theme.accent_green);
        assert_eq!(badge_color(&theme, "strong buy"), theme.accent_green);
        assert_eq!(badge_color(&theme, "Sell"), theme.accent_red);
        assert_eq!(badge_color(&theme, "Hold"), theme.accent_red);
    }

    #[test]
    fn test_recommendation_slide() {
        let theme = Theme::default();
        let mut pres = MutablePresentation::new();
        let slide = build_recommendation(
            &mut pres,
            &theme,
            "Sell",
            100.0,
            80.0,
            "High",
            "Hold ($95 median)",
            "Downside outweighs upside.",
        )
        .unwrap();

        let badge = &slide.shapes()[0];
        assert_eq!(badge.fill(), Some(theme.accent_red));
        match badge.shape_type() {
            ShapeType::AutoShape { line, .. } => assert_eq!(*line, LineStyle::None),
            other => panic!("unexpected shape {:?}", other),
        }

        let bullets = slide.shapes()[2].paragraphs();
        assert_eq!(bullets.len(), 5);
        assert_eq!(bullets[0].text, "Price Target: $80.00 (-20% upside)");
        assert_eq!(bullets[1].text, "Time Horizon: 12 months");
        assert!(bullets.iter().all(|p| p.bullet.map(|b| b.color) == Some(theme.accent_red)));
        assert_eq!(slide.texts()[0], "RECOMMENDATION: SELL");
    }

    #[test]
    fn test_upside_ties_round_to_even() {
        let theme = Theme::default();
        let mut pres = MutablePresentation::new();
        let slide =
            build_title_slide(&mut pres, &theme, "T", "C", "2026-02-17", "Buy", 8.0, 9.0).unwrap();
        assert_eq!(
            slide.texts()[1],
            "2026-02-17  |  Rating: BUY  |  Price Target: $9.00 (12% upside)"
        );

        assert_eq!(format_upside(upside_pct(8.0, 9.0).unwrap()), "12");
        assert_eq!(format_upside(upside_pct(1000.0, 997.0).unwrap()), "-0");
        assert_eq!(format_upside(upside_pct(100.0, 130.0).unwrap()), "30");
    }

    #[test]
    fn test_empty_notes_draw_nothing() {
        let theme = Theme::default();
        let mut pres = MutablePresentation::new();
        let years = labels(&["FY2025"]);
        let rows = vec![vec![Cell::from("Revenue"), Cell::from("$1B")]];

        let without = build_valuation_summary(&mut pres, &theme, &[], None)
            .unwrap()
            .shape_count();
        let empty = build_valuation_summary(&mut pres, &theme, &[], Some(""))
            .unwrap()
            .shape_count();
        assert_eq!(empty, without);

        let slide = build_income_statement(&mut pres, &theme, &years, &rows, Some("")).unwrap();
        assert!(!slide.texts().iter().any(|t| t.starts_with("Note:")));

        let slide =
            build_balance_sheet_cashflow(&mut pres, &theme, &years, &rows, Some("")).unwrap();
        assert!(!slide.texts().iter().any(|t| t.starts_with("Note:")));

        let slide = build_sensitivity_analysis(
            &mut pres,
            &theme,
            &labels(&["Base"]),
            &labels(&["9%"]),
            &[num_row(&[100])],
            Some(""),
        )
        .unwrap();
        assert_eq!(slide.texts(), vec!["DCF Sensitivity Analysis"]);
    }

    proptest! {
        #[test]
        fn prop_upside_text_within_half(price in 0.01f64..10_000.0, target in 0.0f64..20_000.0) {
            let upside = upside_pct(price, target).unwrap();
            let printed: f64 = format_upside(upside).parse().unwrap();
            prop_assert!((printed - upside).abs() <= 0.5);
        }

        #[test]
        fn prop_upside_sign(price in 1.0f64..1_000.0, delta in 0.01f64..1_000.0) {
            prop_assert!(upside_pct(price, price + delta).unwrap() > 0.0);
            prop_assert!(upside_pct(price, price - delta).unwrap() < 0.0);
        }
    }
}
