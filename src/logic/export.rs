//! PDF Report Export
//!
//! Renders the single-result view into a one-page A4 PDF and writes it to
//! the user's download directory. The bars drawn here use exactly the same
//! width and highlight mappings as the on-screen view. Pure I/O side
//! effect, no retry.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::Local;
use printpdf::{BuiltinFont, Color, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb};

use super::view::single::SingleReport;
use crate::logic::types::Verdict;

const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
const MARGIN_MM: f64 = 20.0;
const BAR_TRACK_MM: f64 = 120.0;

/// Export errors
#[derive(Debug, Clone)]
pub enum ExportError {
    Io(String),
    Render(String),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Export failed: {}", e),
            Self::Render(e) => write!(f, "PDF rendering failed: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}

/// `bot-analysis-{username}-{YYYY-MM-DD}.pdf`, username reduced to
/// filesystem-safe characters
pub fn report_file_name(username: &str) -> String {
    let safe: String = username
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!(
        "bot-analysis-{}-{}.pdf",
        safe,
        Local::now().format("%Y-%m-%d")
    )
}

/// Render the report and write it under `target_dir` (default: the user's
/// download directory, falling back to the working directory). Returns the
/// full path of the written file.
pub fn export_single_report(
    report: &SingleReport,
    target_dir: Option<PathBuf>,
) -> Result<PathBuf, ExportError> {
    let dir = target_dir
        .or_else(dirs::download_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    let path = dir.join(report_file_name(&report.username));

    render_report(report, &path)?;
    log::info!("Exported report for @{} to {}", report.username, path.display());
    Ok(path)
}

fn verdict_color(bot: bool) -> Color {
    if bot {
        // #ef4444
        Color::Rgb(Rgb::new(0.937, 0.267, 0.267, None))
    } else {
        // #10b981
        Color::Rgb(Rgb::new(0.063, 0.725, 0.506, None))
    }
}

fn track_color() -> Color {
    Color::Rgb(Rgb::new(0.9, 0.9, 0.92, None))
}

fn filled_rect(layer: &PdfLayerReference, x: f64, y: f64, width: f64, height: f64, color: Color) {
    layer.set_fill_color(color);
    let shape = Line {
        points: vec![
            (Point::new(Mm(x), Mm(y)), false),
            (Point::new(Mm(x + width), Mm(y)), false),
            (Point::new(Mm(x + width), Mm(y + height)), false),
            (Point::new(Mm(x), Mm(y + height)), false),
        ],
        is_closed: true,
        has_fill: true,
        has_stroke: false,
        is_clipping_path: false,
    };
    layer.add_shape(shape);
}

fn render_report(report: &SingleReport, path: &Path) -> Result<(), ExportError> {
    let (doc, page, layer) = PdfDocument::new(
        format!("Bot Analysis - @{}", report.username),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Report",
    );
    let layer = doc.get_page(page).get_layer(layer);

    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Render(e.to_string()))?;
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Render(e.to_string()))?;

    let text_color = Color::Rgb(Rgb::new(0.1, 0.1, 0.15, None));
    layer.set_fill_color(text_color.clone());

    layer.use_text("Bot Analysis Report", 20.0, Mm(MARGIN_MM), Mm(272.0), &bold);
    layer.use_text(
        format!("@{}", report.username),
        14.0,
        Mm(MARGIN_MM),
        Mm(262.0),
        &regular,
    );

    layer.set_fill_color(verdict_color(report.verdict == Verdict::Bot));
    layer.use_text(
        format!("Verdict: {}", report.verdict),
        16.0,
        Mm(MARGIN_MM),
        Mm(250.0),
        &bold,
    );

    layer.set_fill_color(text_color.clone());
    layer.use_text(
        format!("Confidence: {}", report.confidence_display),
        12.0,
        Mm(MARGIN_MM),
        Mm(241.0),
        &regular,
    );

    // Probability bars, fill width = probability * 100% of the track
    let mut y = 226.0;
    for (bar, bot) in [(&report.human_bar, false), (&report.bot_bar, true)] {
        layer.set_fill_color(text_color.clone());
        layer.use_text(
            format!("{}  {}", bar.label, bar.display),
            11.0,
            Mm(MARGIN_MM),
            Mm(y + 7.0),
            &regular,
        );
        filled_rect(&layer, MARGIN_MM, y, BAR_TRACK_MM, 5.0, track_color());
        filled_rect(
            &layer,
            MARGIN_MM,
            y,
            BAR_TRACK_MM * bar.width_percent / 100.0,
            5.0,
            verdict_color(bot),
        );
        y -= 16.0;
    }

    // Feature importances, scaled against the largest magnitude
    if !report.features.is_empty() {
        y -= 4.0;
        layer.set_fill_color(text_color.clone());
        layer.use_text("Top features", 13.0, Mm(MARGIN_MM), Mm(y), &bold);
        y -= 9.0;

        for feature in &report.features {
            if y < 40.0 {
                break;
            }
            layer.set_fill_color(text_color.clone());
            layer.use_text(feature.feature.as_str(), 10.0, Mm(MARGIN_MM), Mm(y), &regular);
            filled_rect(&layer, 75.0, y - 1.0, 85.0, 4.0, track_color());
            filled_rect(
                &layer,
                75.0,
                y - 1.0,
                85.0 * feature.width_percent / 100.0,
                4.0,
                verdict_color(feature.highlights_bot),
            );
            layer.set_fill_color(text_color.clone());
            layer.use_text(feature.display.as_str(), 10.0, Mm(164.0), Mm(y), &regular);
            y -= 8.0;
        }
    }

    // Radar vectors as a plain value table
    if let Some(radar) = &report.radar {
        y -= 6.0;
        layer.set_fill_color(text_color.clone());
        layer.use_text("Profile vs. reference profiles", 13.0, Mm(MARGIN_MM), Mm(y), &bold);
        y -= 8.0;
        layer.use_text(
            "feature / user / avg bot / avg human",
            9.0,
            Mm(MARGIN_MM),
            Mm(y),
            &regular,
        );
        y -= 7.0;

        for (i, label) in radar.labels.iter().enumerate() {
            if y < 25.0 {
                break;
            }
            let cell = |v: &[f64]| v.get(i).map(|x| format!("{:.2}", x)).unwrap_or_default();
            layer.use_text(
                format!(
                    "{}: {} / {} / {}",
                    label,
                    cell(&radar.user),
                    cell(&radar.avg_bot),
                    cell(&radar.avg_human)
                ),
                9.0,
                Mm(MARGIN_MM),
                Mm(y),
                &regular,
            );
            y -= 6.0;
        }
    }

    layer.set_fill_color(Color::Rgb(Rgb::new(0.5, 0.5, 0.55, None)));
    layer.use_text(
        format!(
            "Generated by {} v{} on {}",
            crate::constants::APP_NAME,
            crate::constants::APP_VERSION,
            Local::now().format("%Y-%m-%d")
        ),
        8.0,
        Mm(MARGIN_MM),
        Mm(12.0),
        &regular,
    );

    let file = File::create(path).map_err(|e| ExportError::Io(e.to_string()))?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| ExportError::Render(e.to_string()))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::types::{FeatureWeight, PredictionResult};
    use crate::logic::view::single;

    fn sample_report() -> SingleReport {
        let result = PredictionResult {
            username: "elonmusk".to_string(),
            prediction: Some(Verdict::Human),
            confidence: Some(0.93),
            bot_probability: Some(0.07),
            human_probability: Some(0.93),
            top_features: Some(vec![
                FeatureWeight {
                    feature: "followers".to_string(),
                    importance: -1.2,
                },
                FeatureWeight {
                    feature: "posts_count".to_string(),
                    importance: 0.4,
                },
            ]),
            profile_data: None,
            radar_data: None,
            error: None,
        };
        single::build(&result).unwrap()
    }

    #[test]
    fn test_file_name_encodes_username_and_date() {
        let name = report_file_name("elonmusk");
        let today = Local::now().format("%Y-%m-%d").to_string();
        assert_eq!(name, format!("bot-analysis-elonmusk-{}.pdf", today));
    }

    #[test]
    fn test_file_name_sanitizes_unsafe_characters() {
        let name = report_file_name("we/ird user");
        assert!(name.starts_with("bot-analysis-we_ird_user-"));
    }

    #[test]
    fn test_export_writes_a_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_single_report(&sample_report(), Some(dir.path().to_path_buf())).unwrap();

        assert!(path.exists());
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }
}
