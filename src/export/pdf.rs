//! PDF document rendering.
//!
//! Produces a single A4 page per week: header, the 7-day time table,
//! totals, signature images, the verification QR code, and a footer. The
//! whole document is rendered in memory and returned as bytes; writing it
//! to disk is the caller's concern.
//!
//! Failure policy: a failure to assemble the page at all is an error, but
//! decorative elements degrade gracefully. An unreadable signature image or
//! a failed QR encoding is logged and the element is left off the sheet.

use base64::Engine;
use printpdf::{
    BuiltinFont, Color, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject,
    IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Px, Rgb,
};

use crate::config::AppConfig;
use crate::export::{payload, qr, ExportError};
use crate::models::WeekRecord;
use crate::timesheet::{calendar, time};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 18.0;

const TITLE_SIZE: f32 = 18.0;
const BODY_SIZE: f32 = 10.0;
const SMALL_SIZE: f32 = 8.0;
const TABLE_ROW_MM: f32 = 9.0;

const SIGNATURE_WIDTH_MM: f32 = 50.0;
const QR_SIDE_MM: f32 = 32.0;

/// Render `record` into a complete PDF document.
pub fn render_document(record: &WeekRecord, config: &AppConfig) -> Result<Vec<u8>, ExportError> {
    let (doc, page, layer) = PdfDocument::new(
        "Stundennachweis",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Inhalt",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let layer = doc.get_page(page).get_layer(layer);

    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

    // Title.
    layer.set_fill_color(Color::Rgb(Rgb::new(0.1, 0.2, 0.5, None)));
    layer.use_text("Stundennachweis", TITLE_SIZE, Mm(MARGIN_MM), Mm(y), &bold);
    layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    y -= 10.0;

    // Header block.
    let header_lines = [
        format!("Mitarbeiter: {}", record.employee_name),
        format!("Kunde: {}", record.customer_name),
        format!(
            "Kalenderwoche: KW {} / {}  ({})",
            record.iso_week,
            record.year,
            calendar::date_range_label(record.year, record.iso_week, record.shift_model.anchor())
        ),
        format!(
            "Schichtmodell: {} {:?}",
            record.shift_model.icon(),
            record.shift_model
        ),
    ];
    for line in &header_lines {
        layer.use_text(line, BODY_SIZE, Mm(MARGIN_MM), Mm(y), &font);
        y -= 5.5;
    }
    y -= 4.0;

    // Day table.
    y = draw_day_table(&layer, &font, &bold, record, y);
    y -= 6.0;

    // Week total.
    let total_minutes: u32 = record.days.iter().map(time::compute_worked_minutes).sum();
    layer.use_text(
        format!(
            "Gesamt: {} ({}h)",
            time::to_time_string(total_minutes),
            time::decimal_hours(total_minutes)
        ),
        BODY_SIZE + 1.0,
        Mm(MARGIN_MM),
        Mm(y),
        &bold,
    );
    y -= 16.0;

    if config.export.include_signatures {
        y = draw_signatures(&layer, &font, record, y);
    }

    if config.export.include_verification_code {
        draw_verification_code(&layer, &font, record);
    }

    // Footer.
    layer.use_text(
        &config.company.name,
        SMALL_SIZE,
        Mm(MARGIN_MM),
        Mm(MARGIN_MM - 6.0),
        &font,
    );
    layer.use_text(
        format!("Erstellt am: {}", chrono::Local::now().format("%d.%m.%Y")),
        SMALL_SIZE,
        Mm(PAGE_WIDTH_MM - MARGIN_MM - 35.0),
        Mm(MARGIN_MM - 6.0),
        &font,
    );

    let _ = y;
    doc.save_to_bytes().map_err(|e| ExportError::Pdf(e.to_string()))
}

/// Draw the 7-row day table, returning the y position below it.
fn draw_day_table(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    bold: &IndirectFontRef,
    record: &WeekRecord,
    mut y: f32,
) -> f32 {
    let columns = [
        (MARGIN_MM, "Tag"),
        (MARGIN_MM + 42.0, "Beginn"),
        (MARGIN_MM + 62.0, "Ende"),
        (MARGIN_MM + 82.0, "Pause 1"),
        (MARGIN_MM + 112.0, "Pause 2"),
        (MARGIN_MM + 142.0, "Stunden"),
    ];
    for (x, title) in columns {
        layer.use_text(title, BODY_SIZE, Mm(x), Mm(y), bold);
    }
    y -= TABLE_ROW_MM;

    let anchor = record.shift_model.anchor();
    for (index, day) in record.days.iter().take(7).enumerate() {
        let label = match chrono::NaiveDate::parse_from_str(&day.date, "%Y-%m-%d") {
            Ok(date) => calendar::day_label(index, anchor, date),
            Err(_) => day.date.clone(),
        };
        let cells = [
            (columns[0].0, label),
            (columns[1].0, or_dash(&day.start)),
            (columns[2].0, or_dash(&day.end)),
            (columns[3].0, range_or_dash(&day.break1_start, &day.break1_end)),
            (columns[4].0, range_or_dash(&day.break2_start, &day.break2_end)),
            (
                columns[5].0,
                format!("{} ({}h)", day.worked_hours(), day.worked_decimal_hours),
            ),
        ];
        for (x, text) in cells {
            layer.use_text(text, BODY_SIZE, Mm(x), Mm(y), font);
        }
        if day.is_night_shift {
            layer.use_text("Nacht", SMALL_SIZE, Mm(MARGIN_MM + 168.0), Mm(y), font);
        }
        y -= TABLE_ROW_MM;
    }
    y
}

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn range_or_dash(from: &str, to: &str) -> String {
    if from.is_empty() || to.is_empty() {
        "-".to_string()
    } else {
        format!("{from}-{to}")
    }
}

/// Draw both signature blocks, returning the y position below them.
fn draw_signatures(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    record: &WeekRecord,
    y: f32,
) -> f32 {
    let blocks = [
        (
            MARGIN_MM,
            "Unterschrift Mitarbeiter",
            record.employee_signature.as_deref(),
            record.employee_name.as_str(),
        ),
        (
            MARGIN_MM + 90.0,
            "Unterschrift Vorgesetzter",
            record.supervisor_signature.as_deref(),
            record.supervisor_name.as_deref().unwrap_or(""),
        ),
    ];

    let image_height_mm = 20.0;
    for (x, caption, signature, name) in blocks {
        if let Some(data_url) = signature {
            match decode_signature_png(data_url) {
                Ok((image, px_width, px_height)) => {
                    let dpi = px_width as f32 * 25.4 / SIGNATURE_WIDTH_MM;
                    let height_mm = px_height as f32 * 25.4 / dpi;
                    image.add_to_layer(
                        layer.clone(),
                        ImageTransform {
                            translate_x: Some(Mm(x)),
                            translate_y: Some(Mm(y - height_mm.min(image_height_mm))),
                            dpi: Some(dpi),
                            ..Default::default()
                        },
                    );
                }
                Err(e) => {
                    tracing::warn!("signature image skipped: {e}");
                }
            }
        }
        let line_y = y - image_height_mm - 3.0;
        layer.use_text(
            "_______________________________",
            BODY_SIZE,
            Mm(x),
            Mm(line_y),
            font,
        );
        layer.use_text(caption, SMALL_SIZE, Mm(x), Mm(line_y - 4.0), font);
        if !name.is_empty() {
            layer.use_text(name, SMALL_SIZE, Mm(x), Mm(line_y - 8.0), font);
        }
    }
    y - image_height_mm - 16.0
}

/// Draw the verification QR code in the lower right corner. Failures are
/// logged and the code is simply omitted.
fn draw_verification_code(layer: &PdfLayerReference, font: &IndirectFontRef, record: &WeekRecord) {
    let payload = payload::build_payload(record);
    let json = match serde_json::to_string(&payload) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("verification payload skipped: {e}");
            return;
        }
    };

    match qr::qr_image(&json) {
        Ok((image, side)) => {
            let x = PAGE_WIDTH_MM - MARGIN_MM - QR_SIDE_MM;
            let y = MARGIN_MM;
            let dpi = side as f32 * 25.4 / QR_SIDE_MM;
            image.add_to_layer(
                layer.clone(),
                ImageTransform {
                    translate_x: Some(Mm(x)),
                    translate_y: Some(Mm(y)),
                    dpi: Some(dpi),
                    ..Default::default()
                },
            );
            layer.use_text("Verifikationscode", SMALL_SIZE, Mm(x), Mm(y - 4.0), font);
        }
        Err(e) => tracing::warn!("verification code skipped: {e}"),
    }
}

/// Decode a `data:image/png;base64,...` signature into a greyscale PDF
/// image, returning it with its pixel dimensions.
fn decode_signature_png(data_url: &str) -> Result<(Image, u32, u32), ExportError> {
    let encoded = data_url
        .split_once("base64,")
        .map(|(_, rest)| rest)
        .unwrap_or(data_url);
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|e| ExportError::Signature(e.to_string()))?;
    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| ExportError::Signature(e.to_string()))?
        .to_luma8();
    let (width, height) = decoded.dimensions();

    let image = Image::from(ImageXObject {
        width: Px(width as usize),
        height: Px(height as usize),
        color_space: ColorSpace::Greyscale,
        bits_per_component: ColorBits::Bit8,
        interpolate: true,
        image_data: decoded.into_raw(),
        image_filter: None,
        clipping_bbox: None,
    });
    Ok((image, width, height))
}
