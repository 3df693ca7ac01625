//! QR code rendering for the verification payload.
//!
//! The payload JSON is encoded at error-correction level M and rasterized
//! into an 8-bit greyscale bitmap (one byte per module plus a 2-module
//! quiet zone) that the PDF layer embeds directly.

use printpdf::{ColorBits, ColorSpace, Image, ImageXObject, Px};
use qrcode::{Color, EcLevel, QrCode};

use crate::export::ExportError;

/// Quiet-zone width in modules on every side.
const QUIET_ZONE: usize = 2;

const WHITE: u8 = 255;
const DARK: u8 = 0;

/// Encode `data` as a QR matrix.
///
/// Returns the side length in pixels and the row-major greyscale bytes
/// (`255` light, `0` dark), quiet zone included.
pub fn qr_matrix(data: &str) -> Result<(usize, Vec<u8>), ExportError> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::M)
        .map_err(|e| ExportError::Qr(e.to_string()))?;
    let width = code.width();
    let colors = code.to_colors();

    let side = width + 2 * QUIET_ZONE;
    let mut pixels = vec![WHITE; side * side];
    for y in 0..width {
        for x in 0..width {
            if colors[y * width + x] == Color::Dark {
                pixels[(y + QUIET_ZONE) * side + (x + QUIET_ZONE)] = DARK;
            }
        }
    }
    Ok((side, pixels))
}

/// Encode `data` as a QR code wrapped in a PDF image object, returning the
/// image together with its side length in pixels (needed for dpi sizing).
pub fn qr_image(data: &str) -> Result<(Image, usize), ExportError> {
    let (side, pixels) = qr_matrix(data)?;
    let image = Image::from(ImageXObject {
        width: Px(side),
        height: Px(side),
        color_space: ColorSpace::Greyscale,
        bits_per_component: ColorBits::Bit8,
        interpolate: false,
        image_data: pixels,
        image_filter: None,
        clipping_bbox: None,
    });
    Ok((image, side))
}
