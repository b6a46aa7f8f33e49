//! # Single Page PDF Writer
//!
//! Builds the PDF download by hand: one page, the rendered label embedded
//! as a baseline JPEG image XObject. Viewers decode the JPEG themselves
//! via the `DCTDecode` filter, so no recompression happens here.
//!
//! ## Document Layout
//!
//! | Object | Content |
//! |--------|---------|
//! | 1 | `/Catalog`, points at the page tree |
//! | 2 | `/Pages` with a single kid |
//! | 3 | `/Page` with the MediaBox and resources |
//! | 4 | `/XObject` image stream (the JPEG bytes) |
//! | 5 | content stream placing the image over the full page |
//!
//! Followed by the xref table (6 entries, 20 bytes each), the trailer,
//! `startxref`, and `%%EOF`.
//!
//! ## Page Size
//!
//! Raster pixels are converted at 96 px/inch to PDF points (72/inch), so a
//! 1600 px wide export becomes a 1200 pt page and prints at the intended
//! physical size.

use image::GrayImage;

use super::encode_jpeg;
use crate::error::EtiquetaError;

/// Encode the image as JPEG and wrap it in a single page document.
pub fn document(image: &GrayImage) -> Result<Vec<u8>, EtiquetaError> {
    let jpeg = encode_jpeg(image)?;
    Ok(wrap_jpeg(&jpeg, image.width(), image.height()))
}

/// Wrap baseline grayscale JPEG bytes in a single page PDF.
///
/// `width_px` and `height_px` must be the JPEG's pixel dimensions; they
/// size both the image dictionary and the page.
pub fn wrap_jpeg(jpeg: &[u8], width_px: u32, height_px: u32) -> Vec<u8> {
    let width_pt = points(width_px);
    let height_pt = points(height_px);

    let mut doc = Vec::with_capacity(jpeg.len() + 1024);
    doc.extend_from_slice(b"%PDF-1.4\n");
    // high-bit comment line marks the file as binary
    doc.extend_from_slice(b"%\xE2\xE3\xCF\xD3\n");

    let mut offsets = [0usize; 5];

    offsets[0] = doc.len();
    doc.extend_from_slice(b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

    offsets[1] = doc.len();
    doc.extend_from_slice(b"2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n");

    offsets[2] = doc.len();
    doc.extend_from_slice(
        format!(
            "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {width_pt} {height_pt}] \
             /Resources << /XObject << /Im0 4 0 R >> >> /Contents 5 0 R >>\nendobj\n"
        )
        .as_bytes(),
    );

    offsets[3] = doc.len();
    doc.extend_from_slice(
        format!(
            "4 0 obj\n<< /Type /XObject /Subtype /Image /Width {width_px} /Height {height_px} \
             /ColorSpace /DeviceGray /BitsPerComponent 8 /Filter /DCTDecode /Length {} >>\nstream\n",
            jpeg.len()
        )
        .as_bytes(),
    );
    doc.extend_from_slice(jpeg);
    doc.extend_from_slice(b"\nendstream\nendobj\n");

    // scale the unit image square up to the page and draw it
    let contents = format!("q\n{width_pt} 0 0 {height_pt} 0 0 cm\n/Im0 Do\nQ\n");
    offsets[4] = doc.len();
    doc.extend_from_slice(
        format!(
            "5 0 obj\n<< /Length {} >>\nstream\n{contents}endstream\nendobj\n",
            contents.len()
        )
        .as_bytes(),
    );

    let xref_start = doc.len();
    doc.extend_from_slice(b"xref\n0 6\n0000000000 65535 f \n");
    for offset in offsets {
        doc.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    doc.extend_from_slice(
        format!("trailer\n<< /Size 6 /Root 1 0 R >>\nstartxref\n{xref_start}\n%%EOF\n").as_bytes(),
    );

    doc
}

/// Convert raster pixels at 96 px/inch to PDF points at 72/inch.
fn points(px: u32) -> f64 {
    px as f64 * 72.0 / 96.0
}
