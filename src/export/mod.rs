//! # Label Export
//!
//! High resolution downloads of the rendered panel. Every format starts
//! from the same rasterization at [`EXPORT_SCALE`], double the preview
//! density, so the downloaded file matches the preview layout exactly.
//!
//! | Format | Encoding | Filename |
//! |--------|----------|----------|
//! | PNG | `image` PNG encoder, 8-bit gray | `nutrition-facts.png` |
//! | JPEG | `image` JPEG encoder, quality 100, 8-bit gray | `nutrition-facts.jpeg` |
//! | PDF | single page, the JPEG embedded as a `DCTDecode` XObject | `nutrition-facts.pdf` |

pub mod pdf;

use std::fmt;
use std::str::FromStr;

use image::GrayImage;

use crate::error::EtiquetaError;
use crate::label::LabelView;
use crate::render::{encode_png, render_image};

/// Scale used for downloads; double the preview density.
pub const EXPORT_SCALE: usize = 4;

/// Download format for a composed label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Jpeg,
    Png,
}

impl ExportFormat {
    /// The fixed download filename for this format.
    pub fn filename(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "nutrition-facts.pdf",
            ExportFormat::Jpeg => "nutrition-facts.jpeg",
            ExportFormat::Png => "nutrition-facts.png",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Jpeg => "image/jpeg",
            ExportFormat::Png => "image/png",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Jpeg => "jpeg",
            ExportFormat::Png => "png",
        };
        f.write_str(name)
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "jpeg" | "jpg" => Ok(ExportFormat::Jpeg),
            "png" => Ok(ExportFormat::Png),
            other => Err(format!("unknown export format: {other}")),
        }
    }
}

/// A finished download: bytes plus the headers the response needs.
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub filename: &'static str,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Render the view at export scale and encode it in the requested format.
pub fn export(view: &LabelView, format: ExportFormat) -> Result<ExportFile, EtiquetaError> {
    let image = render_image(view, EXPORT_SCALE);
    let bytes = match format {
        ExportFormat::Png => encode_png(&image)?,
        ExportFormat::Jpeg => encode_jpeg(&image)?,
        ExportFormat::Pdf => pdf::document(&image)?,
    };

    Ok(ExportFile {
        filename: format.filename(),
        content_type: format.content_type(),
        bytes,
    })
}

/// Encode a grayscale image as a full quality JPEG.
pub fn encode_jpeg(image: &GrayImage) -> Result<Vec<u8>, EtiquetaError> {
    use image::ImageEncoder;

    let mut jpeg_bytes = Vec::new();
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg_bytes, 100);
    encoder
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ExtendedColorType::L8,
        )
        .map_err(|e: image::ImageError| EtiquetaError::Export(e.to_string()))?;

    Ok(jpeg_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::NutritionLabel;

    #[test]
    fn format_names_round_trip() {
        for format in [ExportFormat::Pdf, ExportFormat::Jpeg, ExportFormat::Png] {
            assert_eq!(format.to_string().parse::<ExportFormat>().ok(), Some(format));
        }
        assert_eq!("jpg".parse::<ExportFormat>().ok(), Some(ExportFormat::Jpeg));
        assert!("svg".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn filenames_and_content_types_line_up() {
        assert_eq!(ExportFormat::Pdf.filename(), "nutrition-facts.pdf");
        assert_eq!(ExportFormat::Pdf.content_type(), "application/pdf");
        assert_eq!(ExportFormat::Jpeg.filename(), "nutrition-facts.jpeg");
        assert_eq!(ExportFormat::Jpeg.content_type(), "image/jpeg");
        assert_eq!(ExportFormat::Png.filename(), "nutrition-facts.png");
        assert_eq!(ExportFormat::Png.content_type(), "image/png");
    }

    #[test]
    fn jpeg_export_starts_with_the_jpeg_marker() {
        let view = NutritionLabel::new("Granola Bar").view();
        let file = export(&view, ExportFormat::Jpeg).unwrap();
        assert_eq!(&file.bytes[..2], &[0xFF, 0xD8]);
        assert_eq!(file.filename, "nutrition-facts.jpeg");
    }

    #[test]
    fn pdf_export_starts_with_the_pdf_header() {
        let view = NutritionLabel::new("Granola Bar").view();
        let file = export(&view, ExportFormat::Pdf).unwrap();
        assert!(file.bytes.starts_with(b"%PDF-1.4"));
    }

    #[test]
    fn png_export_starts_with_the_png_signature() {
        let view = NutritionLabel::new("Granola Bar").view();
        let file = export(&view, ExportFormat::Png).unwrap();
        assert_eq!(&file.bytes[..4], &[0x89, b'P', b'N', b'G']);
    }
}
