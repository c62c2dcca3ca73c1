// File: src/ocr.rs
//
// Text-extraction collaborator: wraps Tesseract behind an explicit,
// per-engine configuration. Images are converted to grayscale and upscaled
// before recognition; registration-page screenshots are often too small for
// Tesseract at native resolution.
use anyhow::{Context, Result};
use image::imageops::FilterType;
use leptess::{LepTess, Variable};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Tesseract language pack, e.g. "heb".
    pub language: String,
    /// Tesseract page segmentation mode. "6" = single uniform block.
    pub page_seg_mode: String,
    /// Upscale factor applied before recognition.
    pub scale_factor: f32,
    /// Override for the tessdata directory. `None` uses the system default.
    pub tessdata_path: Option<String>,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: "heb".to_string(),
            page_seg_mode: "6".to_string(),
            scale_factor: 1.5,
            tessdata_path: None,
        }
    }
}

pub struct OcrEngine {
    config: OcrConfig,
}

impl OcrEngine {
    pub fn new(config: OcrConfig) -> Self {
        Self { config }
    }

    /// Runs OCR on one image file and returns the raw multi-line text.
    ///
    /// Blocking. Callers that can tolerate a failed image (the GUI can)
    /// should log the error and substitute an empty string.
    pub fn extract_text(&self, path: &Path) -> Result<String> {
        let img = image::open(path)
            .with_context(|| format!("failed to load image {}", path.display()))?;
        let gray = img.into_luma8();

        let (width, height) = gray.dimensions();
        let scale = self.config.scale_factor.max(1.0);
        let scaled = image::imageops::resize(
            &gray,
            (width as f32 * scale) as u32,
            (height as f32 * scale) as u32,
            FilterType::CatmullRom,
        );

        // leptess wants image data in a standard container format.
        let mut png_bytes = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut png_bytes);
        image::DynamicImage::ImageLuma8(scaled)
            .write_to(&mut cursor, image::ImageFormat::Png)
            .context("failed to encode preprocessed image as PNG")?;

        let mut tess = LepTess::new(self.config.tessdata_path.as_deref(), &self.config.language)
            .with_context(|| {
                format!(
                    "failed to initialize Tesseract with language '{}'. Is Tesseract \
                     installed with that language pack?",
                    self.config.language
                )
            })?;
        tess.set_variable(Variable::TesseditPagesegMode, &self.config.page_seg_mode)
            .context("failed to set page segmentation mode")?;
        tess.set_image_from_mem(&png_bytes)
            .context("failed to load image into Tesseract")?;
        // Screenshots carry no DPI metadata; Tesseract works best around 300.
        tess.set_source_resolution(300);

        let text = tess
            .get_utf8_text()
            .with_context(|| format!("OCR failed for {}", path.display()))?;

        if text.trim().is_empty() {
            log::warn!("no text extracted from {}", path.display());
        }
        Ok(text)
    }
}
