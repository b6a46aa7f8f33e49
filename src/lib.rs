//! # Etiqueta - Nutrition Facts Label Studio
//!
//! Etiqueta composes FDA-style Nutrition Facts labels. It provides:
//!
//! - **Label model**: serving info, the fixed 14-nutrient catalog,
//!   additional ingredients, custom sections
//! - **Form editors**: the keystroke-level editing rules of the label studio
//! - **Panel renderer**: layout program plus grayscale rasterizer
//! - **Export**: PNG preview, JPEG and single-page PDF downloads
//! - **Web editor**: axum server with an embedded single-page frontend
//!
//! ## Quick Start
//!
//! ```
//! use etiqueta::label::{NutritionLabel, Unit};
//! use etiqueta::render;
//!
//! // Build a label and fill in a row
//! let mut label = NutritionLabel::new("Trail Mix");
//! label.serving.serving_size = "30g".into();
//! label.serving.calories = "150".into();
//! label.nutrients[0].amount = 5.0;
//! label.nutrients[0].unit = Unit::G;
//! label.nutrients[0].daily_value = 6.0;
//!
//! // Rasterize the facts panel and encode it as PNG bytes
//! let png = render::render_preview_png(&label.view())?;
//! assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
//! # Ok::<(), etiqueta::EtiquetaError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`label`] | Data model, nutrient catalog, numeric coercion |
//! | [`editor`] | Form editors with their gating and reset rules |
//! | [`session`] | Composition controller for one editing session |
//! | [`dashboard`] | Saved-label list with two-step delete |
//! | [`store`] | JSON blob persistence and the user session |
//! | [`auth`] | Mock login gate and sign-up validation |
//! | [`panel`] | Typed layout program for the facts panel |
//! | [`render`] | Grayscale rasterizer and PNG encoding |
//! | [`export`] | JPEG encoding and the single-page PDF writer |
//! | [`server`] | Web editor and JSON API |
//! | [`error`] | Error types |

pub mod auth;
pub mod dashboard;
pub mod editor;
pub mod error;
pub mod export;
pub mod label;
pub mod panel;
pub mod render;
pub mod server;
pub mod session;
pub mod store;

// Re-exports for convenience
pub use error::EtiquetaError;
pub use label::NutritionLabel;
pub use session::LabelSession;
