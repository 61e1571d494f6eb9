//! Procedural generator for a store-listing feature graphic.
//!
//! A [`GraphicConfig`] describes the banner: canvas size, gradient colors, centered title and
//! subtitle, a row of feature labels and decorative markers. [`generate`] composes it on a CPU
//! canvas and writes an optimized PNG.
//!
//! - Load or build a [`GraphicConfig`] (the default reproduces the stock banner)
//! - Call [`compose`] for the pixels, or [`generate`] to also write the PNG
#![forbid(unsafe_code)]

mod foundation;

pub mod compose;
pub mod config;
pub mod encode;
pub mod gradient;
pub mod render;
pub mod text;

pub use crate::compose::{GraphicReport, LayoutPlan, compose, generate, plan_layout};
pub use crate::config::{FeatureLabel, GraphicConfig, Palette};
pub use crate::foundation::core::{Rgb8, Size};
pub use crate::foundation::error::{GraphicError, GraphicResult};
pub use crate::render::FrameRgb8;
pub use crate::text::{FontChain, FontHandle, FontSource, TextLayoutEngine};
