//! PixelHue Library
//!
//! Color analysis engine behind the PixelHue color picker. Given a sampled
//! RGB value it derives the other color spaces, the closest named color and a
//! few perceptual measures, and builds palettes around it. Colors can also be
//! sampled from pixels of an image file.
//!
//! The `cli` module is the command-line front end built on top.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod dataset;
pub mod engine;
pub mod history;
pub mod logging;
pub mod models;
pub mod sampler;
