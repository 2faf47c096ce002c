//! Form rendering module
//!
//! - `field_renderer`: single field rendering
//! - `wizard_form`: step indicator, fields, action row and submission panels

mod field_renderer;
mod wizard_form;

pub use wizard_form::draw_wizard;
