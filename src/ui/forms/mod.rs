//! Form rendering module
//!
//! This module contains UI components for rendering the intake form:
//! - `field_renderer`: Field rendering utilities
//! - `intake_form`: The intake form with its action panel

mod field_renderer;
mod intake_form;

pub use intake_form::draw_intake_form;
