//! Reusable UI widget components.
//!
//! This module contains reusable widget components such as the loading
//! spinner and styling utilities.

pub mod spinner;
pub mod styling;
