// src/display/drivers/mod.rs
//! Display device implementations.

pub mod fbdev;
pub mod headless;
