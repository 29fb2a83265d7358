//! cycloid_drive library - Cycloidal drive geometry helper
//!
//! Computes rotor profiles, roller and output-hole placement for a
//! cycloidal reducer, and exports them as SolidWorks equation text,
//! parameter sheets, CSV point clouds and SVG previews.

pub mod cli;
pub mod commands;
pub mod config;
pub mod export;
pub mod geometry;
pub mod logging;
pub mod output;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod test_utils;
