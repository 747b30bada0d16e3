//! ridgemap-render: Raster output assembly (sans-IO)
//!
//! Composes pipeline geometry into a raster canvas and assembles the
//! parameter-encoding output file name. Persistence stays with the
//! caller.

pub mod canvas;
pub mod naming;

pub use canvas::{RenderError, render};
pub use naming::output_file_name;
