//! SVG renderer for curve objects
//!
//! Splines become path commands, commands are grouped into one `<path>`
//! per object and material, and the document is written through quick-xml.

pub mod color;
pub mod config;
pub mod path;
pub mod svg;

pub use color::color_to_hex;
pub use config::ExportSettings;
pub use path::{build_spline_path, to_path_data, PathBuilder, PathCommand};
pub use svg::{PathElement, SvgDocument};
