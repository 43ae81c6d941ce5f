//! Curve to SVG - export 2D Bezier curve objects as SVG documents
//!
//! Each spline's control points become `M`/`C`/`Z` path commands. Splines
//! of one object that share a material are drawn by a single `<path>`, and
//! the document's viewBox covers every anchor and handle visited.
//!
//! # Example
//!
//! ```rust
//! use curve_to_svg::geometry::Vec2;
//! use curve_to_svg::scene::{BezierPoint, SceneObject, Spline};
//! use curve_to_svg::{render, ExportSettings};
//!
//! let square = SceneObject::curve("Square").with_spline(Spline::new(vec![
//!     BezierPoint::corner(Vec2::new(0.0, 0.0)),
//!     BezierPoint::corner(Vec2::new(10.0, 0.0)),
//! ]));
//!
//! let svg = render(&[square], &ExportSettings::new().with_precision(0)).unwrap();
//! assert!(svg.contains(r#"d="M 0,0 C 0,0 10,0 10,0""#));
//! ```

pub mod error;
pub mod geometry;
pub mod renderer;
pub mod scene;

use std::path::PathBuf;

pub use error::{ExportError, SceneError, SerializeError};
pub use renderer::{ExportSettings, SvgDocument};
pub use scene::{Scene, SceneObject};

/// Build the SVG document for the selected 2D curves in `objects`
///
/// Fails with [`ExportError::NoSelection`] when no selected object is a
/// 2D curve.
pub fn render(objects: &[SceneObject], settings: &ExportSettings) -> Result<String, ExportError> {
    settings.validate()?;

    let selected = scene::eligible_objects(objects);
    if selected.is_empty() {
        return Err(ExportError::NoSelection);
    }

    let mut doc = SvgDocument::new(settings);
    for obj in selected {
        doc.add_object(obj);
    }
    log::debug!("viewBox {}", doc.view_box());

    Ok(doc.to_xml(settings.minify)?)
}

/// Render the selected 2D curves and write the document to
/// `settings.output`, replacing any existing file
///
/// The document is fully built before the file is opened, so a failed
/// render leaves the output untouched. Returns the path written.
pub fn export(objects: &[SceneObject], settings: &ExportSettings) -> Result<PathBuf, ExportError> {
    let svg = render(objects, settings)?;

    let path = settings.output.clone();
    std::fs::write(&path, svg).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    log::info!("wrote {}", path.display());

    Ok(path)
}

/// Export a scene with its own settings
pub fn export_scene(scene: &Scene) -> Result<PathBuf, ExportError> {
    export(&scene.objects, &scene.settings)
}
