//! Snapshot of the host's curve objects, as read for one export

use serde::{Deserialize, Deserializer};

use crate::geometry::Vec2;

/// Bezier handle type. Read from the host but not used to pick commands:
/// every segment is emitted as a full cubic curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HandleType {
    #[default]
    Auto,
    Aligned,
    Vector,
    Free,
}

/// One control point of a Bezier spline
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BezierPoint {
    /// Anchor position (on the curve)
    pub co: Vec2,
    /// Handle shaping the segment entering this point
    pub handle_left: Vec2,
    /// Handle shaping the segment leaving this point
    pub handle_right: Vec2,
    #[serde(default)]
    pub handle_left_type: HandleType,
    #[serde(default)]
    pub handle_right_type: HandleType,
}

impl BezierPoint {
    pub fn new(co: Vec2, handle_left: Vec2, handle_right: Vec2) -> Self {
        Self {
            co,
            handle_left,
            handle_right,
            handle_left_type: HandleType::default(),
            handle_right_type: HandleType::default(),
        }
    }

    /// A point whose handles sit on the anchor (a sharp corner)
    pub fn corner(co: Vec2) -> Self {
        Self::new(co, co, co)
    }
}

/// Ordered control points of one continuous curve.
///
/// Point order is drawing order: reversing it flips the winding of the
/// outline, which changes how overlapping outlines are filled.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Spline {
    #[serde(default, alias = "bezier_points")]
    pub points: Vec<BezierPoint>,
    /// Closed spline: the last point connects back to the first
    #[serde(default, alias = "use_cyclic_u")]
    pub cyclic: bool,
    /// Material slot used to fill this spline
    #[serde(default)]
    pub material_index: usize,
}

impl Spline {
    pub fn new(points: Vec<BezierPoint>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    pub fn with_cyclic(mut self, cyclic: bool) -> Self {
        self.cyclic = cyclic;
        self
    }

    pub fn with_material_index(mut self, index: usize) -> Self {
        self.material_index = index;
        self
    }
}

/// A material slot's color, in linear light
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub diffuse_color: [f64; 3],
}

impl Material {
    pub fn new(name: impl Into<String>, diffuse_color: [f64; 3]) -> Self {
        Self {
            name: name.into(),
            diffuse_color,
        }
    }
}

/// Host object type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ObjectKind {
    #[default]
    Curve,
    Mesh,
    Empty,
    #[serde(other)]
    Other,
}

/// Curve geometry dimensionality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Dimensions {
    #[default]
    #[serde(rename = "2D")]
    TwoD,
    #[serde(rename = "3D")]
    ThreeD,
}

/// A host object with its curve data
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SceneObject {
    /// Display name, used as the path `id`
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: ObjectKind,
    #[serde(default)]
    pub dimensions: Dimensions,
    #[serde(default = "default_selected")]
    pub selected: bool,
    /// Object origin; becomes the path's translate transform
    #[serde(default)]
    pub location: Vec2,
    #[serde(default)]
    pub splines: Vec<Spline>,
    /// Material slots; a slot may be empty
    #[serde(default, deserialize_with = "deserialize_material_slots")]
    pub materials: Vec<Option<Material>>,
}

fn default_selected() -> bool {
    true
}

impl SceneObject {
    /// A selected 2D curve object with no splines or materials
    pub fn curve(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ObjectKind::Curve,
            dimensions: Dimensions::TwoD,
            selected: true,
            location: Vec2::default(),
            splines: vec![],
            materials: vec![],
        }
    }

    pub fn with_location(mut self, location: Vec2) -> Self {
        self.location = location;
        self
    }

    pub fn with_spline(mut self, spline: Spline) -> Self {
        self.splines.push(spline);
        self
    }

    pub fn with_material(mut self, material: Option<Material>) -> Self {
        self.materials.push(material);
        self
    }

    pub fn with_kind(mut self, kind: ObjectKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Material in slot `index`, if the slot exists and is filled
    pub fn material(&self, index: usize) -> Option<&Material> {
        self.materials.get(index).and_then(Option::as_ref)
    }
}

/// TOML form of a material slot; a slot without a color is empty
#[derive(Deserialize)]
struct MaterialSlot {
    name: Option<String>,
    diffuse_color: Option<[f64; 3]>,
}

fn deserialize_material_slots<'de, D>(deserializer: D) -> Result<Vec<Option<Material>>, D::Error>
where
    D: Deserializer<'de>,
{
    let slots = Vec::<MaterialSlot>::deserialize(deserializer)?;
    Ok(slots
        .into_iter()
        .map(|slot| {
            slot.diffuse_color
                .map(|color| Material::new(slot.name.unwrap_or_default(), color))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_lookup_tolerates_missing_slots() {
        let obj = SceneObject::curve("shape")
            .with_material(None)
            .with_material(Some(Material::new("Red", [1.0, 0.0, 0.0])));

        assert!(obj.material(0).is_none());
        assert_eq!(obj.material(1).map(|m| m.name.as_str()), Some("Red"));
        assert!(obj.material(7).is_none());
    }

    #[test]
    fn test_corner_point_handles_on_anchor() {
        let p = BezierPoint::corner(Vec2::new(3.0, 4.0));
        assert_eq!(p.handle_left, p.co);
        assert_eq!(p.handle_right, p.co);
        assert_eq!(p.handle_left_type, HandleType::Auto);
    }

    #[test]
    fn test_spline_builder() {
        let spline = Spline::new(vec![])
            .with_cyclic(true)
            .with_material_index(2);
        assert!(spline.cyclic);
        assert_eq!(spline.material_index, 2);
    }
}
