//! Filtering the host selection down to exportable curve objects

use super::types::{Dimensions, ObjectKind, SceneObject};

/// Whether an object can be exported: a curve with 2D geometry
pub fn is_eligible(obj: &SceneObject) -> bool {
    obj.kind == ObjectKind::Curve && obj.dimensions == Dimensions::TwoD
}

/// Selected objects that can be exported, in scene order.
///
/// Selected objects that are not 2D curves are skipped with a warning.
pub fn eligible_objects(objects: &[SceneObject]) -> Vec<&SceneObject> {
    objects
        .iter()
        .filter(|obj| obj.selected)
        .filter(|obj| {
            let eligible = is_eligible(obj);
            if !eligible {
                log::warn!(
                    "skipping '{}': not a 2D curve ({:?}, {:?})",
                    obj.name,
                    obj.kind,
                    obj.dimensions
                );
            }
            eligible
        })
        .collect()
}

/// Counts of eligible and ineligible objects in the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionSummary {
    pub eligible: usize,
    pub ineligible: usize,
}

impl SelectionSummary {
    pub fn of(objects: &[SceneObject]) -> Self {
        objects
            .iter()
            .filter(|obj| obj.selected)
            .fold(Self::default(), |mut summary, obj| {
                if is_eligible(obj) {
                    summary.eligible += 1;
                } else {
                    summary.ineligible += 1;
                }
                summary
            })
    }

    /// Export is offered only while 2D curves outnumber everything else
    /// in the selection
    pub fn is_exportable(&self) -> bool {
        self.eligible > self.ineligible
    }
}
