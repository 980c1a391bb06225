//! Immutable sphere-cluster scene.

use rays_math::Vec3;

use crate::art::Art;

/// Depth (y) at which every art sphere sits.
const ART_DEPTH: f64 = -6.5;
/// Height added below the lowest art row so the cluster floats above the
/// floor plane.
const ART_LIFT: f64 = 1.0;

/// An ordered, immutable list of unit-sphere centers.
///
/// Built once before rendering and shared read-only by every worker; the
/// renderer never mutates it during a pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    centers: Vec<Vec3>,
}

impl Scene {
    /// Build a scene from explicit sphere centers.
    pub fn new(centers: Vec<Vec3>) -> Self {
        Self { centers }
    }

    /// Place one unit sphere per occupied art cell.
    ///
    /// Columns advance toward -x and rows stack upward in z from the
    /// floor, so the silhouette reads correctly from the stock camera.
    pub fn from_art(art: &Art) -> Self {
        let rows = art.rows();
        let mut centers = Vec::new();
        for (row, line) in art.lines().iter().enumerate() {
            for (col, cell) in line.chars().enumerate() {
                if cell != ' ' {
                    centers.push(Vec3::new(
                        -(col as f64),
                        ART_DEPTH,
                        (rows - row) as f64 + ART_LIFT,
                    ));
                }
            }
        }
        Self { centers }
    }

    /// Sphere centers in scene order.
    pub fn centers(&self) -> &[Vec3] {
        &self.centers
    }

    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }
}
