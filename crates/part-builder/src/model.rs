use geo::{Area, MultiPolygon};

/// One band of the revolved solid: a conical frustum between two z planes.
/// Straight cylinders have `r_bottom == r_top`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slab {
    pub z0: f64,
    pub z1: f64,
    pub r_bottom: f64,
    pub r_top: f64,
}

impl Slab {
    pub fn straight(z0: f64, z1: f64, radius: f64) -> Self {
        Self {
            z0,
            z1,
            r_bottom: radius,
            r_top: radius,
        }
    }
}

/// The composed part before tessellation: a bottom-to-top stack of
/// revolved slabs, an optional concentric through-hole, and embossed
/// label ink on the top face.
#[derive(Debug, Clone)]
pub struct PartModel {
    /// Contiguous in z, ordered bottom to top.
    pub slabs: Vec<Slab>,
    pub hole_radius: f64,
    /// Label footprint on the top face, already clipped clear of the hole.
    pub label: MultiPolygon<f64>,
    /// True when the through-hole passes through the label ink.
    pub label_trimmed: bool,
    /// Emboss height of the label above the top face.
    pub text_height: f64,
    pub warnings: Vec<String>,
}

impl PartModel {
    /// Z of the top face the label sits on.
    pub fn top_z(&self) -> f64 {
        self.slabs.last().map_or(0.0, |s| s.z1)
    }

    /// Exact volume of the tessellated solid at the given segment count.
    ///
    /// The mesh approximates every circle by the inscribed regular N-gon,
    /// so slab volumes use the N-gon area factor rather than pi. Used by
    /// the report and as a test oracle against the mesh's own volume.
    pub fn expected_volume(&self, segments: u32) -> f64 {
        let n = f64::from(segments);
        // Area of the inscribed N-gon of radius r is k * r^2.
        let k = 0.5 * n * (std::f64::consts::TAU / n).sin();
        let mut v = 0.0;
        for s in &self.slabs {
            let h = s.z1 - s.z0;
            // N-gon frustum: wedge volumes are linear in the cap areas.
            v += k * h * (s.r_bottom.powi(2) + s.r_bottom * s.r_top + s.r_top.powi(2)) / 3.0;
        }
        v -= k * self.hole_radius.powi(2) * self.top_z();
        v + self.label.unsigned_area() * self.text_height
    }
}
