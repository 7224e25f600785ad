//! Engine constants and caller-tunable settings.
//!
//! The `const` values are the engine's fixed thresholds. The structs carry
//! defaults for the caller-side concerns (cross-section widths, picking,
//! tessellation) and can be loaded from any serde format with the `serde`
//! feature.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Deflection (radians, ~2.9°) below which an IP is treated as straight.
pub const DEFLECTION_THRESHOLD: f64 = 0.05;

/// Radius used when a new alignment is created without an explicit one.
pub const DEFAULT_RADIUS: f64 = 50.0;

/// Default pick tolerance for element selection, in plane units.
pub const DEFAULT_SELECT_TOLERANCE: f64 = 5.0;

/// Offset distance of the pavement edge from the centerline.
pub const DEFAULT_PAVEMENT_EDGE: f64 = 7.0;

/// Offset distance of the travel-lane edge from the centerline.
pub const DEFAULT_LANE_EDGE: f64 = 3.5;

/// Distances used to derive the parallel curves drawn for one alignment.
///
/// The offset engine only knows about a single scalar per call; this struct
/// is the caller's description of which distances to request.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CrossSection {
    /// Distance from the centerline to each pavement edge.
    pub pavement_edge: f64,
    /// Distance from the centerline to each travel-lane edge.
    pub lane_edge: f64,
}

impl Default for CrossSection {
    fn default() -> Self {
        Self {
            pavement_edge: DEFAULT_PAVEMENT_EDGE,
            lane_edge: DEFAULT_LANE_EDGE,
        }
    }
}

impl CrossSection {
    /// Creates a cross-section from its two edge distances.
    #[must_use]
    pub fn new(pavement_edge: f64, lane_edge: f64) -> Self {
        Self {
            pavement_edge,
            lane_edge,
        }
    }

    /// Signed offset distances, right side before left side for each edge,
    /// followed by the zero-offset centerline.
    #[must_use]
    pub fn distances(&self) -> [f64; 5] {
        [
            self.pavement_edge,
            -self.pavement_edge,
            self.lane_edge,
            -self.lane_edge,
            0.0,
        ]
    }
}

/// Parameters controlling arc tessellation quality.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TessellationParams {
    /// Maximum allowed deviation from the true arc.
    pub tolerance: f64,
    /// Minimum number of segments per arc.
    pub min_segments: u32,
    /// Maximum number of segments per arc.
    pub max_segments: u32,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            tolerance: 0.05,
            min_segments: 2,
            max_segments: 256,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_section_default_distances() {
        let d = CrossSection::default().distances();
        assert_eq!(d, [7.0, -7.0, 3.5, -3.5, 0.0]);
    }

    #[test]
    fn cross_section_custom() {
        let cs = CrossSection::new(6.0, 3.0);
        assert_eq!(cs.distances()[0], 6.0);
        assert_eq!(cs.distances()[3], -3.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    #[allow(clippy::unwrap_used)]
    fn cross_section_from_json() {
        let cs: CrossSection =
            serde_json::from_str(r#"{"pavement_edge": 8.0, "lane_edge": 4.0}"#).unwrap();
        assert_eq!(cs, CrossSection::new(8.0, 4.0));
    }
}
