use std::fmt;

use crate::error::{AlignmentError, Result};
use crate::geometry::{Arc, Element, ElementId, OffsetElement, RadiusSpec, Tangent};
use crate::math::Point2;
use crate::operations::{ComputeElements, ElementOffset, FindElementAt, Length};
use crate::settings::CrossSection;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named alignment: its IPs, radii, and the elements derived from them.
///
/// `elements` is always the output of [`ComputeElements`] for the current
/// `(points, radii)`. Every mutator recomputes it wholesale, so the result
/// never depends on edit history.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "AlignmentData", into = "AlignmentData")
)]
pub struct Alignment {
    name: String,
    points: Vec<Point2>,
    radii: RadiusSpec,
    elements: Vec<Element>,
}

impl Alignment {
    /// Creates an alignment from a finished IP sequence.
    ///
    /// # Errors
    ///
    /// Returns `AlignmentError::TooFewPoints` if fewer than 2 points are given.
    pub fn new(name: impl Into<String>, points: Vec<Point2>, radii: RadiusSpec) -> Result<Self> {
        if points.len() < 2 {
            return Err(AlignmentError::TooFewPoints(points.len()).into());
        }
        let elements = ComputeElements::new(&points, &radii).execute();
        Ok(Self {
            name: name.into(),
            points,
            radii,
            elements,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The IP sequence in travel order.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[must_use]
    pub fn radii(&self) -> &RadiusSpec {
        &self.radii
    }

    /// Derived elements: tangents in IP order, then arcs in IP order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn tangents(&self) -> impl Iterator<Item = &Tangent> {
        self.elements.iter().filter_map(Element::as_tangent)
    }

    pub fn arcs(&self) -> impl Iterator<Item = &Arc> {
        self.elements.iter().filter_map(Element::as_arc)
    }

    /// Re-resolves an element by its stable id.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    /// Moves IP `index` to `point`.
    ///
    /// # Errors
    ///
    /// Returns `AlignmentError::PointIndexOutOfRange` for an invalid index.
    pub fn move_point(&mut self, index: usize, point: Point2) -> Result<()> {
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(AlignmentError::PointIndexOutOfRange { index, len })?;
        *slot = point;
        self.recompute();
        Ok(())
    }

    /// Inserts a new IP before position `index` (`index == len` appends).
    ///
    /// Radius overrides stay attached to their IPs.
    ///
    /// # Errors
    ///
    /// Returns `AlignmentError::PointIndexOutOfRange` if `index > len`.
    pub fn insert_point(&mut self, index: usize, point: Point2) -> Result<()> {
        let len = self.points.len();
        if index > len {
            return Err(AlignmentError::PointIndexOutOfRange { index, len }.into());
        }
        self.points.insert(index, point);
        self.radii.shift_for_insert(index);
        self.recompute();
        Ok(())
    }

    /// Removes IP `index`, keeping at least 2 points.
    ///
    /// # Errors
    ///
    /// Returns `AlignmentError::PointIndexOutOfRange` for an invalid index, or
    /// `AlignmentError::TooFewPoints` if the alignment would drop below 2 points.
    pub fn remove_point(&mut self, index: usize) -> Result<Point2> {
        let len = self.points.len();
        if index >= len {
            return Err(AlignmentError::PointIndexOutOfRange { index, len }.into());
        }
        if len <= 2 {
            return Err(AlignmentError::TooFewPoints(len - 1).into());
        }
        let removed = self.points.remove(index);
        self.radii.shift_for_remove(index);
        self.recompute();
        Ok(removed)
    }

    /// Sets the curve radius at interior IP `index`.
    ///
    /// # Errors
    ///
    /// Returns `AlignmentError::NotAnInteriorIp` if `index` is an endpoint or
    /// out of range, or `GeometryError::InvalidRadius` for a non-positive radius.
    pub fn set_radius(&mut self, index: usize, radius: f64) -> Result<()> {
        self.check_interior(index)?;
        self.radii.set(index, radius)?;
        self.recompute();
        Ok(())
    }

    /// Drops the override at interior IP `index`, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns `AlignmentError::NotAnInteriorIp` if `index` is not interior.
    pub fn reset_radius(&mut self, index: usize) -> Result<Option<f64>> {
        self.check_interior(index)?;
        let previous = self.radii.clear(index);
        self.recompute();
        Ok(previous)
    }

    /// Replaces the fallback radius used by every IP without an override.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidRadius` for a non-positive radius.
    pub fn set_default_radius(&mut self, radius: f64) -> Result<()> {
        self.radii.set_default(radius)?;
        self.recompute();
        Ok(())
    }

    /// Length of the drivable path along tangents and arcs.
    #[must_use]
    pub fn length(&self) -> f64 {
        Length::new(&self.elements).execute()
    }

    /// Parallel curve at signed `distance` (positive is right of travel).
    #[must_use]
    pub fn offset(&self, distance: f64) -> Vec<OffsetElement> {
        ElementOffset::new(&self.elements, distance).execute()
    }

    /// Every parallel curve of `section`, each paired with its distance.
    #[must_use]
    pub fn cross_section(&self, section: &CrossSection) -> Vec<(f64, Vec<OffsetElement>)> {
        section
            .distances()
            .into_iter()
            .map(|d| (d, self.offset(d)))
            .collect()
    }

    /// First element within `tolerance` of `point`, tangents before arcs.
    #[must_use]
    pub fn find_element_at(&self, point: &Point2, tolerance: f64) -> Option<&Element> {
        FindElementAt::new(*point, &self.elements, tolerance).execute()
    }

    /// Human-readable digest for logs.
    #[must_use]
    pub fn summary(&self) -> AlignmentSummary<'_> {
        AlignmentSummary { alignment: self }
    }

    fn check_interior(&self, index: usize) -> Result<()> {
        let len = self.points.len();
        if index == 0 || index + 1 >= len {
            return Err(AlignmentError::NotAnInteriorIp { index, len }.into());
        }
        Ok(())
    }

    fn recompute(&mut self) {
        self.elements = ComputeElements::new(&self.points, &self.radii).execute();
    }
}

/// Wire form of an [`Alignment`]. Elements are not stored; loading
/// validates the IPs and recomputes them.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct AlignmentData {
    name: String,
    points: Vec<Point2>,
    #[serde(default)]
    radii: RadiusSpec,
}

#[cfg(feature = "serde")]
impl TryFrom<AlignmentData> for Alignment {
    type Error = crate::error::RoadlineError;

    fn try_from(data: AlignmentData) -> Result<Self> {
        Self::new(data.name, data.points, data.radii)
    }
}

#[cfg(feature = "serde")]
impl From<Alignment> for AlignmentData {
    fn from(alignment: Alignment) -> Self {
        Self {
            name: alignment.name,
            points: alignment.points,
            radii: alignment.radii,
        }
    }
}

/// Display adapter returned by [`Alignment::summary`].
///
/// The plain form is one line; the alternate form (`{:#}`) adds a line per
/// element.
#[derive(Debug, Clone, Copy)]
pub struct AlignmentSummary<'a> {
    alignment: &'a Alignment,
}

impl fmt::Display for AlignmentSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = self.alignment;
        write!(
            f,
            "{}: {} IPs, {} tangents, {} arcs, length {:.2}",
            a.name,
            a.points.len(),
            a.tangents().count(),
            a.arcs().count(),
            a.length()
        )?;
        if !f.alternate() {
            return Ok(());
        }
        for t in a.tangents() {
            write!(
                f,
                "\n  T{} ({:.2}, {:.2}) -> ({:.2}, {:.2}) bearing {:.2}° length {:.2}",
                t.index,
                t.start_point.x,
                t.start_point.y,
                t.end_point.x,
                t.end_point.y,
                t.bearing.to_degrees(),
                t.length
            )?;
        }
        for arc in a.arcs() {
            write!(
                f,
                "\n  A{} R {:.2} deflection {:.2}° {} tangent length {:.2}",
                arc.ip_index,
                arc.radius,
                arc.deflection_angle.to_degrees(),
                if arc.is_right_turn { "right" } else { "left" },
                arc.tangent_length
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{GeometryError, RoadlineError};
    use crate::settings::DEFAULT_SELECT_TOLERANCE;
    use approx::assert_abs_diff_eq;

    fn l_shape() -> Alignment {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(100.0, 0.0),
            Point2::new(100.0, 100.0),
        ];
        Alignment::new("Main", points, RadiusSpec::new(20.0).unwrap()).unwrap()
    }

    #[test]
    fn new_requires_two_points() {
        let err = Alignment::new("x", vec![Point2::origin()], RadiusSpec::default()).unwrap_err();
        assert!(matches!(
            err,
            RoadlineError::Alignment(AlignmentError::TooFewPoints(1))
        ));
    }

    #[test]
    fn new_computes_elements() {
        let a = l_shape();
        assert_eq!(a.name(), "Main");
        assert_eq!(a.tangents().count(), 2);
        assert_eq!(a.arcs().count(), 1);
    }

    #[test]
    fn move_point_matches_fresh_compute() {
        let mut a = l_shape();
        a.move_point(1, Point2::new(120.0, -10.0)).unwrap();
        a.move_point(1, Point2::new(100.0, 0.0)).unwrap();
        assert_eq!(a, l_shape());

        a.move_point(2, Point2::new(180.0, 60.0)).unwrap();
        let fresh = Alignment::new("Main", a.points().to_vec(), a.radii().clone()).unwrap();
        assert_eq!(a.elements(), fresh.elements());
    }

    #[test]
    fn move_point_out_of_range() {
        let mut a = l_shape();
        assert!(a.move_point(3, Point2::origin()).is_err());
    }

    #[test]
    fn element_resolves_by_id_after_edit() {
        let mut a = l_shape();
        let id = a
            .find_element_at(&Point2::new(100.0, 60.0), DEFAULT_SELECT_TOLERANCE)
            .unwrap()
            .id();
        assert_eq!(id, ElementId::Tangent(1));
        a.move_point(2, Point2::new(100.0, 200.0)).unwrap();
        let t = a.element(id).unwrap().as_tangent().unwrap();
        assert_eq!(t.original_end, Point2::new(100.0, 200.0));
    }

    #[test]
    fn radius_changes_recompute() {
        let mut a = l_shape();
        a.set_radius(1, 40.0).unwrap();
        let arc = a.arcs().next().unwrap();
        assert_abs_diff_eq!(arc.tangent_length, 40.0, epsilon = 1e-9);

        assert_eq!(a.reset_radius(1).unwrap(), Some(40.0));
        let arc = a.arcs().next().unwrap();
        assert_abs_diff_eq!(arc.radius, 20.0);

        a.set_default_radius(10.0).unwrap();
        assert_abs_diff_eq!(a.arcs().next().unwrap().radius, 10.0);
    }

    #[test]
    fn set_radius_rejects_endpoints_and_bad_values() {
        let mut a = l_shape();
        assert!(matches!(
            a.set_radius(0, 10.0).unwrap_err(),
            RoadlineError::Alignment(AlignmentError::NotAnInteriorIp { index: 0, len: 3 })
        ));
        assert!(a.set_radius(2, 10.0).is_err());
        assert!(matches!(
            a.set_radius(1, 0.0).unwrap_err(),
            RoadlineError::Geometry(GeometryError::InvalidRadius { .. })
        ));
        assert_abs_diff_eq!(a.arcs().next().unwrap().radius, 20.0);
    }

    #[test]
    fn insert_and_remove_keep_overrides_on_their_ip() {
        let mut a = l_shape();
        a.set_radius(1, 15.0).unwrap();
        a.insert_point(1, Point2::new(50.0, -30.0)).unwrap();
        assert_eq!(a.points().len(), 4);
        assert_abs_diff_eq!(a.radii().radius(2), 15.0);
        assert_abs_diff_eq!(a.radii().radius(1), 20.0);

        let removed = a.remove_point(1).unwrap();
        assert_eq!(removed, Point2::new(50.0, -30.0));
        assert_abs_diff_eq!(a.radii().radius(1), 15.0);
        assert_eq!(a.tangents().count(), 2);
    }

    #[test]
    fn remove_keeps_two_points() {
        let mut a = Alignment::new(
            "short",
            vec![Point2::origin(), Point2::new(10.0, 0.0)],
            RadiusSpec::default(),
        )
        .unwrap();
        assert!(a.remove_point(0).is_err());
        assert!(a.insert_point(5, Point2::origin()).is_err());
    }

    #[test]
    fn cross_section_offsets_every_distance() {
        let a = l_shape();
        let curves = a.cross_section(&CrossSection::new(7.0, 3.5));
        assert_eq!(curves.len(), 5);
        // Pavement edge on the inside of the right turn shrinks the arc to 13.
        let (d, inside) = &curves[0];
        assert_abs_diff_eq!(*d, 7.0);
        let arc = inside.iter().find_map(|o| o.element.as_arc()).unwrap();
        assert_abs_diff_eq!(arc.radius, 13.0, epsilon = 1e-9);
        // The centerline is the alignment itself.
        let (_, center) = &curves[4];
        let same: Vec<Element> = center.iter().map(|o| o.element).collect();
        assert_eq!(same, a.elements());
    }

    #[test]
    fn summary_lines() {
        let a = l_shape();
        let short = a.summary().to_string();
        assert!(short.starts_with("Main: 3 IPs, 2 tangents, 1 arcs"), "{short}");
        let long = format!("{:#}", a.summary());
        assert_eq!(long.lines().count(), 4);
        assert!(long.contains("A1 R 20.00 deflection 90.00° right"), "{long}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialized_form_omits_elements() {
        let a = l_shape();
        let value = serde_json::to_value(&a).unwrap();
        assert!(value.get("elements").is_none());
        assert_eq!(value["name"], "Main");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn loading_recomputes_elements() {
        let a = l_shape();
        let mut value = serde_json::to_value(&a).unwrap();
        // A stale element list in the input is ignored.
        value["elements"] = serde_json::json!([]);
        let back: Alignment = serde_json::from_value(value).unwrap();
        assert_eq!(back, a);
        assert_eq!(back.arcs().count(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn loading_rejects_invalid_alignments() {
        let mut one_point = serde_json::to_value(l_shape()).unwrap();
        one_point["points"].as_array_mut().unwrap().truncate(1);
        assert!(serde_json::from_value::<Alignment>(one_point).is_err());

        let mut zero_radius = serde_json::to_value(l_shape()).unwrap();
        zero_radius["radii"]["default"] = serde_json::json!(0.0);
        assert!(serde_json::from_value::<Alignment>(zero_radius).is_err());
    }
}
