use std::collections::BTreeMap;

use crate::error::{GeometryError, Result};
use crate::settings::DEFAULT_RADIUS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-IP curve radii with a fallback for every IP not listed.
///
/// Keys are IP indices; only interior IPs (`1..n-1`) are ever looked up.
/// All stored radii are strictly positive and finite.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RadiusSpecData"))]
pub struct RadiusSpec {
    default: f64,
    overrides: BTreeMap<usize, f64>,
}

impl Default for RadiusSpec {
    fn default() -> Self {
        Self {
            default: DEFAULT_RADIUS,
            overrides: BTreeMap::new(),
        }
    }
}

impl RadiusSpec {
    /// Creates a spec with the given fallback radius and no overrides.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidRadius` if `default` is not positive and finite.
    pub fn new(default: f64) -> Result<Self> {
        validate(None, default)?;
        Ok(Self {
            default,
            overrides: BTreeMap::new(),
        })
    }

    /// Returns the radius to use at IP `index`.
    #[must_use]
    pub fn radius(&self, index: usize) -> f64 {
        self.overrides.get(&index).copied().unwrap_or(self.default)
    }

    /// Returns the fallback radius.
    #[must_use]
    pub fn default_radius(&self) -> f64 {
        self.default
    }

    /// Replaces the fallback radius.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidRadius` if `radius` is not positive and finite.
    pub fn set_default(&mut self, radius: f64) -> Result<()> {
        validate(None, radius)?;
        self.default = radius;
        Ok(())
    }

    /// Overrides the radius at IP `index`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidRadius` if `radius` is not positive and finite.
    pub fn set(&mut self, index: usize, radius: f64) -> Result<()> {
        validate(Some(index), radius)?;
        self.overrides.insert(index, radius);
        Ok(())
    }

    /// Removes the override at IP `index`, returning it if present.
    pub fn clear(&mut self, index: usize) -> Option<f64> {
        self.overrides.remove(&index)
    }

    /// Iterates the explicit overrides in IP order.
    pub fn overrides(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.overrides.iter().map(|(&i, &r)| (i, r))
    }

    /// Re-keys overrides after a point was inserted at `index`, so each
    /// override stays attached to the same IP.
    pub(crate) fn shift_for_insert(&mut self, index: usize) {
        self.overrides = std::mem::take(&mut self.overrides)
            .into_iter()
            .map(|(i, r)| if i >= index { (i + 1, r) } else { (i, r) })
            .collect();
    }

    /// Re-keys overrides after the point at `index` was removed, dropping
    /// the override that belonged to it.
    pub(crate) fn shift_for_remove(&mut self, index: usize) {
        self.overrides = std::mem::take(&mut self.overrides)
            .into_iter()
            .filter(|&(i, _)| i != index)
            .map(|(i, r)| if i > index { (i - 1, r) } else { (i, r) })
            .collect();
    }
}

/// Unvalidated wire form; loading goes through the same checks as the setters.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RadiusSpecData {
    default: f64,
    #[serde(default)]
    overrides: BTreeMap<usize, f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RadiusSpecData> for RadiusSpec {
    type Error = crate::error::RoadlineError;

    fn try_from(data: RadiusSpecData) -> Result<Self> {
        let mut spec = Self::new(data.default)?;
        for (index, radius) in data.overrides {
            spec.set(index, radius)?;
        }
        Ok(spec)
    }
}

fn validate(index: Option<usize>, radius: f64) -> Result<()> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidRadius { index, radius }.into())
    }
}
