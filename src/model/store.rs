use std::fmt;

use slotmap::SlotMap;

use crate::error::{AlignmentError, Result};
use crate::math::Point2;
use crate::observe::{AlignmentEvent, AlignmentObserver, Edit};

use super::Alignment;

slotmap::new_key_type! {
    /// Unique identifier for an alignment in the store.
    pub struct AlignmentId;
}

/// Arena that owns every alignment of a drawing.
///
/// Edits go through the store so the optional observer sees each recompute.
#[derive(Default)]
pub struct AlignmentStore {
    alignments: SlotMap<AlignmentId, Alignment>,
    observer: Option<Box<dyn AlignmentObserver>>,
}

impl fmt::Debug for AlignmentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlignmentStore")
            .field("alignments", &self.alignments)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl AlignmentStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store that reports edits to `observer`.
    #[must_use]
    pub fn with_observer(observer: impl AlignmentObserver + 'static) -> Self {
        Self {
            alignments: SlotMap::with_key(),
            observer: Some(Box::new(observer)),
        }
    }

    /// Replaces the observer.
    pub fn set_observer(&mut self, observer: impl AlignmentObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Inserts an alignment and returns its ID.
    pub fn add(&mut self, alignment: Alignment) -> AlignmentId {
        let id = self.alignments.insert(alignment);
        if let (Some(observer), Some(alignment)) = (self.observer.as_mut(), self.alignments.get(id))
        {
            observer.on_event(&AlignmentEvent::Added { id, alignment });
        }
        id
    }

    /// Returns the alignment, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns `AlignmentError::UnknownAlignment` if the ID is stale.
    pub fn get(&self, id: AlignmentId) -> Result<&Alignment> {
        self.alignments
            .get(id)
            .ok_or_else(|| AlignmentError::UnknownAlignment(format!("{id:?}")).into())
    }

    /// Returns the alignment for direct editing.
    ///
    /// The `Alignment` mutators still recompute its elements, but edits made
    /// through this reference are not reported to the observer. Use the
    /// store's edit methods when the observer must see them.
    ///
    /// # Errors
    ///
    /// Returns `AlignmentError::UnknownAlignment` if the ID is stale.
    pub fn get_mut(&mut self, id: AlignmentId) -> Result<&mut Alignment> {
        self.alignments
            .get_mut(id)
            .ok_or_else(|| AlignmentError::UnknownAlignment(format!("{id:?}")).into())
    }

    /// Removes and returns the alignment.
    ///
    /// # Errors
    ///
    /// Returns `AlignmentError::UnknownAlignment` if the ID is stale.
    pub fn remove(&mut self, id: AlignmentId) -> Result<Alignment> {
        let alignment = self
            .alignments
            .remove(id)
            .ok_or_else(|| AlignmentError::UnknownAlignment(format!("{id:?}")))?;
        if let Some(observer) = self.observer.as_mut() {
            observer.on_event(&AlignmentEvent::Removed {
                id,
                alignment: &alignment,
            });
        }
        Ok(alignment)
    }

    /// Finds the first alignment with the given name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<AlignmentId> {
        self.alignments
            .iter()
            .find_map(|(id, a)| (a.name() == name).then_some(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = (AlignmentId, &Alignment)> {
        self.alignments.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.alignments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alignments.is_empty()
    }

    // --- Edits ---

    /// Moves IP `index` of alignment `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the alignment or the point does not exist.
    pub fn move_point(&mut self, id: AlignmentId, index: usize, point: Point2) -> Result<()> {
        self.edit(id, Edit::PointMoved { index }, |a| a.move_point(index, point))
    }

    /// Inserts an IP before position `index` of alignment `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the alignment does not exist or `index` is past the end.
    pub fn insert_point(&mut self, id: AlignmentId, index: usize, point: Point2) -> Result<()> {
        self.edit(id, Edit::PointInserted { index }, |a| {
            a.insert_point(index, point)
        })
    }

    /// Removes IP `index` of alignment `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the alignment or point does not exist, or fewer
    /// than 2 points would remain.
    pub fn remove_point(&mut self, id: AlignmentId, index: usize) -> Result<()> {
        self.edit(id, Edit::PointRemoved { index }, |a| {
            a.remove_point(index).map(|_| ())
        })
    }

    /// Sets (`Some`) or clears (`None`) the radius override at IP `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if the alignment does not exist, `index` is not an
    /// interior IP, or the radius is not positive.
    pub fn set_radius(&mut self, id: AlignmentId, index: usize, radius: Option<f64>) -> Result<()> {
        self.edit(id, Edit::RadiusChanged { index, radius }, |a| match radius {
            Some(r) => a.set_radius(index, r),
            None => a.reset_radius(index).map(|_| ()),
        })
    }

    /// Replaces the fallback radius of alignment `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the alignment does not exist or the radius is not positive.
    pub fn set_default_radius(&mut self, id: AlignmentId, radius: f64) -> Result<()> {
        self.edit(id, Edit::DefaultRadiusChanged { radius }, |a| {
            a.set_default_radius(radius)
        })
    }

    fn edit(
        &mut self,
        id: AlignmentId,
        edit: Edit,
        apply: impl FnOnce(&mut Alignment) -> Result<()>,
    ) -> Result<()> {
        let alignment = self
            .alignments
            .get_mut(id)
            .ok_or_else(|| AlignmentError::UnknownAlignment(format!("{id:?}")))?;
        apply(&mut *alignment)?;
        if let Some(observer) = self.observer.as_mut() {
            observer.on_event(&AlignmentEvent::Recomputed {
                id,
                edit,
                alignment,
            });
        }
        Ok(())
    }
}
