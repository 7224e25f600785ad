//! Caller-side observability for alignment edits.
//!
//! The geometry engines never report anything themselves beyond `trace`
//! events. Code that owns alignments (such as [`AlignmentStore`]) tells an
//! [`AlignmentObserver`] what happened after each edit.
//!
//! [`AlignmentStore`]: crate::model::AlignmentStore

use crate::model::{Alignment, AlignmentId};

/// What changed before an alignment was recomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edit {
    PointMoved { index: usize },
    PointInserted { index: usize },
    PointRemoved { index: usize },
    RadiusChanged { index: usize, radius: Option<f64> },
    DefaultRadiusChanged { radius: f64 },
}

/// A notification about an alignment held by the caller.
#[derive(Debug, Clone, Copy)]
pub enum AlignmentEvent<'a> {
    Added {
        id: AlignmentId,
        alignment: &'a Alignment,
    },
    Recomputed {
        id: AlignmentId,
        edit: Edit,
        alignment: &'a Alignment,
    },
    Removed {
        id: AlignmentId,
        alignment: &'a Alignment,
    },
}

/// Receives [`AlignmentEvent`]s.
pub trait AlignmentObserver {
    fn on_event(&mut self, event: &AlignmentEvent<'_>);
}

/// Logs every event through `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl AlignmentObserver for TracingObserver {
    fn on_event(&mut self, event: &AlignmentEvent<'_>) {
        match event {
            AlignmentEvent::Added { id, alignment } => {
                tracing::debug!(?id, "alignment added\n{:#}", alignment.summary());
            }
            AlignmentEvent::Recomputed {
                id,
                edit,
                alignment,
            } => {
                tracing::debug!(?id, ?edit, "alignment recomputed\n{:#}", alignment.summary());
            }
            AlignmentEvent::Removed { id, alignment } => {
                tracing::debug!(?id, name = alignment.name(), "alignment removed");
            }
        }
    }
}

impl<F> AlignmentObserver for F
where
    F: FnMut(&AlignmentEvent<'_>),
{
    fn on_event(&mut self, event: &AlignmentEvent<'_>) {
        self(event);
    }
}
