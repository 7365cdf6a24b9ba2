//! Resize gesture state
//!
//! Turns a pointer drag on a resize handle into incremental deltas for
//! `GridGeometry`. A delta whose prospective size falls outside the handle
//! bounds is dropped rather than clamped, so the drag sticks at the edge and
//! resumes once the pointer comes back in range.

/// Which axis a handle resizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAxis {
    /// Column handle, tracks the pointer x coordinate
    Column,
    /// Row handle, tracks the pointer y coordinate
    Row,
}

/// Inclusive size range a handle accepts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeBounds {
    pub min: f64,
    pub max: Option<f64>,
}

impl ResizeBounds {
    pub fn new(min: f64, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, size: f64) -> bool {
        size >= self.min && self.max.map_or(true, |max| size <= max)
    }
}

/// What a resize handle is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeTarget {
    Column(usize),
    Row(usize),
}

impl ResizeTarget {
    pub fn axis(self) -> ResizeAxis {
        match self {
            ResizeTarget::Column(_) => ResizeAxis::Column,
            ResizeTarget::Row(_) => ResizeAxis::Row,
        }
    }
}

/// Visual state of a resize handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleAffordance {
    Idle,
    Hover,
    Active,
}

/// Drag in progress
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    /// Pointer coordinate seen on the previous move
    last_pointer: f64,
    /// Size of the element as far as this gesture knows
    tracked_size: f64,
}

/// Pointer-drag state machine for one resize handle
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeController {
    target: ResizeTarget,
    bounds: ResizeBounds,
    drag: Option<DragState>,
}

impl ResizeController {
    pub fn new(target: ResizeTarget, bounds: ResizeBounds) -> Self {
        Self {
            target,
            bounds,
            drag: None,
        }
    }

    pub fn target(&self) -> ResizeTarget {
        self.target
    }

    pub fn bounds(&self) -> ResizeBounds {
        self.bounds
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Size the gesture has reached, before any geometry floor applies
    pub fn tracked_size(&self) -> Option<f64> {
        self.drag.as_ref().map(|d| d.tracked_size)
    }

    /// Start a drag at `pointer` with the element's current `extent`
    pub fn begin(&mut self, pointer: f64, extent: f64) {
        self.drag = Some(DragState {
            last_pointer: pointer,
            tracked_size: extent,
        });
    }

    /// Feed a pointer move, returning the delta to apply if any
    ///
    /// The last pointer coordinate advances even when the delta is dropped,
    /// so dropped movement never accumulates into a later jump.
    pub fn pointer_move(&mut self, pointer: f64) -> Option<f64> {
        let bounds = self.bounds;
        let target = self.target;
        let drag = self.drag.as_mut()?;

        let delta = pointer - drag.last_pointer;
        drag.last_pointer = pointer;

        if delta == 0.0 {
            return None;
        }

        let prospective = drag.tracked_size + delta;
        if bounds.contains(prospective) {
            drag.tracked_size = prospective;
            Some(delta)
        } else {
            tracing::trace!(
                target: "resize",
                ?target,
                prospective,
                "resize delta outside bounds, dropped"
            );
            None
        }
    }

    /// Release the drag. Safe to call when no drag is active.
    pub fn end(&mut self) {
        self.drag = None;
    }

    /// Handle highlight derived from drag state and hover
    pub fn affordance(&self, hovered: bool) -> HandleAffordance {
        if self.is_dragging() {
            HandleAffordance::Active
        } else if hovered {
            HandleAffordance::Hover
        } else {
            HandleAffordance::Idle
        }
    }
}
