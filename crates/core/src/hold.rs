//! Hold module - one exchange per spawned piece

use crate::pieces::PieceSpec;

/// The hold slot and its once-per-spawn lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldSlot {
    held: Option<PieceSpec>,
    can_hold: bool,
}

impl HoldSlot {
    pub fn new() -> Self {
        Self {
            held: None,
            can_hold: true,
        }
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn is_occupied(&self) -> bool {
        self.held.is_some()
    }

    pub fn held(&self) -> Option<PieceSpec> {
        self.held
    }

    /// Re-arm after a new spawn
    pub fn rearm(&mut self) {
        self.can_hold = true;
    }

    /// Store `falling` and return the previously held piece.
    ///
    /// Returns `None` without touching the slot when a hold was already used since the
    /// last spawn; `Some(None)` when the slot was empty.
    pub fn exchange(&mut self, falling: PieceSpec) -> Option<Option<PieceSpec>> {
        if !self.can_hold {
            return None;
        }
        self.can_hold = false;
        Some(self.held.replace(falling))
    }
}

impl Default for HoldSlot {
    fn default() -> Self {
        Self::new()
    }
}
