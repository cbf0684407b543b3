use std::fmt;

/// Whether the next canvas click is a pixel query.
///
/// Single-shot: once armed, exactly one click is serviced before the mode
/// drops back to `Idle`, whatever the outcome of that click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PickingMode {
    #[default]
    Idle,
    Armed,
}

impl PickingMode {
    pub fn is_armed(self) -> bool {
        self == Self::Armed
    }

    pub fn arm(&mut self) {
        *self = Self::Armed;
    }

    /// Consume the armed state for one click. Returns `true` if the click
    /// should be treated as a pick; the mode is `Idle` afterwards either way.
    pub fn take(&mut self) -> bool {
        std::mem::take(self).is_armed()
    }
}

impl fmt::Display for PickingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Armed => write!(f, "Picking"),
        }
    }
}
