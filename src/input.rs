/// Per-frame input snapshot handed to the simulation by the host.

/// Keys that act for as long as they are held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub boost: bool,
}

impl HeldKeys {
    /// Movement delta; opposite keys cancel and diagonals sum per axis.
    pub fn delta(&self) -> (i32, i32) {
        let dx = i32::from(self.right) - i32::from(self.left);
        let dy = i32::from(self.down) - i32::from(self.up);
        (dx, dy)
    }
}

/// Edge-triggered actions: pressed this frame, applied once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Fire,
    ToggleMode,
}

#[derive(Clone, Debug, Default)]
pub struct FrameInput {
    pub held: HeldKeys,
    /// Applied in order.
    pub pressed: Vec<Action>,
}

impl FrameInput {
    pub fn idle() -> Self {
        FrameInput::default()
    }

    pub fn pressing(actions: &[Action]) -> Self {
        FrameInput {
            held: HeldKeys::default(),
            pressed: actions.to_vec(),
        }
    }

    pub fn holding(held: HeldKeys) -> Self {
        FrameInput {
            held,
            pressed: Vec::new(),
        }
    }
}
