use glam::Vec2;

// Pointer travel (CSS px) above which a press counts as a drag, not a click
pub const CLICK_SLOP_PX: f32 = 4.0;

/// Press/move/release tracking that separates orbit drags from clicks.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub pressed: bool,
    pub dragging: bool,
    pub start: Vec2,
    pub last: Vec2,
    // set when a drag ends so the trailing click event is ignored
    suppress_click: bool,
}

impl DragState {
    pub fn press(&mut self, p: Vec2) {
        self.pressed = true;
        self.dragging = false;
        self.suppress_click = false;
        self.start = p;
        self.last = p;
    }

    /// Returns the delta since the last move once the press became a drag.
    pub fn move_to(&mut self, p: Vec2) -> Option<Vec2> {
        if !self.pressed {
            return None;
        }
        if !self.dragging && p.distance(self.start) > CLICK_SLOP_PX {
            self.dragging = true;
        }
        let delta = p - self.last;
        self.last = p;
        self.dragging.then_some(delta)
    }

    /// Ends the press; true when it never turned into a drag.
    pub fn release(&mut self) -> bool {
        let was_click = self.pressed && !self.dragging;
        self.suppress_click = self.dragging;
        self.pressed = false;
        self.dragging = false;
        was_click
    }

    /// Consume the flag left by a finished drag.
    pub fn take_suppressed_click(&mut self) -> bool {
        std::mem::replace(&mut self.suppress_click, false)
    }
}
