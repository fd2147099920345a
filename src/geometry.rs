/// Axis-aligned rectangles and the playfield bounds tests.

/// Direction used when an orientation is requested between two rects that
/// share a centre.  Straight down, the way a dropped bomb falls.
pub const FALLBACK_ORIENTATION: (f32, f32) = (0.0, 1.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Rect { left, top, width, height }
    }

    pub fn from_center(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Rect {
            left: cx - width / 2.0,
            top: cy - height / 2.0,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.center_x(), self.center_y())
    }

    pub fn center_x(&self) -> f32 {
        self.left + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.top + self.height / 2.0
    }

    pub fn set_center_x(&mut self, cx: f32) {
        self.left = cx - self.width / 2.0;
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Rect {
        Rect {
            left: self.left + dx,
            top: self.top + dy,
            ..*self
        }
    }

    /// Strict intersection: rects that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}

/// `(horizontal, vertical)` containment of `rect` in `[0, width] × [0, height]`.
pub fn in_bounds(rect: &Rect, width: f32, height: f32) -> (bool, bool) {
    let horizontal = rect.left >= 0.0 && rect.right() <= width;
    let vertical = rect.top >= 0.0 && rect.bottom() <= height;
    (horizontal, vertical)
}

/// Unit vector from the centre of `from` to the centre of `to`.
///
/// Coincident centres fall back to [`FALLBACK_ORIENTATION`].
pub fn orientation(from: &Rect, to: &Rect) -> (f32, f32) {
    let dx = to.center_x() - from.center_x();
    let dy = to.center_y() - from.center_y();
    let norm = (dx * dx + dy * dy).sqrt();
    if norm <= f32::EPSILON {
        return FALLBACK_ORIENTATION;
    }
    (dx / norm, dy / norm)
}
