//! Axis-aligned bounding boxes and the player/obstacle crash test.

use crate::sprite::Sprite;

/// Axis-aligned rectangle in world pixels. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of size `w`x`h` whose horizontal center is `center_x`.
    pub fn centered_x(center_x: f32, top: f32, w: f32, h: f32) -> Self {
        Self::new(center_x - w / 2.0, top, w, h)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Overlap test with exclusive edges: rectangles that only touch do not
    /// intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// True if `player` overlaps any of `obstacles`.
pub fn check<'a, P, O>(player: &P, obstacles: impl IntoIterator<Item = &'a O>) -> bool
where
    P: Sprite,
    O: Sprite + 'a,
{
    let bounds = player.bounds();
    obstacles
        .into_iter()
        .any(|obstacle| bounds.intersects(&obstacle.bounds()))
}
