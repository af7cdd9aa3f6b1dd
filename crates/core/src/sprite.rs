//! Shared capability of the things that move on the road.

use crate::collision::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Player,
    Obstacle,
}

/// Render-facing copy of a sprite: what it is and where it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteView {
    pub kind: SpriteKind,
    pub rect: Rect,
}

/// A car on the road.
///
/// The player and obstacles share this interface; the session keeps the
/// player separately because there is only ever one of it.
pub trait Sprite {
    /// Advance one frame.
    fn update(&mut self);

    /// Collision box in world pixels.
    fn bounds(&self) -> Rect;

    fn view(&self) -> SpriteView;
}
