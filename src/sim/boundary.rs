//! Screen boundary collisions
//!
//! Actors are assumed to cross at most one edge per frame, so only the first
//! exceeded edge (top, bottom, left, right) is handled.

use super::actors::Sprite;
use super::geometry::Rect;

/// Edge of the bounding rectangle an actor crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Anything that can be confined to the screen
pub trait Collidable {
    fn sprite(&self) -> &Sprite;
    fn sprite_mut(&mut self) -> &mut Sprite;

    /// Extra response after being pushed back inside; nothing by default
    fn on_boundary_collide(&mut self) {}
}

/// Clamp `actor` back inside `bounds` if it crossed an edge
///
/// Returns the edge that was handled, or `None` when the actor was already
/// inside (in which case it is left untouched).
pub fn resolve_boundary_collision<C: Collidable>(bounds: &Rect, actor: &mut C) -> Option<Edge> {
    let actor_bounds = actor.sprite().bounds();

    let edge = if actor_bounds.top < bounds.top {
        actor.sprite_mut().set_top(bounds.top);
        Edge::Top
    } else if actor_bounds.bottom() > bounds.bottom() {
        actor.sprite_mut().set_bottom(bounds.bottom());
        Edge::Bottom
    } else if actor_bounds.left < bounds.left {
        actor.sprite_mut().set_left(bounds.left);
        Edge::Left
    } else if actor_bounds.right() > bounds.right() {
        actor.sprite_mut().set_right(bounds.right());
        Edge::Right
    } else {
        return None;
    };

    actor.on_boundary_collide();
    Some(edge)
}
