//! Quadtree for proximity queries over the live actor set
//!
//! The tree is rebuilt from scratch every tick, so it is a pure function of
//! the indexed items, the bounds, the capacity and the maximum depth.

use crate::core::types::{ActorId, Rect, Vec2};
use crate::entity::actor::ActorKind;

/// Anything with a position can be indexed
pub trait Positioned {
    fn position(&self) -> Vec2;
}

impl Positioned for Vec2 {
    fn position(&self) -> Vec2 {
        *self
    }
}

/// Lightweight record the environment indexes for each live actor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialEntry {
    pub id: ActorId,
    pub kind: ActorKind,
    pub position: Vec2,
}

impl Positioned for SpatialEntry {
    fn position(&self) -> Vec2 {
        self.position
    }
}

/// Quadtree node
///
/// A node subdivides iff it holds at least `capacity` items and its depth is
/// below `max_depth`. Children are ordered NW, NE, SW, SE.
#[derive(Debug, Clone)]
pub struct Quadtree<T> {
    bounds: Rect,
    depth: u32,
    items: Vec<T>,
    children: Option<Box<[Quadtree<T>; 4]>>,
}

impl<T: Positioned + Clone> Quadtree<T> {
    /// Build a tree over `items`, keeping only those inside `bounds`
    ///
    /// # Panics
    /// If `capacity` is zero.
    pub fn new(bounds: Rect, items: &[T], capacity: usize, max_depth: u32) -> Self {
        assert!(capacity > 0, "Quadtree capacity must be greater than zero.");
        Self::build(bounds, items, capacity, max_depth, 0)
    }

    fn build(bounds: Rect, candidates: &[T], capacity: usize, max_depth: u32, depth: u32) -> Self {
        let items: Vec<T> = candidates
            .iter()
            .filter(|item| bounds.contains_point(item.position()))
            .cloned()
            .collect();

        if items.len() < capacity || depth >= max_depth {
            return Self { bounds, depth, items, children: None };
        }

        // Children only re-filter what this node already kept
        let [nw, ne, sw, se] = bounds.quadrants();
        let children = Box::new([
            Self::build(nw, &items, capacity, max_depth, depth + 1),
            Self::build(ne, &items, capacity, max_depth, depth + 1),
            Self::build(sw, &items, capacity, max_depth, depth + 1),
            Self::build(se, &items, capacity, max_depth, depth + 1),
        ]);

        Self { bounds, depth, items, children: Some(children) }
    }

    /// All items whose position lies in `area`
    pub fn query(&self, area: &Rect) -> Vec<T> {
        let mut result = Vec::new();
        self.collect_in(area, &mut result);
        result
    }

    fn collect_in(&self, area: &Rect, out: &mut Vec<T>) {
        match &self.children {
            None => out.extend(
                self.items
                    .iter()
                    .filter(|item| area.contains_point(item.position()))
                    .cloned(),
            ),
            Some(children) => {
                for child in children.iter() {
                    if child.bounds.intersects(area) {
                        child.collect_in(area, out);
                    }
                }
            }
        }
    }

    /// All items within `radius` of `center` (boundary included)
    ///
    /// Culls with the bounding square of the circle first, then applies the
    /// exact distance test.
    pub fn query_radius(&self, center: Vec2, radius: f32) -> Vec<T> {
        let side = radius * 2.0 + 1.0;
        let area = Rect::new(center.x - radius, center.y - radius, side, side);
        let mut result = self.query(&area);
        result.retain(|item| center.distance(&item.position()) <= radius);
        result
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Items held by this node (for internal nodes, the union of the children)
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn children(&self) -> Option<&[Quadtree<T>; 4]> {
        self.children.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn leaf_count(&self) -> usize {
        match &self.children {
            None => 1,
            Some(children) => children.iter().map(Quadtree::leaf_count).sum(),
        }
    }
}
