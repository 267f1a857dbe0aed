//! Two-node selection state used to pick route endpoints.
//!
//! Picks cycle through three states:
//!
//! | Before         | Pick `n`  | After          |
//! |----------------|-----------|----------------|
//! | nothing        | `n`       | first = `n`    |
//! | first = `a`    | `n`       | (`a`, `n`)     |
//! | (`a`, `b`)     | `n`       | first = `n`    |
//!
//! A pick that hits no node leaves the selection unchanged.

use map_core::{NodeId, Point};

use crate::locator::NodeLocator;

/// Up to two selected nodes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    first:  Option<NodeId>,
    second: Option<NodeId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the selection with `node` (see the module table).
    pub fn select(&mut self, node: NodeId) {
        match (self.first, self.second) {
            (None, _) => self.first = Some(node),
            (Some(_), None) => self.second = Some(node),
            (Some(_), Some(_)) => {
                self.first = Some(node);
                self.second = None;
            }
        }
    }

    /// Select the node nearest to `pos` within `radius`.  Returns the picked
    /// node, or `None` (selection untouched) if nothing is close enough.
    pub fn pick(&mut self, locator: &NodeLocator, pos: Point, radius: f64) -> Option<NodeId> {
        let node = locator.nearest_within(pos, radius)?;
        self.select(node);
        Some(node)
    }

    pub fn first(&self) -> Option<NodeId> {
        self.first
    }

    pub fn second(&self) -> Option<NodeId> {
        self.second
    }

    /// Both endpoints, once two nodes are selected.
    pub fn pair(&self) -> Option<(NodeId, NodeId)> {
        self.first.zip(self.second)
    }

    pub fn len(&self) -> usize {
        usize::from(self.first.is_some()) + usize::from(self.second.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
