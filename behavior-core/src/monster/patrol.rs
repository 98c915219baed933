//! Ping-pong waypoint traversal.

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

/// Ordered waypoints walked back and forth (0, 1, .., n-1, n-2, .., 1, 0, ..).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatrolRoute {
    points: Vec<Vec2>,
    index: usize,
    direction: i8,
}

impl PatrolRoute {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self {
            points,
            index: 0,
            direction: 1,
        }
    }

    /// Fewer than two waypoints cannot be traversed
    pub fn is_walkable(&self) -> bool {
        self.points.len() >= 2
    }

    pub fn target(&self) -> Option<Vec2> {
        if !self.is_walkable() {
            return None;
        }
        self.points.get(self.index).copied()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> i8 {
        self.direction
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Step to the next waypoint, reflecting at either end.
    pub fn advance(&mut self) {
        if !self.is_walkable() {
            return;
        }
        let len = self.points.len() as isize;
        let next = self.index as isize + self.direction as isize;
        if next >= len {
            self.index = (len - 2) as usize;
            self.direction = -1;
        } else if next < 0 {
            self.index = 1;
            self.direction = 1;
        } else {
            self.index = next as usize;
        }
    }
}
