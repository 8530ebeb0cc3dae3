use std::collections::{HashSet, VecDeque};

use super::types::Point;

pub const INITIAL_SNAKE_LENGTH: usize = 4;

/// Head-first segment list. `body_set` mirrors `body` for O(1) collision
/// lookups; no two segments ever share a coordinate.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
}

impl Snake {
    /// Builds the starting snake: head at `head`, body extending leftward.
    /// Map dimensions guarantee the body fits without wrapping.
    pub fn new(head: Point, length: usize) -> Self {
        let mut body = VecDeque::with_capacity(length);
        let mut body_set = HashSet::with_capacity(length);

        for i in 0..length {
            let segment = Point::new(head.x - i, head.y);
            body.push_back(segment);
            body_set.insert(segment);
        }

        Self { body, body_set }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("snake body is never empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("snake body is never empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.body_set.contains(&point)
    }

    /// Collision probe for a candidate head position. The current tail is
    /// excluded: that cell vacates this tick unless growth restores it, and
    /// food can never sit on the tail cell.
    pub fn hits_body_excluding_tail(&self, point: Point) -> bool {
        self.body_set.contains(&point) && point != self.tail()
    }

    /// Moves the head to `new_head`, vacating and returning the old tail.
    pub fn advance(&mut self, new_head: Point) -> Point {
        let tail = self.body.pop_back().expect("snake body is never empty");
        self.body_set.remove(&tail);
        self.body.push_front(new_head);
        self.body_set.insert(new_head);
        tail
    }

    /// Re-appends the tail freed by `advance`, growing by one segment.
    pub fn grow_back(&mut self, tail: Point) {
        self.body.push_back(tail);
        self.body_set.insert(tail);
    }
}
