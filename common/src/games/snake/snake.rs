use std::collections::VecDeque;

use super::types::Point;

/// Head-first body. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Point>,
}

impl Snake {
    pub fn new(start_pos: Point) -> Self {
        let mut body = VecDeque::new();
        body.push_back(start_pos);
        Self { body }
    }

    #[cfg(test)]
    pub(crate) fn from_cells(cells: &[Point]) -> Self {
        assert!(!cells.is_empty(), "snake needs at least a head");
        Self {
            body: cells.iter().copied().collect(),
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    pub fn contains(&self, point: Point) -> bool {
        self.body.contains(&point)
    }

    /// The body after the head enters `next_head`. The tail is kept when growing.
    pub fn moved_to(&self, next_head: Point, grow: bool) -> Snake {
        let mut body = self.body.clone();
        body.push_front(next_head);
        if !grow {
            body.pop_back();
        }
        Snake { body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_without_growth_keeps_length() {
        let snake = Snake::from_cells(&[Point::new(2, 2), Point::new(1, 2)]);
        let moved = snake.moved_to(Point::new(3, 2), false);
        assert_eq!(moved.len(), 2);
        assert_eq!(moved.head(), Point::new(3, 2));
        assert_eq!(moved.tail(), Point::new(2, 2));
    }

    #[test]
    fn test_move_with_growth_keeps_tail() {
        let snake = Snake::new(Point::new(5, 5));
        let grown = snake.moved_to(Point::new(5, 6), true);
        assert_eq!(grown.len(), 2);
        assert_eq!(grown.tail(), Point::new(5, 5));
        assert!(grown.contains(Point::new(5, 6)));
    }
}
