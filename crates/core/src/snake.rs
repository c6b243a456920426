//! The actor: an ordered body (head first) and a heading.

use std::collections::VecDeque;

use crate::types::{Direction, Position};

/// The snake
///
/// `body[0]` is the head and the last element is the tail. The body is never
/// empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Position>,
    heading: Direction,
}

impl Snake {
    /// A single-segment snake at `head`
    pub fn new(head: Position, heading: Direction) -> Self {
        let mut body = VecDeque::with_capacity(16);
        body.push_back(head);
        Self { body, heading }
    }

    /// A snake with an explicit body, head first.
    ///
    /// Returns `None` for an empty body.
    pub fn from_body(body: impl IntoIterator<Item = Position>, heading: Direction) -> Option<Self> {
        let body: VecDeque<Position> = body.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Self { body, heading })
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Segments from head to tail
    pub fn body(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    /// Whether any segment (tail included) occupies `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// The cell the head would enter on the next step
    pub fn next_head(&self) -> Position {
        self.head().moved(self.heading)
    }

    /// Set the heading unless it reverses the current one.
    ///
    /// Returns whether the heading was accepted.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.heading.is_opposite(direction) {
            return false;
        }
        self.heading = direction;
        true
    }

    /// Push a new head. The tail is kept when `grow` is set, otherwise dropped.
    ///
    /// Returns the vacated tail cell, if any.
    pub(crate) fn advance(&mut self, new_head: Position, grow: bool) -> Option<Position> {
        self.body.push_front(new_head);
        if grow {
            None
        } else {
            self.body.pop_back()
        }
    }

    /// Whether any cell appears twice in the body
    pub fn has_duplicates(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(self.body.len());
        !self.body.iter().all(|p| seen.insert(*p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn test_new_snake_is_single_segment() {
        let snake = Snake::new(p(15, 10), Direction::Right);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), p(15, 10));
        assert_eq!(snake.tail(), p(15, 10));
        assert_eq!(snake.next_head(), p(16, 10));
    }

    #[test]
    fn test_from_body_rejects_empty() {
        assert!(Snake::from_body(Vec::new(), Direction::Up).is_none());
    }

    #[test]
    fn test_turn_rejects_reverse() {
        let mut snake = Snake::new(p(5, 5), Direction::Right);
        assert!(!snake.turn(Direction::Left));
        assert_eq!(snake.heading(), Direction::Right);
        assert!(snake.turn(Direction::Up));
        assert_eq!(snake.heading(), Direction::Up);
        assert!(!snake.turn(Direction::Down));
        assert!(snake.turn(Direction::Up));
    }

    #[test]
    fn test_advance_without_growth_drops_tail() {
        let mut snake =
            Snake::from_body([p(5, 5), p(4, 5), p(3, 5)], Direction::Right).unwrap();
        let vacated = snake.advance(p(6, 5), false);
        assert_eq!(vacated, Some(p(3, 5)));
        assert_eq!(snake.body().collect::<Vec<_>>(), vec![p(6, 5), p(5, 5), p(4, 5)]);
    }

    #[test]
    fn test_advance_with_growth_keeps_tail() {
        let mut snake = Snake::new(p(15, 10), Direction::Right);
        assert_eq!(snake.advance(p(16, 10), true), None);
        assert_eq!(snake.body().collect::<Vec<_>>(), vec![p(16, 10), p(15, 10)]);
    }

    #[test]
    fn test_occupies_includes_tail() {
        let snake = Snake::from_body([p(2, 2), p(2, 3), p(3, 3)], Direction::Up).unwrap();
        assert!(snake.occupies(p(3, 3)));
        assert!(!snake.occupies(p(4, 3)));
    }

    #[test]
    fn test_has_duplicates() {
        let ok = Snake::from_body([p(1, 1), p(1, 2)], Direction::Up).unwrap();
        assert!(!ok.has_duplicates());
        let bad = Snake::from_body([p(1, 1), p(1, 2), p(1, 1)], Direction::Up).unwrap();
        assert!(bad.has_duplicates());
    }
}
