//! Snake body model - fixed-capacity ring of segment positions
//!
//! Segments live in an inline `ArrayVec` sized for the largest grid
//! ([`MAX_CELLS`]); the session caps it further at `width * height`. The live
//! slots `[0, length)` form a ring: `head_index` is the newest segment and the
//! slot after it (cyclically) is the tail.
//!
//! - [`Snake::advance`] overwrites the tail with the next head (no growth).
//! - [`Snake::grow`] inserts the next head right after the current one,
//!   shifting the older segments behind it one slot to the right.
//!
//! Neither operation allocates.

use anyhow::{ensure, Result};
use arrayvec::{ArrayVec, CapacityError};

use crate::types::{Direction, Position, INITIAL_SNAKE_LENGTH, MAX_CELLS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    segments: ArrayVec<Position, MAX_CELLS>,
    head_index: usize,
    direction: Direction,
    capacity: usize,
}

impl Snake {
    /// Starting snake: `(0,0) (1,0) (2,0) (3,0)`, head at index 3, heading right.
    ///
    /// `capacity` is clamped to `INITIAL_SNAKE_LENGTH..=MAX_CELLS`.
    pub fn new(capacity: usize) -> Self {
        let mut segments = ArrayVec::new();
        for x in 0..INITIAL_SNAKE_LENGTH as i32 {
            segments.push(Position::new(x, 0));
        }
        Self {
            segments,
            head_index: INITIAL_SNAKE_LENGTH - 1,
            direction: Direction::Right,
            capacity: capacity.clamp(INITIAL_SNAKE_LENGTH, MAX_CELLS),
        }
    }

    /// Build a snake from raw ring contents.
    pub fn from_parts(
        segments: &[Position],
        head_index: usize,
        direction: Direction,
        capacity: usize,
    ) -> Result<Self> {
        ensure!(!segments.is_empty(), "snake needs at least one segment");
        ensure!(
            capacity <= MAX_CELLS,
            "capacity {} exceeds segment storage {}",
            capacity,
            MAX_CELLS
        );
        ensure!(
            segments.len() <= capacity,
            "{} segments do not fit capacity {}",
            segments.len(),
            capacity
        );
        ensure!(
            head_index < segments.len(),
            "head index {} outside {} segments",
            head_index,
            segments.len()
        );

        let mut ring = ArrayVec::new();
        ring.extend(segments.iter().copied());
        Ok(Self {
            segments: ring,
            head_index,
            direction,
            capacity,
        })
    }

    pub fn length(&self) -> usize {
        self.segments.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.segments.len() >= self.capacity
    }

    pub fn head_index(&self) -> usize {
        self.head_index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Set the heading unless `requested` is its exact reverse.
    ///
    /// Returns whether the heading was applied.
    pub fn turn(&mut self, requested: Direction) -> bool {
        if self.direction.is_opposite(requested) {
            return false;
        }
        self.direction = requested;
        true
    }

    pub fn head_position(&self) -> Position {
        self.segments[self.head_index]
    }

    /// Where the head lands after one more move, without moving.
    pub fn next_head_position(&self) -> Position {
        self.head_position().moved(self.direction)
    }

    /// Move one cell forward; the tail slot is reused for the new head.
    pub fn advance(&mut self) {
        let next = self.next_head_position();
        // Wrap on the live length, not on the storage size.
        self.head_index = (self.head_index + 1) % self.segments.len();
        self.segments[self.head_index] = next;
    }

    /// Move one cell forward keeping the tail, so the snake gets one longer.
    ///
    /// On a full snake nothing changes and the rejected position is returned.
    pub fn grow(&mut self) -> Result<(), CapacityError<Position>> {
        let next = self.next_head_position();
        if self.is_full() {
            return Err(CapacityError::new(next));
        }
        self.segments.try_insert(self.head_index + 1, next)?;
        self.head_index += 1;
        Ok(())
    }

    /// True if any segment other than the head shares the head's cell.
    pub fn eats_itself(&self) -> bool {
        let head = self.head_position();
        self.segments
            .iter()
            .enumerate()
            .any(|(i, seg)| i != self.head_index && *seg == head)
    }

    pub fn is_out_of_bounds(&self, width: u16, height: u16) -> bool {
        !self.head_position().in_bounds(width, height)
    }

    /// Live slots in physical (storage) order.
    pub fn segments(&self) -> &[Position] {
        &self.segments
    }

    /// Live segments in logical order: tail first, head last.
    pub fn body(&self) -> impl Iterator<Item = Position> + '_ {
        let len = self.segments.len();
        (1..=len).map(move |offset| self.segments[(self.head_index + offset) % len])
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn new_snake_layout() {
        let snake = Snake::new(1600);
        assert_eq!(snake.length(), 4);
        assert_eq!(snake.head_index(), 3);
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.segments(), &[p(0, 0), p(1, 0), p(2, 0), p(3, 0)]);
        assert_eq!(snake.head_position(), p(3, 0));
        assert_eq!(snake.next_head_position(), p(4, 0));
        assert!(!snake.eats_itself());
    }

    #[test]
    fn advance_overwrites_tail_and_wraps_on_length() {
        let mut snake = Snake::new(1600);
        snake.advance();
        assert_eq!(snake.head_index(), 0);
        assert_eq!(snake.segments(), &[p(4, 0), p(1, 0), p(2, 0), p(3, 0)]);
        assert_eq!(snake.body().collect::<Vec<_>>(), vec![p(1, 0), p(2, 0), p(3, 0), p(4, 0)]);

        snake.advance();
        assert_eq!(snake.head_index(), 1);
        assert_eq!(snake.head_position(), p(5, 0));
        assert_eq!(snake.length(), 4);
    }

    #[test]
    fn grow_appends_when_head_is_last_slot() {
        let mut snake = Snake::new(1600);
        snake.grow().unwrap();
        assert_eq!(snake.length(), 5);
        assert_eq!(snake.head_index(), 4);
        assert_eq!(snake.head_position(), p(4, 0));
        assert_eq!(
            snake.segments(),
            &[p(0, 0), p(1, 0), p(2, 0), p(3, 0), p(4, 0)]
        );
    }

    #[test]
    fn grow_inside_ring_shifts_older_segments() {
        let mut snake = Snake::new(1600);
        snake.advance(); // head at slot 0
        let before: Vec<_> = snake.body().collect();

        snake.grow().unwrap();
        assert_eq!(snake.length(), 5);
        assert_eq!(snake.head_index(), 1);
        assert_eq!(snake.head_position(), p(5, 0));
        assert_eq!(
            snake.segments(),
            &[p(4, 0), p(5, 0), p(1, 0), p(2, 0), p(3, 0)]
        );

        let after: Vec<_> = snake.body().collect();
        assert_eq!(&after[..4], &before[..]);
        assert_eq!(after[4], p(5, 0));
    }

    #[test]
    fn grow_then_advance_moves_without_stalling() {
        let mut snake = Snake::new(1600);
        snake.grow().unwrap();
        // Leaving head_index on the old head after the insert would stall
        // this advance for one tick and rewrite a stale slot.
        snake.advance();
        assert_eq!(snake.head_position(), p(5, 0));
        assert_eq!(
            snake.body().collect::<Vec<_>>(),
            vec![p(1, 0), p(2, 0), p(3, 0), p(4, 0), p(5, 0)]
        );
    }

    #[test]
    fn grow_refuses_past_capacity() {
        let mut snake = Snake::new(5);
        snake.grow().unwrap();
        assert!(snake.is_full());

        let before = snake.clone();
        let err = snake.grow().unwrap_err();
        assert_eq!(err.element(), p(5, 0));
        assert_eq!(snake, before);
    }

    #[test]
    fn turn_rejects_reversal() {
        let mut snake = Snake::new(1600);
        assert!(!snake.turn(Direction::Left));
        assert_eq!(snake.direction(), Direction::Right);

        assert!(snake.turn(Direction::Down));
        assert_eq!(snake.direction(), Direction::Down);
        assert!(snake.turn(Direction::Down));
        assert!(!snake.turn(Direction::Up));
        assert_eq!(snake.segments(), &[p(0, 0), p(1, 0), p(2, 0), p(3, 0)]);
    }

    #[test]
    fn out_of_bounds_on_every_edge() {
        let cases = [
            (p(0, 0), Direction::Left),
            (p(0, 0), Direction::Up),
            (p(39, 5), Direction::Right),
            (p(5, 39), Direction::Down),
        ];
        for (head, dir) in cases {
            let mut snake = Snake::from_parts(&[head], 0, dir, 1600).unwrap();
            assert!(!snake.is_out_of_bounds(40, 40));
            snake.advance();
            assert!(snake.is_out_of_bounds(40, 40), "{:?} from {:?}", dir, head);
        }
    }

    #[test]
    fn eats_itself_after_tight_loop() {
        // Five segments curled into a square: moving up lands on the body.
        let segments = [p(1, 1), p(2, 1), p(3, 1), p(3, 2), p(2, 2)];
        let mut snake = Snake::from_parts(&segments, 4, Direction::Left, 1600).unwrap();
        assert!(!snake.eats_itself());
        snake.turn(Direction::Up);
        snake.grow().unwrap();
        assert_eq!(snake.head_position(), p(2, 1));
        assert!(snake.eats_itself());
    }

    #[test]
    fn following_own_tail_is_not_a_collision() {
        // 2x2 loop: the tail slot is overwritten by the head in the same move.
        let segments = [p(0, 0), p(1, 0), p(1, 1), p(0, 1)];
        let mut snake = Snake::from_parts(&segments, 3, Direction::Up, 1600).unwrap();
        snake.advance();
        assert_eq!(snake.head_position(), p(0, 0));
        assert!(!snake.eats_itself());
    }

    #[test]
    fn from_parts_validates_ring() {
        assert!(Snake::from_parts(&[], 0, Direction::Up, 10).is_err());
        assert!(Snake::from_parts(&[p(0, 0)], 1, Direction::Up, 10).is_err());
        assert!(Snake::from_parts(&[p(0, 0), p(1, 0)], 0, Direction::Up, 1).is_err());
        assert!(Snake::from_parts(&[p(0, 0)], 0, Direction::Up, MAX_CELLS + 1).is_err());
    }
}
