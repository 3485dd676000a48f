use bevy::prelude::*;

use crate::components::{Direction, Position};

// The snake body, head first. Growth is two-step: eating marks the snake
// for growth, and the next advance keeps the tail instead of shifting it,
// so the body lengthens one tick after the fruit was eaten.
#[derive(Resource)]
pub struct Snake {
    body: Vec<Position>,
    direction: Direction,
    pending_growth: bool,
}

impl Snake {
    pub fn new() -> Self {
        Self {
            body: vec![
                Position { x: 5, y: 10 },
                Position { x: 4, y: 10 },
                Position { x: 3, y: 10 },
            ],
            direction: Direction::Right,
            pending_growth: false,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> usize {
        self.body.len() - 3
    }

    // Shift the body one cell in the current direction. An ordinary move
    // keeps the length fixed; a pending growth keeps the tail in place,
    // which is where the extra segment appears.
    pub fn advance(&mut self) {
        let new_head = self.head().step(self.direction);
        if self.pending_growth {
            self.pending_growth = false;
        } else {
            self.body.pop();
        }
        self.body.insert(0, new_head);
    }

    // Mark the snake to lengthen on its next advance, not immediately.
    pub fn grow(&mut self) {
        self.pending_growth = true;
    }

    // Reversing into yourself is ignored; any other direction takes
    // effect on the next tick's advance.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.direction = direction;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_moves_the_head_by_one_cell() {
        let mut snake = Snake::new();
        let head = snake.head();
        snake.advance();
        assert_eq!(snake.head(), Position { x: head.x + 1, y: head.y });
        assert_eq!(snake.body().len(), 3);
    }

    #[test]
    fn growth_is_realized_on_the_next_advance() {
        let mut snake = Snake::new();
        snake.grow();
        assert_eq!(snake.body().len(), 3);
        snake.advance();
        assert_eq!(snake.body().len(), 4);
        snake.advance();
        assert_eq!(snake.body().len(), 4);
    }

    #[test]
    fn growth_keeps_the_tail_in_place() {
        let mut snake = Snake::new();
        let tail = *snake.body().last().unwrap();
        snake.grow();
        snake.advance();
        assert_eq!(*snake.body().last().unwrap(), tail);
    }

    #[test]
    fn reversal_is_rejected_silently() {
        let mut snake = Snake::new();
        snake.set_direction(Direction::Left); // exact opposite of Right
        assert_eq!(snake.direction(), Direction::Right);
        snake.set_direction(Direction::Up);
        assert_eq!(snake.direction(), Direction::Up);
        snake.set_direction(Direction::Down); // now the opposite of Up
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn segments_stay_adjacent_across_turns() {
        let mut snake = Snake::new();
        snake.advance();
        snake.set_direction(Direction::Down);
        snake.advance();
        snake.set_direction(Direction::Left);
        snake.advance();
        for pair in snake.body().windows(2) {
            let dx = (pair[0].x - pair[1].x).abs();
            let dy = (pair[0].y - pair[1].y).abs();
            assert_eq!(dx + dy, 1);
        }
    }

    #[test]
    fn score_counts_segments_past_the_initial_three() {
        let mut snake = Snake::new();
        assert_eq!(snake.score(), 0);
        snake.grow();
        snake.advance();
        assert_eq!(snake.score(), 1);
    }
}
