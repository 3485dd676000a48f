use bevy::prelude::*;
use rand::Rng;

use crate::components::{GridSettings, Position};

#[derive(Resource)]
pub struct Fruit {
    pub position: Position,
}

impl Fruit {
    pub fn new(grid: &GridSettings, rng: &mut impl Rng) -> Self {
        let mut fruit = Self {
            position: Position { x: 0, y: 0 },
        };
        fruit.randomize(grid, rng);
        fruit
    }

    // Uniform cell anywhere on the grid. The new cell may land on the
    // snake; the tick update relocates it again on the following tick.
    pub fn randomize(&mut self, grid: &GridSettings, rng: &mut impl Rng) {
        self.position = Position {
            x: rng.random_range(0..grid.cell_number),
            y: rng.random_range(0..grid.cell_number),
        };
    }
}
