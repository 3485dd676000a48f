// components.rs
use bevy::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn step(self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    // Grid rows grow downward, so Up is -1 on the y axis.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Resource, Clone)]
pub struct GridSettings {
    pub cell_number: i32,
    pub cell_size: f32,
    pub screen_color: Color,
    pub grass_color: Color,
    pub snake_color: Color,
    pub fruit_color: Color,
    pub score_color: Color,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            cell_number: 20, // 20 cells per side
            cell_size: 40.0, // each cell is 40x40 pixels (800x800 window)
            screen_color: Color::srgb_u8(175, 210, 70),
            grass_color: Color::srgb_u8(167, 209, 61),
            snake_color: Color::srgb_u8(63, 72, 204),
            fruit_color: Color::srgb_u8(183, 43, 30),
            score_color: Color::srgb_u8(56, 74, 12),
        }
    }
}

impl GridSettings {
    pub fn window_side(&self) -> f32 {
        self.cell_number as f32 * self.cell_size
    }

    pub fn contains(&self, pos: Position) -> bool {
        (0..self.cell_number).contains(&pos.x) && (0..self.cell_number).contains(&pos.y)
    }

    // Map a grid cell to world coordinates. Cell (0, 0) is the top-left
    // corner of the window; bevy's y axis points up, so rows are flipped.
    pub fn cell_to_world(&self, pos: Position, z: f32) -> Vec3 {
        let half = self.window_side() / 2.0;
        let x = (pos.x as f32 + 0.5) * self.cell_size - half;
        let y = half - (pos.y as f32 + 0.5) * self.cell_size;
        Vec3::new(x, y, z)
    }
}

// Markers for the sprite entities that mirror the game state.
#[derive(Component)]
pub struct BodySegment(pub usize);

#[derive(Component)]
pub struct FruitSprite;

#[derive(Component)]
pub struct ScoreText;
