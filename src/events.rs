use bevy::prelude::*;

// Event that gets triggered when the snake's head lands on the fruit
#[derive(Event)]
pub struct FruitEatenEvent;

// Event that gets triggered when the run is over
#[derive(Event)]
pub struct GameOverEvent {
    pub reason: GameOverReason,
}

// Enum to track the reason the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    OutOfBounds,   // head left the grid
    SelfCollision, // head ran into a trailing body segment
}
