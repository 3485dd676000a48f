use crate::events::{GameOverEvent, GameOverReason};
use crate::resources::GameState;
use bevy::app::AppExit;
use bevy::prelude::*;

// Terminal handler: log why the run ended and ask the engine to quit.
// The game_over flag parks input and ticking while the exit drains.
pub fn handle_game_over(
    mut game_over_events: EventReader<GameOverEvent>,
    mut game_state: ResMut<GameState>,
    mut exit_events: EventWriter<AppExit>,
) {
    for event in game_over_events.read() {
        match event.reason {
            GameOverReason::OutOfBounds => info!("snake left the grid, game over"),
            GameOverReason::SelfCollision => info!("snake ran into itself, game over"),
        }
        game_state.game_over = true;
        exit_events.send(AppExit::Success);
    }
}
