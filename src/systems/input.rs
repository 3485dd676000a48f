use crate::components::Direction;
use crate::resources::GameState;
use crate::snake::Snake;
use bevy::prelude::*;

pub fn direction_input_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    game_state: Res<GameState>,
    mut snake: ResMut<Snake>,
) {
    if game_state.game_over {
        return;
    }

    // Process only cardinal directions; the last pressed key in a frame
    // wins. The snake itself rejects reversals, so a 180-degree turn is
    // silently ignored and takes no effect on the next tick.
    let mut requested = None;

    if keyboard_input.just_pressed(KeyCode::KeyW) || keyboard_input.just_pressed(KeyCode::ArrowUp) {
        requested = Some(Direction::Up);
    }

    if keyboard_input.just_pressed(KeyCode::KeyS) || keyboard_input.just_pressed(KeyCode::ArrowDown)
    {
        requested = Some(Direction::Down);
    }

    if keyboard_input.just_pressed(KeyCode::KeyA) || keyboard_input.just_pressed(KeyCode::ArrowLeft)
    {
        requested = Some(Direction::Left);
    }

    if keyboard_input.just_pressed(KeyCode::KeyD)
        || keyboard_input.just_pressed(KeyCode::ArrowRight)
    {
        requested = Some(Direction::Right);
    }

    if let Some(direction) = requested {
        snake.set_direction(direction);
    }
}
