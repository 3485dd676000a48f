// resources.rs
use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct GameState {
    pub game_over: bool,
}

// Crunch sound handle, loaded once at startup so the first bite doesn't
// stall on asset IO.
#[derive(Resource)]
pub struct CrunchSound(pub Handle<AudioSource>);
