pub mod audio;
pub mod game_over;
pub mod input;
pub mod render;
pub mod tick;
