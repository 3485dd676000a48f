use bevy::prelude::*;
mod components;
mod events;
mod fruit;
mod resources;
mod snake;
mod systems;

use std::time::Duration;

use bevy::time::common_conditions::on_timer;

use components::*;
use events::{FruitEatenEvent, GameOverEvent};
use fruit::Fruit;
use resources::{CrunchSound, GameState};
use snake::Snake;
use systems::audio::play_crunch_sound;
use systems::game_over::handle_game_over;
use systems::input::direction_input_system;
use systems::render::*;
use systems::tick::tick_system;

// Gameplay advances on a fixed timer; rendering runs every frame and the
// window's vsync caps the frame rate.
const TICK_INTERVAL: Duration = Duration::from_millis(150);

fn main() {
    let grid = GridSettings::default();
    let side = grid.window_side();
    let fruit = Fruit::new(&grid, &mut rand::rng());

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "The Snake Game".into(),
                resolution: (side, side).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(grid.screen_color))
        .insert_resource(GameState::default())
        .insert_resource(Snake::new())
        .insert_resource(fruit)
        .insert_resource(grid)
        .add_event::<FruitEatenEvent>()
        .add_event::<GameOverEvent>()
        .add_systems(Startup, setup_game)
        .add_systems(
            Update,
            (
                direction_input_system,
                tick_system.run_if(on_timer(TICK_INTERVAL)),
                play_crunch_sound,
                handle_game_over,
                sync_snake_sprites,
                sync_fruit_sprite,
                update_score_text,
            )
                .chain(),
        )
        .run();
}

fn setup_game(
    mut commands: Commands,
    grid: Res<GridSettings>,
    fruit: Res<Fruit>,
    asset_server: Res<AssetServer>,
) {
    // Spawn camera
    commands.spawn(Camera2d::default());

    // Checkerboard: grass on every other cell, the clear color shows
    // through the rest.
    for y in 0..grid.cell_number {
        for x in 0..grid.cell_number {
            if (x + y) % 2 == 0 {
                commands.spawn((
                    Sprite {
                        color: grid.grass_color,
                        custom_size: Some(Vec2::splat(grid.cell_size)),
                        ..default()
                    },
                    Transform::from_translation(grid.cell_to_world(Position { x, y }, Z_GRASS)),
                ));
            }
        }
    }

    // Fruit sprite; the render sync moves it after every relocation.
    commands.spawn((
        Sprite {
            color: grid.fruit_color,
            custom_size: Some(Vec2::splat(grid.cell_size * 0.8)),
            ..default()
        },
        Transform::from_translation(grid.cell_to_world(fruit.position, Z_FRUIT)),
        FruitSprite,
    ));

    // Scoreboard in the bottom-right corner: a darker rim behind a grass
    // plate, with the count drawn on top of both.
    let panel = Vec2::new(side_offset(&grid, 60.0), -side_offset(&grid, 40.0));
    commands.spawn((
        Sprite {
            color: grid.score_color,
            custom_size: Some(Vec2::new(84.0, 44.0)),
            ..default()
        },
        Transform::from_translation(panel.extend(Z_PANEL)),
    ));
    commands.spawn((
        Sprite {
            color: grid.grass_color,
            custom_size: Some(Vec2::new(80.0, 40.0)),
            ..default()
        },
        Transform::from_translation(panel.extend(Z_PANEL + 0.1)),
    ));
    commands.spawn((
        Text2d::new("0"),
        TextFont {
            font: asset_server.load("fonts/PoetsenOne-Regular.ttf"),
            font_size: 25.0,
            ..default()
        },
        TextColor(grid.score_color),
        Transform::from_translation(panel.extend(Z_TEXT)),
        ScoreText,
    ));

    // Crunch sound loaded up front so the first bite plays without a hitch.
    commands.insert_resource(CrunchSound(asset_server.load("sounds/crunch.ogg")));
}

// Distance from the window center to a point `inset` pixels in from the
// window edge.
fn side_offset(grid: &GridSettings, inset: f32) -> f32 {
    grid.window_side() / 2.0 - inset
}
