use crate::components::{BodySegment, FruitSprite, GridSettings, ScoreText};
use crate::fruit::Fruit;
use crate::snake::Snake;
use bevy::prelude::*;

// Rendering layers, background to foreground.
pub const Z_GRASS: f32 = -0.1;
pub const Z_FRUIT: f32 = 0.5;
pub const Z_SNAKE: f32 = 1.0;
pub const Z_PANEL: f32 = 2.0;
pub const Z_TEXT: f32 = 3.0;

// Keep one sprite per body segment: spawn the missing indices, drop any
// stale ones, and reposition everything from the model. Running this any
// number of times between ticks leaves the same picture.
pub fn sync_snake_sprites(
    mut commands: Commands,
    grid: Res<GridSettings>,
    snake: Res<Snake>,
    mut segments: Query<(Entity, &BodySegment, &mut Transform)>,
) {
    let body = snake.body();
    let mut covered = 0;

    for (entity, segment, mut transform) in segments.iter_mut() {
        if segment.0 < body.len() {
            transform.translation = grid.cell_to_world(body[segment.0], Z_SNAKE);
            covered = covered.max(segment.0 + 1);
        } else {
            commands.entity(entity).despawn();
        }
    }

    for index in covered..body.len() {
        commands.spawn((
            Sprite {
                color: grid.snake_color,
                custom_size: Some(Vec2::splat(grid.cell_size)),
                ..default()
            },
            Transform::from_translation(grid.cell_to_world(body[index], Z_SNAKE)),
            BodySegment(index),
        ));
    }
}

pub fn sync_fruit_sprite(
    grid: Res<GridSettings>,
    fruit: Res<Fruit>,
    mut query: Query<&mut Transform, With<FruitSprite>>,
) {
    if let Ok(mut transform) = query.get_single_mut() {
        transform.translation = grid.cell_to_world(fruit.position, Z_FRUIT);
    }
}

pub fn update_score_text(snake: Res<Snake>, mut query: Query<&mut Text2d, With<ScoreText>>) {
    if let Ok(mut text) = query.get_single_mut() {
        text.0 = snake.score().to_string();
    }
}
