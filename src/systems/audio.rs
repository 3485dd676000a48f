use crate::events::FruitEatenEvent;
use crate::resources::CrunchSound;
use bevy::prelude::*;

// Fire-and-forget playback; the entity despawns when the clip ends. If
// the asset failed to load, the player stays silent and the game keeps
// running.
pub fn play_crunch_sound(
    mut commands: Commands,
    mut eaten_events: EventReader<FruitEatenEvent>,
    sound: Res<CrunchSound>,
) {
    for _ in eaten_events.read() {
        commands.spawn((AudioPlayer::new(sound.0.clone()), PlaybackSettings::DESPAWN));
    }
}
