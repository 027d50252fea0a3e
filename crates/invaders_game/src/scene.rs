use crate::{FRAME_TIME, SCREEN_WIDTH};
use invaders_common::Vector2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub position: Vector2,
    pub size: Vector2,
    /// Pixels moved per frame while a direction key is held.
    pub speed: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            position: Vector2::new(0, 400),
            size: Vector2::new(64, 64),
            speed: 4,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub position: Vector2,
    pub size: Vector2,
}

impl Default for Enemy {
    fn default() -> Self {
        Self {
            position: Vector2::new(0, 0),
            size: Vector2::new(64, 64),
        }
    }
}

/// Everything that moves. Time only advances through [`Scene::update`],
/// one fixed frame at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub player: Player,
    pub enemy: Enemy,
    frames: u64,
}

impl Scene {
    /// Frames stepped so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Simulated seconds, `frames * FRAME_TIME`. Exact up to 2^24 frames
    /// (about 77 hours), after which `f32` rounding sets in.
    pub fn elapsed_time(&self) -> f32 {
        self.frames as f32 * FRAME_TIME
    }

    pub fn update(&mut self, move_left: bool, move_right: bool) {
        // Both held cancels out.
        if move_left {
            self.player.position.x -= self.player.speed;
        }
        if move_right {
            self.player.position.x += self.player.speed;
        }

        let enemy_max_x = SCREEN_WIDTH - self.enemy.size.x;
        self.enemy.position.x = oscillate(self.elapsed_time(), enemy_max_x);

        clamp_x(&mut self.player.position, self.player.size, SCREEN_WIDTH);
        clamp_x(&mut self.enemy.position, self.enemy.size, SCREEN_WIDTH);

        self.frames += 1;
    }
}

/// Sine sweep between `0` and `max_x`, period `2π` seconds.
pub fn oscillate(elapsed: f32, max_x: i32) -> i32 {
    let phase = (elapsed.sin() + 1.0) / 2.0;
    (phase * max_x as f32) as i32
}

/// Keep `position.x` within `[0, screen_width - size.x]`. The upper bound wins
/// if the range is inverted.
pub fn clamp_x(position: &mut Vector2, size: Vector2, screen_width: i32) {
    position.x = position.x.max(0);
    position.x = position.x.min(screen_width - size.x);
}
