pub mod app;
pub mod input;
pub mod scene;

pub use app::InvadersApp;
pub use scene::Scene;

/// Window width in pixels.
pub const SCREEN_WIDTH: i32 = 640;
/// Window height in pixels.
pub const SCREEN_HEIGHT: i32 = 480;
/// Simulated seconds per frame.
pub const FRAME_TIME: f32 = 1.0 / 60.0;

pub const TITLE: &str = "RECURSE INVADERS";

pub const SHIP_TEXTURE: &str = "ship";
pub const ENEMY_TEXTURE: &str = "enemy";
pub const SHIP_ASSET: &str = "ship.png";
pub const ENEMY_ASSET: &str = "enemy.png";
