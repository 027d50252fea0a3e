use std::path::PathBuf;

use anyhow::Result;

use crate::key::Key;
use crate::Vector2;

/// An image the frontend must load before the first frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureAsset {
    pub key: &'static str,
    pub path: PathBuf,
}

/// One textured rectangle. The whole source texture is stretched into
/// `size` at `position`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub texture: &'static str,
    pub position: Vector2,
    pub size: Vector2,
}

/// Whatever a frontend renders into. Sprites are drawn in call order, so
/// later sprites end up on top.
pub trait DrawTarget {
    fn draw_sprite(&mut self, sprite: &Sprite) -> Result<()>;
}

pub trait App {
    fn init(&mut self);
    fn update(&mut self);
    fn draw(&self, target: &mut dyn DrawTarget) -> Result<()>;
    fn handle_key_event(&mut self, key: Key, is_down: bool);
    fn exit(&mut self);

    fn textures(&self) -> Vec<TextureAsset>;
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn title(&self) -> String;
}
