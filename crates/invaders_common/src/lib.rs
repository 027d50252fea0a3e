pub mod app;
pub mod assets;
pub mod key;

pub use app::{App, DrawTarget, Sprite, TextureAsset};
pub use assets::{AssetError, AssetLocator};
pub use key::Key;

/// Integer pixel pair, used for both positions and sizes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Vector2 {
    pub x: i32,
    pub y: i32,
}

impl Vector2 {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Vector2 {
        Vector2 { x, y }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new_rgb(0, 0, 0);
    pub const WHITE: Color = Color::new_rgb(255, 255, 255);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xff }
    }

    #[inline]
    pub const fn rgba(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }
}
