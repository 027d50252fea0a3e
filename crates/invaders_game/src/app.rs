use crate::input::MoveFlags;
use crate::scene::Scene;
use crate::{
    ENEMY_ASSET, ENEMY_TEXTURE, SCREEN_HEIGHT, SCREEN_WIDTH, SHIP_ASSET, SHIP_TEXTURE, TITLE,
};
use anyhow::Result;
use invaders_common::app::{App, DrawTarget, Sprite, TextureAsset};
use invaders_common::assets::{AssetError, AssetLocator};
use invaders_common::key::Key;

/// Frontend-facing wrapper around the scene.
///
/// This type implements the shared `App` trait so that the SDL2 frontend
/// (`invaders_sdl2`) can drive it without knowing anything about ships.
#[derive(Debug)]
pub struct InvadersApp {
    pub scene: Scene,
    pub input: MoveFlags,
    textures: Vec<TextureAsset>,
}

impl InvadersApp {
    pub fn new(assets: &AssetLocator) -> Result<Self, AssetError> {
        let textures = vec![
            TextureAsset {
                key: SHIP_TEXTURE,
                path: assets.resolve(SHIP_ASSET)?,
            },
            TextureAsset {
                key: ENEMY_TEXTURE,
                path: assets.resolve(ENEMY_ASSET)?,
            },
        ];
        Ok(Self {
            scene: Scene::default(),
            input: MoveFlags::default(),
            textures,
        })
    }
}

impl App for InvadersApp {
    fn init(&mut self) {
        log::info!("Recurse Invaders init");
    }

    fn update(&mut self) {
        self.scene.update(self.input.left, self.input.right);
    }

    fn draw(&self, target: &mut dyn DrawTarget) -> Result<()> {
        let player = &self.scene.player;
        let enemy = &self.scene.enemy;
        // Enemy last so it sits on top of the ship.
        target.draw_sprite(&Sprite {
            texture: SHIP_TEXTURE,
            position: player.position,
            size: player.size,
        })?;
        target.draw_sprite(&Sprite {
            texture: ENEMY_TEXTURE,
            position: enemy.position,
            size: enemy.size,
        })
    }

    fn handle_key_event(&mut self, key: Key, is_down: bool) {
        self.input.handle_key(key, is_down);
    }

    fn exit(&mut self) {
        log::info!("Recurse Invaders exit");
    }

    fn textures(&self) -> Vec<TextureAsset> {
        self.textures.clone()
    }

    fn width(&self) -> u32 {
        SCREEN_WIDTH as u32
    }

    fn height(&self) -> u32 {
        SCREEN_HEIGHT as u32
    }

    fn title(&self) -> String {
        TITLE.to_string()
    }
}
