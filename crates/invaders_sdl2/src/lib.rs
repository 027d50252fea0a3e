use std::collections::HashMap;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Texture, TextureCreator, WindowCanvas};
use sdl2::video::WindowContext;
use typed_builder::TypedBuilder;

pub use invaders_common;
pub use invaders_common::app::App;
pub use sdl2;

use invaders_common::app::{DrawTarget, Sprite, TextureAsset};
use invaders_common::key::Key;
use invaders_common::Color;

/// Decoded images are tightly packed RGBA bytes.
#[cfg(target_endian = "little")]
const RGBA_BYTES: PixelFormatEnum = PixelFormatEnum::ABGR8888;
#[cfg(target_endian = "big")]
const RGBA_BYTES: PixelFormatEnum = PixelFormatEnum::RGBA8888;

/// How the loop waits between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePacing {
    /// Sleep a whole frame after every frame, however long the work took.
    /// The frame rate drifts under load.
    Fixed,
    /// Sleep only what is left of the frame budget.
    Measured,
}

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub width: u32,
    pub height: u32,
    pub title: String,
    #[builder(default = Duration::from_micros(16_667))]
    pub frame_duration: Duration,
    #[builder(default = FramePacing::Fixed)]
    pub pacing: FramePacing,
    #[builder(default = false)]
    pub vsync: bool,
    #[builder(default = Color::BLACK)]
    pub clear_color: Color,
    /// Fill shown while textures load.
    #[builder(default = Color::WHITE)]
    pub loading_color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// The subset of SDL events the loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Key { key: Key, is_down: bool },
}

pub struct SdlContext {
    pub sdl_context: sdl2::Sdl,
    pub event_pump: sdl2::EventPump,
    pub canvas: WindowCanvas,
}

impl SdlContext {
    /// Brings up SDL, creates the window hidden, then shows it filled with
    /// `loading_color`.
    pub fn new(init_info: &SdlInitInfo) -> Result<Self> {
        let sdl_context = sdl2::init()
            .map_err(|e| anyhow!(e))
            .context("SDL could not initialize")?;
        let video_subsystem = sdl_context
            .video()
            .map_err(|e| anyhow!(e))
            .context("SDL video subsystem could not initialize")?;
        let window = video_subsystem
            .window(&init_info.title, init_info.width, init_info.height)
            .position_centered()
            .hidden()
            .build()
            .context("window creation failed")?;

        let mut builder = window.into_canvas().accelerated();
        if init_info.vsync {
            builder = builder.present_vsync();
        }
        let mut canvas = builder.build().context("renderer creation failed")?;

        canvas.window_mut().show();
        canvas.set_draw_color(init_info.loading_color.rgba());
        canvas.clear();
        canvas.present();

        let event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;
        Ok(Self {
            sdl_context,
            event_pump,
            canvas,
        })
    }

    pub fn run(init_info: SdlInitInfo, mut app: impl App) -> Result<()> {
        let mut ctx = SdlContext::new(&init_info)?;
        let SdlInitInfo {
            frame_duration,
            pacing,
            clear_color,
            ..
        } = init_info;

        app.init();
        let creator = ctx.canvas.texture_creator();
        let textures = load_textures(&creator, &app.textures())?;

        log::debug!("Frame pacing: {pacing:?}, {frame_duration:?} per frame");
        let mut last_frame = Instant::now();

        loop {
            let events = ctx.event_pump.poll_iter().filter_map(|e| translate_event(&e));
            if dispatch_events(&mut app, events) == LoopState::Terminated {
                app.exit();
                return Ok(());
            }

            app.update();

            ctx.canvas.set_draw_color(clear_color.rgba());
            ctx.canvas.clear();
            app.draw(&mut SdlDrawTarget {
                canvas: &mut ctx.canvas,
                textures: &textures,
            })?;
            ctx.canvas.present();

            std::thread::sleep(frame_sleep(pacing, frame_duration, last_frame.elapsed()));
            last_frame = Instant::now();
        }
    }
}

/// Feeds one frame's worth of events to `app`. A quit stops the drain at once;
/// held keys don't matter.
pub fn dispatch_events(
    app: &mut impl App,
    events: impl IntoIterator<Item = InputEvent>,
) -> LoopState {
    for event in events {
        match event {
            InputEvent::Quit => return LoopState::Terminated,
            InputEvent::Key { key, is_down } => app.handle_key_event(key, is_down),
        }
    }
    LoopState::Running
}

pub fn translate_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::KeyDown {
            keycode: Some(keycode),
            ..
        } => Some(InputEvent::Key {
            key: map_keycode(*keycode),
            is_down: true,
        }),
        Event::KeyUp {
            keycode: Some(keycode),
            ..
        } => Some(InputEvent::Key {
            key: map_keycode(*keycode),
            is_down: false,
        }),
        _ => None,
    }
}

pub fn map_keycode(keycode: Keycode) -> Key {
    match keycode {
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        _ => Key::None,
    }
}

/// Time to sleep after a frame whose update and render took `work`.
pub fn frame_sleep(pacing: FramePacing, frame_duration: Duration, work: Duration) -> Duration {
    match pacing {
        FramePacing::Fixed => frame_duration,
        FramePacing::Measured => frame_duration.saturating_sub(work),
    }
}

pub fn sprite_rect(sprite: &Sprite) -> Rect {
    Rect::new(
        sprite.position.x,
        sprite.position.y,
        sprite.size.x.max(0) as u32,
        sprite.size.y.max(0) as u32,
    )
}

struct SdlDrawTarget<'a, 't> {
    canvas: &'a mut WindowCanvas,
    textures: &'a HashMap<&'static str, Texture<'t>>,
}

impl DrawTarget for SdlDrawTarget<'_, '_> {
    fn draw_sprite(&mut self, sprite: &Sprite) -> Result<()> {
        let texture = self
            .textures
            .get(sprite.texture)
            .ok_or_else(|| anyhow!("texture '{}' was never loaded", sprite.texture))?;
        self.canvas
            .copy(texture, None, sprite_rect(sprite))
            .map_err(|e| anyhow!(e))
    }
}

fn load_textures<'t>(
    creator: &'t TextureCreator<WindowContext>,
    assets: &[TextureAsset],
) -> Result<HashMap<&'static str, Texture<'t>>> {
    let mut textures = HashMap::with_capacity(assets.len());
    for asset in assets {
        let texture = load_texture(creator, &asset.path)
            .with_context(|| format!("Couldn't load {}", asset.path.display()))?;
        textures.insert(asset.key, texture);
    }
    Ok(textures)
}

fn load_texture<'t>(creator: &'t TextureCreator<WindowContext>, path: &Path) -> Result<Texture<'t>> {
    let image = image::open(path)?.to_rgba8();
    let (width, height) = image.dimensions();

    let mut texture = creator.create_texture_static(RGBA_BYTES, width, height)?;
    texture.update(None, image.as_raw(), (width * 4) as usize)?;
    texture.set_blend_mode(BlendMode::Blend);

    log::info!("Loaded {} ({width}x{height})", path.display());
    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use invaders_common::Vector2;
    use sdl2::keyboard::Mod;

    #[derive(Default)]
    struct KeyLog {
        keys: Vec<(Key, bool)>,
    }

    impl App for KeyLog {
        fn init(&mut self) {}
        fn update(&mut self) {}
        fn draw(&self, _target: &mut dyn DrawTarget) -> Result<()> {
            Ok(())
        }
        fn handle_key_event(&mut self, key: Key, is_down: bool) {
            self.keys.push((key, is_down));
        }
        fn exit(&mut self) {}
        fn textures(&self) -> Vec<TextureAsset> {
            Vec::new()
        }
        fn width(&self) -> u32 {
            640
        }
        fn height(&self) -> u32 {
            480
        }
        fn title(&self) -> String {
            String::new()
        }
    }

    fn key(key: Key, is_down: bool) -> InputEvent {
        InputEvent::Key { key, is_down }
    }

    #[test]
    fn keys_are_forwarded_in_order() {
        let mut app = KeyLog::default();
        let state = dispatch_events(
            &mut app,
            [
                key(Key::Left, true),
                key(Key::Right, true),
                key(Key::Left, false),
            ],
        );
        assert_eq!(state, LoopState::Running);
        assert_eq!(
            app.keys,
            vec![(Key::Left, true), (Key::Right, true), (Key::Left, false)]
        );
    }

    #[test]
    fn quit_terminates_even_with_keys_held() {
        let mut app = KeyLog::default();
        let state = dispatch_events(
            &mut app,
            [
                key(Key::Left, true),
                key(Key::Right, true),
                InputEvent::Quit,
                key(Key::Left, false),
            ],
        );
        assert_eq!(state, LoopState::Terminated);
        assert_eq!(app.keys, vec![(Key::Left, true), (Key::Right, true)]);
    }

    #[test]
    fn empty_frame_keeps_running() {
        let mut app = KeyLog::default();
        assert_eq!(dispatch_events(&mut app, Vec::new()), LoopState::Running);
        assert!(app.keys.is_empty());
    }

    #[test]
    fn translates_quit_and_ignores_unrelated_events() {
        assert_eq!(
            translate_event(&Event::Quit { timestamp: 0 }),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            translate_event(&Event::AppTerminating { timestamp: 0 }),
            None
        );
    }

    fn key_down(keycode: Option<Keycode>) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode,
            scancode: None,
            keymod: Mod::empty(),
            repeat: false,
        }
    }

    fn key_up(keycode: Option<Keycode>) -> Event {
        Event::KeyUp {
            timestamp: 0,
            window_id: 0,
            keycode,
            scancode: None,
            keymod: Mod::empty(),
            repeat: false,
        }
    }

    #[test]
    fn translates_key_down_and_up() {
        assert_eq!(
            translate_event(&key_down(Some(Keycode::Left))),
            Some(key(Key::Left, true))
        );
        assert_eq!(
            translate_event(&key_up(Some(Keycode::Left))),
            Some(key(Key::Left, false))
        );
        assert_eq!(
            translate_event(&key_down(Some(Keycode::Right))),
            Some(key(Key::Right, true))
        );
        assert_eq!(
            translate_event(&key_up(Some(Keycode::Right))),
            Some(key(Key::Right, false))
        );
        assert_eq!(
            translate_event(&key_down(Some(Keycode::Up))),
            Some(key(Key::None, true))
        );
    }

    #[test]
    fn key_events_without_keycode_are_ignored() {
        assert_eq!(translate_event(&key_down(None)), None);
        assert_eq!(translate_event(&key_up(None)), None);
    }

    #[test]
    fn only_arrow_keys_map() {
        assert_eq!(map_keycode(Keycode::Left), Key::Left);
        assert_eq!(map_keycode(Keycode::Right), Key::Right);
        assert_eq!(map_keycode(Keycode::Up), Key::None);
        assert_eq!(map_keycode(Keycode::A), Key::None);
    }

    #[test]
    fn fixed_pacing_ignores_work_time() {
        let frame = Duration::from_micros(16_667);
        assert_eq!(
            frame_sleep(FramePacing::Fixed, frame, Duration::from_millis(10)),
            frame
        );
        assert_eq!(
            frame_sleep(FramePacing::Fixed, frame, Duration::from_millis(40)),
            frame
        );
    }

    #[test]
    fn measured_pacing_sleeps_the_remainder() {
        let frame = Duration::from_micros(16_667);
        assert_eq!(
            frame_sleep(FramePacing::Measured, frame, Duration::from_micros(6_667)),
            Duration::from_millis(10)
        );
        assert_eq!(
            frame_sleep(FramePacing::Measured, frame, Duration::from_millis(40)),
            Duration::ZERO
        );
    }

    #[test]
    fn sprite_rect_uses_position_and_size() {
        let rect = sprite_rect(&Sprite {
            texture: "ship",
            position: Vector2::new(12, 400),
            size: Vector2::new(64, 32),
        });
        assert_eq!(
            (rect.x(), rect.y(), rect.width(), rect.height()),
            (12, 400, 64, 32)
        );
    }

    #[test]
    fn init_info_defaults() {
        let info = SdlInitInfo::builder()
            .width(640)
            .height(480)
            .title("RECURSE INVADERS".to_string())
            .build();
        assert_eq!(info.frame_duration, Duration::from_micros(16_667));
        assert_eq!(info.pacing, FramePacing::Fixed);
        assert!(!info.vsync);
        assert_eq!(info.clear_color, Color::BLACK);
        assert_eq!(info.loading_color, Color::WHITE);
    }
}
