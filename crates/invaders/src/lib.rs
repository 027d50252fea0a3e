use anyhow::Result;
use invaders_common::AssetLocator;
use invaders_game::InvadersApp;
use invaders_sdl2::App;
use invaders_sdl2::{SdlContext, SdlInitInfo};

/// Window title, size and pacing for the game.
pub fn init_info(app: &InvadersApp) -> SdlInitInfo {
    SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .title(app.title())
        .build()
}

/// Runs until the window is closed. Errors are initialization failures.
pub fn run() -> Result<()> {
    let assets = AssetLocator::from_current_exe()?;
    let app = InvadersApp::new(&assets)?;
    SdlContext::run(init_info(&app), app)?;
    Ok(())
}

/// Process exit status for a finished run. Startup failures go straight to
/// stderr so they show up whatever `RUST_LOG` says.
pub fn exit_code(result: &Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{e:#}");
            1
        }
    }
}
