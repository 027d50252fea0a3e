fn main() {
    env_logger::init();

    let result = invaders::run();
    if let Err(e) = &result {
        log::debug!("Startup failed: {e:?}");
    }
    std::process::exit(invaders::exit_code(&result));
}
