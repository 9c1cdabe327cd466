//! Native entry point.

#[cfg(all(feature = "native", not(target_arch = "wasm32")))]
fn main() {
    use floatframe_app::host::{CONFIG_ENV, HostConfig};
    use floatframe_app::native::NativeApp;

    env_logger::init();
    log::info!("Starting FloatFrame");

    let settings = std::env::var(CONFIG_ENV)
        .ok()
        .and_then(|path| match std::fs::read_to_string(&path) {
            Ok(json) => Some(json),
            Err(e) => {
                log::warn!("Cannot read {}: {}", path, e);
                None
            }
        });
    let config = HostConfig::load_or_default(settings.as_deref());

    // `floatframe [URL]` opens a page at startup.
    let startup_url = std::env::args().nth(1);

    if let Err(e) = NativeApp::new(config, startup_url).run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(all(feature = "native", not(target_arch = "wasm32"))))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
