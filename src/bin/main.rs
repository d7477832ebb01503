use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use embassy_time::{Instant, Timer};
use env_logger::Env;
use folio_core::{
    app::{PageSurface, SiteApp, SiteConfig},
    catalog::site_catalog,
    store::PositionStore,
};
use folio_hal_host::{
    notify::ConsoleNotifier, render::text::TextRenderer, storage::json_store::JsonFileStore,
};
use log::{info, warn};

use session::{load_script, run_session};
use settings::HostSettings;

#[path = "main/demo_script.rs"]
mod demo_script;
#[path = "main/session.rs"]
mod session;
#[path = "main/settings.rs"]
mod settings;

const TEXT_COLUMNS: usize = 78;
const BODY_PREVIEW_CHARS: usize = 360;
const IDLE_POLL_MS: u64 = 250;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = HostSettings::from_env();
    info!(
        "boot: folio starting store_dir={} viewport_width={} session_ms={}",
        settings.store_dir.display(),
        settings.viewport_width,
        settings.session_ms
    );

    let store = JsonFileStore::open(&settings.store_dir).unwrap_or_else(|err| {
        warn!(
            "boot: store dir unavailable err={:?}; positions will not persist",
            err
        );
        JsonFileStore::new(&settings.store_dir)
    });
    let script = load_script(settings.script_path.as_deref());
    let catalog = site_catalog();
    let positions = PositionStore::load_for(store, &catalog);

    let mut app = SiteApp::new(
        catalog,
        positions,
        ConsoleNotifier::stdout(),
        script,
        PageSurface::home(),
        SiteConfig::default(),
    );
    let mut renderer =
        TextRenderer::new(TEXT_COLUMNS).with_body_preview_chars(BODY_PREVIEW_CHARS);

    let started = Instant::now();
    app.mount(0, settings.viewport_width);

    let outcome = select(
        run_session(&mut app, &mut renderer, started),
        Timer::after_millis(settings.session_ms),
    )
    .await;
    match outcome {
        Either::First(frames) => info!("session: script finished frames={}", frames),
        Either::Second(()) => info!("session: deadline reached after {}ms", settings.session_ms),
    }

    app.unmount();
    info!(
        "session: done saved_positions={}",
        app.positions().positions().len()
    );

    // The std executor never returns on its own.
    std::process::exit(0);
}
