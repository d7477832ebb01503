use std::{fs, path::Path};

use embassy_time::{Instant, Timer};
use folio_core::{
    app::{SiteApp, TickResult},
    catalog::PostCatalog,
    notify::Notifier,
    store::PositionBackend,
};
use folio_hal_host::{
    input::script::ScriptedInput,
    render::{FrameRenderer, TextFrame},
};
use log::{error, info, warn};

use super::{IDLE_POLL_MS, demo_script::DEMO_SCRIPT};

/// Script from `path`, or the demo script when unset or unusable.
pub(super) fn load_script(path: Option<&Path>) -> ScriptedInput {
    let Some(path) = path else {
        info!("script: using built-in demo");
        return demo_script();
    };

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            warn!("script: cannot read {} err={}; using demo", path.display(), err);
            return demo_script();
        }
    };

    match ScriptedInput::parse(&text) {
        Ok(script) => {
            info!(
                "script: loaded {} events={}",
                path.display(),
                script.remaining()
            );
            script
        }
        Err(err) => {
            error!("script: {} in {}; using demo", err, path.display());
            demo_script()
        }
    }
}

fn demo_script() -> ScriptedInput {
    ScriptedInput::parse(DEMO_SCRIPT).unwrap_or_default()
}

/// Drive the app until the script is spent and the reader is closed.
/// Returns the number of frames drawn.
pub(super) async fn run_session<C, B, N, R>(
    app: &mut SiteApp<C, B, N, ScriptedInput>,
    renderer: &mut R,
    started: Instant,
) -> u32
where
    C: PostCatalog,
    B: PositionBackend,
    N: Notifier,
    R: FrameRenderer,
{
    let mut frame = TextFrame::new();
    let mut frames = 0u32;

    loop {
        let now_ms = started.elapsed().as_millis();
        app.input_mut().advance_to(now_ms);

        if app.tick(now_ms) == TickResult::RenderRequested {
            app.with_screen(|screen| renderer.render(screen, &mut frame));
            frames = frames.saturating_add(1);
            println!("--- frame {} @ {}ms ---", frames, now_ms);
            print!("{}", frame);
        }

        if app.input().is_exhausted() && !app.page_scroll_locked() {
            return frames;
        }

        let idle_ms = now_ms.saturating_add(IDLE_POLL_MS);
        let wake_ms = [app.input().next_at_ms(), app.next_deadline_ms()]
            .into_iter()
            .flatten()
            .fold(idle_ms, u64::min);
        Timer::after_millis(wake_ms.saturating_sub(now_ms).max(1)).await;
    }
}
