use super::*;
use crate::{
    catalog::{CatalogError, PostRecord, StaticCatalog, site_catalog},
    input::{EventQueue, Key, ModalClick},
    notify::NotificationKind,
    reader::{ModalControl, RESTARTED_MESSAGE, RESUMED_MESSAGE},
    store::{MemoryBackend, POSITIONS_KEY, PositionMap},
};

use std::vec::Vec as StdVec;

#[derive(Default)]
struct RecordingNotifier {
    messages: StdVec<(String, NotificationKind)>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str, kind: NotificationKind) {
        self.messages.push((message.to_string(), kind));
    }
}

type TestApp = SiteApp<StaticCatalog<'static>, MemoryBackend, RecordingNotifier, EventQueue<16>>;

fn make_app(surface: PageSurface, backend: MemoryBackend) -> TestApp {
    make_app_with(site_catalog(), surface, backend)
}

fn make_app_with<C, B>(
    catalog: C,
    surface: PageSurface,
    backend: B,
) -> SiteApp<C, B, RecordingNotifier, EventQueue<16>>
where
    C: PostCatalog,
    B: PositionBackend,
{
    let positions = PositionStore::load_for(backend, &catalog);
    SiteApp::new(
        catalog,
        positions,
        RecordingNotifier::default(),
        EventQueue::new(),
        surface,
        SiteConfig::default(),
    )
}

/// Storage that is unavailable for both reads and writes.
#[derive(Debug, Default)]
struct UnavailableBackend {
    save_attempts: usize,
}

impl PositionBackend for UnavailableBackend {
    type Error = ();

    fn load(
        &mut self,
        _key: &str,
        _preferred: &dyn Fn(&str) -> bool,
    ) -> Result<Option<PositionMap>, Self::Error> {
        Err(())
    }

    fn save(&mut self, _key: &str, _positions: &PositionMap) -> Result<(), Self::Error> {
        self.save_attempts += 1;
        Err(())
    }
}

/// Site posts whose bodies come from a separate table, as a CMS would serve them.
struct ServedBodies;

impl PostCatalog for ServedBodies {
    fn post_count(&self) -> u16 {
        site_catalog().post_count()
    }

    fn post_at(&self, index: u16) -> Option<&PostRecord> {
        site_catalog().iter().nth(index as usize)
    }

    fn body_of(&self, id: &str) -> Result<&str, CatalogError> {
        match id {
            "bias-ai-module" => Ok("<p>Served body.</p>"),
            _ => Err(CatalogError::NotFound),
        }
    }
}

fn push(app: &mut TestApp, event: InputEvent) {
    push_to(app, event);
}

fn push_to<C, B>(app: &mut SiteApp<C, B, RecordingNotifier, EventQueue<16>>, event: InputEvent)
where
    C: PostCatalog,
    B: PositionBackend,
{
    app.input_mut().push(event).unwrap();
}

fn saved(app: &TestApp, id: &str) -> Option<u32> {
    app.positions()
        .backend()
        .get(POSITIONS_KEY)
        .and_then(|positions| positions.get(id))
}

#[test]
fn unmounted_app_does_not_render_or_drain_input() {
    let mut app = make_app(PageSurface::home(), MemoryBackend::new());
    push(&mut app, InputEvent::NextClicked);

    assert_eq!(app.tick(0), TickResult::NoRender);
    assert_eq!(app.input_mut().len(), 1);
    assert_eq!(app.next_deadline_ms(), None);
}

#[test]
fn home_page_renders_first_carousel_page() {
    let mut app = make_app(PageSurface::home(), MemoryBackend::new());
    app.mount(0, 1280);
    assert_eq!(app.tick(0), TickResult::RenderRequested);
    assert_eq!(app.tick(1), TickResult::NoRender);

    app.with_screen(|screen| {
        let carousel = screen.carousel.unwrap();
        assert_eq!(carousel.cards.len(), 6);
        assert_eq!(carousel.items_per_page, 3);
        assert_eq!(carousel.page_count, 2);
        assert_eq!((carousel.visible_start, carousel.visible_end), (0, 3));
        assert_eq!(carousel.prev, Some(ControlView::Disabled));
        assert_eq!(carousel.next, Some(ControlView::Enabled));
        assert_eq!(
            carousel.indicators,
            Some(IndicatorsView {
                count: 2,
                active: 0
            })
        );

        let first = carousel.cards[0];
        assert_eq!(first.id, "bias-ai-module");
        assert_eq!(first.status_label, "Featured");
        assert!(first.featured);
        assert_eq!(first.date_label, "February 15, 2024");
        assert!(!first.teaser.is_empty());
        assert!(screen.modal.is_none());
        assert!(!screen.page_scroll_locked);
    });
}

#[test]
fn next_control_moves_track_and_updates_controls() {
    let mut app = make_app(PageSurface::home(), MemoryBackend::new());
    app.mount(0, 1280);
    app.tick(0);

    push(&mut app, InputEvent::NextClicked);
    assert_eq!(app.tick(100), TickResult::RenderRequested);

    app.with_screen(|screen| {
        let carousel = screen.carousel.unwrap();
        assert_eq!(carousel.current_page, 1);
        assert_eq!(carousel.track_offset_px, 3 * 352);
        assert_eq!(carousel.prev, Some(ControlView::Enabled));
        assert_eq!(carousel.next, Some(ControlView::Disabled));
    });

    // Already on the last page.
    push(&mut app, InputEvent::NextClicked);
    assert_eq!(app.tick(200), TickResult::NoRender);
}

#[test]
fn auto_advance_wraps_and_hover_pauses() {
    let mut app = make_app(PageSurface::home(), MemoryBackend::new());
    app.mount(0, 1280);
    app.tick(0);
    assert_eq!(app.next_deadline_ms(), Some(5_000));

    assert_eq!(app.tick(5_000), TickResult::RenderRequested);
    assert_eq!(app.carousel().unwrap().current_page(), 1);
    assert_eq!(app.tick(10_000), TickResult::RenderRequested);
    assert_eq!(app.carousel().unwrap().current_page(), 0);

    push(&mut app, InputEvent::PointerEnter);
    app.tick(11_000);
    assert_eq!(app.next_deadline_ms(), None);
    assert_eq!(app.tick(20_000), TickResult::NoRender);
    assert_eq!(app.carousel().unwrap().current_page(), 0);

    push(&mut app, InputEvent::PointerLeave);
    app.tick(21_000);
    assert_eq!(app.next_deadline_ms(), Some(26_000));
}

#[test]
fn resize_clamps_current_page() {
    let mut app = make_app(PageSurface::home(), MemoryBackend::new());
    app.mount(0, 500);
    push(&mut app, InputEvent::IndicatorClicked { page: 5 });
    app.tick(0);
    assert_eq!(app.carousel().unwrap().current_page(), 5);

    push(&mut app, InputEvent::Resize { width: 1280 });
    assert_eq!(app.tick(10), TickResult::RenderRequested);
    let carousel = app.carousel().unwrap();
    assert_eq!(carousel.items_per_page(), 3);
    assert_eq!(carousel.current_page(), 1);
}

#[test]
fn missing_controls_are_not_rendered_and_ignore_clicks() {
    let surface = PageSurface::home()
        .with_controls(false, true)
        .with_indicators(false);
    let mut app = make_app(surface, MemoryBackend::new());
    app.mount(0, 1280);
    push(&mut app, InputEvent::NextClicked);
    push(&mut app, InputEvent::PrevClicked);
    push(&mut app, InputEvent::IndicatorClicked { page: 0 });
    app.tick(0);

    assert_eq!(app.carousel().unwrap().current_page(), 1);
    app.with_screen(|screen| {
        let carousel = screen.carousel.unwrap();
        assert_eq!(carousel.prev, None);
        assert_eq!(carousel.next, Some(ControlView::Disabled));
        assert_eq!(carousel.indicators, None);
    });
}

#[test]
fn page_without_blog_elements_is_inert() {
    let mut app = make_app(PageSurface::bare(), MemoryBackend::new());
    app.mount(0, 1280);
    push(&mut app, InputEvent::NextClicked);
    push(&mut app, InputEvent::ReadClicked { index: 0 });
    push(&mut app, InputEvent::KeyDown(Key::Escape));
    app.tick(0);

    assert!(app.carousel().is_none());
    assert!(app.reader().is_none());
    assert!(!app.open_post("bias-ai-module", 0));
    app.with_screen(|screen| {
        assert!(screen.carousel.is_none());
        assert!(screen.modal.is_none());
    });
}

#[test]
fn modal_without_content_element_is_not_mounted() {
    let surface = PageSurface::home().with_modal(true, false);
    let mut app = make_app(surface, MemoryBackend::new());
    app.mount(0, 1280);
    push(&mut app, InputEvent::ReadClicked { index: 0 });
    app.tick(0);

    assert!(app.reader().is_none());
    assert!(app.carousel().is_some());
}

#[test]
fn read_trigger_opens_modal_and_locks_page_scroll() {
    let mut app = make_app(PageSurface::home(), MemoryBackend::new());
    app.mount(0, 1280);
    push(&mut app, InputEvent::ReadClicked { index: 2 });
    assert_eq!(app.tick(0), TickResult::RenderRequested);

    assert!(app.page_scroll_locked());
    app.with_screen(|screen| {
        let modal = screen.modal.unwrap();
        assert_eq!(modal.post_id, "scikit-learn-module");
        assert!(modal.found);
        assert_eq!(modal.date_label, Some("July 1, 2024"));
        assert_eq!(modal.scroll_offset, 0);
        assert!(!modal.restart_visible);
        assert_eq!(modal.focus, ModalControl::Close);
        assert!(screen.page_scroll_locked);
    });

    push(&mut app, InputEvent::KeyDown(Key::Escape));
    app.tick(10);
    assert!(!app.page_scroll_locked());
    assert_eq!(saved(&app, "scikit-learn-module"), Some(0));
}

#[test]
fn scroll_close_reopen_restores_offset_and_notifies() {
    let mut app = make_app(PageSurface::home(), MemoryBackend::new());
    app.mount(0, 1280);
    push(&mut app, InputEvent::ReadClicked { index: 0 });
    push(&mut app, InputEvent::ModalScroll { offset: 480 });
    app.tick(0);
    assert_eq!(saved(&app, "bias-ai-module"), Some(480));

    push(&mut app, InputEvent::ModalClick(ModalClick::Backdrop));
    app.tick(50);
    assert!(!app.reader().unwrap().is_open());

    push(&mut app, InputEvent::ReadClicked { index: 0 });
    app.tick(100);
    assert_eq!(app.next_deadline_ms(), Some(110));
    app.with_screen(|screen| {
        let modal = screen.modal.unwrap();
        assert_eq!(modal.scroll_offset, 0);
        assert!(modal.restart_visible);
    });

    assert_eq!(app.tick(110), TickResult::RenderRequested);
    app.with_screen(|screen| assert_eq!(screen.modal.unwrap().scroll_offset, 480));
    assert_eq!(
        app.notifier().messages,
        [(RESUMED_MESSAGE.to_string(), NotificationKind::Info)]
    );
}

#[test]
fn restart_through_keyboard_clears_offset() {
    let mut positions = PositionMap::new();
    positions.set("automl-module", 900).unwrap();
    let backend = MemoryBackend::with_positions(POSITIONS_KEY, positions).unwrap();
    let mut app = make_app(PageSurface::home(), backend);
    app.mount(0, 1280);

    push(&mut app, InputEvent::ReadClicked { index: 1 });
    app.tick(0);
    app.tick(10);
    push(&mut app, InputEvent::KeyDown(Key::Tab));
    app.tick(20);
    app.with_screen(|screen| assert_eq!(screen.modal.unwrap().focus, ModalControl::Restart));

    push(&mut app, InputEvent::KeyDown(Key::Enter));
    app.tick(30);
    assert_eq!(saved(&app, "automl-module"), Some(0));
    app.with_screen(|screen| {
        let modal = screen.modal.unwrap();
        assert_eq!(modal.scroll_offset, 0);
        assert!(!modal.restart_visible);
    });
    assert_eq!(
        app.notifier().messages.last().map(|(message, _)| message.as_str()),
        Some(RESTARTED_MESSAGE)
    );
}

#[test]
fn unknown_post_shows_fallback() {
    let mut app = make_app(PageSurface::home(), MemoryBackend::new());
    app.mount(0, 1280);
    assert!(app.open_post("missing-id", 0));

    app.with_screen(|screen| {
        let modal = screen.modal.unwrap();
        assert!(!modal.found);
        assert_eq!(modal.title, FALLBACK_TITLE);
        assert_eq!(modal.body_html, FALLBACK_BODY);
        assert_eq!(modal.author, None);
        assert_eq!(modal.date_label, None);
    });
}

#[test]
fn read_trigger_past_catalog_end_is_ignored() {
    let mut app = make_app(PageSurface::home(), MemoryBackend::new());
    app.mount(0, 1280);
    app.tick(0);
    push(&mut app, InputEvent::ReadClicked { index: 40 });
    assert_eq!(app.tick(1), TickResult::NoRender);
    assert!(!app.page_scroll_locked());
}

#[test]
fn unmount_persists_open_post_and_stops_timer() {
    let mut app = make_app(PageSurface::home(), MemoryBackend::new());
    app.mount(0, 1280);
    push(&mut app, InputEvent::ReadClicked { index: 4 });
    push(&mut app, InputEvent::ModalScroll { offset: 75 });
    app.tick(0);

    app.unmount();
    assert!(!app.is_mounted());
    assert!(!app.page_scroll_locked());
    assert_eq!(app.carousel().unwrap().timer(), AutoAdvance::Unmounted);
    assert_eq!(app.tick(50_000), TickResult::NoRender);

    let backend = app.into_backend();
    assert_eq!(
        backend.get(POSITIONS_KEY).and_then(|map| map.get("ai-healthcare-module")),
        Some(75)
    );
}

#[test]
fn unavailable_storage_never_blocks_the_reader() {
    let mut app = make_app_with(
        site_catalog(),
        PageSurface::home(),
        UnavailableBackend::default(),
    );
    app.mount(0, 1280);

    push_to(&mut app, InputEvent::ReadClicked { index: 0 });
    assert_eq!(app.tick(0), TickResult::RenderRequested);
    assert!(app.page_scroll_locked());
    app.with_screen(|screen| {
        let modal = screen.modal.unwrap();
        assert_eq!(modal.scroll_offset, 0);
        assert!(!modal.restart_visible);
        assert!(screen.page_scroll_locked);
    });

    push_to(&mut app, InputEvent::ModalScroll { offset: 320 });
    push_to(&mut app, InputEvent::KeyDown(Key::Escape));
    app.tick(20);
    assert!(!app.page_scroll_locked());
    assert!(app.positions().backend().save_attempts >= 2);

    push_to(&mut app, InputEvent::ReadClicked { index: 0 });
    app.tick(40);
    assert!(app.page_scroll_locked());
    app.tick(50);
    app.with_screen(|screen| assert!(screen.modal.is_some()));

    push_to(&mut app, InputEvent::ModalClick(ModalClick::Backdrop));
    app.tick(60);
    assert!(!app.page_scroll_locked());
    app.with_screen(|screen| {
        assert!(screen.modal.is_none());
        assert!(!screen.page_scroll_locked);
    });
}

#[test]
fn modal_body_comes_from_catalog_lookup() {
    let mut app = make_app_with(ServedBodies, PageSurface::home(), MemoryBackend::new());
    app.mount(0, 1280);

    assert!(app.open_post("bias-ai-module", 0));
    app.with_screen(|screen| {
        let modal = screen.modal.unwrap();
        assert!(modal.found);
        assert_eq!(modal.body_html, "<p>Served body.</p>");
    });

    assert!(app.open_post("automl-module", 10));
    app.with_screen(|screen| {
        let modal = screen.modal.unwrap();
        assert_eq!(modal.post_id, "automl-module");
        assert!(!modal.found);
        assert_eq!(modal.title, FALLBACK_TITLE);
        assert_eq!(modal.body_html, FALLBACK_BODY);
    });
}
