//! Article reader modal with persisted reading positions.
//!
//! The modal is either closed or showing one post. Scroll offsets are written
//! through to the [`PositionStore`] on every scroll event and again on close.
//! Reopening a post with a saved offset restores it once the body has settled
//! and offers a restart control.

use log::{debug, warn};

use crate::{
    catalog::{CatalogError, PostCatalog},
    input::{Key, ModalClick},
    notify::{NotificationKind, Notifier},
    store::{POST_ID_BYTES, PositionBackend, PositionStore, PostId, post_id},
};

pub const RESUMED_MESSAGE: &str = "Resumed from where you left off";
pub const RESTARTED_MESSAGE: &str = "Started from beginning";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReaderConfig {
    /// Delay between opening and applying a restored offset.
    pub restore_delay_ms: u64,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            restore_delay_ms: 10,
        }
    }
}

impl ReaderConfig {
    pub const fn with_restore_delay_ms(mut self, restore_delay_ms: u64) -> Self {
        self.restore_delay_ms = restore_delay_ms;
        self
    }
}

/// Focusable controls inside the open modal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ModalControl {
    Close,
    Restart,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct PendingRestore {
    offset: u32,
    due_ms: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OpenPost {
    /// Store key. For ids that do not fit, the longest prefix that does.
    id: PostId,
    /// Catalog id, which outlives the modal and is never truncated.
    catalog_id: Option<&'static str>,
    /// Catalog index; `None` renders the fallback view.
    index: Option<u16>,
    /// Ids that do not fit a [`PostId`] are shown but never persisted.
    tracked: bool,
    scroll_offset: u32,
    pending_restore: Option<PendingRestore>,
    restart_visible: bool,
    focus: ModalControl,
}

impl OpenPost {
    /// Id the modal was opened with. Unknown ids over [`POST_ID_BYTES`]
    /// come back truncated.
    pub fn id(&self) -> &str {
        self.catalog_id.unwrap_or(self.id.as_str())
    }

    pub fn index(&self) -> Option<u16> {
        self.index
    }

    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    pub fn restart_visible(&self) -> bool {
        self.restart_visible
    }

    pub fn focus(&self) -> ModalControl {
        self.focus
    }

    pub fn restore_pending(&self) -> bool {
        self.pending_restore.is_some()
    }

    /// Offset the reader is logically at, including a not-yet-applied restore.
    fn effective_offset(&self) -> u32 {
        self.pending_restore
            .map(|restore| restore.offset)
            .unwrap_or(self.scroll_offset)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ModalState {
    Closed,
    Open(OpenPost),
}

#[derive(Clone, Debug)]
pub struct ReaderModal {
    config: ReaderConfig,
    state: ModalState,
}

impl ReaderModal {
    pub fn new(config: ReaderConfig) -> Self {
        Self {
            config,
            state: ModalState::Closed,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    pub fn open_post(&self) -> Option<&OpenPost> {
        match &self.state {
            ModalState::Open(post) => Some(post),
            ModalState::Closed => None,
        }
    }

    pub fn restore_due_ms(&self) -> Option<u64> {
        self.open_post()
            .and_then(|post| post.pending_restore)
            .map(|restore| restore.due_ms)
    }

    /// Show `id`. Unknown ids still open, with the fallback view.
    ///
    /// Opening over an already open post persists that post first, so the
    /// modal never holds two bindings at once.
    pub fn open<C, B>(
        &mut self,
        id: &str,
        catalog: &C,
        positions: &mut PositionStore<B>,
        now_ms: u64,
    ) -> bool
    where
        C: PostCatalog,
        B: PositionBackend,
    {
        if self.is_open() {
            self.close(positions);
        }

        let (key, tracked) = match post_id(id) {
            Ok(key) => (key, true),
            Err(_) => {
                warn!("reader: id too long to track len={}", id.len());
                (truncated_id(id), false)
            }
        };

        let (index, catalog_id) = match catalog.body_of(id) {
            Ok(_) => {
                let index = catalog.index_of(id);
                (index, index.and_then(|i| catalog.post_at(i)).map(|post| post.id))
            }
            Err(CatalogError::NotFound) => {
                warn!("reader: unknown post id={}; showing fallback", id);
                (None, None)
            }
        };

        let saved = if tracked { positions.offset_of(id) } else { 0 };
        let pending_restore = (saved > 0).then(|| PendingRestore {
            offset: saved,
            due_ms: now_ms.saturating_add(self.config.restore_delay_ms),
        });

        debug!(
            "reader: open id={} found={} saved_offset={}",
            id,
            index.is_some(),
            saved
        );

        self.state = ModalState::Open(OpenPost {
            id: key,
            catalog_id,
            index,
            tracked,
            scroll_offset: 0,
            pending_restore,
            restart_visible: saved > 0,
            focus: ModalControl::Close,
        });
        true
    }

    /// Apply a scheduled restore once the body has settled.
    pub fn tick<N: Notifier>(&mut self, now_ms: u64, notifier: &mut N) -> bool {
        let ModalState::Open(post) = &mut self.state else {
            return false;
        };
        let Some(restore) = post.pending_restore else {
            return false;
        };
        if now_ms < restore.due_ms {
            return false;
        }

        post.pending_restore = None;
        post.scroll_offset = restore.offset;
        debug!("reader: restored id={} offset={}", post.id, restore.offset);
        notifier.notify(RESUMED_MESSAGE, NotificationKind::Info);
        true
    }

    /// Scroll event from the modal body. Written through immediately.
    pub fn scroll<B: PositionBackend>(
        &mut self,
        offset: u32,
        positions: &mut PositionStore<B>,
    ) -> bool {
        let ModalState::Open(post) = &mut self.state else {
            return false;
        };

        if post.pending_restore.take().is_some() {
            debug!("reader: restore superseded by scroll id={}", post.id);
        }
        post.scroll_offset = offset;
        if post.tracked {
            positions.record(post.id.as_str(), offset);
        }
        true
    }

    /// Jump back to the top and forget the saved offset.
    pub fn restart<B, N>(&mut self, positions: &mut PositionStore<B>, notifier: &mut N) -> bool
    where
        B: PositionBackend,
        N: Notifier,
    {
        let ModalState::Open(post) = &mut self.state else {
            return false;
        };
        if !post.restart_visible {
            return false;
        }

        post.pending_restore = None;
        post.scroll_offset = 0;
        post.restart_visible = false;
        post.focus = ModalControl::Close;
        if post.tracked {
            positions.record(post.id.as_str(), 0);
        }
        debug!("reader: restart id={}", post.id);
        notifier.notify(RESTARTED_MESSAGE, NotificationKind::Info);
        true
    }

    pub fn close<B: PositionBackend>(&mut self, positions: &mut PositionStore<B>) -> bool {
        let ModalState::Open(post) = &self.state else {
            return false;
        };

        let offset = post.effective_offset();
        if post.tracked {
            positions.record(post.id.as_str(), offset);
        }
        debug!("reader: close id={} offset={}", post.id, offset);
        self.state = ModalState::Closed;
        true
    }

    /// Keyboard handling. Keys are ignored while closed.
    pub fn handle_key<B, N>(
        &mut self,
        key: Key,
        positions: &mut PositionStore<B>,
        notifier: &mut N,
    ) -> bool
    where
        B: PositionBackend,
        N: Notifier,
    {
        let (focus, restart_visible) = match &self.state {
            ModalState::Open(post) => (post.focus, post.restart_visible),
            ModalState::Closed => return false,
        };

        match key {
            Key::Escape => self.close(positions),
            Key::Tab | Key::ShiftTab => {
                // Both directions land on the other control when two exist.
                if !restart_visible {
                    return false;
                }
                if let ModalState::Open(post) = &mut self.state {
                    post.focus = match focus {
                        ModalControl::Close => ModalControl::Restart,
                        ModalControl::Restart => ModalControl::Close,
                    };
                }
                true
            }
            Key::Enter => match focus {
                ModalControl::Close => self.close(positions),
                ModalControl::Restart => self.restart(positions, notifier),
            },
        }
    }

    pub fn handle_click<B, N>(
        &mut self,
        click: ModalClick,
        positions: &mut PositionStore<B>,
        notifier: &mut N,
    ) -> bool
    where
        B: PositionBackend,
        N: Notifier,
    {
        match click {
            ModalClick::Backdrop | ModalClick::CloseButton => self.close(positions),
            ModalClick::RestartButton => self.restart(positions, notifier),
            ModalClick::Content => false,
        }
    }
}

fn truncated_id(id: &str) -> PostId {
    let mut end = POST_ID_BYTES.min(id.len());
    while !id.is_char_boundary(end) {
        end -= 1;
    }
    let mut out = PostId::new();
    // Fits by construction.
    let _ = out.push_str(&id[..end]);
    out
}
