//! Progression slider: one active image/content pair out of N, advanced by
//! arrows and indicator dots, with staggered enter/cleanup windows driven
//! from the session tick.

use std::time::Duration;

use tracing::debug;

use crate::constants::{
    CONTENT_CLEANUP_DELAY, CONTENT_ENTER_DELAY, IMAGE_CLEANUP_DELAY, IMAGE_ENTER_DELAY,
};
use crate::surface::{Arrow, Direction, Item, RequestSource, ViewSurface};

/// Delay windows of the two panel chains. The defaults mirror the page
/// styling; tests shrink them to step through phase boundaries.
#[derive(Debug, Clone, Copy)]
pub struct Timings {
    pub image_enter: Duration,
    pub image_cleanup: Duration,
    pub content_enter: Duration,
    pub content_cleanup: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            image_enter: IMAGE_ENTER_DELAY,
            image_cleanup: IMAGE_CLEANUP_DELAY,
            content_enter: CONTENT_ENTER_DELAY,
            content_cleanup: CONTENT_CLEANUP_DELAY,
        }
    }
}

/// Position state of the slider: how many slide pairs exist, which one is
/// active, and whether a transition currently holds the request lock.
#[derive(Debug, Clone)]
pub struct SlideSet {
    len: usize,
    active: usize,
    locked: bool,
}

impl SlideSet {
    fn new(len: usize) -> Self {
        Self {
            len,
            active: 0,
            locked: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelKind {
    Image,
    Content,
}

impl PanelKind {
    fn item(self, index: usize) -> Item {
        match self {
            PanelKind::Image => Item::Image(index),
            PanelKind::Content => Item::Content(index),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Enter { remaining: Duration },
    Cleanup { remaining: Duration },
}

/// One panel's pending work for a committed transition: activate the
/// incoming panel after the enter window, then clear exit styling from the
/// outgoing one after the cleanup window. Chains keep running after the
/// request lock clears, so a committed cleanup always fires.
#[derive(Debug)]
struct PanelChain {
    kind: PanelKind,
    from: usize,
    to: usize,
    phase: Phase,
    cleanup_window: Duration,
    releases_lock: bool,
}

impl PanelChain {
    fn new(
        kind: PanelKind,
        from: usize,
        to: usize,
        enter_window: Duration,
        cleanup_window: Duration,
        releases_lock: bool,
    ) -> Self {
        Self {
            kind,
            from,
            to,
            phase: Phase::Enter {
                remaining: enter_window,
            },
            cleanup_window,
            releases_lock,
        }
    }

    /// Advances the chain by `dt`, firing any phase boundaries that fall
    /// inside it. Leftover time carries into the next phase, so a single
    /// oversized tick still replays enter before cleanup. Returns true once
    /// the cleanup has fired.
    fn tick<S: ViewSurface>(&mut self, dt: Duration, surface: &mut S) -> bool {
        let mut dt = dt;
        loop {
            match &mut self.phase {
                Phase::Enter { remaining } => {
                    if dt < *remaining {
                        *remaining -= dt;
                        return false;
                    }
                    dt -= *remaining;
                    debug!(kind = ?self.kind, slide = self.to, "enter phase fired");
                    surface.mark_entering(self.kind.item(self.to));
                    surface.set_active(self.kind.item(self.to), true);
                    self.phase = Phase::Cleanup {
                        remaining: self.cleanup_window,
                    };
                }
                Phase::Cleanup { remaining } => {
                    if dt < *remaining {
                        *remaining -= dt;
                        return false;
                    }
                    debug!(kind = ?self.kind, slide = self.from, "cleanup phase fired");
                    surface.clear_transient(self.kind.item(self.from));
                    return true;
                }
            }
        }
    }
}

/// State machine behind the progression slider. Clicks turn into a single
/// commit that restyles the page and schedules the two panel chains; the
/// session loop then ticks pending chains until they drain.
#[derive(Debug)]
pub struct SlideController {
    set: SlideSet,
    timings: Timings,
    chains: Vec<PanelChain>,
}

impl SlideController {
    pub fn new(len: usize) -> Self {
        Self::with_timings(len, Timings::default())
    }

    pub fn with_timings(len: usize, timings: Timings) -> Self {
        Self {
            set: SlideSet::new(len),
            timings,
            chains: Vec::new(),
        }
    }

    /// Paints the initial state: first slide pair and its dot active, prev
    /// arrow disabled, next arrow enabled only when there is somewhere to
    /// go. An empty set issues nothing.
    pub fn initialize<S: ViewSurface>(&mut self, surface: &mut S) {
        if self.set.is_empty() {
            return;
        }
        surface.set_active(Item::Image(self.set.active), true);
        surface.set_active(Item::Content(self.set.active), true);
        surface.set_active(Item::Dot(self.set.active), true);
        self.sync_arrows(surface);
    }

    pub fn on_previous_clicked<S: ViewSurface>(&mut self, surface: &mut S) {
        if self.set.active == 0 {
            return;
        }
        self.request_go_to(
            self.set.active - 1,
            RequestSource::Arrow(Arrow::Prev),
            surface,
        );
    }

    pub fn on_next_clicked<S: ViewSurface>(&mut self, surface: &mut S) {
        if self.set.active + 1 >= self.set.len {
            return;
        }
        self.request_go_to(
            self.set.active + 1,
            RequestSource::Arrow(Arrow::Next),
            surface,
        );
    }

    pub fn on_indicator_clicked<S: ViewSurface>(&mut self, index: usize, surface: &mut S) {
        self.request_go_to(index, RequestSource::Dot, surface);
    }

    /// Commits a transition to `target`, or ignores the request when one is
    /// already running, the target is out of range, or it is the active
    /// slide. The commit restyles panels, dots and arrows in one burst and
    /// schedules the delayed enter/cleanup work.
    pub fn request_go_to<S: ViewSurface>(
        &mut self,
        target: usize,
        source: RequestSource,
        surface: &mut S,
    ) {
        if self.set.locked || target >= self.set.len || target == self.set.active {
            debug!(
                to = target,
                from = self.set.active,
                locked = self.set.locked,
                ?source,
                "slide request ignored"
            );
            return;
        }
        let from = self.set.active;
        let direction = if target > from {
            Direction::Forward
        } else {
            Direction::Backward
        };

        surface.mark_exiting(Item::Image(from), direction);
        surface.set_active(Item::Image(from), false);
        self.chains.push(PanelChain::new(
            PanelKind::Image,
            from,
            target,
            self.timings.image_enter,
            self.timings.image_cleanup,
            false,
        ));

        surface.mark_exiting(Item::Content(from), direction);
        surface.set_active(Item::Content(from), false);
        self.chains.push(PanelChain::new(
            PanelKind::Content,
            from,
            target,
            self.timings.content_enter,
            self.timings.content_cleanup,
            true,
        ));

        for k in 0..self.set.len {
            surface.set_active(Item::Dot(k), k == target);
        }

        self.set.active = target;
        self.set.locked = true;
        self.sync_arrows(surface);

        debug!(from, to = target, ?direction, ?source, "slide transition committed");
    }

    /// Advances every pending chain. The lock clears when the content chain
    /// finishes its cleanup; the image chain may still be pending then and
    /// keeps ticking until its own cleanup fires.
    pub fn tick<S: ViewSurface>(&mut self, dt: Duration, surface: &mut S) {
        let mut released = false;
        self.chains.retain_mut(|chain| {
            let done = chain.tick(dt, surface);
            if done && chain.releases_lock {
                released = true;
            }
            !done
        });
        if released {
            self.set.locked = false;
            debug!(slide = self.set.active, "transition lock released");
        }
    }

    fn sync_arrows<S: ViewSurface>(&self, surface: &mut S) {
        surface.set_arrow_enabled(Arrow::Prev, self.set.active > 0);
        surface.set_arrow_enabled(Arrow::Next, self.set.active + 1 < self.set.len);
    }

    pub fn set(&self) -> &SlideSet {
        &self.set
    }

    pub fn active_index(&self) -> usize {
        self.set.active
    }

    pub fn len(&self) -> usize {
        self.set.len
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// True while a transition holds the request lock.
    pub fn is_transitioning(&self) -> bool {
        self.set.locked
    }

    /// True when the lock is clear and no delayed work is pending.
    pub fn is_settled(&self) -> bool {
        !self.set.locked && self.chains.is_empty()
    }
}
