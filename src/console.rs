//! In-memory surface that tracks the styling state of every panel and can
//! print it as a one-line snapshot. The demo binary renders through it and
//! the integration tests assert against it.

use tracing::trace;

use crate::page::Markup;
use crate::surface::{Arrow, Direction, Item, ViewSurface};

/// Styling state of one panel, dot or feature image.
#[derive(Debug, Clone, Default)]
pub struct PanelView {
    pub label: String,
    pub active: bool,
    pub exiting: Option<Direction>,
}

impl PanelView {
    fn labelled(label: &str) -> Self {
        Self {
            label: label.to_owned(),
            ..Self::default()
        }
    }
}

/// Holds one [`PanelView`] per addressable item of the page. Commands for
/// items the markup never declared are dropped, mirroring a style change
/// aimed at an element that is not there.
#[derive(Debug)]
pub struct ConsoleSurface {
    images: Vec<PanelView>,
    contents: Vec<PanelView>,
    dots: Vec<PanelView>,
    features: Vec<Vec<PanelView>>,
    prev_enabled: bool,
    next_enabled: bool,
    changed: bool,
}

impl ConsoleSurface {
    pub fn new(markup: &Markup) -> Self {
        Self {
            images: markup
                .slide_images
                .iter()
                .map(|label| PanelView::labelled(label))
                .collect(),
            contents: markup
                .slide_contents
                .iter()
                .map(|label| PanelView::labelled(label))
                .collect(),
            dots: vec![PanelView::default(); markup.slide_images.len()],
            features: markup
                .feature_regions
                .iter()
                .map(|images| images.iter().map(|label| PanelView::labelled(label)).collect())
                .collect(),
            prev_enabled: false,
            next_enabled: false,
            changed: false,
        }
    }

    pub fn view(&self, item: Item) -> Option<&PanelView> {
        match item {
            Item::Image(k) => self.images.get(k),
            Item::Content(k) => self.contents.get(k),
            Item::Dot(k) => self.dots.get(k),
            Item::Feature { region, index } => {
                self.features.get(region).and_then(|views| views.get(index))
            }
        }
    }

    fn view_mut(&mut self, item: Item) -> Option<&mut PanelView> {
        match item {
            Item::Image(k) => self.images.get_mut(k),
            Item::Content(k) => self.contents.get_mut(k),
            Item::Dot(k) => self.dots.get_mut(k),
            Item::Feature { region, index } => self
                .features
                .get_mut(region)
                .and_then(|views| views.get_mut(index)),
        }
    }

    fn active_indices(views: &[PanelView]) -> Vec<usize> {
        views
            .iter()
            .enumerate()
            .filter(|(_, view)| view.active)
            .map(|(k, _)| k)
            .collect()
    }

    pub fn active_images(&self) -> Vec<usize> {
        Self::active_indices(&self.images)
    }

    pub fn active_contents(&self) -> Vec<usize> {
        Self::active_indices(&self.contents)
    }

    pub fn active_dots(&self) -> Vec<usize> {
        Self::active_indices(&self.dots)
    }

    pub fn active_in_region(&self, region: usize) -> Vec<usize> {
        self.features
            .get(region)
            .map(|views| Self::active_indices(views))
            .unwrap_or_default()
    }

    pub fn arrow_enabled(&self, arrow: Arrow) -> bool {
        match arrow {
            Arrow::Prev => self.prev_enabled,
            Arrow::Next => self.next_enabled,
        }
    }

    /// True while the item still carries exit styling.
    pub fn has_transient(&self, item: Item) -> bool {
        self.view(item).is_some_and(|view| view.exiting.is_some())
    }

    /// Reports and resets the dirty flag. Set whenever a command actually
    /// changed some panel state.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    /// One-line rendering of the page state, e.g.
    /// `dots=●··· img=research txt=research-brief prev=off next=on r0=before`.
    pub fn snapshot(&self) -> String {
        fn active_label(views: &[PanelView]) -> &str {
            views
                .iter()
                .find(|view| view.active)
                .map(|view| view.label.as_str())
                .unwrap_or("–")
        }
        fn on_off(enabled: bool) -> &'static str {
            if enabled { "on" } else { "off" }
        }

        let mut line = String::from("dots=");
        if self.dots.is_empty() {
            line.push('–');
        } else {
            for dot in &self.dots {
                line.push(if dot.active { '●' } else { '·' });
            }
        }
        line.push_str(&format!(" img={}", active_label(&self.images)));
        line.push_str(&format!(" txt={}", active_label(&self.contents)));
        line.push_str(&format!(" prev={}", on_off(self.prev_enabled)));
        line.push_str(&format!(" next={}", on_off(self.next_enabled)));
        for (region, views) in self.features.iter().enumerate() {
            line.push_str(&format!(" r{region}={}", active_label(views)));
        }
        line
    }
}

impl ViewSurface for ConsoleSurface {
    fn mark_exiting(&mut self, item: Item, direction: Direction) {
        trace!(?item, ?direction, "mark exiting");
        if let Some(view) = self.view_mut(item) {
            if view.exiting != Some(direction) {
                view.exiting = Some(direction);
                self.changed = true;
            }
        }
    }

    fn mark_entering(&mut self, item: Item) {
        trace!(?item, "mark entering");
        if let Some(view) = self.view_mut(item) {
            if view.exiting.take().is_some() {
                self.changed = true;
            }
        }
    }

    fn clear_transient(&mut self, item: Item) {
        trace!(?item, "clear transient");
        if let Some(view) = self.view_mut(item) {
            if view.exiting.take().is_some() {
                self.changed = true;
            }
        }
    }

    fn set_active(&mut self, item: Item, active: bool) {
        trace!(?item, active, "set active");
        if let Some(view) = self.view_mut(item) {
            if view.active != active {
                view.active = active;
                self.changed = true;
            }
        }
    }

    fn set_arrow_enabled(&mut self, arrow: Arrow, enabled: bool) {
        trace!(?arrow, enabled, "set arrow enabled");
        let slot = match arrow {
            Arrow::Prev => &mut self.prev_enabled,
            Arrow::Next => &mut self.next_enabled,
        };
        if *slot != enabled {
            *slot = enabled;
            self.changed = true;
        }
    }
}
