//! Page assembly: scan results from the markup become one slider and one
//! toggle cycler per feature region, wired behind a single facade the
//! session loop drives.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

use crate::slider::{SlideController, Timings};
use crate::surface::{Direction, ViewSurface};
use crate::toggle::ToggleCycler;

/// What a scan of the page found: one label per slide image panel, one per
/// slide content panel, and the image labels of each feature region in
/// document order.
#[derive(Debug, Clone, Default)]
pub struct Markup {
    pub slide_images: Vec<String>,
    pub slide_contents: Vec<String>,
    pub feature_regions: Vec<Vec<String>>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("slide panels do not pair up: {images} image panels, {contents} content panels")]
    PanelCountMismatch { images: usize, contents: usize },
    #[error("feature region {region} has no images")]
    EmptyRegion { region: usize },
}

/// All interactive components of one page. A page with no slides and no
/// regions wires fine and stays inert.
#[derive(Debug)]
pub struct Page {
    slider: SlideController,
    toggles: Vec<ToggleCycler>,
}

impl Page {
    pub fn wire(markup: &Markup) -> Result<Self, PageError> {
        Self::wire_with_timings(markup, Timings::default())
    }

    /// Validates the markup and builds the components. Slide panels must
    /// pair up one to one; a feature region without images is malformed.
    pub fn wire_with_timings(markup: &Markup, timings: Timings) -> Result<Self, PageError> {
        if markup.slide_images.len() != markup.slide_contents.len() {
            return Err(PageError::PanelCountMismatch {
                images: markup.slide_images.len(),
                contents: markup.slide_contents.len(),
            });
        }
        for (region, images) in markup.feature_regions.iter().enumerate() {
            if images.is_empty() {
                return Err(PageError::EmptyRegion { region });
            }
        }

        let slider = SlideController::with_timings(markup.slide_images.len(), timings);
        let toggles = markup
            .feature_regions
            .iter()
            .enumerate()
            .map(|(region, images)| ToggleCycler::new(region, images.len()))
            .collect::<Vec<_>>();

        info!(
            slides = slider.len(),
            regions = toggles.len(),
            "page wired"
        );
        Ok(Self { slider, toggles })
    }

    /// Paints the initial state of every component.
    pub fn initialize<S: ViewSurface>(&mut self, surface: &mut S) {
        self.slider.initialize(surface);
        for toggle in &mut self.toggles {
            toggle.initialize(surface);
        }
    }

    pub fn on_previous_clicked<S: ViewSurface>(&mut self, surface: &mut S) {
        self.slider.on_previous_clicked(surface);
    }

    pub fn on_next_clicked<S: ViewSurface>(&mut self, surface: &mut S) {
        self.slider.on_next_clicked(surface);
    }

    pub fn on_indicator_clicked<S: ViewSurface>(&mut self, index: usize, surface: &mut S) {
        self.slider.on_indicator_clicked(index, surface);
    }

    pub fn on_toggle_arrow_clicked<S: ViewSurface>(
        &mut self,
        region: usize,
        direction: Direction,
        surface: &mut S,
    ) {
        match self.toggles.get_mut(region) {
            Some(toggle) => toggle.advance(direction, surface),
            None => debug!(region, "toggle region unknown"),
        }
    }

    pub fn tick<S: ViewSurface>(&mut self, dt: Duration, surface: &mut S) {
        self.slider.tick(dt, surface);
    }

    pub fn is_settled(&self) -> bool {
        self.slider.is_settled()
    }

    pub fn slider(&self) -> &SlideController {
        &self.slider
    }

    pub fn toggles(&self) -> &[ToggleCycler] {
        &self.toggles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::{Command, Recorder};
    use crate::surface::Item;

    fn markup(slides: usize, regions: &[usize]) -> Markup {
        Markup {
            slide_images: (0..slides).map(|k| format!("image-{k}")).collect(),
            slide_contents: (0..slides).map(|k| format!("content-{k}")).collect(),
            feature_regions: regions
                .iter()
                .map(|&len| (0..len).map(|i| format!("shot-{i}")).collect())
                .collect(),
        }
    }

    #[test]
    fn wire_rejects_unpaired_slide_panels() {
        let mut bad = markup(3, &[]);
        bad.slide_contents.pop();
        assert_eq!(
            Page::wire(&bad).unwrap_err(),
            PageError::PanelCountMismatch {
                images: 3,
                contents: 2,
            }
        );
    }

    #[test]
    fn wire_rejects_region_without_images() {
        let mut bad = markup(2, &[2]);
        bad.feature_regions.push(Vec::new());
        assert_eq!(
            Page::wire(&bad).unwrap_err(),
            PageError::EmptyRegion { region: 1 }
        );
    }

    #[test]
    fn empty_page_wires_and_stays_inert() {
        let mut page = Page::wire(&Markup::default()).unwrap();
        let mut surface = Recorder::new();
        page.initialize(&mut surface);
        page.on_next_clicked(&mut surface);
        page.on_indicator_clicked(0, &mut surface);
        assert!(surface.drain().is_empty());
        assert!(page.is_settled());
    }

    #[test]
    fn initialize_covers_slider_and_every_region() {
        let mut page = Page::wire(&markup(2, &[2, 3])).unwrap();
        let mut surface = Recorder::new();
        page.initialize(&mut surface);
        let commands = surface.drain();
        assert!(commands.contains(&Command::Active(Item::Image(0), true)));
        assert!(commands.contains(&Command::Active(
            Item::Feature {
                region: 0,
                index: 0,
            },
            true
        )));
        assert!(commands.contains(&Command::Active(
            Item::Feature {
                region: 1,
                index: 0,
            },
            true
        )));
    }

    #[test]
    fn clicks_flow_to_the_slider() {
        let mut page = Page::wire(&markup(3, &[])).unwrap();
        let mut surface = Recorder::new();
        page.initialize(&mut surface);
        page.on_next_clicked(&mut surface);
        assert_eq!(page.slider().active_index(), 1);
        assert!(!page.is_settled());
    }

    #[test]
    fn toggle_clicks_address_their_region() {
        let mut page = Page::wire(&markup(1, &[2, 3])).unwrap();
        let mut surface = Recorder::new();
        page.initialize(&mut surface);
        surface.drain();

        page.on_toggle_arrow_clicked(1, Direction::Forward, &mut surface);
        assert_eq!(
            surface.drain(),
            vec![
                Command::Active(
                    Item::Feature {
                        region: 1,
                        index: 0,
                    },
                    false
                ),
                Command::Active(
                    Item::Feature {
                        region: 1,
                        index: 1,
                    },
                    true
                ),
            ]
        );
        assert_eq!(page.toggles()[0].active_index(), 0);
        assert_eq!(page.toggles()[1].active_index(), 1);
    }

    #[test]
    fn unknown_toggle_region_is_ignored() {
        let mut page = Page::wire(&markup(1, &[2])).unwrap();
        let mut surface = Recorder::new();
        page.initialize(&mut surface);
        surface.drain();

        page.on_toggle_arrow_clicked(5, Direction::Forward, &mut surface);
        assert!(surface.drain().is_empty());
    }
}
