//! Feature toggle cycler: each before/after region shows one image out of
//! M and steps through them circularly. Steps apply immediately; there is
//! no lock and no delayed work.

use tracing::debug;

use crate::surface::{Direction, Item, ViewSurface};

/// Circular selector over the images of one feature region.
#[derive(Debug, Clone)]
pub struct ToggleCycler {
    region: usize,
    len: usize,
    active: usize,
}

impl ToggleCycler {
    pub fn new(region: usize, len: usize) -> Self {
        Self {
            region,
            len,
            active: 0,
        }
    }

    /// Paints the first image active. An empty region issues nothing.
    pub fn initialize<S: ViewSurface>(&mut self, surface: &mut S) {
        if self.len == 0 {
            return;
        }
        surface.set_active(
            Item::Feature {
                region: self.region,
                index: self.active,
            },
            true,
        );
    }

    /// Steps to the neighbouring image, wrapping at either end. The swap is
    /// a plain deactivate/activate pair; with a single image the pair
    /// lands back on it.
    pub fn advance<S: ViewSurface>(&mut self, direction: Direction, surface: &mut S) {
        if self.len == 0 {
            return;
        }
        let next = match direction {
            Direction::Forward => (self.active + 1) % self.len,
            Direction::Backward => (self.active + self.len - 1) % self.len,
        };
        surface.set_active(
            Item::Feature {
                region: self.region,
                index: self.active,
            },
            false,
        );
        surface.set_active(
            Item::Feature {
                region: self.region,
                index: next,
            },
            true,
        );
        debug!(
            region = self.region,
            from = self.active,
            to = next,
            ?direction,
            "feature toggle stepped"
        );
        self.active = next;
    }

    pub fn region(&self) -> usize {
        self.region
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::{Command, Recorder};

    fn feature(region: usize, index: usize) -> Item {
        Item::Feature { region, index }
    }

    #[test]
    fn initialize_paints_first_image() {
        let mut cycler = ToggleCycler::new(1, 3);
        let mut surface = Recorder::new();
        cycler.initialize(&mut surface);
        assert_eq!(
            surface.drain(),
            vec![Command::Active(feature(1, 0), true)]
        );
        assert_eq!(cycler.active_index(), 0);
    }

    #[test]
    fn forward_wraps_past_the_last_image() {
        let mut cycler = ToggleCycler::new(0, 3);
        let mut surface = Recorder::new();
        cycler.initialize(&mut surface);
        surface.drain();

        cycler.advance(Direction::Forward, &mut surface);
        cycler.advance(Direction::Forward, &mut surface);
        assert_eq!(cycler.active_index(), 2);
        surface.drain();

        cycler.advance(Direction::Forward, &mut surface);
        assert_eq!(
            surface.drain(),
            vec![
                Command::Active(feature(0, 2), false),
                Command::Active(feature(0, 0), true),
            ]
        );
        assert_eq!(cycler.active_index(), 0);
    }

    #[test]
    fn backward_from_first_lands_on_last() {
        let mut cycler = ToggleCycler::new(2, 4);
        let mut surface = Recorder::new();
        cycler.initialize(&mut surface);
        surface.drain();

        cycler.advance(Direction::Backward, &mut surface);
        assert_eq!(
            surface.drain(),
            vec![
                Command::Active(feature(2, 0), false),
                Command::Active(feature(2, 3), true),
            ]
        );
        assert_eq!(cycler.active_index(), 3);
    }

    #[test]
    fn steps_in_opposite_directions_cancel() {
        let mut cycler = ToggleCycler::new(0, 5);
        let mut surface = Recorder::new();
        cycler.advance(Direction::Forward, &mut surface);
        cycler.advance(Direction::Forward, &mut surface);
        cycler.advance(Direction::Backward, &mut surface);
        cycler.advance(Direction::Backward, &mut surface);
        assert_eq!(cycler.active_index(), 0);
    }

    #[test]
    fn single_image_swaps_with_itself() {
        let mut cycler = ToggleCycler::new(0, 1);
        let mut surface = Recorder::new();
        cycler.initialize(&mut surface);
        surface.drain();

        cycler.advance(Direction::Forward, &mut surface);
        assert_eq!(
            surface.drain(),
            vec![
                Command::Active(feature(0, 0), false),
                Command::Active(feature(0, 0), true),
            ]
        );
        assert_eq!(cycler.active_index(), 0);
    }

    #[test]
    fn empty_region_ignores_steps() {
        let mut cycler = ToggleCycler::new(0, 0);
        let mut surface = Recorder::new();
        cycler.initialize(&mut surface);
        cycler.advance(Direction::Forward, &mut surface);
        cycler.advance(Direction::Backward, &mut surface);
        assert!(surface.drain().is_empty());
    }
}
