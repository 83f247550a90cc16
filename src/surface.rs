//! The rendering seam between the interaction core and whatever actually
//! draws the page. Commands flow one way: controllers issue them and never
//! read styling or animation state back.

/// Travel direction of a slide transition or a feature-toggle step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// The slider's previous/next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Prev,
    Next,
}

/// Which control produced a slide-change request. Logged for diagnosis;
/// the travel direction is always derived from the indices, never from
/// the control that asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestSource {
    Arrow(Arrow),
    Dot,
}

/// An addressable visual on the page. Controllers hand these out by kind
/// and position only; what lives behind a position is the surface's
/// business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Item {
    /// Image panel of slide pair `k` on the progression slider.
    Image(usize),
    /// Content panel of slide pair `k`.
    Content(usize),
    /// Indicator dot for slide `k`.
    Dot(usize),
    /// Image `index` inside before/after feature region `region`.
    Feature { region: usize, index: usize },
}

/// What a presentation layer must implement to render the page.
///
/// `mark_exiting` applies directional exit styling, `mark_entering`
/// removes it from the incoming item, `clear_transient` removes leftover
/// exit styling from an outgoing item once its window has passed. The
/// surface owns all visual timing; none of these calls block.
pub trait ViewSurface {
    fn mark_exiting(&mut self, item: Item, direction: Direction);
    fn mark_entering(&mut self, item: Item);
    fn clear_transient(&mut self, item: Item);
    fn set_active(&mut self, item: Item, active: bool);
    fn set_arrow_enabled(&mut self, arrow: Arrow, enabled: bool);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Everything a surface was told, in order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) enum Command {
        Exiting(Item, Direction),
        Entering(Item),
        Cleared(Item),
        Active(Item, bool),
        ArrowEnabled(Arrow, bool),
    }

    #[derive(Debug, Default)]
    pub(crate) struct Recorder {
        pub(crate) commands: Vec<Command>,
    }

    impl Recorder {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn drain(&mut self) -> Vec<Command> {
            std::mem::take(&mut self.commands)
        }
    }

    impl ViewSurface for Recorder {
        fn mark_exiting(&mut self, item: Item, direction: Direction) {
            self.commands.push(Command::Exiting(item, direction));
        }

        fn mark_entering(&mut self, item: Item) {
            self.commands.push(Command::Entering(item));
        }

        fn clear_transient(&mut self, item: Item) {
            self.commands.push(Command::Cleared(item));
        }

        fn set_active(&mut self, item: Item, active: bool) {
            self.commands.push(Command::Active(item, active));
        }

        fn set_arrow_enabled(&mut self, arrow: Arrow, enabled: bool) {
            self.commands.push(Command::ArrowEnabled(arrow, enabled));
        }
    }
}
