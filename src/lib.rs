//! Interaction core for a process-walkthrough page: a progression slider
//! that moves between image/content slide pairs with staggered transition
//! windows, and circular before/after toggles for the feature regions.
//!
//! Components never touch rendering directly. They issue styling commands
//! through [`ViewSurface`] and a session loop calls [`Page::tick`] to fire
//! the delayed phases of committed transitions.

pub mod console;
pub mod constants;
pub mod page;
pub mod slider;
pub mod surface;
pub mod toggle;

pub use console::{ConsoleSurface, PanelView};
pub use page::{Markup, Page, PageError};
pub use slider::{SlideController, SlideSet, Timings};
pub use surface::{Arrow, Direction, Item, RequestSource, ViewSurface};
pub use toggle::ToggleCycler;
