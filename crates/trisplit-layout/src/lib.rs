// ABOUTME: Pane layout management for the three-pane mail screen.
// ABOUTME: Resolves pane geometry per view mode and animates transitions between modes.

pub mod animator;
pub mod engine;
pub mod geometry;
pub mod host;
pub mod region;
pub mod visibility;

pub use animator::{TransitionEvent, TransitionId};
pub use engine::{LayoutSnapshot, TwoPaneLayout};
pub use geometry::{resolve_offsets, resolve_widths, PaneOffsets, PaneWidths};
pub use host::{Controller, DeferredTask, LayoutListener, ListCopy, Scheduler};
pub use region::{Pane, Region, Regions};
pub use visibility::PaneVisibility;
