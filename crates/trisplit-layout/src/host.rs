// ABOUTME: Capabilities the layout engine needs from its host.
// ABOUTME: Controller, visibility listener, ghost pane binding, and idle-task scheduling.

use crate::region::Region;

/// The screen controller that owns pane content
pub trait Controller {
    /// True once the hosting screen has been torn down
    fn is_destroyed(&self) -> bool;

    /// Stop the departing detail pane from processing data source updates
    fn disable_pager_updates(&mut self);
}

/// Receives semantic visibility after each completed transition
pub trait LayoutListener {
    fn on_conversation_list_visibility_changed(&mut self, visible: bool);
    fn on_conversation_visibility_changed(&mut self, visible: bool);
}

/// Captures the list pane's appearance for the ghost pane to draw while it fades out
pub trait ListCopy {
    /// Freeze the content currently shown by `source`
    fn bind(&mut self, source: &Region);

    /// Release the captured content
    fn unbind(&mut self);
}

/// Work the engine must not do inside a layout pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    TransitionComplete,
}

/// Posts tasks to the host's next idle tick. The host hands each task back
/// through [`crate::TwoPaneLayout::run_deferred`].
pub trait Scheduler {
    fn schedule_deferred(&mut self, task: DeferredTask);
}
