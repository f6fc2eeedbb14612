// ABOUTME: Reports which panes are semantically visible once a transition settles.
// ABOUTME: Suppresses reports once the hosting controller is gone.

use trisplit_core::Mode;

use crate::host::{Controller, LayoutListener};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneVisibility {
    pub conversation_list: bool,
    pub conversation: bool,
}

/// `None` for modes that place nothing
pub fn visibility_for(mode: Mode, list_collapsible: bool) -> Option<PaneVisibility> {
    if mode.is_conversation() {
        Some(PaneVisibility {
            conversation_list: !list_collapsible,
            conversation: true,
        })
    } else if mode.is_list() {
        Some(PaneVisibility {
            conversation_list: true,
            conversation: false,
        })
    } else {
        None
    }
}

impl PaneVisibility {
    pub fn deliver(self, listener: &mut dyn LayoutListener) {
        listener.on_conversation_visibility_changed(self.conversation);
        listener.on_conversation_list_visibility_changed(self.conversation_list);
    }
}

/// Visibility to report for a completed transition, or `None` when the
/// controller is gone or the mode places nothing
pub fn settled_visibility(
    mode: Mode,
    list_collapsible: bool,
    controller: Option<&dyn Controller>,
) -> Option<PaneVisibility> {
    let Some(controller) = controller else {
        tracing::info!("transition complete without a controller, skipping dispatch");
        return None;
    };
    if controller.is_destroyed() {
        // the hosting screen went away before the animation finished
        tracing::info!("transition complete after controller was destroyed, quitting early");
        return None;
    }
    visibility_for(mode, list_collapsible)
}
