// ABOUTME: Pure width and offset resolution for the three panes.
// ABOUTME: Maps a mode and container width onto pane widths and X positions.

use trisplit_core::{LayoutConfig, Mode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneWidths {
    pub folders: u32,
    pub list: u32,
    pub conversation: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneOffsets {
    pub folders: i32,
    pub list: i32,
    pub conversation: i32,
}

fn share(width: u32, weight: f64) -> u32 {
    // weight is validated to [0, 1], so the result never exceeds width
    (f64::from(width) * weight).round() as u32
}

fn px(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

pub fn folder_list_width(width: u32, config: &LayoutConfig, is_search_result: bool) -> u32 {
    if is_search_result {
        return 0;
    }
    share(width, config.folder_list_weight())
}

pub fn conversation_width(width: u32, config: &LayoutConfig) -> u32 {
    if config.list_collapsible() {
        width
    } else {
        width - share(width, config.conversation_list_weight())
    }
}

/// Widths for all three panes. `current_list` is the list width last applied;
/// modes that do not size the list hand it back unchanged.
pub fn resolve_widths(
    mode: Mode,
    width: u32,
    config: &LayoutConfig,
    is_search_result: bool,
    current_list: u32,
) -> PaneWidths {
    let folders = folder_list_width(width, config, is_search_result);
    let conversation = conversation_width(width, config);

    let list = if mode.is_conversation() {
        if config.list_collapsible() {
            current_list
        } else {
            width - conversation
        }
    } else if mode.is_list() {
        width - folders
    } else {
        current_list
    };

    PaneWidths {
        folders,
        list,
        conversation,
    }
}

/// X offsets for the three panes, or `None` when the mode has no layout
pub fn resolve_offsets(
    mode: Mode,
    collapsible: bool,
    folder_width: u32,
    list_width: u32,
    width: u32,
) -> Option<PaneOffsets> {
    if mode.is_conversation() {
        if collapsible {
            let list = -px(list_width);
            Some(PaneOffsets {
                folders: list.saturating_sub(px(folder_width)),
                list,
                conversation: 0,
            })
        } else {
            Some(PaneOffsets {
                folders: -px(folder_width),
                list: 0,
                conversation: px(list_width),
            })
        }
    } else if mode.is_list() {
        Some(PaneOffsets {
            folders: 0,
            list: px(folder_width),
            conversation: px(width),
        })
    } else {
        None
    }
}

/// Stable list width for `mode` once any transition has settled
pub fn stable_list_width(
    mode: Mode,
    width: u32,
    config: &LayoutConfig,
    is_search_result: bool,
) -> u32 {
    if mode.is_list() {
        width - folder_list_width(width, config, is_search_result)
    } else if mode.is_conversation() {
        share(width, config.conversation_list_weight())
    } else {
        0
    }
}
