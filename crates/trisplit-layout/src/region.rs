// ABOUTME: Pane regions and their geometry.
// ABOUTME: Width is authoritative; offset and opacity are what transitions animate.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pane {
    Folders,
    List,
    Conversation,
    /// Ghost clone of the list used to cross-fade width changes
    ListCopy,
}

impl Pane {
    pub fn all() -> [Pane; 4] {
        [Pane::Folders, Pane::List, Pane::Conversation, Pane::ListCopy]
    }

    fn index(self) -> usize {
        match self {
            Pane::Folders => 0,
            Pane::List => 1,
            Pane::Conversation => 2,
            Pane::ListCopy => 3,
        }
    }
}

/// Geometry of one pane in pixels
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pane: Pane,
    width: u32,
    x: f32,
    alpha: f32,
    visible: bool,
    hardware_layer: bool,
}

impl Region {
    pub fn new(pane: Pane) -> Self {
        Self {
            pane,
            width: 0,
            x: 0.0,
            alpha: 1.0,
            visible: false,
            hardware_layer: false,
        }
    }

    pub fn pane(&self) -> Pane {
        self.pane
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn hardware_layer(&self) -> bool {
        self.hardware_layer
    }

    /// Returns false when the width was already `width`
    pub fn set_width(&mut self, width: u32) -> bool {
        if self.width == width {
            return false;
        }
        self.width = width;
        true
    }

    /// Returns false when the offset was already `x`
    pub fn set_x(&mut self, x: f32) -> bool {
        if self.x == x {
            return false;
        }
        self.x = x;
        true
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn set_hardware_layer(&mut self, enabled: bool) {
        self.hardware_layer = enabled;
    }
}

/// The three live panes plus the ghost
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Regions([Region; 4]);

impl Regions {
    pub fn new() -> Self {
        Self(Pane::all().map(Region::new))
    }

    pub fn get(&self, pane: Pane) -> &Region {
        &self.0[pane.index()]
    }

    pub fn get_mut(&mut self, pane: Pane) -> &mut Region {
        &mut self.0[pane.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Region> {
        self.0.iter_mut()
    }
}

impl Default for Regions {
    fn default() -> Self {
        Self::new()
    }
}
