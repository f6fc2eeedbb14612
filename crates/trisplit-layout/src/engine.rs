// ABOUTME: Mode-driven layout engine for the folder, list, and conversation panes.
// ABOUTME: Sizes panes on measure, positions them on layout, and animates mode transitions.

use std::time::Duration;

use serde::Serialize;
use trisplit_core::{LayoutConfig, Mode};

use crate::animator::{Target, TransitionAnimator, TransitionEvent};
use crate::geometry::{resolve_offsets, resolve_widths, stable_list_width, PaneOffsets};
use crate::host::{Controller, DeferredTask, LayoutListener, ListCopy, Scheduler};
use crate::region::{Pane, Region, Regions};
use crate::visibility::settled_visibility;

/// Point-in-time view of the engine for hosts and debugging
#[derive(Debug, Clone, Serialize)]
pub struct LayoutSnapshot {
    pub current_mode: Mode,
    pub positioned_mode: Mode,
    pub transition_running: bool,
    pub width: Option<u32>,
    pub height: u32,
    pub regions: Regions,
}

/// Lays out the three panes for whichever mode the screen is in.
///
/// The host feeds it container sizes, mode changes, animation clock ticks and
/// deferred tasks, then copies [`Region`] state onto its real views. Two of the
/// three panes are meaningfully visible at once: folders and list in list
/// modes, list and conversation (or the conversation alone when the list is
/// collapsible) in conversation modes.
pub struct TwoPaneLayout {
    config: LayoutConfig,
    regions: Regions,
    /// The mode the screen is in
    current_mode: Mode,
    /// The mode the panes were last positioned for
    positioned_mode: Mode,
    is_search_result: bool,
    /// Ghost width to apply once the running transition finishes. The ghost must
    /// keep the list's pre-transition width while it fades.
    list_copy_width_on_complete: Option<u32>,
    measured_width: Option<u32>,
    measured_height: u32,
    layout_requested: bool,
    animator: TransitionAnimator,
    controller: Option<Box<dyn Controller>>,
    listener: Option<Box<dyn LayoutListener>>,
    list_copy: Box<dyn ListCopy>,
    scheduler: Box<dyn Scheduler>,
}

impl TwoPaneLayout {
    pub fn new(
        config: LayoutConfig,
        list_copy: Box<dyn ListCopy>,
        scheduler: Box<dyn Scheduler>,
    ) -> Self {
        Self {
            animator: TransitionAnimator::new(config.slide_duration(), config.interpolator()),
            config,
            // all panes start hidden in Unknown mode so nothing draws misplaced
            regions: Regions::new(),
            current_mode: Mode::Unknown,
            positioned_mode: Mode::Unknown,
            is_search_result: false,
            list_copy_width_on_complete: None,
            measured_width: None,
            measured_height: 0,
            layout_requested: false,
            controller: None,
            listener: None,
            list_copy,
            scheduler,
        }
    }

    pub fn set_controller(
        &mut self,
        controller: Box<dyn Controller>,
        listener: Box<dyn LayoutListener>,
        is_search_result: bool,
    ) {
        self.controller = Some(controller);
        self.listener = Some(listener);
        self.is_search_result = is_search_result;
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn region(&self, pane: Pane) -> &Region {
        self.regions.get(pane)
    }

    pub fn regions(&self) -> &Regions {
        &self.regions
    }

    pub fn conversation_region(&self) -> &Region {
        self.regions.get(Pane::Conversation)
    }

    pub fn current_mode(&self) -> Mode {
        self.current_mode
    }

    pub fn positioned_mode(&self) -> Mode {
        self.positioned_mode
    }

    pub fn is_transition_running(&self) -> bool {
        self.animator.is_running()
    }

    pub fn pending_list_copy_width(&self) -> Option<u32> {
        self.list_copy_width_on_complete
    }

    pub fn needs_layout(&self) -> bool {
        self.layout_requested
    }

    /// Whether the list is pushed off-screen by the current mode
    pub fn is_conversation_list_collapsed(&self) -> bool {
        !self.current_mode.is_list() && self.config.list_collapsible()
    }

    /// Width of the conversation list once the current mode has settled
    pub fn compute_conversation_list_width(&self) -> u32 {
        stable_list_width(
            self.current_mode,
            self.measured_width.unwrap_or(0),
            &self.config,
            self.is_search_result,
        )
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            current_mode: self.current_mode,
            positioned_mode: self.positioned_mode,
            transition_running: self.animator.is_running(),
            width: self.measured_width,
            height: self.measured_height,
            regions: self.regions.clone(),
        }
    }

    /// Switch modes. Sizing and positioning wait for the next layout pass so
    /// that several quick changes resolve once.
    pub fn on_mode_changed(&mut self, mode: Mode) {
        // reveal the panes only once a mode is first known
        if self.current_mode == Mode::Unknown {
            for region in self.regions.iter_mut() {
                region.set_visible(true);
            }
        }

        // detach the pager from its data source before the conversation leaves
        if self.current_mode.is_conversation() {
            if let Some(controller) = self.controller.as_mut() {
                controller.disable_pager_updates();
            }
        }

        self.current_mode = mode;
        tracing::info!("mode changed to {}", mode);

        self.request_layout();
    }

    pub fn request_layout(&mut self) {
        self.layout_requested = true;
    }

    /// Run a requested layout pass at the last measured size. Returns false when
    /// nothing was requested or no size is known yet.
    pub fn perform_layout(&mut self) -> bool {
        if !self.layout_requested {
            return false;
        }
        let Some(width) = self.measured_width else {
            return false;
        };
        self.on_container_resized(width, self.measured_height);
        true
    }

    /// Measure and layout pass for a container of the given size
    pub fn on_container_resized(&mut self, width: u32, height: u32) {
        tracing::debug!("layout pass, w={} h={}", width, height);
        self.setup_pane_widths(width);
        self.measured_width = Some(width);
        self.measured_height = height;
        self.layout_requested = false;
        self.position_panes(width);
    }

    /// Advance the animation clock. Completion or cancellation handling runs here.
    pub fn advance(&mut self, dt: Duration) -> Option<TransitionEvent> {
        let event = self.animator.advance(dt, &mut self.regions)?;
        self.handle_transition_event(event);
        Some(event)
    }

    pub fn run_deferred(&mut self, task: DeferredTask) {
        match task {
            DeferredTask::TransitionComplete => self.on_transition_complete(),
        }
    }

    /// Tear down: stop any transition and drop the controller so late
    /// completions are ignored
    pub fn detach(&mut self) {
        if let Some(event) = self.animator.cancel() {
            self.handle_transition_event(event);
        }
        self.controller = None;
        self.listener = None;
    }

    fn setup_pane_widths(&mut self, width: u32) {
        let current_list = self.regions.get(Pane::List).width();
        let widths = resolve_widths(
            self.current_mode,
            width,
            &self.config,
            self.is_search_result,
            current_list,
        );

        // folder and conversation widths only follow the container
        if self.measured_width != Some(width) {
            tracing::info!(
                "setting up new layout, w={} fw={} cv={}",
                width,
                widths.folders,
                widths.conversation
            );
            self.regions.get_mut(Pane::Folders).set_width(widths.folders);
            self.regions
                .get_mut(Pane::Conversation)
                .set_width(widths.conversation);
        }

        if self.regions.get_mut(Pane::List).set_width(widths.list) {
            tracing::debug!("conversation list width change, w={}", widths.list);
        }

        let transition_owed =
            self.current_mode != self.positioned_mode && self.positioned_mode != Mode::Unknown;
        if transition_owed
            || self.animator.is_running()
            || self.list_copy_width_on_complete.is_some()
        {
            self.list_copy_width_on_complete = Some(widths.list);
        } else {
            self.regions.get_mut(Pane::ListCopy).set_width(widths.list);
        }
    }

    fn position_panes(&mut self, width: u32) {
        if self.positioned_mode == self.current_mode {
            return;
        }

        let offsets = resolve_offsets(
            self.current_mode,
            self.config.list_collapsible(),
            self.regions.get(Pane::Folders).width(),
            self.regions.get(Pane::List).width(),
            width,
        );

        if let Some(offsets) = offsets {
            tracing::info!(
                "{} layout, x={}/{}/{}",
                self.current_mode,
                offsets.folders,
                offsets.list,
                offsets.conversation
            );
            self.animate_panes(offsets);
        }

        self.positioned_mode = self.current_mode;
    }

    fn animate_panes(&mut self, offsets: PaneOffsets) {
        let folders_x = offsets.folders as f32;
        let list_x = offsets.list as f32;
        let conversation_x = offsets.conversation as f32;

        if let Some(event) = self.animator.cancel() {
            self.handle_transition_event(event);
        }

        // Nothing to animate from on first layout. Listeners still need to hear
        // the transition finished, but not from inside this layout pass.
        if self.positioned_mode == Mode::Unknown {
            self.regions.get_mut(Pane::Conversation).set_x(conversation_x);
            self.regions.get_mut(Pane::Folders).set_x(folders_x);
            self.regions.get_mut(Pane::List).set_x(list_x);
            // no transition will finish to apply a deferred ghost width
            self.fixup_list_copy_width();
            self.scheduler
                .schedule_deferred(DeferredTask::TransitionComplete);
            return;
        }

        // freeze the current list before it redraws at its new width
        self.list_copy.bind(self.regions.get(Pane::List));
        let current_list_x = self.regions.get(Pane::List).x();
        let list_copy = self.regions.get_mut(Pane::ListCopy);
        list_copy.set_x(current_list_x);
        list_copy.set_alpha(1.0);
        self.regions.get_mut(Pane::List).set_alpha(0.0);

        self.use_hardware_layer(true);

        let id = self.animator.start(
            &self.regions,
            &[
                (Pane::Conversation, Target::x(conversation_x)),
                (Pane::Folders, Target::x(folders_x)),
                (Pane::ListCopy, Target::fade(list_x, 0.0)),
                (Pane::List, Target::fade(list_x, 1.0)),
            ],
        );
        tracing::debug!("started transition {:?}", id);
    }

    fn handle_transition_event(&mut self, event: TransitionEvent) {
        match event {
            TransitionEvent::Completed(id) => {
                tracing::debug!("transition {:?} complete", id);
                self.list_copy.unbind();
                self.use_hardware_layer(false);
                self.fixup_list_copy_width();
                self.on_transition_complete();
            }
            TransitionEvent::Cancelled(id) => {
                tracing::debug!("transition {:?} cancelled", id);
                self.list_copy.unbind();
                self.use_hardware_layer(false);
            }
        }
    }

    fn use_hardware_layer(&mut self, enabled: bool) {
        for region in self.regions.iter_mut() {
            region.set_hardware_layer(enabled);
        }
    }

    fn fixup_list_copy_width(&mut self) {
        let Some(width) = self.list_copy_width_on_complete.take() else {
            return;
        };
        if self.regions.get_mut(Pane::ListCopy).set_width(width) {
            tracing::info!("transition finished, setting list copy width to {}", width);
        }
    }

    fn on_transition_complete(&mut self) {
        let visibility = settled_visibility(
            self.current_mode,
            self.config.list_collapsible(),
            self.controller.as_deref(),
        );
        if let (Some(visibility), Some(listener)) = (visibility, self.listener.as_deref_mut()) {
            visibility.deliver(listener);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use trisplit_core::Interpolator;

    #[derive(Default)]
    struct HostLog {
        destroyed: bool,
        pager_disabled: usize,
        bound: bool,
        binds: usize,
        unbinds: usize,
        bound_width: Option<u32>,
        deferred: Vec<DeferredTask>,
        visibility: Vec<(&'static str, bool)>,
    }

    type Log = Rc<RefCell<HostLog>>;

    struct Host(Log);

    impl Controller for Host {
        fn is_destroyed(&self) -> bool {
            self.0.borrow().destroyed
        }

        fn disable_pager_updates(&mut self) {
            self.0.borrow_mut().pager_disabled += 1;
        }
    }

    impl LayoutListener for Host {
        fn on_conversation_list_visibility_changed(&mut self, visible: bool) {
            self.0.borrow_mut().visibility.push(("list", visible));
        }

        fn on_conversation_visibility_changed(&mut self, visible: bool) {
            self.0.borrow_mut().visibility.push(("conversation", visible));
        }
    }

    impl ListCopy for Host {
        fn bind(&mut self, source: &Region) {
            let mut log = self.0.borrow_mut();
            log.bound = true;
            log.binds += 1;
            log.bound_width = Some(source.width());
        }

        fn unbind(&mut self) {
            let mut log = self.0.borrow_mut();
            log.bound = false;
            log.unbinds += 1;
        }
    }

    impl Scheduler for Host {
        fn schedule_deferred(&mut self, task: DeferredTask) {
            self.0.borrow_mut().deferred.push(task);
        }
    }

    fn config(collapsible: bool) -> LayoutConfig {
        LayoutConfig::new(
            0.3,
            0.4,
            collapsible,
            Duration::from_millis(300),
            Interpolator::DecelerateCubic,
        )
        .unwrap()
    }

    fn layout_with(config: LayoutConfig, is_search_result: bool) -> (TwoPaneLayout, Log) {
        let log = Log::default();
        let mut layout = TwoPaneLayout::new(
            config,
            Box::new(Host(log.clone())),
            Box::new(Host(log.clone())),
        );
        layout.set_controller(
            Box::new(Host(log.clone())),
            Box::new(Host(log.clone())),
            is_search_result,
        );
        (layout, log)
    }

    fn run_idle(layout: &mut TwoPaneLayout, log: &Log) {
        let tasks: Vec<_> = log.borrow_mut().deferred.drain(..).collect();
        for task in tasks {
            layout.run_deferred(task);
        }
    }

    /// Attached at 900px and settled in conversation list mode
    fn settled_in_list(collapsible: bool) -> (TwoPaneLayout, Log) {
        let (mut layout, log) = layout_with(config(collapsible), false);
        layout.on_container_resized(900, 600);
        layout.on_mode_changed(Mode::ConversationList);
        layout.perform_layout();
        run_idle(&mut layout, &log);
        log.borrow_mut().visibility.clear();
        (layout, log)
    }

    fn xs(layout: &TwoPaneLayout) -> (f32, f32, f32) {
        (
            layout.region(Pane::Folders).x(),
            layout.region(Pane::List).x(),
            layout.region(Pane::Conversation).x(),
        )
    }

    #[test]
    fn panes_stay_hidden_until_first_mode() {
        let (mut layout, _log) = layout_with(config(false), false);
        layout.on_container_resized(900, 600);
        assert!(layout.regions().iter().all(|r| !r.is_visible()));

        layout.on_mode_changed(Mode::ConversationList);
        assert!(layout.regions().iter().all(|r| r.is_visible()));
    }

    #[test]
    fn first_placement_snaps_and_defers_completion() {
        let (mut layout, log) = layout_with(config(false), false);
        layout.on_container_resized(900, 600);
        layout.on_mode_changed(Mode::ConversationList);
        assert!(layout.needs_layout());
        assert!(layout.perform_layout());

        assert!(!layout.is_transition_running());
        assert_eq!(layout.region(Pane::Folders).width(), 270);
        assert_eq!(layout.region(Pane::List).width(), 630);
        assert_eq!(layout.region(Pane::ListCopy).width(), 630);
        assert_eq!(xs(&layout), (0.0, 270.0, 900.0));
        assert_eq!(layout.positioned_mode(), Mode::ConversationList);

        // nothing is reported from inside the layout pass
        assert!(log.borrow().visibility.is_empty());
        assert_eq!(log.borrow().deferred, vec![DeferredTask::TransitionComplete]);
        assert_eq!(log.borrow().binds, 0);

        run_idle(&mut layout, &log);
        assert_eq!(
            log.borrow().visibility,
            vec![("conversation", false), ("list", true)]
        );
    }

    #[test]
    fn mode_change_animates_with_ghost_cross_fade() {
        let (mut layout, log) = settled_in_list(false);
        layout.on_mode_changed(Mode::Conversation);
        layout.perform_layout();

        assert!(layout.is_transition_running());
        assert_eq!(layout.region(Pane::Conversation).width(), 540);
        assert_eq!(layout.region(Pane::List).width(), 360);
        // the ghost keeps the old list width while it fades
        assert_eq!(layout.region(Pane::ListCopy).width(), 630);
        assert_eq!(layout.pending_list_copy_width(), Some(360));
        assert!(log.borrow().bound);
        assert_eq!(layout.region(Pane::ListCopy).x(), 270.0);
        assert_eq!(layout.region(Pane::ListCopy).alpha(), 1.0);
        assert_eq!(layout.region(Pane::List).alpha(), 0.0);
        assert!(layout.regions().iter().all(|r| r.hardware_layer()));

        assert_eq!(layout.advance(Duration::from_millis(150)), None);
        assert!(log.borrow().visibility.is_empty());

        assert!(matches!(
            layout.advance(Duration::from_millis(150)),
            Some(TransitionEvent::Completed(_))
        ));
        assert_eq!(xs(&layout), (-270.0, 0.0, 360.0));
        assert_eq!(layout.region(Pane::ListCopy).x(), 0.0);
        assert_eq!(layout.region(Pane::ListCopy).alpha(), 0.0);
        assert_eq!(layout.region(Pane::List).alpha(), 1.0);
        assert_eq!(layout.region(Pane::ListCopy).width(), 360);
        assert_eq!(layout.pending_list_copy_width(), None);
        assert!(!log.borrow().bound);
        assert!(layout.regions().iter().all(|r| !r.hardware_layer()));
        assert_eq!(
            log.borrow().visibility,
            vec![("conversation", true), ("list", true)]
        );
    }

    #[test]
    fn repeated_layout_passes_are_idempotent() {
        let (mut layout, log) = settled_in_list(false);
        let before = xs(&layout);

        assert!(!layout.perform_layout());
        layout.request_layout();
        assert!(layout.perform_layout());
        layout.on_container_resized(900, 600);

        assert!(!layout.is_transition_running());
        assert_eq!(xs(&layout), before);
        assert_eq!(log.borrow().binds, 0);
        assert!(log.borrow().deferred.is_empty());
    }

    #[test]
    fn new_transition_cancels_the_running_one() {
        let (mut layout, log) = settled_in_list(false);
        layout.on_mode_changed(Mode::Conversation);
        layout.perform_layout();
        layout.advance(Duration::from_millis(100));

        layout.on_mode_changed(Mode::ConversationList);
        layout.perform_layout();
        assert_eq!(log.borrow().unbinds, 1);
        assert_eq!(log.borrow().binds, 2);
        assert!(log.borrow().visibility.is_empty());

        assert!(matches!(
            layout.advance(Duration::from_millis(300)),
            Some(TransitionEvent::Completed(_))
        ));
        assert_eq!(layout.advance(Duration::from_millis(300)), None);

        let log = log.borrow();
        assert!(!log.bound);
        assert_eq!(log.visibility, vec![("conversation", false), ("list", true)]);
        assert_eq!(xs(&layout), (0.0, 270.0, 900.0));
        assert_eq!(layout.region(Pane::ListCopy).width(), 630);
    }

    #[test]
    fn quick_mode_changes_resolve_in_one_pass() {
        let (mut layout, log) = settled_in_list(false);
        layout.on_mode_changed(Mode::Conversation);
        layout.on_mode_changed(Mode::ConversationList);
        layout.perform_layout();

        assert!(!layout.is_transition_running());
        assert_eq!(log.borrow().binds, 0);
        assert_eq!(xs(&layout), (0.0, 270.0, 900.0));
    }

    #[test]
    fn leaving_conversation_disables_pager_updates() {
        let (mut layout, log) = settled_in_list(false);
        layout.on_mode_changed(Mode::Conversation);
        assert_eq!(log.borrow().pager_disabled, 0);
        layout.on_mode_changed(Mode::ConversationList);
        assert_eq!(log.borrow().pager_disabled, 1);
    }

    #[test]
    fn destroyed_controller_gets_no_visibility() {
        let (mut layout, log) = layout_with(config(false), false);
        layout.on_container_resized(900, 600);
        layout.on_mode_changed(Mode::Conversation);
        layout.perform_layout();
        log.borrow_mut().destroyed = true;

        run_idle(&mut layout, &log);
        assert!(log.borrow().visibility.is_empty());
    }

    #[test]
    fn detach_cancels_without_reporting() {
        let (mut layout, log) = settled_in_list(false);
        layout.on_mode_changed(Mode::Conversation);
        layout.perform_layout();
        layout.advance(Duration::from_millis(50));

        layout.detach();
        assert!(!layout.is_transition_running());
        assert!(!log.borrow().bound);
        assert!(layout.regions().iter().all(|r| !r.hardware_layer()));
        assert_eq!(layout.advance(Duration::from_millis(300)), None);
        assert!(log.borrow().visibility.is_empty());
    }

    #[test]
    fn collapsible_list_slides_offscreen() {
        let (mut layout, log) = settled_in_list(true);
        assert_eq!(layout.region(Pane::Conversation).width(), 900);
        layout.on_mode_changed(Mode::Conversation);
        layout.perform_layout();
        layout.advance(Duration::from_millis(300));

        // the list keeps its width and moves out of view instead
        assert_eq!(layout.region(Pane::List).width(), 630);
        assert_eq!(xs(&layout), (-900.0, -630.0, 0.0));
        assert!(layout.is_conversation_list_collapsed());
        assert_eq!(
            log.borrow().visibility,
            vec![("conversation", true), ("list", false)]
        );
    }

    #[test]
    fn collapsed_list_keeps_width_across_resize() {
        let (mut layout, _log) = settled_in_list(true);
        layout.on_mode_changed(Mode::Conversation);
        layout.perform_layout();
        layout.advance(Duration::from_millis(300));

        layout.on_container_resized(600, 600);
        assert_eq!(layout.region(Pane::List).width(), 630);
        assert_eq!(layout.conversation_region().width(), 600);
        assert_eq!(layout.region(Pane::Folders).width(), 180);

        layout.on_mode_changed(Mode::ConversationList);
        layout.perform_layout();
        assert_eq!(layout.region(Pane::List).width(), 420);
        layout.advance(Duration::from_millis(300));
        assert_eq!(xs(&layout), (0.0, 180.0, 600.0));
        assert_eq!(layout.region(Pane::ListCopy).width(), 420);
    }

    #[test]
    fn unknown_mode_mid_flight_drops_the_stale_transition() {
        let (mut layout, log) = settled_in_list(false);
        layout.on_mode_changed(Mode::Conversation);
        layout.perform_layout();
        layout.advance(Duration::from_millis(100));

        layout.on_mode_changed(Mode::Unknown);
        layout.perform_layout();
        assert_eq!(layout.positioned_mode(), Mode::Unknown);
        assert!(layout.is_transition_running());

        layout.on_mode_changed(Mode::ConversationList);
        layout.perform_layout();
        assert!(!layout.is_transition_running());
        assert!(!log.borrow().bound);
        assert_eq!(xs(&layout), (0.0, 270.0, 900.0));
        assert_eq!(layout.region(Pane::ListCopy).width(), 630);
        assert_eq!(layout.pending_list_copy_width(), None);

        assert_eq!(layout.advance(Duration::from_millis(300)), None);
        assert_eq!(xs(&layout), (0.0, 270.0, 900.0));
        run_idle(&mut layout, &log);
        assert_eq!(
            log.borrow().visibility,
            vec![("conversation", false), ("list", true)]
        );
    }

    #[test]
    fn slide_uses_configured_duration() {
        let config = LayoutConfig::new(
            0.3,
            0.4,
            false,
            Duration::from_millis(100),
            Interpolator::Linear,
        )
        .unwrap();
        let (mut layout, _log) = layout_with(config, false);
        assert_eq!(layout.config().slide_duration(), Duration::from_millis(100));

        layout.on_container_resized(900, 600);
        layout.on_mode_changed(Mode::ConversationList);
        layout.perform_layout();
        layout.on_mode_changed(Mode::Conversation);
        layout.perform_layout();
        assert!(matches!(
            layout.advance(Duration::from_millis(100)),
            Some(TransitionEvent::Completed(_))
        ));
    }

    #[test]
    fn resize_mid_flight_defers_ghost_width() {
        let (mut layout, _log) = settled_in_list(false);
        layout.on_mode_changed(Mode::Conversation);
        layout.perform_layout();
        layout.advance(Duration::from_millis(100));

        layout.on_container_resized(1200, 600);
        assert_eq!(layout.region(Pane::Conversation).width(), 720);
        assert_eq!(layout.region(Pane::List).width(), 480);
        assert_eq!(layout.region(Pane::ListCopy).width(), 630);
        assert_eq!(layout.pending_list_copy_width(), Some(480));

        layout.advance(Duration::from_millis(200));
        assert_eq!(layout.region(Pane::ListCopy).width(), 480);
        assert_eq!(layout.pending_list_copy_width(), None);
    }

    #[test]
    fn search_results_give_folders_no_room() {
        let (mut layout, _log) = layout_with(config(false), true);
        layout.on_container_resized(800, 600);
        layout.on_mode_changed(Mode::SearchResultsList);
        layout.perform_layout();

        assert_eq!(layout.region(Pane::Folders).width(), 0);
        assert_eq!(layout.region(Pane::List).width(), 800);
        assert_eq!(xs(&layout), (0.0, 0.0, 800.0));
    }

    #[test]
    fn mode_change_before_first_measure_waits_for_size() {
        let (mut layout, log) = layout_with(config(false), false);
        layout.on_mode_changed(Mode::ConversationList);
        assert!(!layout.perform_layout());
        assert!(log.borrow().deferred.is_empty());

        layout.on_container_resized(900, 600);
        assert_eq!(xs(&layout), (0.0, 270.0, 900.0));
        assert_eq!(log.borrow().deferred.len(), 1);
    }

    #[test]
    fn stable_list_width_tracks_current_mode() {
        let (mut layout, _log) = settled_in_list(false);
        assert_eq!(layout.compute_conversation_list_width(), 630);
        assert!(!layout.is_conversation_list_collapsed());

        layout.on_mode_changed(Mode::Conversation);
        assert_eq!(layout.compute_conversation_list_width(), 360);
    }

    #[test]
    fn snapshot_reflects_engine_state() {
        let (mut layout, _log) = settled_in_list(false);
        layout.on_mode_changed(Mode::Conversation);
        layout.perform_layout();

        let snapshot = layout.snapshot();
        assert_eq!(snapshot.current_mode, Mode::Conversation);
        assert_eq!(snapshot.positioned_mode, Mode::Conversation);
        assert!(snapshot.transition_running);
        assert_eq!(snapshot.width, Some(900));
        assert_eq!(snapshot.regions.get(Pane::List).width(), 360);
    }
}
