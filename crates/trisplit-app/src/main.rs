// ABOUTME: Headless host for the trisplit layout engine.
// ABOUTME: Drives resizes and mode changes on a fixed frame clock and logs pane geometry.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use trisplit_core::{Mode, Settings};
use trisplit_layout::{
    Controller, DeferredTask, LayoutListener, ListCopy, Region, Scheduler, TwoPaneLayout,
};

const FRAME: Duration = Duration::from_millis(16);

/// Tasks posted for the next idle tick
type IdleQueue = Rc<RefCell<VecDeque<DeferredTask>>>;

struct IdleScheduler(IdleQueue);

impl Scheduler for IdleScheduler {
    fn schedule_deferred(&mut self, task: DeferredTask) {
        self.0.borrow_mut().push_back(task);
    }
}

struct Screen;

impl Controller for Screen {
    fn is_destroyed(&self) -> bool {
        false
    }

    fn disable_pager_updates(&mut self) {
        tracing::info!("pager detached from its data source");
    }
}

impl LayoutListener for Screen {
    fn on_conversation_list_visibility_changed(&mut self, visible: bool) {
        tracing::info!("conversation list visible: {}", visible);
    }

    fn on_conversation_visibility_changed(&mut self, visible: bool) {
        tracing::info!("conversation visible: {}", visible);
    }
}

struct LoggingListCopy;

impl ListCopy for LoggingListCopy {
    fn bind(&mut self, source: &Region) {
        tracing::debug!("list copy bound to {:?} at w={}", source.pane(), source.width());
    }

    fn unbind(&mut self) {
        tracing::debug!("list copy released");
    }
}

struct Host {
    layout: TwoPaneLayout,
    idle: IdleQueue,
}

impl Host {
    /// One frame: pending layout, idle tasks, then the animation clock
    fn frame(&mut self) {
        self.layout.perform_layout();
        loop {
            // release the queue borrow before the engine schedules more work
            let task = self.idle.borrow_mut().pop_front();
            let Some(task) = task else { break };
            self.layout.run_deferred(task);
        }
        if let Some(event) = self.layout.advance(FRAME) {
            tracing::debug!("animation event {:?}", event);
        }
    }

    fn settle(&mut self) -> Result<()> {
        self.frame();
        while self.layout.is_transition_running() || !self.idle.borrow().is_empty() {
            self.frame();
        }
        tracing::info!("settled: {}", serde_json::to_string(&self.layout.snapshot())?);
        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    tracing::info!("Starting trisplit-demo");

    let settings = Settings::load_or_default();
    let config = settings.layout_config()?;
    tracing::info!(
        "Loaded layout config: collapsible={} duration={:?}",
        config.list_collapsible(),
        config.slide_duration()
    );

    let idle = IdleQueue::default();
    let mut layout = TwoPaneLayout::new(
        config,
        Box::new(LoggingListCopy),
        Box::new(IdleScheduler(idle.clone())),
    );
    layout.set_controller(Box::new(Screen), Box::new(Screen), false);
    let mut host = Host { layout, idle };

    host.layout.on_container_resized(1280, 800);
    for mode in [
        Mode::ConversationList,
        Mode::Conversation,
        Mode::ConversationList,
    ] {
        host.layout.on_mode_changed(mode);
        host.settle()?;
    }

    // interrupt a transition halfway with a resize and a new mode
    host.layout.on_mode_changed(Mode::Conversation);
    for _ in 0..8 {
        host.frame();
    }
    host.layout.on_container_resized(1600, 900);
    host.layout.on_mode_changed(Mode::ConversationList);
    host.settle()?;

    host.layout.detach();
    tracing::info!("Detached layout, exiting");
    Ok(())
}
