//! Viewer engine: navigation commands in, spring-animated transforms out.
//!
//! [`ViewerEngine`] ties the pieces together: it owns the [`ViewerState`],
//! resolves strategies through the
//! [`PositionerRegistry`](crate::layout::PositionerRegistry), and drives the
//! [`AnimationDriver`](crate::animation::AnimationDriver) once per render
//! tick. Everything runs single-threaded on the render-loop thread; there
//! is no locking and no I/O.

mod command;
mod observer;
mod state;

pub use command::ViewerCommand;
pub use observer::{ObserverFn, SubscriptionId, ViewerEvent};
pub use state::{ContentId, Item, ViewerPhase, ViewerState};

use observer::ObserverSet;

use crate::animation::{AnimationDriver, FrameTransforms};
use crate::layout::{
    LayoutConfig, PositionerRegistry, SharedPositioner, ViewportParams,
};
use crate::options::EngineOptions;

/// The content-positioning engine.
///
/// Commands mutate state synchronously; [`tick`](Self::tick) advances the
/// spring animation and returns the applied transforms for the renderer.
/// A transition that is superseded mid-flight simply gets a new target —
/// velocities carry over, so there is never a visual snap.
pub struct ViewerEngine {
    state: ViewerState,
    registry: PositionerRegistry,
    driver: AnimationDriver,
    positioner: SharedPositioner,
    observers: ObserverSet,
    viewport: Option<ViewportParams>,
    phase: ViewerPhase,
}

impl ViewerEngine {
    /// Engine with the built-in strategies at default constants.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(&EngineOptions::default())
    }

    /// Engine configured from options (strategy constants, spring tuning,
    /// default strategy).
    #[must_use]
    pub fn with_options(options: &EngineOptions) -> Self {
        Self::with_registry(
            PositionerRegistry::from_options(options),
            options,
        )
    }

    /// Engine with a custom registry (e.g. carrying external strategies).
    #[must_use]
    pub fn with_registry(
        registry: PositionerRegistry,
        options: &EngineOptions,
    ) -> Self {
        let positioner = registry.resolve(registry.default_name());
        let state = ViewerState::new(positioner.name());
        Self {
            state,
            registry,
            driver: AnimationDriver::with_options(options.animation),
            positioner,
            observers: ObserverSet::new(),
            viewport: None,
            phase: ViewerPhase::Idle,
        }
    }

    /// Current viewer state.
    #[must_use]
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    /// Current phase: Idle when every applied transform has settled.
    #[must_use]
    pub fn phase(&self) -> ViewerPhase {
        self.phase
    }

    /// The strategy registry.
    #[must_use]
    pub fn registry(&self) -> &PositionerRegistry {
        &self.registry
    }

    /// Mutable access to the registry, e.g. to register external
    /// strategies before selecting them by name.
    pub fn registry_mut(&mut self) -> &mut PositionerRegistry {
        &mut self.registry
    }

    /// Update the viewport hints passed to positioners. `None` clears them.
    pub fn set_viewport(&mut self, viewport: Option<ViewportParams>) {
        if self.viewport != viewport {
            self.viewport = viewport;
            self.retarget();
        }
    }

    /// Apply a navigation command atomically.
    ///
    /// Commands that change nothing (e.g. an index that clamps back to the
    /// current value) emit no event and start no transition.
    pub fn execute(&mut self, command: ViewerCommand) {
        match command {
            ViewerCommand::SetActive { index } => {
                let from = self.state.active_index();
                if self.state.set_active_index(index) {
                    let to = self.state.active_index();
                    self.retarget();
                    self.observers
                        .notify(&ViewerEvent::ActiveChanged { from, to });
                }
            }
            ViewerCommand::Step { delta } => {
                let from = self.state.active_index();
                if self.state.step_active(delta) {
                    let to = self.state.active_index();
                    self.retarget();
                    self.observers
                        .notify(&ViewerEvent::ActiveChanged { from, to });
                }
            }
            ViewerCommand::SelectStrategy { name } => {
                // Resolution falls back to the default strategy on unknown
                // names; the state records what was actually resolved.
                let positioner = self.registry.resolve(&name);
                let resolved = positioner.name();
                if self.state.set_strategy_name(resolved) {
                    self.positioner = positioner;
                    self.retarget();
                    self.observers.notify(&ViewerEvent::StrategyChanged {
                        name: resolved.to_owned(),
                    });
                }
            }
            ViewerCommand::SetItems { contents } => {
                self.state.set_items(contents);
                self.retarget();
                self.observers.notify(&ViewerEvent::ItemsReplaced {
                    total_items: self.state.total_items(),
                });
            }
        }
    }

    /// Advance the animation by `dt` seconds and return the applied
    /// transforms for this tick, or `None` while the collection is empty.
    pub fn tick(&mut self, dt: f32) -> Option<FrameTransforms> {
        if self.state.total_items() == 0 {
            return None;
        }
        let settled = self.driver.tick(dt);
        if settled && self.phase == ViewerPhase::Transitioning {
            self.phase = ViewerPhase::Idle;
            self.observers.notify(&ViewerEvent::Settled);
        }
        Some(self.driver.frame())
    }

    /// Subscribe to state-change notifications. The callback runs
    /// synchronously on the engine's thread.
    pub fn subscribe(&mut self, observer: ObserverFn) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    /// Release a subscription. Returns whether it was still registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Recompute targets for the current state and update the phase.
    fn retarget(&mut self) {
        let config = self.layout_config();
        self.driver.retarget(self.positioner.as_ref(), &config);
        self.phase = if self.driver.is_settled() {
            ViewerPhase::Idle
        } else {
            ViewerPhase::Transitioning
        };
    }

    fn layout_config(&self) -> LayoutConfig {
        let config = self.state.layout_config();
        match self.viewport {
            Some(viewport) => config.with_viewport(viewport),
            None => config,
        }
    }
}

impl Default for ViewerEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ViewerEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewerEngine")
            .field("state", &self.state)
            .field("phase", &self.phase)
            .field("strategy", &self.positioner.name())
            .field("observers", &self.observers)
            .finish()
    }
}
