//! Strategy registry: resolves positioner names to implementations.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::carousel::CarouselPositioner;
use super::grid::GridPositioner;
use super::positioner::{shared, SharedPositioner};
use super::stack::StackPositioner;
use crate::options::EngineOptions;

/// Maps strategy names to [`Positioner`](super::Positioner)
/// implementations.
///
/// Resolution is an exact name match; unknown names fall back to the
/// designated default with a logged diagnostic, so the viewer is never left
/// without a usable layout.
pub struct PositionerRegistry {
    strategies: FxHashMap<String, SharedPositioner>,
    default_name: String,
}

impl PositionerRegistry {
    /// Registry with the built-in strategies (stack, carousel, grid) at
    /// their default constants. Stack is the default strategy.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_options(&EngineOptions::default())
    }

    /// Registry with the built-in strategies constructed from configured
    /// constants.
    #[must_use]
    pub fn from_options(options: &EngineOptions) -> Self {
        let mut registry = Self {
            strategies: FxHashMap::default(),
            default_name: StackPositioner::NAME.to_owned(),
        };
        registry.register(shared(StackPositioner::new(options.stack)));
        registry.register(shared(CarouselPositioner::new(options.carousel)));
        registry.register(shared(GridPositioner::new(options.grid)));
        if !options.default_strategy.is_empty() {
            let _ = registry.set_default(&options.default_strategy);
        }
        registry
    }

    /// Register a strategy under its own name, replacing any previous entry
    /// with that name.
    pub fn register(&mut self, positioner: SharedPositioner) {
        let _ =
            self.strategies.insert(positioner.name().to_owned(), positioner);
    }

    /// Designate the default strategy. Returns false (and leaves the default
    /// unchanged) when no strategy with that name is registered.
    pub fn set_default(&mut self, name: &str) -> bool {
        if self.strategies.contains_key(name) {
            name.clone_into(&mut self.default_name);
            true
        } else {
            log::warn!(
                "cannot set unknown strategy {name:?} as default, keeping {:?}",
                self.default_name
            );
            false
        }
    }

    /// Name of the default strategy.
    #[must_use]
    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    /// Whether a strategy with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.strategies.contains_key(name)
    }

    /// Resolve a strategy by name. Unknown names fall back to the default
    /// strategy with a logged diagnostic.
    #[must_use]
    pub fn resolve(&self, name: &str) -> SharedPositioner {
        if let Some(positioner) = self.strategies.get(name) {
            return Arc::clone(positioner);
        }
        log::warn!(
            "unknown positioner strategy {name:?}, falling back to {:?}",
            self.default_name
        );
        self.strategies
            .get(&self.default_name)
            .map_or_else(|| shared(StackPositioner::default()), Arc::clone)
    }

    /// Registered strategy names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> =
            self.strategies.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for PositionerRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for PositionerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PositionerRegistry")
            .field("strategies", &self.names())
            .field("default_name", &self.default_name)
            .finish()
    }
}
