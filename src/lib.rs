// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Layout math allowances: index/offset casts are range-checked by
// construction, and float literals are exact at the precisions compared
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]

//! Content-positioning and spring-animation engine for interactive 3D
//! viewers.
//!
//! Vitrine sits between a data layer and a renderer: given an ordered
//! collection of content items and one active selection, it computes the
//! spatial transform of every item under a pluggable layout strategy and
//! spring-animates all transitions. It fetches no data and paints no
//! pixels.
//!
//! # Key entry points
//!
//! - [`viewer::ViewerEngine`] - the command-driven engine facade
//! - [`layout::Positioner`] - the layout strategy contract
//! - [`layout::PositionerRegistry`] - name-based strategy resolution
//! - [`animation::AnimationDriver`] - the per-frame spring integrator
//! - [`options::EngineOptions`] - runtime configuration (geometry, spring
//!   tuning), loadable from TOML presets
//!
//! # Architecture
//!
//! Everything runs single-threaded on the caller's render-loop thread.
//! UI event sources issue [`viewer::ViewerCommand`]s, the engine recomputes
//! layout targets through the active [`layout::Positioner`], and each call
//! to [`viewer::ViewerEngine::tick`] advances the springs and yields the
//! applied transforms for the renderer to consume.

pub mod animation;
pub mod error;
pub mod layout;
pub mod options;
pub mod util;
pub mod viewer;
