//! Structured observability hook for engine lifecycle events.
//!
//! The observer is a diagnostic channel only; the engine never depends on
//! it for correctness.

use crate::engine::BuildReport;

/// Trait for observing engine lifecycle events.
///
/// All methods have default no-op implementations; implement only the
/// events you care about.
pub trait EngineObserver {
    /// Called with the construction summary (also replayed when the
    /// observer is installed on an already-built engine).
    fn on_build(&mut self, _report: &BuildReport) {}

    /// Called when the engine is enabled or disabled.
    fn on_enabled(&mut self, _enabled: bool) {}

    /// Called when the engine state is reset to construction positions.
    fn on_reset(&mut self) {}

    /// Called when a configuration value changes, with the applied
    /// (post-clamp) value.
    fn on_config_change(&mut self, _name: &str, _value: f32) {}
}

/// An observer that does nothing. Used as the default.
pub struct NoOpObserver;

impl EngineObserver for NoOpObserver {}

/// An observer that forwards lifecycle events to `tracing`.
pub struct TracingObserver;

impl EngineObserver for TracingObserver {
    fn on_build(&mut self, report: &BuildReport) {
        tracing::info!(
            masses = report.mass_count,
            springs = report.spring_count,
            constraints = report.constraint_count,
            skipped_edges = report.skipped_edges,
            skipped_constraints = report.skipped_constraints,
            "physics engine built"
        );
    }

    fn on_enabled(&mut self, enabled: bool) {
        tracing::info!(enabled, "physics engine toggled");
    }

    fn on_reset(&mut self) {
        tracing::info!("physics engine reset");
    }

    fn on_config_change(&mut self, name: &str, value: f32) {
        tracing::debug!(name, value, "physics configuration changed");
    }
}
