//! Engine orchestration: construction, state machine, and step pipeline.

use serde::{Deserialize, Serialize};

use soma_mesh::MeshTopology;

use crate::constraint::{self, ConstraintSet};
use crate::forces;
use crate::integrator;
use crate::observer::{EngineObserver, NoOpObserver};
use crate::point::MassPointSet;
use crate::spring::SpringNetwork;
use crate::types::{PhysicsData, PointState, Vec3};
use crate::{CONSTRAINT_ITERATIONS, DEFAULT_MUSCLE_TENSION};

/// Engine configuration, applied field by field at construction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Gravitational acceleration (any numeric value).
    pub gravity: f32,
    /// Uniform velocity damping factor, clamped to `[0, 1]`.
    pub damping: f32,
    /// Global spring stiffness, clamped to `[0, 1]`.
    pub stiffness: f32,
    /// Relaxation passes over the constraint set per step.
    pub constraint_iterations: usize,
}

impl EngineConfig {
    /// Create a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            gravity: 9.8,
            damping: 0.95,
            stiffness: 0.8,
            constraint_iterations: CONSTRAINT_ITERATIONS,
        }
    }

    /// Set the gravitational acceleration.
    #[must_use]
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the velocity damping factor.
    #[must_use]
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    /// Set the global spring stiffness.
    #[must_use]
    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Set the number of constraint relaxation passes per step.
    #[must_use]
    pub fn with_constraint_iterations(mut self, iterations: usize) -> Self {
        self.constraint_iterations = iterations.max(1);
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Construction summary: what was built and what was silently dropped.
///
/// Malformed connectivity never fails construction; it is skipped and
/// counted here so callers and tests can assert on it.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct BuildReport {
    /// Number of mass points built.
    pub mass_count: usize,
    /// Number of springs built.
    pub spring_count: usize,
    /// Number of anatomical constraints installed.
    pub constraint_count: usize,
    /// Edges dropped because an endpoint id was missing (or degenerate).
    pub skipped_edges: usize,
    /// Anatomical pairs dropped because an endpoint id was missing.
    pub skipped_constraints: usize,
}

/// The mass-spring physics engine.
///
/// Starts **disabled**: [`step`](Self::step) is a no-op until
/// [`enable`](Self::enable) is called. One driving loop is expected to call
/// `step` once per animation tick together with the force/impulse and
/// configuration methods; no concurrent-call safety is provided.
pub struct PhysicsEngine {
    points: MassPointSet,
    springs: SpringNetwork,
    constraints: ConstraintSet,
    enabled: bool,
    gravity: f32,
    damping: f32,
    stiffness: f32,
    constraint_iterations: usize,
    report: BuildReport,
    observer: Box<dyn EngineObserver>,
}

impl PhysicsEngine {
    /// Build an engine from a mesh topology with the default configuration.
    #[must_use]
    pub fn from_topology(topology: &MeshTopology) -> Self {
        Self::with_config(topology, EngineConfig::default())
    }

    /// Build an engine from a mesh topology with an explicit configuration.
    ///
    /// Spring stiffness is the global stiffness scaled by the mesh's muscle
    /// tension hint (default 0.3). Anatomical constraints are installed only
    /// when the topology requests joint constraints.
    #[must_use]
    pub fn with_config(topology: &MeshTopology, config: EngineConfig) -> Self {
        let damping = config.damping.clamp(0.0, 1.0);
        let stiffness = config.stiffness.clamp(0.0, 1.0);

        let points = MassPointSet::from_vertices(&topology.vertices);

        let muscle_tension = topology.muscle_tension().unwrap_or(DEFAULT_MUSCLE_TENSION);
        let (springs, skipped_edges) =
            SpringNetwork::from_edges(&points, &topology.edges, stiffness * muscle_tension);

        let (constraints, skipped_constraints) = if topology.joint_constraints_enabled() {
            ConstraintSet::anatomical(&points)
        } else {
            (ConstraintSet::empty(), 0)
        };

        let report = BuildReport {
            mass_count: points.len(),
            spring_count: springs.len(),
            constraint_count: constraints.len(),
            skipped_edges,
            skipped_constraints,
        };

        Self {
            points,
            springs,
            constraints,
            enabled: false,
            gravity: config.gravity,
            damping,
            stiffness,
            constraint_iterations: config.constraint_iterations.max(1),
            report,
            observer: Box::new(NoOpObserver),
        }
    }

    /// Install an observer; the construction summary is replayed to it.
    pub fn set_observer(&mut self, mut observer: Box<dyn EngineObserver>) {
        observer.on_build(&self.report);
        self.observer = observer;
    }

    /// The construction summary.
    #[must_use]
    pub fn build_report(&self) -> &BuildReport {
        &self.report
    }

    /// Start stepping.
    pub fn enable(&mut self) {
        self.enabled = true;
        self.observer.on_enabled(true);
    }

    /// Stop stepping. Accumulated forces are kept, not cleared.
    pub fn disable(&mut self) {
        self.enabled = false;
        self.observer.on_enabled(false);
    }

    /// Whether the engine is currently stepping.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Advance the simulation by one step and return the position snapshot.
    ///
    /// Returns `None` without mutating anything when the engine is disabled
    /// or `dt <= 0`; in particular, accumulated forces are NOT cleared and
    /// persist until the next successful step. The caller is responsible for
    /// clamping `dt` against large pauses.
    pub fn step(&mut self, dt: f32) -> Option<Vec<PointState>> {
        if !self.enabled || dt <= 0.0 {
            return None;
        }

        forces::apply_gravity(&mut self.points, self.gravity);
        forces::apply_spring_forces(&mut self.points, &self.springs);
        integrator::integrate(&mut self.points, dt, self.damping);
        self.constraints
            .relax(&mut self.points, self.constraint_iterations);
        constraint::resolve_ground_collisions(&mut self.points);
        self.points.clear_forces();

        Some(self.points.snapshot())
    }

    /// Restore every mass to its construction position with zero velocity
    /// and force. Works in any state and leaves the configuration and the
    /// enabled flag untouched.
    pub fn reset(&mut self) {
        self.points.reset();
        self.observer.on_reset();
    }

    /// Add a wind force to every non-fixed mass for the upcoming step(s).
    pub fn apply_wind(&mut self, wind: Vec3) {
        forces::apply_wind(&mut self.points, wind);
    }

    /// Add a radial explosion force with linear falloff.
    pub fn apply_explosion(&mut self, center: Vec3, radius: f32, force: f32) {
        forces::apply_explosion(&mut self.points, center, radius, force);
    }

    /// Add a force to one mass's accumulator.
    ///
    /// No-op on fixed masses and unknown ids.
    pub fn apply_force(&mut self, id: &str, force: Vec3) {
        if let Some(point) = self.points.get_mut(id) {
            if !point.fixed {
                point.force += force;
            }
        }
    }

    /// Apply an instantaneous impulse to one mass: `velocity += impulse / mass`.
    ///
    /// No-op on fixed masses and unknown ids.
    pub fn apply_impulse(&mut self, id: &str, impulse: Vec3) {
        if let Some(point) = self.points.get_mut(id) {
            if !point.fixed {
                point.velocity += impulse * (1.0 / point.mass);
            }
        }
    }

    /// Set the gravitational acceleration (unclamped).
    pub fn set_gravity(&mut self, gravity: f32) {
        self.gravity = gravity;
        self.observer.on_config_change("gravity", gravity);
    }

    /// Set the velocity damping factor, clamped to `[0, 1]`.
    pub fn set_damping(&mut self, damping: f32) {
        self.damping = damping.clamp(0.0, 1.0);
        self.observer.on_config_change("damping", self.damping);
    }

    /// Set the global spring stiffness, clamped to `[0, 1]`.
    ///
    /// Every spring's stiffness is overwritten with the new global value;
    /// the per-mesh muscle tension scale is not reapplied. This flattening
    /// matches the source system.
    pub fn set_stiffness(&mut self, stiffness: f32) {
        self.stiffness = stiffness.clamp(0.0, 1.0);
        self.springs.set_stiffness(self.stiffness);
        self.observer.on_config_change("stiffness", self.stiffness);
    }

    /// Flip a mass's fixed flag, returning the new value, or `None` when
    /// the id is unknown.
    ///
    /// A newly fixed mass has its velocity and force zeroed so it is
    /// immobile from this moment on.
    pub fn toggle_fixed(&mut self, id: &str) -> Option<bool> {
        let point = self.points.get_mut(id)?;
        let fixed = !point.fixed;
        point.set_fixed(fixed);
        Some(fixed)
    }

    /// Current position snapshot in construction order, available in any
    /// state (renderers poll this while the engine is disabled).
    #[must_use]
    pub fn snapshot(&self) -> Vec<PointState> {
        self.points.snapshot()
    }

    /// Diagnostics for export and UI panels.
    #[must_use]
    pub fn physics_data(&self) -> PhysicsData {
        PhysicsData {
            enabled: self.enabled,
            gravity: self.gravity,
            damping: self.damping,
            stiffness: self.stiffness,
            mass_count: self.points.len(),
            spring_count: self.springs.len(),
            constraint_count: self.constraints.len(),
        }
    }

    /// The engine-owned point set.
    #[must_use]
    pub fn points(&self) -> &MassPointSet {
        &self.points
    }
}
