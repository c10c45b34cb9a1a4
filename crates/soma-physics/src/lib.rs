//! Soma Physics - Mass-Spring Body Deformation Engine
//!
//! Real-time mass-spring simulation that deforms a topologically fixed
//! anatomical mesh under gravity, elastic spring forces, anatomical distance
//! constraints, ground collision, and ad-hoc field forces (wind, explosion).
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                        PhysicsEngine                             │
//! │                                                                  │
//! │  step(dt):                                                       │
//! │    gravity + spring forces ──▶ integrate ──▶ constraint          │
//! │    (forces.rs)                 (integrator)   relaxation         │
//! │                                               (constraint.rs)    │
//! │                                                    │             │
//! │    position snapshot ◀── clear forces ◀── ground collision       │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is single-threaded and synchronous: one driving loop calls
//! [`PhysicsEngine::step`] once per animation tick, together with the
//! force/impulse/configuration methods. Rendering and input handling live
//! outside this crate and consume the per-step snapshot.
//!
//! # Example
//!
//! ```
//! use soma_mesh::{MeshTopology, MeshVertex};
//! use soma_physics::PhysicsEngine;
//!
//! let topology = MeshTopology::new(
//!     vec![
//!         MeshVertex::joint("neck_base_center", 0.0, 60.0, 0.0),
//!         MeshVertex::surface("spine_center", 0.0, 40.0, 0.0),
//!     ],
//!     vec![("neck_base_center".into(), "spine_center".into())],
//! );
//!
//! let mut engine = PhysicsEngine::from_topology(&topology);
//! engine.enable();
//! let snapshot = engine.step(1.0 / 60.0).unwrap();
//! assert_eq!(snapshot.len(), 2);
//! ```

#![warn(missing_docs)]

pub mod constraint;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod observer;
pub mod point;
pub mod spring;
pub mod types;

// Re-export primary API
pub use constraint::{ConstraintSet, DistanceConstraint};
pub use engine::{BuildReport, EngineConfig, PhysicsEngine};
pub use observer::{EngineObserver, NoOpObserver, TracingObserver};
pub use point::{MassPoint, MassPointSet};
pub use spring::{Spring, SpringNetwork};
pub use types::{PhysicsData, PointState, Vec3};

/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Mass per unit of vertex weight.
pub const MASS_SCALE: f32 = 10.0;

/// Muscle tension scale applied to spring stiffness when the topology
/// carries no hint.
pub const DEFAULT_MUSCLE_TENSION: f32 = 0.3;

/// Height of the ground plane.
pub const GROUND_Y: f32 = -50.0;

/// Fraction of vertical velocity preserved (sign-flipped) on ground impact.
pub const GROUND_RESTITUTION: f32 = 0.7;

/// Lateral velocity damping applied on ground impact.
pub const GROUND_FRICTION: f32 = 0.9;

/// Relaxation passes over the constraint set per simulation step.
pub const CONSTRAINT_ITERATIONS: usize = 3;
