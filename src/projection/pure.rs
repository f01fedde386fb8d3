// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Projection System
//!
//! This module provides a pure functional approach to projections where:
//! - Projections are pure functions: `(State, Event) → (State, Effects)`
//! - Side effects are returned as data, not performed
//! - Replay is trivial: just fold events through the projection function
//!
//! # Architecture
//!
//! ```text
//! Pure Projection Function          Side Effect Executor
//! ─────────────────────────         ──────────────────────
//!
//! (State, Event)                    Effects
//!      │                                 │
//!      ▼                                 ▼
//! ┌──────────────┐                 ┌──────────────┐
//! │   project()  │    Effects      │   execute()  │
//! │  pure func   │ ─────────────>  │  async I/O   │
//! └──────────────┘                 └──────────────┘
//!      │                                 │
//!      ▼                                 ▼
//! (New State, Effects)              Updated Database
//! ```
//!
//! # Benefits
//!
//! 1. **Testability**: Pure functions are easy to test
//! 2. **Replay**: Trivial to rebuild projections from events
//! 3. **Composition**: Multiple projections can be composed
//! 4. **Time Travel**: Can project to any point in event history
//!
//! # Example
//!
//! ```rust,ignore
//! use cim_infrastructure::projection::pure::*;
//!
//! #[derive(Clone)]
//! struct MyState {
//!     count: i32,
//! }
//!
//! fn my_projection(state: MyState, event: String) -> (MyState, Vec<SideEffect>) {
//!     let new_state = MyState { count: state.count + 1 };
//!     let effects = vec![
//!         SideEffect::DatabaseWrite {
//!             collection: "events".to_string(),
//!             data: serde_json::json!({ "event": event }),
//!         }
//!     ];
//!     (new_state, effects)
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Debug;

/// Side effects that can be produced by projections
///
/// These are returned as data structures, not performed immediately.
/// An executor can interpret these and perform the actual I/O.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SideEffect {
    /// Write data to a database
    DatabaseWrite {
        /// Target collection/table name
        collection: String,
        /// Data to write (JSON)
        data: Value,
    },

    /// Update existing database record
    DatabaseUpdate {
        /// Target collection/table name
        collection: String,
        /// Record ID
        id: String,
        /// Updates to apply (JSON)
        updates: Value,
    },

    /// Delete from database
    DatabaseDelete {
        /// Target collection/table name
        collection: String,
        /// Record ID
        id: String,
    },

    /// Execute a database query
    DatabaseQuery {
        /// Query string
        query: String,
        /// Query parameters
        params: Vec<Value>,
    },

    /// Log a message
    Log {
        /// Log level
        level: LogLevel,
        /// Message
        message: String,
    },

    /// Emit a derived event
    EmitEvent {
        /// Event type
        event_type: String,
        /// Event data
        data: Value,
    },
}

/// Log levels for logging side effects
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum LogLevel {
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warning level
    Warn,
    /// Error level
    Error,
}

/// Pure projection function type
///
/// Takes current state and an event, returns new state and side effects.
///
/// # Type Parameters
///
/// - `S`: Projection state type (must be Clone)
/// - `E`: Event type
///
/// # Example
///
/// ```rust,ignore
/// fn my_projection(state: MyState, event: MyEvent) -> (MyState, Vec<SideEffect>) {
///     // Pure logic - no I/O!
///     let new_state = state.apply(&event);
///     let effects = vec![
///         SideEffect::DatabaseWrite { /* ... */ }
///     ];
///     (new_state, effects)
/// }
/// ```
pub type PureProjection<S, E> = fn(S, E) -> (S, Vec<SideEffect>);

/// Trait for pure projection state
///
/// Projection state must be:
/// - Cloneable (for functional updates)
/// - Debuggable (for logging and testing)
/// - Default constructible (for initialization)
pub trait ProjectionState: Clone + Debug + Default {}

// Blanket implementation for all types satisfying the bounds
impl<T: Clone + Debug + Default> ProjectionState for T {}

/// Fold a sequence of events through a pure projection
///
/// This is the fundamental operation for projections. Given an initial state
/// and a sequence of events, fold them through the projection function to
/// produce the final state and all accumulated side effects.
///
/// # Arguments
///
/// * `projection` - Pure projection function
/// * `initial_state` - Starting state
/// * `events` - Events to project
///
/// # Returns
///
/// Tuple of (final_state, all_effects)
///
/// # Example
///
/// ```rust,ignore
/// let (final_state, effects) = fold_projection(
///     my_projection,
///     MyState::default(),
///     vec![event1, event2, event3],
/// );
/// ```
pub fn fold_projection<S, E>(
    projection: PureProjection<S, E>,
    initial_state: S,
    events: Vec<E>,
) -> (S, Vec<SideEffect>)
where
    S: Clone,
{
    events.into_iter().fold(
        (initial_state, Vec::new()),
        |(state, mut all_effects), event| {
            let (new_state, mut effects) = projection(state, event);
            all_effects.append(&mut effects);
            (new_state, all_effects)
        },
    )
}

/// Replay events through a projection to rebuild state
///
/// This is identical to `fold_projection` but with a more specific name
/// that emphasizes the replay use case.
///
/// # Arguments
///
/// * `projection` - Pure projection function
/// * `initial_state` - Starting state
/// * `events` - Events to replay
///
/// # Returns
///
/// Tuple of (rebuilt_state, all_effects)
pub fn replay_projection<S, E>(
    projection: PureProjection<S, E>,
    initial_state: S,
    events: Vec<E>,
) -> (S, Vec<SideEffect>)
where
    S: Clone,
{
    fold_projection(projection, initial_state, events)
}

/// Projection result type
///
/// Convenience alias for projection results.
pub type ProjectionResult<S> = Result<(S, Vec<SideEffect>), ProjectionError>;

/// Errors that can occur during projection
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectionError {
    /// Invalid event format
    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    /// State transition error
    #[error("Invalid state transition: {0}")]
    InvalidTransition(String),

    /// Projection logic error
    #[error("Projection error: {0}")]
    ProjectionFailed(String),
}
