// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Lifecycle State Machine
//!
//! Formal FSM implementation for ComputeResource lifecycle management.
//! Uses the generic StateMachine trait from parent module.
//!
//! # State Machine Type
//!
//! This is a **Mealy Machine**: outputs depend on both state and input.
//!
//! # States
//!
//! - Provisioning: Initial setup
//! - Active: Operational
//! - Maintenance: Under maintenance
//! - Decommissioned: Retired (terminal)
//!
//! # Inputs (Lifecycle Commands)
//!
//! - Activate: Provisioning → Active
//! - BeginMaintenance: Active → Maintenance
//! - EndMaintenance: Maintenance → Active
//! - Decommission: Any → Decommissioned
//! - FailedProvision: Provisioning → Decommissioned
//!
//! # Outputs
//!
//! - Warnings for state-specific constraints
//! - Metadata about transition

use super::{StateMachine, TransitionError, TransitionResult};
use crate::events::ResourceStatus;

/// Lifecycle command (FSM input)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleCommand {
    /// Activate a provisioning resource
    Activate,

    /// Begin maintenance on active resource
    BeginMaintenance,

    /// End maintenance, return to active
    EndMaintenance,

    /// Decommission resource (from any state)
    Decommission,

    /// Failed provision, move to decommissioned
    FailedProvision,

    /// Stay in current state (idempotent update)
    Update,
}

/// Transition output with metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionOutput {
    /// Warnings generated during transition
    pub warnings: Vec<String>,

    /// Whether this is a critical transition
    pub is_critical: bool,
}

impl TransitionOutput {
    /// Create output with no warnings
    pub fn ok() -> Self {
        Self {
            warnings: Vec::new(),
            is_critical: false,
        }
    }

    /// Create output with warnings
    pub fn with_warnings(warnings: Vec<String>) -> Self {
        Self {
            warnings,
            is_critical: false,
        }
    }

    /// Create output for critical transition
    pub fn critical(warnings: Vec<String>) -> Self {
        Self {
            warnings,
            is_critical: true,
        }
    }
}

impl StateMachine for ResourceStatus {
    type Input = LifecycleCommand;
    type Output = TransitionOutput;

    fn transition(&self, input: &Self::Input) -> TransitionResult<(Self, Self::Output)> {
        use LifecycleCommand::*;
        use ResourceStatus::*;

        match (self, input) {
            // Provisioning transitions
            (Provisioning, Activate) => {
                Ok((Active, TransitionOutput::ok()))
            }
            (Provisioning, FailedProvision) => Ok((
                Decommissioned,
                TransitionOutput::critical(vec!["Provisioning failed".to_string()]),
            )),
            (Provisioning, Decommission) => Ok((
                Decommissioned,
                TransitionOutput::with_warnings(vec![
                    "Decommissioning during provisioning".to_string()
                ]),
            )),
            (Provisioning, Update) => Ok((Provisioning, TransitionOutput::ok())),

            // Active transitions
            (Active, BeginMaintenance) => {
                Ok((Maintenance, TransitionOutput::ok()))
            }
            (Active, Decommission) => Ok((
                Decommissioned,
                TransitionOutput::critical(vec!["Decommissioning active resource".to_string()]),
            )),
            (Active, Update) => Ok((Active, TransitionOutput::ok())),

            // Maintenance transitions
            (Maintenance, EndMaintenance) => {
                Ok((Active, TransitionOutput::ok()))
            }
            (Maintenance, Decommission) => Ok((
                Decommissioned,
                TransitionOutput::with_warnings(vec![
                    "Decommissioning during maintenance".to_string()
                ]),
            )),
            (Maintenance, Update) => Ok((Maintenance, TransitionOutput::ok())),

            // Decommissioned transitions (terminal state)
            (Decommissioned, Update) => Ok((Decommissioned, TransitionOutput::ok())),
            (Decommissioned, _) => Err(TransitionError::InvalidTransition {
                from: format!("{:?}", self),
                to: "any state".to_string(),
            }),

            // Invalid transitions
            (Provisioning, BeginMaintenance) => Err(TransitionError::InvalidTransition {
                from: "Provisioning".to_string(),
                to: "Maintenance".to_string(),
            }),
            (Provisioning, EndMaintenance) => Err(TransitionError::InvalidTransition {
                from: "Provisioning".to_string(),
                to: "Active (via EndMaintenance)".to_string(),
            }),
            (Active, Activate) => Err(TransitionError::BusinessRuleViolation(
                "Already active".to_string(),
            )),
            (Active, FailedProvision) => Err(TransitionError::BusinessRuleViolation(
                "Cannot fail provision on active resource".to_string(),
            )),
            (Active, EndMaintenance) => Err(TransitionError::InvalidTransition {
                from: "Active".to_string(),
                to: "Active (via EndMaintenance)".to_string(),
            }),
            (Maintenance, Activate) => Err(TransitionError::BusinessRuleViolation(
                "Already was activated".to_string(),
            )),
            (Maintenance, FailedProvision) => Err(TransitionError::BusinessRuleViolation(
                "Cannot fail provision on resource in maintenance".to_string(),
            )),
            (Maintenance, BeginMaintenance) => Err(TransitionError::BusinessRuleViolation(
                "Already in maintenance".to_string(),
            )),
        }
    }

    fn valid_inputs(&self) -> Vec<Self::Input> {
        use LifecycleCommand::*;
        use ResourceStatus::*;

        match self {
            Provisioning => vec![Activate, FailedProvision, Decommission, Update],
            Active => vec![BeginMaintenance, Decommission, Update],
            Maintenance => vec![EndMaintenance, Decommission, Update],
            Decommissioned => vec![Update],
        }
    }
}

/// Helper to check if transition is allowed
pub fn is_valid_lifecycle_transition(
    from: ResourceStatus,
    to: ResourceStatus,
) -> bool {
    from.can_transition_to(&to)
}
