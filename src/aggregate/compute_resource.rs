// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Functional ComputeResource Aggregate
//!
//! Implements event sourcing pattern with pure functions:
//! - Immutable state
//! - Pure event application (fold)
//! - Command handlers as pure functions
//! - No side effects, no mutations
//!
//! # Architecture
//!
//! ```text
//! Command → handle_command() → Result<Event, Error>
//!                                    ↓
//! Events → apply_event() → New State
//! ```

use cim_domain::EntityId;
use cim_domain_location::LocationMarker;
use cim_domain_organization::Organization;
use cim_domain_person::PersonId;
use cim_domain_policy::PolicyId;
use cim_domain_spaces::ConceptId;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Hostname, ResourceType};
use crate::events::compute_resource::*;
use crate::events::infrastructure::InfrastructureEvent;

/// Immutable ComputeResource State
///
/// This is the aggregate root state reconstructed from events.
/// All fields are public for read access, but the struct is immutable.
///
/// # Reconstruction
///
/// ```rust,ignore
/// let state = ComputeResourceState::from_events(&events);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputeResourceState {
    /// Aggregate ID
    pub id: Uuid,

    /// Hostname
    pub hostname: Hostname,

    /// Resource type
    pub resource_type: ResourceType,

    /// Organization ownership
    pub organization_id: Option<EntityId<Organization>>,

    /// Physical location
    pub location_id: Option<EntityId<LocationMarker>>,

    /// Owner/primary contact
    pub owner_id: Option<PersonId>,

    /// Applicable policies
    pub policy_ids: Vec<PolicyId>,

    /// Account concept
    pub account_concept_id: Option<ConceptId>,

    /// Hardware manufacturer
    pub manufacturer: Option<String>,

    /// Hardware model
    pub model: Option<String>,

    /// Serial number
    pub serial_number: Option<String>,

    /// Asset tag
    pub asset_tag: Option<String>,

    /// Custom metadata
    pub metadata: Vec<(String, String)>,

    /// Current status
    pub status: ResourceStatus,

    /// When this aggregate was created (first event timestamp)
    pub created_at: Option<DateTime<Utc>>,

    /// When this aggregate was last modified (latest event timestamp)
    pub updated_at: Option<DateTime<Utc>>,
}

impl ComputeResourceState {
    /// Create default empty state
    ///
    /// Used as initial state for event folding.
    pub fn default_for(id: Uuid) -> Self {
        Self {
            id,
            hostname: Hostname::new("uninitialized").unwrap(),
            resource_type: ResourceType::PhysicalServer,
            organization_id: None,
            location_id: None,
            owner_id: None,
            policy_ids: Vec::new(),
            account_concept_id: None,
            manufacturer: None,
            model: None,
            serial_number: None,
            asset_tag: None,
            metadata: Vec::new(),
            status: ResourceStatus::Provisioning,
            created_at: None,
            updated_at: None,
        }
    }

    /// Reconstruct state from event stream
    ///
    /// This is the core event sourcing fold operation:
    /// ```text
    /// State = fold(Events, InitialState, apply_event)
    /// ```
    pub fn from_events(events: &[ComputeResourceEvent]) -> Self {
        // Get aggregate ID from first event
        let aggregate_id = events
            .first()
            .map(|e| e.aggregate_id())
            .unwrap_or_else(Uuid::now_v7);

        let initial = Self::default_for(aggregate_id);

        events.iter().fold(initial, |state, event| {
            apply_event(state, event)
        })
    }

    /// Check if aggregate is initialized (has events)
    pub fn is_initialized(&self) -> bool {
        self.created_at.is_some()
    }

    /// Get current version (event count)
    pub fn version(&self, events: &[ComputeResourceEvent]) -> u64 {
        events.len() as u64
    }
}

/// Apply event to state (pure function)
///
/// This is the core of event sourcing - reconstructing state by applying events.
/// Each event type has a specific transformation on the state.
///
/// # Invariants
/// - Function is pure (no side effects)
/// - Same event + same state = same result
/// - Never fails (events are facts that happened)
///
/// # Parameters
/// - `state`: Current state before event
/// - `event`: Event to apply
///
/// # Returns
/// New state after applying event
pub fn apply_event(state: ComputeResourceState, event: &ComputeResourceEvent) -> ComputeResourceState {
    use ComputeResourceEvent::*;

    match event {
        ResourceRegistered(e) => {
            ComputeResourceState {
                id: e.aggregate_id,
                hostname: e.hostname.clone(),
                resource_type: e.resource_type.clone(),
                created_at: Some(e.timestamp),
                updated_at: Some(e.timestamp),
                status: ResourceStatus::Provisioning,
                ..state
            }
        }

        OrganizationAssigned(e) => {
            ComputeResourceState {
                organization_id: Some(e.organization_id.clone()),
                updated_at: Some(e.timestamp),
                ..state
            }
        }

        LocationAssigned(e) => {
            ComputeResourceState {
                location_id: Some(e.location_id.clone()),
                updated_at: Some(e.timestamp),
                ..state
            }
        }

        OwnerAssigned(e) => {
            ComputeResourceState {
                owner_id: Some(e.owner_id.clone()),
                updated_at: Some(e.timestamp),
                ..state
            }
        }

        PolicyAdded(e) => {
            let mut policy_ids = state.policy_ids.clone();
            if !policy_ids.contains(&e.policy_id) {
                policy_ids.push(e.policy_id.clone());
            }
            ComputeResourceState {
                policy_ids,
                updated_at: Some(e.timestamp),
                ..state
            }
        }

        PolicyRemoved(e) => {
            let policy_ids: Vec<_> = state
                .policy_ids
                .iter()
                .filter(|&id| id != &e.policy_id)
                .copied()
                .collect();
            ComputeResourceState {
                policy_ids,
                updated_at: Some(e.timestamp),
                ..state
            }
        }

        AccountConceptAssigned(e) => {
            ComputeResourceState {
                account_concept_id: Some(e.concept_id.clone()),
                updated_at: Some(e.timestamp),
                ..state
            }
        }

        AccountConceptCleared(e) => {
            ComputeResourceState {
                account_concept_id: None,
                updated_at: Some(e.timestamp),
                ..state
            }
        }

        HardwareDetailsSet(e) => {
            ComputeResourceState {
                manufacturer: e.manufacturer.clone(),
                model: e.model.clone(),
                serial_number: e.serial_number.clone(),
                updated_at: Some(e.timestamp),
                ..state
            }
        }

        AssetTagAssigned(e) => {
            ComputeResourceState {
                asset_tag: Some(e.asset_tag.clone()),
                updated_at: Some(e.timestamp),
                ..state
            }
        }

        MetadataUpdated(e) => {
            let mut metadata = state.metadata.clone();

            // Update or add the key-value pair
            if let Some(pos) = metadata.iter().position(|(k, _)| k == &e.key) {
                metadata[pos] = (e.key.clone(), e.value.clone());
            } else {
                metadata.push((e.key.clone(), e.value.clone()));
            }

            ComputeResourceState {
                metadata,
                updated_at: Some(e.timestamp),
                ..state
            }
        }

        StatusChanged(e) => {
            ComputeResourceState {
                status: e.to_status,
                updated_at: Some(e.timestamp),
                ..state
            }
        }
    }
}

/// Apply InfrastructureEvent to state (wrapper for polymorphic events)
pub fn apply_infrastructure_event(
    state: ComputeResourceState,
    event: &InfrastructureEvent,
) -> ComputeResourceState {
    match event {
        InfrastructureEvent::ComputeResource(compute_event) => {
            apply_event(state, compute_event)
        }
    }
}
