//
//  bitbucket-cloud-client
//  api/models/pipeline.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Bitbucket Pipelines step models.
//!
//! # Step States
//!
//! A step's `state` is polymorphic on its `type` key:
//!
//! | `type` | `name` |
//! |--------|--------|
//! | `pipeline_step_state_pending` | `PENDING` |
//! | `pipeline_step_state_ready` | `READY` |
//! | `pipeline_step_state_in_progress` | `IN_PROGRESS` |
//! | `pipeline_step_state_completed` | `COMPLETED` |
//!
//! A completed step also carries a `result` whose name is one of
//! `SUCCESSFUL`, `FAILED`, `ERROR`, `STOPPED`, `NOT_RUN` or `EXPIRED`.

use serde::{Deserialize, Serialize, Serializer};

use super::{impl_model, serialize_tagged, Links, Model};
use crate::api::common::{string_enum, AdditionalProperties, Field, Timestamp};

string_enum! {
    pub enum PipelineStepStatePendingName {
        Pending => "PENDING",
    }
}

string_enum! {
    pub enum PipelineStepStateReadyName {
        Ready => "READY",
    }
}

string_enum! {
    pub enum PipelineStepStateInProgressName {
        InProgress => "IN_PROGRESS",
    }
}

string_enum! {
    pub enum PipelineStepStateCompletedName {
        Completed => "COMPLETED",
    }
}

string_enum! {
    /// Outcome of a completed step.
    pub enum CompletedResultName {
        Successful => "SUCCESSFUL",
        Failed => "FAILED",
        Error => "ERROR",
        Stopped => "STOPPED",
        NotRun => "NOT_RUN",
        Expired => "EXPIRED",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineStepStatePending {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<PipelineStepStatePendingName>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineStepStateReady {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<PipelineStepStateReadyName>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineStepStateInProgress {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<PipelineStepStateInProgressName>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineStepStateCompleted {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<PipelineStepStateCompletedName>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub result: Field<PipelineStepStateCompletedResult>,
}

/// The result attached to a completed step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineStepStateCompletedResult {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    #[serde(rename = "type")]
    pub object_type: String,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<CompletedResultName>,
}

/// State of a pipeline step, discriminated by the wire `type` key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum PipelineStepState {
    #[serde(rename = "pipeline_step_state_pending")]
    Pending(PipelineStepStatePending),
    #[serde(rename = "pipeline_step_state_ready")]
    Ready(PipelineStepStateReady),
    #[serde(rename = "pipeline_step_state_in_progress")]
    InProgress(PipelineStepStateInProgress),
    #[serde(rename = "pipeline_step_state_completed")]
    Completed(PipelineStepStateCompleted),
}

impl PipelineStepState {
    /// The wire `type` literal of this state.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Pending(_) => "pipeline_step_state_pending",
            Self::Ready(_) => "pipeline_step_state_ready",
            Self::InProgress(_) => "pipeline_step_state_in_progress",
            Self::Completed(_) => "pipeline_step_state_completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

impl Serialize for PipelineStepState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tag = self.type_name();
        match self {
            Self::Pending(state) => serialize_tagged(serializer, tag, state),
            Self::Ready(state) => serialize_tagged(serializer, tag, state),
            Self::InProgress(state) => serialize_tagged(serializer, tag, state),
            Self::Completed(state) => serialize_tagged(serializer, tag, state),
        }
    }
}

impl Model for PipelineStepState {
    fn additional_properties(&self) -> &AdditionalProperties {
        match self {
            Self::Pending(state) => &state.additional_properties,
            Self::Ready(state) => &state.additional_properties,
            Self::InProgress(state) => &state.additional_properties,
            Self::Completed(state) => &state.additional_properties,
        }
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        match self {
            Self::Pending(state) => &mut state.additional_properties,
            Self::Ready(state) => &mut state.additional_properties,
            Self::InProgress(state) => &mut state.additional_properties,
            Self::Completed(state) => &mut state.additional_properties,
        }
    }
}

/// A single step of a pipeline run.
///
/// # Example
///
/// ```rust
/// use bitbucket_cloud_client::api::models::{Model, PipelineStep, PipelineStepState};
/// use serde_json::json;
///
/// let step = PipelineStep::from_value(json!({
///     "type": "pipeline_step",
///     "name": "Build",
///     "state": {"type": "pipeline_step_state_ready", "name": "READY"}
/// }))
/// .unwrap();
///
/// assert!(matches!(
///     step.state.as_option(),
///     Some(PipelineStepState::Ready(_))
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineStep {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    #[serde(rename = "type")]
    pub object_type: String,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub uuid: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,

    /// Nullable: `null` until the step starts.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub started_on: Field<Timestamp>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub completed_on: Field<Timestamp>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub state: Field<PipelineStepState>,

    /// Maximum run time in minutes.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub max_time: Field<i64>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub run_number: Field<i64>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub duration_in_seconds: Field<i64>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub links: Field<Links>,
}

impl_model!(
    PipelineStepStatePending,
    PipelineStepStateReady,
    PipelineStepStateInProgress,
    PipelineStepStateCompleted,
    PipelineStepStateCompletedResult,
    PipelineStep,
);
