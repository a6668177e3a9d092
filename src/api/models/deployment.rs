//
//  bitbucket-cloud-client
//  api/models/deployment.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Deployment models.
//!
//! A deployment moves a release into an environment. Its `state` is
//! polymorphic on the wire `type` key (undeployed, in progress, completed),
//! and a completed state carries a `status` that is itself polymorphic
//! (successful, failed, stopped).

use serde::{Deserialize, Serialize, Serializer};

use super::{impl_model, serialize_tagged, Account, Model};
use crate::api::common::{string_enum, AdditionalProperties, Field, Timestamp};

string_enum! {
    pub enum DeploymentStateUndeployedName {
        Undeployed => "UNDEPLOYED",
    }
}

string_enum! {
    pub enum DeploymentStateInProgressName {
        InProgress => "IN_PROGRESS",
    }
}

string_enum! {
    pub enum DeploymentStateCompletedName {
        Completed => "COMPLETED",
    }
}

string_enum! {
    pub enum DeploymentStateCompletedStatusSuccessfulName {
        Successful => "SUCCESSFUL",
    }
}

string_enum! {
    pub enum DeploymentStateCompletedStatusFailedName {
        Failed => "FAILED",
    }
}

string_enum! {
    pub enum DeploymentStateCompletedStatusStoppedName {
        Stopped => "STOPPED",
    }
}

/// The environment a deployment targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentEnvironment {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    #[serde(rename = "type")]
    pub object_type: String,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub uuid: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,
}

/// The release (usually a commit built by a pipeline) being deployed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentRelease {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    #[serde(rename = "type")]
    pub object_type: String,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub uuid: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,

    /// Link to the pipeline that produced the release.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub url: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub created_on: Field<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeploymentStateUndeployed {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<DeploymentStateUndeployedName>,

    /// Link to trigger the deployment.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub trigger_url: Field<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeploymentStateInProgress {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<DeploymentStateInProgressName>,

    /// Link to the deployment's pipeline.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub url: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub start_date: Field<Timestamp>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub deployer: Field<Account>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeploymentStateCompleted {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<DeploymentStateCompletedName>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub url: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub start_date: Field<Timestamp>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub completion_date: Field<Timestamp>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub deployer: Field<Account>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub status: Field<DeploymentStateCompletedStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeploymentStateCompletedStatusSuccessful {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<DeploymentStateCompletedStatusSuccessfulName>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeploymentStateCompletedStatusFailed {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<DeploymentStateCompletedStatusFailedName>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeploymentStateCompletedStatusStopped {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<DeploymentStateCompletedStatusStoppedName>,
}

/// Final status of a completed deployment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum DeploymentStateCompletedStatus {
    #[serde(rename = "deployment_state_completed_status_successful")]
    Successful(DeploymentStateCompletedStatusSuccessful),
    #[serde(rename = "deployment_state_completed_status_failed")]
    Failed(DeploymentStateCompletedStatusFailed),
    #[serde(rename = "deployment_state_completed_status_stopped")]
    Stopped(DeploymentStateCompletedStatusStopped),
}

/// State of a deployment, discriminated by the wire `type` key.
///
/// # Example
///
/// ```rust
/// use bitbucket_cloud_client::api::models::{DeploymentState, Model};
/// use serde_json::json;
///
/// let state = DeploymentState::from_value(json!({
///     "type": "deployment_state_undeployed",
///     "name": "UNDEPLOYED"
/// }))
/// .unwrap();
///
/// assert!(matches!(state, DeploymentState::Undeployed(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum DeploymentState {
    #[serde(rename = "deployment_state_undeployed")]
    Undeployed(DeploymentStateUndeployed),
    #[serde(rename = "deployment_state_in_progress")]
    InProgress(DeploymentStateInProgress),
    #[serde(rename = "deployment_state_completed")]
    Completed(DeploymentStateCompleted),
}

impl DeploymentStateCompletedStatus {
    /// The wire `type` literal of this status.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Successful(_) => "deployment_state_completed_status_successful",
            Self::Failed(_) => "deployment_state_completed_status_failed",
            Self::Stopped(_) => "deployment_state_completed_status_stopped",
        }
    }
}

impl Serialize for DeploymentStateCompletedStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tag = self.type_name();
        match self {
            Self::Successful(status) => serialize_tagged(serializer, tag, status),
            Self::Failed(status) => serialize_tagged(serializer, tag, status),
            Self::Stopped(status) => serialize_tagged(serializer, tag, status),
        }
    }
}

impl Model for DeploymentStateCompletedStatus {
    fn additional_properties(&self) -> &AdditionalProperties {
        match self {
            Self::Successful(status) => &status.additional_properties,
            Self::Failed(status) => &status.additional_properties,
            Self::Stopped(status) => &status.additional_properties,
        }
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        match self {
            Self::Successful(status) => &mut status.additional_properties,
            Self::Failed(status) => &mut status.additional_properties,
            Self::Stopped(status) => &mut status.additional_properties,
        }
    }
}

impl DeploymentState {
    /// The wire `type` literal of this state.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Undeployed(_) => "deployment_state_undeployed",
            Self::InProgress(_) => "deployment_state_in_progress",
            Self::Completed(_) => "deployment_state_completed",
        }
    }
}

impl Serialize for DeploymentState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tag = self.type_name();
        match self {
            Self::Undeployed(state) => serialize_tagged(serializer, tag, state),
            Self::InProgress(state) => serialize_tagged(serializer, tag, state),
            Self::Completed(state) => serialize_tagged(serializer, tag, state),
        }
    }
}

impl Model for DeploymentState {
    fn additional_properties(&self) -> &AdditionalProperties {
        match self {
            Self::Undeployed(state) => &state.additional_properties,
            Self::InProgress(state) => &state.additional_properties,
            Self::Completed(state) => &state.additional_properties,
        }
    }

    fn additional_properties_mut(&mut self) -> &mut AdditionalProperties {
        match self {
            Self::Undeployed(state) => &mut state.additional_properties,
            Self::InProgress(state) => &mut state.additional_properties,
            Self::Completed(state) => &mut state.additional_properties,
        }
    }
}

/// A deployment of a release to an environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deployment {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    #[serde(rename = "type")]
    pub object_type: String,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub uuid: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub state: Field<DeploymentState>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub environment: Field<DeploymentEnvironment>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub release: Field<DeploymentRelease>,
}

impl Deployment {
    /// Whether the deployment finished with a successful status.
    pub fn succeeded(&self) -> bool {
        matches!(
            self.state.as_option(),
            Some(DeploymentState::Completed(DeploymentStateCompleted {
                status: Field::Present(DeploymentStateCompletedStatus::Successful(_)),
                ..
            }))
        )
    }
}

impl_model!(
    DeploymentEnvironment,
    DeploymentRelease,
    DeploymentStateUndeployed,
    DeploymentStateInProgress,
    DeploymentStateCompleted,
    DeploymentStateCompletedStatusSuccessful,
    DeploymentStateCompletedStatusFailed,
    DeploymentStateCompletedStatusStopped,
    Deployment,
);
