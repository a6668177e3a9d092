//
//  bitbucket-cloud-client
//  api/models/issue.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Cloud issue tracker models.
//!
//! # Issue States
//!
//! * `submitted` - Reported, awaiting review
//! * `new` - Newly created, not yet triaged
//! * `open` - Acknowledged and being worked on
//! * `resolved` - Fixed or addressed
//! * `on hold` - Temporarily paused
//! * `invalid` - Not a valid issue
//! * `duplicate` - Duplicate of another issue
//! * `wontfix` - Will not be fixed
//! * `closed` - Completed
//!
//! # Issue Priorities
//!
//! * `trivial`, `minor`, `major`, `critical`, `blocker`
//!
//! # Issue Kinds
//!
//! * `bug`, `enhancement`, `proposal`, `task`
//!
//! # Example
//!
//! ```rust
//! use bitbucket_cloud_client::api::common::Field;
//! use bitbucket_cloud_client::api::models::{Content, IssueComment};
//!
//! let comment = IssueComment {
//!     content: Content::raw("Reproduced on main.").into(),
//!     ..IssueComment::new()
//! };
//! assert!(comment.id.is_absent());
//! assert!(matches!(comment.content, Field::Present(_)));
//! ```

use serde::{Deserialize, Serialize};

use super::{impl_model, Account, Links, Repository};
use crate::api::common::{string_enum, AdditionalProperties, Field, Timestamp};

string_enum! {
    /// Markup language of a [`Content`] block.
    pub enum ContentMarkup {
        Markdown => "markdown",
        Creole => "creole",
        Plaintext => "plaintext",
    }
}

string_enum! {
    /// Workflow state of an issue.
    pub enum IssueState {
        Submitted => "submitted",
        New => "new",
        Open => "open",
        Resolved => "resolved",
        OnHold => "on hold",
        Invalid => "invalid",
        Duplicate => "duplicate",
        Wontfix => "wontfix",
        Closed => "closed",
    }
}

string_enum! {
    /// Type/category of an issue.
    pub enum IssueKind {
        Bug => "bug",
        Enhancement => "enhancement",
        Proposal => "proposal",
        Task => "task",
    }
}

string_enum! {
    /// Priority level of an issue.
    pub enum IssuePriority {
        Trivial => "trivial",
        Minor => "minor",
        Major => "major",
        Critical => "critical",
        Blocker => "blocker",
    }
}

/// Text in several representations: the raw source and rendered HTML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// The text as it was typed in.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub raw: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub markup: Field<ContentMarkup>,

    /// The user's content rendered as HTML.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub html: Field<String>,
}

impl Content {
    /// Content carrying only raw text, as sent when creating comments.
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            raw: Field::Present(text.into()),
            ..Self::default()
        }
    }
}

/// An issue in a repository's issue tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    #[serde(rename = "type")]
    pub object_type: String,

    /// Sequential identifier within the repository.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub id: Field<i64>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub repository: Field<Repository>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub title: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub reporter: Field<Account>,

    /// Nullable: `null` when the issue is unassigned.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub assignee: Field<Account>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub created_on: Field<Timestamp>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub updated_on: Field<Timestamp>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub edited_on: Field<Timestamp>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub state: Field<IssueState>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub kind: Field<IssueKind>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub priority: Field<IssuePriority>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub content: Field<Content>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub votes: Field<i64>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub links: Field<Links>,
}

/// A comment on an issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueComment {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    #[serde(rename = "type")]
    pub object_type: String,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub id: Field<i64>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub created_on: Field<Timestamp>,

    /// Nullable: `null` until the comment is edited.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub updated_on: Field<Timestamp>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub content: Field<Content>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub user: Field<Account>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub deleted: Field<bool>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub issue: Field<Box<Issue>>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub links: Field<Links>,
}

impl IssueComment {
    /// An empty `issue_comment` with every optional field absent.
    pub fn new() -> Self {
        Self {
            additional_properties: AdditionalProperties::default(),
            object_type: "issue_comment".to_string(),
            id: Field::Absent,
            created_on: Field::Absent,
            updated_on: Field::Absent,
            content: Field::Absent,
            user: Field::Absent,
            deleted: Field::Absent,
            issue: Field::Absent,
            links: Field::Absent,
        }
    }
}

impl Default for IssueComment {
    fn default() -> Self {
        Self::new()
    }
}

impl_model!(Content, Issue, IssueComment);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Model;
    use serde_json::json;

    fn issue_payload() -> serde_json::Value {
        json!({
            "type": "issue",
            "id": 42,
            "title": "Login button not responding",
            "reporter": {"type": "user", "display_name": "Ada"},
            "assignee": null,
            "created_on": "2024-05-01T10:00:00.250000+00:00",
            "updated_on": "2024-05-02T08:30:00Z",
            "state": "on hold",
            "kind": "bug",
            "priority": "major",
            "content": {"raw": "Nothing happens.", "markup": "markdown", "html": "<p>Nothing happens.</p>"},
            "votes": 0
        })
    }

    #[test]
    fn test_issue_round_trip_keeps_null_assignee() {
        let payload = issue_payload();
        let issue = Issue::from_value(payload.clone()).unwrap();

        assert!(issue.assignee.is_null());
        assert_eq!(issue.state, Field::Present(IssueState::OnHold));
        assert_eq!(issue.votes, Field::Present(0));
        assert_eq!(issue.to_value().unwrap(), payload);
    }

    #[test]
    fn test_comment_timestamps_round_trip() {
        let payload = json!({
            "type": "issue_comment",
            "id": 7,
            "created_on": "2024-05-01T10:00:00.000000+00:00",
            "updated_on": null,
            "content": {"raw": "Same here."}
        });

        let comment = IssueComment::from_value(payload.clone()).unwrap();
        assert!(comment.updated_on.is_null());
        assert_eq!(comment.to_value().unwrap(), payload);
    }

    #[test]
    fn test_unknown_issue_state_fails_parse() {
        let mut payload = issue_payload();
        payload["state"] = json!("ON HOLD");
        assert!(Issue::from_value(payload).is_err());
    }

    #[test]
    fn test_absent_optional_fields_are_omitted() {
        let issue = Issue::from_value(json!({"type": "issue"})).unwrap();
        assert!(issue.title.is_absent());
        assert_eq!(issue.to_value().unwrap(), json!({"type": "issue"}));
    }

    #[test]
    fn test_new_comment_serializes_only_what_was_set() {
        let comment = IssueComment {
            content: Content::raw("LGTM").into(),
            ..IssueComment::new()
        };
        assert_eq!(
            comment.to_value().unwrap(),
            json!({"type": "issue_comment", "content": {"raw": "LGTM"}})
        );
    }

    #[test]
    fn test_enum_literals() {
        assert_eq!(IssueState::OnHold.to_string(), "on hold");
        assert_eq!("wontfix".parse::<IssueState>().unwrap(), IssueState::Wontfix);
        assert_eq!(IssuePriority::ALL.len(), 5);
        assert_eq!(ContentMarkup::Creole.as_str(), "creole");
    }
}
