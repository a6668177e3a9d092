//
//  bitbucket-cloud-client
//  api/models/account.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Accounts, commit authors and the HATEOAS links attached to most objects.

use serde::{Deserialize, Serialize};

use super::impl_model;
use crate::api::common::{AdditionalProperties, Field, Timestamp};

/// A single hyperlink.
///
/// Bitbucket objects carry links to related resources, e.g. `self`, `html`,
/// `avatar`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// The URL of the linked resource.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub href: Field<String>,

    /// Optional descriptive name for the link.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,
}

/// The `links` object found on most resources.
///
/// Only the three link kinds every resource shares are declared; the rest
/// (`repositories`, `clone`, `comments`, ...) stay in the bag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Links {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    #[serde(rename = "self", default, skip_serializing_if = "Field::is_absent")]
    pub self_link: Field<Link>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub html: Field<Link>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub avatar: Field<Link>,
}

impl Links {
    /// The browser URL of the resource, if Bitbucket sent one.
    pub fn html_href(&self) -> Option<&str> {
        self.html
            .as_option()
            .and_then(|link| link.href.as_option())
            .map(String::as_str)
    }
}

/// A Bitbucket account: a user or a team.
///
/// # Example
///
/// ```rust
/// use bitbucket_cloud_client::api::models::{Account, Model};
/// use serde_json::json;
///
/// let account = Account::from_value(json!({
///     "type": "user",
///     "uuid": "{d301aafa-d676-4ee0-88be-962be7417567}",
///     "display_name": "Ada Lovelace",
///     "has_2fa_enabled": null
/// }))
/// .unwrap();
///
/// assert_eq!(account.display_name.as_option().unwrap(), "Ada Lovelace");
/// assert!(account.has_2fa_enabled.is_null());
/// assert!(account.nickname.is_absent());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    /// Object type, e.g. `user` or `team`.
    #[serde(rename = "type")]
    pub object_type: String,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub uuid: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub display_name: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub nickname: Field<String>,

    /// Atlassian account identifier.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub account_id: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub account_status: Field<String>,

    /// Nullable: Bitbucket sends `null` when the value is hidden.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub has_2fa_enabled: Field<bool>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub created_on: Field<Timestamp>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub links: Field<Links>,
}

impl Account {
    pub fn new(object_type: impl Into<String>) -> Self {
        Self {
            additional_properties: AdditionalProperties::default(),
            object_type: object_type.into(),
            uuid: Field::Absent,
            display_name: Field::Absent,
            nickname: Field::Absent,
            account_id: Field::Absent,
            account_status: Field::Absent,
            has_2fa_enabled: Field::Absent,
            created_on: Field::Absent,
            links: Field::Absent,
        }
    }
}

/// The author of a commit.
///
/// `raw` is the author line from the commit itself; `user` is only present
/// when Bitbucket could map it to an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,

    #[serde(rename = "type")]
    pub object_type: String,

    /// The raw author value from the repository, e.g. `Ada <ada@example.com>`.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub raw: Field<String>,

    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub user: Field<Account>,
}

impl_model!(Link, Links, Account, Author);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Model;
    use serde_json::json;

    #[test]
    fn test_account_round_trip() {
        let payload = json!({
            "type": "user",
            "uuid": "{d301aafa-d676-4ee0-88be-962be7417567}",
            "display_name": "Ada Lovelace",
            "nickname": "ada",
            "account_id": "557058:1234",
            "account_status": "active",
            "has_2fa_enabled": false,
            "created_on": "2018-09-24T14:45:11.245823+00:00",
            "links": {
                "self": {"href": "https://api.bitbucket.org/2.0/users/ada"},
                "avatar": {"href": "https://avatar.example/ada.png"},
                "html": {"href": "https://bitbucket.org/ada/"}
            }
        });

        let account = Account::from_value(payload.clone()).unwrap();
        assert!(account.additional_properties().is_empty());
        assert_eq!(account.to_value().unwrap(), payload);
    }

    #[test]
    fn test_created_on_keeps_wire_text() {
        for created_on in [
            "2018-09-24T14:45:11.245823+00:00",
            "2021-03-04T05:06:07.120000+00:00",
            "2021-03-04T05:06:07.500000Z",
        ] {
            let payload = json!({"type": "user", "created_on": created_on});
            let account = Account::from_value(payload.clone()).unwrap();
            assert_eq!(account.to_value().unwrap(), payload);
        }
    }

    #[test]
    fn test_created_on_exposes_parsed_time() {
        let account = Account::from_value(json!({
            "type": "user",
            "created_on": "2018-09-24T14:45:11.245823+00:00"
        }))
        .unwrap();

        let created = account.created_on.as_option().unwrap().datetime();
        assert_eq!(created.timestamp(), 1537800311);
        assert_eq!(created.timestamp_subsec_micros(), 245823);
    }

    #[test]
    fn test_malformed_created_on_fails() {
        assert!(Account::from_value(json!({"type": "user", "created_on": "last week"})).is_err());
    }

    #[test]
    fn test_unknown_link_kinds_stay_in_links_bag() {
        let payload = json!({
            "self": {"href": "https://api.bitbucket.org/2.0/x"},
            "clone": [{"href": "git@bitbucket.org:acme/site.git", "name": "ssh"}]
        });

        let links = Links::from_value(payload.clone()).unwrap();
        assert!(links.additional_properties().contains("clone"));
        assert!(!links.additional_properties().contains("self"));
        assert_eq!(links.html_href(), None);
        assert_eq!(links.to_value().unwrap(), payload);
    }

    #[test]
    fn test_author_without_user() {
        let author = Author::from_value(json!({
            "type": "author",
            "raw": "Ada <ada@example.com>"
        }))
        .unwrap();
        assert!(author.user.is_absent());
        assert_eq!(author.raw.as_option().unwrap(), "Ada <ada@example.com>");
    }

    #[test]
    fn test_missing_required_type_fails() {
        assert!(Account::from_value(json!({"display_name": "Ada"})).is_err());
    }
}
