//
//  bitbucket-cloud-client
//  api/cloud/issues.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Issue tracker operations.
//!
//! # Example
//!
//! ```rust
//! use bitbucket_cloud_client::api::cloud::ListIssueComments;
//! use bitbucket_cloud_client::api::common::Field;
//! use bitbucket_cloud_client::api::Endpoint;
//!
//! let endpoint = ListIssueComments {
//!     workspace: "acme",
//!     repo_slug: "site",
//!     issue_id: "42",
//!     q: Field::Present("state=open"),
//!     sort: Field::Absent,
//! };
//!
//! assert_eq!(endpoint.path(), "/repositories/acme/site/issues/42/comments");
//! assert_eq!(endpoint.query().get("q"), Some("state=open"));
//! ```

use serde_json::Value;

use crate::api::common::{Field, Paginated};
use crate::api::endpoint::Endpoint;
use crate::api::models::{Issue, IssueComment, Model};
use crate::api::request::{HttpMethod, QueryParams};

/// `GET /repositories/{workspace}/{repo_slug}/issues`
#[derive(Debug, Clone)]
pub struct ListIssues<'a> {
    pub workspace: &'a str,
    pub repo_slug: &'a str,
    pub q: Field<&'a str>,
    pub sort: Field<&'a str>,
    pub page: Field<i64>,
    pub pagelen: Field<i64>,
}

impl Endpoint for ListIssues<'_> {
    type Output = Paginated<Issue>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const DOCUMENTED: &'static [u16] = &[404];

    fn path(&self) -> String {
        format!("/repositories/{}/{}/issues", self.workspace, self.repo_slug)
    }

    fn query(&self) -> QueryParams {
        QueryParams::new()
            .with("q", &self.q)
            .with("sort", &self.sort)
            .with("page", &self.page)
            .with("pagelen", &self.pagelen)
    }
}

/// `GET /repositories/{workspace}/{repo_slug}/issues/{issue_id}`
#[derive(Debug, Clone)]
pub struct GetIssue<'a> {
    pub workspace: &'a str,
    pub repo_slug: &'a str,
    pub issue_id: &'a str,
}

impl Endpoint for GetIssue<'_> {
    type Output = Issue;
    const METHOD: HttpMethod = HttpMethod::Get;
    const DOCUMENTED: &'static [u16] = &[403, 404, 410];

    fn path(&self) -> String {
        format!(
            "/repositories/{}/{}/issues/{}",
            self.workspace, self.repo_slug, self.issue_id
        )
    }
}

/// `GET /repositories/{workspace}/{repo_slug}/issues/{issue_id}/comments`
#[derive(Debug, Clone)]
pub struct ListIssueComments<'a> {
    pub workspace: &'a str,
    pub repo_slug: &'a str,
    pub issue_id: &'a str,
    pub q: Field<&'a str>,
    pub sort: Field<&'a str>,
}

impl Endpoint for ListIssueComments<'_> {
    type Output = Paginated<IssueComment>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!(
            "/repositories/{}/{}/issues/{}/comments",
            self.workspace, self.repo_slug, self.issue_id
        )
    }

    fn query(&self) -> QueryParams {
        QueryParams::new().with("q", &self.q).with("sort", &self.sort)
    }
}

/// `GET /repositories/{workspace}/{repo_slug}/issues/{issue_id}/comments/{comment_id}`
#[derive(Debug, Clone)]
pub struct GetIssueComment<'a> {
    pub workspace: &'a str,
    pub repo_slug: &'a str,
    pub issue_id: &'a str,
    pub comment_id: i64,
}

impl Endpoint for GetIssueComment<'_> {
    type Output = IssueComment;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!(
            "/repositories/{}/{}/issues/{}/comments/{}",
            self.workspace, self.repo_slug, self.issue_id, self.comment_id
        )
    }
}

/// `POST /repositories/{workspace}/{repo_slug}/issues/{issue_id}/comments`
///
/// Only `content.raw` is required in `body`; everything else is assigned
/// by Bitbucket.
#[derive(Debug, Clone)]
pub struct CreateIssueComment<'a> {
    pub workspace: &'a str,
    pub repo_slug: &'a str,
    pub issue_id: &'a str,
    pub body: IssueComment,
}

impl Endpoint for CreateIssueComment<'_> {
    type Output = IssueComment;
    const METHOD: HttpMethod = HttpMethod::Post;
    const SUCCESS: &'static [u16] = &[201];
    const DOCUMENTED: &'static [u16] = &[400, 403, 404];

    fn path(&self) -> String {
        format!(
            "/repositories/{}/{}/issues/{}/comments",
            self.workspace, self.repo_slug, self.issue_id
        )
    }

    fn body(&self) -> Result<Option<Value>, serde_json::Error> {
        self.body.to_value().map(Some)
    }
}

/// `DELETE /repositories/{workspace}/{repo_slug}/issues/{issue_id}/comments/{comment_id}`
#[derive(Debug, Clone)]
pub struct DeleteIssueComment<'a> {
    pub workspace: &'a str,
    pub repo_slug: &'a str,
    pub issue_id: &'a str,
    pub comment_id: i64,
}

impl Endpoint for DeleteIssueComment<'_> {
    type Output = ();
    const METHOD: HttpMethod = HttpMethod::Delete;
    const SUCCESS: &'static [u16] = &[204];

    fn path(&self) -> String {
        format!(
            "/repositories/{}/{}/issues/{}/comments/{}",
            self.workspace, self.repo_slug, self.issue_id, self.comment_id
        )
    }

    fn decode(_body: &[u8]) -> Result<(), serde_json::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::BitbucketClient;
    use crate::api::response::{map_response, RawResponse};
    use std::collections::BTreeMap;

    fn comments(q: Field<&'static str>) -> ListIssueComments<'static> {
        ListIssueComments {
            workspace: "acme",
            repo_slug: "site",
            issue_id: "42",
            q,
            sort: Field::Absent,
        }
    }

    #[test]
    fn test_comment_listing_without_filter() {
        let client = BitbucketClient::cloud().unwrap();
        let request = client.build_request(&comments(Field::Absent)).unwrap();

        assert_eq!(
            request.url,
            format!("{}/repositories/acme/site/issues/42/comments", client.base_url())
        );
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_comment_listing_with_filter() {
        let client = BitbucketClient::cloud().unwrap();
        let request = client
            .build_request(&comments(Field::Present("state=open")))
            .unwrap();

        assert_eq!(
            request.query.to_map(),
            BTreeMap::from([("q".to_string(), "state=open".to_string())])
        );
    }

    #[test]
    fn test_issue_paths() {
        let get = GetIssue {
            workspace: "acme",
            repo_slug: "site",
            issue_id: "7",
        };
        assert_eq!(get.path(), "/repositories/acme/site/issues/7");

        let comment = GetIssueComment {
            workspace: "acme",
            repo_slug: "site",
            issue_id: "7",
            comment_id: 900,
        };
        assert_eq!(comment.path(), "/repositories/acme/site/issues/7/comments/900");
    }

    #[test]
    fn test_delete_comment_ignores_empty_body() {
        let raw = RawResponse {
            status: 204,
            headers: Vec::new(),
            body: Vec::new(),
        };
        let response = map_response::<DeleteIssueComment>(raw, true).unwrap();
        assert_eq!(response.parsed, Some(()));
    }

    #[test]
    fn test_get_issue_404_is_documented() {
        let raw = RawResponse {
            status: 404,
            headers: Vec::new(),
            body: br#"{"type": "error", "error": {"message": "No such issue"}}"#.to_vec(),
        };
        let response = map_response::<GetIssue>(raw, true).unwrap();
        assert!(response.parsed.is_none());
        assert_eq!(response.status, 404);
    }
}
