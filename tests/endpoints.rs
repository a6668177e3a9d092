//
//  bitbucket-cloud-client
//  tests/endpoints.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

use std::time::Duration;

use mockito::Matcher;
use serde_json::json;

use bitbucket_cloud_client::api::cloud::{
    CreateIssueComment, DeleteIssueComment, GetCurrentUser, GetProject, ListIssueComments,
};
use bitbucket_cloud_client::api::common::Field;
use bitbucket_cloud_client::api::models::{Content, IssueComment, Model};
use bitbucket_cloud_client::api::{ApiError, BitbucketClient};
use bitbucket_cloud_client::auth::AuthCredential;

const PROJECT_BODY: &str = r#"{
    "type": "project",
    "key": "LEAR",
    "name": "Learning",
    "is_private": false,
    "description": null,
    "has_publicly_visible_repos": true
}"#;

fn client_for(server: &mockito::ServerGuard) -> BitbucketClient {
    BitbucketClient::new(&format!("{}/2.0", server.url()))
        .unwrap()
        .with_auth(AuthCredential::bearer("tok-123"))
        .with_timeout(Duration::from_secs(5))
}

#[tokio::test]
async fn test_async_send_parses_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/2.0/workspaces/acme/projects/LEAR")
        .match_header("authorization", "Bearer tok-123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(PROJECT_BODY)
        .create_async()
        .await;

    let response = client_for(&server)
        .send(&GetProject {
            workspace: "acme",
            project_key: "LEAR",
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.status, 200);
    assert_eq!(response.header("Content-Type"), Some("application/json"));

    let project = response.into_parsed().unwrap();
    assert_eq!(project.name, Field::Present("Learning".to_string()));
    assert!(project.description.is_null());
    assert!(project.uuid.is_absent());
}

#[test]
fn test_blocking_send_matches_async_outcome() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/2.0/workspaces/acme/projects/LEAR")
        .match_header("authorization", "Bearer tok-123")
        .with_status(200)
        .with_body(PROJECT_BODY)
        .create();

    let response = client_for(&server)
        .send_blocking(&GetProject {
            workspace: "acme",
            project_key: "LEAR",
        })
        .unwrap();

    mock.assert();
    let project = response.parsed.unwrap();
    assert_eq!(project.key.as_option().map(String::as_str), Some("LEAR"));
    assert_eq!(project.has_publicly_visible_repos, Field::Present(true));
}

#[tokio::test]
async fn test_not_found_is_returned_unparsed() {
    let mut server = mockito::Server::new_async().await;
    let body = r#"{"type": "error", "error": {"message": "Project LEAR not found"}}"#;
    server
        .mock("GET", "/2.0/workspaces/acme/projects/LEAR")
        .with_status(404)
        .with_body(body)
        .create_async()
        .await;

    let response = client_for(&server)
        .send(&GetProject {
            workspace: "acme",
            project_key: "LEAR",
        })
        .await
        .unwrap();

    assert_eq!(response.status, 404);
    assert!(response.parsed.is_none());
    assert_eq!(response.content, body.as_bytes());
    assert_eq!(
        response.error_body().unwrap().message(),
        Some("Project LEAR not found")
    );
}

#[tokio::test]
async fn test_query_filter_is_sent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/2.0/repositories/acme/site/issues/42/comments")
        .match_query(Matcher::UrlEncoded("q".into(), "state=open".into()))
        .with_status(200)
        .with_body(r#"{"pagelen": 10, "values": [{"type": "issue_comment", "id": 7}]}"#)
        .create_async()
        .await;

    let response = client_for(&server)
        .send(&ListIssueComments {
            workspace: "acme",
            repo_slug: "site",
            issue_id: "42",
            q: Field::Present("state=open"),
            sort: Field::Absent,
        })
        .await
        .unwrap();

    mock.assert_async().await;
    let page = response.into_parsed().unwrap();
    assert_eq!(page.items().len(), 1);
    assert_eq!(page.items()[0].id, Field::Present(7));
    assert!(!page.has_next());
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/2.0/user")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let err = client_for(&server).send(&GetCurrentUser).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { status: 200, .. }));
}

#[tokio::test]
async fn test_raise_on_unexpected_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/2.0/user")
        .with_status(503)
        .with_body("upstream unavailable")
        .create_async()
        .await;

    let strict = client_for(&server).with_raise_on_unexpected_status(true);
    match strict.send(&GetCurrentUser).await.unwrap_err() {
        ApiError::UnexpectedStatus { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "upstream unavailable");
        }
        other => panic!("unexpected error: {other}"),
    }

    let lenient = client_for(&server);
    let response = lenient.send(&GetCurrentUser).await.unwrap();
    assert_eq!(response.status, 503);
    assert!(response.parsed.is_none());
}

#[tokio::test]
async fn test_create_comment_posts_json_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/2.0/repositories/acme/site/issues/42/comments")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "type": "issue_comment",
            "content": {"raw": "Fixed in a1b2c3d"}
        })))
        .with_status(201)
        .with_body(r#"{"type": "issue_comment", "id": 99, "content": {"raw": "Fixed in a1b2c3d"}}"#)
        .create_async()
        .await;

    let response = client_for(&server)
        .send(&CreateIssueComment {
            workspace: "acme",
            repo_slug: "site",
            issue_id: "42",
            body: IssueComment {
                content: Content::raw("Fixed in a1b2c3d").into(),
                ..IssueComment::new()
            },
        })
        .await
        .unwrap();

    mock.assert_async().await;
    let comment = response.into_parsed().unwrap();
    assert_eq!(comment.id, Field::Present(99));
    assert!(comment.additional_properties().is_empty());
}

#[tokio::test]
async fn test_delete_comment_with_empty_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("DELETE", "/2.0/repositories/acme/site/issues/42/comments/99")
        .with_status(204)
        .create_async()
        .await;

    let response = client_for(&server)
        .send(&DeleteIssueComment {
            workspace: "acme",
            repo_slug: "site",
            issue_id: "42",
            comment_id: 99,
        })
        .await
        .unwrap();

    assert_eq!(response.status, 204);
    assert_eq!(response.parsed, Some(()));
}

#[tokio::test]
async fn test_default_headers_and_cookies_are_sent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/2.0/user")
        .match_header("x-trace", "abc")
        .match_header("cookie", "a=1; b=2")
        .with_status(200)
        .with_body(r#"{"type": "user", "display_name": "Ada"}"#)
        .create_async()
        .await;

    let client = client_for(&server)
        .with_header("X-Trace", "abc")
        .with_cookie("b", "2")
        .with_cookie("a", "1");
    let response = client.send(&GetCurrentUser).await.unwrap();

    mock.assert_async().await;
    assert!(response.is_success());
}

#[tokio::test]
async fn test_redirects_are_not_followed_by_default() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/2.0/user")
        .with_status(302)
        .with_header("location", "/elsewhere")
        .create_async()
        .await;

    let response = client_for(&server).send(&GetCurrentUser).await.unwrap();
    assert_eq!(response.status, 302);
    assert_eq!(response.header("location"), Some("/elsewhere"));
}
