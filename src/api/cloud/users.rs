//
//  bitbucket-cloud-client
//  api/cloud/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Account operations.

use crate::api::endpoint::Endpoint;
use crate::api::models::Account;
use crate::api::request::HttpMethod;

/// `GET /user`: the account the credentials belong to.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetCurrentUser;

impl Endpoint for GetCurrentUser {
    type Output = Account;
    const METHOD: HttpMethod = HttpMethod::Get;
    const DOCUMENTED: &'static [u16] = &[401];

    fn path(&self) -> String {
        "/user".to_string()
    }
}

/// `GET /users/{selected_user}`
///
/// `selected_user` is an Atlassian account ID or a UUID in curly braces.
#[derive(Debug, Clone)]
pub struct GetUser<'a> {
    pub selected_user: &'a str,
}

impl Endpoint for GetUser<'_> {
    type Output = Account;
    const METHOD: HttpMethod = HttpMethod::Get;
    const DOCUMENTED: &'static [u16] = &[404];

    fn path(&self) -> String {
        format!("/users/{}", self.selected_user)
    }
}
