//
//  bitbucket-cloud-client
//  api/cloud/workspaces.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Workspace operations.

use crate::api::endpoint::Endpoint;
use crate::api::models::Workspace;
use crate::api::request::HttpMethod;

/// `GET /workspaces/{workspace}`
///
/// `workspace` is the slug or the UUID in curly braces.
#[derive(Debug, Clone)]
pub struct GetWorkspace<'a> {
    pub workspace: &'a str,
}

impl Endpoint for GetWorkspace<'_> {
    type Output = Workspace;
    const METHOD: HttpMethod = HttpMethod::Get;
    const DOCUMENTED: &'static [u16] = &[404];

    fn path(&self) -> String {
        format!("/workspaces/{}", self.workspace)
    }
}
