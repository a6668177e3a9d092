//
//  bitbucket-cloud-client
//  api/cloud/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Project operations.

use crate::api::common::{Field, Paginated};
use crate::api::endpoint::Endpoint;
use crate::api::models::Project;
use crate::api::request::{HttpMethod, QueryParams};

/// `GET /workspaces/{workspace}/projects/{project_key}`
#[derive(Debug, Clone)]
pub struct GetProject<'a> {
    pub workspace: &'a str,
    pub project_key: &'a str,
}

impl Endpoint for GetProject<'_> {
    type Output = Project;
    const METHOD: HttpMethod = HttpMethod::Get;
    const DOCUMENTED: &'static [u16] = &[401, 403, 404];

    fn path(&self) -> String {
        format!("/workspaces/{}/projects/{}", self.workspace, self.project_key)
    }
}

/// `GET /workspaces/{workspace}/projects`
#[derive(Debug, Clone)]
pub struct ListProjects<'a> {
    pub workspace: &'a str,
    pub page: Field<i64>,
    pub pagelen: Field<i64>,
}

impl Endpoint for ListProjects<'_> {
    type Output = Paginated<Project>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const DOCUMENTED: &'static [u16] = &[404];

    fn path(&self) -> String {
        format!("/workspaces/{}/projects", self.workspace)
    }

    fn query(&self) -> QueryParams {
        QueryParams::new()
            .with("page", &self.page)
            .with("pagelen", &self.pagelen)
    }
}
