//
//  bitbucket-cloud-client
//  api/cloud/deployments.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Deployment operations.

use crate::api::common::Paginated;
use crate::api::endpoint::Endpoint;
use crate::api::models::Deployment;
use crate::api::request::HttpMethod;

/// `GET /repositories/{workspace}/{repo_slug}/deployments`
#[derive(Debug, Clone)]
pub struct ListDeployments<'a> {
    pub workspace: &'a str,
    pub repo_slug: &'a str,
}

impl Endpoint for ListDeployments<'_> {
    type Output = Paginated<Deployment>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/repositories/{}/{}/deployments", self.workspace, self.repo_slug)
    }
}

/// `GET /repositories/{workspace}/{repo_slug}/deployments/{deployment_uuid}`
#[derive(Debug, Clone)]
pub struct GetDeployment<'a> {
    pub workspace: &'a str,
    pub repo_slug: &'a str,
    pub deployment_uuid: &'a str,
}

impl Endpoint for GetDeployment<'_> {
    type Output = Deployment;
    const METHOD: HttpMethod = HttpMethod::Get;
    const DOCUMENTED: &'static [u16] = &[404];

    fn path(&self) -> String {
        format!(
            "/repositories/{}/{}/deployments/{}",
            self.workspace, self.repo_slug, self.deployment_uuid
        )
    }
}
