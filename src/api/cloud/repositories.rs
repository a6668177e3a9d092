//
//  bitbucket-cloud-client
//  api/cloud/repositories.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Repository operations.

use crate::api::common::{Field, Paginated};
use crate::api::endpoint::Endpoint;
use crate::api::models::{Repository, RepositoryRole};
use crate::api::request::{HttpMethod, QueryParams};

/// `GET /repositories/{workspace}/{repo_slug}`
#[derive(Debug, Clone)]
pub struct GetRepository<'a> {
    pub workspace: &'a str,
    pub repo_slug: &'a str,
}

impl Endpoint for GetRepository<'_> {
    type Output = Repository;
    const METHOD: HttpMethod = HttpMethod::Get;
    const DOCUMENTED: &'static [u16] = &[403, 404];

    fn path(&self) -> String {
        format!("/repositories/{}/{}", self.workspace, self.repo_slug)
    }
}

/// `GET /repositories/{workspace}`
///
/// # Query Parameters
///
/// * `role` - Only repositories where the caller has this role
/// * `q` - Filter expression, e.g. `is_private = true`
/// * `sort` - Field to sort by, `-` prefix for descending
#[derive(Debug, Clone)]
pub struct ListRepositories<'a> {
    pub workspace: &'a str,
    pub role: Field<RepositoryRole>,
    pub q: Field<&'a str>,
    pub sort: Field<&'a str>,
}

impl Endpoint for ListRepositories<'_> {
    type Output = Paginated<Repository>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const DOCUMENTED: &'static [u16] = &[404];

    fn path(&self) -> String {
        format!("/repositories/{}", self.workspace)
    }

    fn query(&self) -> QueryParams {
        QueryParams::new()
            .with("role", &self.role)
            .with("q", &self.q)
            .with("sort", &self.sort)
    }
}
