//
//  bitbucket-cloud-client
//  api/cloud/pipelines.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Pipeline step operations.
//!
//! # Notes
//!
//! - Pipeline and step UUIDs are passed with their curly braces
//! - Logs are not covered here; steps carry a `log` link in their bag

use crate::api::common::Paginated;
use crate::api::endpoint::Endpoint;
use crate::api::models::PipelineStep;
use crate::api::request::HttpMethod;

/// `GET /repositories/{workspace}/{repo_slug}/pipelines/{pipeline_uuid}/steps`
#[derive(Debug, Clone)]
pub struct ListPipelineSteps<'a> {
    pub workspace: &'a str,
    pub repo_slug: &'a str,
    pub pipeline_uuid: &'a str,
}

impl Endpoint for ListPipelineSteps<'_> {
    type Output = Paginated<PipelineStep>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!(
            "/repositories/{}/{}/pipelines/{}/steps",
            self.workspace, self.repo_slug, self.pipeline_uuid
        )
    }
}

/// `GET /repositories/{workspace}/{repo_slug}/pipelines/{pipeline_uuid}/steps/{step_uuid}`
#[derive(Debug, Clone)]
pub struct GetPipelineStep<'a> {
    pub workspace: &'a str,
    pub repo_slug: &'a str,
    pub pipeline_uuid: &'a str,
    pub step_uuid: &'a str,
}

impl Endpoint for GetPipelineStep<'_> {
    type Output = PipelineStep;
    const METHOD: HttpMethod = HttpMethod::Get;
    const DOCUMENTED: &'static [u16] = &[404];

    fn path(&self) -> String {
        format!(
            "/repositories/{}/{}/pipelines/{}/steps/{}",
            self.workspace, self.repo_slug, self.pipeline_uuid, self.step_uuid
        )
    }
}
