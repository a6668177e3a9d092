//
//  bitbucket-cloud-client
//  cli/create_repo.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! `create-repo` command
//!
//! Resolves the project new repositories belong to. Repository creation
//! itself is not wired up yet: the command stops after the project lookup
//! and prints what it found.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use crate::api::cloud::GetProject;
use crate::api::models::Model;
use crate::api::{format_api_error, BitbucketClient};
use crate::auth::{AuthCredential, TokenCache};
use crate::config::Config;

/// Workspace the command operates in.
pub const WORKSPACE: &str = "learning-lab";

/// Key of the project repositories are created under.
pub const PROJECT_KEY: &str = "LEAR";

/// Look up the target project
#[derive(Args, Debug)]
pub struct CreateRepoCommand {}

impl CreateRepoCommand {
    pub async fn run(&self, config: &Config, tokens: &TokenCache) -> Result<()> {
        let token = tokens
            .get_or_fetch(&config.client_id, &config.client_secret)
            .await?;

        let client = BitbucketClient::new(&config.api_base_url)?
            .with_auth(AuthCredential::bearer(&token.access_token))
            .with_timeout(config.timeout);

        info!("Looking up project {} in {}", PROJECT_KEY, WORKSPACE);

        let response = client
            .send(&GetProject {
                workspace: WORKSPACE,
                project_key: PROJECT_KEY,
            })
            .await?;

        let status = response.status;
        let body = response.text();

        match response.into_parsed() {
            Some(project) => {
                let value = project.to_value().context("Failed to serialize project")?;
                println!("{}", serde_json::to_string_pretty(&value)?);
                Ok(())
            }
            None => Err(format_api_error(status, &body)
                .context(format!("Failed to look up project {}/{}", WORKSPACE, PROJECT_KEY))),
        }
    }
}
