//
//  bitbucket-cloud-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod create_repo;

pub use create_repo::{CreateRepoCommand, PROJECT_KEY, WORKSPACE};

use clap::{Parser, Subcommand};

/// bb-cloud - Talk to Bitbucket Cloud with OAuth client credentials
#[derive(Parser, Debug)]
#[command(
    name = "bb-cloud",
    version,
    about = "Talk to Bitbucket Cloud with OAuth client credentials",
    long_about = "bb-cloud authenticates with the OAuth consumer in BITBUCKET_CLIENT_ID and\n\
                  BITBUCKET_CLIENT_SECRET and calls the Bitbucket Cloud REST API.",
    propagate_version = true,
    after_help = "Use 'bb-cloud <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up the LEAR project that new repositories are created under
    CreateRepo(CreateRepoCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_create_repo() {
        let cli = Cli::try_parse_from(["bb-cloud", "create-repo"]).unwrap();
        assert!(matches!(cli.command, Commands::CreateRepo(_)));
    }

    #[test]
    fn test_rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["bb-cloud", "create-repo", "--name", "x"]).is_err());
        assert!(Cli::try_parse_from(["bb-cloud"]).is_err());
    }
}
