use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Overrides;
use crate::utils::version::VERSION;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "gen")]
#[command(about = "An another static site generator.", long_about = None)]
#[command(version = VERSION, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Read files from DIR
    #[arg(short, long, visible_alias = "src", value_name = "DIR", default_value = ".", global = true)]
    pub source: PathBuf,

    /// Write files to DIR (defaults to ./site, or the destination in gen.yml)
    #[arg(short, long, visible_alias = "dst", value_name = "DIR", global = true)]
    pub destination: Option<PathBuf>,

    /// Minify pages and static files
    #[arg(short, long, visible_alias = "min", default_value_t = false, global = true)]
    pub minify: bool,

    /// Only print warnings and errors
    #[arg(short, long, default_value_t = false, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print every file as it is processed
    #[arg(short, long, default_value_t = false, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Settings given on the command line, to layer over `gen.yml`
    pub fn overrides(&self) -> Overrides {
        let addr = match &self.command {
            Commands::Serve { addr } => addr.clone(),
            _ => None,
        };

        Overrides {
            destination: self.destination.clone(),
            addr,
            minify: self.minify,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

/// Subcommands for the CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Perform a one-off site build
    #[command(alias = "b")]
    Build,

    /// Remove all generated files
    #[command(alias = "c")]
    Clean,

    /// Build and serve the site locally
    Serve {
        /// Listen at HOST:PORT (defaults to localhost:3000)
        #[arg(short, long, value_name = "HOST:PORT")]
        addr: Option<String>,
    },

    /// Generate a new site
    New {
        /// Directory to create the site in
        #[arg(value_name = "DIRECTORY")]
        path: PathBuf,

        /// Write into the directory even if it is not empty
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_and_aliases() {
        let cli = Cli::try_parse_from(["gen", "--src", "blog", "--min", "b", "--dst", "out"]).unwrap();

        assert!(matches!(cli.command, Commands::Build));
        assert_eq!(cli.source, PathBuf::from("blog"));
        assert_eq!(cli.destination, Some(PathBuf::from("out")));
        assert!(cli.minify);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["gen", "clean"]).unwrap();

        assert!(matches!(cli.command, Commands::Clean));
        assert_eq!(cli.source, PathBuf::from("."));
        assert_eq!(cli.destination, None);
        assert!(!cli.minify && !cli.quiet && !cli.verbose);
    }

    #[test]
    fn test_serve_addr_override() {
        let cli = Cli::try_parse_from(["gen", "-q", "serve", "-a", "0.0.0.0:8080"]).unwrap();
        let overrides = cli.overrides();

        assert_eq!(overrides.addr.as_deref(), Some("0.0.0.0:8080"));
        assert!(overrides.quiet);
        assert_eq!(overrides.destination, None);
    }

    #[test]
    fn test_new_requires_directory() {
        assert!(Cli::try_parse_from(["gen", "new"]).is_err());

        let cli = Cli::try_parse_from(["gen", "new", "blog", "--force"]).unwrap();
        match cli.command {
            Commands::New { path, force } => {
                assert_eq!(path, PathBuf::from("blog"));
                assert!(force);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["gen", "-q", "-v", "build"]).is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["gen"]).is_err());
    }
}
