// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for stencil

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stencil")]
#[command(about = "A template expression engine for strings and structured records")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template against a JSON context
    Render {
        #[arg(help = "Template text (reads --file when omitted)")]
        template: Option<String>,

        #[arg(short, long, help = "Read the template from a file")]
        file: Option<PathBuf>,

        #[arg(short = 'C', long, help = "Path to a JSON context file")]
        context: Option<PathBuf>,

        #[arg(short = 'V', long = "var", help = "Context variables (key=value)")]
        vars: Vec<String>,

        #[arg(
            long,
            help = "Treat the template as a JSON document and render every string field"
        )]
        object: bool,
    },

    /// Check template syntax without rendering
    Validate {
        #[arg(help = "Template text (reads --file when omitted)")]
        template: Option<String>,

        #[arg(short, long, help = "Read the template from a file")]
        file: Option<PathBuf>,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse key=value variable overrides
    pub fn parse_variables(vars: &[String]) -> Result<HashMap<String, String>> {
        let mut variables = HashMap::new();
        for var in vars {
            let (key, value) = var
                .split_once('=')
                .ok_or_else(|| anyhow!("invalid variable '{}', expected key=value", var))?;
            variables.insert(key.to_string(), value.to_string());
        }
        Ok(variables)
    }
}
