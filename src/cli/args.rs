// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for cookie-consent

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::fragments::FragmentKind;

#[derive(Parser)]
#[command(name = "cookie-consent")]
#[command(about = "Render Google Tag Manager snippets and cookie-consent fragments")]
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

    #[arg(
        short = 't',
        long = "template-dir",
        global = true,
        help = "Directory searched for template overrides (repeatable)"
    )]
    pub template_dirs: Vec<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a single fragment to stdout
    Render {
        #[arg(help = "Fragment to render: gtm_script, gtm_noscript, cookie_banner, cookie_modal")]
        fragment: FragmentKind,

        #[arg(short, long, help = "GTM container id, overriding the configured GTM_ID")]
        gtm_id: Option<String>,
    },

    /// Render a page template with the fragment helpers available
    Page {
        #[arg(help = "Page template file (defaults to the bundled demo page)")]
        template: Option<PathBuf>,

        #[arg(short, long, help = "GTM container id exposed to the page as `gtm_id`")]
        gtm_id: Option<String>,

        #[arg(long, help = "Page title exposed to the page as `title`")]
        title: Option<String>,

        #[arg(short, long, help = "Write the page to a file instead of stdout")]
        output: Option<PathBuf>,
    },

    /// List available fragments
    List,

    /// Load and compile every fragment template, including overrides
    Check,

    /// Write the bundled static assets to a directory
    ExportStatic {
        #[arg(help = "Static root to write into")]
        out_dir: PathBuf,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
