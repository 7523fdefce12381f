// ABOUTME: Main application orchestration for the cookie-consent CLI
// ABOUTME: Coordinates between CLI arguments, configuration, and command execution

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use super::commands;
use super::{Args, Commands, Config};

pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Initialize logging based on configuration
    pub fn init_logging(&self, verbose: bool, no_color: bool) -> Result<()> {
        let log_level = if verbose {
            "debug"
        } else {
            self.config.logging.level.as_str()
        };

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        // stdout carries rendered markup, so logs go to stderr
        match self.config.logging.format.as_str() {
            "compact" => {
                tracing_subscriber::fmt()
                    .compact()
                    .with_env_filter(env_filter)
                    .with_ansi(!no_color)
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_ansi(!no_color)
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }

        debug!("Logging initialized with level: {}", log_level);
        Ok(())
    }

    /// Run the application with parsed arguments
    pub async fn run(&mut self, args: Args) -> Result<()> {
        self.init_logging(args.verbose, args.no_color)?;

        info!("Starting cookie-consent v{}", env!("CARGO_PKG_VERSION"));
        debug!("Configuration loaded from: {:?}", args.config);

        self.config.prepend_template_dirs(args.template_dirs);
        debug!("Template directories: {:?}", self.config.settings.template_dirs);

        match args.command {
            Commands::Render { fragment, gtm_id } => {
                commands::render_fragment(fragment, gtm_id, &self.config).await
            }

            Commands::Page {
                template,
                gtm_id,
                title,
                output,
            } => commands::render_page(template, gtm_id, title, output, &self.config).await,

            Commands::List => commands::list_fragments().await,

            Commands::Check => commands::check_templates(&self.config).await,

            Commands::ExportStatic { out_dir } => commands::export_static(out_dir).await,
        }
    }

    /// Create application from already parsed arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        let config = Config::load(args.config.clone())?;
        Ok(Self::new(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_app_creation() {
        let app = App::new(Config::default());
        assert_eq!(app.config().logging.level, "warn");
        assert!(app.config().settings.template_dirs.is_empty());
    }

    #[test]
    fn test_app_from_args_with_config_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("cookie-consent.yaml");

        let config_content = r#"
static_url: /assets/
logging:
  level: debug
  format: compact
"#;

        fs::write(&config_path, config_content).unwrap();

        let args = Args {
            command: Commands::List,
            verbose: false,
            config: Some(config_path),
            no_color: true,
            template_dirs: Vec::new(),
        };

        let app = App::from_args(&args).unwrap();
        assert_eq!(app.config().settings.static_url, "/assets/");
        assert_eq!(app.config().logging.level, "debug");
        assert_eq!(app.config().logging.format, "compact");
    }
}
