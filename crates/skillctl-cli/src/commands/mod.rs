use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

use skillctl_agents::{AgentDefinition, AgentRegistry, SkillScope};
use skillctl_config::{ConfigLoader, ConfigWarning, SkillctlConfig, WarningSeverity};

mod agents;
pub(crate) mod hooks;
mod skills;

/// Manage agent skills and validate hooks configuration
#[derive(Parser)]
#[command(name = "skillctl", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to skillctl.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level override (e.g. debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate hooks configuration
    Hooks {
        #[command(subcommand)]
        action: HooksAction,
    },
    /// Find and delete skills
    Skill {
        #[command(subcommand)]
        action: SkillAction,
    },
    /// Inspect the registry of supported AI coding agents
    Agents {
        #[command(subcommand)]
        action: AgentAction,
    },
    /// Show current configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions for bash, zsh, or fish
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Show version and build info
    Version,
}

#[derive(Subcommand)]
enum HooksAction {
    /// Validate the hooks section of a settings file
    Validate {
        /// Settings file, e.g. ~/.claude/settings.json
        file: PathBuf,
        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum SkillAction {
    /// Delete a skill
    Delete {
        /// Skill name (directory name)
        name: String,
        /// Claude Code scope to search (default: user, then project)
        #[arg(short, long, value_enum, conflicts_with_all = ["agents", "all_agents"])]
        scope: Option<ScopeArg>,
        /// Agent(s) to delete from (repeatable)
        #[arg(short = 'a', long = "agent", conflicts_with = "all_agents")]
        agents: Vec<String>,
        /// Delete from every detected agent that has the skill
        #[arg(long)]
        all_agents: bool,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Show where a skill is installed
    Find {
        /// Skill name (directory name)
        name: String,
        /// Agent(s) to search (repeatable)
        #[arg(short = 'a', long = "agent", conflicts_with = "all_agents")]
        agents: Vec<String>,
        /// Search every detected agent
        #[arg(long)]
        all_agents: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum AgentAction {
    /// List all supported agents
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one agent's skill directories
    Show { id: String },
    /// List agents installed on this machine
    Detect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ScopeArg {
    /// ~/.claude/skills
    #[value(alias = "global")]
    User,
    /// ./.claude/skills
    Project,
}

impl From<ScopeArg> for SkillScope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::User => SkillScope::Global,
            ScopeArg::Project => SkillScope::Project,
        }
    }
}

impl Cli {
    pub fn run(self) -> skillctl_core::Result<ExitCode> {
        // Load config first so we can use it for log format
        let config_loader = ConfigLoader::load(self.config.as_deref())?;
        let config = config_loader.get();

        // Resolve log level: --verbose > --quiet > --log-level > config default
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            self.log_level.as_deref().unwrap_or(&config.logging.level)
        };
        init_tracing(log_level, &config.logging.format);

        if !self.quiet {
            let _ = write_config_warnings(&mut std::io::stderr().lock(), config_loader.warnings());
        }
        for info in config_loader.warnings().iter().filter(|w| w.severity == WarningSeverity::Info) {
            debug!("{}", info);
        }

        match self.command {
            Commands::Hooks { action } => match action {
                HooksAction::Validate { file, json } => hooks::cmd_validate(&file, json),
            },
            Commands::Skill { action } => skills::cmd_skill(&config, action),
            Commands::Agents { action } => agents::cmd_agents(&config, action),
            Commands::Config { json } => Self::cmd_config(&config, config_loader.path(), json),
            Commands::Completions { shell } => Self::cmd_completions(shell),
            Commands::Version => Self::cmd_version(),
        }
    }

    fn cmd_config(config: &SkillctlConfig, path: &Path, json: bool) -> skillctl_core::Result<ExitCode> {
        if json {
            println!("{}", serde_json::to_string_pretty(config)?);
        } else {
            println!("# {}", path.display());
            println!(
                "{}",
                toml::to_string_pretty(config)
                    .map_err(|e| skillctl_core::SkillctlError::Config(e.to_string()))?
            );
        }
        Ok(ExitCode::SUCCESS)
    }

    fn cmd_version() -> skillctl_core::Result<ExitCode> {
        println!("skillctl v{}", env!("CARGO_PKG_VERSION"));
        println!("   Target: {}", std::env::consts::ARCH);
        println!("   OS: {}", std::env::consts::OS);
        #[cfg(debug_assertions)]
        println!("   Profile: debug");
        #[cfg(not(debug_assertions))]
        println!("   Profile: release");
        Ok(ExitCode::SUCCESS)
    }

    fn cmd_completions(shell: Shell) -> skillctl_core::Result<ExitCode> {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "skillctl", &mut std::io::stdout());
        Ok(ExitCode::SUCCESS)
    }
}

/// Initialise the global tracing subscriber. Logs go to stderr so stdout only
/// carries command output.
pub(crate) fn init_tracing(level: &str, format: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    // A subscriber may already be installed (e.g. when embedded); keep it.
    let _ = match format {
        "json" => builder.json().with_target(true).try_init(),
        "compact" => builder.compact().with_target(false).try_init(),
        _ => builder.with_target(false).try_init(),
    };
}

/// Print config warnings to `err`. They bypass tracing because the settings
/// being reported may be the ones that configure it.
pub(crate) fn write_config_warnings(err: &mut dyn Write, warnings: &[ConfigWarning]) -> std::io::Result<()> {
    for warning in warnings.iter().filter(|w| w.severity == WarningSeverity::Warning) {
        writeln!(err, "{warning}")?;
    }
    Ok(())
}

/// Built-in agents plus the custom agents from config.
pub(crate) fn build_registry(config: &SkillctlConfig) -> AgentRegistry {
    let mut registry = AgentRegistry::new();
    for (id, agent) in &config.agents {
        registry.register(AgentDefinition {
            id: id.clone(),
            display_name: agent.display_name.clone(),
            project_dir: agent.project_dir.clone(),
            global_dir: agent.global_dir.clone(),
            detect_paths: agent.detect_paths.clone(),
        });
    }
    registry
}
