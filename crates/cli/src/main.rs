use clap::{Parser, Subcommand};
use dns_console_application::services::failure_surface::{failure_surface, FailureSurface};
use dns_console_domain::{
    AutoUpdateConfig, CliOverrides, DomainError, LogFormat, OverrideAddress, SortDirection,
    SortField, SortState,
};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

mod bootstrap;
mod di;
mod render;

const EXIT_LOGIN: i32 = 2;
const EXIT_NOTICE: i32 = 1;

#[derive(Parser)]
#[command(name = "dns-console")]
#[command(version)]
#[command(about = "Operator console for a filtering DNS resolver")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Base URL of the resolver's web server
    #[arg(short = 'u', long)]
    base_url: Option<String>,

    /// Bearer token for the management API
    #[arg(short = 't', long, env = "DNS_CONSOLE_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log output format (text, json)
    #[arg(long, value_parser = parse_log_format)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch and print every console section
    Show {
        /// Sort the hit table by this column, flipping the configured direction
        #[arg(long, value_parser = parse_sort_field)]
        sort: Option<SortField>,

        /// Force a direction instead of flipping
        #[arg(long, value_parser = parse_sort_direction)]
        direction: Option<SortDirection>,
    },
    /// Manage the allow-list
    Allow {
        #[command(subcommand)]
        action: AllowAction,
    },
    /// Manage local address overrides
    Override {
        #[command(subcommand)]
        action: OverrideAction,
    },
    /// Configure the periodic filter rebuild
    AutoUpdate {
        #[command(subcommand)]
        action: AutoUpdateAction,
    },
    /// Rebuild the filter now and wait until the new one is live
    UpdateFilter,
}

#[derive(Subcommand)]
enum AllowAction {
    Add { domain: String },
    Remove { domain: String },
}

#[derive(Subcommand)]
enum OverrideAction {
    Set {
        domain: String,
        #[arg(value_parser = parse_address)]
        address: OverrideAddress,
    },
    Remove {
        domain: String,
    },
}

#[derive(Subcommand)]
enum AutoUpdateAction {
    /// Rebuild every SECONDS seconds
    Set { seconds: u64 },
    Disable,
}

fn parse_sort_field(s: &str) -> Result<SortField, String> {
    SortField::from_str(s).ok_or_else(|| format!("unknown sort field '{}'", s))
}

fn parse_sort_direction(s: &str) -> Result<SortDirection, String> {
    SortDirection::from_str(s).ok_or_else(|| format!("unknown sort direction '{}'", s))
}

fn parse_log_format(s: &str) -> Result<LogFormat, String> {
    LogFormat::from_str(s).ok_or_else(|| format!("unknown log format '{}'", s))
}

fn parse_address(s: &str) -> Result<OverrideAddress, String> {
    s.parse::<OverrideAddress>().map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        base_url: cli.base_url.clone(),
        token: cli.token.clone(),
        log_level: cli.log_level.clone(),
        log_format: cli.log_format,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    let use_cases = di::UseCases::new(&config)?;

    match run(&use_cases, cli.command).await {
        Ok(output) => {
            print!("{}", output);
            Ok(())
        }
        Err(e) => match failure_surface(&e, config.presentation.login_on_any_failure) {
            FailureSurface::Login => {
                eprintln!("{}", e);
                eprintln!("Provide a valid token with --token or DNS_CONSOLE_TOKEN.");
                std::process::exit(EXIT_LOGIN);
            }
            FailureSurface::Notice => {
                eprintln!("Error: {}", e);
                std::process::exit(EXIT_NOTICE);
            }
        },
    }
}

async fn run(use_cases: &di::UseCases, command: Command) -> Result<String, DomainError> {
    let view = match command {
        Command::Show { sort, direction } => {
            if let Some(direction) = direction {
                let field = sort.unwrap_or(use_cases.session.sort_state().field);
                use_cases
                    .session
                    .set_sort_state(SortState::new(field, direction));
                use_cases.refresh.execute().await?
            } else {
                let view = use_cases.refresh.execute().await?;
                match sort {
                    Some(field) => use_cases.resort.execute(view, field),
                    None => view,
                }
            }
        }
        Command::Allow { action } => match action {
            AllowAction::Add { domain } => {
                use_cases.set_allow_membership.execute(&domain, true).await?
            }
            AllowAction::Remove { domain } => {
                use_cases.set_allow_membership.execute(&domain, false).await?
            }
        },
        Command::Override { action } => match action {
            OverrideAction::Set { domain, address } => {
                use_cases.set_override.execute(&domain, address).await?
            }
            OverrideAction::Remove { domain } => use_cases.remove_override.execute(&domain).await?,
        },
        Command::AutoUpdate { action } => {
            let config = match action {
                AutoUpdateAction::Set { seconds } => AutoUpdateConfig::every(seconds)?,
                AutoUpdateAction::Disable => AutoUpdateConfig::Disabled,
            };
            use_cases.set_auto_update.execute(config).await?
        }
        Command::UpdateFilter => {
            // The watcher compares against the last filter this session saw.
            use_cases.refresh.execute().await?;

            let cancel = CancellationToken::new();
            let on_interrupt = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    warn!("Interrupted, abandoning filter update");
                    on_interrupt.cancel();
                }
            });

            let outcome = use_cases.watch_update.execute(cancel).await?;
            info!(polls = outcome.polls, "Filter update visible");
            outcome.view
        }
    };

    Ok(render::render_view(&view))
}
