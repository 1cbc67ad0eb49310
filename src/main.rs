use card_last4_emails::application::decorator::EmailDecorator;
use card_last4_emails::domain::email::EmailKind;
use card_last4_emails::domain::ports::SettingsStoreBox;
use card_last4_emails::error::CardEmailError;
use card_last4_emails::infrastructure::in_memory::InMemorySettingsStore;
use card_last4_emails::infrastructure::json_file::JsonFileSettingsStore;
use card_last4_emails::interfaces::json::snapshot_reader::SnapshotReader;
use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result, miette};
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the settings JSON file. Without it, the defaults apply
    /// (all email types enabled) and `settings set` does not persist.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render card-info email fragments for a batch of order snapshots
    Render {
        /// Input order snapshots JSON file
        input: PathBuf,

        /// Emit plain-text fragments instead of HTML
        #[arg(long)]
        plain: bool,

        /// Email template id, used for the enablement gate
        #[arg(long)]
        email_type: Option<String>,

        /// Which email section is being rendered
        #[arg(long, value_enum, default_value = "order-details")]
        section: Section,

        /// Log a diagnostic snapshot for every order resolution
        #[arg(long)]
        debug: bool,
    },
    /// Show or change which email types include card details
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Section {
    OrderDetails,
    CustomerDetails,
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the flag for every known email type
    Show,
    /// Set flags, e.g. `settings set customer_note=false failed_order=true`
    Set {
        #[arg(required = true)]
        entries: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let store: SettingsStoreBox = match &cli.settings {
        Some(path) => Box::new(JsonFileSettingsStore::new(path.clone())),
        None => Box::new(InMemorySettingsStore::new()),
    };

    match cli.command {
        Command::Render {
            input,
            plain,
            email_type,
            section,
            debug,
        } => {
            let settings = store.load().await.into_diagnostic()?;
            let decorator = EmailDecorator::new(settings, debug);

            let file = File::open(&input).into_diagnostic()?;
            let orders = SnapshotReader::new(file).read_all().into_diagnostic()?;

            for order in &orders {
                let fragment = match section {
                    Section::OrderDetails => {
                        decorator.order_details_fragment(order, plain, email_type.as_deref())
                    }
                    Section::CustomerDetails => decorator.customer_details_fragment(order, plain),
                };
                if let Some(fragment) = fragment {
                    println!("{fragment}");
                }
            }
        }
        Command::Settings { action } => match action {
            SettingsAction::Show => {
                let settings = store.load().await.into_diagnostic()?;
                for kind in EmailKind::ALL {
                    let state = if settings.get(kind) {
                        "enabled"
                    } else {
                        "disabled"
                    };
                    println!("{}: {} ({})", kind.id(), state, kind.label());
                }
            }
            SettingsAction::Set { entries } => {
                let mut settings = store.load().await.into_diagnostic()?;
                for entry in &entries {
                    let (kind, enabled) = parse_settings_entry(entry)?;
                    settings.set(kind, enabled);
                }
                store.save(&settings).await.into_diagnostic()?;
            }
        },
    }

    Ok(())
}

fn parse_settings_entry(entry: &str) -> Result<(EmailKind, bool)> {
    let (id, value) = entry
        .split_once('=')
        .ok_or_else(|| miette!("expected <email_type>=<true|false>, got {entry:?}"))?;
    let kind = EmailKind::parse(id)
        .ok_or_else(|| CardEmailError::UnknownEmailType(id.to_string()))
        .into_diagnostic()?;
    let enabled = match value {
        "true" => true,
        "false" => false,
        _ => return Err(miette!("expected true or false, got {value:?}")),
    };
    Ok((kind, enabled))
}
