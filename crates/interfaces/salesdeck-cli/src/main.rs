use clap::{Parser, Subcommand};
use salesdeck_app_core::{HttpListingSource, SignupForm};
use salesdeck_cli::commands::{self, LangAction, ListArgs};
use salesdeck_cli::{browse, CliLevel, CliLocale, Session};
use salesdeck_core::ContentKind;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Base URL of the content API (falls back to SALESDECK_API_URL, then settings)
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Directory holding settings.json instead of the platform config dir
    #[arg(long, global = true, env = "SALESDECK_CONFIG_DIR")]
    config_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Featured courses and latest articles
    Home {
        #[arg(long, value_enum)]
        lang: Option<CliLocale>,
    },
    /// Browse the course catalogue
    Courses {
        #[command(subcommand)]
        command: ListingCommands,
    },
    /// Browse articles
    Articles {
        #[command(subcommand)]
        command: ListingCommands,
    },
    /// Create an account
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "SALESDECK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Show or change the content language
    Lang {
        #[command(subcommand)]
        command: LangCommands,
    },
}

#[derive(Subcommand)]
enum ListingCommands {
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, value_enum, help = "Courses only")]
        level: Option<CliLevel>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long, value_enum, help = "Language for this listing only")]
        lang: Option<CliLocale>,
    },
    Show {
        id: String,
        #[arg(long, value_enum)]
        lang: Option<CliLocale>,
    },
    Categories,
    /// Interactive session with live filters and paging
    Browse {
        #[arg(long, value_enum)]
        lang: Option<CliLocale>,
    },
}

#[derive(Subcommand)]
enum LangCommands {
    Show,
    Set {
        #[arg(value_enum)]
        lang: CliLocale,
    },
    Toggle,
}

async fn run_listing(
    session: &Session,
    kind: ContentKind,
    command: ListingCommands,
) -> anyhow::Result<()> {
    match command {
        ListingCommands::List {
            page,
            category,
            level,
            search,
            lang,
        } => {
            let args = ListArgs {
                page,
                category,
                level: level.map(Into::into),
                search,
                lang: lang.map(Into::into),
            };
            println!("{}", commands::cmd_list(session, kind, args).await?);
        }
        ListingCommands::Show { id, lang } => {
            let out = commands::cmd_show(session, kind, &id, lang.map(Into::into)).await?;
            println!("{out}");
        }
        ListingCommands::Categories => {
            println!("{}", commands::cmd_categories(session, kind).await?);
        }
        ListingCommands::Browse { lang } => {
            let lang = lang.map(Into::into);
            match kind {
                ContentKind::Courses => {
                    let source = HttpListingSource::courses(session.api.clone());
                    browse::run(session, source, lang).await?
                }
                ContentKind::Articles => {
                    let source = HttpListingSource::articles(session.api.clone());
                    browse::run(session, source, lang).await?
                }
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("default subscriber");

    let session = Session::open(cli.api_url.as_deref(), cli.config_dir)?;

    match cli.command {
        Commands::Home { lang } => {
            println!("{}", commands::cmd_home(&session, lang.map(Into::into)).await?);
        }
        Commands::Courses { command } => {
            run_listing(&session, ContentKind::Courses, command).await?
        }
        Commands::Articles { command } => {
            run_listing(&session, ContentKind::Articles, command).await?
        }
        Commands::Signup {
            name,
            email,
            password,
        } => {
            let form = SignupForm {
                name,
                email,
                password,
            };
            println!("{}", commands::cmd_signup(&session, form).await?);
        }
        Commands::Lang { command } => {
            let action = match command {
                LangCommands::Show => LangAction::Show,
                LangCommands::Set { lang } => LangAction::Set(lang.into()),
                LangCommands::Toggle => LangAction::Toggle,
            };
            println!("{}", commands::cmd_lang(&session, action)?);
        }
    }

    Ok(())
}
