use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use semparar::api::Endpoints;
use semparar::config::{load_config, CONFIG_TEMPLATE};
use semparar::logging::init_tracing;
use semparar::report::{render_extract, render_profile, render_total};
use semparar::{HttpTransport, Result, SemPararError, Session};

#[derive(Parser)]
#[command(name = "semparar")]
#[command(version, about = "Sem Parar toll invoice client", long_about = None)]
struct Cli {
    /// TOML file with the account cpf and password
    config: PathBuf,

    /// Show the total invoice value
    #[arg(short, long)]
    total: bool,

    /// Show the invoice extract
    #[arg(short, long)]
    extract: bool,

    /// Show the account profile
    #[arg(short, long)]
    profile: bool,

    /// Month to get the invoice for (default: the open invoice)
    #[arg(short, long)]
    month: Option<u32>,

    /// Execute in debug mode
    #[arg(short, long)]
    debug: bool,

    /// Write a template config file at CONFIG and exit
    #[arg(long)]
    init: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if cli.init {
        return cmd_init(&cli.config);
    }

    let config = load_config(&cli.config)?;
    let span = tracing::info_span!("session", cpf = %config.credentials.cpf);
    let transport = HttpTransport::new(Duration::from_secs(config.service.timeout_secs));
    let mut session = Session::new(config.credentials, transport)
        .with_endpoints(Endpoints::new(&config.service.base_url))
        .with_span(span);

    if let Some(month) = cli.month {
        session.select_month(Some(month))?;
    }

    if cli.profile {
        println!("{}", render_profile(session.profile()?));
    }

    if cli.total {
        println!("{}", render_total(session.invoice_total_price()?));
    }

    if cli.extract {
        println!("{}", render_extract(session.invoice_view()?));
    }

    Ok(())
}

/// Write the config template so the user only has to fill in credentials
fn cmd_init(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(SemPararError::ConfigAlreadyExists(path.to_path_buf()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, CONFIG_TEMPLATE)?;

    println!("Created config template at: {}", path.display());
    println!("Fill in your cpf and password, then run:");
    println!("  semparar --total {}", path.display());
    Ok(())
}
