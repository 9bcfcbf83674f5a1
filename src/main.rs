use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use group_generator::{
    render_outcome, render_roster, AppState, GenerationReport, GroupSize, RandomNamer,
    RngSource, Session, Settings,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "groupgen")]
#[command(about = "Shuffle present students into randomly named groups")]
struct Cli {
    /// Settings file (JSON with `students` and `group_size`)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate groups once and print them
    Generate {
        /// Students per group (overrides the configured size)
        #[arg(short, long)]
        size: Option<usize>,

        /// Mark a student absent (repeatable)
        #[arg(short, long = "absent", value_name = "NAME")]
        absent: Vec<String>,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the roster
    Roster,
    /// Interactive session: toggle attendance, adjust size, regenerate
    Session,
}

/// Logs go to stderr so stdout carries only the groups.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "group_generator=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_state(config: Option<&PathBuf>) -> Result<AppState> {
    let settings = Settings::load(config.map(PathBuf::as_path))?;
    let state = settings.into_state().context("Invalid settings")?;
    tracing::debug!(
        students = state.roster.len(),
        group_size = state.group_size.get(),
        "session state ready"
    );
    Ok(state)
}

fn generate(mut state: AppState, size: Option<usize>, absent: &[String], json: bool) -> Result<()> {
    if let Some(size) = size {
        state.group_size = GroupSize::new(size)?;
    }

    for name in absent {
        let present = state
            .roster
            .toggle_by_name(name)
            .with_context(|| format!("Cannot mark {name} absent"))?;
        if present {
            // listed twice: flip back to absent
            state.roster.toggle_by_name(name)?;
        }
    }

    let state = state.generate(&mut RngSource::thread(), &mut RandomNamer::thread());

    if let Some(e) = state.error() {
        bail!("{e}");
    }

    if json {
        if let Some(report) = GenerationReport::from_state(&state) {
            println!("{}", report.to_json()?);
        }
    } else {
        print!("{}", render_outcome(&state));
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let state = load_state(cli.config.as_ref())?;

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Generate { size, absent, json } => generate(state, size, &absent, json)?,
        Commands::Roster => {
            print!("{}", render_roster(&state.roster));
            println!("Group size: {}", state.group_size);
        }
        Commands::Session => {
            let session = Session::new(
                state,
                Box::new(RngSource::thread()),
                Box::new(RandomNamer::thread()),
            );
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let state = session.run(stdin.lock(), &mut stdout)?;
            tracing::info!(present = %state.roster.summary(), "session ended");
        }
    }

    Ok(())
}
