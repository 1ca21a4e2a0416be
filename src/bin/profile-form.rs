//! profile-form - customer profile screen in the terminal.
//!
//! The screen starts empty and is populated after a delay, the way a
//! profile arrives from a slow backend.
//!
//! Usage:
//!   profile-form                        # built-in sample customer, 1s delay
//!   profile-form --delay 0              # populate on the first tick
//!   profile-form --customer tom.json    # load the customer from a JSON file
//!   profile-form --log-file form.log -v # debug logging to a file

use std::cell::RefCell;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

use profile_form::controller::ProfileController;
use profile_form::model::CustomerViewModel;
use profile_form::schedule::MainQueue;
use profile_form::style::Stylist;
use profile_form::tui::App;

/// Customer profile form viewer.
#[derive(Parser)]
#[command(name = "profile-form", about = "Customer profile form")]
struct Args {
    /// Delay before the form is populated, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 1000)]
    delay: u64,

    /// Screen refresh interval, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 250)]
    tick_rate: u64,

    /// Customer view model as JSON. Default: built-in sample customer.
    #[arg(long, value_name = "PATH")]
    customer: Option<PathBuf>,

    /// Write logs to this file. Nothing is logged without it.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        if let Err(e) = init_logging(path, args.verbose) {
            eprintln!("Error: cannot open log file {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }

    let customer = match &args.customer {
        Some(path) => match CustomerViewModel::from_path(path) {
            Ok(customer) => customer,
            Err(e) => {
                eprintln!("Error: cannot load customer {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => CustomerViewModel::sample(),
    };

    let controller = Rc::new(RefCell::new(ProfileController::new(Rc::new(
        Stylist::default(),
    ))));
    let mut queue = MainQueue::new();
    ProfileController::schedule_population(
        &controller,
        &mut queue,
        Duration::from_millis(args.delay),
        customer,
    );
    info!(delay_ms = args.delay, "profile population scheduled");

    let app = App::new(controller, queue);
    if let Err(e) = app.run(Duration::from_millis(args.tick_rate)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to a file; the terminal belongs to the TUI.
fn init_logging(path: &Path, verbose: u8) -> std::io::Result<()> {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("profile_form={}", level).parse::<Directive>() {
        filter = filter.add_directive(directive);
    }

    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
