use std::{
    fs::OpenOptions,
    io::{self, BufRead, Write},
    path::PathBuf,
    sync::Arc,
};

use clap::Parser;
use tracing_subscriber::{Layer, filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use coupon_stash::{Model, parse_command, storage};

/// A local coupon tracker driven by typed text commands.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the coupon stash JSON file.
    #[arg(long, default_value = "coupon_stash.json")]
    data_file: PathBuf,
}

fn main() {
    setup_logging();

    let args = Args::parse();

    let coupons = if args.data_file.exists() {
        storage::load_stash(&args.data_file).expect("Could not load the coupon stash file.")
    } else {
        Vec::new()
    };

    let mut model = Model::from_coupons(coupons);
    tracing::info!(
        "Loaded {} coupons from {}",
        model.coupon_stash().len(),
        args.data_file.display()
    );

    println!(
        "Coupon Stash: {} coupons loaded. Type a command, or 'exit' to quit.",
        model.coupon_stash().len()
    );

    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush().expect("Could not flush stdout.");

        let mut line = String::new();
        let bytes_read = stdin
            .lock()
            .read_line(&mut line)
            .expect("Could not read from stdin.");

        if bytes_read == 0 {
            break;
        }

        let input = line.trim();

        if input.is_empty() {
            continue;
        }

        if input == "exit" {
            break;
        }

        match run(input, &mut model) {
            Ok(message) => {
                println!("{message}");

                if let Err(error) = storage::save_stash(&args.data_file, model.coupon_stash()) {
                    tracing::warn!("Could not save the coupon stash: {error}");
                    println!("Warning: your changes could not be saved.");
                }
            }
            Err(message) => println!("{message}"),
        }
    }
}

/// Parse and execute one line of input, folding both error kinds into the
/// message to display.
fn run(input: &str, model: &mut Model) -> Result<String, String> {
    let command = parse_command(input).map_err(|error| error.to_string())?;

    tracing::debug!("Executing command: {input:?}");

    command
        .execute(model)
        .map(|result| result.message().to_string())
        .map_err(|error| error.to_string())
}

fn setup_logging() {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("coupon_stash.log")
        .expect("Could not create log file");

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            debug_log.with_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            ),
        )
        .init();
}
