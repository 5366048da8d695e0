//! Expense tracker main entry point

mod command;
mod terminal;

use anyhow::Context;
use clap::Parser;
use command::{Command, HELP};
use expense_config::Config;
use expense_core::{AmountFilter, CategoryFilter, Controller, CoreError, ErrorSink, ValidationPolicy};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use terminal::{ConsoleErrorSink, TerminalView};

#[derive(Parser, Debug)]
#[command(name = "expense-tracker")]
#[command(version = "0.1.0")]
#[command(about = "Track expenses in memory from the terminal", long_about = None)]
struct Args {
    /// Configuration file path (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the view as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

type TerminalController = Controller<ConsoleErrorSink, TerminalView>;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => Config::load(path.clone())
            .map_err(|e| anyhow::anyhow!("{}", e.to_details()))
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.logging.level))
        .init();

    match &args.config {
        Some(path) => log::debug!("Loaded configuration from {}", path.display()),
        None => log::debug!("No configuration file given, using defaults"),
    }
    log::info!(
        "Starting with max amount {} and {} allowed categories",
        config.validation.max_amount,
        config.validation.allowed_categories.len()
    );

    let policy = ValidationPolicy::from_config(&config.validation);
    let mut controller = Controller::new(policy, ConsoleErrorSink, TerminalView::new(args.json));

    println!("Type 'help' for a list of commands.");
    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() {
            prompt()?;
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => execute(&mut controller, &config, command),
            Err(e) => controller.error_sink_mut().report_error(&e.to_string()),
        }
        prompt()?;
    }

    log::info!("Exiting with {} transactions", controller.transactions().len());
    Ok(())
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

fn execute(controller: &mut TerminalController, config: &Config, command: Command) {
    match command {
        Command::Add { amount, category } => {
            controller.add_transaction(amount, &category);
        }
        Command::Undo { index } => {
            let index = index.unwrap_or_else(|| controller.transactions().len().saturating_sub(1));
            controller.undo_transaction(index);
        }
        Command::Remove { index } => match controller.transactions().get(index).cloned() {
            Some(transaction) => {
                controller.remove_transaction(&transaction);
            }
            None => {
                let error = CoreError::IndexOutOfRange {
                    index,
                    len: controller.transactions().len(),
                };
                log::warn!("Rejected remove ({}): {}", error.severity(), error.code());
                controller.error_sink_mut().report_error(&error.to_details().to_string());
            }
        },
        Command::FilterAmount(amount) => {
            controller.set_filter(AmountFilter::new(amount).with_tolerance(config.filter.amount_tolerance));
        }
        Command::FilterCategory(category) => controller.set_filter(CategoryFilter::new(category)),
        Command::Apply => controller.apply_filter(),
        Command::Clear => controller.clear_filter(),
        Command::List => print!("{}", controller.publisher().render(controller.view())),
        Command::Help => println!("{}", HELP),
        Command::Quit => {}
    }
}
