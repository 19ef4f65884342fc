use crate::common::db_instance::{DBInstance, ExecutionStatus};
use crate::common::exception::DBError;
use crate::common::logger::{initialize_logger_with_level, parse_level};
use crate::common::result_writer::{CliResultWriter, ResultWriter};
use crate::config::DBConfig;
use clap::Parser;
use colored::*;
use log::{info, warn};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::borrow::Cow;
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file with shell settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// History file for the line editor
    #[arg(long)]
    history: Option<PathBuf>,

    /// Do not load or save line-editor history
    #[arg(long)]
    no_history: bool,

    /// Print errors without colour
    #[arg(long)]
    no_color: bool,

    /// Log level for this crate (error, warn, info, debug, trace)
    #[arg(short, long)]
    log_level: Option<String>,
}

impl Args {
    fn into_config(self) -> Result<DBConfig, DBError> {
        let mut config = match &self.config {
            Some(path) => DBConfig::load(path)?,
            None => DBConfig::default(),
        };

        if let Some(history) = self.history {
            config.history_file = Some(history);
        }
        if self.no_history {
            config.history_file = None;
        }
        if self.no_color {
            config.color = false;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        Ok(config)
    }
}

/// Executes every line from `input` until it runs out or a line says `EXIT`.
///
/// Only the line ending is stripped, so blank or indented lines are rejected
/// by the parser like any other line without the command prefix. Bytes that
/// are not valid UTF-8 are replaced rather than ending the session.
pub fn run_lines<R: BufRead>(
    instance: &mut DBInstance,
    mut input: R,
    writer: &mut impl ResultWriter,
) -> Result<ExecutionStatus, DBError> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(ExecutionStatus::Continue);
        }

        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            warn!("Replaced invalid UTF-8 in input line");
        }

        let command = strip_line_ending(&line);
        if instance.execute_line(command, writer) == ExecutionStatus::Exit {
            return Ok(ExecutionStatus::Exit);
        }
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(|c: char| c == '\n' || c == '\r')
}

fn run_interactive(
    instance: &mut DBInstance,
    config: &DBConfig,
    writer: &mut CliResultWriter,
) -> Result<(), DBError> {
    if config.banner {
        println!("{}", "\nIn-memory DBMS".blue().bold());
        println!("Type './dbms --HELP' for commands\n");
    }

    let mut rl = DefaultEditor::new()?;
    if let Some(history) = &config.history_file {
        if rl.load_history(history).is_err() {
            info!("No previous history at {}", history.display());
        }
    }

    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                let command = strip_line_ending(&line);
                if !command.trim().is_empty() {
                    rl.add_history_entry(command)?;
                }

                if instance.execute_line(command, writer) == ExecutionStatus::Exit {
                    break;
                }
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => break,
            Err(err) => {
                warn!("Line editor failed: {}", err);
                return Err(err.into());
            }
        }
    }

    if let Some(history) = &config.history_file {
        rl.save_history(history)?;
    }
    Ok(())
}

pub fn run_cli() -> Result<(), DBError> {
    let config = Args::parse().into_config()?;
    initialize_logger_with_level(parse_level(&config.log_level));
    info!("Starting with {:?}", config);

    let mut instance = DBInstance::new();
    let mut writer = CliResultWriter::new(config.color);

    if io::stdin().is_terminal() {
        run_interactive(&mut instance, &config, &mut writer)?;
    } else {
        run_lines(&mut instance, io::stdin().lock(), &mut writer)?;
    }

    info!("Session finished");
    Ok(())
}
