mod cli;
mod repl;

use std::{path::PathBuf, rc::Rc};

use clap::Parser;
use cli::{print_evaluated, print_running};
use calc_core::{
    session::{Session, SOURCE_EXTENSION},
    utils::prelude::{Error, Warning, WarningEmitterIO}
};

/// An interactive arithmetic calculator
#[derive(Parser)]
struct Command {
    /// Source file to evaluate; omit to start the prompt
    path: Option<PathBuf>,
}

fn main() {
    let command = Command::parse();

    ctrlc::set_handler(|| std::process::exit(0))
        .expect("setting interrupt handler");

    match command.path {
        Some(path) => run_file(path),
        None => {
            if let Err(err) = repl::start() {
                print_error(&Error::StdIo { err: err.kind() });
                std::process::exit(1);
            }
        }
    }
}

fn run_file(path: PathBuf) {
    if path.extension().and_then(|ext| ext.to_str()) != Some(SOURCE_EXTENSION) {
        eprintln!("File must be a .{SOURCE_EXTENSION} file");
        std::process::exit(1);
    }

    let src = match std::fs::read_to_string(&path) {
        Ok(src) => src,
        Err(err) => {
            print_error(&Error::StdIo { err: err.kind() });
            std::process::exit(1);
        }
    };

    print_running(path.to_str().unwrap_or_default());
    let start = std::time::Instant::now();

    let mut session = Session::new(path, Rc::new(ConsoleWarningEmitter));

    for line in src.lines() {
        if line.trim().is_empty() {
            continue;
        }

        // one statement per line; a bad line is reported and dropped
        match session.eval_line(line) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(err) => print_error(&err)
        }
    }

    print_evaluated(std::time::Instant::now() - start);
}

pub(crate) fn print_error(err: &Error) {
    let buffer_writer = crate::cli::stdout_buffer_writer();
    let mut buffer = buffer_writer.buffer();
    err.pretty(&mut buffer);
    buffer_writer
        .print(&buffer)
        .expect("Writing error to stdout");
}

#[derive(Debug, Clone, Copy)]
pub struct ConsoleWarningEmitter;

impl WarningEmitterIO for ConsoleWarningEmitter {
    fn emit_warning(&self, warning: Warning) {
        let buffer_writer = crate::cli::stdout_buffer_writer();
        let mut buffer = buffer_writer.buffer();
        warning.pretty(&mut buffer);
        buffer_writer
            .print(&buffer)
            .expect("Writing warning to stdout");
    }
}
