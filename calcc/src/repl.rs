use std::io::Write;
use std::{path::PathBuf, rc::Rc};

use calc_core::session::Session;

use crate::{print_error, ConsoleWarningEmitter};

const PROMPT: &str = "calc > ";

pub fn start() -> std::io::Result<()> {
    let stdin = std::io::stdin();
    let mut session = Session::new(PathBuf::from("<repl>"), Rc::new(ConsoleWarningEmitter));

    loop {
        let mut input = String::from("");

        print!("{}", PROMPT);
        std::io::stdout().flush()?;

        // read_line returns 0 on end of input
        if stdin.read_line(&mut input)? == 0 {
            return Ok(());
        }

        if let Some('\n') = input.chars().next_back() {
            input.pop();
        }
        if let Some('\r') = input.chars().next_back() {
            input.pop();
        }

        match input.as_str() {
            "" => {},
            ".exit" => return Ok(()),
            _ => match session.eval_line(&input) {
                Ok(Some(value)) => println!("{value}"),
                Ok(None) => {},
                Err(err) => print_error(&err)
            }
        }
    }
}
