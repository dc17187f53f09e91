use std::path::PathBuf;
use std::rc::Rc;

use crate::{
    environment::prelude::{Environment, Value},
    eval::prelude::eval_statement,
    lexer::prelude::Lexer,
    parser::prelude::Parser,
    utils::prelude::{Error, EvalWarningEmitter, WarningEmitter, WarningEmitterIO},
};

pub const SOURCE_EXTENSION: &str = "calc";

/// One evaluation session: the environment lives here and survives across
/// lines, whether they come from a file or a prompt.
pub struct Session {
    path: PathBuf,
    env: Environment,
    warnings: Rc<dyn WarningEmitterIO>,
}

impl Session {
    pub fn new(path: PathBuf, warnings: Rc<dyn WarningEmitterIO>) -> Self {
        Self {
            path,
            env: Environment::new(),
            warnings,
        }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Lexes, parses and evaluates one line. Lexical errors are demoted to
    /// warnings and the rest of the line is still processed; parse and
    /// runtime errors discard the line but leave the session usable.
    pub fn eval_line(&mut self, src: &str) -> Result<Option<Value>, Error> {
        let lexer = Lexer::new(src.char_indices().map(|(i, c)| (i as u32, c)));
        let mut parser = Parser::new(lexer);

        let parsed = parser.parse_statement();

        let emitter = EvalWarningEmitter::new(
            self.path.clone(),
            src.to_string(),
            WarningEmitter::new(Rc::clone(&self.warnings))
        );

        for error in parser.lex_errors.drain(..) {
            emitter.emit_lexical(error);
        }

        let statement = parsed.map_err(|error| Error::Parse {
            path: self.path.clone(),
            src: src.to_string(),
            error,
        })?;

        eval_statement(statement, &mut self.env, &emitter)
            .map_err(|error| Error::Runtime {
                path: self.path.clone(),
                src: src.to_string(),
                error,
            })
    }
}
