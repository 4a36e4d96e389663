use std::io::{self, Write};

use tracing::{debug, trace};

use crate::{
    ast::{FunctionDef, Node},
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::builtin::Builtin},
};

/// Result type used by the evaluator.
///
/// Only failures to write output are fatal. Everything else is reported as a
/// [`RuntimeError`] and execution carries on.
pub type EvalResult<T> = io::Result<T>;

/// Name of the entry point function.
pub const ENTRY_POINT: &str = "main";

/// Tree-walking interpreter.
///
/// Program output goes to `out`; runtime errors are written to
/// `diagnostics` as `Error: <message>` lines.
///
/// # Example
/// ```
/// use sprig::{
///     ast::{FunctionDef, Node},
///     interpreter::{environment::Environment, evaluator::core::Interpreter},
/// };
///
/// let hello = Node::StringLiteral("hello\n");
/// let args = [&hello];
/// let call = Node::FunctionCall { name:      "printf",
///                                 arguments: &args, };
/// let statements = [&call];
/// let body = Node::Scope(&statements);
/// let main = Node::MainFunction(FunctionDef { name:   "main",
///                                             params: &[],
///                                             body:   Some(&body), });
///
/// let (mut out, mut diagnostics) = (Vec::new(), Vec::new());
/// let reported = Interpreter::new(&mut out, &mut diagnostics).run(&[&main],
///                                                                 &mut Environment::new())
///                                                            .unwrap();
///
/// assert!(reported.is_empty());
/// assert_eq!(out, b"hello\n");
/// ```
pub struct Interpreter<O, E> {
    out:         O,
    diagnostics: E,
    reported:    Vec<RuntimeError>,
}

impl<O: Write, E: Write> Interpreter<O, E> {
    /// Creates an interpreter writing to the given streams.
    pub const fn new(out: O, diagnostics: E) -> Self {
        Self { out,
               diagnostics,
               reported: Vec::new() }
    }

    /// Executes every top-level node in order.
    ///
    /// `main` runs as soon as its definition is reached. Only after all
    /// nodes have run is the environment checked for an entry point, so the
    /// missing-entry-point error appears only for programs without any
    /// `main`.
    ///
    /// # Parameters
    /// - `nodes`: Top-level nodes, as produced by the parser.
    /// - `env`: Bindings for this run. Pass a fresh [`Environment`] to run
    ///   a program in isolation.
    ///
    /// # Returns
    /// The runtime errors reported during the run, in order.
    ///
    /// # Errors
    /// Fails only if writing to either stream fails.
    pub fn run<'a>(&mut self,
                   nodes: &[&'a Node<'a>],
                   env: &mut Environment<'a>)
                   -> EvalResult<Vec<RuntimeError>> {
        debug!(count = nodes.len(), "running program");

        for &node in nodes {
            self.execute(node, env)?;
        }

        if !env.has_function(ENTRY_POINT) {
            self.report(RuntimeError::MissingEntryPoint)?;
        }

        self.out.flush()?;
        Ok(std::mem::take(&mut self.reported))
    }

    /// Executes a single node.
    ///
    /// - String literals have no effect.
    /// - `main` is registered and its body executed right away.
    /// - Other function definitions are only registered.
    /// - Scopes execute their statements in order.
    /// - Variable declarations bind the name to the unevaluated initializer.
    /// - Function calls go to a built-in or a registered function.
    ///
    /// Any other node is reported as unknown.
    pub fn execute<'a>(&mut self, node: &'a Node<'a>, env: &mut Environment<'a>) -> EvalResult<()> {
        match node {
            Node::StringLiteral(_) => Ok(()),
            Node::MainFunction(def) => {
                env.define_function(ENTRY_POINT, def);
                self.execute_body(def, env)
            },
            Node::FunctionDefinition(def) => {
                debug!(name = def.name, "registering function");
                env.define_function(def.name, def);
                Ok(())
            },
            Node::Scope(statements) => {
                for &statement in *statements {
                    self.execute(statement, env)?;
                }
                Ok(())
            },
            Node::VariableDeclaration { name, value, .. } => {
                trace!(name, "binding variable");
                env.define_variable(name, value);
                Ok(())
            },
            Node::FunctionCall { name, arguments } => self.call(name, arguments, env),
            Node::IntegerLiteral(_) => {
                self.report(RuntimeError::UnknownNode { kind: node.kind_name() })
            },
        }
    }

    fn call<'a>(&mut self,
                name: &'a str,
                arguments: &'a [&'a Node<'a>],
                env: &mut Environment<'a>)
                -> EvalResult<()> {
        trace!(name, arguments = arguments.len(), "calling function");

        if let Some(builtin) = Builtin::lookup(name) {
            if let Some(error) = builtin.invoke(arguments, &mut self.out)? {
                self.report(error)?;
            }
            return Ok(());
        }

        match env.function(name) {
            Some(def) => self.execute_body(def, env),
            None => self.report(RuntimeError::UndefinedFunction { name: name.to_string() }),
        }
    }

    fn execute_body<'a>(&mut self,
                        def: &'a FunctionDef<'a>,
                        env: &mut Environment<'a>)
                        -> EvalResult<()> {
        match def.body {
            Some(body) => self.execute(body, env),
            None => Ok(()),
        }
    }

    fn report(&mut self, error: RuntimeError) -> EvalResult<()> {
        debug!(%error, "runtime error");
        writeln!(self.diagnostics, "Error: {error}")?;
        self.reported.push(error);
        Ok(())
    }
}
