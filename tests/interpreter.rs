use sprig::{
    arena::Arena,
    ast::{FunctionDef, Node},
    error::RuntimeError,
    interpreter::{
        environment::Environment, evaluator::core::Interpreter, lexer::Tokenizer, parser::Parser,
    },
};

struct Run {
    out:      String,
    errors:   String,
    reported: Vec<RuntimeError>,
}

fn run(src: &str) -> Run {
    let (mut out, mut errors) = (Vec::new(), Vec::new());
    let reported = sprig::interpret("test.sprig", src, &mut out, &mut errors)
        .unwrap_or_else(|e| panic!("Script failed: {e}"));

    Run { out: String::from_utf8(out).unwrap(),
          errors: String::from_utf8(errors).unwrap(),
          reported }
}

fn run_nodes<'a>(nodes: &[&'a Node<'a>], env: &mut Environment<'a>) -> Run {
    let (mut out, mut errors) = (Vec::new(), Vec::new());
    let reported = Interpreter::new(&mut out, &mut errors).run(nodes, env).unwrap();

    Run { out: String::from_utf8(out).unwrap(),
          errors: String::from_utf8(errors).unwrap(),
          reported }
}

#[test]
fn printf_writes_its_format_verbatim() {
    let run = run("main() { printf(\"a\\nb\"); }");

    assert_eq!(run.out, "a\nb");
    assert!(run.errors.is_empty());
    assert!(run.reported.is_empty());
}

#[test]
fn printf_ignores_extra_arguments_and_percent_signs() {
    assert_eq!(run("main() { printf(\"%d%%\\n\", 5, \"x\"); }").out, "%d%%\n");
}

#[test]
fn printf_without_arguments_does_nothing() {
    let run = run("main() { printf(); printf(\"done\"); }");

    assert_eq!(run.out, "done");
    assert!(run.errors.is_empty());
}

#[test]
fn printf_rejects_a_non_literal_format() {
    let run = run("main() { printf(5); printf(\"after\"); }");

    assert_eq!(run.out, "after");
    assert_eq!(run.errors, "Error: printf expects string literal as first argument\n");
    assert_eq!(run.reported, vec![RuntimeError::PrintfExpectsStringLiteral]);
}

#[test]
fn undefined_function_is_reported_and_execution_continues() {
    let run = run("main() { foo(\"ocaml\"); printf(\"after\"); }");

    assert_eq!(run.out, "after");
    assert_eq!(run.errors, "Error: Undefined function 'foo'\n");
    assert_eq!(run.reported,
               vec![RuntimeError::UndefinedFunction { name: "foo".to_string() }]);
}

#[test]
fn missing_entry_point() {
    let run = run("i32 x = 5;");

    assert!(run.out.is_empty());
    assert_eq!(run.errors, "Error: Missing entry point main.\n");
    assert_eq!(run.reported, vec![RuntimeError::MissingEntryPoint]);
}

#[test]
fn top_level_calls_run_before_the_entry_point_check() {
    let run = run("printf(\"top\");");

    assert_eq!(run.out, "top");
    assert_eq!(run.reported, vec![RuntimeError::MissingEntryPoint]);
}

#[test]
fn declarations_are_accepted_without_output() {
    let run = run("i32 x = 5; main() { i32 y = \"text\"; }");

    assert!(run.out.is_empty());
    assert!(run.errors.is_empty());
}

#[test]
fn main_without_a_body_still_counts_as_an_entry_point() {
    let run = run("main()");

    assert!(run.out.is_empty());
    assert!(run.reported.is_empty());
}

#[test]
fn lone_literals() {
    let run = run("\"ignored\" main() { 42 }");

    assert!(run.out.is_empty());
    assert_eq!(run.errors, "Error: Unknown AST node kind: integer literal\n");
    assert_eq!(run.reported,
               vec![RuntimeError::UnknownNode { kind: "integer literal" }]);
}

#[test]
fn vertical_tabs_separate_tokens() {
    let run = run("main\u{0b}(){printf(\"x\");}");

    assert_eq!(run.out, "x");
    assert!(run.reported.is_empty());
}

#[test]
fn nested_scopes_run_in_order() {
    assert_eq!(run("main() { printf(\"1\"); { printf(\"2\"); { printf(\"3\"); } } printf(\"4\"); }").out,
               "1234");
}

#[test]
fn parse_errors_prevent_execution() {
    let (mut out, mut errors) = (Vec::new(), Vec::new());
    let error = sprig::interpret("broken.sprig",
                                 "main() { printf(\"never\"); printf(\"x\") }",
                                 &mut out,
                                 &mut errors).unwrap_err();

    assert_eq!(error.to_string(), "broken.sprig:1:39: error: Expected ';' but got '}'");
    assert!(out.is_empty());
    assert!(errors.is_empty());
}

#[test]
fn variables_hold_their_latest_unevaluated_initializer() {
    let arena = Arena::new();
    let nodes = Parser::new(Tokenizer::new("test.sprig", "i32 x = 1; i32 x = \"two\"; main() {}"),
                            &arena).parse_all()
                                   .unwrap();
    let mut env = Environment::new();

    let run = run_nodes(nodes, &mut env);

    assert!(run.reported.is_empty());
    assert_eq!(env.variable("x"), Some(&Node::StringLiteral("two")));
    assert!(env.has_function("main"));
}

#[test]
fn user_functions_are_called_by_name() {
    let text = Node::StringLiteral("greet\n");
    let printf_args = [&text];
    let printf = Node::FunctionCall { name:      "printf",
                                      arguments: &printf_args, };
    let greet_statements = [&printf];
    let greet_body = Node::Scope(&greet_statements);
    let greet = Node::FunctionDefinition(FunctionDef { name:   "greet",
                                                       params: &[],
                                                       body:   Some(&greet_body), });

    let call = Node::FunctionCall { name:      "greet",
                                    arguments: &[], };
    let main_statements = [&call, &call];
    let main_body = Node::Scope(&main_statements);
    let main = Node::MainFunction(FunctionDef { name:   "main",
                                                params: &[],
                                                body:   Some(&main_body), });

    let run = run_nodes(&[&greet, &main], &mut Environment::new());
    assert_eq!(run.out, "greet\ngreet\n");
    assert!(run.reported.is_empty());

    // Definitions only take effect once they have been executed.
    let run = run_nodes(&[&main, &greet], &mut Environment::new());
    assert!(run.out.is_empty());
    assert_eq!(run.reported,
               vec![RuntimeError::UndefinedFunction { name: "greet".to_string() },
                    RuntimeError::UndefinedFunction { name: "greet".to_string() }]);
}

#[test]
fn builtins_shadow_user_functions() {
    let body = Node::Scope(&[]);
    let printf = Node::FunctionDefinition(FunctionDef { name:   "printf",
                                                        params: &[],
                                                        body:   Some(&body), });
    let text = Node::StringLiteral("builtin");
    let args = [&text];
    let call = Node::FunctionCall { name:      "printf",
                                    arguments: &args, };

    let run = run_nodes(&[&printf, &call], &mut Environment::new());

    assert_eq!(run.out, "builtin");
}

#[test]
fn runs_are_independent() {
    let first = run("main() { printf(\"one\"); }");
    let second = run("printf(\"two\");");

    assert_eq!(first.out, "one");
    assert!(first.reported.is_empty());
    assert_eq!(second.out, "two");
    assert_eq!(second.reported, vec![RuntimeError::MissingEntryPoint]);
}

#[test]
fn later_definitions_replace_earlier_ones() {
    let first = Node::IntegerLiteral(1);
    let second = Node::IntegerLiteral(2);
    let mut env = Environment::new();

    assert!(env.variable("x").is_none());
    assert!(env.define_variable("x", &first).is_none());
    assert_eq!(env.define_variable("x", &second), Some(&first));
    assert_eq!(env.variable("x"), Some(&second));
}

#[test]
fn functions_and_variables_are_separate() {
    let def = FunctionDef { name:   "f",
                            params: &[],
                            body:   None, };
    let value = Node::StringLiteral("f");
    let mut env = Environment::new();

    assert!(env.define_function("f", &def).is_none());
    assert!(env.has_function("f"));
    assert!(env.variable("f").is_none());

    env.define_variable("f", &value);
    assert_eq!(env.function("f"), Some(&def));
    assert_eq!(env.variable("f"), Some(&value));
}
