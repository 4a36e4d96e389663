use std::{fs, io};

use sprig::{Mode, run};
use walkdir::WalkDir;

#[test]
fn demo_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "sprig"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_out = fs::read_to_string(path.with_extension("out")).unwrap_or_default();
        let expected_err = fs::read_to_string(path.with_extension("err")).unwrap_or_default();

        let (mut out, mut err) = (Vec::new(), Vec::new());
        if let Err(e) = run(&path.display().to_string(),
                            &source,
                            Mode::Interpret,
                            &mut out,
                            &mut err)
        {
            panic!("Demo {path:?} failed:\n{source}\nError: {e}");
        }

        assert_eq!(String::from_utf8(out).unwrap(), expected_out, "stdout of {path:?}");
        assert_eq!(String::from_utf8(err).unwrap(), expected_err, "stderr of {path:?}");
        count += 1;
    }

    assert!(count > 0, "No demo programs found in demos");
}

fn output(src: &str, mode: Mode) -> String {
    let mut out = Vec::new();
    if let Err(e) = run("test.sprig", src, mode, &mut out, io::sink()) {
        panic!("Script failed: {e}");
    }
    String::from_utf8(out).unwrap()
}

fn assert_success(src: &str) {
    if let Err(e) = run("test.sprig", src, Mode::Interpret, io::sink(), io::sink()) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run("test.sprig", src, Mode::Interpret, io::sink(), io::sink()).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn entry_point_and_printf() {
    assert_success("main() { printf(\"hi\"); }");
    assert_success("main(){}");
    assert_success("main()");
    assert_eq!(output("main() { printf(\"hi\\n\"); }", Mode::Interpret), "hi\n");
}

#[test]
fn declarations_and_calls() {
    assert_success("i32 x = 5;");
    assert_success("i32 x = \"text\"; main() { i32 y = 1; }");
    assert_success("main() { undefined(1, \"a\",); }");
}

#[test]
fn comments_anywhere() {
    assert_success("// leading\nmain() /* between */ { printf(\"x\"); // trailing\n}");
    assert_success("main() { /* never closed");
}

#[test]
fn syntax_errors_fail() {
    assert_failure("main(");
    assert_failure("main() {");
    assert_failure("main() { printf(\"x\") }");
    assert_failure("i32 = 5;");
    assert_failure("i32 x 5;");
    assert_failure("printf(1 2);");
    assert_failure(";");
    assert_failure("i32 x = 5; }");
}

#[test]
fn token_dump() {
    assert_eq!(output("i32 x = 5; // gone\nprintf(\"a\\tb\");", Mode::LexDump),
               "i32\nsymbol(x)\n'='\ninteger(5)\n';'\nsymbol(printf)\n'('\nstring(\"a\\tb\")\n')'\n';'\n");
    assert_eq!(output("", Mode::LexDump), "");
}

#[test]
fn ast_dump() {
    assert_eq!(output("i32 x = 5;\nmain() {\n  printf(\"hi\", 1);\n}\n", Mode::AstDump),
               "(vdef x (i32 5))\n(fdef main () (scope\n  (call printf (str hi) (i32 1))))\n");
}

#[test]
fn ast_dump_writes_nodes_before_the_error() {
    let mut out = Vec::new();
    let error = run("test.sprig", "i32 x = 5;\nmain(", Mode::AstDump, &mut out, io::sink()).unwrap_err();

    assert_eq!(String::from_utf8(out).unwrap(), "(vdef x (i32 5))\n");
    assert_eq!(error.to_string(), "test.sprig:2:6: error: Expected ')' but got end of input");
}
