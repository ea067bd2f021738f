use {
    rstest::rstest,
    rstest_reuse::{apply, template},
    std::{
        io::Write,
        path::PathBuf,
        process::{Command, Stdio},
    },
};

#[template]
#[rstest]
fn sessions(#[files("sessions/*.stdin")] path: PathBuf) {}

#[apply(sessions)]
fn run_in_process(path: PathBuf) {
    let session = Session::from(path);
    let mut output = Vec::new();
    session::run(&mut session.input.as_bytes(), &mut output).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), session.expected_output);
}

#[apply(sessions)]
fn run_binary(path: PathBuf) {
    let session = Session::from(path);
    let output = run_fib_prompt(&[], &session.input);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        session.expected_output
    );
}

#[test]
fn invalid_input_fails() {
    let output = run_fib_prompt(&[], "eleven");
    assert!(!output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), session::PROMPT);
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid input"), "{stderr}");
    assert!(stderr.contains("\"eleven\" is not a whole number"), "{stderr}");
}

#[test]
fn debug_logging_stays_on_stderr() {
    let session = Session::from(PathBuf::from(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/sessions/ten.stdin"
    )));
    let output = run_fib_prompt(&["--debug"], &session.input);
    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        session.expected_output
    );
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("position: 10,"), "{stderr}");
    assert!(stderr.contains("value: 55,"), "{stderr}");
    assert!(stderr.contains("recursive calls: 177"), "{stderr}");
}

#[test]
fn no_logging_without_debug() {
    let output = run_fib_prompt(&[], "10");
    assert!(output.status.success(), "{output:?}");
    assert_eq!(String::from_utf8(output.stderr).unwrap(), "");
}

fn run_fib_prompt(args: &[&str], input: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_fib_prompt"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

struct Session {
    input: String,
    expected_output: String,
}

impl From<PathBuf> for Session {
    fn from(mut path: PathBuf) -> Self {
        let input = std::fs::read_to_string(&path).unwrap();

        path.set_extension("stdout");
        let expected_output = std::fs::read_to_string(&path).unwrap_or_else(|e| {
            panic!("failed to read expected output file at path {path:?}: {e}")
        });

        Session {
            input,
            expected_output,
        }
    }
}
