use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, is_empty};

fn unidump() -> Command {
    let mut cmd = Command::cargo_bin("unidump").expect("unidump binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

const USAGE_LINE: &str = "Start and end points are required\n";

#[test]
fn dumps_range_and_exits_zero() {
    unidump()
        .args(["65", "67"])
        .assert()
        .success()
        .stdout(
            "U+0041\t'A'\tLu\tLATIN CAPITAL LETTER A\n\
             U+0042\t'B'\tLu\tLATIN CAPITAL LETTER B\n\
             U+0043\t'C'\tLu\tLATIN CAPITAL LETTER C\n",
        )
        .stderr(is_empty());
}

#[test]
fn wrong_argument_count_prints_usage_and_exits_one() {
    let cases: [&[&str]; 7] = [
        &[],
        &["65"],
        &["65", "66", "67"],
        &["--help"],
        &["-x"],
        &["--version"],
        &["--version", "65", "66"],
    ];
    for args in cases {
        unidump()
            .args(args)
            .assert()
            .code(1)
            .stdout(USAGE_LINE);
    }
}

#[test]
fn flag_in_point_position_is_a_parse_failure() {
    unidump()
        .args(["65", "--version"])
        .assert()
        .code(1)
        .stdout(is_empty())
        .stderr(contains("--version"));
}

#[test]
fn non_integer_fails() {
    unidump()
        .args(["abc", "67"])
        .assert()
        .failure()
        .stdout(is_empty())
        .stderr(contains("invalid code point \"abc\""));
}

#[test]
fn inverted_range_is_empty_success() {
    unidump()
        .args(["10", "5"])
        .assert()
        .success()
        .stdout(is_empty())
        .stderr(is_empty());
}

#[test]
fn negative_point_fails() {
    unidump()
        .args(["-1", "0"])
        .assert()
        .failure()
        .stdout(is_empty())
        .stderr(contains("outside 0..=0x10FFFF"));
}

#[test]
fn surrogates_are_dumped() {
    unidump()
        .args(["55295", "55297"])
        .assert()
        .success()
        .stdout(
            contains("U+D7FF\t")
                .and(contains("U+D800\t'\\u{d800}'\tCs\t<surrogate>\n"))
                .and(contains("U+D801\t'\\u{d801}'\tCs\t<surrogate>\n")),
        );
}

#[test]
fn rust_log_goes_to_stderr_only() {
    let quiet = unidump().args(["97", "99"]).output().expect("run unidump");
    let traced = unidump()
        .env("RUST_LOG", "trace")
        .args(["97", "99"])
        .output()
        .expect("run unidump");

    assert!(quiet.status.success() && traced.status.success());
    assert_eq!(quiet.stdout, traced.stdout);
    assert!(String::from_utf8_lossy(&traced.stderr).contains("dumping code points 97..=99"));
}
