#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn session(script: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("va-calc")
        .expect("binary should compile")
        .write_stdin(script)
        .assert()
}

#[test]
fn menu_lists_five_options_and_exits_cleanly() {
    session("5\n")
        .code(0)
        .stdout(predicate::str::contains(
            "===== VA Disability Compensation Calculator =====",
        ))
        .stdout(predicate::str::contains("1. Enter CURRENT ratings"))
        .stdout(predicate::str::contains("2. Enter PROPOSED ratings"))
        .stdout(predicate::str::contains(
            "3. Show combined rating & estimated pay (CURRENT)",
        ))
        .stdout(predicate::str::contains("4. Compare CURRENT vs PROPOSED"))
        .stdout(predicate::str::contains("5. Exit"))
        .stdout(predicate::str::contains(
            "Exiting program. Thank you for using the VA Calculator.",
        ));
}

#[test]
fn explicit_interactive_subcommand_runs_menu() {
    Command::cargo_bin("va-calc")
        .expect("binary should compile")
        .arg("interactive")
        .write_stdin("5\n")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Exiting program."));
}

#[test]
fn invalid_choice_shows_notice_and_returns_to_menu() {
    session("7\n3\n5\n")
        .code(0)
        .stdout(predicate::str::contains("Invalid choice. Please choose 1-5."))
        .stdout(predicate::str::contains("No current ratings have been entered yet."));
}

#[test]
fn non_numeric_tokens_are_reprompted() {
    session("menu\n1\ntwo\n1\nforty 40\n3\n5\n")
        .code(0)
        .stdout(predicate::str::contains("Please enter a number from the menu: "))
        .stdout(predicate::str::contains("Please enter a whole number: "))
        .stdout(predicate::str::contains("Current ratings: 40%"));
}

#[test]
fn out_of_range_rating_warns_and_stores_zero() {
    session("1\n2\n150\n-5\n3\n5\n")
        .code(0)
        .stdout(predicate::str::contains(
            "Rating should be between 0 and 100. Setting this one to 0.",
        ))
        .stdout(predicate::str::contains("Current ratings: 0% 0%"))
        .stdout(predicate::str::contains("Current combined rating: 0%"))
        .stdout(predicate::str::contains(
            "Current estimated monthly compensation: $0",
        ));
}

#[test]
fn compare_before_current_entered_shows_guidance() {
    session("2\n1\n50\n4\n5\n")
        .code(0)
        .stdout(predicate::str::contains("CURRENT ratings not yet entered."))
        .stdout(predicate::str::contains("=== Difference ===").not());
}

#[test]
fn end_to_end_comparison() {
    session("1\n2\n30\n20\n2\n2\n50 30\n4\n5\n")
        .code(0)
        .stdout(predicate::str::contains("Current combined rating: 40%"))
        .stdout(predicate::str::contains("Proposed combined rating: 70%"))
        .stdout(predicate::str::contains("Change in combined rating: 40% -> 70%"))
        .stdout(predicate::str::contains("Change in monthly pay: $755 -> $1716"))
        .stdout(predicate::str::contains(
            "Estimated increase of $961 per month",
        ));
}

#[test]
fn closed_input_ends_session_without_error() {
    session("1\n3\n10\n")
        .code(0)
        .stdout(predicate::str::contains("Exiting program."))
        .stderr(predicate::str::contains("error").not());
}

#[test]
fn invalid_utf8_and_huge_numbers_do_not_abort_session() {
    Command::cargo_bin("va-calc")
        .expect("binary should compile")
        .write_stdin(&b"\xff\xfe\n1\n1\n99999999999999999999\n3\n5\n"[..])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Please enter a number from the menu: "))
        .stdout(predicate::str::contains(
            "Rating should be between 0 and 100. Setting this one to 0.",
        ))
        .stdout(predicate::str::contains("Current ratings: 0%"))
        .stdout(predicate::str::contains("Exiting program."));
}
