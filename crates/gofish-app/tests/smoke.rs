use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn bots_only_game_runs_to_completion() {
    Command::cargo_bin("gofish")
        .expect("binary builds")
        .args(["--bots-only", "--seed", "42", "--bot-delay-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GAME OVER"))
        .stdout(predicate::str::contains("Final scores:"));
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = |seed: &str| {
        let output = Command::cargo_bin("gofish")
            .expect("binary builds")
            .args(["--bots-only", "--seed", seed, "--bot-delay-ms", "0"])
            .output()
            .expect("runs");
        assert!(output.status.success());
        output.stdout
    };

    assert_eq!(run("7"), run("7"));
}

#[test]
fn verbose_flag_logs_progress_to_stderr() {
    Command::cargo_bin("gofish")
        .expect("binary builds")
        .env_remove("RUST_LOG")
        .args(["--bots-only", "--seed", "3", "--bot-delay-ms", "0", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GAME OVER"))
        .stderr(predicate::str::contains("starting game"))
        .stderr(predicate::str::contains("game finished"));
}

#[test]
fn quiet_by_default() {
    Command::cargo_bin("gofish")
        .expect("binary builds")
        .env_remove("RUST_LOG")
        .args(["--bots-only", "--seed", "3", "--bot-delay-ms", "0"])
        .assert()
        .success()
        .stderr(predicate::str::contains("starting game").not());
}

#[test]
fn two_player_table_is_accepted() {
    Command::cargo_bin("gofish")
        .expect("binary builds")
        .args(["--bots-only", "--seed", "1", "--bot-delay-ms", "0", "--players", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GAME OVER"));
}

#[test]
fn rejects_out_of_range_player_counts() {
    Command::cargo_bin("gofish")
        .expect("binary builds")
        .args(["--bots-only", "--players", "9"])
        .assert()
        .failure();
}
