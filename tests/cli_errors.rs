mod common;
use common::corpus_fs;
use predicates::str::contains;

#[test]
fn missing_corpus_is_reported_not_fatal() {
    let dir = corpus_fs();

    assert_cmd::cargo::cargo_bin_cmd!("stark-chat")
        .current_dir(&dir)
        .args(["-q", "-c", "nope.txt"])
        .write_stdin("tell me about cats\n")
        .assert()
        .success()
        .stdout(contains("BOT: Failed to load corpus. Error: nope.txt"))
        .stdout(contains("BOT: Please load a corpus first."))
        .stderr(contains("corpus load failed"));
}

#[test]
fn empty_file_is_reported_distinctly() {
    let dir = corpus_fs();

    assert_cmd::cargo::cargo_bin_cmd!("stark-chat")
        .current_dir(&dir)
        .args(["-q", "-c", "blank.txt"])
        .write_stdin("cat\n")
        .assert()
        .success()
        .stdout(contains("BOT: The selected file is empty."))
        .stdout(contains("BOT: Please load a corpus first."));
}

#[test]
fn failed_reload_keeps_old_corpus() {
    let dir = corpus_fs();

    assert_cmd::cargo::cargo_bin_cmd!("stark-chat")
        .current_dir(&dir)
        .args(["-q", "-c", "pets.txt"])
        .write_stdin("/load blank.txt\n/load\ndogs\n")
        .assert()
        .success()
        .stdout(contains("BOT: The selected file is empty."))
        .stdout(contains("BOT: No file selected."))
        .stdout(contains("BOT: dogs bark loudly."));
}

#[test]
fn oversize_corpus_is_rejected() {
    let dir = corpus_fs();

    assert_cmd::cargo::cargo_bin_cmd!("stark-chat")
        .current_dir(&dir)
        .args(["-q", "--max-size", "4", "-c", "pets.txt"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("exceeds 4 bytes"));
}

#[test]
fn unknown_flag_is_usage_error() {
    assert_cmd::cargo::cargo_bin_cmd!("stark-chat")
        .arg("--frobnicate")
        .assert()
        .failure()
        .code(2);
}
