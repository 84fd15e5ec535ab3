mod common;
use common::corpus_fs;
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn answers_from_preloaded_corpus() {
    let dir = corpus_fs();

    assert_cmd::cargo::cargo_bin_cmd!("stark-chat")
        .current_dir(&dir)
        .args(["--quiet", "--corpus", "pets.txt"])
        .write_stdin("where did the cat sit\nbye\n")
        .assert()
        .success()
        .stdout(contains("BOT: Corpus loaded successfully! Let's talk."))
        .stdout(contains(
            "You: where did the cat sit\nBOT: the cat sat on the mat.\n",
        ))
        .stdout(contains("BOT: Goodbye! Take care <3"))
        .stderr(predicates::str::is_empty());
}

#[test]
fn load_command_replaces_corpus() {
    let dir = corpus_fs();

    assert_cmd::cargo::cargo_bin_cmd!("stark-chat")
        .current_dir(&dir)
        .args(["-q", "-c", "pets.txt"])
        .write_stdin("/load notes/*.txt\nwho builds projects\nwhere did the cat sit\n")
        .assert()
        .success()
        .stdout(contains("BOT: cargo builds rust projects."))
        .stdout(contains("BOT: I am sorry! I don't understand you."));
}

#[test]
fn turn_precedence_is_preserved() {
    let dir = corpus_fs();

    assert_cmd::cargo::cargo_bin_cmd!("stark-chat")
        .current_dir(&dir)
        .args(["-q", "-s", "1", "-c", "pets.txt"])
        .write_stdin("Thank you\nhey\nparrots\nBye\nparrots\n")
        .assert()
        .success()
        .stdout(contains("BOT: You are welcome!"))
        .stdout(contains("BOT: Goodbye! Take care <3"))
        // input after goodbye is never answered
        .stdout(contains("BOT: parrots can learn many words.").count(1));
}

#[test]
fn banner_is_shown_unless_quiet() {
    assert_cmd::cargo::cargo_bin_cmd!("stark-chat")
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("Chat with Stark!"));

    assert_cmd::cargo::cargo_bin_cmd!("stark-chat")
        .arg("--quiet")
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("Chat with Stark!").not());
}

#[test]
fn querying_before_load_asks_for_corpus() {
    assert_cmd::cargo::cargo_bin_cmd!("stark-chat")
        .arg("-q")
        .write_stdin("what is a cat\n")
        .assert()
        .success()
        .stdout(contains("BOT: Please load a corpus first."));
}
