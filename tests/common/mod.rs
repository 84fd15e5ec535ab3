#![allow(dead_code)]
use assert_fs::{TempDir, prelude::*};

pub const PETS: &str =
    "The cat sat on the mat. Dogs bark loudly.\n\nParrots can learn\nmany words.";

/// Builds a fixture tree:
/// root/
///   pets.txt     (three sentences, one wrapped over two lines)
///   blank.txt    (whitespace only)
///   notes/a.txt, notes/b.txt
pub fn corpus_fs() -> TempDir {
    let td = TempDir::new().unwrap();
    td.child("pets.txt").write_str(PETS).unwrap();
    td.child("blank.txt").write_str("  \n\n \t\n").unwrap();
    td.child("notes/a.txt")
        .write_str("Rust has no garbage collector.")
        .unwrap();
    td.child("notes/b.txt")
        .write_str("Cargo builds Rust projects.")
        .unwrap();
    td
}
