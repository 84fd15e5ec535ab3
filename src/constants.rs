// Centralized messages, word lists & default values
pub const DEFAULT_MAX_FILE_SIZE: u64 = 8 * 1024 * 1024;
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const BOT_NAME: &str = "Stark";
pub const USER_PREFIX: &str = "You: ";
pub const BOT_PREFIX: &str = "BOT: ";

pub const MSG_NO_CORPUS: &str = "Please load a corpus first.";
pub const MSG_NOT_UNDERSTOOD: &str = "I am sorry! I don't understand you.";
pub const MSG_FAREWELL: &str = "Goodbye! Take care <3";
pub const MSG_WELCOME: &str = "You are welcome!";
pub const MSG_LOADED: &str = "Corpus loaded successfully! Let's talk.";
pub const MSG_EMPTY_FILE: &str = "The selected file is empty.";
pub const MSG_NO_FILE: &str = "No file selected.";

pub const GREETING_INPUTS: &[&str] = &["hello", "hi", "greetings", "sup", "hey"];
pub const GREETING_PHRASES: &[&str] = &["what's up"];
pub const GREETING_REPLIES: &[&str] = &[
    "hi",
    "hey",
    "hello",
    "hi there",
    "I am glad! You're talking to me.",
];

pub const FAREWELL_INPUT: &str = "bye";
pub const THANKS_INPUTS: &[&str] = &["thanks", "thank you"];
