pub mod cli;
pub mod config;
pub mod constants;
pub mod corpus;
pub mod greeting;
pub mod logging;
pub mod responder;
pub mod session;
pub mod stop_words;
pub mod tfidf;
pub mod tokenizer;
pub mod ui;

pub use corpus::segment_sentences;
pub use greeting::match_greeting;
pub use responder::respond;
