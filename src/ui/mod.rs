pub mod chat_window;
pub mod repl;
pub mod tui_events;
pub mod tui_render;
pub mod tui_state;

// Re-export the front-end entrypoints
pub use chat_window::run_chat_tui;
pub use repl::run_repl;
