use crate::constants::{BOT_PREFIX, USER_PREFIX};

/// Who said a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLine {
    pub speaker: Speaker,
    pub text: String,
}

impl ChatLine {
    pub fn label(&self) -> &'static str {
        match self.speaker {
            Speaker::User => USER_PREFIX,
            Speaker::Bot => BOT_PREFIX,
        }
    }
}

/// Shared UI state for the chat window
#[derive(Debug, Default)]
pub struct UiState {
    pub transcript: Vec<ChatLine>,
    pub input: String,
    /// Lines scrolled up from the bottom of the transcript.
    pub scroll_back: usize,
    pub closed: bool,
    pub status: String,
}

impl UiState {
    pub fn new(startup: &[String]) -> Self {
        let mut state = UiState::default();
        for line in startup {
            state.push_bot(line.clone());
        }
        state
    }

    pub fn push_user(
        &mut self,
        text: String,
    ) {
        self.transcript.push(ChatLine {
            speaker: Speaker::User,
            text,
        });
        self.scroll_back = 0;
    }

    pub fn push_bot(
        &mut self,
        text: String,
    ) {
        self.transcript.push(ChatLine {
            speaker: Speaker::Bot,
            text,
        });
        self.scroll_back = 0;
    }

    /// Takes the pending input, leaving the box empty.
    pub fn take_input(&mut self) -> String {
        std::mem::take(&mut self.input)
    }

    /// Rows the transcript occupies when wrapped at `width` columns.
    pub fn wrapped_height(
        &self,
        width: usize,
    ) -> usize {
        let width = width.max(1);
        self.transcript
            .iter()
            .map(|l| {
                let chars = l.label().chars().count() + l.text.chars().count();
                chars.div_ceil(width).max(1)
            })
            .sum()
    }
}

/// First transcript row to show so the newest line sits at the bottom,
/// shifted up by `scroll_back` and clamped to the top.
pub fn top_row(
    total_rows: usize,
    visible_rows: usize,
    scroll_back: &mut usize,
) -> usize {
    let max_back = total_rows.saturating_sub(visible_rows);
    if *scroll_back > max_back {
        *scroll_back = max_back;
    }
    max_back - *scroll_back
}
