/// Clickable inline button that opens a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardButton {
    pub text: String,
    pub url: String,
}

impl KeyboardButton {
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }
}

/// Outgoing reply: text body plus ordered rows of link buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Vec<Vec<KeyboardButton>>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: Vec::new(),
        }
    }

    /// Append a row of buttons
    pub fn with_row(mut self, row: Vec<KeyboardButton>) -> Self {
        self.keyboard.push(row);
        self
    }

    /// Append a row holding a single button
    pub fn with_button(self, button: KeyboardButton) -> Self {
        self.with_row(vec![button])
    }

    pub fn has_keyboard(&self) -> bool {
        self.keyboard.iter().any(|row| !row.is_empty())
    }

    pub fn buttons(&self) -> impl Iterator<Item = &KeyboardButton> {
        self.keyboard.iter().flatten()
    }
}
