use std::fmt;

use crossterm::style::{Color, Stylize};

use treelens::domain::value_objects::ValueClass;

use crate::ui::theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText {
    text: String,
    color: Option<Color>,
    bold: bool,
    reverse: bool,
}

impl StyledText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: false,
            reverse: false,
        }
    }

    pub fn colored(text: impl Into<String>, color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::plain(text)
        }
    }

    /// Leaf value text colored by its class
    pub fn value(text: impl Into<String>, class: ValueClass) -> Self {
        Self {
            color: theme::value_color(class),
            ..Self::plain(text)
        }
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::colored(text, theme::colors::DIM)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::colored(text, theme::colors::INFO)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::colored(text, theme::colors::WARNING)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::colored(text, theme::colors::ERROR)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::colored(text, theme::colors::SUCCESS)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Reverse video (cursor highlight)
    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }

        let mut styled = self.text.as_str().stylize();
        if let Some(color) = self.color {
            styled = styled.with(color);
        }
        if self.bold {
            styled = styled.bold();
        }
        if self.reverse {
            styled = styled.reverse();
        }

        format!("{}", styled)
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
