//! Color palette and style helpers
//!
//! One [`Theme`] value is built at startup and passed into every render
//! function; nothing here is process-global.

use ratatui::style::{Color, Modifier, Style};

use stackr_core::model::ContainerState;

#[derive(Clone, Debug)]
pub struct Theme {
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub warn: Color,
    pub muted: Color,
    pub text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Indexed(12),
            success: Color::Indexed(10),
            error: Color::Indexed(9),
            warn: Color::Indexed(11),
            muted: Color::Indexed(8),
            text: Color::Indexed(15),
        }
    }
}

impl Theme {
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn value_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn label_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn help_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn box_title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Row color for a container line by lifecycle state.
    pub fn state_style(&self, state: ContainerState) -> Style {
        let color = match state {
            ContainerState::Running => self.success,
            ContainerState::Paused | ContainerState::Restarting => self.warn,
            _ => self.error,
        };
        Style::default().fg(color)
    }

    /// Status dot for a container line or the detail header.
    pub fn state_glyph(&self, state: ContainerState) -> &'static str {
        match state {
            ContainerState::Running => "●",
            ContainerState::Paused | ContainerState::Restarting => "◐",
            _ => "○",
        }
    }
}
