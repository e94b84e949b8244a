use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.primary.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the title style for normal blocks.
///
pub fn normal_block_title_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

/// Return the style for a widget's toggle control.
///
pub fn toggle_style(theme: &Theme) -> Style {
    Style::default().fg(theme.toggle.to_color())
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

/// Return the style for de-emphasized text.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for the loading spinner.
///
pub fn spinner_style(theme: &Theme) -> Style {
    Style::default().fg(theme.spinner.to_color())
}

/// Return the style for the footer.
///
pub fn footer_style(theme: &Theme) -> Style {
    Style::default().fg(theme.footer.to_color())
}
