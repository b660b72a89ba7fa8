use ratatui::style::{Color, Modifier, Style};

// ── Frame colors ──
pub const BORDER: Color = Color::Rgb(80, 80, 80);
pub const FOCUS_BORDER: Color = Color::Cyan;
pub const TEXT: Color = Color::Rgb(200, 200, 200);
pub const MUTED: Color = Color::Rgb(150, 150, 150);
pub const DIM: Color = Color::Rgb(100, 100, 100);

// ── Diff colors ──
pub const ADD_TEXT: Color = Color::Rgb(150, 255, 150);
pub const ADD_BG: Color = Color::Rgb(0, 40, 0);
pub const DEL_TEXT: Color = Color::Rgb(255, 150, 150);
pub const DEL_BG: Color = Color::Rgb(40, 0, 0);
pub const MOD_TEXT: Color = Color::Rgb(255, 230, 150);
pub const MOD_BG: Color = Color::Rgb(40, 40, 0);

pub fn neutral_style() -> Style {
    Style::default().fg(TEXT)
}

pub fn add_style() -> Style {
    Style::default().fg(ADD_TEXT).bg(ADD_BG)
}

pub fn del_style() -> Style {
    Style::default().fg(DEL_TEXT).bg(DEL_BG)
}

pub fn modified_style() -> Style {
    Style::default().fg(MOD_TEXT).bg(MOD_BG)
}

pub fn gutter_style() -> Style {
    Style::default().fg(DIM)
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(FOCUS_BORDER)
    } else {
        Style::default().fg(BORDER)
    }
}

pub fn title_style(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn key_style(bg: Color) -> Style {
    Style::default().fg(Color::White).bg(bg).add_modifier(Modifier::BOLD)
}

pub fn hint_style() -> Style {
    Style::default().fg(MUTED)
}
