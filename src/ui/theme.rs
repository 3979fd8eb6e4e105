use crossterm::style::{Color, Stylize};

/// Design tokens for the wasm-soup console.
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const ARROW: &str = "↳";
    pub const PACKAGE: &str = "📦";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";
    pub const ARROW: &str = "[>]";
    pub const PACKAGE: &str = "[SOUP]";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Arrow,
    Package,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => icons::SUCCESS,
            (true, Icon::Error) => icons::ERROR,
            (true, Icon::Warning) => icons::WARNING,
            (true, Icon::Progress) => icons::PROGRESS,
            (true, Icon::Arrow) => icons::ARROW,
            (true, Icon::Package) => icons::PACKAGE,
            (false, Icon::Success) => icons_ascii::SUCCESS,
            (false, Icon::Error) => icons_ascii::ERROR,
            (false, Icon::Warning) => icons_ascii::WARNING,
            (false, Icon::Progress) => icons_ascii::PROGRESS,
            (false, Icon::Arrow) => icons_ascii::ARROW,
            (false, Icon::Package) => icons_ascii::PACKAGE,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => colors::SUCCESS,
            Icon::Error => colors::ERROR,
            Icon::Warning | Icon::Progress => colors::WARNING,
            Icon::Arrow => colors::DIM,
            Icon::Package => colors::INFO,
        };
        format!("{}", s.with(color))
    }
}

/// Grey text for secondary details, or plain text without color.
pub fn dim(text: &str, supports_color: bool) -> String {
    if supports_color {
        format!("{}", text.with(colors::DIM))
    } else {
        text.to_string()
    }
}

/// Bold text, or plain text without color.
pub fn bold(text: &str, supports_color: bool) -> String {
    if supports_color {
        format!("{}", text.bold())
    } else {
        text.to_string()
    }
}
