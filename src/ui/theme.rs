use owo_colors::Style;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Dark/light toggle. Purely visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub success: Style,
    pub warn: Style,
    pub info: Style,
    pub dim: Style,
    pub muted: Style,
    pub bar: Style,
}

impl Theme {
    pub fn detect(mode: ThemeMode) -> Self {
        if !console::Term::stdout().is_term() {
            return Self::plain();
        }
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            header: Style::new().cyan().bold(),
            success: Style::new().green().bold(),
            warn: Style::new().yellow().bold(),
            info: Style::new().magenta(),
            dim: Style::new().white().dimmed(),
            muted: Style::new().bright_black(),
            bar: Style::new().bright_blue(),
        }
    }

    pub fn light() -> Self {
        Self {
            header: Style::new().blue().bold(),
            success: Style::new().green(),
            warn: Style::new().yellow(),
            info: Style::new().magenta().bold(),
            dim: Style::new().black(),
            muted: Style::new().bright_black(),
            bar: Style::new().blue(),
        }
    }

    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            success: Style::new(),
            warn: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            muted: Style::new(),
            bar: Style::new(),
        }
    }
}

/// Pick the palette once at startup. Later calls are ignored.
pub fn init_theme(mode: ThemeMode) {
    let _ = THEME.set(Theme::detect(mode));
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(|| Theme::detect(ThemeMode::default()))
}
