// Theme specific configurations (colors, fonts, styles)

/// Color palette the components style themselves from. Selected once at
/// startup from the configured theme name.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemePalette {
    pub background: String,
    pub surface: String,
    pub foreground: String,
    pub muted: String,
    pub primary: String,
    pub border: String,
    pub error: String,
}

impl ThemePalette {
    pub fn default_dark() -> Self {
        Self {
            background: "#1e1e1e".to_string(),
            surface: "#252526".to_string(),
            foreground: "#d1d4dc".to_string(),
            muted: "#8a8d93".to_string(),
            primary: "#007acc".to_string(),
            border: "#3c3c3c".to_string(),
            error: "#ef5350".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            surface: "#f3f3f3".to_string(),
            foreground: "#1e1e1e".to_string(),
            muted: "#6b6f76".to_string(),
            primary: "#007acc".to_string(),
            border: "#d0d0d0".to_string(),
            error: "#d32f2f".to_string(),
        }
    }

    /// Resolves a configured theme name; anything unrecognized falls back
    /// to dark.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::default_light(),
            _ => Self::default_dark(),
        }
    }
}
