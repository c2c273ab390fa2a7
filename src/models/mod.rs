use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate_audio`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct GenerateAudioRequest {
    pub prompt: String,
}

/// Response of `POST /api/generate_audio`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct GenerateAudioResponse {
    pub audio_url: String,
}

/// Query parameters the lesson page understands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct LessonParams {
    /// Markdown resource under `/outputs/markdown/`.
    pub file: Option<String>,
    pub read_only: bool,
}

impl LessonParams {
    /// Only the literal `"true"` turns on read-only mode.
    pub fn from_query(file: Option<String>, readonly: Option<String>) -> Self {
        Self {
            file: file.filter(|f| !f.trim().is_empty()),
            read_only: readonly.as_deref() == Some("true"),
        }
    }
}

/// Pointer position captured on right-click.
///
/// Page coordinates place the menu; client coordinates are what caret
/// resolution expects (they are relative to the viewport).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ContextPoint {
    pub page_x: i32,
    pub page_y: i32,
    pub client_x: i32,
    pub client_y: i32,
}

impl ContextPoint {
    pub fn viewport(&self) -> ViewportPoint {
        ViewportPoint {
            x: self.client_x,
            y: self.client_y,
        }
    }

    pub fn menu_position(&self) -> MenuPosition {
        MenuPosition {
            top: self.page_y,
            left: self.page_x,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ViewportPoint {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct MenuPosition {
    pub top: i32,
    pub left: i32,
}

impl MenuPosition {
    pub fn style_top(&self) -> String {
        format!("{}px", self.top)
    }

    pub fn style_left(&self) -> String {
        format!("{}px", self.left)
    }
}
