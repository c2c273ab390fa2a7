use crate::api::{ApiClient, ApiResult};
use crate::editor::EditorSession;
use crate::markdown::render_markdown;
use crate::models::{ContextPoint, MenuPosition};
use leptos::prelude::*;

/// Forms the side panel can host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub(crate) enum PanelForm {
    #[strum(to_string = "Insert Image")]
    Image,
    #[strum(to_string = "Insert Audio")]
    Audio,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct PanelState {
    pub open: bool,
    pub form: Option<PanelForm>,
    /// Bumped on every open so the same form reopens blank.
    pub generation: u64,
}

impl PanelState {
    pub fn open(&mut self, form: PanelForm) {
        self.open = true;
        self.form = Some(form);
        self.generation = self.generation.wrapping_add(1);
    }

    /// Slide out; the form stays mounted until the next open.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn title(&self) -> String {
        self.form.map(|f| f.to_string()).unwrap_or_default()
    }

    pub fn style_right(&self) -> &'static str {
        if self.open {
            "0px"
        } else {
            "-400px"
        }
    }
}

/// What the image results area shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum ImageResults {
    #[default]
    Idle,
    Searching,
    Found(Vec<String>),
    NoResults,
    Failed(String),
}

impl ImageResults {
    pub fn from_search(result: ApiResult<Vec<String>>) -> Self {
        match result {
            Ok(urls) if urls.is_empty() => Self::NoResults,
            Ok(urls) => Self::Found(urls),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    #[cfg(test)]
    pub fn thumbnails(&self) -> &[String] {
        match self {
            Self::Found(urls) => urls,
            _ => &[],
        }
    }
}

/// What the lesson container shows once loading settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum LessonContent {
    /// Rendered markdown, injected as HTML.
    Html(String),
    /// Shown as plain text in place of the lesson.
    Error(String),
}

impl LessonContent {
    pub fn from_load(result: ApiResult<String>) -> Self {
        match result {
            Ok(md) => Self::Html(render_markdown(&md)),
            Err(e) => Self::Error(format!("Error loading file: {e}")),
        }
    }
}

/// Trimmed user input, or `None` when there is nothing to send.
pub(crate) fn submittable(input: &str) -> Option<String> {
    let s = input.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Page-scoped editor state shared by the lesson page's components.
#[derive(Clone, Copy)]
pub(crate) struct EditorContext {
    pub api_client: StoredValue<ApiClient>,
    pub read_only: bool,

    pub session: StoredValue<EditorSession<web_sys::Element>, LocalStorage>,

    /// `Some` while the context menu is visible.
    pub menu: RwSignal<Option<MenuPosition>>,
    pub panel: RwSignal<PanelState>,

    pub image_results: RwSignal<ImageResults>,
    /// Id of the most recently issued search; older responses are ignored.
    pub search_seq: RwSignal<u64>,
}

impl EditorContext {
    pub fn new(api_client: ApiClient, read_only: bool) -> Self {
        Self {
            api_client: StoredValue::new(api_client),
            read_only,
            session: StoredValue::new_local(EditorSession::new()),
            menu: RwSignal::new(None),
            panel: RwSignal::new(PanelState::default()),
            image_results: RwSignal::new(ImageResults::Idle),
            search_seq: RwSignal::new(0),
        }
    }

    pub fn show_menu(&self, point: ContextPoint) {
        self.session
            .update_value(|s| s.record_context_point(point));
        self.menu.set(Some(point.menu_position()));
    }

    pub fn hide_menu(&self) {
        if self.menu.get_untracked().is_some() {
            self.menu.set(None);
        }
    }

    pub fn open_panel(&self, form: PanelForm) {
        if form == PanelForm::Image {
            self.image_results.set(ImageResults::Idle);
        }
        self.panel.update(|p| p.open(form));
        self.hide_menu();
    }

    pub fn close_panel(&self) {
        self.panel.update(|p| p.close());
    }

    /// Start a search and return its id.
    pub fn begin_search(&self) -> u64 {
        let id = self.search_seq.get_untracked().wrapping_add(1);
        self.search_seq.set(id);
        self.image_results.set(ImageResults::Searching);
        id
    }

    /// Apply a search result unless a newer search was issued meanwhile.
    pub fn finish_search(&self, id: u64, result: ApiResult<Vec<String>>) -> bool {
        if self.search_seq.get_untracked() != id {
            return false;
        }
        self.image_results.set(ImageResults::from_search(result));
        true
    }
}
