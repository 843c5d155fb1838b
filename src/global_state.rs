use leptos::*;
use once_cell::sync::OnceCell;

use crate::domain::theme::Theme;
use crate::global_signals;

/// How the result panel should render its current text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayStatus {
    #[default]
    Idle,
    Success,
    Error,
}

pub struct Globals {
    pub display_text: RwSignal<String>,
    pub display_status: RwSignal<DisplayStatus>,
    pub current_theme: RwSignal<Theme>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        display_text: create_rw_signal("0".to_string()),
        display_status: create_rw_signal(DisplayStatus::Idle),
        current_theme: create_rw_signal(Theme::default()),
    })
}

global_signals! {
    pub display_text => display_text: String,
    pub display_status => display_status: DisplayStatus,
    pub current_theme => current_theme: Theme,
}
