// src/config/state.rs
use super::options::AppOptions;

/// Which view the central panel shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Table,
    Chart,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Text in the character field of the scrape bar
    pub character_text: String,

    /// File name (not path) of the table currently loaded, if any
    pub selected_file: Option<String>,

    pub view: View,

    /// Index into chart::CATEGORIES for the word chart
    pub chart_category: usize,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            character_text: s!(super::consts::DEFAULT_CHARACTER),
            selected_file: None,
            view: View::default(),
            chart_category: 0,
            window_w: 1100,
            window_h: 700,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
