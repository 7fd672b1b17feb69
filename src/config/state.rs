// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Cards,
    Table,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,
    pub view_mode: ViewMode,
    pub last_upload_path: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            view_mode: ViewMode::Cards,
            last_upload_path: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
