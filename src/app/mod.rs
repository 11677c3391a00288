//! App module - contains the main application state and logic

mod pull;
mod refresh;

pub use pull::PullState;
pub use refresh::RefreshController;

use crate::constants::{REFRESH_DELAY, TRIGGER_DISTANCE};
use crate::settings::Settings;
use crate::theme::Theme;
use crate::types::{demo_items, ListItem};
use eframe::egui;
use std::path::PathBuf;

pub struct App {
    pub(crate) theme: Theme,
    pub(crate) items: Vec<ListItem>,
    pub(crate) pull: PullState,
    pub(crate) refresh: RefreshController,
    pub(crate) avatar_texture: Option<egui::TextureHandle>,
    // True while a press that started at the top of the list is being
    // tracked as a pull gesture.
    pub(crate) pull_captured: bool,
    // Window geometry, tracked for saving on exit
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, theme: Theme, data_dir: PathBuf) -> Self {
        theme.apply_visuals(&cc.egui_ctx);

        Self {
            theme,
            items: demo_items(),
            pull: PullState::new(TRIGGER_DISTANCE),
            refresh: RefreshController::new(REFRESH_DELAY),
            avatar_texture: None,
            pull_captured: false,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
        };
        settings.save(&self.data_dir);
    }
}
