#![windows_subsystem = "windows"]
//! Swipe Refresh Demo - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod constants;
mod easing;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::App;
use constants::APP_VERSION;
use eframe::egui;
use theme::Theme;
use tracing::info;
use ui::components;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "swipe-refresh-demo.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,swipe_refresh_demo=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = utils::get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Swipe Refresh Demo starting");

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(480.0, 760.0)))
        .with_min_inner_size([360.0, 480.0])
        .with_title("Swipe Refresh Demo");

    // Window/taskbar icon, rasterized from the embedded SVG
    {
        let (rgba, width, height) = utils::rasterize(utils::ICON_SVG, 64);
        let icon = egui::IconData { rgba, width, height };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Swipe Refresh Demo",
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, Theme::default(), data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Drain refresh timer completions; once the flag clears, the pull
        // machine is released and its offset settles away below.
        self.refresh.poll();
        if !self.refresh.is_refreshing() && self.pull.is_refreshing() {
            self.pull.finish();
        }

        let theme = self.theme.clone();
        let avatar = self
            .avatar_texture
            .get_or_insert_with(|| {
                let (pixels, w, h) = utils::rasterize(
                    utils::AVATAR_SVG,
                    components::AVATAR_SIZE as u32 * 2,
                );
                ctx.load_texture(
                    "avatar",
                    egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels),
                    egui::TextureOptions::LINEAR,
                )
            })
            .clone();

        let mut content_rect = egui::Rect::NOTHING;
        let mut at_top = true;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme.background))
            .show(ctx, |ui| {
                content_rect = ui.max_rect();

                components::header(ui, &theme);
                ui.add_space(4.0);

                let scroll = egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for (i, item) in self.items.iter().enumerate() {
                            components::list_row(ui, item, &avatar, &theme);
                            if components::needs_divider(i, self.items.len()) {
                                components::list_divider(ui, &theme);
                            }
                        }
                    });

                at_top = scroll.state.offset.y <= 0.0;
            });

        // Pull gesture: a press inside the content while the list is
        // scrolled to the top starts a capture; y-deltas feed the state
        // machine until release.
        let (pressed, down, released, pointer_pos, delta) = ctx.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.primary_released(),
                i.pointer.interact_pos(),
                i.pointer.delta(),
            )
        });

        if pressed && at_top && pointer_pos.is_some_and(|p| content_rect.contains(p)) {
            self.pull_captured = true;
        }
        if self.pull_captured && down {
            self.pull.drag_by(delta.y);
        }
        if released && self.pull_captured {
            self.pull_captured = false;
            if self.pull.release() {
                self.refresh.start(ctx);
            }
        }

        // Indicator overlay across the top of the content, header included
        let overlay = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("pull_indicator"),
        ));
        let time = ctx.input(|i| i.time);
        ui::indicator::paint(&overlay, content_rect, &self.pull, &theme, time);

        let settling = self.pull.settle();
        if self.refresh.is_refreshing() || self.pull_captured || settling {
            ctx.request_repaint();
        }

        if ctx.input(|i| i.viewport().close_requested()) {
            self.save_settings();
        }
    }
}
