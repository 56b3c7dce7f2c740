//! Application state and frame pacing.

use dashboard_core::config::DashboardConfig;
use dashboard_core::dashboard::{Dashboard, InputEvent};
use eframe::egui;

/// Ticks run in one frame at most, so a stalled window does not fast-forward.
const MAX_CATCH_UP_TICKS: u32 = 4;

/// Converts frame times into fixed-rate simulation ticks.
#[derive(Debug, Clone)]
pub struct FrameClock {
    tick_secs: f32,
    accumulator: f32,
}

impl FrameClock {
    pub fn new(tick_rate: f32) -> Self {
        Self {
            tick_secs: 1.0 / tick_rate,
            accumulator: 0.0,
        }
    }

    /// Number of ticks due after `dt` seconds.
    pub fn ticks_due(&mut self, dt: f32) -> u32 {
        // Half a tick of headroom keeps float error from dropping the last one.
        let max_backlog = self.tick_secs * (MAX_CATCH_UP_TICKS as f32 + 0.5);
        self.accumulator = (self.accumulator + dt.max(0.0)).min(max_backlog);
        let due = (self.accumulator / self.tick_secs).floor();
        self.accumulator -= due * self.tick_secs;
        (due as u32).min(MAX_CATCH_UP_TICKS)
    }
}

pub struct DashboardApp {
    pub dashboard: Dashboard,
    clock: FrameClock,
}

impl DashboardApp {
    pub fn new(config: &DashboardConfig) -> Self {
        let mut dashboard = Dashboard::new(config);
        dashboard.load();
        Self {
            dashboard,
            clock: FrameClock::new(config.tick_rate),
        }
    }

    /// Restart button: clear everything and persist the cleared state.
    pub fn restart(&mut self) {
        self.dashboard.reset();
        self.dashboard.save();
    }

    pub fn pick_wordlist(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_title("Select wordlist")
            .add_filter("Text", &["txt", "lst"])
            .add_filter("Any", &["*"])
            .pick_file()
        {
            self.dashboard.use_wordlist(path);
        }
    }

    fn forward_keys(&mut self, ctx: &egui::Context) {
        let events: Vec<InputEvent> = ctx.input(|i| i.events.iter().flat_map(translate).collect());
        for event in events {
            self.dashboard.handle_input(event);
        }
    }
}

/// Keyboard events the dashboard reacts to.
fn translate(event: &egui::Event) -> Vec<InputEvent> {
    match event {
        egui::Event::Text(text) => text.chars().map(InputEvent::Char).collect(),
        egui::Event::Key {
            key, pressed: true, ..
        } => match key {
            egui::Key::Backspace => vec![InputEvent::Backspace],
            egui::Key::Tab => vec![InputEvent::Tab],
            egui::Key::Enter => vec![InputEvent::Submit],
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.forward_keys(ctx);

        let screen = ctx.screen_rect();
        let dt = ctx.input(|i| i.stable_dt);
        let mut rng = rand::thread_rng();
        for _ in 0..self.clock.ticks_due(dt) {
            self.dashboard
                .tick(screen.width(), screen.height(), &mut rng);
        }

        crate::ui::sidebar::draw_sidebar(ctx, self);
        crate::ui::dashboard_view::draw_dashboard_view(ctx, self);
        crate::ui::decorations::draw_hearts(ctx, &self.dashboard.hearts);

        // Everything on screen animates.
        ctx.request_repaint();
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!("Saving state before exit");
        self.dashboard.save();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_tick_per_frame_at_matching_rate() {
        let mut clock = FrameClock::new(60.0);
        let total: u32 = (0..600).map(|_| clock.ticks_due(1.0 / 60.0)).sum();
        assert!((599..=600).contains(&total), "total {total}");
    }

    #[test]
    fn fast_frames_accumulate() {
        let mut clock = FrameClock::new(60.0);
        let total: u32 = (0..240).map(|_| clock.ticks_due(1.0 / 240.0)).sum();
        assert!((59..=60).contains(&total), "total {total}");
    }

    #[test]
    fn long_stall_is_capped() {
        let mut clock = FrameClock::new(60.0);
        assert_eq!(clock.ticks_due(5.0), MAX_CATCH_UP_TICKS);
        assert_eq!(clock.ticks_due(0.0), 0);
    }

    #[test]
    fn text_and_keys_translate() {
        assert_eq!(
            translate(&egui::Event::Text("ab".into())),
            vec![InputEvent::Char('a'), InputEvent::Char('b')]
        );
        let key = |key, pressed| egui::Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        };
        assert_eq!(translate(&key(egui::Key::Tab, true)), vec![InputEvent::Tab]);
        assert_eq!(translate(&key(egui::Key::Enter, true)), vec![InputEvent::Submit]);
        assert_eq!(translate(&key(egui::Key::Backspace, true)), vec![InputEvent::Backspace]);
        assert!(translate(&key(egui::Key::Backspace, false)).is_empty());
        assert!(translate(&key(egui::Key::Escape, true)).is_empty());
    }

    #[test]
    fn exit_saves_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig {
            data_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let mut app = DashboardApp::new(&config);
        app.dashboard.credentials.username = "trinity".into();

        eframe::App::on_exit(&mut app, None);

        let saved = std::fs::read_to_string(config.credentials_path()).unwrap();
        assert_eq!(saved.lines().next(), Some("trinity"));
    }
}
