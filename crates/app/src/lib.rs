//! Application shell for `flame`.
//!
//! Owns the Iced application loop and wires together the background tasks:
//! - Sample feed (1 s ticks, only while the Home screen is mounted)
//! - Config file watcher (live theme reload on change)

pub mod screen;

pub use screen::Screen;

use flame_config::{default_path, load as load_config, ConfigWatcher, FlameConfig};
use flame_core::Message;
use flame_sensor::{spawn_feed, RandomProvider, SAMPLE_INTERVAL};
use flame_theme::{Color, Theme};
use flame_widgets::{ChartWidget, GaugeWidget, HeaderWidget, OnboardingWidget};
use futures::{channel::mpsc::Sender, SinkExt};
use iced::{
    widget::{column, container},
    Alignment, Element, Length, Size, Subscription, Task,
};
use std::time::Duration;
use tracing::{debug, info, warn};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Start the app.  Returns when the window is closed.
pub fn run() -> iced::Result {
    let config = load_config(default_path()).unwrap_or_else(|e| {
        warn!("{e}; using default config");
        FlameConfig::default()
    });
    let size = Size::new(config.window.width as f32, config.window.height as f32);

    iced::application(move || Flame::new(config.clone()), Flame::update, Flame::view)
        .title(Flame::title)
        .subscription(Flame::subscription)
        .style(Flame::style)
        .window_size(size)
        .run()
}

// ── State ─────────────────────────────────────────────────────────────────────

pub struct Flame {
    screen:     Screen,
    config:     FlameConfig,
    theme:      Theme,
    onboarding: OnboardingWidget,
    header:     HeaderWidget,
    gauge:      GaugeWidget,
    chart:      ChartWidget,
}

impl Flame {
    pub fn new(config: FlameConfig) -> Self {
        let theme  = Theme::from_config(&config);
        let screen = Screen::mount(config.window.start);
        info!("Starting on {}", screen.route());

        Self {
            screen,
            config,
            theme,
            onboarding: OnboardingWidget::new(),
            header:     HeaderWidget::new(),
            gauge:      GaugeWidget::new(),
            chart:      ChartWidget::new(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    fn title(&self) -> String {
        self.config.window.title.clone()
    }

    // ── Update ────────────────────────────────────────────────────────────────

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => {
                if self.screen.navigate(route) {
                    info!("Navigated to {route}");
                }
            }
            Message::Sample(value) => {
                if self.screen.record_sample(value) {
                    debug!(value, "sample recorded");
                } else {
                    debug!(value, "sample arrived after Home was closed; dropped");
                }
            }
            Message::ConfigReloaded => self.reload_config(),
        }
        Task::none()
    }

    fn reload_config(&mut self) {
        match load_config(default_path()) {
            Ok(cfg) => {
                info!("Config reloaded");
                self.theme  = Theme::from_config(&cfg);
                self.config = cfg;
            }
            Err(e) => warn!("Config reload failed: {e}"),
        }
    }

    // ── View ──────────────────────────────────────────────────────────────────

    pub fn view(&self) -> Element<'_, Message> {
        match &self.screen {
            Screen::Onboarding => self.onboarding.view(&self.theme),
            Screen::Home(state) => {
                let gauge = container(self.gauge.view(state, &self.theme)).center_x(Length::Fill);

                column![
                    self.header.view(&self.theme),
                    gauge,
                    self.chart.view(state, &self.theme),
                ]
                .spacing(20)
                .padding([40, 0])
                .align_x(Alignment::Center)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
            }
        }
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    pub fn subscription(&self) -> Subscription<Message> {
        let config = Subscription::run(config_stream);

        if self.screen.wants_samples() {
            Subscription::batch([config, Subscription::run(sample_stream)])
        } else {
            config
        }
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: self.theme.background.over(Color::WHITE).to_iced(),
            text_color: self.theme.foreground.to_iced(),
        }
    }
}

// ── Subscription streams ──────────────────────────────────────────────────────
//
// Each free function acts as both the stream builder AND the unique identity
// key for `Subscription::run(fn_ptr)`.  When a subscription disappears from
// `subscription()`, Iced drops its stream along with everything it owns.

/// Runs the sample feed for as long as Home is mounted.  Dropping the stream
/// drops the `SampleFeed`, which cancels its timer task.
fn sample_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(4, |mut sender: Sender<Message>| async move {
        let seed = load_config(default_path())
            .map(|cfg| cfg.sampling.seed)
            .unwrap_or_default();
        let provider = match seed {
            Some(seed) => RandomProvider::seeded(seed),
            None       => RandomProvider::new(),
        };

        let mut feed = spawn_feed(SAMPLE_INTERVAL, provider);
        info!(?seed, "Sample feed started");

        while let Some(value) = feed.recv().await {
            if sender.send(Message::Sample(value)).await.is_err() {
                break;
            }
        }

        info!("Sample feed stopped");
    })
}

/// Watches `~/.config/flame/flame.toml` for writes and sends `ConfigReloaded`.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let (_watcher, mut rx) = ConfigWatcher::spawn(default_path());

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::ConfigReloaded);
        }

        // Watcher gave up (e.g. config dir missing); stay idle instead of
        // letting Iced restart the subscription in a loop.
        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}
