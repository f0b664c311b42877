use flame_core::{Message, Route};
use flame_theme::{Color, Theme};
use iced::{
    widget::{button, column, container, text},
    Alignment, Element, Font, Length,
};

pub const TITLE: &str = "Flame Sensor";
pub const TAGLINE: &str = "the silent guardian, detecting the unseen to protect us";

/// Welcome screen.  Stateless; its only action is the Start button.
#[derive(Debug, Default)]
pub struct OnboardingWidget;

impl OnboardingWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, theme: &'a Theme) -> Element<'a, Message> {
        let accent = theme.accent.to_iced();

        let start = button(
            container(text("Start").size(theme.font_size).color(Color::WHITE.to_iced()))
                .center_x(Length::Fill),
        )
        .on_press(Message::Navigate(Route::Home))
        .width(Length::Fixed(300.0))
        .padding([10, 20])
        .style(move |_: &iced::Theme, _status| button::Style {
            background: Some(iced::Background::Color(accent)),
            border: iced::Border { radius: 10.0.into(), ..Default::default() },
            shadow: iced::Shadow {
                color: iced::Color { a: 0.2, ..iced::Color::BLACK },
                offset: iced::Vector::new(0.0, 1.0),
                blur_radius: 5.0,
            },
            ..Default::default()
        });

        let content = column![
            text("🔥").size(120.0),
            text(TITLE)
                .size(30.0)
                .color(theme.title.to_iced())
                .font(Font { weight: iced::font::Weight::Bold, ..Font::DEFAULT }),
            container(text(TAGLINE).size(theme.font_size).color(theme.foreground.to_iced()))
                .center_x(Length::Fill)
                .padding([0, 50]),
            start,
        ]
        .spacing(24)
        .align_x(Alignment::Center);

        container(content)
            .center(Length::Fill)
            .into()
    }
}
