use flame_core::{Message, Route};
use flame_theme::Theme;
use iced::{
    widget::{button, container, row, text},
    Alignment, Element, Font, Length,
};

/// Top bar of the Home screen: back chevron and the "Analytics" title.
#[derive(Debug, Default)]
pub struct HeaderWidget;

impl HeaderWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, theme: &'a Theme) -> Element<'a, Message> {
        let fg = theme.foreground.to_iced();

        let back = button(text("‹").size(30.0).color(fg))
            .on_press(Message::Navigate(Route::Onboarding))
            .style(button::text);

        let title = container(
            text("Analytics")
                .size(theme.font_size)
                .color(fg)
                .font(Font { weight: iced::font::Weight::Bold, ..Font::DEFAULT }),
        )
        .center_x(Length::Fill);

        row![back, title]
            .align_y(Alignment::Center)
            .width(Length::Fill)
            .padding([0, 20])
            .into()
    }
}
