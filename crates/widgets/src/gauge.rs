use flame_core::{HomeState, Message};
use flame_renderer::{gauge_svg, GaugeGeometry};
use flame_theme::{Palette, Theme};
use iced::{
    widget::{column, container, stack, svg, text},
    Alignment, Element, Font, Length,
};

/// Circular gauge for the latest reading, with the percentage and status
/// label drawn in the status colour.
///
/// Geometry is recomputed on every view; the SVG document is rebuilt from
/// the two arc paths and handed to iced's vector renderer.
#[derive(Debug, Default)]
pub struct GaugeWidget;

impl GaugeWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a HomeState, theme: &'a Theme) -> Element<'a, Message> {
        let status = state.status();
        let color = Palette::status_color(status);
        let size = theme.gauge.size;

        let geometry = GaugeGeometry::for_value(state.current);
        let document = gauge_svg(&geometry, &theme.gauge, color);
        let arcs = svg(svg::Handle::from_memory(document.into_bytes()))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size));

        let bold = Font { weight: iced::font::Weight::Bold, ..Font::DEFAULT };
        let readout = column![
            text(format!("{}%", state.current)).size(40.0).color(color.to_iced()).font(bold),
            text(status.label()).size(theme.font_size).color(color.to_iced()).font(bold),
        ]
        .spacing(12)
        .align_x(Alignment::Center);

        stack![
            arcs,
            container(readout)
                .center_x(Length::Fixed(size))
                .center_y(Length::Fixed(size)),
        ]
        .into()
    }
}
