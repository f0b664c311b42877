use flame_core::{HomeState, Message};
use flame_renderer::{ChartLayout, ChartSeries, PlotArea, Segment};
use flame_theme::{ChartStyle, Theme};
use iced::{
    mouse,
    widget::{
        canvas::{self, Frame, Geometry, Path, Stroke},
        column, container, text,
    },
    Element, Font, Length, Pixels, Point, Rectangle, Renderer,
};

/// Space reserved around the plot for axis labels.
const PAD_LEFT:   f32 = 36.0;
const PAD_RIGHT:  f32 = 16.0;
const PAD_TOP:    f32 = 12.0;
const PAD_BOTTOM: f32 = 22.0;

/// Number of labels on the y axis.
const Y_TICKS: usize = 4;

/// "Overview" card with the history line chart.
///
/// Shows a placeholder until the first reading arrives.
#[derive(Debug, Default)]
pub struct ChartWidget;

impl ChartWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a HomeState, theme: &'a Theme) -> Element<'a, Message> {
        let style = &theme.chart;
        let series = ChartSeries::from_history(&state.history);

        let body: Element<'a, Message> = if series.is_empty() {
            container(text("No data available").color(theme.foreground.to_iced()))
                .center_x(Length::Fill)
                .center_y(Length::Fixed(style.height))
                .into()
        } else {
            canvas::Canvas::new(LineChart { series, style: style.clone() })
                .width(Length::Fill)
                .height(Length::Fixed(style.height))
                .into()
        };

        let card = column![
            text("Overview")
                .size(24.0)
                .color(theme.foreground.to_iced())
                .font(Font { weight: iced::font::Weight::Bold, ..Font::DEFAULT }),
            body,
        ]
        .spacing(16)
        .padding([24, 20]);

        let background = style.background.to_iced();
        container(card)
            .width(Length::Fill)
            .style(move |_: &iced::Theme| container::Style {
                background: Some(iced::Background::Color(background)),
                border: iced::Border { radius: 40.0.into(), ..Default::default() },
                ..Default::default()
            })
            .into()
    }
}

/// Canvas program drawing one series.
#[derive(Debug)]
struct LineChart {
    series: ChartSeries,
    style:  ChartStyle,
}

impl canvas::Program<Message> for LineChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let area = PlotArea {
            left:   f64::from(PAD_LEFT),
            top:    f64::from(PAD_TOP),
            width:  f64::from((bounds.width - PAD_LEFT - PAD_RIGHT).max(1.0)),
            height: f64::from((bounds.height - PAD_TOP - PAD_BOTTOM).max(1.0)),
        };
        let layout = ChartLayout::new(&self.series, area);

        self.draw_labels(&mut frame, &layout);
        self.draw_series(&mut frame, &layout);

        vec![frame.into_geometry()]
    }
}

impl LineChart {
    fn draw_series(&self, frame: &mut Frame, layout: &ChartLayout) {
        let style = &self.style;
        let Some(&first) = layout.points.first() else {
            return;
        };
        let segments = layout.segments(style.bezier);
        let line = Path::new(|b| {
            b.move_to(to_iced(first));
            trace(b, &segments);
        });

        // Area under the line, closed along the plot's bottom edge.
        if let Some(&last) = layout.points.last() {
            let bottom = layout.area.bottom() as f32;
            let area = Path::new(|b| {
                b.move_to(Point::new(first.x as f32, bottom));
                b.line_to(to_iced(first));
                trace(b, &segments);
                b.line_to(Point::new(last.x as f32, bottom));
                b.close();
            });
            frame.fill(&area, style.line.with_alpha(style.fill_opacity).to_iced());
        }

        frame.stroke(
            &line,
            Stroke::default()
                .with_width(style.line_width)
                .with_color(style.line.to_iced())
                .with_line_cap(canvas::LineCap::Round)
                .with_line_join(canvas::LineJoin::Round),
        );

        if style.show_dots {
            for &p in &layout.points {
                let dot = Path::circle(to_iced(p), style.dot_radius);
                frame.fill(&dot, style.line.to_iced());
                frame.stroke(
                    &dot,
                    Stroke::default()
                        .with_width(style.dot_outline_width)
                        .with_color(style.dot_outline.to_iced()),
                );
            }
        }
    }

    fn draw_labels(&self, frame: &mut Frame, layout: &ChartLayout) {
        let style = &self.style;
        let size = style.label_size;

        for (value, y) in layout.y_ticks(Y_TICKS) {
            frame.fill_text(canvas::Text {
                content:  format!("{value:.0}"),
                position: Point::new(4.0, y as f32 - size / 2.0),
                color:    style.label.to_iced(),
                size:     Pixels(size),
                ..canvas::Text::default()
            });
        }

        let label_y = layout.area.bottom() as f32 + 6.0;
        for (label, p) in self.series.labels.iter().zip(&layout.points) {
            frame.fill_text(canvas::Text {
                content:  label.clone(),
                position: Point::new(p.x as f32 - size / 4.0 * label.len() as f32, label_y),
                color:    style.label.to_iced(),
                size:     Pixels(size),
                ..canvas::Text::default()
            });
        }
    }
}

fn trace(b: &mut canvas::path::Builder, segments: &[Segment]) {
    for segment in segments {
        match *segment {
            Segment::Line(to) => b.line_to(to_iced(to)),
            Segment::Cubic { c1, c2, to } => {
                b.bezier_curve_to(to_iced(c1), to_iced(c2), to_iced(to));
            }
        }
    }
}

fn to_iced(p: flame_renderer::Point) -> Point {
    Point::new(p.x as f32, p.y as f32)
}
