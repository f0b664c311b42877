pub mod chart;
pub mod gauge;
pub mod header;
pub mod onboarding;

pub use chart::ChartWidget;
pub use gauge::GaugeWidget;
pub use header::HeaderWidget;
pub use onboarding::OnboardingWidget;
