pub mod analysis;
pub mod forecast_chart;
pub mod input_panel;
pub mod view;

pub use input_panel::PanelAction;
pub use view::ResultView;
