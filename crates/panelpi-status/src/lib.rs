//! # PanelPi Status
//!
//! The printer status panel: maps controller snapshots to display values,
//! decides which print controls are enabled, and forwards user requests to
//! the printer controller.
//!
//! ```rust,ignore
//! use panelpi_status::{Control, StatusView, ChannelController};
//!
//! let (controller, requests) = ChannelController::channel();
//! let mut view = StatusView::new(controller, &panelpi_settings::Config::default());
//! view.on_snapshot(snapshot);
//! view.activate(Control::PauseResume);
//! ```

pub mod actions;
pub mod clock;
pub mod controls;
pub mod display;
pub mod driver;
pub mod mapper;
pub mod popups;
pub mod speed_factor;
pub mod view;

pub use actions::{dispatch, ChannelController, PrinterController};
pub use clock::{Clock, FixedClock, SystemClock};
pub use controls::{ButtonIcon, ButtonStyle, Control, ControlPanel, ControlState};
pub use display::{
    DisplayModel, DurationsDisplay, FileDisplay, ProgressDisplay, TimeLeftDisplay,
    TimesLeftDisplay,
};
pub use driver::{run_status_view, Feeds};
pub use mapper::{present, LayerMemory, RenderContext};
pub use popups::{PlaceholderSlider, PopupModels, SliderModel};
pub use speed_factor::SpeedFactorSlider;
pub use view::StatusView;
