pub mod api;
pub mod editor;
pub mod generated_info;
pub mod orchestrator;
pub mod preview;
pub mod view;

pub use view::ConvertToLiquidPage;
