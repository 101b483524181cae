pub mod common;
pub mod response;
pub mod result;
pub mod screen;
pub mod system;

pub use common::{CreateView, Guidance, StatusBadge, StatusLevel, ViewOptions};
pub use response::{AskViewModel, ResponseViewModel};
pub use result::CommandResultViewModel;
pub use screen::{
    ExampleListItem, InputViewModel, ResultsPaneViewModel, ScreenViewModel, StatusBarViewModel,
};
pub use system::{ExampleListViewModel, HealthViewModel, TableListViewModel};
