pub mod config;
pub mod cursor;
pub mod error;
pub mod locale;
pub mod resolver;
pub mod simulated;
pub mod target;
pub mod widget;

pub use cursor::CalendarCursor;
pub use error::{Error, ErrorKind};
pub use resolver::RelativeDateResolver;
pub use target::TargetDate;
pub use widget::CalendarWidget;
