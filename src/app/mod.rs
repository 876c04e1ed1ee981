// App layer: turns core results into what a user sees.

pub mod render;
pub mod report;
pub mod session;

pub use report::DrinkReport;
pub use session::CupSession;
