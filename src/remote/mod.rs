pub mod card;
pub mod parse;
pub mod sheets;
pub mod source;

pub use sheets::SheetClient;
pub use source::LeaveSource;
