pub mod error;
pub mod event;
pub mod state;
pub mod status;

pub use error::{FlameError, Result};
pub use event::{Message, Route};
pub use state::{History, HomeState, HISTORY_LEN, MAX_VALUE};
pub use status::Status;
