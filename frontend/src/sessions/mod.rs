pub mod editor;
pub mod filter;
pub mod id;
pub mod model;
pub mod query;
pub mod store;

pub use editor::{merge_edits, submit_edits, validate_required, SessionEdits, SessionField};
pub use filter::{filter_by_period, TimePeriod};
pub use id::generate_session_id;
pub use model::{Session, SessionDraft, Vacancy, PLAYER_LEVELS};
pub use query::{PriceBand, SessionQuery};
pub use store::SessionStore;
