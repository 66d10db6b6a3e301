pub mod collate;
pub mod entry;
pub mod error;
pub mod group;
pub mod load;
pub mod navigation;
pub mod paginate;
pub mod search;
pub mod sections;
pub mod source;
pub mod state;
pub mod types;

pub use entry::Entry;
pub use error::LoadError;
pub use group::LetterGroup;
pub use load::LoadState;
pub use navigation::NavigationState;
pub use paginate::{PAGE_SIZE, Page};
pub use search::{LENGTH_SLACK, SearchTerm};
pub use sections::{LetterSection, Sections};
pub use source::DictionarySource;
pub use state::ViewerState;
pub use types::{AppEvent, DictionaryMapping};
