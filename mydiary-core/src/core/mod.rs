//! Internal domain modules for the My Diary core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod entry;
pub mod error;
pub mod journal;
pub mod session;
pub mod storage;

#[doc(inline)]
pub use entry::{Entry, EntryDraft, EMPTY_RECORD_MESSAGE};
#[doc(inline)]
pub use error::{DiaryError, Result};
#[doc(inline)]
pub use journal::{Journal, Listing};
#[doc(inline)]
pub use session::{DiarySession, Notice, ADD_ENTRY_NOTICE_TITLE};
#[doc(inline)]
pub use storage::Storage;
