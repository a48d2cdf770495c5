//! View-model state for the diary screen.
//!
//! [`DiarySession`] holds the two draft buffers and the in-memory entry list
//! the view renders from. It never talks to the database itself: the shell
//! runs the [`Journal`](crate::Journal) operation, then hands the fresh listing
//! back through [`DiarySession::apply_reload`].

use crate::{Entry, EntryDraft, Listing};

/// Title of the notice raised when a draft is rejected.
pub const ADD_ENTRY_NOTICE_TITLE: &str = "Add Entry Status";

/// A blocking message the user has to dismiss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct DiarySession {
    title_draft: String,
    body_draft: String,
    entries: Vec<Entry>,
    revision: u64,
    notice: Option<Notice>,
    status: Option<String>,
}

impl DiarySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title_draft(&self) -> &str {
        &self.title_draft
    }

    pub fn body_draft(&self) -> &str {
        &self.body_draft
    }

    pub fn set_title_draft(&mut self, title: String) {
        self.title_draft = title;
    }

    pub fn set_body_draft(&mut self, body: String) {
        self.body_draft = body;
    }

    /// Entries as of the last successful reload.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Last store failure, phrased for the user.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Turns the drafts into an [`EntryDraft`] ready for insertion.
    ///
    /// On success both drafts are cleared. If either draft is empty a notice
    /// is raised, the drafts are kept, and `None` is returned.
    pub fn take_submission(&mut self) -> Option<EntryDraft> {
        let draft = EntryDraft::new(self.title_draft.clone(), self.body_draft.clone());
        if let Err(e) = draft.validate() {
            log::debug!("rejected submission: {e}");
            self.notice = Some(Notice {
                title: ADD_ENTRY_NOTICE_TITLE.to_string(),
                message: e.user_message(),
            });
            return None;
        }

        self.title_draft.clear();
        self.body_draft.clear();
        Some(draft)
    }

    /// Replaces the entry list with a fresh listing.
    ///
    /// A listing older than the one already shown is dropped, since reloads
    /// can finish out of order. A failed reload leaves the previous list in
    /// place and records the error as the status line.
    pub fn apply_reload(&mut self, listing: Result<Listing, String>) {
        match listing {
            Ok(listing) if listing.revision < self.revision => {
                log::debug!(
                    "dropping listing at revision {} (showing {})",
                    listing.revision,
                    self.revision
                );
            }
            Ok(listing) => {
                self.entries = listing.entries;
                self.revision = listing.revision;
                self.status = None;
            }
            Err(message) => self.report_store_error(message),
        }
    }

    /// Records a store failure that did not come with a listing.
    pub fn report_store_error(&mut self, message: String) {
        log::error!("{message}");
        self.status = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Journal, EMPTY_RECORD_MESSAGE};

    fn entry(id: i64, title: &str, body: &str) -> Entry {
        Entry {
            id,
            title: title.to_string(),
            entry: body.to_string(),
        }
    }

    fn listing(revision: u64, entries: Vec<Entry>) -> Listing {
        Listing { revision, entries }
    }

    fn reload(session: &mut DiarySession, journal: &Journal) {
        session.apply_reload(journal.listing().map_err(|e| e.user_message()));
    }

    #[test]
    fn test_take_submission_clears_drafts() {
        let mut session = DiarySession::new();
        session.set_title_draft("Day 1".to_string());
        session.set_body_draft("Went hiking".to_string());

        let draft = session.take_submission().unwrap();
        assert_eq!(draft, EntryDraft::new("Day 1", "Went hiking"));
        assert_eq!(session.title_draft(), "");
        assert_eq!(session.body_draft(), "");
        assert!(session.notice().is_none());
    }

    #[test]
    fn test_empty_title_raises_notice_once() {
        let mut session = DiarySession::new();
        session.set_body_draft("Went hiking".to_string());

        assert!(session.take_submission().is_none());
        let notice = session.notice().unwrap();
        assert_eq!(notice.title, ADD_ENTRY_NOTICE_TITLE);
        assert_eq!(notice.message, EMPTY_RECORD_MESSAGE);
        assert_eq!(session.body_draft(), "Went hiking");

        session.dismiss_notice();
        assert!(session.notice().is_none());
    }

    #[test]
    fn test_empty_body_does_not_touch_storage() {
        let mut journal = Journal::in_memory().unwrap();
        journal.add_entry(&EntryDraft::new("Day 1", "Went hiking")).unwrap();
        let mut session = DiarySession::new();
        reload(&mut session, &journal);
        let before = session.entries().to_vec();

        session.set_title_draft("Day 2".to_string());
        if let Some(draft) = session.take_submission() {
            journal.add_entry(&draft).unwrap();
        }
        reload(&mut session, &journal);

        assert_eq!(session.entries(), before.as_slice());
        assert!(session.notice().is_some());
    }

    #[test]
    fn test_submit_then_reload_shows_new_entry() {
        let mut journal = Journal::in_memory().unwrap();
        let mut session = DiarySession::new();

        session.set_title_draft("Day 1".to_string());
        session.set_body_draft("Went hiking".to_string());
        let draft = session.take_submission().unwrap();
        let id = journal.add_entry(&draft).unwrap();
        reload(&mut session, &journal);

        assert_eq!(session.entries(), &[entry(id, "Day 1", "Went hiking")]);
    }

    #[test]
    fn test_delete_then_reload_removes_entry() {
        let mut journal = Journal::in_memory().unwrap();
        let day1 = journal.add_entry(&EntryDraft::new("Day 1", "Went hiking")).unwrap();
        let day2 = journal
            .add_entry(&EntryDraft::new("Day 2", "Rained all day"))
            .unwrap();
        let mut session = DiarySession::new();
        reload(&mut session, &journal);
        assert_eq!(session.entries().len(), 2);

        journal.delete_entry(day1).unwrap();
        reload(&mut session, &journal);

        assert_eq!(session.entries(), &[entry(day2, "Day 2", "Rained all day")]);
    }

    #[test]
    fn test_failed_reload_keeps_previous_entries() {
        let mut session = DiarySession::new();
        session.apply_reload(Ok(listing(1, vec![entry(1, "Day 1", "Went hiking")])));

        session.apply_reload(Err("Failed to save: disk I/O error".to_string()));

        assert_eq!(session.entries(), &[entry(1, "Day 1", "Went hiking")]);
        assert_eq!(session.status(), Some("Failed to save: disk I/O error"));
    }

    #[test]
    fn test_successful_reload_clears_status() {
        let mut session = DiarySession::new();
        session.report_store_error("Failed to save: locked".to_string());

        session.apply_reload(Ok(listing(0, vec![])));
        assert!(session.status().is_none());
    }

    #[test]
    fn test_stale_listing_does_not_replace_newer_one() {
        let mut session = DiarySession::new();
        let newer = vec![entry(1, "Day 1", "Went hiking"), entry(2, "Day 2", "Rained all day")];
        session.apply_reload(Ok(listing(2, newer.clone())));

        session.apply_reload(Ok(listing(1, vec![entry(1, "Day 1", "Went hiking")])));

        assert_eq!(session.entries(), newer.as_slice());
    }

    #[test]
    fn test_same_revision_listing_is_applied() {
        let mut session = DiarySession::new();
        session.apply_reload(Ok(listing(3, vec![])));
        session.apply_reload(Ok(listing(3, vec![entry(5, "Day 5", "Quiet")])));

        assert_eq!(session.entries(), &[entry(5, "Day 5", "Quiet")]);
    }
}
