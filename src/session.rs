use crate::model::{Listing, SetNum};

/// Per-user browsing state. One session per Telegram user id, mutated by
/// every interaction and reset implicitly on a new query.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub set_num: Option<SetNum>,
    pub listings: Vec<Listing>,
    pub pdf_only: bool,
    pub page: usize,
    pub awaiting_set_num: bool,
}

impl Session {
    /// Replaces the session with a fresh results view for a new query.
    pub fn start_results(&mut self, set_num: SetNum, listings: Vec<Listing>) {
        self.set_num = Some(set_num);
        self.listings = listings;
        self.pdf_only = false;
        self.page = 0;
        self.awaiting_set_num = false;
    }

    pub fn clear_results(&mut self) {
        *self = Session::default();
    }

    /// Flipping the filter always resets the page to the first one.
    pub fn toggle_filter(&mut self) {
        self.pdf_only = !self.pdf_only;
        self.page = 0;
    }

    pub fn has_results(&self) -> bool {
        !self.listings.is_empty()
    }
}
