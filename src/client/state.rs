//! Application state of the browsing UI and its update functions.
//!
//! Updates that require network data return a [`FetchRequest`]; the caller
//! performs it through a [`ListingSource`] and feeds the outcome back with
//! [`AppState::apply_fetch`]. [`AppState::perform`] does both in one step.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::client::comments::{CommentDraft, CommentThreads};
use crate::client::{ClientResult, ListingSource};
use crate::domain::comment::Comment;
use crate::domain::listing::ListingItem;
use crate::domain::types::{CategoryKey, CommentId, ItemId, TypeConstraintError};

pub const WATCHLIST_KEY: &str = "from-your-watchlist";

/// A tab of the browsing UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tab {
    /// Listing fetched from the proxy.
    Category(CategoryKey),
    /// Local filter of the last fetched listing by watched state.
    Watchlist,
}

impl Tab {
    /// Tabs offered by the UI, in display order.
    pub const SHOWN: [Tab; 5] = [
        Tab::Category(CategoryKey::WatchGuide),
        Tab::Category(CategoryKey::FanFavorites),
        Tab::Category(CategoryKey::TopPicks),
        Tab::Watchlist,
        Tab::Category(CategoryKey::MostPopular),
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Tab::Category(category) => category.as_str(),
            Tab::Watchlist => WATCHLIST_KEY,
        }
    }
}

impl Default for Tab {
    fn default() -> Self {
        Tab::Category(CategoryKey::WatchGuide)
    }
}

impl Display for Tab {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Tab {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == WATCHLIST_KEY {
            Ok(Tab::Watchlist)
        } else {
            s.parse().map(Tab::Category)
        }
    }
}

/// A proxy fetch the state is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub category: CategoryKey,
    seq: u64,
}

#[derive(Debug, Default)]
pub struct AppState {
    active_tab: Tab,
    /// Items currently rendered in the grid.
    listing: Vec<ListingItem>,
    /// Most recent successful proxy response, the source of the watchlist.
    last_fetched: Vec<ListingItem>,
    watched: HashMap<ItemId, bool>,
    selected: Option<ListingItem>,
    modal_open: bool,
    comments: CommentThreads,
    draft: CommentDraft,
    last_error: Option<String>,
    latest_seq: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn listing(&self) -> &[ListingItem] {
        &self.listing
    }

    pub fn selected(&self) -> Option<&ListingItem> {
        self.selected.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn is_watched(&self, id: ItemId) -> bool {
        self.watched.get(&id).copied().unwrap_or(false)
    }

    /// Diagnostic message of the last failed fetch, cleared on success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn comments(&self, item: ItemId) -> &[Comment] {
        self.comments.thread(item)
    }

    pub fn draft(&self) -> &CommentDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut CommentDraft {
        &mut self.draft
    }

    /// Switch tabs and recompute the listing.
    pub fn select_tab(&mut self, tab: Tab) -> Option<FetchRequest> {
        self.active_tab = tab;
        self.refresh()
    }

    /// Recompute the listing for the active tab.
    ///
    /// The watchlist is filtered locally and needs no request. Any other tab
    /// returns the fetch to perform. Either way every pending fetch is
    /// superseded.
    pub fn refresh(&mut self) -> Option<FetchRequest> {
        self.latest_seq += 1;
        match self.active_tab {
            Tab::Watchlist => {
                self.listing = self
                    .last_fetched
                    .iter()
                    .filter(|item| self.is_watched(item.id))
                    .cloned()
                    .collect();
                None
            }
            Tab::Category(category) => Some(FetchRequest {
                category,
                seq: self.latest_seq,
            }),
        }
    }

    /// Apply the outcome of `request`. Responses to superseded requests are
    /// dropped.
    pub fn apply_fetch(&mut self, request: FetchRequest, result: ClientResult<Vec<ListingItem>>) {
        if request.seq != self.latest_seq {
            log::debug!(
                "Discarding stale response for {} (request {} of {})",
                request.category,
                request.seq,
                self.latest_seq
            );
            return;
        }

        match result {
            Ok(items) => {
                self.last_fetched = items.clone();
                self.listing = items;
                self.last_error = None;
            }
            Err(e) => {
                log::error!("Error fetching movies: {e}");
                self.listing.clear();
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Perform `request` (if any) against `source` and apply its outcome.
    pub async fn perform<S>(&mut self, source: &S, request: Option<FetchRequest>)
    where
        S: ListingSource + ?Sized,
    {
        if let Some(request) = request {
            let result = source.fetch_category(request.category).await;
            self.apply_fetch(request, result);
        }
    }

    /// Open the detail modal for `item`.
    pub fn open_item(&mut self, item: ListingItem) {
        self.selected = Some(item);
        self.modal_open = true;
        self.draft = CommentDraft::default();
    }

    /// Close the detail modal. Nothing besides the selection is reset.
    pub fn close_modal(&mut self) {
        self.selected = None;
        self.modal_open = false;
    }

    /// Record the watched flag of `id` and recompute the listing.
    pub fn set_watched(&mut self, id: ItemId, watched: bool) -> Option<FetchRequest> {
        self.watched.insert(id, watched);
        self.refresh()
    }

    /// Watched checkbox of the open modal. Ignored when nothing is selected.
    pub fn set_selected_watched(&mut self, watched: bool) -> Option<FetchRequest> {
        let id = self.selected.as_ref()?.id;
        self.set_watched(id, watched)
    }

    /// Post the new-comment draft on the selected item.
    pub fn post_comment(&mut self) -> Option<CommentId> {
        let item = self.selected.as_ref()?.id;
        let id = self.comments.add_comment(item, &self.draft.new_comment)?;
        self.draft.new_comment.clear();
        Some(id)
    }

    pub fn start_reply(&mut self, comment: CommentId) {
        self.draft.reply_to = Some(comment);
    }

    pub fn cancel_reply(&mut self) {
        self.draft.reply_to = None;
    }

    /// Post the reply draft to the comment whose reply box is open.
    pub fn post_reply(&mut self) -> Option<CommentId> {
        let item = self.selected.as_ref()?.id;
        let parent = self.draft.reply_to?;
        let id = self
            .comments
            .add_reply(item, parent, &self.draft.reply_text)?;
        self.draft.reply_text.clear();
        self.draft.reply_to = None;
        Some(id)
    }
}
