//! Inline create/edit/delete for one month-scoped list.
//!
//! An editor owns a single draft slot. `EditorMode` makes "adding and editing
//! at the same time" unrepresentable, and every transition that opens or
//! closes a draft bumps a ticket so a late completion cannot clobber a newer
//! draft.
//!
//! The editor never patches the list it renders. After a successful mutation
//! it asks the owner to refetch and waits for fresh entries.

use std::fmt;

use shared::{DraftIssue, EntryId, MonthId};

use super::context::LedgerContext;
use crate::services::{ApiError, LedgerRequest};

/// Per-resource behaviour plugged into [`EntryEditor`]
pub trait EntryKind: 'static {
    type Entry: Clone + PartialEq + fmt::Debug + 'static;
    type Draft: Clone + PartialEq + fmt::Debug + 'static;
    type Field: Copy + PartialEq + fmt::Debug + 'static;
    type Payload: Clone + PartialEq + fmt::Debug + 'static;

    /// Log target
    const COMPONENT: &'static str;

    fn entry_id(entry: &Self::Entry) -> EntryId;

    /// Whether the section shows this entry as an editable row
    fn is_listed(_entry: &Self::Entry) -> bool {
        true
    }

    /// Whether a new entry can be started at all in this context
    fn check_can_add(_ctx: &LedgerContext) -> Result<(), Blocker> {
        Ok(())
    }

    fn blank_draft(ctx: &LedgerContext) -> Self::Draft;
    fn draft_from(entry: &Self::Entry) -> Self::Draft;
    fn set_field(draft: &mut Self::Draft, field: Self::Field, value: String);
    fn field_value(draft: &Self::Draft, field: Self::Field) -> &str;
    fn validate(draft: &Self::Draft, ctx: &LedgerContext) -> Result<Self::Payload, DraftIssue>;

    fn create_request(month_id: MonthId, payload: Self::Payload) -> LedgerRequest;
    fn update_request(month_id: MonthId, id: EntryId, payload: Self::Payload) -> LedgerRequest;
    fn delete_request(month_id: MonthId, id: EntryId) -> LedgerRequest;
}

/// Why "add" shows a notice instead of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blocker {
    NoCategories,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorMode<D> {
    Idle,
    Adding(D),
    Editing { id: EntryId, draft: D },
    Blocked(Blocker),
}

pub type Ticket = u64;

/// A request ready to go out, tagged with the draft it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Pending {
    pub ticket: Ticket,
    pub request: LedgerRequest,
}

/// Reducer actions, one per user intent or completed request
pub enum EditorAction<K: EntryKind> {
    BeginAdd(LedgerContext),
    BeginEdit(K::Entry, LedgerContext),
    SetField(K::Field, String),
    Cancel,
    SubmitSettled { ticket: Ticket, result: Result<(), ApiError> },
    DeleteSettled(Result<(), ApiError>),
    Sync(LedgerContext, Vec<K::Entry>),
}

pub struct EntryEditor<K: EntryKind> {
    mode: EditorMode<K::Draft>,
    ticket: Ticket,
    failure: Option<String>,
}

impl<K: EntryKind> EntryEditor<K> {
    pub fn new() -> Self {
        Self {
            mode: EditorMode::Idle,
            ticket: 0,
            failure: None,
        }
    }

    /// Last failed request, if the user has not moved on since
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.mode, EditorMode::Idle)
    }

    pub fn is_adding(&self) -> bool {
        matches!(self.mode, EditorMode::Adding(_))
    }

    pub fn editing_id(&self) -> Option<EntryId> {
        match self.mode {
            EditorMode::Editing { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn blocker(&self) -> Option<Blocker> {
        match self.mode {
            EditorMode::Blocked(blocker) => Some(blocker),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&K::Draft> {
        match &self.mode {
            EditorMode::Adding(draft) | EditorMode::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Current text of one draft field, empty when no draft is open
    pub fn field(&self, field: K::Field) -> &str {
        self.draft().map(|d| K::field_value(d, field)).unwrap_or("")
    }

    fn enter(&mut self, mode: EditorMode<K::Draft>) {
        self.mode = mode;
        self.ticket += 1;
        self.failure = None;
    }

    /// Idle -> Adding, or Idle -> Blocked when the kind refuses new entries
    pub fn begin_add(&mut self, ctx: &LedgerContext) -> bool {
        if ctx.is_read_only || !self.is_idle() {
            return false;
        }
        match K::check_can_add(ctx) {
            Ok(()) => self.enter(EditorMode::Adding(K::blank_draft(ctx))),
            Err(blocker) => {
                log::debug!(target: K::COMPONENT, "add blocked: {:?}", blocker);
                self.enter(EditorMode::Blocked(blocker));
            }
        }
        true
    }

    /// Idle -> Editing, with the draft pre-filled from `entry`
    pub fn begin_edit(&mut self, entry: &K::Entry, ctx: &LedgerContext) -> bool {
        if ctx.is_read_only || !self.is_idle() {
            return false;
        }
        self.enter(EditorMode::Editing {
            id: K::entry_id(entry),
            draft: K::draft_from(entry),
        });
        true
    }

    pub fn set_field(&mut self, field: K::Field, value: String) -> bool {
        match &mut self.mode {
            EditorMode::Adding(draft) | EditorMode::Editing { draft, .. } => {
                K::set_field(draft, field, value);
                self.failure = None;
                true
            }
            _ => false,
        }
    }

    /// Discard any draft or notice. Sends nothing.
    pub fn cancel(&mut self) {
        if !self.is_idle() {
            self.enter(EditorMode::Idle);
        }
    }

    /// Build the request for the open draft. `None` means the submit is a
    /// silent no-op: read-only month, no draft, or a draft that fails
    /// validation.
    pub fn prepare_submit(&self, ctx: &LedgerContext) -> Option<Pending> {
        if ctx.is_read_only {
            return None;
        }
        let (id, draft) = match &self.mode {
            EditorMode::Adding(draft) => (None, draft),
            EditorMode::Editing { id, draft } => (Some(*id), draft),
            _ => return None,
        };
        let payload = match K::validate(draft, ctx) {
            Ok(payload) => payload,
            Err(issue) => {
                log::debug!(target: K::COMPONENT, "submit ignored: {}", issue);
                return None;
            }
        };
        let request = match id {
            Some(id) => K::update_request(ctx.month_id, id, payload),
            None => K::create_request(ctx.month_id, payload),
        };
        Some(Pending {
            ticket: self.ticket,
            request,
        })
    }

    /// Record how a submit went. A stale ticket never touches a newer draft.
    pub fn settle_submit(&mut self, ticket: Ticket, result: Result<(), ApiError>) {
        let current = ticket == self.ticket;
        match result {
            Ok(()) => {
                if current {
                    self.enter(EditorMode::Idle);
                }
            }
            Err(err) => {
                log::error!(target: K::COMPONENT, "save failed: {}", err);
                if current {
                    self.failure = Some(err.user_message());
                }
            }
        }
    }

    /// Deletes fire straight away, independent of any open draft
    pub fn prepare_delete(&self, id: EntryId, ctx: &LedgerContext) -> Option<LedgerRequest> {
        if ctx.is_read_only {
            return None;
        }
        Some(K::delete_request(ctx.month_id, id))
    }

    /// A successful delete drops any draft
    pub fn settle_delete(&mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => self.enter(EditorMode::Idle),
            Err(err) => {
                log::error!(target: K::COMPONENT, "delete failed: {}", err);
                self.failure = Some(err.user_message());
            }
        }
    }

    /// Reconcile with a fresh context from the owner. Drafts close when the
    /// month turns read-only or the entry being edited is no longer listed.
    pub fn sync(&mut self, ctx: &LedgerContext, entries: &[K::Entry]) {
        let stale = match &self.mode {
            EditorMode::Idle => false,
            _ if ctx.is_read_only => true,
            EditorMode::Editing { id, .. } => !entries
                .iter()
                .any(|e| K::entry_id(e) == *id && K::is_listed(e)),
            EditorMode::Blocked(Blocker::NoCategories) => !ctx.categories.is_empty(),
            EditorMode::Adding(_) => false,
        };
        if stale {
            self.enter(EditorMode::Idle);
        }
    }

    pub fn apply(&mut self, action: EditorAction<K>) {
        match action {
            EditorAction::BeginAdd(ctx) => {
                self.begin_add(&ctx);
            }
            EditorAction::BeginEdit(entry, ctx) => {
                self.begin_edit(&entry, &ctx);
            }
            EditorAction::SetField(field, value) => {
                self.set_field(field, value);
            }
            EditorAction::Cancel => self.cancel(),
            EditorAction::SubmitSettled { ticket, result } => self.settle_submit(ticket, result),
            EditorAction::DeleteSettled(result) => self.settle_delete(result),
            EditorAction::Sync(ctx, entries) => self.sync(&ctx, &entries),
        }
    }
}

impl<K: EntryKind> Default for EntryEditor<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: EntryKind> Clone for EntryEditor<K> {
    fn clone(&self) -> Self {
        Self {
            mode: self.mode.clone(),
            ticket: self.ticket,
            failure: self.failure.clone(),
        }
    }
}

impl<K: EntryKind> PartialEq for EntryEditor<K> {
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode && self.ticket == other.ticket && self.failure == other.failure
    }
}

impl<K: EntryKind> fmt::Debug for EntryEditor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryEditor")
            .field("component", &K::COMPONENT)
            .field("mode", &self.mode)
            .field("ticket", &self.ticket)
            .field("failure", &self.failure)
            .finish()
    }
}

#[cfg(test)]
pub mod testing {
    //! Submit and delete exactly as the Yew hook runs them, minus the reducer.

    use super::*;
    use crate::services::LedgerApi;
    use crate::state::request::run_request;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Outcome {
        /// A guard refused; nothing was sent
        Skipped,
        Saved,
        Failed(ApiError),
    }

    impl From<Result<(), ApiError>> for Outcome {
        fn from(result: Result<(), ApiError>) -> Self {
            match result {
                Ok(()) => Outcome::Saved,
                Err(err) => Outcome::Failed(err),
            }
        }
    }

    pub async fn submit<K, A, F>(editor: &mut EntryEditor<K>, api: &A, ctx: &LedgerContext, on_update: F) -> Outcome
    where
        K: EntryKind,
        A: LedgerApi + ?Sized,
        F: FnOnce(),
    {
        let Some(pending) = editor.prepare_submit(ctx) else {
            return Outcome::Skipped;
        };
        let ticket = pending.ticket;
        run_request(api, K::COMPONENT, pending.request, |result| editor.settle_submit(ticket, result), on_update)
            .await
            .into()
    }

    pub async fn delete<K, A, F>(
        editor: &mut EntryEditor<K>,
        api: &A,
        ctx: &LedgerContext,
        id: EntryId,
        on_update: F,
    ) -> Outcome
    where
        K: EntryKind,
        A: LedgerApi + ?Sized,
        F: FnOnce(),
    {
        let Some(request) = editor.prepare_delete(id, ctx) else {
            return Outcome::Skipped;
        };
        run_request(api, K::COMPONENT, request, |result| editor.settle_delete(result), on_update)
            .await
            .into()
    }
}
