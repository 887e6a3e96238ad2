use std::rc::Rc;

use shared::EntryId;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::state::{run_request, EditorAction, EntryEditor, EntryKind, LedgerContext};

impl<K: EntryKind> Reducible for EntryEditor<K> {
    type Action = EditorAction<K>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Editor state plus the callbacks a section wires into its buttons
pub struct UseEntryEditorResult<K: EntryKind> {
    pub editor: UseReducerHandle<EntryEditor<K>>,
    pub actions: EntryEditorActions<K>,
}

pub struct EntryEditorActions<K: EntryKind> {
    pub begin_add: Callback<()>,
    pub begin_edit: Callback<K::Entry>,
    pub set_field: Callback<(K::Field, String)>,
    pub cancel: Callback<()>,
    pub submit: Callback<()>,
    pub delete: Callback<EntryId>,
}

impl<K: EntryKind> Clone for EntryEditorActions<K> {
    fn clone(&self) -> Self {
        Self {
            begin_add: self.begin_add.clone(),
            begin_edit: self.begin_edit.clone(),
            set_field: self.set_field.clone(),
            cancel: self.cancel.clone(),
            submit: self.submit.clone(),
            delete: self.delete.clone(),
        }
    }
}

/// Drive an [`EntryEditor`] against the ledger store. `on_update` is the
/// owner's refetch; it fires once after every successful mutation.
#[hook]
pub fn use_entry_editor<K: EntryKind>(
    api_client: &ApiClient,
    ctx: &LedgerContext,
    entries: &[K::Entry],
    on_update: &Callback<()>,
) -> UseEntryEditorResult<K> {
    let editor = use_reducer_eq(EntryEditor::<K>::new);

    // Fresh props from the owner may invalidate an open draft
    {
        let editor = editor.clone();
        use_effect_with((ctx.clone(), entries.to_vec()), move |(ctx, entries)| {
            editor.dispatch(EditorAction::Sync(ctx.clone(), entries.clone()));
            || ()
        });
    }

    let begin_add = {
        let editor = editor.clone();
        let ctx = ctx.clone();
        Callback::from(move |_: ()| editor.dispatch(EditorAction::BeginAdd(ctx.clone())))
    };

    let begin_edit = {
        let editor = editor.clone();
        let ctx = ctx.clone();
        Callback::from(move |entry: K::Entry| editor.dispatch(EditorAction::BeginEdit(entry, ctx.clone())))
    };

    let set_field = {
        let editor = editor.clone();
        Callback::from(move |(field, value): (K::Field, String)| {
            editor.dispatch(EditorAction::SetField(field, value))
        })
    };

    let cancel = {
        let editor = editor.clone();
        Callback::from(move |_: ()| editor.dispatch(EditorAction::Cancel))
    };

    let submit = {
        let editor = editor.clone();
        let api_client = api_client.clone();
        let ctx = ctx.clone();
        let on_update = on_update.clone();

        Callback::from(move |_: ()| {
            let Some(pending) = editor.prepare_submit(&ctx) else {
                return;
            };
            let editor = editor.clone();
            let api_client = api_client.clone();
            let on_update = on_update.clone();
            spawn_local(async move {
                let ticket = pending.ticket;
                let _ = run_request(
                    &api_client,
                    K::COMPONENT,
                    pending.request,
                    |result| editor.dispatch(EditorAction::SubmitSettled { ticket, result }),
                    || on_update.emit(()),
                )
                .await;
            });
        })
    };

    let delete = {
        let editor = editor.clone();
        let api_client = api_client.clone();
        let ctx = ctx.clone();
        let on_update = on_update.clone();

        Callback::from(move |id: EntryId| {
            let Some(request) = editor.prepare_delete(id, &ctx) else {
                return;
            };
            let editor = editor.clone();
            let api_client = api_client.clone();
            let on_update = on_update.clone();
            spawn_local(async move {
                let _ = run_request(
                    &api_client,
                    K::COMPONENT,
                    request,
                    |result| editor.dispatch(EditorAction::DeleteSettled(result)),
                    || on_update.emit(()),
                )
                .await;
            });
        })
    };

    UseEntryEditorResult {
        editor,
        actions: EntryEditorActions {
            begin_add,
            begin_edit,
            set_field,
            cancel,
            submit,
            delete,
        },
    }
}
