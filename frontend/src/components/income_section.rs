use shared::IncomeEntry;
use yew::prelude::*;

use crate::components::modals::{InfoModal, InfoTopic};
use crate::components::ui::{Button, ButtonSize, ButtonVariant, Card, InfoButton, TextInput};
use crate::hooks::{use_entry_editor, EntryEditorActions};
use crate::services::{ApiClient, CurrencyFormat};
use crate::state::{IncomeEditor, IncomeField, IncomeKind, LedgerContext};

#[derive(Properties, PartialEq)]
pub struct IncomeSectionProps {
    pub api_client: ApiClient,
    pub ctx: LedgerContext,
    pub entries: Vec<IncomeEntry>,
    /// Owner refetch, fired after each successful change
    pub on_update: Callback<()>,
}

#[function_component(IncomeSection)]
pub fn income_section(props: &IncomeSectionProps) -> Html {
    let currency = use_context::<CurrencyFormat>().unwrap_or_default();
    let info_open = use_state(|| false);
    let editor = use_entry_editor::<IncomeKind>(&props.api_client, &props.ctx, &props.entries, &props.on_update);
    let actions = editor.actions.clone();
    let state: &IncomeEditor = &editor.editor;
    let read_only = props.ctx.is_read_only;

    let open_info = {
        let info_open = info_open.clone();
        Callback::from(move |_: ()| info_open.set(true))
    };
    let close_info = {
        let info_open = info_open.clone();
        Callback::from(move |_: ()| info_open.set(false))
    };

    html! {
        <Card class="income-section">
            <div class="section-header">
                <h2 class="section-title">{"Income"}</h2>
                <InfoButton onclick={open_info} />
                if !read_only && state.is_idle() {
                    <Button size={ButtonSize::Sm} onclick={actions.begin_add.clone()}>{"+ Add"}</Button>
                }
            </div>

            if let Some(message) = state.failure() {
                <div class="form-error">{message}</div>
            }

            <table class="entry-table">
                <tbody>
                    {for props.entries.iter().map(|entry| {
                        if state.editing_id() == Some(entry.id) {
                            draft_row(state, &actions)
                        } else {
                            entry_row(entry, &currency, read_only, &actions)
                        }
                    })}
                    if state.is_adding() {
                        {draft_row(state, &actions)}
                    }
                </tbody>
            </table>

            if props.entries.is_empty() && !state.is_adding() {
                <p class="empty-state">{"No income recorded for this month."}</p>
            }

            <InfoModal topic={InfoTopic::Income} is_open={*info_open} on_close={close_info} />
        </Card>
    }
}

fn entry_row(
    entry: &IncomeEntry,
    currency: &CurrencyFormat,
    read_only: bool,
    actions: &EntryEditorActions<IncomeKind>,
) -> Html {
    let on_edit = {
        let begin_edit = actions.begin_edit.clone();
        let entry = entry.clone();
        Callback::from(move |_: ()| begin_edit.emit(entry.clone()))
    };
    let on_delete = {
        let delete = actions.delete.clone();
        let id = entry.id;
        Callback::from(move |_: ()| delete.emit(id))
    };

    html! {
        <tr>
            <td class="entry-label">{&entry.label}</td>
            <td class="entry-amount">{currency.format(entry.amount)}</td>
            <td class="entry-actions">
                if !read_only {
                    <Button variant={ButtonVariant::Ghost} size={ButtonSize::Sm} onclick={on_edit}>{"Edit"}</Button>
                    <Button variant={ButtonVariant::Danger} size={ButtonSize::Sm} onclick={on_delete}>{"Delete"}</Button>
                }
            </td>
        </tr>
    }
}

fn draft_row(state: &IncomeEditor, actions: &EntryEditorActions<IncomeKind>) -> Html {
    let on_field = |field: IncomeField| {
        let set_field = actions.set_field.clone();
        Callback::from(move |value: String| set_field.emit((field, value)))
    };

    html! {
        <tr class="draft-row">
            <td>
                <TextInput
                    value={state.field(IncomeField::Label).to_string()}
                    placeholder="Source"
                    autofocus=true
                    oninput={on_field(IncomeField::Label)}
                />
            </td>
            <td>
                <TextInput
                    input_type="number"
                    value={state.field(IncomeField::Amount).to_string()}
                    placeholder="0.00"
                    oninput={on_field(IncomeField::Amount)}
                />
            </td>
            <td class="entry-actions">
                <Button size={ButtonSize::Sm} onclick={actions.submit.clone()}>{"Save"}</Button>
                <Button variant={ButtonVariant::Secondary} size={ButtonSize::Sm} onclick={actions.cancel.clone()}>
                    {"Cancel"}
                </Button>
            </td>
        </tr>
    }
}
