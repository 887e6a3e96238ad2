use shared::ItemWithCategory;
use yew::prelude::*;

use crate::components::modals::{InfoModal, InfoTopic};
use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, InfoButton, Select, SelectOption, TextInput,
};
use crate::hooks::{use_entry_editor, EntryEditorActions};
use crate::services::date_utils::format_spent_on;
use crate::services::{ApiClient, CurrencyFormat};
use crate::state::{spending_items, Blocker, ItemEditor, ItemField, ItemKind, LedgerContext};

#[derive(Properties, PartialEq)]
pub struct ItemsSectionProps {
    pub api_client: ApiClient,
    pub ctx: LedgerContext,
    /// Every item of the month, transfers included
    pub items: Vec<ItemWithCategory>,
    pub on_update: Callback<()>,
}

#[function_component(ItemsSection)]
pub fn items_section(props: &ItemsSectionProps) -> Html {
    let currency = use_context::<CurrencyFormat>().unwrap_or_default();
    let info_open = use_state(|| false);
    let editor = use_entry_editor::<ItemKind>(&props.api_client, &props.ctx, &props.items, &props.on_update);
    let actions = editor.actions.clone();
    let state: &ItemEditor = &editor.editor;
    let read_only = props.ctx.is_read_only;

    let shown = spending_items(&props.items);

    let category_options: Vec<SelectOption> = props
        .ctx
        .categories
        .iter()
        .map(|c| SelectOption {
            value: c.id.to_string(),
            label: c.label.clone(),
        })
        .collect();

    let open_info = {
        let info_open = info_open.clone();
        Callback::from(move |_: ()| info_open.set(true))
    };
    let close_info = {
        let info_open = info_open.clone();
        Callback::from(move |_: ()| info_open.set(false))
    };

    html! {
        <Card class="items-section">
            <div class="section-header">
                <h2 class="section-title">{"Spending Items"}</h2>
                <InfoButton onclick={open_info} />
                if !read_only && state.is_idle() {
                    <Button size={ButtonSize::Sm} onclick={actions.begin_add.clone()}>{"+ Add"}</Button>
                }
            </div>

            if let Some(Blocker::NoCategories) = state.blocker() {
                <div class="blocking-notice">
                    <p>{"Add at least one budget category before logging items."}</p>
                    <Button variant={ButtonVariant::Secondary} size={ButtonSize::Sm} onclick={actions.cancel.clone()}>
                        {"Close"}
                    </Button>
                </div>
            }

            if let Some(message) = state.failure() {
                <div class="form-error">{message}</div>
            }

            <table class="entry-table">
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Description"}</th>
                        <th>{"Category"}</th>
                        <th class="entry-amount">{"Amount"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {for shown.iter().map(|item| {
                        if state.editing_id() == Some(item.id) {
                            draft_row(state, &actions, &category_options)
                        } else {
                            item_row(item, &currency, read_only, &actions)
                        }
                    })}
                    if state.is_adding() {
                        {draft_row(state, &actions, &category_options)}
                    }
                </tbody>
            </table>

            if shown.is_empty() && !state.is_adding() {
                <p class="empty-state">{"Nothing spent yet this month."}</p>
            }

            <InfoModal topic={InfoTopic::SpendingItems} is_open={*info_open} on_close={close_info} />
        </Card>
    }
}

fn item_row(
    item: &ItemWithCategory,
    currency: &CurrencyFormat,
    read_only: bool,
    actions: &EntryEditorActions<ItemKind>,
) -> Html {
    let on_edit = {
        let begin_edit = actions.begin_edit.clone();
        let item = item.clone();
        Callback::from(move |_: ()| begin_edit.emit(item.clone()))
    };
    let on_delete = {
        let delete = actions.delete.clone();
        let id = item.id;
        Callback::from(move |_: ()| delete.emit(id))
    };

    html! {
        <tr>
            <td class="entry-date">{format_spent_on(item.spent_on)}</td>
            <td class="entry-label">{&item.description}</td>
            <td class="entry-category">{&item.category_label}</td>
            <td class="entry-amount">{currency.format(item.amount)}</td>
            <td class="entry-actions">
                if !read_only {
                    <Button variant={ButtonVariant::Ghost} size={ButtonSize::Sm} onclick={on_edit}>{"Edit"}</Button>
                    <Button variant={ButtonVariant::Danger} size={ButtonSize::Sm} onclick={on_delete}>{"Delete"}</Button>
                }
            </td>
        </tr>
    }
}

fn draft_row(state: &ItemEditor, actions: &EntryEditorActions<ItemKind>, categories: &[SelectOption]) -> Html {
    let on_field = |field: ItemField| {
        let set_field = actions.set_field.clone();
        Callback::from(move |value: String| set_field.emit((field, value)))
    };

    html! {
        <tr class="draft-row">
            <td>
                <TextInput
                    input_type="date"
                    value={state.field(ItemField::SpentOn).to_string()}
                    oninput={on_field(ItemField::SpentOn)}
                />
            </td>
            <td>
                <TextInput
                    value={state.field(ItemField::Description).to_string()}
                    placeholder="What was it?"
                    autofocus=true
                    oninput={on_field(ItemField::Description)}
                />
            </td>
            <td>
                <Select
                    options={categories.to_vec()}
                    value={state.field(ItemField::Category).to_string()}
                    onchange={on_field(ItemField::Category)}
                />
            </td>
            <td>
                <TextInput
                    input_type="number"
                    value={state.field(ItemField::Amount).to_string()}
                    placeholder="0.00"
                    oninput={on_field(ItemField::Amount)}
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
