use yew::prelude::*;

use crate::components::ui::{Button, ButtonSize, ButtonVariant, TextInput};
use crate::hooks::BalanceHandle;
use crate::services::CurrencyFormat;

#[derive(Properties, PartialEq)]
pub struct BalanceFieldProps {
    pub label: AttrValue,
    pub handle: BalanceHandle,
}

/// One account-wide number with in-place overwrite
#[function_component(BalanceField)]
pub fn balance_field(props: &BalanceFieldProps) -> Html {
    let currency = use_context::<CurrencyFormat>().unwrap_or_default();
    let handle = &props.handle;
    let card = &*handle.card;

    let shown = if card.is_loaded() {
        currency.format(card.value())
    } else {
        "…".to_string()
    };

    html! {
        <div class="balance-field">
            <span class="balance-label">{props.label.clone()}</span>
            if card.is_editing() {
                <div class="scalar-editor">
                    <TextInput
                        input_type="number"
                        value={card.input().to_string()}
                        autofocus=true
                        oninput={handle.set_input.clone()}
                    />
                    <Button size={ButtonSize::Sm} onclick={handle.save.clone()}>{"Save"}</Button>
                    <Button variant={ButtonVariant::Secondary} size={ButtonSize::Sm} onclick={handle.cancel.clone()}>
                        {"Cancel"}
                    </Button>
                </div>
                if let Some(latest) = card.conflict() {
                    <div class="conflict-warning">
                        {format!("This changed to {} while you were editing.", currency.format(latest))}
                    </div>
                }
            } else {
                <div class="scalar-display">
                    <span class="scalar-value">{shown}</span>
                    <Button variant={ButtonVariant::Ghost} size={ButtonSize::Sm} onclick={handle.begin_edit.clone()}>
                        {"Edit"}
                    </Button>
                </div>
            }
            if let Some(message) = card.failure() {
                <div class="form-error">{message}</div>
            }
        </div>
    }
}
