use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::state::{load_balances, run_request, Balance, ScalarAction, ScalarCard};

impl Reducible for ScalarCard {
    type Action = ScalarAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// One balance card's state plus the callbacks its buttons use
#[derive(Clone, PartialEq)]
pub struct BalanceHandle {
    pub card: UseReducerHandle<ScalarCard>,
    pub begin_edit: Callback<()>,
    pub set_input: Callback<String>,
    pub cancel: Callback<()>,
    pub save: Callback<()>,
}

fn balance_handle(api_client: &ApiClient, card: UseReducerHandle<ScalarCard>) -> BalanceHandle {
    let begin_edit = {
        let card = card.clone();
        Callback::from(move |_: ()| card.dispatch(ScalarAction::BeginEdit))
    };

    let set_input = {
        let card = card.clone();
        Callback::from(move |value: String| card.dispatch(ScalarAction::SetInput(value)))
    };

    let cancel = {
        let card = card.clone();
        Callback::from(move |_: ()| card.dispatch(ScalarAction::Cancel))
    };

    let save = {
        let card = card.clone();
        let api_client = api_client.clone();
        Callback::from(move |_: ()| {
            let Some(pending) = card.prepare_save() else {
                return;
            };
            let component = card.component();
            let card = card.clone();
            let api_client = api_client.clone();
            spawn_local(async move {
                let (ticket, value) = (pending.ticket, pending.value);
                let _ = run_request(
                    &api_client,
                    component,
                    pending.request,
                    |result| card.dispatch(ScalarAction::SaveSettled { ticket, value, result }),
                    || (),
                )
                .await;
            });
        })
    };

    BalanceHandle {
        card,
        begin_edit,
        set_input,
        cancel,
        save,
    }
}

/// Retirement savings balance. Refetches whenever `refresh_trigger` changes.
#[hook]
pub fn use_retirement_savings(api_client: &ApiClient, refresh_trigger: u32) -> BalanceHandle {
    let card = use_reducer_eq(|| ScalarCard::new(Balance::Retirement));

    {
        let card = card.clone();
        let api_client = api_client.clone();
        use_effect_with(refresh_trigger, move |_| {
            spawn_local(async move {
                for action in load_balances(&api_client, &[Balance::Retirement]).await {
                    card.dispatch(action);
                }
            });
            || ()
        });
    }

    balance_handle(api_client, card)
}

/// General savings balance and its goal, loaded together
#[hook]
pub fn use_savings(api_client: &ApiClient, refresh_trigger: u32) -> (BalanceHandle, BalanceHandle) {
    let savings = use_reducer_eq(|| ScalarCard::new(Balance::Savings));
    let goal = use_reducer_eq(|| ScalarCard::new(Balance::SavingsGoal));

    {
        let savings = savings.clone();
        let goal = goal.clone();
        let api_client = api_client.clone();
        use_effect_with(refresh_trigger, move |_| {
            spawn_local(async move {
                let cards = [savings, goal];
                let actions = load_balances(&api_client, &[Balance::Savings, Balance::SavingsGoal]).await;
                for (card, action) in cards.iter().zip(actions) {
                    card.dispatch(action);
                }
            });
            || ()
        });
    }

    (balance_handle(api_client, savings), balance_handle(api_client, goal))
}
