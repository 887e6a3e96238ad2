use yew::prelude::*;

use crate::components::balance_field::BalanceField;
use crate::components::modals::{InfoModal, InfoTopic};
use crate::components::ui::{Card, InfoButton};
use crate::hooks::use_savings;
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct SavingsCardProps {
    pub api_client: ApiClient,
    pub refresh_trigger: u32,
}

#[function_component(SavingsCard)]
pub fn savings_card(props: &SavingsCardProps) -> Html {
    let info_open = use_state(|| false);
    let (savings, goal) = use_savings(&props.api_client, props.refresh_trigger);

    let open_info = {
        let info_open = info_open.clone();
        Callback::from(move |_: ()| info_open.set(true))
    };
    let close_info = {
        let info_open = info_open.clone();
        Callback::from(move |_: ()| info_open.set(false))
    };

    html! {
        <Card class="savings-card">
            <div class="section-header">
                <h2 class="section-title">{"Savings"}</h2>
                <InfoButton onclick={open_info} />
            </div>
            <BalanceField label="Balance" handle={savings} />
            <BalanceField label="Goal" handle={goal} />
            <InfoModal topic={InfoTopic::Savings} is_open={*info_open} on_close={close_info} />
        </Card>
    }
}
