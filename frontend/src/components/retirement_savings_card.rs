use yew::prelude::*;

use crate::components::balance_field::BalanceField;
use crate::components::modals::{InfoModal, InfoTopic};
use crate::components::ui::{Card, InfoButton};
use crate::hooks::use_retirement_savings;
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct RetirementSavingsCardProps {
    pub api_client: ApiClient,
    /// Any change refetches the balance
    pub refresh_trigger: u32,
}

#[function_component(RetirementSavingsCard)]
pub fn retirement_savings_card(props: &RetirementSavingsCardProps) -> Html {
    let info_open = use_state(|| false);
    let retirement = use_retirement_savings(&props.api_client, props.refresh_trigger);

    let open_info = {
        let info_open = info_open.clone();
        Callback::from(move |_: ()| info_open.set(true))
    };
    let close_info = {
        let info_open = info_open.clone();
        Callback::from(move |_: ()| info_open.set(false))
    };

    html! {
        <Card class="retirement-savings-card">
            <div class="section-header">
                <h2 class="section-title">{"Retirement Savings"}</h2>
                <InfoButton onclick={open_info} />
            </div>
            <BalanceField label="Balance" handle={retirement} />
            <InfoModal topic={InfoTopic::RetirementSavings} is_open={*info_open} on_close={close_info} />
        </Card>
    }
}
