use shared::MonthId;
use yew::prelude::*;

use crate::components::{IncomeSection, ItemsSection, RetirementSavingsCard, SavingsCard};
use crate::hooks::use_month;
use crate::services::date_utils::today;
use crate::services::ApiClient;
use crate::state::LedgerContext;

#[derive(Properties, PartialEq)]
pub struct MonthViewProps {
    pub api_client: ApiClient,
    pub month_id: MonthId,
}

/// Owns the month's data. Sections only read it and ask for a refetch.
#[function_component(MonthView)]
pub fn month_view(props: &MonthViewProps) -> Html {
    let month = use_month(&props.api_client, props.month_id);
    let state = &*month.state;

    let Some(detail) = &state.detail else {
        return match &state.error {
            Some(message) => html! { <div class="load-error">{message}</div> },
            None => html! { <div class="loading">{"Loading month..."}</div> },
        };
    };

    let ctx = LedgerContext::from_detail(detail, today());

    html! {
        <div class="month-view">
            <div class="month-header">
                <h1 class="month-title">{detail.month.title()}</h1>
                if ctx.is_read_only {
                    <span class="month-badge closed">{"Closed"}</span>
                }
            </div>

            if let Some(message) = &state.error {
                <div class="form-error">{message}</div>
            }

            <div class="month-grid">
                <IncomeSection
                    api_client={props.api_client.clone()}
                    ctx={ctx.clone()}
                    entries={detail.income_entries.clone()}
                    on_update={month.refresh.clone()}
                />
                <ItemsSection
                    api_client={props.api_client.clone()}
                    ctx={ctx.clone()}
                    items={detail.items.clone()}
                    on_update={month.refresh.clone()}
                />
                <SavingsCard
                    api_client={props.api_client.clone()}
                    refresh_trigger={state.refresh_token}
                />
                <RetirementSavingsCard
                    api_client={props.api_client.clone()}
                    refresh_trigger={state.refresh_token}
                />
            </div>
        </div>
    }
}
