mod components;
mod config;
mod hooks;
mod services;
mod state;

use log::LevelFilter;
use shared::MonthId;
use yew::prelude::*;

use components::modals::HowToUseModal;
use components::ui::{Button, ButtonVariant, Select, SelectOption};
use components::MonthView;
use config::AppConfig;
use hooks::{pick_default_month, use_month_list};
use services::{ApiClient, CurrencyFormat};

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| {
        AppConfig::load().unwrap_or_else(|e| {
            log::error!(target: "app", "Bad build configuration, using defaults: {:#}", e);
            AppConfig::default()
        })
    });
    let api_client = use_memo((), {
        let base_url = config.api_base_url.clone();
        move |_| ApiClient::with_base_url(base_url)
    });

    let months = use_month_list(&api_client);
    let selected = use_state(|| Option::<MonthId>::None);
    let guide_open = use_state(|| false);

    // Default to the latest open month once the list arrives
    {
        let selected = selected.clone();
        use_effect_with(months.months.clone(), move |months| {
            if selected.is_none() {
                if let Some(id) = pick_default_month(months) {
                    selected.set(Some(id));
                }
            }
            || ()
        });
    }

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |value: String| match value.parse::<MonthId>() {
            Ok(id) => selected.set(Some(id)),
            Err(_) => log::warn!(target: "app", "Ignoring month selection '{}'", value),
        })
    };
    let open_guide = {
        let guide_open = guide_open.clone();
        Callback::from(move |_: ()| guide_open.set(true))
    };
    let close_guide = {
        let guide_open = guide_open.clone();
        Callback::from(move |_: ()| guide_open.set(false))
    };

    let month_options: Vec<SelectOption> = months
        .months
        .iter()
        .rev()
        .map(|m| SelectOption {
            value: m.id.to_string(),
            label: m.title(),
        })
        .collect();

    let body = match (*selected, months.error.as_ref()) {
        (Some(month_id), _) => html! {
            <MonthView key={month_id} api_client={(*api_client).clone()} {month_id} />
        },
        (None, Some(message)) => html! { <div class="load-error">{message}</div> },
        (None, None) if months.loading => html! { <div class="loading">{"Loading..."}</div> },
        (None, None) => html! { <div class="empty-state">{"No months yet."}</div> },
    };

    html! {
        <ContextProvider<CurrencyFormat> context={config.currency.clone()}>
            <div class="app">
                <header class="app-header">
                    <h1 class="app-title">{"Monthly Ledger"}</h1>
                    if !month_options.is_empty() {
                        <Select
                            options={month_options}
                            value={(*selected).map(|id| id.to_string()).unwrap_or_default()}
                            onchange={on_select}
                        />
                    }
                    <Button variant={ButtonVariant::Ghost} onclick={open_guide}>{"How to use"}</Button>
                </header>
                <main class="app-main">
                    {body}
                </main>
                <HowToUseModal is_open={*guide_open} on_close={close_guide} />
            </div>
        </ContextProvider<CurrencyFormat>>
    }
}

fn main() {
    services::logging::init(if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    yew::Renderer::<App>::new().render();
}
