use std::rc::Rc;

use shared::{Month, MonthDetail, MonthId, MonthStatus};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::LedgerApi;

const COMPONENT: &str = "month-view";

/// Canonical copy of one month's data. Children only ever read it.
#[derive(Clone, PartialEq, Default)]
pub struct MonthState {
    pub detail: Option<MonthDetail>,
    pub loading: bool,
    pub error: Option<String>,
    /// Bumped after every successful load; children keyed on it refetch
    pub refresh_token: u32,
}

pub enum MonthAction {
    Loading,
    Loaded(MonthDetail),
    Failed(String),
}

impl Reducible for MonthState {
    type Action = MonthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            MonthAction::Loading => {
                next.loading = true;
            }
            MonthAction::Loaded(detail) => {
                next.detail = Some(detail);
                next.loading = false;
                next.error = None;
                next.refresh_token = next.refresh_token.wrapping_add(1);
            }
            MonthAction::Failed(message) => {
                next.loading = false;
                next.error = Some(message);
            }
        }
        Rc::new(next)
    }
}

pub struct UseMonthResult {
    pub state: UseReducerHandle<MonthState>,
    pub refresh: Callback<()>,
}

/// Load a month and expose a full-refetch callback for its editors
#[hook]
pub fn use_month(api_client: &ApiClient, month_id: MonthId) -> UseMonthResult {
    let state = use_reducer(MonthState::default);

    let refresh = {
        let state = state.clone();
        let api_client = api_client.clone();
        use_callback(month_id, move |_: (), month_id| {
            let state = state.clone();
            let api_client = api_client.clone();
            let month_id = *month_id;
            spawn_local(async move {
                state.dispatch(MonthAction::Loading);
                match api_client.get_month(month_id).await {
                    Ok(detail) => state.dispatch(MonthAction::Loaded(detail)),
                    Err(e) => {
                        log::error!(target: COMPONENT, "Failed to load month {}: {}", month_id, e);
                        state.dispatch(MonthAction::Failed(e.user_message()));
                    }
                }
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with(month_id, move |_| {
            refresh.emit(());
            || ()
        });
    }

    UseMonthResult { state, refresh }
}

#[derive(Clone, PartialEq, Default)]
pub struct MonthListState {
    pub months: Vec<Month>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Hook for the month picker: loads the month list once on mount
#[hook]
pub fn use_month_list(api_client: &ApiClient) -> UseStateHandle<MonthListState> {
    let list_state = use_state(|| MonthListState {
        loading: true,
        ..MonthListState::default()
    });

    use_effect_with((), {
        let list_state = list_state.clone();
        let api_client = api_client.clone();

        move |_| {
            spawn_local(async move {
                match api_client.list_months().await {
                    Ok(months) => list_state.set(MonthListState {
                        months,
                        loading: false,
                        error: None,
                    }),
                    Err(e) => {
                        log::error!(target: COMPONENT, "Failed to list months: {}", e);
                        list_state.set(MonthListState {
                            months: Vec::new(),
                            loading: false,
                            error: Some(e.user_message()),
                        });
                    }
                }
            });
            || ()
        }
    });

    list_state
}

/// Most recent open month, else the most recent month of any status
pub fn pick_default_month(months: &[Month]) -> Option<MonthId> {
    let latest = |m: &&Month| (m.year, m.month);
    months
        .iter()
        .filter(|m| m.status == MonthStatus::Open)
        .max_by_key(latest)
        .or_else(|| months.iter().max_by_key(latest))
        .map(|m| m.id)
}
