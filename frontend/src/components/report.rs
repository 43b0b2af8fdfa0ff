use shared::Transaction;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::format::{format_currency, format_date};
use crate::services::logging::Logger;
use crate::services::pdf;
use crate::services::session::Session;

#[derive(Properties, PartialEq)]
pub struct ReportProps {
    pub api: ApiClient,
    pub session: Session,
    pub on_back: Callback<()>,
    /// Fired when the fetch comes back 401.
    pub on_session_invalid: Callback<()>,
}

/// Six-month transaction report. Independent of the dashboard: it fetches
/// its own fixed server-side slice once on mount and offers a client-built
/// PDF of the same rows.
#[function_component(Report)]
pub fn report(props: &ReportProps) -> Html {
    let transactions = use_state(Vec::<Transaction>::new);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    {
        let api = props.api.clone();
        let authenticated = props.session.is_authenticated();
        let on_session_invalid = props.on_session_invalid.clone();
        let transactions = transactions.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            if !authenticated {
                error.set(Some("No token found. Please log in again.".into()));
                loading.set(false);
            } else {
                spawn_local(async move {
                    match api.last_six_months().await {
                        Ok(list) => transactions.set(list),
                        Err(err) => {
                            Logger::error("report", &format!("fetching six-month slice: {}", err));
                            if err.is_unauthorized() {
                                on_session_invalid.emit(());
                            }
                            error.set(Some("Failed to fetch transactions.".into()));
                        }
                    }
                    loading.set(false);
                });
            }
            || ()
        });
    }

    let on_download = {
        let transactions = transactions.clone();
        Callback::from(move |_: MouseEvent| {
            match pdf::build_report(&transactions) {
                Ok(bytes) => {
                    if let Err(err) = pdf::trigger_download("last_6_months_transactions.pdf", &bytes)
                    {
                        Logger::error("report", &format!("download failed: {}", err));
                    }
                }
                Err(err) => Logger::error("report", &format!("building pdf: {}", err)),
            }
        })
    };
    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    html! {
        <div class="report-container">
            <div class="card panel table-panel">
                <div class="panel-header report-header">
                    <h2>{"Last 6 Months Transactions"}</h2>
                    <div class="report-actions">
                        <button class="btn btn-muted" onclick={on_back}>{"Back to Dashboard"}</button>
                        <button class="btn btn-success" onclick={on_download}>{"Download as PDF"}</button>
                    </div>
                </div>
                {if *loading {
                    html! { <p class="empty">{"Loading transactions..."}</p> }
                } else if let Some(error) = &*error {
                    html! { <p class="empty form-error">{error}</p> }
                } else if transactions.is_empty() {
                    html! { <p class="empty">{"No transactions found."}</p> }
                } else {
                    html! {
                        <div class="table-container">
                            <table>
                                <thead>
                                    <tr>
                                        <th>{"Date"}</th>
                                        <th>{"Description"}</th>
                                        <th>{"Amount"}</th>
                                        <th>{"Type"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {for transactions.iter().map(|tx| html! {
                                        <tr key={tx.id.clone()}>
                                            <td class="muted">{format_date(&tx.date)}</td>
                                            <td>{&tx.description}</td>
                                            <td class="amount">{format_currency(tx.amount)}</td>
                                            <td class="capitalize">{tx.transaction_type.to_string()}</td>
                                        </tr>
                                    })}
                                </tbody>
                            </table>
                        </div>
                    }
                }}
            </div>
        </div>
    }
}
