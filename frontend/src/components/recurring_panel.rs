use shared::RecurringRule;
use yew::prelude::*;

use crate::services::format::{format_currency, format_date};

#[derive(Properties, PartialEq)]
pub struct RecurringPanelProps {
    pub rules: Vec<RecurringRule>,
    pub on_edit: Callback<RecurringRule>,
    pub on_delete: Callback<String>,
}

fn frequency_label(rule: &RecurringRule) -> String {
    let raw = rule.frequency.to_string();
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => raw,
    }
}

#[function_component(RecurringPanel)]
pub fn recurring_panel(props: &RecurringPanelProps) -> Html {
    html! {
        <div class="card panel">
            <div class="panel-header">
                <h3>{"Recurring Rules"}</h3>
            </div>
            <div class="panel-body scrollable">
                {if props.rules.is_empty() {
                    html! { <p class="empty">{"No recurring rules set up yet."}</p> }
                } else {
                    html! {
                        <>
                            {for props.rules.iter().map(|rule| {
                                let tone = if rule.transaction_type.is_credit() { "positive" } else { "negative" };
                                let on_edit = {
                                    let on_edit = props.on_edit.clone();
                                    let rule = rule.clone();
                                    Callback::from(move |_: MouseEvent| on_edit.emit(rule.clone()))
                                };
                                let on_delete = {
                                    let on_delete = props.on_delete.clone();
                                    let id = rule.id.clone();
                                    Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                                };
                                html! {
                                    <div key={rule.id.clone()} class="list-row rule-row">
                                        <div class="list-main">
                                            <p class="list-title">{&rule.title}</p>
                                            <p class="list-meta">
                                                {rule.start_date.as_deref().map(format_date).unwrap_or_default()}
                                            </p>
                                            <span class={format!("badge {}", tone)}>{frequency_label(rule)}</span>
                                        </div>
                                        <span class="list-amount">{format_currency(rule.amount)}</span>
                                        <div class="list-actions">
                                            <button class="icon-btn" title="Edit recurring rule" onclick={on_edit}>{"✎"}</button>
                                            <button class="icon-btn danger" title="Delete recurring rule" onclick={on_delete}>{"🗑"}</button>
                                        </div>
                                    </div>
                                }
                            })}
                        </>
                    }
                }}
            </div>
        </div>
    }
}
