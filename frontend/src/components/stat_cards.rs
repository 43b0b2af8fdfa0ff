use shared::Totals;
use yew::prelude::*;

use crate::services::format::format_currency;

#[derive(Properties, PartialEq)]
pub struct StatCardsProps {
    /// Client-side sums over the visible list.
    pub totals: Totals,
    /// Server-authoritative net balance from the budget stats.
    pub balance: f64,
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    title: &'static str,
    value: f64,
    tone: &'static str,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="card stat-card">
            <p class="stat-title">{props.title}</p>
            <p class={format!("stat-value {}", props.tone)}>
                {format_currency(props.value.abs())}
            </p>
        </div>
    }
}

/// The three summary cards. Income and expenses are recomputed from the
/// visible transaction list; the balance card shows the server's net
/// balance. The two sources can diverge and both stay on display.
#[function_component(StatCards)]
pub fn stat_cards(props: &StatCardsProps) -> Html {
    let balance_tone = if props.balance >= 0.0 { "positive" } else { "negative" };
    html! {
        <div class="stat-grid">
            <StatCard title="Total Income" value={props.totals.income} tone="positive" />
            <StatCard title="Total Expenses" value={props.totals.expenses} tone="negative" />
            <StatCard title="Current Balance" value={props.balance} tone={balance_tone} />
        </div>
    }
}
