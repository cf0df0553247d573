use yew::prelude::*;

use crate::plans::PlanId;
use crate::redirect::RedirectHandle;
use crate::session::SessionHandle;
use crate::subscription::{PlanCardModel, SubscriptionState, ViewState};

#[derive(Properties, PartialEq)]
pub struct SubscriptionPageProps {
    #[prop_or_default]
    pub initial_plan: PlanId,
    #[prop_or_default]
    pub redirect: RedirectHandle,
}

/// Router key for a page instance, so changing the preselected plan in the
/// URL mounts a fresh page instead of keeping the old selection.
pub fn page_key(initial_plan: Option<PlanId>) -> &'static str {
    initial_plan.map_or("default", PlanId::key)
}

#[derive(Properties, PartialEq)]
pub struct PlanCardProps {
    pub card: PlanCardModel,
    pub on_select: Callback<PlanId>,
}

#[function_component(PlanCard)]
pub fn plan_card(props: &PlanCardProps) -> Html {
    let card = props.card;
    let plan = card.plan;

    let onclick = {
        let id = plan.id;
        let on_select = props.on_select.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_select.emit(id);
        })
    };

    html! {
        <div class={classes!("pricing-card", plan.id.key(), card.selected.then(|| "selected"))}>
            <div class="card-header">
                <h3>{plan.title}</h3>
                <div class="price">
                    <span class="amount">{plan.formatted_price()}</span>
                    <span class="period">{plan.period()}</span>
                </div>
            </div>
            <ul>
                { for plan.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
            </ul>
            {
                if card.selected {
                    html! {
                        <button class="plan-button disabled" disabled=true><b>{card.button_label()}</b></button>
                    }
                } else {
                    html! {
                        <button class="plan-button" {onclick}><b>{card.button_label()}</b></button>
                    }
                }
            }
        </div>
    }
}

#[function_component(SubscriptionPage)]
pub fn subscription_page(props: &SubscriptionPageProps) -> Html {
    // Falls back to the browser's localStorage when the app provides no session.
    let session = use_context::<SessionHandle>().unwrap_or_default();
    let state = {
        let initial_plan = props.initial_plan;
        use_state(move || SubscriptionState::new(initial_plan))
    };

    let on_select = {
        let state = state.clone();
        Callback::from(move |id: PlanId| {
            let mut next = (*state).clone();
            if next.select(id) {
                state.set(next);
            }
        })
    };

    let on_subscribe = {
        let state = state.clone();
        let redirect = props.redirect.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = (*state).clone();
            if next.subscribe(session.provider(), redirect.redirector()).is_err() {
                state.set(next);
            }
        })
    };

    html! {
        <div class={classes!("pricing-container", (state.view_state() == ViewState::ErrorShown).then(|| "has-error"))}>
            <div class="pricing-header">
                <h1>{"Choose Your Plan"}</h1>
                <p>{"Pick the plan that fits your business. You can change it later."}</p>
            </div>

            {
                if let Some(error_msg) = state.error() {
                    html! {
                        <div class="message error-message">{error_msg}</div>
                    }
                } else {
                    html! {}
                }
            }

            <div class="pricing-grid" data-selected={state.selected().key()}>
                {
                    for state.cards().into_iter().map(|card| html! {
                        <PlanCard
                            key={card.plan.id.key()}
                            {card}
                            on_select={on_select.clone()}
                        />
                    })
                }
            </div>

            <div class="subscribe-action">
                <button class="subscribe-button" onclick={on_subscribe}>
                    <b>{state.subscribe_label()}</b>
                </button>
            </div>

            <style>
                {r#"
                .pricing-container {
                    max-width: 960px;
                    margin: 0 auto;
                    padding: 5rem 2rem;
                    min-height: 100vh;
                    background: #1a1a1a;
                    color: #fff;
                }

                .pricing-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .pricing-header h1 {
                    font-size: 3rem;
                    color: #7EB2FF;
                    margin-bottom: 1rem;
                }

                .pricing-header p {
                    color: #999;
                    font-size: 1.1rem;
                }

                .message.error-message {
                    margin-bottom: 2rem;
                    padding: 1rem 1.5rem;
                    border-radius: 8px;
                    color: #FF6B6B;
                    background: rgba(255, 107, 107, 0.1);
                    border: 1px solid rgba(255, 107, 107, 0.3);
                    text-align: center;
                }

                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1.5rem;
                    margin-bottom: 2.5rem;
                }

                .pricing-card {
                    border: 2px solid #333;
                    border-radius: 12px;
                    padding: 1.75rem;
                    background: #222;
                }

                .pricing-card.selected {
                    border-color: #1E90FF;
                }

                .card-header {
                    text-align: center;
                    margin-bottom: 1.5rem;
                }

                .card-header h3 {
                    color: #7EB2FF;
                    font-size: 1.4rem;
                    margin-bottom: 0.5rem;
                }

                .price .amount {
                    font-size: 2rem;
                    font-weight: 600;
                }

                .price .period {
                    color: #999;
                    margin-left: 0.25rem;
                }

                .pricing-card ul {
                    padding-left: 1.25rem;
                    margin: 0 0 1.5rem;
                    line-height: 1.8;
                }

                .plan-button, .subscribe-button {
                    width: 100%;
                    padding: 0.8rem 1.5rem;
                    border: none;
                    border-radius: 8px;
                    color: #fff;
                    background: #1E90FF;
                    font-size: 1rem;
                    cursor: pointer;
                }

                .plan-button.disabled {
                    cursor: default;
                    background: #555;
                }

                .subscribe-action {
                    max-width: 400px;
                    margin: 0 auto;
                }

                @media (max-width: 768px) {
                    .pricing-grid {
                        grid-template-columns: 1fr;
                    }

                    .pricing-header h1 {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_keys_differ_per_preselected_plan() {
        let keys: Vec<&str> = [None, Some(PlanId::Basic), Some(PlanId::Premium)]
            .into_iter()
            .map(page_key)
            .collect();
        assert_eq!(keys, vec!["default", "basic", "premium"]);
    }
}
