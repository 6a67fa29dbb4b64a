//! Pricing Page

use coach_core::{Plan, format_brl};
use leptos::prelude::*;

use crate::components::CheckItem;
use crate::store::NavStore;

#[component]
pub fn PricingPage(nav: NavStore) -> impl IntoView {
    let plans = Plan::ALL
        .into_iter()
        .map(|plan| view! { <PlanCard plan=plan nav=nav /> })
        .collect_view();

    view! {
        <div class="pricing min-h-screen bg-slate-950 pt-32 pb-20 px-4">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-16">
                    <h1 class="page-title">"Escolha Seu Plano"</h1>
                    <p class="subtitle">"Todos os planos incluem acesso completo a todos os recursos"</p>
                </div>

                <div class="plans grid md:grid-cols-3 gap-8 max-w-6xl mx-auto">{plans}</div>

                <div class="payment-methods mt-16 text-center">
                    <p class="text-slate-400 mb-6">"Formas de pagamento aceitas:"</p>
                    <div class="flex justify-center gap-8 flex-wrap">
                        <span>"📱 Pix"</span>
                        <span>"💳 Cartão de Crédito"</span>
                        <span>"💳 Cartão de Débito"</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PlanCard(plan: Plan, nav: NavStore) -> impl IntoView {
    let pricing = plan.pricing();
    let featured = plan.is_featured();
    let benefits = Plan::FEATURES
        .into_iter()
        .map(|text| view! { <CheckItem text=text /> })
        .collect_view();

    view! {
        <div class="plan card" class:featured=featured data-plan=plan.as_str()>
            {featured.then(|| view! { <span class="badge badge-popular">"Mais Popular"</span> })}
            <div class="card-header">
                <h2 class="card-title">{pricing.name.clone()}</h2>
                <p class="card-description">{pricing.tagline.clone()}</p>
            </div>
            <div class="card-content">
                <div class="price mb-6">
                    <span class="amount">{format_brl(pricing.price)}</span>
                    <span class="period">{pricing.period_label.clone()}</span>
                    {plan.price_note().map(|note| view! { <div class="price-note">{note}</div> })}
                </div>
                <ul class="space-y-3">{benefits}</ul>
            </div>
            <div class="card-footer">
                // No checkout view exists yet; this lands on home.
                <button class="btn w-full" on:click=move |_| nav.navigate(plan.checkout_target())>
                    "Assinar Agora"
                </button>
            </div>
        </div>
    }
}
