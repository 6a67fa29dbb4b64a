//! UI Components

use coach_core::PageId;
use leptos::prelude::*;

use crate::store::NavStore;

const NAV_LINKS: [(&str, PageId); 3] = [
    ("Início", PageId::Home),
    ("Recursos", PageId::Features),
    ("Preços", PageId::Pricing),
];

/// Top navigation bar with the collapsible mobile menu
#[component]
pub fn Navigation(nav: NavStore) -> impl IntoView {
    let desktop_links = NAV_LINKS
        .into_iter()
        .map(|(label, page)| {
            view! {
                <button
                    class="text-slate-300 hover:text-white transition-colors"
                    on:click=move |_| nav.navigate(page)
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let desktop_cta = move || {
        let cta = nav.cta();
        view! {
            <button class="btn btn-gradient" on:click=move |_| nav.navigate(cta.target)>
                {cta.label}
            </button>
        }
    };

    view! {
        <nav class="fixed top-0 w-full bg-slate-900/95 backdrop-blur-sm border-b border-slate-800 z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div
                        class="flex items-center gap-3 cursor-pointer"
                        on:click=move |_| nav.navigate(PageId::Home)
                    >
                        <img src="/logo.png" alt="Pro Coach Virtual" class="h-10 w-10" />
                        <span class="brand">"Pro Coach Virtual"</span>
                    </div>

                    <div class="hidden md:flex items-center gap-8">
                        {desktop_links}
                        {desktop_cta}
                    </div>

                    <button
                        class="md:hidden text-white"
                        aria-label="Menu"
                        on:click=move |_| nav.toggle_mobile_menu()
                    >
                        {move || if nav.mobile_menu_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || nav.mobile_menu_open()>
                <div class="md:hidden bg-slate-800 border-t border-slate-700">
                    <div class="px-4 py-4 space-y-3">
                        {mobile_links(nav)}
                        <button
                            class="btn btn-gradient w-full"
                            on:click=move |_| nav.navigate_from_menu(nav.mobile_cta().target)
                        >
                            {move || nav.mobile_cta().label}
                        </button>
                    </div>
                </div>
            </Show>
        </nav>
    }
}

fn mobile_links(nav: NavStore) -> impl IntoView {
    NAV_LINKS
        .into_iter()
        .map(|(label, page)| {
            view! {
                <button
                    class="block w-full text-left text-slate-300 hover:text-white py-2"
                    on:click=move |_| nav.navigate_from_menu(page)
                >
                    {label}
                </button>
            }
        })
        .collect_view()
}

/// Site footer
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-slate-900 border-t border-slate-800 py-12 px-4">
            <div class="max-w-7xl mx-auto text-center text-slate-400">
                <p class="mb-2">"© 2024 Pro Coach Virtual. Todos os direitos reservados."</p>
                <p class="text-sm">
                    "Pro Coach Virtual não é endossado pela Riot Games e não reflete as opiniões ou visões da Riot Games ou de qualquer pessoa oficialmente envolvida na produção ou gerenciamento de League of Legends."
                </p>
            </div>
        </footer>
    }
}

/// Feature card with an icon badge
#[component]
pub fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    #[prop(optional)] accent: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("card feature-card {accent}")>
            <div class="feature-icon">{icon}</div>
            <h3 class="card-title">{title}</h3>
            <p class="card-description">{description}</p>
        </div>
    }
}

/// Large figure with a caption
#[component]
pub fn Stat(value: &'static str, caption: &'static str) -> impl IntoView {
    view! {
        <div>
            <div class="stat-value">{value}</div>
            <div class="text-slate-400">{caption}</div>
        </div>
    }
}

/// Benefit line with a check mark
#[component]
pub fn CheckItem(text: &'static str) -> impl IntoView {
    view! {
        <li class="flex items-center text-slate-300">
            <span class="check">"✓"</span>
            {text}
        </li>
    }
}
