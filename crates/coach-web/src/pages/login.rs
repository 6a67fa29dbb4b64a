//! Login / Registration Page

use coach_core::LoginTab;
use leptos::prelude::*;

/// Sign-in and registration forms.
///
/// Neither form has a submit handler: submitting performs the browser's
/// default form action.
#[component]
pub fn LoginPage() -> impl IntoView {
    let (tab, set_tab) = signal(LoginTab::default());

    let triggers = LoginTab::ALL
        .into_iter()
        .map(|t| {
            view! {
                <button
                    type="button"
                    class="tab-trigger"
                    class:active=move || tab.get() == t
                    data-value=t.as_str()
                    on:click=move |_| set_tab.set(t)
                >
                    {t.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="login min-h-screen bg-slate-950 pt-32 pb-20 px-4">
            <div class="max-w-md mx-auto card">
                <div class="card-header text-center">
                    <h2 class="card-title">"Bem-vindo"</h2>
                    <p class="card-description">"Entre ou crie sua conta para começar"</p>
                </div>
                <div class="card-content">
                    <div class="tabs-list grid w-full grid-cols-2 mb-6">{triggers}</div>
                    {move || match tab.get() {
                        LoginTab::SignIn => view! { <SignInForm /> }.into_any(),
                        LoginTab::Register => view! { <RegisterForm /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn SignInForm() -> impl IntoView {
    view! {
        <form class="space-y-4">
            <div>
                <label for="username">"Usuário"</label>
                <input id="username" placeholder="Seu nome de usuário" />
            </div>
            <div>
                <label for="password">"Senha"</label>
                <input id="password" type="password" placeholder="Sua senha" />
            </div>
            <button type="submit" class="btn btn-gradient w-full">
                {LoginTab::SignIn.submit_label()}
            </button>
        </form>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    view! {
        <form class="space-y-4">
            <div>
                <label for="new-username">"Usuário"</label>
                <input id="new-username" placeholder="Escolha um nome de usuário" />
            </div>
            <div>
                <label for="email">"Email"</label>
                <input id="email" type="email" placeholder="seu@email.com" />
            </div>
            <div>
                <label for="new-password">"Senha"</label>
                <input id="new-password" type="password" placeholder="Crie uma senha forte" />
            </div>
            <button type="submit" class="btn btn-gradient w-full">
                {LoginTab::Register.submit_label()}
            </button>
        </form>
    }
}
