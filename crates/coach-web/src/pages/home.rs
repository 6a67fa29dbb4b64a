//! Home Page

use coach_core::PageId;
use leptos::prelude::*;

use crate::components::{FeatureCard, Stat};
use crate::store::NavStore;

#[component]
pub fn HomePage(nav: NavStore) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-950">
            <section class="hero relative pt-32 pb-20 px-4 overflow-hidden">
                <div
                    class="absolute inset-0 opacity-40"
                    style="background-image: url(/hero-banner-safe.png); background-size: cover; background-position: center;"
                ></div>
                <div class="hero-overlay absolute inset-0"></div>

                <div class="relative max-w-7xl mx-auto text-center">
                    <span class="badge">"⚡ Coaching em Tempo Real"</span>
                    <h1 class="hero-title">"Eleve Seu Jogo ao" <br /> "Próximo Nível"</h1>
                    <p class="tagline">
                        "Tenha seu coach virtual para te ajudar a subir de elo. Treinamento profissional com IA em tempo real, análises detalhadas e coaching por voz durante suas partidas."
                    </p>
                    <div class="cta flex flex-col sm:flex-row gap-4 justify-center">
                        <button class="btn btn-gradient btn-lg" on:click=move |_| nav.navigate(PageId::Pricing)>
                            "Começar Agora →"
                        </button>
                        <button class="btn btn-outline btn-lg" on:click=move |_| nav.navigate(PageId::Features)>
                            "Ver Recursos"
                        </button>
                    </div>
                </div>
            </section>

            <section class="features py-20 px-4 bg-slate-900/50">
                <div class="max-w-7xl mx-auto">
                    <h2 class="section-title">"Recursos Poderosos"</h2>
                    <p class="section-subtitle">"Tudo que você precisa para dominar suas partidas"</p>
                    <div class="grid md:grid-cols-3 gap-8">
                        <FeatureCard
                            icon="🎧"
                            title="Coaching por Voz"
                            description="Receba dicas e estratégias em tempo real através de áudio durante suas partidas"
                            accent="accent-blue"
                        />
                        <FeatureCard
                            icon="📊"
                            title="Análise Detalhada"
                            description="Estatísticas completas, gráficos de desempenho e relatórios pós-partida"
                            accent="accent-purple"
                        />
                        <FeatureCard
                            icon="🛡️"
                            title="100% Seguro"
                            description="Totalmente compatível com as regras do jogo, sem risco de banimento"
                            accent="accent-pink"
                        />
                    </div>
                </div>
            </section>

            <section class="stats py-20 px-4">
                <div class="max-w-7xl mx-auto grid md:grid-cols-3 gap-8 text-center">
                    <Stat value="10K+" caption="Jogadores Ativos" />
                    <Stat value="85%" caption="Taxa de Melhoria" />
                    <Stat value="24/7" caption="Suporte Disponível" />
                </div>
            </section>

            <section class="closing-cta py-20 px-4">
                <div class="max-w-4xl mx-auto text-center">
                    <h2 class="section-title">"Pronto para Começar?"</h2>
                    <p class="text-xl text-slate-300 mb-8">
                        "Junte-se a milhares de jogadores que já estão melhorando com o Pro Coach Virtual"
                    </p>
                    <button class="btn btn-gradient btn-lg" on:click=move |_| nav.navigate(PageId::Pricing)>
                        "Ver Planos 👑"
                    </button>
                </div>
            </section>
        </div>
    }
}
