//! Dashboard page: warehouse fill, recent movements and low-stock items.

use leptos::prelude::*;

use crate::net::WmsApi;
use crate::pages::header::AppHeader;
use crate::state::dashboard::DashboardState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<WmsApi>();
    let state = RwSignal::new(DashboardState::default());

    state.update(DashboardState::begin_refresh);
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = crate::state::dashboard::load_dashboard(&api.stats).await;
        if let Err(err) = &result {
            leptos::logging::warn!("dashboard refresh failed: {err}");
        }
        state.update(|s| s.finish_refresh(result));
    });
    #[cfg(not(feature = "csr"))]
    let _ = api;

    view! {
        <AppHeader/>
        <main class="dashboard-page">
            <h1>"Главная"</h1>
            <Show when=move || state.with(|s| s.loading)>
                <p>"Загрузка..."</p>
            </Show>
            {move || state.with(|s| s.error.clone()).map(|e| view! { <p class="dashboard-page__error">{e}</p> })}

            <section class="dashboard-page__utilization">
                <h2>"Заполненность складов"</h2>
                <ul>
                    {move || {
                        state
                            .with(|s| s.data.utilization.clone())
                            .into_iter()
                            .map(|w| {
                                let fill = w.fill_ratio().map(|r| format!("{:.0}%", r * 100.0)).unwrap_or_default();
                                view! { <li>{w.warehouse_name}" "{fill}</li> }
                            })
                            .collect_view()
                    }}
                </ul>
            </section>

            <section class="dashboard-page__movements">
                <h2>"Движение товаров"</h2>
                <ul>
                    {move || {
                        state
                            .with(|s| s.data.movements.clone())
                            .into_iter()
                            .map(|m| view! { <li>{m.date}" +"{m.incoming}" -"{m.outgoing}</li> })
                            .collect_view()
                    }}
                </ul>
            </section>

            <section class="dashboard-page__low-stock">
                <h2>"Заканчивается"</h2>
                <ul>
                    {move || {
                        state
                            .with(|s| s.data.low_stock.clone())
                            .into_iter()
                            .map(|i| view! { <li>{i.code}" "{i.name}": "{i.quantity}" / "{i.min_quantity}</li> })
                            .collect_view()
                    }}
                </ul>
            </section>
        </main>
    }
}
