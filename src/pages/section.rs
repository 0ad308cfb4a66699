//! Placeholder page for the catalog, document and stock sections.
//!
//! Section bodies are rendered elsewhere; this page carries the shared chrome,
//! the route parameter and the role-based read-only hint.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::UserRole;
use crate::pages::header::AppHeader;
use crate::router::routes::RouteName;
use crate::state::permissions::Permissions;
use crate::state::session::SessionSnapshot;

/// Sections linked from the top bar, in display order.
pub const NAV_SECTIONS: [RouteName; 7] = [
    RouteName::Dashboard,
    RouteName::Documents,
    RouteName::Stock,
    RouteName::Nomenclature,
    RouteName::Suppliers,
    RouteName::Warehouses,
    RouteName::Reports,
];

pub fn section_title(name: RouteName) -> &'static str {
    match name {
        RouteName::Dashboard => "Главная",
        RouteName::Login => "Вход",
        RouteName::Profile => "Профиль",
        RouteName::Documents => "Документы",
        RouteName::DocumentCreate => "Новый документ",
        RouteName::DocumentDetail => "Документ",
        RouteName::DocumentEdit => "Редактирование документа",
        RouteName::Stock => "Остатки",
        RouteName::ItemDetail => "Карточка товара",
        RouteName::Nomenclature => "Номенклатура",
        RouteName::Suppliers => "Поставщики",
        RouteName::SupplierDetail => "Поставщик",
        RouteName::Warehouses => "Склады",
        RouteName::WarehouseDetail => "Склад",
        RouteName::Reports => "Отчёты",
    }
}

pub fn role_label(role: UserRole) -> &'static str {
    match role {
        UserRole::Manager => "Менеджер",
        UserRole::StoreKeeper => "Кладовщик",
    }
}

/// Whether `name` offers its editing controls under `permissions`.
pub(crate) fn is_read_only(name: RouteName, permissions: Permissions) -> bool {
    match name {
        RouteName::Nomenclature | RouteName::ItemDetail => !permissions.can_edit_nomenclature,
        RouteName::Stock => !permissions.can_adjust_stock,
        RouteName::Reports => !permissions.can_export_reports,
        _ => false,
    }
}

#[component]
pub fn SectionPage(name: RouteName) -> impl IntoView {
    let snapshot = expect_context::<RwSignal<SessionSnapshot>>();
    let params = use_params_map();
    let permissions = Memo::new(move |_| Permissions::for_role(snapshot.with(SessionSnapshot::role)));

    view! {
        <AppHeader/>
        <main class="section-page">
            <h1>
                {section_title(name)}
                {move || params.with(|p| p.get("id")).map(|id| format!(" #{id}"))}
            </h1>
            <Show when=move || is_read_only(name, permissions.get())>
                <p class="section-page__hint">"Только просмотр"</p>
            </Show>
        </main>
    }
}
