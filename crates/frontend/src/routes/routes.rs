use crate::dashboards::overview::DashboardPage;
use crate::domain::analytics::ui::AnalyticsPage;
use crate::domain::product::ui::catalog::CatalogPage;
use crate::domain::product::ui::editor::ProductEditorPage;
use crate::domain::product::ui::inventory::InventoryPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! {
            <div class="empty-state">
                <h4>"Page not found"</h4>
            </div>
        }>
            <Route path=path!("/") view=DashboardPage />
            <Route path=path!("/products") view=CatalogPage />
            <Route path=path!("/add-product") view=ProductEditorPage />
            <Route path=path!("/product-list") view=InventoryPage />
            <Route path=path!("/analytics") view=AnalyticsPage />
        </Routes>
    }
}
