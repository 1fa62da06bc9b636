use crate::domain::{analytics, product};
use crate::shared::components::{ProgressBar, StatCard};
use crate::shared::format::{format_int, format_money};
use contracts::domain::analytics::AnalyticsSummary;
use contracts::domain::product::{InventoryStats, Product};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Full scale of the monthly-sales bars; matches the static fixture's
/// ceiling so a $20k month fills the bar.
const MONTHLY_SALES_SCALE: f64 = 20_000.0;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (summary, set_summary) = signal(AnalyticsSummary::default());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        spawn_local(async move {
            set_loading.set(true);

            // Live products drive the derived counters
            match product::api::fetch_products().await {
                Ok(list) => {
                    set_products.set(list);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load products: {}", e);
                    set_error.set(Some(e));
                }
            }

            // Static analytics supply revenue and order totals
            match analytics::api::fetch_analytics().await {
                Ok(s) => set_summary.set(s),
                Err(e) => log::error!("failed to load analytics: {}", e),
            }

            set_loading.set(false);
        });
    };
    fetch();

    let stats = move || InventoryStats::collect(&products.get());

    view! {
        <div class="dashboard">
            <h2 class="page-title">"Dashboard Overview"</h2>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading">"Loading dashboard..."</div> }
            >
                <div class="stat-grid">
                    <StatCard
                        label="Total Products"
                        icon_name="package"
                        value=Signal::derive(move || format_int(stats().total_products as u64))
                        badge="Live"
                        description="Actual items in inventory"
                    />
                    <StatCard
                        label="Total Revenue"
                        icon_name="dollar-sign"
                        value=Signal::derive(move || format!("${}", format_money(summary.get().total_revenue)))
                        badge="Fixed"
                        description="Revenue overview"
                    />
                    <StatCard
                        label="Total Orders"
                        icon_name="shopping-cart"
                        value=Signal::derive(move || format_int(summary.get().total_orders))
                        badge="Fixed"
                        description="Total orders placed"
                    />
                    <StatCard
                        label="Low Stock Items"
                        icon_name="alert-triangle"
                        value=Signal::derive(move || format_int(stats().low_stock as u64))
                        badge="Live"
                        description="Need restocking (stock < 20)"
                        accent="danger"
                    />
                </div>

                <div class="panel">
                    <h5>"Product Distribution"</h5>
                    <div class="distribution">
                        <div class="distribution__cell">
                            <h2>{move || stats().total_products}</h2>
                            <p>"Total Products"</p>
                            <small>"Actual count in inventory"</small>
                        </div>
                        <div class="distribution__cell">
                            <h2>{move || stats().high_stock}</h2>
                            <p>"High Stock Items"</p>
                            <small>"Stock >= 100"</small>
                        </div>
                        <div class="distribution__cell distribution__cell--alert">
                            <h2>{move || stats().low_stock}</h2>
                            <p>"Low Stock Alert"</p>
                            <small>"Stock < 20"</small>
                        </div>
                    </div>
                </div>

                <div class="panel-grid">
                    <div class="panel">
                        <h5>"Monthly Sales Trend"</h5>
                        <small class="text-muted">"Static Data"</small>
                        <Show
                            when=move || !summary.get().monthly_sales.is_empty()
                            fallback=|| view! { <p class="empty-note">"No sales data available"</p> }
                        >
                            <div class="bar-list">
                                {move || summary.get().monthly_sales.into_iter().map(|item| {
                                    let percent = item.sales / MONTHLY_SALES_SCALE * 100.0;
                                    view! {
                                        <div class="bar-list__row">
                                            <div class="bar-list__labels">
                                                <span>{item.month.clone()}</span>
                                                <span>{format!("${}", format_money(item.sales))}</span>
                                            </div>
                                            <ProgressBar percent=percent />
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>

                    <div class="panel">
                        <h5>"Top Categories"</h5>
                        <small class="text-muted">"Static Data"</small>
                        <Show
                            when=move || !summary.get().top_categories.is_empty()
                            fallback=|| view! { <p class="empty-note">"No category data available"</p> }
                        >
                            <div class="bar-list">
                                {move || summary.get().top_categories.into_iter().enumerate().map(|(i, item)| {
                                    view! {
                                        <div class="bar-list__row">
                                            <div class="bar-list__labels">
                                                <span>{item.category.clone()}</span>
                                                <span>{format!("{}%", item.percentage)}</span>
                                            </div>
                                            <ProgressBar
                                                percent=item.percentage
                                                variant=if i % 2 == 0 { "" } else { "alt" }
                                            />
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                </div>
            </Show>
        </div>
    }
}
