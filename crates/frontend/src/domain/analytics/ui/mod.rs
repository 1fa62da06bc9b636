use crate::domain::{analytics, product};
use crate::shared::components::ProgressBar;
use crate::shared::format::{format_int, format_money};
use crate::shared::icons::icon;
use contracts::domain::analytics::AnalyticsSummary;
use contracts::domain::product::{InventoryStats, Product};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const MONTHLY_SALES_SCALE: f64 = 20_000.0;

// Marketing KPIs shipped with the static analytics fixture.
static STATIC_KPIS: [(&str, &str, &str); 4] = [
    ("trending-up", "Growth Rate", "24.5%"),
    ("dollar-sign", "Avg. Order Value", "$128.50"),
    ("users", "Customer Satisfaction", "92%"),
    ("shopping-bag", "Conversion Rate", "3.8%"),
];

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let (summary, set_summary) = signal(AnalyticsSummary::default());
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        spawn_local(async move {
            set_loading.set(true);

            match analytics::api::fetch_analytics().await {
                Ok(s) => {
                    set_summary.set(s);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load analytics: {}", e);
                    set_error.set(Some(e));
                }
            }

            match product::api::fetch_products().await {
                Ok(list) => set_products.set(list),
                Err(e) => log::error!("failed to load products: {}", e),
            }

            set_loading.set(false);
        });
    };
    fetch();

    let stats = move || InventoryStats::collect(&products.get());

    view! {
        <div class="analytics-page">
            <h2 class="page-title">"Analytics"</h2>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading">"Loading analytics..."</div> }
            >
                <div class="stat-grid">
                    {STATIC_KPIS.iter().map(|(icon_name, label, value)| view! {
                        <div class="analytics-tile">
                            <div class="analytics-tile__icon">{icon(icon_name)}</div>
                            <div>
                                <h6 class="analytics-tile__label">{*label}</h6>
                                <h3 class="analytics-tile__value">{*value}</h3>
                                <small class="text-muted">"Static Data"</small>
                            </div>
                        </div>
                    }).collect_view()}
                </div>

                <div class="panel-grid">
                    <div class="analytics-tile analytics-tile--wide">
                        <div class="analytics-tile__icon">{icon("package")}</div>
                        <div>
                            <div class="analytics-tile__label-row">
                                <h6 class="analytics-tile__label">"Total Products"</h6>
                                <span class="badge badge--live">"Live"</span>
                            </div>
                            <h3 class="analytics-tile__value">
                                {move || format_int(stats().total_products as u64)}
                            </h3>
                            <small class="text-muted">
                                {move || format!(
                                    "Actual count from inventory ({} high stock)",
                                    stats().high_stock
                                )}
                            </small>
                        </div>
                    </div>
                    <div class="analytics-tile analytics-tile--wide">
                        <div class="analytics-tile__icon analytics-tile__icon--alert">
                            {icon("alert-triangle")}
                        </div>
                        <div>
                            <div class="analytics-tile__label-row">
                                <h6 class="analytics-tile__label">"Low Stock Items"</h6>
                                <span class="badge badge--live">"Live"</span>
                            </div>
                            <h3 class="analytics-tile__value">
                                {move || format_int(stats().low_stock as u64)}
                            </h3>
                            <small class="text-muted">
                                {move || if stats().low_stock > 0 {
                                    "Products with stock < 20 (needs attention!)"
                                } else {
                                    "Products with stock < 20"
                                }}
                            </small>
                        </div>
                    </div>
                </div>

                <div class="panel-grid">
                    <div class="panel">
                        <h5>"Sales Performance"</h5>
                        <small class="text-muted">"Static Data"</small>
                        <div class="bar-list">
                            {move || summary.get().monthly_sales.into_iter().enumerate().map(|(i, item)| {
                                let percent = item.sales / MONTHLY_SALES_SCALE * 100.0;
                                view! {
                                    <div class="bar-list__row">
                                        <div class="bar-list__labels">
                                            <span>{item.month.clone()}</span>
                                            <span class="bar-list__amount">
                                                {format!("${}", format_money(item.sales))}
                                            </span>
                                        </div>
                                        <ProgressBar
                                            percent=percent
                                            variant=if i % 2 == 0 { "" } else { "alt" }
                                        />
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    </div>

                    <div class="panel">
                        <h5>"Revenue Distribution"</h5>
                        <small class="text-muted">"Static Data"</small>
                        <div class="bar-list">
                            {move || {
                                let total_revenue = summary.get().total_revenue;
                                summary.get().top_categories.into_iter().enumerate().map(|(i, item)| {
                                    let revenue = item.revenue_share(total_revenue);
                                    view! {
                                        <div class="bar-list__row">
                                            <div class="bar-list__labels">
                                                <span>{item.category.clone()}</span>
                                                <span class="bar-list__amount">
                                                    {format!("{}%", item.percentage)}
                                                </span>
                                            </div>
                                            <div class="bar-list__bar-row">
                                                <ProgressBar
                                                    percent=item.percentage
                                                    variant=if i % 2 == 0 { "" } else { "alt" }
                                                />
                                                <span class="bar-list__revenue">
                                                    {format!("${}", format_money(revenue))}
                                                </span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()
                            }}
                        </div>
                    </div>
                </div>

                <div class="panel">
                    <div class="panel__header">
                        <h5>"Inventory Health"</h5>
                        <span class="badge badge--live">"Live Data"</span>
                    </div>
                    <div class="health-grid">
                        <div class="health-grid__cell health-grid__cell--medium">
                            <h2>{move || stats().total_products}</h2>
                            <p>"Total Products"</p>
                            <small>"Live Inventory Count"</small>
                        </div>
                        <div class="health-grid__cell health-grid__cell--deep">
                            <h2>{move || stats().low_stock}</h2>
                            <p>"Low Stock Items"</p>
                            <small>"Stock < 20"</small>
                        </div>
                        <div class="health-grid__cell health-grid__cell--dark">
                            <h2>{move || format_int(summary.get().total_orders)}</h2>
                            <p>"Total Orders"</p>
                        </div>
                    </div>

                    <div class="health-distribution">
                        <h6>"Live Product Distribution"</h6>
                        <div class="health-distribution__row">
                            <div class="health-distribution__cell">
                                <h5>{move || stats().high_stock}</h5>
                                <small>"High Stock (>= 100)"</small>
                            </div>
                            <div class="health-distribution__cell">
                                <h5>{move || stats().medium_stock}</h5>
                                <small>"Medium Stock (20-99)"</small>
                            </div>
                            <div class="health-distribution__cell health-distribution__cell--alert">
                                <h5>{move || stats().low_stock}</h5>
                                <small>"Low Stock (< 20)"</small>
                            </div>
                            <div class="health-distribution__cell">
                                <h5>{move || stats().category_count}</h5>
                                <small>"Categories"</small>
                            </div>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
