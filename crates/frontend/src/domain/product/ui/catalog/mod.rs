use super::details::ProductDetailsModal;
use crate::domain::product::api;
use crate::shared::components::ui::Button;
use crate::shared::components::StarRating;
use crate::shared::format::{format_int, format_money};
use crate::shared::icons::icon;
use contracts::domain::product::Product;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (viewing, set_viewing) = signal::<Option<Product>>(None);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(list) => {
                    set_products.set(list);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load products: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };
    fetch();

    view! {
        <div class="catalog-page">
            <h2 class="page-title">"Product Catalog"</h2>

            {move || loading.get().then(|| view! {
                <p class="loading">"Loading products..."</p>
            })}
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="card-grid">
                {move || products.get().into_iter().map(|product| {
                    let view_product = product.clone();
                    let tier = product.stock_tier();

                    view! {
                        <div class="product-card">
                            <div class="product-card__image-wrap">
                                <img
                                    class="product-card__image"
                                    src=product.image.clone()
                                    alt=product.name.clone()
                                />
                                <span class="product-card__category">
                                    {product.category.clone()}
                                </span>
                            </div>
                            <div class="product-card__body">
                                <h5 class="product-card__title">{product.name.clone()}</h5>
                                <p class="product-card__description">
                                    {super::truncate(&product.description, 80)}
                                </p>
                                <div class="product-card__meta">
                                    <StarRating rating=product.rating_or_zero() />
                                    <span class=format!("badge {}", tier.badge_class())>
                                        {format!("Stock: {}", product.stock)}
                                    </span>
                                </div>
                                <div class="product-card__buy-row">
                                    <h4 class="product-card__price">
                                        {format!("${}", format_money(product.price))}
                                    </h4>
                                    <Button
                                        size="sm"
                                        variant="secondary"
                                        on_click=Callback::new(move |_| set_viewing.set(Some(view_product.clone())))
                                    >
                                        {icon("eye")}
                                        <span>"View"</span>
                                    </Button>
                                </div>
                            </div>
                            <div class="product-card__footer">
                                <small>{format!("Sales: {} units", format_int(product.sales))}</small>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>

            {move || viewing.get().map(|product| view! {
                <ProductDetailsModal
                    product=product
                    on_close=Callback::new(move |_| set_viewing.set(None))
                />
            })}
        </div>
    }
}
