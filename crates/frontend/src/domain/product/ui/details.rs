use crate::shared::components::ui::Button;
use crate::shared::components::{Modal, StarRating};
use crate::shared::date_utils::format_date;
use crate::shared::format::{format_int, format_money};
use crate::shared::icons::icon;
use contracts::domain::product::Product;
use leptos::prelude::*;

/// Read-only product view shared by the catalog and inventory screens.
#[component]
pub fn ProductDetailsModal(product: Product, on_close: Callback<()>) -> impl IntoView {
    let tier = product.stock_tier();
    let rating = product.rating_or_zero();

    let footer = view! {
        <Button variant="secondary" on_click=Callback::new(move |_| on_close.run(()))>
            {icon("x")}
            <span>"Close"</span>
        </Button>
    }
    .into_any();

    view! {
        <Modal title="Product Details" on_close=on_close footer=footer>
            <div class="details">
                <div class="details__image">
                    <img src=product.image.clone() alt=product.name.clone() />
                </div>
                <div class="details__info">
                    <h4 class="details__name">{product.name.clone()}</h4>
                    <p class="details__description">{product.description.clone()}</p>

                    <div class="details__row">
                        <strong>"Category:"</strong>
                        <span class="badge badge--category">{product.category.clone()}</span>
                    </div>

                    <div class="details__grid">
                        <div>
                            <strong>"Price:"</strong>
                            <h5>{format!("${}", format_money(product.price))}</h5>
                        </div>
                        <div>
                            <strong>"Stock:"</strong>
                            <h5>
                                <span class=format!("badge {}", tier.badge_class())>
                                    {format!("{} units", product.stock)}
                                </span>
                            </h5>
                        </div>
                        <div>
                            <strong>"Rating:"</strong>
                            <StarRating rating=rating />
                        </div>
                        <div>
                            <strong>"Sales:"</strong>
                            <h5>{format_int(product.sales)}</h5>
                        </div>
                    </div>

                    {product.created_at.map(|date| view! {
                        <div class="details__row">
                            <strong>"Added:"</strong>
                            <span>{format_date(date)}</span>
                        </div>
                    })}
                </div>
            </div>
        </Modal>
    }
}
