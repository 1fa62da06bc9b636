pub mod form;
pub mod view_model;

use crate::domain::product::api;
use crate::shared::components::ui::Button;
use crate::shared::dialog;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use contracts::domain::product::{Product, ProductId, StockTier, CURATED_CATEGORIES};
use form::ProductFormFields;
use leptos::prelude::*;
use std::rc::Rc;
use view_model::ProductEditorViewModel;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn ProductEditorPage() -> impl IntoView {
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let vm = ProductEditorViewModel::new();

    let fetch = move || {
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
        });
    };
    fetch();

    // The creation form offers the fixed curated list, not the derived universe
    let categories = Signal::derive(move || {
        CURATED_CATEGORIES
            .iter()
            .map(|c| (c.to_string(), c.to_string()))
            .collect::<Vec<_>>()
    });

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(Rc::new(move || fetch()));
    };

    let handle_edit = move |product: Product| {
        vm.start_edit(product);
        dialog::scroll_to_top();
    };

    let handle_delete = move |id: ProductId| {
        super::delete_with_confirm(id, Rc::new(move || fetch()));
    };

    view! {
        <div class="editor-page">
            <h2 class="page-title">
                {move || if vm.is_editing() { "Edit Product" } else { "Add New Product" }}
            </h2>

            <div class="editor-page__layout">
                <div class="card form-card">
                    <form on:submit=handle_submit>
                        <ProductFormFields vm=vm categories=categories />
                        <div class="form__actions">
                            <Button
                                button_type="submit"
                                disabled=Signal::derive(move || vm.saving.get())
                            >
                                {move || if vm.is_editing() { icon("save") } else { icon("plus") }}
                                <span>
                                    {move || if vm.is_editing() { "Update Product" } else { "Add Product" }}
                                </span>
                            </Button>
                            {move || vm.is_editing().then(|| view! {
                                <Button
                                    variant="danger"
                                    on_click=Callback::new(move |_| vm.reset())
                                >
                                    {icon("x")}
                                    <span>"Cancel"</span>
                                </Button>
                            })}
                        </div>
                    </form>
                </div>

                <div class="card table-card">
                    <div class="card__header">
                        <h5>"Product List"</h5>
                    </div>

                    {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                    <div class="table-container">
                        <table>
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Category"</th>
                                    <th>"Price"</th>
                                    <th>"Stock"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || products.get().into_iter().map(|product| {
                                    let edit_product = product.clone();
                                    let delete_id = product.id.clone();
                                    let stock_class = match product.stock_tier() {
                                        StockTier::Low => "badge badge--stock-low",
                                        _ => "badge badge--stock-high",
                                    };

                                    view! {
                                        <tr>
                                            <td>{product.name.clone()}</td>
                                            <td>
                                                <span class="badge badge--category">
                                                    {product.category.clone()}
                                                </span>
                                            </td>
                                            <td class="price-cell">
                                                {format!("${}", format_money(product.price))}
                                            </td>
                                            <td>
                                                <span class=stock_class>{product.stock}</span>
                                            </td>
                                            <td>
                                                <div class="table-actions">
                                                    <Button
                                                        size="sm"
                                                        variant="ghost"
                                                        on_click=Callback::new(move |_| handle_edit(edit_product.clone()))
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                    <Button
                                                        size="sm"
                                                        variant="danger"
                                                        on_click=Callback::new(move |_| handle_delete(delete_id.clone()))
                                                    >
                                                        {icon("trash")}
                                                    </Button>
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </div>
    }
}
