use super::details::ProductDetailsModal;
use super::editor::form::ProductFormFields;
use super::editor::view_model::ProductEditorViewModel;
use crate::domain::product::api;
use crate::shared::components::ui::Button;
use crate::shared::components::{Modal, SearchInput, StarRating};
use crate::shared::format::{format_int, format_money};
use crate::shared::icons::icon;
use contracts::domain::product::{
    category_options, Product, ProductFilter, ProductId, ALL_CATEGORIES,
};
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn InventoryPage() -> impl IntoView {
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    // Filter inputs
    let (search, set_search) = signal(String::new());
    let (category, set_category) = signal(ALL_CATEGORIES.to_string());

    // Modals
    let (viewing, set_viewing) = signal::<Option<Product>>(None);
    let (show_edit, set_show_edit) = signal(false);
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
            set_loading.set(false);
        });
    };
    fetch();

    // Fully recomputed whenever either input or the collection changes
    let filtered = move || ProductFilter::new(search.get(), category.get()).apply(&products.get());

    let filter_choices = move || {
        category_options(&products.get())
            .into_iter()
            .map(|c| (c.clone(), c))
            .collect::<Vec<_>>()
    };

    // Edit modal dropdown: the derived universe without the "All" sentinel
    let edit_categories = Signal::derive(move || {
        category_options(&products.get())
            .into_iter()
            .filter(|c| c != ALL_CATEGORIES)
            .map(|c| (c.clone(), c))
            .collect::<Vec<_>>()
    });

    let handle_view = move |product: Product| {
        set_viewing.set(Some(product));
    };

    let handle_edit = move |product: Product| {
        vm.start_edit(product);
        set_show_edit.set(true);
    };

    let handle_cancel_edit = move || {
        set_show_edit.set(false);
        vm.reset();
    };

    let handle_delete = move |id: ProductId| {
        super::delete_with_confirm(id, Rc::new(move || fetch()));
    };

    view! {
        <div class="inventory-page">
            <div class="page-header">
                <h2 class="page-title">"Product Inventory"</h2>
                <span class="badge badge--count">
                    {move || format!("Total: {} products", filtered().len())}
                </span>
            </div>

            <div class="filter-row">
                <SearchInput
                    value=search
                    on_change=Callback::new(move |val: String| set_search.set(val))
                    placeholder="Search products by name or description..."
                />
                <div class="filter-row__category">
                    <span class="filter-row__icon">{icon("filter")}</span>
                    <select
                        class="form__select"
                        on:change=move |ev| set_category.set(event_target_value(&ev))
                    >
                        {move || {
                            let selected = category.get();
                            filter_choices().into_iter().map(|(val, label)| {
                                let is_selected = val == selected;
                                view! {
                                    <option value=val selected=is_selected>{label}</option>
                                }
                            }).collect_view()
                        }}
                    </select>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading">"Loading products..."</div> }
            >
                <div class="table-container">
                    <table>
                        <thead>
                            <tr>
                                <th>"Product"</th>
                                <th>"Category"</th>
                                <th>"Price"</th>
                                <th>"Stock"</th>
                                <th>"Rating"</th>
                                <th>"Sales"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || filtered().into_iter().map(|product| {
                                let view_product = product.clone();
                                let edit_product = product.clone();
                                let delete_id = product.id.clone();
                                let tier = product.stock_tier();

                                view! {
                                    <tr>
                                        <td>
                                            <div class="product-cell">
                                                <img
                                                    class="product-cell__thumb"
                                                    src=product.image.clone()
                                                    alt=product.name.clone()
                                                />
                                                <div>
                                                    <strong>{product.name.clone()}</strong>
                                                    <p class="product-cell__description">
                                                        {super::truncate(&product.description, 50)}
                                                    </p>
                                                </div>
                                            </div>
                                        </td>
                                        <td>
                                            <span class="badge badge--category">
                                                {product.category.clone()}
                                            </span>
                                        </td>
                                        <td class="price-cell">
                                            {format!("${}", format_money(product.price))}
                                        </td>
                                        <td>
                                            <span class=format!("badge {}", tier.badge_class())>
                                                {format!("{} units", product.stock)}
                                            </span>
                                        </td>
                                        <td>
                                            <StarRating rating=product.rating_or_zero() />
                                        </td>
                                        <td>
                                            <span class="badge badge--sales">
                                                {format_int(product.sales)}
                                            </span>
                                        </td>
                                        <td>
                                            <div class="table-actions">
                                                <Button
                                                    size="sm"
                                                    variant="ghost"
                                                    on_click=Callback::new(move |_| handle_view(view_product.clone()))
                                                >
                                                    {icon("eye")}
                                                </Button>
                                                <Button
                                                    size="sm"
                                                    variant="secondary"
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

                {move || filtered().is_empty().then(|| view! {
                    <div class="empty-state">
                        <h4>"No products found"</h4>
                        <p>"Try changing your search criteria"</p>
                    </div>
                })}
            </Show>

            {move || viewing.get().map(|product| view! {
                <ProductDetailsModal
                    product=product
                    on_close=Callback::new(move |_| set_viewing.set(None))
                />
            })}

            {move || show_edit.get().then(|| {
                let footer = view! {
                    <Button
                        variant="danger"
                        on_click=Callback::new(move |_| handle_cancel_edit())
                    >
                        {icon("x")}
                        <span>"Cancel"</span>
                    </Button>
                    <Button
                        disabled=Signal::derive(move || vm.saving.get())
                        on_click=Callback::new(move |_| {
                            vm.save_command(Rc::new(move || {
                                set_show_edit.set(false);
                                fetch();
                            }));
                        })
                    >
                        {icon("save")}
                        <span>"Save Changes"</span>
                    </Button>
                }
                .into_any();

                view! {
                    <Modal
                        title="Edit Product"
                        on_close=Callback::new(move |_| handle_cancel_edit())
                        footer=footer
                    >
                        <ProductFormFields vm=vm categories=edit_categories />
                    </Modal>
                }
            })}
        </div>
    }
}
