use super::view_model::ProductEditorViewModel;
use crate::shared::components::ui::{Input, Select, Textarea};
use leptos::prelude::*;

/// Form fields shared by the editor page and the inventory edit modal.
/// Parsing and validation live in `ProductForm::parse`; here the fields are
/// only mirrored into the view-model signal.
#[component]
pub fn ProductFormFields(
    vm: ProductEditorViewModel,
    /// Category options as (value, label) pairs
    #[prop(into)]
    categories: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    let form = vm.form;

    view! {
        <Input
            label="Product Name"
            value=Signal::derive(move || form.get().name)
            on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
            required=true
        />
        <Textarea
            label="Description"
            value=Signal::derive(move || form.get().description)
            on_input=Callback::new(move |v: String| form.update(|f| f.description = v))
            required=true
        />
        <div class="form__row">
            <Input
                label="Price ($)"
                input_type="number"
                step="0.01"
                min="0"
                value=Signal::derive(move || form.get().price)
                on_input=Callback::new(move |v: String| form.update(|f| f.price = v))
                required=true
            />
            <Input
                label="Stock Quantity"
                input_type="number"
                min="0"
                value=Signal::derive(move || form.get().stock)
                on_input=Callback::new(move |v: String| form.update(|f| f.stock = v))
                required=true
            />
        </div>
        <div class="form__row">
            <Select
                label="Category"
                value=Signal::derive(move || form.get().category)
                on_change=Callback::new(move |v: String| form.update(|f| f.category = v))
                options=categories
            />
            <Input
                label="Rating (1-5)"
                input_type="number"
                step="0.1"
                min="1"
                max="5"
                value=Signal::derive(move || form.get().rating)
                on_input=Callback::new(move |v: String| form.update(|f| f.rating = v))
                required=true
            />
        </div>
        <Input
            label="Image URL"
            input_type="url"
            placeholder="https://example.com/image.jpg"
            value=Signal::derive(move || form.get().image)
            on_input=Callback::new(move |v: String| form.update(|f| f.image = v))
        />
        {move || vm.error.get().map(|e| view! {
            <div class="form__error">{e}</div>
        })}
    }
}
