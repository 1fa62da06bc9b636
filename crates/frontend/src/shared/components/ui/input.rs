use leptos::prelude::*;

/// Labeled input bound to a string signal. Numeric inputs pass their
/// min/max/step straight through to the element; real validation happens in
/// `contracts::domain::product::ProductForm::parse`.
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(into)]
    on_input: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "number", "url", ...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// step attribute for number inputs
    #[prop(optional, into)]
    step: MaybeProp<String>,
    /// min attribute for number inputs
    #[prop(optional, into)]
    min: MaybeProp<String>,
    /// max attribute for number inputs
    #[prop(optional, into)]
    max: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <input
                class="form__input"
                type=input_t
                placeholder=input_placeholder
                step=move || step.get()
                min=move || min.get()
                max=move || max.get()
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
