use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Modal(
    /// Title shown in the modal header
    #[prop(into)]
    title: String,
    /// Callback when the modal should close
    on_close: Callback<()>,
    /// Optional footer (action buttons)
    #[prop(optional)]
    footer: Option<AnyView>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Clicking the dimmed overlay closes; clicks inside the dialog don't.
    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| {
        on_close.run(());
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal" on:click=stop_propagation>
                <div class="modal__header">
                    <h5 class="modal__title">{title}</h5>
                    <button class="button button--icon modal__close" on:click=handle_close>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal__body">
                    {children()}
                </div>
                {footer.map(|f| view! {
                    <div class="modal__footer">{f}</div>
                })}
            </div>
        </div>
    }
}
