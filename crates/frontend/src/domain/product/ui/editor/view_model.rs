use crate::domain::product::api;
use crate::shared::{date_utils, dialog};
use contracts::domain::product::{Product, ProductForm};
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

/// ViewModel for the product create/edit form.
///
/// Two states: idle and saving. Submit routes to update when a record is
/// being edited, otherwise to create; the caller re-fetches the list on
/// success instead of patching its local copy.
#[derive(Clone, Copy)]
pub struct ProductEditorViewModel {
    pub form: RwSignal<ProductForm>,
    /// The record being edited; None while creating.
    pub editing: RwSignal<Option<Product>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ProductEditorViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProductForm::default()),
            editing: RwSignal::new(None),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.get().is_some()
    }

    /// Pre-fill the form from an existing record.
    pub fn start_edit(&self, product: Product) {
        self.form.set(ProductForm::from_product(&product));
        self.editing.set(Some(product));
        self.error.set(None);
    }

    pub fn reset(&self) {
        self.form.set(ProductForm::default());
        self.editing.set(None);
        self.error.set(None);
    }

    /// Validate and submit the form.
    pub fn save_command(&self, on_saved: Rc<dyn Fn()>) {
        let parsed = match self.form.get().parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        let (id, record, success_message) = match self.editing.get() {
            Some(product) => {
                let record = parsed.into_update(&product);
                (Some(product.id), record, "Product updated successfully!")
            }
            None => (
                None,
                parsed.into_new_product(date_utils::today()),
                "Product added successfully!",
            ),
        };

        let vm = *self;
        vm.saving.set(true);

        spawn_local(async move {
            let result = match &id {
                Some(id) => api::update_product(id, &record).await,
                None => api::create_product(&record).await,
            };
            vm.saving.set(false);

            match result {
                Ok(()) => {
                    dialog::alert(success_message);
                    vm.reset();
                    (on_saved)();
                }
                Err(e) => {
                    log::error!("failed to save product: {}", e);
                    vm.error.set(Some(e));
                    dialog::alert("Error saving product");
                }
            }
        });
    }
}

impl Default for ProductEditorViewModel {
    fn default() -> Self {
        Self::new()
    }
}
