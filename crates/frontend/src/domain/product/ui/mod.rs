pub mod catalog;
pub mod details;
pub mod editor;
pub mod inventory;

use crate::shared::dialog;
use contracts::domain::product::ProductId;
use std::rc::Rc;

/// Confirmation-gated delete, then hand control back so the caller can
/// re-fetch the list.
pub(crate) fn delete_with_confirm(id: ProductId, on_deleted: Rc<dyn Fn()>) {
    if !dialog::confirm("Are you sure you want to delete this product?") {
        return;
    }

    wasm_bindgen_futures::spawn_local(async move {
        match super::api::delete_product(&id).await {
            Ok(()) => {
                dialog::alert("Product deleted successfully!");
                (on_deleted)();
            }
            Err(e) => {
                log::error!("failed to delete product {}: {}", id, e);
                dialog::alert("Error deleting product");
            }
        }
    });
}

/// Shorten list-cell text, appending an ellipsis when something was cut.
pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("Mug", 10), "Mug");
    }

    #[test]
    fn truncate_cuts_on_char_boundary() {
        assert_eq!(truncate("abcdef", 4), "abcd...");
        assert_eq!(truncate("éééééé", 4), "éééé...");
    }
}
