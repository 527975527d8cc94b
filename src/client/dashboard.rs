//! Dashboard: the client-side item cache and its operations

use tracing::warn;

use crate::model::Item;

use super::api::ApiClient;
use super::form::ItemForm;
use super::notify::{ConsoleNotifier, Notifier};
use super::render::render_items;

const LOAD_FAILED: &str = "Failed to load items";
const EDIT_LOAD_FAILED: &str = "Failed to load item for editing";

/// Items whose name or id contains `term`, case-insensitively.
///
/// The term is trimmed; an empty term matches everything.
pub fn filter_items<'a>(items: &'a [Item], term: &str) -> Vec<&'a Item> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&term) || item.id.to_string().contains(&term)
        })
        .collect()
}

/// Local copy of the full item list plus form and confirmation state.
///
/// Every mutation goes through the API and is followed by a full reload.
/// Failures are reported through the notifier and leave the cached list and
/// the current view untouched.
pub struct Dashboard<N: Notifier = ConsoleNotifier> {
    api: ApiClient,
    notifier: N,
    items: Vec<Item>,
    view: String,
    form: ItemForm,
    edit_target: Option<i64>,
    pending_delete: Option<i64>,
}

impl<N: Notifier> Dashboard<N> {
    pub fn new(api: ApiClient, notifier: N) -> Self {
        Self {
            api,
            notifier,
            items: Vec::new(),
            view: String::new(),
            form: ItemForm::default(),
            edit_target: None,
            pending_delete: None,
        }
    }

    /// Cached items, in server order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Last rendered view. Empty until the first successful load.
    pub fn view(&self) -> &str {
        &self.view
    }

    pub fn form(&self) -> &ItemForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ItemForm {
        &mut self.form
    }

    /// Id of the item the form is editing, if any
    pub fn edit_target(&self) -> Option<i64> {
        self.edit_target
    }

    /// Id awaiting delete confirmation, if any
    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Fetch the full list, replace the cache and re-render.
    pub async fn load(&mut self) -> bool {
        match self.api.list_items().await {
            Ok(items) => {
                self.items = items;
                self.view = render_items(&self.items);
                true
            }
            Err(e) => {
                warn!(error = %e, "loading items failed");
                self.notifier.error(LOAD_FAILED);
                false
            }
        }
    }

    /// Create or update from the form, depending on the edit target.
    ///
    /// Invalid form input is reported without any request. On success the
    /// edit target is cleared, the form reset and the list reloaded.
    pub async fn submit(&mut self) -> bool {
        let payload = match self.form.validate() {
            Ok(payload) => payload,
            Err(e) => {
                self.notifier.error(&e.to_string());
                return false;
            }
        };

        let saved = match self.edit_target {
            Some(id) => self.api.update_item(id, &payload).await,
            None => self.api.create_item(&payload).await,
        };

        match saved {
            Ok(saved) => {
                self.notifier.success(&saved.message);
                self.reset_form();
                self.load().await;
                true
            }
            Err(e) => {
                warn!(error = %e, "saving item failed");
                self.notifier.error(&e.to_string());
                false
            }
        }
    }

    /// Fetch one item into the form and make it the edit target.
    /// The cached list is not touched.
    pub async fn edit(&mut self, id: i64) -> bool {
        match self.api.get_item(id).await {
            Ok(item) => {
                self.form = ItemForm::from_item(&item);
                self.edit_target = Some(id);
                true
            }
            Err(e) => {
                warn!(id, error = %e, "loading item for edit failed");
                self.notifier.error(EDIT_LOAD_FAILED);
                false
            }
        }
    }

    /// Clear the form and leave edit mode
    pub fn reset_form(&mut self) {
        self.form.reset();
        self.edit_target = None;
    }

    /// Arm the delete confirmation for `id`. Ids not in the cache are ignored.
    pub fn request_delete(&mut self, id: i64) -> bool {
        if !self.items.iter().any(|item| item.id == id) {
            return false;
        }
        self.pending_delete = Some(id);
        true
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the armed item. On success the confirmation is closed and the
    /// list reloaded; on failure it stays armed.
    pub async fn confirm_delete(&mut self) -> bool {
        let Some(id) = self.pending_delete else {
            return false;
        };

        match self.api.delete_item(id).await {
            Ok(done) => {
                self.notifier.success(&done.message);
                self.pending_delete = None;
                self.load().await;
                true
            }
            Err(e) => {
                warn!(id, error = %e, "deleting item failed");
                self.notifier.error(&e.to_string());
                false
            }
        }
    }

    /// Filter the cached list and re-render it. No request is made.
    pub fn search(&mut self, term: &str) -> Vec<&Item> {
        let matches = filter_items(&self.items, term);
        self.view = render_items(matches.iter().copied());
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::notify::{RecordingNotifier, ToastKind};
    use chrono::NaiveDate;

    fn item(id: i64, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            quantity: 1,
            price: 1.0,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    fn catalogue() -> Vec<Item> {
        vec![item(12, "Blue Widget"), item(7, "Gadget"), item(3, "widget nut")]
    }

    fn ids(items: &[&Item]) -> Vec<i64> {
        items.iter().map(|item| item.id).collect()
    }

    // Nothing listens on the discard port, so any request would fail.
    fn offline_dashboard() -> Dashboard<RecordingNotifier> {
        Dashboard::new(ApiClient::new("http://127.0.0.1:9"), RecordingNotifier::new())
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let items = catalogue();
        assert_eq!(ids(&filter_items(&items, "WIDGET")), vec![12, 3]);
    }

    #[test]
    fn test_filter_matches_id_substring() {
        let items = catalogue();
        assert_eq!(ids(&filter_items(&items, "12")), vec![12]);
        assert_eq!(ids(&filter_items(&items, " 7 ")), vec![7]);
    }

    #[test]
    fn test_exact_name_or_id_always_matches() {
        let items = catalogue();
        for item in &items {
            assert!(filter_items(&items, &item.name)
                .iter()
                .any(|found| found.id == item.id));
            assert!(filter_items(&items, &item.id.to_string())
                .iter()
                .any(|found| found.id == item.id));
        }
    }

    #[test]
    fn test_blank_term_matches_all() {
        let items = catalogue();
        assert_eq!(filter_items(&items, "   ").len(), items.len());
    }

    #[test]
    fn test_search_without_network() {
        let mut dashboard = offline_dashboard();
        dashboard.items = catalogue();

        assert!(dashboard.search("no such thing").is_empty());
        assert!(dashboard.view().contains("No items found"));
        assert!(dashboard.notifier().toasts().is_empty());

        assert_eq!(dashboard.search("gadget").len(), 1);
        assert!(dashboard.view().contains("#7 Gadget"));
    }

    #[test]
    fn test_request_delete_requires_cached_item() {
        let mut dashboard = offline_dashboard();
        dashboard.items = catalogue();

        assert!(!dashboard.request_delete(99));
        assert_eq!(dashboard.pending_delete(), None);

        assert!(dashboard.request_delete(7));
        assert_eq!(dashboard.pending_delete(), Some(7));

        dashboard.cancel_delete();
        assert_eq!(dashboard.pending_delete(), None);
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_sent() {
        let mut dashboard = offline_dashboard();
        *dashboard.form_mut() = ItemForm::new("", 1, 1.0);

        assert!(!dashboard.submit().await);

        let toast = dashboard.notifier().last().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "Product name is required");
        assert_eq!(dashboard.notifier().toasts().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_view() {
        let mut dashboard = offline_dashboard();
        dashboard.items = catalogue();
        dashboard.view = "previous".to_string();

        assert!(!dashboard.load().await);

        assert_eq!(dashboard.view(), "previous");
        assert_eq!(dashboard.items().len(), 3);
        assert_eq!(dashboard.notifier().last().unwrap().message, LOAD_FAILED);
    }

    #[tokio::test]
    async fn test_confirm_without_request_does_nothing() {
        let mut dashboard = offline_dashboard();
        assert!(!dashboard.confirm_delete().await);
        assert!(dashboard.notifier().toasts().is_empty());
    }
}
