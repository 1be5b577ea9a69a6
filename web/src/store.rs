use dioxus::prelude::*;
use types::{Employee, remove_employee};

/// Per-view holder for the fetched employee list.
///
/// Each list view constructs its own store on activation; the two views
/// deliberately keep independent copies and are not synchronized with
/// each other.
#[derive(Clone, Copy)]
pub struct EmployeeStore {
    records: Signal<Vec<Employee>>,
    loading: Signal<bool>,
}

impl EmployeeStore {
    pub fn records(&self) -> Signal<Vec<Employee>> {
        self.records
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.read()
    }

    /// Fetch the full list from the service. A failure is logged and
    /// leaves the list empty, so the view settles on its empty state.
    pub fn reload(&self) {
        let mut records = self.records;
        let mut loading = self.loading;

        spawn(async move {
            loading.set(true);
            match api::list_employees().await {
                Ok(list) => records.set(list),
                Err(error) => {
                    tracing::error!(%error, "failed to fetch employees");
                    records.set(Vec::new());
                }
            }
            loading.set(false);
        });
    }

    /// Drop one record locally after a successful delete; the caller
    /// reloads right after to resync with the service.
    pub fn remove(&self, id: &str) {
        let mut records = self.records;
        records.with_mut(|list| remove_employee(list, id));
    }
}

/// Build a store owned by the calling view and load it on mount. Tasks
/// spawned here belong to the view's scope and are dropped with it, so
/// a fetch in flight when the view unmounts is cancelled.
pub fn use_employee_store() -> EmployeeStore {
    let records = use_signal(Vec::new);
    let loading = use_signal(|| true);
    let store = EmployeeStore { records, loading };

    use_effect(move || store.reload());

    store
}
