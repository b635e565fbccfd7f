use anyhow::Result;

use crate::client::base::CrudApi;

/// Items that can be located in a collection by identifier.
pub trait Identified {
    fn item_id(&self) -> &str;
}

/// A form bound to a store's working draft.
pub trait FormValidator {
    /// Returns `false` when the form holds invalid input.
    fn validate(&mut self) -> bool;

    fn reset(&mut self);
}

/// State container for one CRUD collection: the fetched items, a working
/// draft used as a form model, and loading/validity flags.
///
/// Every action takes `&mut self`, so a store runs at most one action at a
/// time; share it behind a mutex to serialize actions from several tasks.
/// Failed requests leave `items` and the draft untouched and clear `loading`.
pub struct CollectionStore<A: CrudApi> {
    api: A,
    items: Vec<A::Item>,
    working_data: A::Update,
    loading: bool,
    valid_form: bool,
}

impl<A> CollectionStore<A>
where
    A: CrudApi,
    A::Item: Identified + Clone,
    A::Update: Identified + Default,
    for<'a> A::Create: From<&'a A::Update>,
{
    /// Creates the store. With `eager`, the collection is fetched immediately.
    pub async fn new(api: A, eager: bool) -> Result<Self> {
        let mut store = Self {
            api,
            items: Vec::new(),
            working_data: A::Update::default(),
            loading: false,
            valid_form: false,
        };

        if eager {
            store.items = store.get_all().await?;
        }

        Ok(store)
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn items(&self) -> &[A::Item] {
        &self.items
    }

    pub fn working_data(&self) -> &A::Update {
        &self.working_data
    }

    pub fn working_data_mut(&mut self) -> &mut A::Update {
        &mut self.working_data
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn valid_form(&self) -> bool {
        self.valid_form
    }

    /// Fetches every item and returns them without touching the stored collection.
    pub async fn get_all(&mut self) -> Result<Vec<A::Item>> {
        self.loading = true;
        let result = self.api.get_all(1, -1, &()).await;
        self.loading = false;

        Ok(result?.items)
    }

    /// Fetches every item and replaces the stored collection.
    pub async fn refresh_all(&mut self) -> Result<()> {
        let items = self.get_all().await?;
        tracing::debug!("Refreshed collection with {} items", items.len());
        self.items = items;
        Ok(())
    }

    /// Creates an item from the working draft and appends it.
    ///
    /// An invalid `form` aborts before any request is sent and returns `Ok(None)`.
    pub async fn create_one(&mut self, mut form: Option<&mut dyn FormValidator>) -> Result<Option<A::Item>> {
        if let Some(form) = form.as_deref_mut() {
            if !form.validate() {
                tracing::debug!("Form validation failed, skipping create");
                self.valid_form = false;
                return Ok(None);
            }
        }

        self.loading = true;
        let payload = A::Create::from(&self.working_data);
        let result = self.api.create_one(&payload).await;
        self.loading = false;
        let created = result?;

        self.items.push(created.clone());
        if let Some(form) = form {
            form.reset();
        }
        self.reset();

        Ok(Some(created))
    }

    /// Saves the working draft and replaces the stored item with the same id,
    /// appending it if the collection does not contain it.
    pub async fn update_one(&mut self) -> Result<A::Item> {
        self.loading = true;
        let id = self.working_data.item_id().to_string();
        let result = self.api.update_one(&id, &self.working_data).await;
        self.loading = false;
        let updated = result?;

        match self.items.iter_mut().find(|item| item.item_id() == updated.item_id()) {
            Some(existing) => *existing = updated.clone(),
            None => self.items.push(updated.clone()),
        }
        self.reset();

        Ok(updated)
    }

    /// Deletes `id` and removes it from the stored collection.
    pub async fn delete_one(&mut self, id: &str) -> Result<A::Item> {
        self.loading = true;
        let result = self.api.delete_one(id).await;
        self.loading = false;
        let deleted = result?;

        self.items.retain(|item| item.item_id() != id);
        self.reset();

        Ok(deleted)
    }

    /// Clears the draft back to defaults, clears `loading`, marks the form valid.
    pub fn reset(&mut self) {
        self.working_data = A::Update::default();
        self.loading = false;
        self.valid_form = true;
    }
}
