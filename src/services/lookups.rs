//! Lookup entity services: categories, publishers, formats, cities, states.
//!
//! Each create/update runs the per-entity required-field check before
//! touching the store.

use crate::{
    error::AppResult,
    models::{
        category::{Category, CategoryInput},
        city::{City, CityInput, State},
        format::{Format, FormatInput},
        publisher::{Publisher, PublisherInput},
        ListQuery,
    },
    repository::Repository,
};

use super::{required, required_text};

#[derive(Clone)]
pub struct LookupsService {
    repository: Repository,
}

impl LookupsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // ---- Categories ----

    pub async fn list_categories(&self, query: &ListQuery) -> AppResult<Vec<Category>> {
        self.repository.categories_list(query).await
    }

    pub async fn get_category(&self, id: i32) -> AppResult<Category> {
        self.repository.categories_get(id).await
    }

    pub async fn create_category(&self, input: CategoryInput) -> AppResult<Category> {
        let description = required_text(&input.description, "description")?;
        self.repository.categories_create(&description).await
    }

    pub async fn update_category(&self, id: i32, input: CategoryInput) -> AppResult<Category> {
        let description = required_text(&input.description, "description")?;
        self.repository.categories_update(id, &description).await
    }

    pub async fn delete_category(&self, id: i32) -> AppResult<()> {
        self.repository.categories_delete(id).await
    }

    // ---- Publishers ----

    pub async fn list_publishers(&self, query: &ListQuery) -> AppResult<Vec<Publisher>> {
        self.repository.publishers_list(query).await
    }

    pub async fn get_publisher(&self, id: i32) -> AppResult<Publisher> {
        self.repository.publishers_get(id).await
    }

    pub async fn create_publisher(&self, input: PublisherInput) -> AppResult<Publisher> {
        let name = required_text(&input.name, "name")?;
        self.repository.publishers_create(&name).await
    }

    pub async fn update_publisher(&self, id: i32, input: PublisherInput) -> AppResult<Publisher> {
        let name = required_text(&input.name, "name")?;
        self.repository.publishers_update(id, &name).await
    }

    pub async fn delete_publisher(&self, id: i32) -> AppResult<()> {
        self.repository.publishers_delete(id).await
    }

    // ---- Formats ----

    pub async fn list_formats(&self, query: &ListQuery) -> AppResult<Vec<Format>> {
        self.repository.formats_list(query).await
    }

    pub async fn get_format(&self, id: i32) -> AppResult<Format> {
        self.repository.formats_get(id).await
    }

    pub async fn create_format(&self, input: FormatInput) -> AppResult<Format> {
        let description = required_text(&input.description, "description")?;
        self.repository.formats_create(&description).await
    }

    pub async fn update_format(&self, id: i32, input: FormatInput) -> AppResult<Format> {
        let description = required_text(&input.description, "description")?;
        self.repository.formats_update(id, &description).await
    }

    pub async fn delete_format(&self, id: i32) -> AppResult<()> {
        self.repository.formats_delete(id).await
    }

    // ---- Cities ----

    pub async fn list_cities(&self, query: &ListQuery) -> AppResult<Vec<City>> {
        self.repository.cities_list(query).await
    }

    pub async fn get_city(&self, id: i32) -> AppResult<City> {
        self.repository.cities_get(id).await
    }

    pub async fn create_city(&self, input: CityInput) -> AppResult<City> {
        let name = required_text(&input.name, "name")?;
        let state_id = required(&input.state_id, "state_id")?;
        self.repository.cities_create(&name, state_id).await
    }

    pub async fn update_city(&self, id: i32, input: CityInput) -> AppResult<City> {
        let name = required_text(&input.name, "name")?;
        let state_id = required(&input.state_id, "state_id")?;
        self.repository.cities_update(id, &name, state_id).await
    }

    pub async fn delete_city(&self, id: i32) -> AppResult<()> {
        self.repository.cities_delete(id).await
    }

    // ---- States ----

    pub async fn list_states(&self) -> AppResult<Vec<State>> {
        self.repository.states_list().await
    }
}
