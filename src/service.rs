//! Glue between the API client and the store.

use serde::Serialize;
use serde_json::Value;

use crate::api::{params_from_map, ApiClient, ApiError};
use crate::config::ApiConfig;
use crate::store::{Level, QuizStore};

/// Fetches quiz data and keeps the store in sync with it.
#[derive(Clone)]
pub struct QuizService {
    client: ApiClient,
    store: QuizStore,
}

impl QuizService {
    pub fn new(client: ApiClient, store: QuizStore) -> Self {
        Self { client, store }
    }

    pub fn store(&self) -> &QuizStore {
        &self.store
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// GETs the question pool and replaces the store's dataset with it.
    ///
    /// A reply that is not an array empties the pool. Returns the number of
    /// questions stored.
    pub async fn load_quiz_data<I, K, V>(&self, url: &str, params: I) -> Result<usize, ApiError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let data: Value = self.client.get(url, params).await?;
        self.store.set_quiz_data_value(data);
        Ok(self.store.quiz_data().len())
    }

    /// Loads the pool from the configured endpoint.
    pub async fn load_from_config(&self, api: &ApiConfig) -> Result<usize, ApiError> {
        self.load_quiz_data(&api.base_url, params_from_map(&api.params))
            .await
    }

    /// Makes every pooled question of `level` the active selection.
    ///
    /// Returns the number of questions selected.
    pub fn select_level(&self, level: &Level) -> usize {
        let questions = self.store.get_quiz_by_level(level);
        let count = questions.len();
        self.store.set_selected_quiz(questions);
        count
    }

    /// POSTs `body` and returns the JSON reply.
    pub async fn submit<B>(&self, url: &str, body: &B) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.client.post_value(url, body).await
    }
}
