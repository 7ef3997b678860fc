//! Shared application state, handed to every request by the router.

use crate::rating::RatingSource;
use crate::store::MovieStore;
use crate::views::Views;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MovieStore>,
    pub rating: Arc<dyn RatingSource>,
    pub views: Views,
}

impl AppState {
    pub fn new(store: Arc<dyn MovieStore>, rating: Arc<dyn RatingSource>, views: Views) -> Self {
        AppState { store, rating, views }
    }
}
