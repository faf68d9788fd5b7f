use cardscout_core::{CardSearchService, WikiLinks};

/// Shared application state. Immutable after startup.
pub struct AppState {
    search: CardSearchService,
}

impl AppState {
    pub fn new(search: CardSearchService) -> Self {
        Self { search }
    }

    pub fn search(&self) -> &CardSearchService {
        &self.search
    }

    pub fn links(&self) -> &WikiLinks {
        self.search.links()
    }
}
