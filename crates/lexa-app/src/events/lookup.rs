use lexa_core::LookupController;

pub fn handle_search(lookup: &LookupController, word: &str) {
    tracing::debug!("search submitted: '{word}'");
    lookup.submit(word);
}

pub fn handle_reset(lookup: &LookupController) {
    lookup.reset();
}
