use std::sync::Arc;

use async_trait::async_trait;
use services::{NO_RESULTS, SearchError, SearchProvider};

/// Canned provider so the suite never talks to the network.
struct ScriptedSearch {
    reply: Option<String>,
}

#[async_trait]
impl SearchProvider for ScriptedSearch {
    async fn search(&self, query: &str) -> Result<String, SearchError> {
        match &self.reply {
            Some(reply) => Ok(format!("{query}: {reply}")),
            None => Ok(NO_RESULTS.to_string()),
        }
    }
}

#[tokio::test]
async fn providers_swap_behind_the_trait_object() {
    let provider: Arc<dyn SearchProvider> = Arc::new(ScriptedSearch {
        reply: Some("two articles".to_string()),
    });

    let text = provider.search("ospf areas").await.unwrap();
    assert_eq!(text, "ospf areas: two articles");
}

#[tokio::test]
async fn empty_outcome_uses_the_sentinel_text() {
    let provider: Arc<dyn SearchProvider> = Arc::new(ScriptedSearch { reply: None });
    assert_eq!(provider.search("anything").await.unwrap(), NO_RESULTS);
}
