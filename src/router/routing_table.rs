use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct RoutingTable {
    routes: Arc<RwLock<HashMap<String, bool>>>,
}

impl RoutingTable {
    pub fn new<I, S>(issuers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let routes = issuers.into_iter().map(|i| (i.into(), true)).collect();
        Self {
            routes: Arc::new(RwLock::new(routes)),
        }
    }

    pub async fn is_enabled(&self, issuer_id: &str) -> bool {
        self.routes.read().await.get(issuer_id).copied().unwrap_or(true)
    }

    pub async fn set_route(&self, issuer_id: &str, enabled: bool) {
        self.routes.write().await.insert(issuer_id.to_string(), enabled);
        tracing::info!(issuer = issuer_id, enabled, "route updated");
    }

    pub async fn routes(&self) -> HashMap<String, bool> {
        self.routes.read().await.clone()
    }
}
