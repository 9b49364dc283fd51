macro_rules! docs_url {
    ($page:literal) => {
        concat!("https://www.cockroachlabs.com/docs/stable/", $page)
    };
}

pub const CLUSTER_STORE: &str = docs_url!("cockroach-start.html#store");
pub const HOW_ARE_CAPACITY_METRICS_CALCULATED: &str =
    docs_url!("ui-storage-dashboard.html#capacity-metrics");
pub const KEY_VALUE_PAIRS: &str = docs_url!("architecture/distribution-layer.html#table-data");
pub const CLUSTER_SETTINGS: &str = docs_url!("cluster-settings.html");
pub const TRANSACTION_RETRY_ERROR_REFERENCE: &str =
    docs_url!("transaction-retry-error-reference.html");
