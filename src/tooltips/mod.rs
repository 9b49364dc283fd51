pub mod docs;
mod graphs;

use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;
use voca_rs::escape::escape_html;

/// Substituted wherever a tooltip mentions its scope and the dashboard has
/// not supplied one.
pub const FALLBACK_SELECTION: &str = "across all nodes / on node <node>";

type Render = fn(&str) -> String;

/// Graphs on the node dashboards that carry an explanatory tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TooltipId {
    Capacity,
    AvailableDiscCapacity,
    LogicalBytes,
    LiveBytes,
    StatementDenialsClusterSettings,
    TransactionRestarts,
    CircuitBreakerTrippedReplicas,
    CircuitBreakerTrippedEvents,
    ReceiverSnapshotsQueued,
}

pub const CATALOG: &[TooltipId] = &[
    TooltipId::Capacity,
    TooltipId::AvailableDiscCapacity,
    TooltipId::LogicalBytes,
    TooltipId::LiveBytes,
    TooltipId::StatementDenialsClusterSettings,
    TooltipId::TransactionRestarts,
    TooltipId::CircuitBreakerTrippedReplicas,
    TooltipId::CircuitBreakerTrippedEvents,
    TooltipId::ReceiverSnapshotsQueued,
];

impl TooltipId {
    pub fn as_str(&self) -> &'static str {
        match self {
            TooltipId::Capacity => "capacity",
            TooltipId::AvailableDiscCapacity => "available-disc-capacity",
            TooltipId::LogicalBytes => "logical-bytes",
            TooltipId::LiveBytes => "live-bytes",
            TooltipId::StatementDenialsClusterSettings => "statement-denials-cluster-settings",
            TooltipId::TransactionRestarts => "transaction-restarts",
            TooltipId::CircuitBreakerTrippedReplicas => "circuit-breaker-tripped-replicas",
            TooltipId::CircuitBreakerTrippedEvents => "circuit-breaker-tripped-events",
            TooltipId::ReceiverSnapshotsQueued => "receiver-snapshots-queued",
        }
    }

    /// Whether the tooltip text depends on the dashboard's node selection.
    pub fn is_parameterized(&self) -> bool {
        matches!(
            self,
            TooltipId::Capacity
                | TooltipId::LiveBytes
                | TooltipId::StatementDenialsClusterSettings
                | TooltipId::TransactionRestarts
        )
    }

    fn renderer(&self) -> Render {
        match self {
            TooltipId::Capacity => graphs::capacity,
            TooltipId::AvailableDiscCapacity => graphs::available_disc_capacity,
            TooltipId::LogicalBytes => graphs::logical_bytes,
            TooltipId::LiveBytes => graphs::live_bytes,
            TooltipId::StatementDenialsClusterSettings => {
                graphs::statement_denials_cluster_settings
            }
            TooltipId::TransactionRestarts => graphs::transaction_restarts,
            TooltipId::CircuitBreakerTrippedReplicas => graphs::circuit_breaker_tripped_replicas,
            TooltipId::CircuitBreakerTrippedEvents => graphs::circuit_breaker_tripped_events,
            TooltipId::ReceiverSnapshotsQueued => graphs::receiver_snapshots_queued,
        }
    }

    /// Render the tooltip as an HTML fragment.
    ///
    /// `None` falls back to [`FALLBACK_SELECTION`]; `Some("")` is a selection
    /// like any other and renders as nothing.
    pub fn render(&self, selection: Option<&str>) -> String {
        let selection = escape_html(selection.unwrap_or(FALLBACK_SELECTION));
        (self.renderer())(&selection)
    }
}

impl Display for TooltipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("No tooltip is registered for graph `{0}`.")]
pub struct UnknownTooltip(pub String);

impl FromStr for TooltipId {
    type Err = UnknownTooltip;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATALOG
            .iter()
            .find(|id| id.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownTooltip(s.to_string()))
    }
}

#[derive(Serialize, Debug)]
pub struct TooltipSummary {
    pub id: TooltipId,
    pub parameterized: bool,
}

impl From<TooltipId> for TooltipSummary {
    fn from(id: TooltipId) -> Self {
        Self {
            id,
            parameterized: id.is_parameterized(),
        }
    }
}
