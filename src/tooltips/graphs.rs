//! Markup for each graph tooltip. Parameterized templates receive the
//! selection already escaped.
use crate::tooltips::docs;

fn anchor(href: &str, text: &str) -> String {
    format!(
        r#"<a href="{}" class="anchor-light" target="_blank" rel="noopener noreferrer">{}</a>"#,
        href, text
    )
}

fn definition(paragraphs: &[String]) -> String {
    format!("<div><dl><dd>{}</dd></dl></div>", paragraphs.concat())
}

pub(super) fn capacity(selection: &str) -> String {
    definition(&[
        format!("<p>Usage of disk space {}</p>", selection),
        format!(
            "<p><strong>Capacity: </strong>Maximum store size {}. This value may be explicitly \
             set per node using&nbsp;{}. If a store size has not been set, this metric displays \
             the actual disk capacity.</p>",
            selection,
            anchor(docs::CLUSTER_STORE, "--store")
        ),
        format!(
            "<p><strong>Available: </strong>Free disk space available to CockroachDB data {}.</p>",
            selection
        ),
        format!(
            "<p><strong>Used: </strong>Disk space in use by CockroachDB data {}. This excludes \
             the Cockroach binary, operating system, and other system files.</p>",
            selection
        ),
        format!(
            "<p>{}</p>",
            anchor(
                docs::HOW_ARE_CAPACITY_METRICS_CALCULATED,
                "How are these metrics calculated?"
            )
        ),
    ])
}

pub(super) fn available_disc_capacity(_: &str) -> String {
    definition(&[
        String::from("<p>Free disk space available to CockroachDB data on each node.</p>"),
        format!(
            "<p>{}</p>",
            anchor(
                docs::HOW_ARE_CAPACITY_METRICS_CALCULATED,
                "How is this metric calculated?"
            )
        ),
    ])
}

pub(super) fn logical_bytes(_: &str) -> String {
    definition(&[
        format!(
            "<p>Number of logical bytes stored in {} on each node.</p>",
            anchor(docs::KEY_VALUE_PAIRS, "key-value pairs")
        ),
        String::from("<p>This includes historical and deleted data.</p>"),
    ])
}

pub(super) fn live_bytes(selection: &str) -> String {
    definition(&[
        format!(
            "<p>Amount of data that can be read by applications and CockroachDB {}.</p>",
            selection
        ),
        format!(
            "<p><strong>Live: </strong>Number of logical bytes stored in live&nbsp;{}{}. Live \
             data excludes historical and deleted data.</p>",
            anchor(docs::KEY_VALUE_PAIRS, "key-value pairs&nbsp;"),
            selection
        ),
        format!(
            "<p><strong>System: </strong>Number of physical bytes stored in&nbsp;{}{}.</p>",
            anchor(docs::KEY_VALUE_PAIRS, "system key-value pairs&nbsp;"),
            selection
        ),
    ])
}

pub(super) fn statement_denials_cluster_settings(selection: &str) -> String {
    format!(
        "<div>The total number of statements denied per second {} due to a{}in the format \
         feature.statement_type.enabled = FALSE.</div>",
        selection,
        anchor(docs::CLUSTER_SETTINGS, " cluster setting ")
    )
}

pub(super) fn transaction_restarts(selection: &str) -> String {
    format!(
        "<div>The number of transactions restarted broken down by errors {}. Refer to the \
         transaction retry error reference {} for more details.</div>",
        selection,
        anchor(docs::TRANSACTION_RETRY_ERROR_REFERENCE, "documentation")
    )
}

pub(super) fn circuit_breaker_tripped_replicas(_: &str) -> String {
    String::from(
        "<div>Number of Replicas for which the per-Replica circuit breaker is currently \
         tripped.</div>",
    )
}

pub(super) fn circuit_breaker_tripped_events(_: &str) -> String {
    String::from(
        "<div>The number of circuit breaker events occurred per aggregated interval of time \
         across all nodes since the process started.</div>",
    )
}

pub(super) fn receiver_snapshots_queued(_: &str) -> String {
    String::from(
        "<div>The number of snapshots queued to be applied on a receiver which can only accept \
         1 at a time per store.</div>",
    )
}
