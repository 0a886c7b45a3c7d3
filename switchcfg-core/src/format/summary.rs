use serde::Serialize;

use crate::model::NetworkModel;
use crate::roles::{PortPlan, PortRole};

/// Counts describing what a translation will produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ModelSummary {
    pub vlans: usize,
    pub svis: usize,
    pub access_ports: usize,
    pub trunk_ports: usize,
    pub aggregates: usize,
    pub aggregate_members: usize,
    pub descriptions: usize,
}

/// Count the model contents and the resolved port roles.
pub fn summarize(model: &NetworkModel, plan: &PortPlan) -> ModelSummary {
    let access_ports = plan
        .standalone
        .values()
        .filter(|role| matches!(role, PortRole::Access { .. }))
        .count();

    ModelSummary {
        vlans: model.vlans.len(),
        svis: model.svis.len(),
        access_ports,
        trunk_ports: plan.standalone.len() - access_ports,
        aggregates: model.link_aggregation_groups.len(),
        aggregate_members: model
            .link_aggregation_groups
            .iter()
            .map(|g| g.members.len())
            .sum(),
        descriptions: model.interface_descriptions.len(),
    }
}

/// Format a summary as a single `key=value` line.
pub fn format_summary(summary: &ModelSummary) -> String {
    format!(
        "vlans={} svis={} access_ports={} trunk_ports={} aggregates={} aggregate_members={} descriptions={}",
        summary.vlans,
        summary.svis,
        summary.access_ports,
        summary.trunk_ports,
        summary.aggregates,
        summary.aggregate_members,
        summary.descriptions
    )
}
