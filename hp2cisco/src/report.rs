use colored::Colorize;
use switchcfg_core::{
    format_summary, ModelSummary, NetworkModel, PortId, PortPlan, PortRole, RenderOptions,
    VlanId,
};

use crate::profile::RenderProfile;

/// Render the one-line summary printed after a file conversion.
pub fn render_conversion_summary(summary: &ModelSummary) -> String {
    format!("convert_summary {}", format_summary(summary))
}

/// Render the parsed model and port roles for terminal output.
pub fn render_model(
    model: &NetworkModel,
    plan: &PortPlan,
    summary: &ModelSummary,
    opts: &RenderOptions,
) -> String {
    let mut out = Vec::new();

    out.push(format!(
        "hostname={} spanning_tree={}",
        model.hostname.as_deref().unwrap_or("none"),
        if model.spanning_tree { "enabled" } else { "disabled" }
    ));

    out.push(String::new());
    out.push("vlans".bold().to_string());
    if model.vlans.is_empty() {
        out.push("- none".to_string());
    }
    for (vlan, membership) in &model.vlans {
        out.push(format!(
            "- {vlan} untagged={} tagged={}",
            join_or_none(&membership.untagged),
            join_or_none(&membership.tagged)
        ));
    }

    out.push(String::new());
    out.push("svis".bold().to_string());
    if model.svis.is_empty() {
        out.push("- none".to_string());
    }
    for (vlan, svi) in &model.svis {
        out.push(format!("- {}{vlan} {} {}", opts.svi_prefix, svi.address, svi.mask));
    }

    out.push(String::new());
    out.push("aggregates".bold().to_string());
    if model.link_aggregation_groups.is_empty() {
        out.push("- none".to_string());
    }
    for (index, group) in model.link_aggregation_groups.iter().enumerate() {
        out.push(format!(
            "- {}{} source={} mode={} members={}",
            opts.aggregate_prefix,
            index + 1,
            group.name,
            group.mode,
            join_or_none(&group.members)
        ));
    }

    out.push(String::new());
    out.push("ports".bold().to_string());
    if plan.standalone.is_empty() && plan.lag_members.is_empty() {
        out.push("- none".to_string());
    }
    for (port, role) in port_rows(plan) {
        let name = format!("{}{port}", opts.port_prefix);
        let role = match role {
            Row::Role(PortRole::Access { vlan }) => format!("access vlan={vlan}").green(),
            Row::Role(PortRole::Trunk { allowed }) => {
                format!("trunk allowed={}", join_vlans(allowed)).yellow()
            }
            Row::Member(index) => format!("channel-group={}", index + 1).cyan(),
        };
        match model.interface_descriptions.get(&port) {
            Some(description) => out.push(format!("- {name} {role} description=\"{description}\"")),
            None => out.push(format!("- {name} {role}")),
        }
    }

    out.push(String::new());
    out.push(format!("summary {}", format_summary(summary)).cyan().to_string());
    out.join("\n")
}

/// Render the embedded profile listing.
pub fn render_profiles(profiles: &[RenderProfile], default_name: &str) -> String {
    let mut out = Vec::new();
    for profile in profiles {
        let marker = if profile.name == default_name {
            " (default)"
        } else {
            ""
        };
        out.push(format!("- {}{marker}: {}", profile.name.bold(), profile.description));
        out.push(format!(
            "  port_prefix={} svi_prefix={} aggregate_prefix={} spanning_tree_mode={}",
            profile.render.port_prefix,
            profile.render.svi_prefix,
            profile.render.aggregate_prefix,
            profile.render.spanning_tree_mode
        ));
    }
    out.join("\n")
}

enum Row<'a> {
    Role(&'a PortRole),
    Member(usize),
}

fn port_rows(plan: &PortPlan) -> Vec<(PortId, Row<'_>)> {
    let mut rows: Vec<(PortId, Row<'_>)> = plan
        .standalone
        .iter()
        .map(|(port, role)| (*port, Row::Role(role)))
        .chain(
            plan.lag_members
                .iter()
                .map(|(port, index)| (*port, Row::Member(*index))),
        )
        .collect();
    rows.sort_by_key(|(port, _)| *port);
    rows
}

fn join_or_none(ports: &[PortId]) -> String {
    if ports.is_empty() {
        return "none".to_string();
    }
    ports
        .iter()
        .map(PortId::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn join_vlans(vlans: &[VlanId]) -> String {
    vlans
        .iter()
        .map(VlanId::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
