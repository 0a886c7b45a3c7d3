use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::{LagMode, NetworkModel, PortId, VlanId};
use crate::roles::{resolve_roles, PortRole};

/// Naming and global settings for rendered Cisco IOS output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Prefix placed before the numeric port id, e.g. `FastEthernet0/`.
    pub port_prefix: String,
    /// Prefix of VLAN interfaces, e.g. `Vlan`.
    pub svi_prefix: String,
    /// Prefix of logical aggregate interfaces, e.g. `Port-channel`.
    pub aggregate_prefix: String,
    /// Value of the trailing `spanning-tree mode` line.
    pub spanning_tree_mode: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            port_prefix: "FastEthernet0/".to_string(),
            svi_prefix: "Vlan".to_string(),
            aggregate_prefix: "Port-channel".to_string(),
            spanning_tree_mode: "mst".to_string(),
        }
    }
}

/// Render a model with the default IOS naming.
pub fn generate(model: &NetworkModel) -> String {
    generate_with(model, &RenderOptions::default())
}

/// Render a model as Cisco IOS configuration text.
///
/// Sections come out in a fixed order: hostname, VLAN interfaces by VLAN id,
/// standalone ports by port id, trunk groups in declaration order, then
/// spanning-tree. Each section is followed by a blank line.
pub fn generate_with(model: &NetworkModel, opts: &RenderOptions) -> String {
    let mut writer = ConfigWriter::new(opts);

    if let Some(hostname) = &model.hostname {
        writer.section(vec![format!("hostname {hostname}")]);
    }

    for (vlan, svi) in &model.svis {
        writer.section(vec![
            format!("interface {}{vlan}", opts.svi_prefix),
            format!(" ip address {} {}", svi.address, svi.mask),
            " no shutdown".to_string(),
        ]);
    }

    let plan = resolve_roles(model);
    for (port, role) in &plan.standalone {
        let mut lines = writer.port_header(model, *port);
        match role {
            PortRole::Access { vlan } => {
                lines.push(" switchport mode access".to_string());
                lines.push(format!(" switchport access vlan {vlan}"));
            }
            PortRole::Trunk { allowed } => {
                lines.push(" switchport mode trunk".to_string());
                lines.push(format!(" switchport trunk allowed vlan {}", join_vlans(allowed)));
            }
        }
        writer.section(lines);
    }

    for (index, group) in model.link_aggregation_groups.iter().enumerate() {
        let number = index + 1;
        writer.section(vec![
            format!("interface {}{number}", opts.aggregate_prefix),
            " switchport".to_string(),
            " switchport mode trunk".to_string(),
            " switchport trunk allowed vlan all".to_string(),
        ]);

        let channel_mode = match group.mode {
            LagMode::Lacp => "active",
            LagMode::Static => "on",
        };
        let mut emitted = BTreeSet::new();
        for port in &group.members {
            // A port redeclared in a later group belongs to that group only.
            if plan.lag_members.get(port) != Some(&index) || !emitted.insert(*port) {
                continue;
            }
            let mut lines = writer.port_header(model, *port);
            lines.push(" switchport".to_string());
            lines.push(" switchport mode trunk".to_string());
            lines.push(format!(" channel-group {number} mode {channel_mode}"));
            writer.section(lines);
        }
    }

    if model.spanning_tree {
        writer.section(vec![format!("spanning-tree mode {}", opts.spanning_tree_mode)]);
    }

    writer.into_text()
}

struct ConfigWriter<'a> {
    opts: &'a RenderOptions,
    lines: Vec<String>,
}

impl<'a> ConfigWriter<'a> {
    fn new(opts: &'a RenderOptions) -> Self {
        Self {
            opts,
            lines: Vec::new(),
        }
    }

    fn port_header(&self, model: &NetworkModel, port: PortId) -> Vec<String> {
        let mut lines = vec![format!("interface {}{port}", self.opts.port_prefix)];
        if let Some(description) = model.interface_descriptions.get(&port) {
            lines.push(format!(" description {description}"));
        }
        lines
    }

    fn section(&mut self, lines: Vec<String>) {
        self.lines.extend(lines);
        self.lines.push(String::new());
    }

    fn into_text(self) -> String {
        self.lines.join("\n")
    }
}

fn join_vlans(vlans: &[VlanId]) -> String {
    vlans
        .iter()
        .map(VlanId::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
