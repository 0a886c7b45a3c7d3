use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::model::{NetworkModel, PortId, VlanId, DEFAULT_VLAN};

/// Switchport role of a port that is not part of a trunk group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum PortRole {
    /// Untagged member of exactly one VLAN.
    Access { vlan: VlanId },
    /// Tagged member of the listed VLANs, ascending.
    Trunk { allowed: Vec<VlanId> },
}

/// Resolved roles for every referenced port.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PortPlan {
    /// Ports rendered as their own interface section.
    pub standalone: BTreeMap<PortId, PortRole>,
    /// Ports bound to a trunk group, mapped to the group's index in
    /// declaration order.
    pub lag_members: BTreeMap<PortId, usize>,
}

/// Decide the role of every port the model references.
///
/// Trunk group membership beats any VLAN membership. Outside groups an
/// untagged membership gives an access port (the highest VLAN id wins when a
/// port is untagged in several), otherwise tagged memberships give a trunk.
/// Ports that are only described fall back to access on the default VLAN.
pub fn resolve_roles(model: &NetworkModel) -> PortPlan {
    let mut lag_members = BTreeMap::new();
    for (index, group) in model.link_aggregation_groups.iter().enumerate() {
        for port in &group.members {
            lag_members.insert(*port, index);
        }
    }

    let mut access: BTreeMap<PortId, VlanId> = BTreeMap::new();
    let mut tagged: BTreeMap<PortId, BTreeSet<VlanId>> = BTreeMap::new();
    for (vlan, membership) in &model.vlans {
        for port in &membership.untagged {
            access.insert(*port, *vlan);
        }
        for port in &membership.tagged {
            tagged.entry(*port).or_default().insert(*vlan);
        }
    }

    let standalone = model
        .referenced_ports()
        .into_iter()
        .filter(|port| !lag_members.contains_key(port))
        .map(|port| {
            let role = match (access.get(&port), tagged.get(&port)) {
                (Some(vlan), _) => PortRole::Access { vlan: *vlan },
                (None, Some(vlans)) => PortRole::Trunk {
                    allowed: vlans.iter().copied().collect(),
                },
                (None, None) => PortRole::Access { vlan: DEFAULT_VLAN },
            };
            (port, role)
        })
        .collect();

    PortPlan {
        standalone,
        lag_members,
    }
}
