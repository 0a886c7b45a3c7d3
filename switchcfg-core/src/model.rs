use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Physical switch port number (always >= 1).
pub type PortId = u32;

/// 802.1Q VLAN identifier (1..=4094).
pub type VlanId = u16;

/// VLAN used for ports that carry no explicit membership.
pub const DEFAULT_VLAN: VlanId = 1;

/// Port membership of a single VLAN, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VlanMembership {
    pub untagged: Vec<PortId>,
    pub tagged: Vec<PortId>,
}

/// IPv4 address bound to a VLAN interface.
///
/// Both parts are kept as they appeared in the source so the rendered
/// address line matches the input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SviAddress {
    pub address: String,
    pub mask: String,
}

/// Negotiation mode of a link-aggregation group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LagMode {
    /// Unconditional bundling.
    Static,
    /// Active LACP negotiation.
    Lacp,
}

impl Display for LagMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static => write!(f, "static"),
            Self::Lacp => write!(f, "lacp"),
        }
    }
}

/// A trunk group declared with a top-level `trunk` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkAggregationGroup {
    /// Source dialect group name, e.g. `Trk1`.
    pub name: String,
    pub members: Vec<PortId>,
    pub mode: LagMode,
}

/// Structured view of a switch configuration.
///
/// Built once per translation by the parser and then only read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NetworkModel {
    pub hostname: Option<String>,
    pub spanning_tree: bool,
    pub vlans: BTreeMap<VlanId, VlanMembership>,
    pub svis: BTreeMap<VlanId, SviAddress>,
    /// Groups in declaration order; position decides the aggregate number.
    pub link_aggregation_groups: Vec<LinkAggregationGroup>,
    pub interface_descriptions: BTreeMap<PortId, String>,
    /// VLANs tagged from the interface side (`tagged vlan ...`).
    pub interface_tagged_vlans: BTreeMap<PortId, BTreeSet<VlanId>>,
    /// VLAN set from the interface side (`untagged vlan ...`).
    pub interface_untagged_vlans: BTreeMap<PortId, VlanId>,
}

impl NetworkModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the membership entry for `vlan`, creating it if needed.
    pub fn vlan_mut(&mut self, vlan: VlanId) -> &mut VlanMembership {
        self.vlans.entry(vlan).or_default()
    }

    /// Record a trunk group.
    ///
    /// Redeclaring an existing name replaces its members and mode but keeps
    /// the group at its original position.
    pub fn declare_lag(&mut self, group: LinkAggregationGroup) {
        match self
            .link_aggregation_groups
            .iter_mut()
            .find(|existing| existing.name == group.name)
        {
            Some(existing) => *existing = group,
            None => self.link_aggregation_groups.push(group),
        }
    }

    /// Merge interface-side VLAN declarations into the per-VLAN lists.
    ///
    /// A port already listed for a VLAN is not appended again, so running
    /// this more than once leaves the model unchanged.
    pub fn fold_interface_vlans(&mut self) {
        let tagged: Vec<(PortId, VlanId)> = self
            .interface_tagged_vlans
            .iter()
            .flat_map(|(port, vlans)| vlans.iter().map(move |vlan| (*port, *vlan)))
            .collect();
        for (port, vlan) in tagged {
            let membership = self.vlan_mut(vlan);
            if !membership.tagged.contains(&port) {
                membership.tagged.push(port);
            }
        }

        let untagged: Vec<(PortId, VlanId)> = self
            .interface_untagged_vlans
            .iter()
            .map(|(port, vlan)| (*port, *vlan))
            .collect();
        for (port, vlan) in untagged {
            let membership = self.vlan_mut(vlan);
            if !membership.untagged.contains(&port) {
                membership.untagged.push(port);
            }
        }
    }

    /// True when the configuration carries any VLAN membership or SVI.
    pub fn has_vlan_data(&self) -> bool {
        !self.vlans.is_empty() || !self.svis.is_empty()
    }

    /// Every port named in a VLAN membership list or given a description.
    pub fn referenced_ports(&self) -> BTreeSet<PortId> {
        let mut ports: BTreeSet<PortId> = self
            .vlans
            .values()
            .flat_map(|m| m.untagged.iter().chain(m.tagged.iter()).copied())
            .collect();
        ports.extend(self.interface_descriptions.keys().copied());
        ports
    }
}
