//! HP/Aruba to Cisco IOS switch configuration translation.
//!
//! The crate is a two-stage pipeline with no shared state:
//!
//! - [`parser`] reads source text line by line and builds a [`NetworkModel`]
//! - [`generator`] renders that model as Cisco IOS configuration text
//!
//! [`roles`] holds the port-role resolution the generator relies on, and
//! [`format`] turns a model into summaries or JSON for inspection.
//!
//! # Examples
//!
//! ```
//! use switchcfg_core::translate;
//!
//! let source = "vlan 10\n   untagged 1-2\n   exit\n";
//! let translation = translate(source).expect("valid configuration");
//! assert!(translation.text.contains("interface FastEthernet0/1"));
//! ```

pub mod format;
pub mod generator;
pub mod lists;
pub mod model;
pub mod parser;
pub mod roles;
pub mod translate;

pub use format::{format_json, format_summary, summarize, ModelSummary};
pub use generator::{generate, generate_with, RenderOptions};
pub use lists::{parse_port_list, parse_vlan_list, ListError, MAX_PORT_ID, MAX_VLAN_ID};
pub use model::{
    LagMode, LinkAggregationGroup, NetworkModel, PortId, SviAddress, VlanId, VlanMembership,
};
pub use parser::{parse, parse_partial, Context, ParseError, Parser};
pub use roles::{resolve_roles, PortPlan, PortRole};
pub use translate::{translate, translate_text, translate_with, Translation};
