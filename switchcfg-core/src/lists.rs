//! Port and VLAN list grammar shared by VLAN and interface blocks.

use thiserror::Error;

use crate::model::{PortId, VlanId};

/// Highest usable 802.1Q VLAN id.
pub const MAX_VLAN_ID: VlanId = 4094;

/// Highest accepted port number. Stacked chassis stay well below this, and
/// the bound keeps a single range entry from expanding without limit.
pub const MAX_PORT_ID: PortId = 4096;

/// Errors produced while expanding a numeric list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// Entry is not a number, or is outside the allowed id range.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    /// Range entry whose start is greater than its end.
    #[error("invalid range '{0}': start is greater than end")]
    InvalidRange(String),
    /// List contained no entries at all.
    #[error("empty list")]
    Empty,
}

/// Expand a comma-separated port list such as `1-4,7`.
///
/// Ranges are inclusive. Entries keep their written order and duplicates are
/// preserved. Port numbers above [`MAX_PORT_ID`] are rejected.
pub fn parse_port_list(list: &str) -> Result<Vec<PortId>, ListError> {
    expand(list.split(','), MAX_PORT_ID)
}

/// Expand a VLAN list whose entries are separated by commas and/or
/// whitespace, such as `10,20 30-32`.
pub fn parse_vlan_list(list: &str) -> Result<Vec<VlanId>, ListError> {
    let entries = list
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|entry| !entry.is_empty());
    let ids = expand(entries, u32::from(MAX_VLAN_ID))?;
    // `expand` already enforced the upper bound.
    Ok(ids.into_iter().map(|id| id as VlanId).collect())
}

/// Parse a single port number.
pub fn parse_port(token: &str) -> Result<PortId, ListError> {
    parse_id(token, MAX_PORT_ID)
}

/// Parse a single VLAN id.
pub fn parse_vlan(token: &str) -> Result<VlanId, ListError> {
    parse_id(token, u32::from(MAX_VLAN_ID)).map(|id| id as VlanId)
}

fn expand<'a>(entries: impl Iterator<Item = &'a str>, max: u32) -> Result<Vec<u32>, ListError> {
    let mut ids = Vec::new();
    let mut seen_entry = false;

    for entry in entries {
        seen_entry = true;
        let entry = entry.trim();
        match entry.split_once('-') {
            Some((start, end)) => {
                let start = parse_id(start, max)?;
                let end = parse_id(end, max)?;
                if start > end {
                    return Err(ListError::InvalidRange(entry.to_string()));
                }
                ids.extend(start..=end);
            }
            None => ids.push(parse_id(entry, max)?),
        }
    }

    if !seen_entry {
        return Err(ListError::Empty);
    }
    Ok(ids)
}

fn parse_id(token: &str, max: u32) -> Result<u32, ListError> {
    let token = token.trim();
    match token.parse::<u32>() {
        Ok(id) if (1..=max).contains(&id) => Ok(id),
        _ => Err(ListError::InvalidNumber(token.to_string())),
    }
}
