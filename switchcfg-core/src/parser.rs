use std::net::Ipv4Addr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::lists::{parse_port, parse_port_list, parse_vlan, parse_vlan_list, ListError};
use crate::model::{LagMode, LinkAggregationGroup, NetworkModel, PortId, SviAddress, VlanId};

/// Mode token that selects LACP for a `trunk` line.
pub const LACP_TOKEN: &str = "lacp";

static IP_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^ip\s+address\s+(\d{1,3}(?:\.\d{1,3}){3})(?:\s+(\d{1,3}(?:\.\d{1,3}){3})|/(\d{1,2}))(?:\s|$)",
    )
    .expect("ip address pattern is valid")
});

/// Errors that stop parsing of a source configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A port, port range or VLAN id could not be used.
    #[error("line {line} (`{text}`): {source}")]
    Number {
        line: usize,
        text: String,
        source: ListError,
    },
    /// A directive that needs an argument had none.
    #[error("line {line} (`{text}`): missing argument")]
    MissingArgument { line: usize, text: String },
}

impl ParseError {
    /// 1-based line number of the failing directive.
    pub fn line(&self) -> usize {
        match self {
            Self::Number { line, .. } | Self::MissingArgument { line, .. } => *line,
        }
    }
}

/// Block the parser is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Context {
    /// Global configuration level.
    #[default]
    Top,
    /// Inside `vlan <id>`.
    Vlan(VlanId),
    /// Inside `interface <port>`.
    Interface(PortId),
}

/// Line-at-a-time parser for HP/Aruba switch configuration text.
///
/// Feed lines with [`Parser::feed_line`] and collect the model with
/// [`Parser::finish`]. After an error the model built so far is still
/// available from `finish`.
#[derive(Debug, Default)]
pub struct Parser {
    context: Context,
    line: usize,
    model: NetworkModel,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current block context.
    pub fn context(&self) -> Context {
        self.context
    }

    /// Consume one raw source line.
    pub fn feed_line(&mut self, raw: &str) -> Result<(), ParseError> {
        self.line += 1;
        let text = raw.trim();
        let Some(keyword) = text.split_whitespace().next() else {
            return Ok(());
        };
        let rest = text[keyword.len()..].trim_start();

        match keyword {
            "exit" => self.context = Context::Top,
            "vlan" => {
                let token = first_token(rest).ok_or_else(|| self.missing(text))?;
                let vlan = parse_vlan(token).map_err(|source| self.number(text, source))?;
                self.context = Context::Vlan(vlan);
            }
            "interface" => self.open_interface(rest, text)?,
            "hostname" => {
                self.context = Context::Top;
                let name = unquote(rest);
                if name.is_empty() {
                    debug!(line = self.line, "ignoring hostname without a name");
                } else {
                    self.model.hostname = Some(name.to_string());
                }
            }
            "trunk" => {
                self.context = Context::Top;
                self.declare_trunk(rest, text)?;
            }
            "spanning-tree" if rest.is_empty() => {
                self.context = Context::Top;
                self.model.spanning_tree = true;
            }
            _ => match self.context {
                Context::Top => trace!(line = self.line, keyword, "ignoring top-level line"),
                Context::Vlan(vlan) => self.vlan_directive(vlan, keyword, rest, text)?,
                Context::Interface(port) => self.interface_directive(port, keyword, rest, text)?,
            },
        }
        Ok(())
    }

    /// Finish parsing and return the completed model.
    pub fn finish(mut self) -> NetworkModel {
        self.model.fold_interface_vlans();
        self.model
    }

    fn open_interface(&mut self, token: &str, text: &str) -> Result<(), ParseError> {
        if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
            let port = parse_port(token).map_err(|source| self.number(text, source))?;
            self.context = Context::Interface(port);
        } else {
            trace!(line = self.line, interface = token, "untracked interface block");
            self.context = Context::Top;
        }
        Ok(())
    }

    fn declare_trunk(&mut self, rest: &str, text: &str) -> Result<(), ParseError> {
        let tokens: Vec<&str> = rest.split_whitespace().collect();
        let (ports, name) = match tokens.as_slice() {
            [ports, name, ..] => (*ports, *name),
            _ => {
                warn!(line = self.line, text, "skipping trunk line without ports and group name");
                return Ok(());
            }
        };
        let members = parse_port_list(ports).map_err(|source| self.number(text, source))?;
        let mode = match tokens.get(2) {
            Some(token) if *token == LACP_TOKEN => LagMode::Lacp,
            _ => LagMode::Static,
        };
        self.model.declare_lag(LinkAggregationGroup {
            name: name.to_string(),
            members,
            mode,
        });
        Ok(())
    }

    fn vlan_directive(
        &mut self,
        vlan: VlanId,
        keyword: &str,
        rest: &str,
        text: &str,
    ) -> Result<(), ParseError> {
        match keyword {
            "ip" => match parse_ip_address(text) {
                Some(svi) => {
                    self.model.svis.insert(vlan, svi);
                }
                None => debug!(line = self.line, vlan, text, "skipping unsupported ip line"),
            },
            "untagged" => {
                let ports = self.port_list(rest, text)?;
                self.model.vlan_mut(vlan).untagged.extend(ports);
            }
            "tagged" => {
                let ports = self.port_list(rest, text)?;
                self.model.vlan_mut(vlan).tagged.extend(ports);
            }
            _ => trace!(line = self.line, vlan, keyword, "ignoring vlan line"),
        }
        Ok(())
    }

    fn interface_directive(
        &mut self,
        port: PortId,
        keyword: &str,
        rest: &str,
        text: &str,
    ) -> Result<(), ParseError> {
        match (keyword, vlan_argument(rest)) {
            ("name", _) => {
                let label = unquote(rest);
                if !label.is_empty() {
                    self.model
                        .interface_descriptions
                        .insert(port, label.to_string());
                }
            }
            ("tagged", Some(list)) => {
                let vlans = self.vlan_list(list, text)?;
                self.model
                    .interface_tagged_vlans
                    .entry(port)
                    .or_default()
                    .extend(vlans);
            }
            ("untagged", Some(list)) => {
                let vlans = self.vlan_list(list, text)?;
                if let Some(vlan) = vlans.last() {
                    self.model.interface_untagged_vlans.insert(port, *vlan);
                }
            }
            _ => trace!(line = self.line, port, keyword, "ignoring interface line"),
        }
        Ok(())
    }

    fn port_list(&self, list: &str, text: &str) -> Result<Vec<PortId>, ParseError> {
        if list.is_empty() {
            return Err(self.missing(text));
        }
        parse_port_list(list).map_err(|source| self.number(text, source))
    }

    fn vlan_list(&self, list: &str, text: &str) -> Result<Vec<VlanId>, ParseError> {
        if list.is_empty() {
            return Err(self.missing(text));
        }
        parse_vlan_list(list).map_err(|source| self.number(text, source))
    }

    fn number(&self, text: &str, source: ListError) -> ParseError {
        ParseError::Number {
            line: self.line,
            text: text.to_string(),
            source,
        }
    }

    fn missing(&self, text: &str) -> ParseError {
        ParseError::MissingArgument {
            line: self.line,
            text: text.to_string(),
        }
    }
}

/// Parse configuration text into a [`NetworkModel`].
pub fn parse(source: &str) -> Result<NetworkModel, ParseError> {
    match parse_partial(source) {
        (model, None) => Ok(model),
        (_, Some(err)) => Err(err),
    }
}

/// Parse configuration text, returning whatever was built before the first
/// error alongside that error.
pub fn parse_partial(source: &str) -> (NetworkModel, Option<ParseError>) {
    let mut parser = Parser::new();
    for line in source.lines() {
        if let Err(err) = parser.feed_line(line) {
            debug!(line = err.line(), "parse stopped: {err}");
            return (parser.finish(), Some(err));
        }
    }
    (parser.finish(), None)
}

/// Match an `ip address` line in either `A M` or `A/len` form.
fn parse_ip_address(text: &str) -> Option<SviAddress> {
    let caps = IP_ADDRESS.captures(text)?;
    let address = caps.get(1)?.as_str().to_string();
    let mask = match (caps.get(2), caps.get(3)) {
        (Some(mask), _) => mask.as_str().to_string(),
        (None, Some(prefix)) => prefix_to_mask(prefix.as_str().parse().ok()?)?,
        (None, None) => return None,
    };
    Some(SviAddress { address, mask })
}

fn prefix_to_mask(prefix: u8) -> Option<String> {
    if prefix > 32 {
        return None;
    }
    let bits = u32::MAX.checked_shl(32 - u32::from(prefix)).unwrap_or(0);
    Some(Ipv4Addr::from(bits).to_string())
}

/// For `tagged vlan <list>` style lines, return the list after `vlan`.
fn vlan_argument(rest: &str) -> Option<&str> {
    let list = rest.strip_prefix("vlan")?;
    if !list.is_empty() && !list.starts_with(char::is_whitespace) {
        return None;
    }
    Some(list.trim())
}

fn first_token(rest: &str) -> Option<&str> {
    rest.split_whitespace().next()
}

fn unquote(value: &str) -> &str {
    value.trim().trim_matches('"').trim()
}
