use tracing::debug;

use crate::generator::{generate_with, RenderOptions};
use crate::model::NetworkModel;
use crate::parser::{parse, ParseError};

/// Result of a successful translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub model: NetworkModel,
    pub text: String,
}

impl Translation {
    /// True when the source held no VLAN memberships and no VLAN addresses.
    ///
    /// Callers should report this as "nothing to convert" rather than as a
    /// parse failure.
    pub fn is_empty(&self) -> bool {
        !self.model.has_vlan_data()
    }
}

/// Translate HP/Aruba configuration text using the default IOS naming.
pub fn translate(source: &str) -> Result<Translation, ParseError> {
    translate_with(source, &RenderOptions::default())
}

/// Translate HP/Aruba configuration text with explicit render options.
pub fn translate_with(source: &str, opts: &RenderOptions) -> Result<Translation, ParseError> {
    let model = parse(source)?;
    let text = generate_with(&model, opts);
    debug!(
        vlans = model.vlans.len(),
        bytes = text.len(),
        "translated configuration"
    );
    Ok(Translation { model, text })
}

/// Translate and flatten the outcome into `(target_text, error_message)`.
///
/// An empty error message means success. On failure the text is empty.
pub fn translate_text(source: &str) -> (String, String) {
    match translate(source) {
        Ok(translation) => (translation.text, String::new()),
        Err(err) => (String::new(), err.to_string()),
    }
}
