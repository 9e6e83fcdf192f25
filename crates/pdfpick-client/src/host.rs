//! The embedding host the picker renders into.

/// Plugin parameter holding the HubSpot access token.
pub const TOKEN_PARAMETER: &str = "hubspotAccessToken";

/// Accessors the host exposes to a field editor.
pub trait HostContext {
    /// Current value of the edited field, if any.
    fn field_value(&self) -> Option<String>;

    /// Replace the value of the edited field.
    fn set_field_value(&mut self, value: &str);

    /// Read a plugin-level configuration parameter.
    fn plugin_parameter(&self, name: &str) -> Option<String>;

    /// Show a short notification to the editor.
    fn notice(&mut self, message: &str);
}
