use pdfpick_client::host::{HostContext, TOKEN_PARAMETER};

use crate::config::CliConfig;

/// Host backed by the CLI config file; notices go to stdout.
#[derive(Debug)]
pub struct CliHost {
    /// Config the field value is read from and written to.
    pub config: CliConfig,
    /// Notices shown so far.
    pub notices: Vec<String>,
}

impl CliHost {
    /// Wrap a loaded config.
    #[must_use]
    pub fn new(config: CliConfig) -> Self {
        Self {
            config,
            notices: Vec::new(),
        }
    }
}

impl HostContext for CliHost {
    fn field_value(&self) -> Option<String> {
        Some(self.config.field_value.clone()).filter(|v| !v.is_empty())
    }

    fn set_field_value(&mut self, value: &str) {
        value.clone_into(&mut self.config.field_value);
    }

    fn plugin_parameter(&self, name: &str) -> Option<String> {
        match name {
            TOKEN_PARAMETER => self.config.access_token.clone(),
            _ => None,
        }
    }

    fn notice(&mut self, message: &str) {
        println!("{message}");
        self.notices.push(message.to_owned());
    }
}
