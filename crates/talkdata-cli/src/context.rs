use anyhow::Result;
use once_cell::sync::OnceCell;
use talkdata_sdk::Client;

use crate::config::Settings;
use crate::types::OutputFormat;

pub struct ExecutionContext {
    settings: Settings,
    client: OnceCell<Client>,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn new(settings: Settings, format: OutputFormat) -> Self {
        Self {
            settings,
            client: OnceCell::new(),
            format,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn client(&self) -> Result<&Client> {
        self.client
            .get_or_try_init(|| Client::new(self.settings.client_config()).map_err(Into::into))
    }

    pub fn json_mode(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
