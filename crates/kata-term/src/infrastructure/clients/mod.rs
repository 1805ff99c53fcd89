use anyhow::bail;
use anyhow::Result;
use kata_runner_client::RunnerClientBox;
use kata_runner_client::RunnerClientFactory;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::RunnerName;

pub struct RunnerClientManager {}

impl RunnerClientManager {
    pub fn get(name: RunnerName) -> Result<RunnerClientBox> {
        if name == RunnerName::Remote {
            return Ok(RunnerClientFactory::create_http_client(Config::get(
                ConfigKey::RunnerURL,
            )));
        }

        bail!(format!("No runner implemented for {name}"))
    }
}
