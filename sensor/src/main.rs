//! Sensor daemon entry point
//!
//! Reads configuration from the environment, then runs the MQTT adapter
//! until ctrl-c. Each tick is self-contained, so shutdown is just
//! dropping the tick timer — nothing to drain.

use silo_sensor::{adapter, SensorConfig};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match SensorConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("configuration error: {err}");
            std::process::exit(1);
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            log::info!("shutting down");
        }
        _ = adapter::run(config) => {}
    }
}
