//! End-to-end smoke check
//!
//! Connects to the broker as an observer, subscribes to the device's
//! telemetry, sends START_FILL, and succeeds once a telemetry message
//! arrives with `isFilling: true`. Exit code 0 on success, 1 on timeout
//! or connection failure.
//!
//! Run against a live sensor:
//!
//! ```text
//! BROKER_HOST=localhost cargo run --bin verifier
//! ```

use rumqttc::{AsyncClient, Event, MqttOptions, Packet, QoS};
use silo_sensor::SensorConfig;
use silo_simulator_core::{Command, DeviceTopics, Telemetry};
use std::time::Duration;
use uuid::Uuid;

const VERIFY_TIMEOUT: Duration = Duration::from_secs(15);
const COMMAND_DELAY: Duration = Duration::from_secs(2);

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

    match tokio::time::timeout(VERIFY_TIMEOUT, verify(&config)).await {
        Ok(true) => {
            println!("VERIFICATION SUCCESSFUL");
        }
        Ok(false) => {
            eprintln!("verification failed");
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!("timeout: no responsive telemetry within {VERIFY_TIMEOUT:?}");
            std::process::exit(1);
        }
    }
}

/// Drive the broker conversation; true once the sensor visibly reacts
async fn verify(config: &SensorConfig) -> bool {
    let topics = DeviceTopics::new(config.topic_prefix.clone(), config.device_id.clone());
    let data_topic = topics.data();
    let command_topic = topics.command();

    // Unique client id so parallel verifier runs don't evict each other
    let client_id = format!("verifier-{}", Uuid::new_v4().simple());
    let mut options = MqttOptions::new(client_id, config.broker_host.clone(), config.broker_port);
    options.set_credentials(config.username.clone(), config.password.clone());
    options.set_keep_alive(Duration::from_secs(30));

    let (client, mut eventloop) = AsyncClient::new(options, 16);
    let mut command_sent = false;

    loop {
        match eventloop.poll().await {
            Ok(Event::Incoming(Packet::ConnAck(_))) => {
                log::info!("connected; subscribing to {data_topic}");
                if let Err(err) = client.subscribe(data_topic.as_str(), QoS::AtMostOnce).await {
                    log::error!("subscription failed: {err}");
                    return false;
                }
            }
            Ok(Event::Incoming(Packet::SubAck(_))) if !command_sent => {
                command_sent = true;
                let client = client.clone();
                let command_topic = command_topic.clone();
                // Let a couple of baseline telemetry messages arrive first
                tokio::spawn(async move {
                    tokio::time::sleep(COMMAND_DELAY).await;
                    log::info!("sending START_FILL");
                    let payload = match Command::start_fill().to_json() {
                        Ok(payload) => payload,
                        Err(err) => {
                            log::error!("command encoding failed: {err}");
                            return;
                        }
                    };
                    if let Err(err) = client
                        .publish(command_topic.as_str(), QoS::AtMostOnce, false, payload)
                        .await
                    {
                        log::error!("command publish failed: {err}");
                    }
                });
            }
            Ok(Event::Incoming(Packet::Publish(publish))) => {
                if publish.topic != data_topic {
                    continue;
                }
                match Telemetry::from_slice(&publish.payload) {
                    Ok(telemetry) => {
                        log::info!(
                            "telemetry: level {:.1} ({:.1}%), filling {}",
                            telemetry.level,
                            telemetry.percentage,
                            telemetry.is_filling
                        );
                        if telemetry.is_filling {
                            log::info!("sensor is responding to commands");
                            return true;
                        }
                    }
                    Err(err) => log::warn!("undecodable telemetry: {err}"),
                }
            }
            Ok(_) => {}
            Err(err) => {
                log::error!("connection error: {err}");
                return false;
            }
        }
    }
}
