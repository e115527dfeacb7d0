//! MQTT transport adapter
//!
//! Thin shim between the broker and the engine. Two tasks share one
//! mutex-guarded `Simulator`:
//!
//! - the tick task advances the engine on a fixed interval and fires the
//!   resulting telemetry at the broker, QoS 0
//! - the event-loop task applies inbound command payloads
//!
//! Publishing uses `try_publish`: when the connection is down or the
//! request queue is full the tick's telemetry is dropped and ticking
//! continues. Reconnection is the MQTT library's job; this adapter just
//! keeps polling.

use rumqttc::{AsyncClient, Event, MqttOptions, Packet, QoS};
use silo_simulator_core::{handle_payload, unix_time_millis, CommandOutcome, Simulator};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::MissedTickBehavior;

use crate::config::SensorConfig;

/// Run the sensor daemon until the task is cancelled
///
/// Never returns on its own; the caller races it against a shutdown
/// signal. Transport failures are logged and retried, never fatal.
pub async fn run(config: SensorConfig) {
    let topics = config.topics();
    let data_topic = topics.data();
    let command_topic = topics.command();

    let silo = Arc::new(Mutex::new(Simulator::new(
        // Seed from the wall clock so each run gets a fresh noise trace
        config.simulator_config(unix_time_millis()),
    )));

    let mut options = MqttOptions::new(
        config.device_id.clone(),
        config.broker_host.clone(),
        config.broker_port,
    );
    options.set_credentials(config.username.clone(), config.password.clone());
    options.set_keep_alive(Duration::from_secs(30));

    let (client, mut eventloop) = AsyncClient::new(options, 64);

    // Tick task: integrate and publish at the configured rate
    let publisher = client.clone();
    let tick_silo = Arc::clone(&silo);
    let tick_topic = data_topic.clone();
    let tick_period = Duration::from_millis(config.tick_millis.max(1));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_period);
        // Delay after a missed tick instead of bursting to catch up;
        // tick bodies must never overlap
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;

            let telemetry = tick_silo.lock().await.tick();
            let payload = match telemetry.to_json() {
                Ok(payload) => payload,
                Err(err) => {
                    log::error!("telemetry encoding failed: {err}");
                    continue;
                }
            };

            log::trace!("tick: level {:.1} ({:.1}%)", telemetry.level, telemetry.percentage);

            // Fire-and-forget: a full queue or dead connection drops this
            // tick's telemetry and the loop keeps going
            if let Err(err) = publisher.try_publish(tick_topic.as_str(), QoS::AtMostOnce, false, payload) {
                log::debug!("dropping telemetry for this tick: {err}");
            }
        }
    });

    log::info!(
        "sensor {} connecting to broker at {}:{}",
        config.device_id,
        config.broker_host,
        config.broker_port
    );

    loop {
        match eventloop.poll().await {
            Ok(Event::Incoming(Packet::ConnAck(_))) => {
                log::info!("connected; subscribing to {command_topic}");
                // Re-issued on every reconnect; the broker forgets QoS 0
                // session state
                if let Err(err) = client.subscribe(command_topic.as_str(), QoS::AtMostOnce).await {
                    log::error!("command subscription failed: {err}");
                }
            }
            Ok(Event::Incoming(Packet::Publish(publish))) => {
                if publish.topic != command_topic {
                    continue;
                }
                let mut silo = silo.lock().await;
                match handle_payload(&mut silo, &publish.payload) {
                    Ok(CommandOutcome::Applied(action)) => {
                        log::info!("applied command {}", action.as_str());
                    }
                    // Unknown actions already logged by the interpreter
                    Ok(CommandOutcome::Ignored(_)) => {}
                    Err(err) => log::warn!("discarding malformed command: {err}"),
                }
            }
            Ok(_) => {}
            Err(err) => {
                log::warn!("broker connection error: {err}; retrying");
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
        }
    }
}
