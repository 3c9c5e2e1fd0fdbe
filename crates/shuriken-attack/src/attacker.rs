//! The attacker: one unit of simulated work.

use crate::config::{AttackerConfig, AttackerConfigBuilder};
use crate::events::AttackEvent;
use futures::future::BoxFuture;
use shuriken_core::Target;
use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::{Duration, Instant};
use tower_service::Service;

#[cfg(feature = "metrics")]
use metrics::counter;

/// Throws ninja stars at a target: announces the attack, then spends a fixed
/// latency doing so.
///
/// `Attacker` is a [`Service`] over [`Target`], so every runner that accepts a
/// work service accepts it, and tests can substitute an instrumented
/// `tower::service_fn` in its place.
#[derive(Clone)]
pub struct Attacker {
    config: Arc<AttackerConfig>,
}

impl Attacker {
    pub(crate) fn new(config: AttackerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Creates a new configuration builder.
    pub fn builder() -> AttackerConfigBuilder {
        AttackerConfigBuilder::new()
    }

    /// Returns the configured attack latency.
    pub fn latency(&self) -> Duration {
        self.config.latency
    }

    /// Attacks a single target, completing after the configured latency.
    pub async fn attack(&self, target: Target) {
        attack(Arc::clone(&self.config), target).await;
    }
}

impl Default for Attacker {
    fn default() -> Self {
        Self::builder().build()
    }
}

async fn attack(config: Arc<AttackerConfig>, target: Target) {
    let start = Instant::now();

    #[cfg(feature = "tracing")]
    tracing::debug!(attacker = %config.name, %target, "Throwing ninja stars");

    config.event_listeners.emit(&AttackEvent::Started {
        runner_name: config.name.clone(),
        timestamp: start,
        target: target.clone(),
    });

    #[cfg(feature = "metrics")]
    counter!("shuriken_attacks_total", "runner" => config.name.clone()).increment(1);

    tokio::time::sleep(config.latency).await;

    config.event_listeners.emit(&AttackEvent::Finished {
        runner_name: config.name.clone(),
        timestamp: Instant::now(),
        target,
        duration: start.elapsed(),
    });
}

impl Service<Target> for Attacker {
    type Response = ();
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<(), Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, target: Target) -> Self::Future {
        let config = Arc::clone(&self.config);
        Box::pin(async move {
            attack(config, target).await;
            Ok(())
        })
    }
}
