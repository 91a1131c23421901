//! Dispatcher - host callbacks in, formatted lines out
//!
//! One entry point per event variant. Entry points never block on I/O and
//! never return errors to the host.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Local};
use tracing::{debug, warn};

use contracts::{
    BlockBroken, BlockPlaced, ChatMessage, Damager, DeathAttribution, EntityDied, EntityState,
    Event, PlayerChangedWorld, PlayerJoined, PlayerKicked, PlayerMoved, PlayerQuit,
    PlayerRespawned, PortalCreated, Scheduler,
};
use forwarder::{Emission, Forwarder};

/// Source of the record timestamp
pub type Clock = Arc<dyn Fn() -> DateTime<FixedOffset> + Send + Sync>;

/// Host local time
pub fn local_clock() -> Clock {
    Arc::new(|| Local::now().fixed_offset())
}

/// Damage notification, delivered before the host knows whether it was fatal
pub struct EntityDamage {
    /// The damaged entity, queried later
    pub entity: Arc<dyn EntityState>,
    /// Set when another entity dealt the damage
    pub damager: Option<Damager>,
    /// Symbolic damage cause (e.g. `FALL`), used when there is no damager
    pub cause: String,
}

/// Adapts host notifications into forwarded lines
#[derive(Clone)]
pub struct Dispatcher {
    forwarder: Arc<Forwarder>,
    scheduler: Arc<dyn Scheduler>,
    clock: Clock,
}

impl Dispatcher {
    pub fn new(forwarder: Arc<Forwarder>, scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            forwarder,
            scheduler,
            clock: local_clock(),
        }
    }

    /// Replace the timestamp source
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn on_block_broken(&self, event: BlockBroken) {
        self.publish(Event::BlockBroken(event));
    }

    pub fn on_block_placed(&self, event: BlockPlaced) {
        self.publish(Event::BlockPlaced(event));
    }

    /// Only moves that cross a block boundary are logged
    pub fn on_player_moved(&self, event: PlayerMoved) {
        if !event.crosses_block_boundary() {
            return;
        }
        self.publish(Event::PlayerMoved(event));
    }

    pub fn on_player_changed_world(&self, event: PlayerChangedWorld) {
        self.publish(Event::PlayerChangedWorld(event));
    }

    pub fn on_player_joined(&self, event: PlayerJoined) {
        self.publish(Event::PlayerJoined(event));
    }

    pub fn on_player_quit(&self, event: PlayerQuit) {
        self.publish(Event::PlayerQuit(event));
    }

    pub fn on_player_kicked(&self, event: PlayerKicked) {
        self.publish(Event::PlayerKicked(event));
    }

    /// Schedule the death check for after the current host cycle
    ///
    /// The host settles the outcome of the damage only once this callback has
    /// returned, so the check runs as a single deferred task.
    pub fn on_entity_damaged(&self, damage: EntityDamage) {
        let dispatcher = self.clone();
        self.scheduler
            .schedule(Box::new(move || dispatcher.log_if_dead(damage)));
    }

    pub fn on_player_respawned(&self, event: PlayerRespawned) {
        self.publish(Event::PlayerRespawned(event));
    }

    /// Safe to call from the host's asynchronous chat thread
    pub fn on_chat_message(&self, event: ChatMessage) {
        self.publish(Event::ChatMessage(event));
    }

    pub fn on_portal_created(&self, event: PortalCreated) {
        self.publish(Event::PortalCreated(event));
    }

    /// Format `event` with the current time and forward it
    ///
    /// Returns `None` when the event could not be formatted; the event is
    /// logged and dropped.
    pub fn publish(&self, event: Event) -> Option<Emission> {
        let now = (self.clock)();
        match formatter::format_line(&event, &now) {
            Ok(line) => Some(self.forwarder.emit(line)),
            Err(e) => {
                observability::record_line_dropped("malformed_event");
                warn!(event = event.kind(), error = %e, "Dropping event");
                None
            }
        }
    }

    fn log_if_dead(&self, damage: EntityDamage) {
        if !damage.entity.is_dead() {
            return;
        }
        let Some(victim) = damage.entity.actor() else {
            debug!("Non-living entity died, not logged");
            return;
        };

        let attribution = match damage.damager {
            Some(damager) => DeathAttribution::Entity(damager),
            None => DeathAttribution::Cause(damage.cause),
        };

        self.publish(Event::EntityDied(EntityDied {
            victim,
            attribution,
            location: damage.entity.location(),
        }));
    }
}
