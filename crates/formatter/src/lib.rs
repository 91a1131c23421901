//! # Formatter
//!
//! Turns an `Event` into a timestamped `key=value` record.
//!
//! Pure: no I/O, no state beyond static lookup tables. The output format is
//! consumed by existing collector-side parsers, so every token here is part
//! of a wire contract.
//!
//! ```text
//! Mon Jan 01 12:00:00 +0000 2024 action=chat player=Alice world=world x=1.5 y=64.0 z=-3.25 game_time=6000 message="hello world"\r\n\r\n
//! ```
//!
//! The zone field is a numeric UTC offset (`-0500`), not an abbreviation
//! such as `EST`. Collector timestamp extraction must accept `%z` in that
//! position.

mod blocks;
mod body;
mod naming;
mod number;

pub use blocks::{block_name, wood_species};
pub use naming::{actor_name, damager_name};
pub use number::java_double;

use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use contracts::{ContractError, Event, LogLine};

use body::Body;

/// Calendar rendering of the record timestamp; `%z` is a numeric offset
pub const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Format one event as a terminated log line
///
/// Deterministic for a fixed `now`.
///
/// # Errors
/// `ContractError::MalformedEvent` when the record lacks data its line needs.
pub fn format_line<Tz>(event: &Event, now: &DateTime<Tz>) -> Result<LogLine, ContractError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let body = render_body(event)?;
    Ok(LogLine::compose(&render_timestamp(now), &body))
}

/// Render the timestamp prefix
pub fn render_timestamp<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// Render the action body (everything after the timestamp)
pub fn render_body(event: &Event) -> Result<String, ContractError> {
    let body = match event {
        Event::BlockBroken(e) => {
            let mut body = Body::action("block_broken");
            body.field("player", &e.player)
                .location(&e.location)
                .field("block_type", block_name(&e.block));
            for drop in &e.drops {
                body.field("dropped", format!("{}x{}", drop.amount, block_name(&drop.item)));
            }
            body
        }
        Event::BlockPlaced(e) => {
            let mut body = Body::action("block_placed");
            body.field("player", &e.player)
                .location(&e.location)
                .field("block_type", block_name(&e.block));
            body
        }
        Event::PlayerMoved(e) => {
            let mut body = Body::action("player_moved");
            body.field("player", &e.player)
                .field("world", &e.from.world)
                .field("from_x", java_double(e.from.x))
                .field("from_y", java_double(e.from.y))
                .field("from_z", java_double(e.from.z))
                .field("to_x", java_double(e.to.x))
                .field("to_y", java_double(e.to.y))
                .field("to_z", java_double(e.to.z))
                .field("game_time", e.to.game_time);
            body
        }
        Event::PlayerChangedWorld(e) => {
            let mut body = Body::action("player_changed_world");
            body.field("player", &e.player)
                .field("from_world", &e.from_world)
                .field("to_world", &e.to.world)
                .field("to_x", java_double(e.to.x))
                .field("to_y", java_double(e.to.y))
                .field("to_z", java_double(e.to.z))
                .field("game_time", e.to.game_time);
            body
        }
        Event::PlayerJoined(e) => {
            let mut body = Body::action("player_connect");
            body.field("player", &e.player).location(&e.location);
            body
        }
        Event::PlayerQuit(e) => {
            let mut body = Body::action("player_disconnect");
            body.field("player", &e.player)
                .quoted("reason", &e.reason)
                .location(&e.location);
            body
        }
        Event::PlayerKicked(e) => {
            let mut body = Body::action("player_kicked");
            body.field("player", &e.player)
                .quoted("reason", &e.reason)
                .location(&e.location);
            body
        }
        Event::EntityDied(e) => {
            let action = if e.victim.is_player() {
                "player_died"
            } else {
                "mob_died"
            };
            let mut body = Body::action(action);
            body.field("victim", actor_name(&e.victim));
            if let Some(killer) = naming::killer_name(&e.attribution) {
                body.field("killer", killer);
            }
            body.location(&e.location);
            body
        }
        Event::PlayerRespawned(e) => {
            let mut body = Body::action("player_respawn");
            body.field("player", &e.player).location(&e.location);
            body
        }
        Event::ChatMessage(e) => {
            let mut body = Body::action("chat");
            body.field("player", &e.player)
                .location(&e.location)
                .quoted("message", &e.message);
            body
        }
        Event::PortalCreated(e) => {
            let first = e.blocks.first().ok_or_else(|| {
                ContractError::malformed_event(event.kind(), "portal has no blocks")
            })?;
            let mut body = Body::action("portal_create");
            body.quoted("reason", &e.reason).location(first);
            body
        }
    };

    Ok(body.finish())
}
