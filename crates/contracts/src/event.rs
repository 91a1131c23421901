//! Event - Dispatcher output
//!
//! One immutable record per host-observable occurrence. Each variant carries
//! only what its log line needs.

use serde::{Deserialize, Serialize};

/// World position with the world's clock at the time of the event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// World name
    pub world: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// In-world clock (ticks)
    pub game_time: i64,
}

impl Location {
    pub fn new(world: impl Into<String>, x: f64, y: f64, z: f64, game_time: i64) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
            game_time,
        }
    }
}

/// Block or item material with its raw data value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockType {
    /// Canonical symbolic material name (e.g. `STONE`, `LOG`, `WOOD_STAIRS`)
    pub material: String,
    /// Raw data value; encodes the wood species for wood-family materials
    #[serde(default)]
    pub data: i32,
}

impl BlockType {
    pub fn new(material: impl Into<String>, data: i32) -> Self {
        Self {
            material: material.into(),
            data,
        }
    }
}

/// One item stack dropped by a broken block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDrop {
    pub amount: u32,
    pub item: BlockType,
}

/// A living actor, as needed for naming
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Actor {
    /// Human-controlled actor, named by display name
    Player { display_name: String },
    /// Any other living actor, named by its kind (e.g. `Zombie`)
    Mob { kind: String },
}

impl Actor {
    pub fn player(display_name: impl Into<String>) -> Self {
        Self::Player {
            display_name: display_name.into(),
        }
    }

    pub fn mob(kind: impl Into<String>) -> Self {
        Self::Mob { kind: kind.into() }
    }

    pub fn is_player(&self) -> bool {
        matches!(self, Self::Player { .. })
    }
}

/// Entity that dealt damage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Damager {
    /// A living actor hit directly
    Living(Actor),
    /// A projectile; attribution goes to whoever shot it
    Projectile { shooter: Option<Box<Damager>> },
    /// Anything else (falling blocks, explosives, ...)
    Other,
}

impl Damager {
    /// Projectile shot by `shooter`
    pub fn shot_by(shooter: Damager) -> Self {
        Self::Projectile {
            shooter: Some(Box::new(shooter)),
        }
    }
}

/// Who or what is blamed for a death
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathAttribution {
    /// Damage dealt by an entity
    Entity(Damager),
    /// Environmental damage cause, symbolic name (e.g. `FALL`, `LAVA`)
    Cause(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockBroken {
    pub player: String,
    pub location: Location,
    pub block: BlockType,
    #[serde(default)]
    pub drops: Vec<ItemDrop>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockPlaced {
    pub player: String,
    pub location: Location,
    pub block: BlockType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerMoved {
    pub player: String,
    pub from: Location,
    pub to: Location,
}

impl PlayerMoved {
    /// True when the move crosses an integer boundary on any axis
    pub fn crosses_block_boundary(&self) -> bool {
        self.from.x.floor() != self.to.x.floor()
            || self.from.y.floor() != self.to.y.floor()
            || self.from.z.floor() != self.to.z.floor()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerChangedWorld {
    pub player: String,
    pub from_world: String,
    pub to: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerJoined {
    pub player: String,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerQuit {
    pub player: String,
    pub reason: String,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerKicked {
    pub player: String,
    pub reason: String,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDied {
    pub victim: Actor,
    pub attribution: DeathAttribution,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRespawned {
    pub player: String,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub player: String,
    pub location: Location,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalCreated {
    pub reason: String,
    /// Locations of every block the portal occupies; the first one is logged
    pub blocks: Vec<Location>,
}

/// Tagged union of every loggable occurrence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    BlockBroken(BlockBroken),
    BlockPlaced(BlockPlaced),
    PlayerMoved(PlayerMoved),
    PlayerChangedWorld(PlayerChangedWorld),
    PlayerJoined(PlayerJoined),
    PlayerQuit(PlayerQuit),
    PlayerKicked(PlayerKicked),
    EntityDied(EntityDied),
    PlayerRespawned(PlayerRespawned),
    ChatMessage(ChatMessage),
    PortalCreated(PortalCreated),
}

impl Event {
    /// Variant name, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::BlockBroken(_) => "block_broken",
            Self::BlockPlaced(_) => "block_placed",
            Self::PlayerMoved(_) => "player_moved",
            Self::PlayerChangedWorld(_) => "player_changed_world",
            Self::PlayerJoined(_) => "player_joined",
            Self::PlayerQuit(_) => "player_quit",
            Self::PlayerKicked(_) => "player_kicked",
            Self::EntityDied(_) => "entity_died",
            Self::PlayerRespawned(_) => "player_respawned",
            Self::ChatMessage(_) => "chat_message",
            Self::PortalCreated(_) => "portal_created",
        }
    }
}
