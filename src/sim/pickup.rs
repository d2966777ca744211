//! Map pickups: health, split shot and defense

use glam::Vec2;

use super::collision::within;
use super::fighter::Fighter;
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupKind {
    /// Restores health
    Health,
    /// One more drumstick per throw
    SplitShot,
    /// Shrinks incoming damage
    Defense,
}

impl PickupKind {
    /// Level symbol for this pickup, if `symbol` is one
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'B' => Some(PickupKind::Health),
            'S' => Some(PickupKind::SplitShot),
            'D' => Some(PickupKind::Defense),
            _ => None,
        }
    }

    pub fn apply(&self, fighter: &mut Fighter) {
        match self {
            PickupKind::Health => fighter.heal(HEAL_AMOUNT),
            PickupKind::SplitShot => fighter.throw_count += SPLITSHOT_BONUS,
            PickupKind::Defense => fighter.defense *= DEFENSE_FACTOR,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PickupKind::Health => "health",
            PickupKind::SplitShot => "split shot",
            PickupKind::Defense => "defense",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Pickup {
    pub pos: Vec2,
    pub kind: PickupKind,
    pub active: bool,
    /// Ticks until an inactive pickup returns
    pub respawn_ticks: u32,
}

impl Pickup {
    pub fn new(kind: PickupKind, pos: Vec2) -> Self {
        Self {
            pos,
            kind,
            active: true,
            respawn_ticks: 0,
        }
    }

    /// Count down toward respawn
    pub fn update(&mut self) {
        if !self.active {
            self.respawn_ticks = self.respawn_ticks.saturating_sub(1);
            if self.respawn_ticks == 0 {
                self.active = true;
            }
        }
    }

    pub fn in_reach(&self, fighter: &Fighter) -> bool {
        self.active && within(self.pos, fighter.pos, PICKUP_RADIUS)
    }

    /// Grant the effect and go dormant. Returns false if already taken.
    pub fn collect(&mut self, fighter: &mut Fighter) -> bool {
        if !self.active {
            return false;
        }
        self.kind.apply(fighter);
        self.active = false;
        self.respawn_ticks = PICKUP_RESPAWN_TICKS;
        true
    }
}
