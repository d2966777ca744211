//! World-level hit resolution
//!
//! Every target search walks fighters in `PlayerId` order, so player one wins
//! any same-tick tie.

use super::collision::within;
use super::state::{PlayerId, World, fighter_and_opponent};
use crate::consts::*;

/// Land live punches. Each activation connects with at most one bird.
pub fn resolve_punches(world: &mut World) {
    for id in PlayerId::ALL {
        let (attacker, target) = fighter_and_opponent(&mut world.fighters, id);
        if attacker.is_dead || !attacker.punch_live() || target.is_dead {
            continue;
        }
        if within(attacker.punch_point(), target.pos, PUNCH_RADIUS) {
            target.take_damage(PUNCH_DAMAGE);
            target.knock_back(attacker.facing);
            attacker.punch_landed = true;
            log::debug!("{id:?} punched {:?}, health {}", target.id, target.health);
        }
    }
}

/// Move drumsticks, hit the thrower's opponent on check ticks, drop spent ones
///
/// Sticks from a knocked-out thrower keep flying but no longer hurt.
pub fn update_drumsticks(world: &mut World) {
    let check = world.frame % PROJECTILE_CHECK_INTERVAL == 0;
    for stick in world.drumsticks.iter_mut() {
        stick.update();
        if !check || !stick.active || world.fighters[stick.owner.index()].is_dead {
            continue;
        }
        let target = &mut world.fighters[stick.owner.other().index()];
        if !target.is_dead && within(stick.pos, target.pos, DRUMSTICK_HIT_RADIUS) {
            target.take_damage(DRUMSTICK_DAMAGE);
            stick.active = false;
            log::debug!("drumstick hit {:?}, health {}", target.id, target.health);
        }
    }
    world.drumsticks.retain(|d| d.active);
}

/// Move arrows, hit either bird on check ticks, cull misses
pub fn update_arrows(world: &mut World) {
    let check = world.frame % PROJECTILE_CHECK_INTERVAL == 0;
    let World {
        arrows,
        fighters,
        particles,
        rng,
        ..
    } = world;
    arrows.retain_mut(|arrow| {
        arrow.update();
        if check {
            if let Some(target) = fighters
                .iter_mut()
                .find(|f| !f.is_dead && within(arrow.pos, f.pos, ARROW_HIT_RADIUS))
            {
                target.take_damage(ARROW_DAMAGE);
                particles.feather_burst(target.pos, rng);
                log::debug!("arrow hit {:?}, health {}", target.id, target.health);
                return false;
            }
        }
        !arrow.expired()
    });
}

/// Tick respawns, then hand each active pickup to the first bird in reach
pub fn collect_pickups(world: &mut World) {
    for pickup in world.pickups.iter_mut() {
        pickup.update();
        if let Some(fighter) = world.fighters.iter_mut().find(|f| !f.is_dead && pickup.in_reach(f))
        {
            if pickup.collect(fighter) {
                log::debug!("{:?} collected {}", fighter.id, pickup.kind.as_str());
            }
        }
    }
}
