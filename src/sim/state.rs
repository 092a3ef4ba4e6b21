//! Simulation state and core entity types
//!
//! Everything the renderer reads after a tick lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::vector::step_toward;
use crate::settings::Settings;

/// The player-controlled square
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leader {
    pub pos: Vec2,
    /// Display label, no effect on movement
    pub name: String,
}

impl Leader {
    pub fn new(pos: Vec2, name: impl Into<String>) -> Self {
        Self {
            pos,
            name: name.into(),
        }
    }
}

/// One link of the trailing chain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Follower {
    pub pos: Vec2,
}

/// Fixed-length chain of followers, index 0 chasing the leader
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowerChain {
    followers: Vec<Follower>,
    /// Units moved per tick while pursuing
    pub speed: f32,
    /// Pursuit only happens beyond this distance
    pub leash: f32,
}

impl FollowerChain {
    /// Lay out `count` followers `spacing` apart along x, starting at `origin`
    pub fn new(count: usize, origin: Vec2, spacing: f32, speed: f32, leash: f32) -> Self {
        let followers = (0..count)
            .map(|i| Follower {
                pos: origin + Vec2::new(i as f32 * spacing, 0.0),
            })
            .collect();
        Self {
            followers,
            speed,
            leash,
        }
    }

    /// Build a chain from explicit positions
    pub fn from_positions(positions: &[Vec2], speed: f32, leash: f32) -> Self {
        Self {
            followers: positions.iter().map(|&pos| Follower { pos }).collect(),
            speed,
            leash,
        }
    }

    /// Advance every follower one step toward its target.
    ///
    /// Targets are resolved in index order, so follower `i` chases where
    /// follower `i - 1` ended up this tick, not where it started.
    pub fn advance_all(&mut self, leader_pos: Vec2) {
        let mut target = leader_pos;
        for follower in &mut self.followers {
            follower.pos = step_toward(follower.pos, target, self.speed, self.leash);
            target = follower.pos;
        }
    }

    pub fn len(&self) -> usize {
        self.followers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.followers.is_empty()
    }

    pub fn followers(&self) -> &[Follower] {
        &self.followers
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.followers.iter().map(|f| f.pos)
    }

    /// Target of follower `index` given the current layout
    pub fn target_of(&self, index: usize, leader_pos: Vec2) -> Option<Vec2> {
        match index {
            0 if !self.followers.is_empty() => Some(leader_pos),
            i if i < self.followers.len() => Some(self.followers[i - 1].pos),
            _ => None,
        }
    }

    /// True when every follower is within leash of its target
    pub fn is_settled(&self, leader_pos: Vec2) -> bool {
        (0..self.followers.len()).all(|i| {
            self.target_of(i, leader_pos)
                .is_none_or(|t| self.followers[i].pos.distance(t) <= self.leash)
        })
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    pub leader: Leader,
    /// Leader movement per tick, per axis
    pub leader_speed: f32,
    pub chain: FollowerChain,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl SimState {
    /// Create a new simulation from settings
    pub fn new(settings: &Settings) -> Self {
        let settings = settings.sanitized();
        let leader = Leader::new(settings.leader_start(), settings.leader_name.clone());
        let chain = FollowerChain::new(
            settings.follower_count,
            settings.follower_origin(),
            settings.follower_spacing,
            settings.follower_speed,
            settings.leash_length,
        );
        log::debug!(
            "New simulation: leader '{}' at {}, {} followers",
            leader.name,
            leader.pos,
            chain.len()
        );
        Self {
            leader,
            leader_speed: settings.leader_speed,
            chain,
            time_ticks: 0,
        }
    }

    /// Create a simulation from explicit parts
    pub fn with_parts(leader: Leader, leader_speed: f32, chain: FollowerChain) -> Self {
        Self {
            leader,
            leader_speed,
            chain,
            time_ticks: 0,
        }
    }

    pub fn leader_pos(&self) -> Vec2 {
        self.leader.pos
    }

    pub fn follower_positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.chain.positions()
    }

    /// True when no follower would move on a tick without input
    pub fn is_settled(&self) -> bool {
        self.chain.is_settled(self.leader.pos)
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_layout() {
        let state = SimState::default();
        assert_eq!(state.leader.pos, Vec2::new(100.0, 100.0));
        assert_eq!(state.leader.name, "Leader1");
        let positions: Vec<Vec2> = state.follower_positions().collect();
        assert_eq!(
            positions,
            vec![
                Vec2::new(100.0, 100.0),
                Vec2::new(130.0, 100.0),
                Vec2::new(160.0, 100.0),
                Vec2::new(190.0, 100.0),
                Vec2::new(220.0, 100.0),
            ]
        );
    }

    #[test]
    fn test_single_follower_chases_far_leader() {
        let mut chain = FollowerChain::from_positions(&[Vec2::ZERO], 2.0, 20.0);
        chain.advance_all(Vec2::new(500.0, 500.0));
        let p = chain.followers()[0].pos;
        assert!((p.x - 1.414).abs() < 1e-3);
        assert!((p.y - 1.414).abs() < 1e-3);
    }

    #[test]
    fn test_same_tick_propagation() {
        // Follower 1 sits exactly on the leash from follower 0's start, so it only
        // moves if it sees follower 0's updated position.
        let mut chain = FollowerChain::from_positions(
            &[Vec2::new(0.0, 0.0), Vec2::new(20.0, 0.0)],
            2.0,
            20.0,
        );
        chain.advance_all(Vec2::new(-100.0, 0.0));
        assert_eq!(chain.followers()[0].pos, Vec2::new(-2.0, 0.0));
        assert_eq!(chain.followers()[1].pos, Vec2::new(18.0, 0.0));
    }

    #[test]
    fn test_empty_chain() {
        let mut chain = FollowerChain::new(0, Vec2::ZERO, 30.0, 2.0, 20.0);
        chain.advance_all(Vec2::new(1000.0, 0.0));
        assert!(chain.is_empty());
        assert!(chain.is_settled(Vec2::ZERO));
        assert_eq!(chain.target_of(0, Vec2::ZERO), None);
    }

    #[test]
    fn test_target_of() {
        let chain = FollowerChain::new(3, Vec2::ZERO, 30.0, 2.0, 20.0);
        let leader = Vec2::new(5.0, 5.0);
        assert_eq!(chain.target_of(0, leader), Some(leader));
        assert_eq!(chain.target_of(2, leader), Some(Vec2::new(30.0, 0.0)));
        assert_eq!(chain.target_of(3, leader), None);
    }

    #[test]
    fn test_negative_leash_chain_stays_finite() {
        let mut chain = FollowerChain::from_positions(&[Vec2::ZERO, Vec2::new(0.5, 0.0)], 2.0, -1.0);
        chain.advance_all(Vec2::ZERO);
        assert_eq!(chain.followers()[0].pos, Vec2::ZERO);
        assert_eq!(chain.followers()[1].pos, Vec2::ZERO);
    }

    #[test]
    fn test_fast_followers_never_flip_past_leader() {
        let settings = Settings {
            follower_speed: 50.0,
            ..Default::default()
        };
        let mut state = SimState::new(&settings);
        for _ in 0..10 {
            state.chain.advance_all(state.leader_pos());
        }
        let xs: Vec<f32> = state.follower_positions().map(|p| p.x).collect();
        assert_eq!(xs, vec![100.0, 100.0, 110.0, 110.0, 120.0]);
        assert!(state.is_settled());
    }

    #[test]
    fn test_state_roundtrips_json() {
        let state = SimState::default();
        let json = serde_json::to_string(&state).unwrap();
        let back: SimState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
