//! Toy social-network simulator
//!
//! Users with symmetric friendships, a seeded random population step, and
//! breadth-first shortest friendship paths across a user's extended
//! network. Everything is deterministic under a fixed seed.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::error::{Result, WarrenError};

/// Identifier of a user, unique within a network
pub type UserId = u32;

/// A network member
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub name: String,
}

/// A social network of users and symmetric friendships
#[derive(Debug, Clone, Default)]
pub struct SocialNetwork {
    last_id: UserId,
    users: BTreeMap<UserId, User>,
    friendships: BTreeMap<UserId, BTreeSet<UserId>>,
}

/// Reachability statistics for one user's extended network
#[derive(Debug, Clone, Serialize)]
pub struct NetworkSummary {
    pub user: UserId,
    /// Users reachable through friendships, excluding the user
    pub reachable: usize,
    /// Users in the network, excluding the user
    pub others: usize,
    /// Share of the network reached, 0..=100
    pub percent_reached: f64,
    /// Mean shortest-path length (in hops) to reachable users
    pub mean_separation: f64,
}

impl SocialNetwork {
    pub fn new() -> SocialNetwork {
        SocialNetwork::default()
    }

    /// Create a user with the next sequential id (starting at 1)
    pub fn add_user(&mut self, name: &str) -> UserId {
        self.last_id += 1;
        self.users.insert(
            self.last_id,
            User {
                name: name.to_string(),
            },
        );
        self.friendships.insert(self.last_id, BTreeSet::new());
        self.last_id
    }

    /// Create a symmetric friendship between two users
    pub fn add_friendship(&mut self, a: UserId, b: UserId) -> Result<()> {
        if a == b {
            return Err(WarrenError::SelfFriendship);
        }
        if !self.users.contains_key(&a) {
            return Err(WarrenError::UserNotFound { id: a });
        }
        if !self.users.contains_key(&b) {
            return Err(WarrenError::UserNotFound { id: b });
        }
        if self.friendships[&a].contains(&b) {
            return Err(WarrenError::DuplicateFriendship { a, b });
        }
        self.friendships.entry(a).or_default().insert(b);
        self.friendships.entry(b).or_default().insert(a);
        Ok(())
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Total number of (undirected) friendships
    pub fn friendship_count(&self) -> usize {
        self.friendships.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    pub fn user(&self, id: UserId) -> Result<&User> {
        self.users.get(&id).ok_or(WarrenError::UserNotFound { id })
    }

    /// A user's direct friends, in ascending id order
    pub fn friends(&self, id: UserId) -> Result<&BTreeSet<UserId>> {
        self.friendships
            .get(&id)
            .ok_or(WarrenError::UserNotFound { id })
    }

    /// Iterate users in ascending id order
    pub fn users(&self) -> impl Iterator<Item = (UserId, &User)> {
        self.users.iter().map(|(&id, user)| (id, user))
    }

    /// Build a network of `num_users` users with exactly
    /// `num_users * avg_friendships / 2` random distinct friendships.
    ///
    /// The same seed always produces the same network.
    #[tracing::instrument]
    pub fn populate(num_users: usize, avg_friendships: usize, seed: u64) -> Result<SocialNetwork> {
        if avg_friendships >= num_users {
            return Err(WarrenError::NotEnoughUsers {
                num_users,
                avg_friendships,
            });
        }

        let mut network = SocialNetwork::new();
        for n in 0..num_users {
            network.add_user(&format!("user {}", n + 1));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let target = num_users * avg_friendships / 2;
        let mut created = 0;
        while created < target {
            let a = rng.gen_range(1..=num_users as UserId);
            let b = rng.gen_range(1..=num_users as UserId);
            if a == b || network.friendships[&a].contains(&b) {
                continue;
            }
            network.add_friendship(a, b)?;
            created += 1;
        }
        tracing::debug!(
            users = network.user_count(),
            friendships = network.friendship_count(),
            "populated network"
        );
        Ok(network)
    }

    /// Shortest friendship path to every user in `user`'s extended
    /// network, keyed by destination. The user maps to `[user]`;
    /// unreachable users are absent.
    pub fn shortest_paths(&self, user: UserId) -> Result<BTreeMap<UserId, Vec<UserId>>> {
        if !self.users.contains_key(&user) {
            return Err(WarrenError::UserNotFound { id: user });
        }

        let mut paths: BTreeMap<UserId, Vec<UserId>> = BTreeMap::new();
        paths.insert(user, vec![user]);
        let mut queue: VecDeque<UserId> = VecDeque::from([user]);

        while let Some(current) = queue.pop_front() {
            for &friend in &self.friendships[&current] {
                if !paths.contains_key(&friend) {
                    let mut path = paths[&current].clone();
                    path.push(friend);
                    paths.insert(friend, path);
                    queue.push_back(friend);
                }
            }
        }
        Ok(paths)
    }

    /// Reachability statistics for one user
    pub fn summary(&self, user: UserId) -> Result<NetworkSummary> {
        let paths = self.shortest_paths(user)?;
        let reachable = paths.len() - 1;
        let others = self.user_count().saturating_sub(1);
        let percent_reached = if others == 0 {
            0.0
        } else {
            reachable as f64 / others as f64 * 100.0
        };
        let mean_separation = if reachable == 0 {
            0.0
        } else {
            let hops: usize = paths
                .iter()
                .filter(|(&id, _)| id != user)
                .map(|(_, path)| path.len() - 1)
                .sum();
            hops as f64 / reachable as f64
        };
        Ok(NetworkSummary {
            user,
            reachable,
            others,
            percent_reached,
            mean_separation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_plus_tail() -> SocialNetwork {
        // 1-2-3 form a triangle; 4 hangs off 3; 5 is isolated
        let mut network = SocialNetwork::new();
        for name in ["ada", "ben", "cai", "dee", "eli"] {
            network.add_user(name);
        }
        network.add_friendship(1, 2).unwrap();
        network.add_friendship(2, 3).unwrap();
        network.add_friendship(1, 3).unwrap();
        network.add_friendship(3, 4).unwrap();
        network
    }

    #[test]
    fn test_sequential_ids_start_at_one() {
        let mut network = SocialNetwork::new();
        assert_eq!(network.add_user("ada"), 1);
        assert_eq!(network.add_user("ben"), 2);
        assert_eq!(network.user(1).unwrap().name, "ada");
    }

    #[test]
    fn test_friendships_are_symmetric() {
        let network = triangle_plus_tail();
        assert!(network.friends(1).unwrap().contains(&2));
        assert!(network.friends(2).unwrap().contains(&1));
        assert_eq!(network.friendship_count(), 4);
    }

    #[test]
    fn test_self_friendship_rejected() {
        let mut network = triangle_plus_tail();
        assert!(matches!(
            network.add_friendship(1, 1),
            Err(WarrenError::SelfFriendship)
        ));
    }

    #[test]
    fn test_duplicate_friendship_rejected() {
        let mut network = triangle_plus_tail();
        assert!(matches!(
            network.add_friendship(2, 1),
            Err(WarrenError::DuplicateFriendship { .. })
        ));
    }

    #[test]
    fn test_unknown_user_rejected() {
        let mut network = triangle_plus_tail();
        assert!(matches!(
            network.add_friendship(1, 42),
            Err(WarrenError::UserNotFound { id: 42 })
        ));
    }

    #[test]
    fn test_shortest_paths_cover_extended_network() {
        let network = triangle_plus_tail();
        let paths = network.shortest_paths(1).unwrap();
        assert_eq!(paths[&1], vec![1]);
        assert_eq!(paths[&2], vec![1, 2]);
        assert_eq!(paths[&3], vec![1, 3]);
        assert_eq!(paths[&4], vec![1, 3, 4]);
        // isolated user 5 is absent, not an error
        assert!(!paths.contains_key(&5));
    }

    #[test]
    fn test_shortest_paths_unknown_user() {
        let network = triangle_plus_tail();
        assert!(matches!(
            network.shortest_paths(42),
            Err(WarrenError::UserNotFound { id: 42 })
        ));
    }

    #[test]
    fn test_summary() {
        let network = triangle_plus_tail();
        let summary = network.summary(1).unwrap();
        assert_eq!(summary.reachable, 3);
        assert_eq!(summary.others, 4);
        assert!((summary.percent_reached - 75.0).abs() < f64::EPSILON);
        // hops: 1 + 1 + 2 over three reachable users
        assert!((summary.mean_separation - 4.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_populate_exact_friendship_count() {
        let network = SocialNetwork::populate(10, 2, 7).unwrap();
        assert_eq!(network.user_count(), 10);
        assert_eq!(network.friendship_count(), 10);
    }

    #[test]
    fn test_populate_deterministic_under_seed() {
        let first = SocialNetwork::populate(10, 2, 7).unwrap();
        let second = SocialNetwork::populate(10, 2, 7).unwrap();
        for id in 1..=10 {
            assert_eq!(first.friends(id).unwrap(), second.friends(id).unwrap());
        }
    }

    #[test]
    fn test_populate_rejects_too_many_friendships() {
        assert!(matches!(
            SocialNetwork::populate(3, 3, 0),
            Err(WarrenError::NotEnoughUsers { .. })
        ));
    }
}
