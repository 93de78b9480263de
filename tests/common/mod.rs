//! Shared fixtures for integration tests.
#![allow(dead_code)]

use tennis_team_web::{Gender, Player, Team, TeamLevel};

/// Team with `boys` male and `girls` female players. Ratings descend from 10.0 in roster order.
pub fn school(name: &str, boys: usize, girls: usize) -> Team {
    let mut players = Vec::new();
    for i in 0..boys {
        players.push(
            Player::new(format!("{name} B{i}"))
                .with_gender(Gender::Male)
                .with_rating(10.0 - i as f64),
        );
    }
    for i in 0..girls {
        players.push(
            Player::new(format!("{name} G{i}"))
                .with_gender(Gender::Female)
                .with_rating(10.0 - i as f64),
        );
    }
    Team::new(name, TeamLevel::Varsity).with_players(players)
}

pub fn schools(n: usize, boys: usize, girls: usize) -> Vec<Team> {
    (0..n).map(|i| school(&format!("School {i}"), boys, girls)).collect()
}
