// Copyright (c) 2026 Joseph Verdicchio and Contributors
// SPDX-License-Identifier: Apache-2.0

//! Canned scenarios over the hat/glasses lexicon.

use crate::game::ReferenceGame;

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub slug: &'static str,
    pub title: &'static str,
    pub game: ReferenceGame,
}

pub fn handout_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            slug: "baseline",
            title: "Even priors and all-0 message costs",
            game: ReferenceGame::core_lexicon([0.5, 0.5], [0.0, 0.0]),
        },
        Scenario {
            slug: "costly-hat",
            title: "Even priors, imbalanced message costs",
            game: ReferenceGame::core_lexicon([0.5, 0.5], [-6.0, 0.0]),
        },
        Scenario {
            slug: "skewed-prior",
            title: "Imbalanced priors, all-0 message costs",
            game: ReferenceGame::core_lexicon([0.3, 0.7], [0.0, 0.0]),
        },
        Scenario {
            slug: "alpha-4",
            title: "Even priors and all-0 message costs; alpha = 4",
            game: ReferenceGame::core_lexicon([0.5, 0.5], [0.0, 0.0]).with_alpha(4.0),
        },
    ]
}

pub fn find_scenario(slug: &str) -> Option<Scenario> {
    handout_scenarios().into_iter().find(|s| s.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_unique_and_resolvable() {
        let all = handout_scenarios();
        assert_eq!(all.len(), 4);
        for s in &all {
            assert_eq!(find_scenario(s.slug).as_ref(), Some(s));
            assert!(s.game.validate().is_ok(), "{}", s.slug);
        }
        assert!(find_scenario("nope").is_none());
    }
}
