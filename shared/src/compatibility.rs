//! Compatibility table: coffee x pastry base affinities and coffee metadata

use serde::{Deserialize, Serialize};

use crate::types::{Season, ServingTime};

/// Base score used when a coffee/pastry pair is not in the table
pub const DEFAULT_BASE_SCORE: u8 = 70;

/// Coffee kinds on the shop menu
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum CoffeeKind {
    Espresso,
    Cappuccino,
    Latte,
    Americano,
    Macchiato,
    FlatWhite,
    Mocha,
    ColdBrew,
}

impl CoffeeKind {
    pub const ALL: [CoffeeKind; 8] = [
        CoffeeKind::Espresso,
        CoffeeKind::Cappuccino,
        CoffeeKind::Latte,
        CoffeeKind::Americano,
        CoffeeKind::Macchiato,
        CoffeeKind::FlatWhite,
        CoffeeKind::Mocha,
        CoffeeKind::ColdBrew,
    ];

    /// Catalog identifier (e.g. `flat-white`)
    pub fn id(&self) -> &'static str {
        match self {
            CoffeeKind::Espresso => "espresso",
            CoffeeKind::Cappuccino => "cappuccino",
            CoffeeKind::Latte => "latte",
            CoffeeKind::Americano => "americano",
            CoffeeKind::Macchiato => "macchiato",
            CoffeeKind::FlatWhite => "flat-white",
            CoffeeKind::Mocha => "mocha",
            CoffeeKind::ColdBrew => "cold-brew",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

impl std::fmt::Display for CoffeeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Taste intensities on a 0-10 scale
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FlavorVector {
    pub bitterness: u8,
    pub sweetness: u8,
    pub sourness: u8,
    pub saltiness: u8,
    pub umami: u8,
}

/// Static profile of one coffee kind
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CoffeeProfile {
    pub kind: CoffeeKind,
    pub flavor: FlavorVector,
    /// Pastry id -> base affinity (0-100)
    pub best_matches: &'static [(&'static str, u8)],
    pub description: &'static str,
    pub seasons: &'static [Season],
    pub serving_times: &'static [ServingTime],
}

impl CoffeeProfile {
    /// Base affinity with a pastry, if the pair is listed
    pub fn affinity(&self, pastry_id: &str) -> Option<u8> {
        self.best_matches
            .iter()
            .find(|(id, _)| *id == pastry_id)
            .map(|(_, score)| *score)
    }

    /// Season tags joined the way the menu prints them, e.g. `autumn, winter`
    pub fn season_label(&self) -> String {
        join_labels(self.seasons.iter().map(Season::as_str))
    }

    pub fn serving_time_label(&self) -> String {
        join_labels(self.serving_times.iter().map(ServingTime::as_str))
    }
}

fn join_labels<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    labels.collect::<Vec<_>>().join(", ")
}

const fn flavor(bitterness: u8, sweetness: u8, sourness: u8, saltiness: u8, umami: u8) -> FlavorVector {
    FlavorVector {
        bitterness,
        sweetness,
        sourness,
        saltiness,
        umami,
    }
}

static PROFILES: [CoffeeProfile; 8] = [
    CoffeeProfile {
        kind: CoffeeKind::Espresso,
        flavor: flavor(9, 2, 7, 1, 3),
        best_matches: &[
            ("almond-biscotti", 95),
            ("tiramisu", 92),
            ("chocolate-muffin", 85),
            ("croissant", 78),
            ("eclair", 88),
            ("danish", 75),
            ("blueberry-scone", 70),
            ("cinnamon-roll", 73),
        ],
        description: "bold, intense",
        seasons: &[Season::All],
        serving_times: &[ServingTime::Morning],
    },
    CoffeeProfile {
        kind: CoffeeKind::Cappuccino,
        flavor: flavor(5, 5, 4, 1, 2),
        best_matches: &[
            ("croissant", 94),
            ("danish", 89),
            ("cinnamon-roll", 91),
            ("chocolate-muffin", 86),
            ("eclair", 82),
            ("blueberry-scone", 88),
            ("almond-biscotti", 76),
            ("tiramisu", 84),
        ],
        description: "creamy, balanced",
        seasons: &[Season::Autumn, Season::Winter],
        serving_times: &[ServingTime::Morning, ServingTime::Afternoon],
    },
    CoffeeProfile {
        kind: CoffeeKind::Latte,
        flavor: flavor(3, 6, 3, 1, 2),
        best_matches: &[
            ("blueberry-scone", 93),
            ("chocolate-muffin", 90),
            ("danish", 87),
            ("cinnamon-roll", 92),
            ("croissant", 85),
            ("eclair", 88),
            ("tiramisu", 79),
            ("almond-biscotti", 71),
        ],
        description: "mild, milky",
        seasons: &[Season::All],
        serving_times: &[ServingTime::AllDay],
    },
    CoffeeProfile {
        kind: CoffeeKind::Americano,
        flavor: flavor(8, 1, 6, 1, 2),
        best_matches: &[
            ("croissant", 91),
            ("almond-biscotti", 93),
            ("danish", 86),
            ("chocolate-muffin", 82),
            ("tiramisu", 77),
            ("eclair", 79),
            ("cinnamon-roll", 75),
            ("blueberry-scone", 81),
        ],
        description: "strong, clean",
        seasons: &[Season::All],
        serving_times: &[ServingTime::Morning],
    },
    CoffeeProfile {
        kind: CoffeeKind::Macchiato,
        flavor: flavor(7, 3, 6, 1, 2),
        best_matches: &[
            ("tiramisu", 94),
            ("eclair", 91),
            ("chocolate-muffin", 88),
            ("danish", 83),
            ("croissant", 80),
            ("cinnamon-roll", 86),
            ("almond-biscotti", 82),
            ("blueberry-scone", 77),
        ],
        description: "espresso-forward, spotted",
        seasons: &[Season::All],
        serving_times: &[ServingTime::Afternoon],
    },
    CoffeeProfile {
        kind: CoffeeKind::FlatWhite,
        flavor: flavor(6, 4, 5, 1, 3),
        best_matches: &[
            ("croissant", 92),
            ("blueberry-scone", 89),
            ("danish", 87),
            ("chocolate-muffin", 84),
            ("eclair", 85),
            ("cinnamon-roll", 83),
            ("almond-biscotti", 78),
            ("tiramisu", 86),
        ],
        description: "velvety, strong",
        seasons: &[Season::All],
        serving_times: &[ServingTime::Morning],
    },
    CoffeeProfile {
        kind: CoffeeKind::Mocha,
        flavor: flavor(4, 8, 2, 1, 3),
        best_matches: &[
            ("cinnamon-roll", 90),
            ("danish", 88),
            ("croissant", 93),
            ("blueberry-scone", 82),
            ("chocolate-muffin", 78),
            ("eclair", 85),
            ("almond-biscotti", 70),
            ("tiramisu", 75),
            ("muffin", 85),
            ("scone", 82),
        ],
        description: "chocolatey, sweet",
        seasons: &[Season::Winter],
        serving_times: &[ServingTime::Afternoon, ServingTime::Evening],
    },
    CoffeeProfile {
        kind: CoffeeKind::ColdBrew,
        flavor: flavor(5, 1, 2, 0, 4),
        best_matches: &[
            ("chocolate-muffin", 91),
            ("danish", 88),
            ("eclair", 92),
            ("tiramisu", 87),
            ("croissant", 83),
            ("cinnamon-roll", 85),
            ("blueberry-scone", 86),
            ("almond-biscotti", 79),
        ],
        description: "smooth, refreshing",
        seasons: &[Season::Summer],
        serving_times: &[ServingTime::Afternoon],
    },
];

/// All coffee profiles in menu order
pub fn profiles() -> &'static [CoffeeProfile] {
    &PROFILES
}

/// Look up the profile for a coffee id
pub fn coffee_profile(coffee_id: &str) -> Option<&'static CoffeeProfile> {
    PROFILES.iter().find(|profile| profile.kind.id() == coffee_id)
}

/// Base affinity for a pair, defaulting to [`DEFAULT_BASE_SCORE`] when either id is unknown
pub fn base_score(coffee_id: &str, pastry_id: &str) -> u8 {
    coffee_profile(coffee_id)
        .and_then(|profile| profile.affinity(pastry_id))
        .unwrap_or(DEFAULT_BASE_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORE_PASTRIES: [&str; 8] = [
        "almond-biscotti",
        "tiramisu",
        "chocolate-muffin",
        "croissant",
        "eclair",
        "danish",
        "blueberry-scone",
        "cinnamon-roll",
    ];

    #[test]
    fn test_every_coffee_lists_core_pastries() {
        for profile in profiles() {
            for pastry in CORE_PASTRIES {
                assert!(
                    profile.affinity(pastry).is_some(),
                    "{} missing {}",
                    profile.kind,
                    pastry
                );
            }
        }
    }

    #[test]
    fn test_affinities_and_flavors_in_range() {
        for profile in profiles() {
            for (_, score) in profile.best_matches {
                assert!(*score <= 100);
            }
            let f = profile.flavor;
            for v in [f.bitterness, f.sweetness, f.sourness, f.saltiness, f.umami] {
                assert!(v <= 10);
            }
        }
    }

    #[test]
    fn test_base_score_lookup() {
        assert_eq!(base_score("espresso", "almond-biscotti"), 95);
        assert_eq!(base_score("mocha", "muffin"), 85);
        assert_eq!(base_score("espresso", "muffin"), DEFAULT_BASE_SCORE);
        assert_eq!(base_score("ristretto", "croissant"), DEFAULT_BASE_SCORE);
    }

    #[test]
    fn test_coffee_kind_ids_round_trip() {
        for kind in CoffeeKind::ALL {
            assert_eq!(CoffeeKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(CoffeeKind::from_id("Espresso"), None);
    }

    #[test]
    fn test_labels() {
        let cappuccino = coffee_profile("cappuccino").unwrap();
        assert_eq!(cappuccino.season_label(), "autumn, winter");
        assert_eq!(cappuccino.serving_time_label(), "morning, afternoon");
        assert_eq!(coffee_profile("latte").unwrap().serving_time_label(), "all day");
    }
}
