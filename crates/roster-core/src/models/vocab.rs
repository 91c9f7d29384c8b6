//! Closed vocabularies.
//!
//! Every token-valued field of a record is drawn from one of these sets.
//! Unknown tokens are rejected at load time, never dropped.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Declares a closed vocabulary: the enum, its canonical tokens, accepted
/// aliases, and string-based serde.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $token:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical token.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }

            /// Parse a token, ignoring ASCII case and surrounding whitespace.
            pub fn parse(token: &str) -> Option<Self> {
                let token = token.trim();
                $(
                    if token.eq_ignore_ascii_case($token)
                        $(|| token.eq_ignore_ascii_case($alias))*
                    {
                        return Some($name::$variant);
                    }
                )+
                None
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let token = String::deserialize(deserializer)?;
                $name::parse(&token).ok_or_else(|| {
                    serde::de::Error::custom(format!(
                        "unknown {} token '{}'",
                        stringify!($name),
                        token
                    ))
                })
            }
        }
    };
}

vocabulary! {
    /// Abstract team roles.
    Role {
        Tank => "tank",
        Healer => "healer",
        Buffer => "buffer",
        Debuffer => "debuffer",
        Breaker => "breaker",
        PhysicalDps => "physical-dps" | "physical_dps",
        ElementalDps => "elemental-dps" | "elemental_dps",
    }
}

vocabulary! {
    /// Damage types an entity can exploit or is vulnerable to.
    /// Elements first, then weapons, in the game's weakness order.
    Weakness {
        Fire => "fire",
        Ice => "ice",
        Lightning => "lightning",
        Wind => "wind",
        Light => "light" | "holy",
        Dark => "dark",
        Sword => "sword",
        Polearm => "polearm" | "spear",
        Dagger => "dagger",
        Axe => "axe",
        Bow => "bow",
        Staff => "staff",
        Tome => "tome",
        Fan => "fan",
    }
}

impl Weakness {
    pub fn is_element(self) -> bool {
        self <= Weakness::Dark
    }
}

vocabulary! {
    /// Community tier rating, best first.
    Tier {
        SPlus => "S+",
        S => "S",
        A => "A",
        B => "B",
        C => "C",
        D => "D",
        H => "H",
    }
}

impl Tier {
    /// Whether this tier is at least as strong as `min`.
    pub fn meets(self, min: Tier) -> bool {
        self <= min
    }
}

vocabulary! {
    /// Server region a tier rating applies to.
    TierRegion {
        Jp => "jp",
        Gl => "gl",
    }
}

impl Default for TierRegion {
    fn default() -> Self {
        TierRegion::Jp
    }
}

impl TierRegion {
    pub fn other(self) -> TierRegion {
        match self {
            TierRegion::Jp => TierRegion::Gl,
            TierRegion::Gl => TierRegion::Jp,
        }
    }
}

vocabulary! {
    /// Character job classes.
    Job {
        Warrior => "warrior",
        Merchant => "merchant",
        Thief => "thief",
        Apothecary => "apothecary",
        Hunter => "hunter",
        Cleric => "cleric",
        Scholar => "scholar",
        Dancer => "dancer",
    }
}

impl Job {
    /// Weapon every member of the job wields.
    pub fn primary_weapon(self) -> Weakness {
        match self {
            Job::Warrior => Weakness::Sword,
            Job::Merchant => Weakness::Polearm,
            Job::Thief => Weakness::Dagger,
            Job::Apothecary => Weakness::Axe,
            Job::Hunter => Weakness::Bow,
            Job::Cleric => Weakness::Staff,
            Job::Scholar => Weakness::Tome,
            Job::Dancer => Weakness::Fan,
        }
    }
}

vocabulary! {
    Influence {
        Wealth => "wealth",
        Power => "power",
        Fame => "fame",
        Domination => "domination",
        Opulence => "opulence",
        Approval => "approval",
    }
}

vocabulary! {
    /// How far a record's contents have been checked by its curators.
    DataConfidence {
        Verified => "verified",
        Tested => "tested",
        Theoretical => "theoretical",
        Incomplete => "incomplete",
        Complete => "complete",
    }
}

impl Default for DataConfidence {
    fn default() -> Self {
        DataConfidence::Incomplete
    }
}

vocabulary! {
    StrategyType {
        Burst => "burst",
        Sustain => "sustain",
        Safe => "safe",
        SpeedClear => "speed_clear",
        LowInvestment => "low_investment",
        Cheese => "cheese",
    }
}

vocabulary! {
    InvestmentLevel {
        Low => "low",
        Medium => "medium",
        High => "high",
        Whale => "whale",
    }
}

vocabulary! {
    Difficulty {
        Easy => "easy",
        Normal => "normal",
        Hard => "hard",
        VeryHard => "very_hard",
        Expert => "expert",
        Extreme => "extreme",
    }
}

vocabulary! {
    ContentType {
        Story => "story",
        StoryBoss => "story_boss",
        SideStory => "side_story",
        NpcBattle => "npc_battle",
        Superboss => "superboss",
        Tower => "tower",
        Arena => "arena",
        AdversaryLog => "adversary_log",
        Event => "event",
        Other => "other",
    }
}
