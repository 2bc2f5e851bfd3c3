//! Everything the landing page says. All three variants render exactly this,
//! in this order.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionMeta {
    pub index: u8,
    pub label: &'static str,
    pub title: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub caption: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BulletGroup {
    /// Stable identifier, emitted as `data-bullet` on every rendered item.
    pub key: &'static str,
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceEntry {
    pub label: &'static str,
    pub price: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tier {
    pub code: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub price: &'static str,
    pub outcomes: BulletGroup,
    pub includes: BulletGroup,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metric {
    pub number: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallToAction {
    BookFreeCall,
    BookYourFreeCall,
    JoinDiscord,
    WatchTutorials,
}

impl CallToAction {
    pub fn label(self) -> &'static str {
        match self {
            CallToAction::BookFreeCall => "BOOK_FREE_CALL",
            CallToAction::BookYourFreeCall => "BOOK_YOUR_FREE_CALL",
            CallToAction::JoinDiscord => "JOIN_DISCORD",
            CallToAction::WatchTutorials => "WATCH_TUTORIALS",
        }
    }

    /// Booking is the only action rendered as a primary button.
    pub fn is_primary(self) -> bool {
        matches!(self, CallToAction::BookFreeCall | CallToAction::BookYourFreeCall)
    }
}

pub const BRAND: &str = "LAST RIFT LABS";
pub const PROJECT_CODE: &str = "LAST_RIFT_LABS";
pub const REVISION: &str = "2026.02.17";
pub const SCALE: &str = "1:1";

pub const HERO: SectionMeta = SectionMeta { index: 0, label: "FORTNITE_CREATOR_HUB", title: BRAND };
pub const COMMUNITY: SectionMeta = SectionMeta { index: 1, label: "SECTION_01", title: "COMMUNITY FIRST" };
pub const PROBLEM: SectionMeta = SectionMeta { index: 2, label: "SECTION_02", title: "PROBLEM ANALYSIS" };
pub const FREE_ACCESS: SectionMeta = SectionMeta { index: 3, label: "SECTION_03", title: "FREE ACCESS" };
pub const CONSULT: SectionMeta = SectionMeta { index: 4, label: "SECTION_04", title: "FREE CONSULT" };
pub const SERVICES: SectionMeta = SectionMeta { index: 5, label: "SECTION_05", title: "PAID SERVICES" };
pub const PIPELINE: SectionMeta = SectionMeta { index: 6, label: "SECTION_06", title: "PIPELINE" };
pub const ASSETS: SectionMeta = SectionMeta { index: 7, label: "SECTION_07", title: "3D ASSETS" };
pub const PROOF: SectionMeta = SectionMeta { index: 8, label: "SECTION_08", title: "PROOF" };
pub const VALUES: SectionMeta = SectionMeta { index: 9, label: "SECTION_09", title: "VALUES" };
pub const START: SectionMeta = SectionMeta { index: 10, label: "SECTION_10", title: "START" };

pub const SECTIONS: [SectionMeta; 11] = [
    HERO, COMMUNITY, PROBLEM, FREE_ACCESS, CONSULT, SERVICES, PIPELINE, ASSETS, PROOF, VALUES, START,
];

pub const HERO_PITCH: &str = "Helping Fortnite creators turn unfinished ideas into finished, playable games. A builder led UEFN studio + community for creators who want clarity, momentum, and real progress.";
pub const HERO_TAG: &str = "[BUILDERS_ONLY] Not spectators. Not theory. Real projects, real support.";
pub const HERO_ACTIONS: &[CallToAction] = &[CallToAction::BookFreeCall];

pub const COMMUNITY_INTRO: &str = "Last Rift Labs is a Fortnite‑focused UGC studio and creator hub. We help UEFN creators move from stuck to playable to published through:";
pub const PILLARS: &[Feature] = &[
    Feature { title: "EDUCATION", caption: "Real-world workflows and systems" },
    Feature { title: "SUPPORT", caption: "Direct help with your projects" },
    Feature { title: "SYSTEMS", caption: "Structure and process" },
    Feature { title: "DEVELOPMENT", caption: "We build with you" },
];
pub const COMMUNITY_NOTE: &str = "[NOTE] We actively build and release our own games. Then use what we learn to help other creators finish theirs.";

pub const FAILURE_POINTS: BulletGroup = BulletGroup {
    key: "failure-points",
    heading: "FAILURE_POINTS:",
    items: &[
        "No clear path",
        "Too many systems",
        "No structure",
        "Scope chaos",
        "Technical blockers",
        "No production process",
    ],
};
pub const SOLUTION_TAG: &str = "[SOLUTION]";
pub const SOLUTION: &str = "We turn confusion into clarity and ideas into finished projects.";

pub const FREE_ACCESS_TAG: &str = "[SHARED_INFRASTRUCTURE] Built for builders.";
pub const RESOURCES: &[Feature] = &[
    Feature { title: "WORKSHOPS", caption: "Real projects, real problems" },
    Feature { title: "TUTORIALS", caption: "Verse, systems, production" },
    Feature { title: "DISCORD", caption: "Async dev support" },
    Feature { title: "CONSULT", caption: "30-minute builder review" },
];
pub const FREE_ACCESS_ACTIONS: &[CallToAction] = &[
    CallToAction::JoinDiscord,
    CallToAction::WatchTutorials,
    CallToAction::BookFreeCall,
];

pub const CONSULT_INPUT: BulletGroup = BulletGroup {
    key: "consult-input",
    heading: "INPUT:",
    items: &[
        "Review your real project",
        "Identify actual blockers",
        "Clarify whats slowing you down",
        "Map realistic next steps",
    ],
};
pub const CONSULT_OUTPUT: BulletGroup = BulletGroup {
    key: "consult-output",
    heading: "OUTPUT:",
    items: &[
        "Clear priorities",
        "Reduced scope confusion",
        "A practical action plan",
        "Direction you can execute",
    ],
};
pub const CONSULT_NOTE: &str = "[NO_STRINGS_ATTACHED] Even if you never work with us again.";
pub const CONSULT_ACTIONS: &[CallToAction] = &[CallToAction::BookYourFreeCall];

pub const TIERS: &[Tier] = &[
    Tier {
        code: "TIER_A",
        name: "BUILDER SUPPORT",
        tagline: "For creators who want momentum and structure.",
        price: "$150–$500/mo",
        outcomes: BulletGroup {
            key: "tier-a-outcomes",
            heading: "OUTCOMES",
            items: &[
                "Faster progress",
                "Cleaner systems",
                "Fewer blockers",
                "Better iteration flow",
            ],
        },
        includes: BulletGroup {
            key: "tier-a-includes",
            heading: "INCLUDES",
            items: &[
                "Project reviews",
                "Verse & system audits",
                "Production planning",
                "Async support",
            ],
        },
    },
    Tier {
        code: "TIER_B",
        name: "EMBEDDED",
        tagline: "For teams that want execution power.",
        price: "$1K–$4K/mo",
        outcomes: BulletGroup {
            key: "tier-b-outcomes",
            heading: "OUTCOMES",
            items: &[
                "Features shipped",
                "Reduced technical debt",
                "Better performance",
                "Stronger production systems",
            ],
        },
        includes: BulletGroup {
            key: "tier-b-includes",
            heading: "INCLUDES",
            items: &[
                "Direct code contributions",
                "System & feature development",
                "Refactors & optimization",
                "Milestone support",
            ],
        },
    },
];

pub const STEPS: &[Step] = &[
    Step { title: "ASSESS", desc: "Review your live project" },
    Step { title: "UNDERSTAND", desc: "Identify blockers" },
    Step { title: "BUILD", desc: "Choose a support path" },
    Step { title: "PUBLISH", desc: "Push updates live" },
    Step { title: "IMPROVE", desc: "Iterate with confidence" },
];

pub const ASSETS_TAG: &str = "[PRODUCTION_READY] Asset support.";
pub const ASSET_SERVICES: BulletGroup = BulletGroup {
    key: "asset-services",
    heading: "SERVICES:",
    items: &[
        "Vetted 3D artists",
        "Style matched assets",
        "Production-ready delivery",
        "Quality control",
    ],
};
pub const ASSET_PRICING_HEADING: &str = "PRICING:";
pub const ASSET_PRICES: &[PriceEntry] = &[
    PriceEntry { label: "Simple models", price: "$50–150" },
    PriceEntry { label: "Complex models", price: "$150+" },
    PriceEntry { label: "Model sets", price: "CONTACT" },
];

pub const PROOF_TAG: &str = "[5_YEARS_ACTIVE] 12+ projects released.";
pub const THUMBNAILS: &[&str] = &[
    "https://images.unsplash.com/photo-1511512578047-dfb367046420?w=600&h=400&fit=crop",
    "https://images.unsplash.com/photo-1538481199705-c710c4e965fc?w=600&h=400&fit=crop",
    "https://images.unsplash.com/photo-1552820728-8b83bb6b773f?w=600&h=400&fit=crop",
    "https://images.unsplash.com/photo-1556438064-2d7646166914?w=600&h=400&fit=crop",
];
pub const METRICS: &[Metric] = &[
    Metric { number: "12+", label: "PROJECTS" },
    Metric { number: "5", label: "YEARS" },
    Metric { number: "100%", label: "BUILDERS" },
];

pub const MISSION: BulletGroup = BulletGroup {
    key: "mission",
    heading: "MISSION:",
    items: &[
        "Strengthen the UEFN ecosystem",
        "Share real production knowledge",
        "Grow creators, not gatekeep systems",
        "Build infrastructure that the community can use",
    ],
};
pub const PRINCIPLE: &str = "[PRINCIPLE] We grow by helping others build.";

pub const START_PITCH: &str = "[INIT] Join the community, book a call, or watch our tutorials. No matter where you start, we're here to help you finish.";
pub const START_ACTIONS: &[CallToAction] = &[
    CallToAction::BookFreeCall,
    CallToAction::JoinDiscord,
    CallToAction::WatchTutorials,
];

/// Every bullet group on the page, in render order.
pub fn bullet_groups() -> Vec<BulletGroup> {
    let mut groups = vec![FAILURE_POINTS, CONSULT_INPUT, CONSULT_OUTPUT];
    for tier in TIERS {
        groups.push(tier.outcomes);
        groups.push(tier.includes);
    }
    groups.push(ASSET_SERVICES);
    groups.push(MISSION);
    groups
}

/// Two-digit rail index, e.g. `00`, `07`, `10`.
pub fn section_index(index: u8) -> String {
    format!("{:02}", index)
}

/// Caption for the zero-based thumbnail position: `PROJECT_01`, `PROJECT_02`, ...
pub fn project_label(position: usize) -> String {
    format!("PROJECT_{:02}", position + 1)
}

/// Alt text for the zero-based thumbnail position.
pub fn project_alt(position: usize) -> String {
    format!("Project {}", position + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_ordered_and_indexed_from_zero() {
        for (i, section) in SECTIONS.iter().enumerate() {
            assert_eq!(section.index as usize, i);
        }
        assert_eq!(SECTIONS.first().map(|s| s.title), Some("LAST RIFT LABS"));
        assert_eq!(SECTIONS.last().map(|s| s.title), Some("START"));
    }

    #[test]
    fn bullet_groups_keep_their_literal_counts() {
        assert_eq!(FAILURE_POINTS.items.len(), 6);
        assert_eq!(CONSULT_INPUT.items.len(), 4);
        assert_eq!(CONSULT_OUTPUT.items.len(), 4);
        assert_eq!(ASSET_SERVICES.items.len(), 4);
        assert_eq!(MISSION.items.len(), 4);
        for tier in TIERS {
            assert_eq!(tier.outcomes.items.len(), 4, "{} outcomes", tier.code);
            assert_eq!(tier.includes.items.len(), 4, "{} includes", tier.code);
        }
    }

    #[test]
    fn bullet_group_keys_are_unique_and_lists_non_empty() {
        let groups = bullet_groups();
        assert_eq!(groups.len(), 9);
        for (i, g) in groups.iter().enumerate() {
            assert!(!g.items.is_empty(), "{} is empty", g.key);
            assert!(groups[i + 1..].iter().all(|other| other.key != g.key), "duplicate key {}", g.key);
        }
    }

    #[test]
    fn prices_are_exact_literals() {
        let prices: Vec<_> = ASSET_PRICES.iter().map(|p| (p.label, p.price)).collect();
        assert_eq!(
            prices,
            vec![
                ("Simple models", "$50–150"),
                ("Complex models", "$150+"),
                ("Model sets", "CONTACT"),
            ]
        );
        assert_eq!(TIERS[1].price, "$1K–$4K/mo");
    }

    #[test]
    fn labels_are_zero_padded_and_one_based() {
        assert_eq!(section_index(0), "00");
        assert_eq!(section_index(10), "10");
        assert_eq!(project_label(0), "PROJECT_01");
        assert_eq!(project_label(3), "PROJECT_04");
        assert_eq!(project_alt(1), "Project 2");
    }

    #[test]
    fn only_booking_actions_are_primary() {
        assert!(CallToAction::BookFreeCall.is_primary());
        assert!(CallToAction::BookYourFreeCall.is_primary());
        assert!(!CallToAction::JoinDiscord.is_primary());
        assert_eq!(CallToAction::WatchTutorials.label(), "WATCH_TUTORIALS");
    }
}
