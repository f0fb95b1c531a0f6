//! League/conference bucket classification.
//!
//! Every sport's standings split into exactly two buckets (AL/NL, AFC/NFC,
//! East/West). JSON providers label groups directly; HTML tables often
//! don't, so classification falls back to counting known team-name keyword
//! hits per bucket. The keyword sets are plain data per sport, which keeps
//! the heuristic swappable and testable without touching any scraping code.

/// One bucket's label and its recognition keywords.
#[derive(Debug, Clone, Copy)]
pub struct Bucket {
    /// Canonical group label, e.g. "AL", "East".
    pub label: &'static str,
    /// Keywords matched against group names / table context text.
    pub name_keywords: &'static [&'static str],
    /// Known team-name keywords used for majority voting on table bodies.
    pub team_keywords: &'static [&'static str],
}

/// Two-bucket classifier with a configured tie fallback.
#[derive(Debug, Clone, Copy)]
pub struct GroupClassifier {
    primary: Bucket,
    secondary: Bucket,
    fallback: &'static str,
}

/// Keywords of three characters or fewer ("al", "nl", "w") must match a
/// whole word; a substring test would let "national" claim the AL bucket.
pub fn keyword_hit(text: &str, keyword: &str) -> bool {
    if keyword.len() > 3 {
        return text.contains(keyword);
    }
    text.split(|c: char| !c.is_alphanumeric())
        .any(|word| word == keyword)
}

impl GroupClassifier {
    /// Build a classifier from two buckets and a tie-fallback label.
    #[must_use]
    pub const fn new(primary: Bucket, secondary: Bucket, fallback: &'static str) -> Self {
        Self {
            primary,
            secondary,
            fallback,
        }
    }

    /// The bundled classifier for a sport.
    #[must_use]
    pub const fn for_sport(sport: varsity_types::Sport) -> Self {
        use varsity_types::Sport;
        match sport {
            Sport::Nba => Self::new(NBA_EAST, NBA_WEST, "West"),
            Sport::Nfl => Self::new(NFL_AFC, NFL_NFC, "NFC"),
            Sport::Mlb => Self::new(MLB_AL, MLB_NL, "NL"),
            Sport::Nhl => Self::new(NHL_EAST, NHL_WEST, "West"),
        }
    }

    /// The tie-fallback bucket label.
    #[must_use]
    pub const fn fallback(&self) -> &'static str {
        self.fallback
    }

    /// Classify from a group name or surrounding context text alone.
    #[must_use]
    pub fn by_name(&self, text: &str) -> Option<&'static str> {
        let text = text.to_lowercase();
        for bucket in [&self.primary, &self.secondary] {
            if bucket.name_keywords.iter().any(|k| keyword_hit(&text, k)) {
                return Some(bucket.label);
            }
        }
        None
    }

    /// Classify a labeled JSON group: name keywords decide, anything
    /// unrecognized lands in the fallback bucket.
    #[must_use]
    pub fn by_name_or_fallback(&self, text: &str) -> &'static str {
        self.by_name(text).unwrap_or(self.fallback)
    }

    /// Classify by counting known team-name keyword hits per bucket in a
    /// table body. Ties (including zero hits on both sides) default to the
    /// configured fallback bucket.
    #[must_use]
    pub fn by_team_majority(&self, text: &str) -> &'static str {
        let text = text.to_lowercase();
        let hits = |bucket: &Bucket| {
            bucket
                .team_keywords
                .iter()
                .filter(|k| text.contains(*k))
                .count()
        };
        let primary = hits(&self.primary);
        let secondary = hits(&self.secondary);
        if primary > secondary {
            self.primary.label
        } else if secondary > primary {
            self.secondary.label
        } else {
            self.fallback
        }
    }

    /// Full strategy for scraped tables: surrounding context first, team
    /// majority on the table body otherwise.
    #[must_use]
    pub fn classify(&self, context: &str, body: &str) -> &'static str {
        self.by_name(context)
            .unwrap_or_else(|| self.by_team_majority(body))
    }
}

const NBA_EAST: Bucket = Bucket {
    label: "East",
    name_keywords: &["eastern", "east"],
    team_keywords: &[
        "celtics", "knicks", "bucks", "cavaliers", "heat", "76ers", "magic", "pacers", "hawks",
        "bulls", "nets", "raptors", "hornets", "pistons", "wizards",
    ],
};

const NBA_WEST: Bucket = Bucket {
    label: "West",
    name_keywords: &["western", "west"],
    team_keywords: &[
        "thunder", "nuggets", "timberwolves", "clippers", "mavericks", "suns", "lakers",
        "pelicans", "kings", "warriors", "rockets", "jazz", "grizzlies", "spurs",
        "trail blazers",
    ],
};

const NFL_AFC: Bucket = Bucket {
    label: "AFC",
    name_keywords: &["afc"],
    team_keywords: &[
        "bills", "dolphins", "patriots", "jets", "ravens", "bengals", "browns", "steelers",
        "texans", "colts", "jaguars", "titans", "broncos", "chiefs", "raiders", "chargers",
    ],
};

const NFL_NFC: Bucket = Bucket {
    label: "NFC",
    name_keywords: &["nfc"],
    team_keywords: &[
        "cowboys", "giants", "eagles", "commanders", "bears", "lions", "packers", "vikings",
        "falcons", "panthers", "saints", "buccaneers", "cardinals", "rams", "49ers", "seahawks",
    ],
};

const MLB_AL: Bucket = Bucket {
    label: "AL",
    name_keywords: &["american", "al"],
    team_keywords: &[
        "yankees", "red sox", "blue jays", "rays", "orioles", "white sox", "guardians",
        "tigers", "royals", "twins", "astros", "angels", "athletics", "mariners", "rangers",
    ],
};

const MLB_NL: Bucket = Bucket {
    label: "NL",
    name_keywords: &["national", "nl"],
    team_keywords: &[
        "braves", "marlins", "mets", "phillies", "nationals", "cubs", "reds", "brewers",
        "pirates", "cardinals", "diamondbacks", "rockies", "dodgers", "padres", "giants",
    ],
};

const NHL_EAST: Bucket = Bucket {
    label: "East",
    name_keywords: &["eastern", "east"],
    team_keywords: &[
        "bruins", "sabres", "red wings", "panthers", "canadiens", "senators", "lightning",
        "maple leafs", "hurricanes", "blue jackets", "devils", "islanders", "rangers",
        "flyers", "penguins", "capitals",
    ],
};

const NHL_WEST: Bucket = Bucket {
    label: "West",
    name_keywords: &["western", "west"],
    team_keywords: &[
        "blackhawks", "avalanche", "stars", "wild", "predators", "blues", "jets", "flames",
        "oilers", "canucks", "kraken", "golden knights", "kings", "sharks", "ducks",
    ],
};
