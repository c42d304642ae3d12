/// Stats API team ids keyed by the scoreboard abbreviation used in the
/// attendance CSV.
pub const TEAM_IDS: &[(&str, u32)] = &[
    ("ARI", 109),
    ("ATL", 144),
    ("BAL", 110),
    ("BOS", 111),
    ("CHC", 112),
    ("CIN", 113),
    ("CLE", 114),
    ("COL", 115),
    ("CWS", 145),
    ("DET", 116),
    ("HOU", 117),
    ("KC", 118),
    ("LAA", 108),
    ("LAD", 119),
    ("MIA", 146),
    ("MIL", 158),
    ("MIN", 142),
    ("NYM", 121),
    ("NYY", 147),
    ("OAK", 133),
    ("PHI", 143),
    ("PIT", 134),
    ("SD", 135),
    ("SEA", 136),
    ("SF", 137),
    ("STL", 138),
    ("TB", 139),
    ("TEX", 140),
    ("TOR", 141),
    ("WSH", 120),
];

pub fn team_id(code: &str) -> Option<u32> {
    TEAM_IDS
        .iter()
        .find(|(abbr, _)| *abbr == code)
        .map(|(_, id)| *id)
}
