//! Leaderboard module - top-3 ranking and its plain-text format
//!
//! Entries are ordered by descending points, ties broken by ascending playtime.
//! The text format is one `name,points,playtime_seconds` line per entry. File access lives
//! outside the core; this module only converts between text and entries.

use crate::types::{DEFAULT_PLAYER_NAME, LEADERBOARD_SIZE};

/// One ranked result
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoreEntry {
    pub name: String,
    pub points: u32,
    pub playtime_secs: u32,
}

impl ScoreEntry {
    /// Build an entry; an empty name becomes the default label
    pub fn new(name: &str, points: u32, playtime_secs: u32) -> Self {
        let name = if name.is_empty() {
            DEFAULT_PLAYER_NAME.to_string()
        } else {
            name.to_string()
        };
        Self {
            name,
            points,
            playtime_secs,
        }
    }

    /// Whether `self` ranks strictly above `other`
    pub fn outranks(&self, other: &ScoreEntry) -> bool {
        beats(self.points, self.playtime_secs, other)
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            DEFAULT_PLAYER_NAME
        } else {
            &self.name
        }
    }

    pub fn display_points(&self) -> String {
        if self.points == 0 {
            "No point".to_string()
        } else {
            self.points.to_string()
        }
    }

    /// `[H hours ][M minutes ]S seconds`, or `No time` for zero
    pub fn display_playtime(&self) -> String {
        if self.playtime_secs == 0 {
            return "No time".to_string();
        }
        let hours = self.playtime_secs / 3600;
        let minutes = (self.playtime_secs % 3600) / 60;
        let seconds = self.playtime_secs % 60;

        let mut out = String::new();
        if hours != 0 {
            out.push_str(&format!("{} hours ", hours));
        }
        if minutes != 0 {
            out.push_str(&format!("{} minutes ", minutes));
        }
        out.push_str(&format!("{} seconds", seconds));
        out
    }

    /// Parse one `name,points,seconds` line; malformed lines yield a zero entry
    pub fn parse_line(line: &str) -> Self {
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() != 3 {
            return Self::default();
        }
        match (parts[1].trim().parse(), parts[2].trim().parse()) {
            (Ok(points), Ok(secs)) => Self::new(parts[0], points, secs),
            _ => Self::default(),
        }
    }

    pub fn to_line(&self) -> String {
        format!("{},{},{}", self.name, self.points, self.playtime_secs)
    }
}

impl Default for ScoreEntry {
    fn default() -> Self {
        Self::new("", 0, 0)
    }
}

fn beats(points: u32, playtime_secs: u32, other: &ScoreEntry) -> bool {
    points > other.points || (points == other.points && playtime_secs < other.playtime_secs)
}

/// Exactly three ranked entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard {
    entries: [ScoreEntry; LEADERBOARD_SIZE],
}

impl Leaderboard {
    /// Board of empty entries
    pub fn new() -> Self {
        Self {
            entries: Default::default(),
        }
    }

    /// Build from any number of entries: pad with empty entries, sort, keep the top three
    pub fn from_entries(entries: Vec<ScoreEntry>) -> Self {
        let mut all = entries;
        while all.len() < LEADERBOARD_SIZE {
            all.push(ScoreEntry::default());
        }
        sort_score_board(&mut all);
        let mut board = Self::new();
        for (slot, entry) in board.entries.iter_mut().zip(all) {
            *slot = entry;
        }
        board
    }

    pub fn entries(&self) -> &[ScoreEntry; LEADERBOARD_SIZE] {
        &self.entries
    }

    /// Rank a result would take, or `None` if it outranks no entry.
    ///
    /// Scans from the last rank upward and keeps the most senior rank outranked.
    pub fn rank_of(&self, points: u32, playtime_secs: u32) -> Option<usize> {
        let mut rank = None;
        for idx in (0..LEADERBOARD_SIZE).rev() {
            if beats(points, playtime_secs, &self.entries[idx]) {
                rank = Some(idx);
            }
        }
        rank
    }

    /// Insert a result at its rank, evicting the last entry. Returns the rank taken.
    pub fn insert(&mut self, entry: ScoreEntry) -> Option<usize> {
        let rank = self.rank_of(entry.points, entry.playtime_secs)?;
        for idx in (rank + 1..LEADERBOARD_SIZE).rev() {
            self.entries[idx] = self.entries[idx - 1].clone();
        }
        self.entries[rank] = entry;
        Some(rank)
    }

    /// Parse the persisted text form. Blank lines are ignored; malformed lines count as
    /// zero entries.
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(ScoreEntry::parse_line)
            .collect();
        Self::from_entries(entries)
    }

    /// Persisted text form: exactly three lines
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.to_line());
            out.push('\n');
        }
        out
    }
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Stable adjacent-swap sort: descending points, then ascending playtime
pub fn sort_score_board(entries: &mut [ScoreEntry]) {
    let len = entries.len();
    for pass in 0..len {
        let mut swapped = false;
        for idx in 0..len.saturating_sub(pass + 1) {
            if entries[idx + 1].outranks(&entries[idx]) {
                entries.swap(idx, idx + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(entries: [(&str, u32, u32); 3]) -> Leaderboard {
        Leaderboard::from_entries(
            entries
                .iter()
                .map(|&(n, p, t)| ScoreEntry::new(n, p, t))
                .collect(),
        )
    }

    #[test]
    fn test_insert_evicts_last() {
        let mut lb = board([("A", 500, 100), ("B", 300, 50), ("C", 100, 10)]);
        assert_eq!(lb.insert(ScoreEntry::new("D", 400, 20)), Some(1));
        assert_eq!(
            lb.entries(),
            &[
                ScoreEntry::new("A", 500, 100),
                ScoreEntry::new("D", 400, 20),
                ScoreEntry::new("B", 300, 50),
            ]
        );
    }

    #[test]
    fn test_rank_of_tie_breaks_on_playtime() {
        let lb = board([("A", 500, 100), ("B", 300, 50), ("C", 100, 10)]);
        assert_eq!(lb.rank_of(300, 49), Some(1));
        assert_eq!(lb.rank_of(300, 50), Some(2));
        assert_eq!(lb.rank_of(100, 10), None);
        assert_eq!(lb.rank_of(900, 999), Some(0));
    }

    #[test]
    fn test_insert_below_all_is_rejected() {
        let mut lb = board([("A", 500, 100), ("B", 300, 50), ("C", 100, 10)]);
        let before = lb.clone();
        assert_eq!(lb.insert(ScoreEntry::new("D", 50, 1)), None);
        assert_eq!(lb, before);
    }

    #[test]
    fn test_empty_board_accepts_any_points() {
        let mut lb = Leaderboard::new();
        assert_eq!(lb.insert(ScoreEntry::new("Solo", 100, 30)), Some(0));
        // A zero-point game never ranks
        assert_eq!(lb.rank_of(0, 5), None);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut entries = vec![
            ScoreEntry::new("X", 100, 10),
            ScoreEntry::new("Y", 200, 30),
            ScoreEntry::new("Z", 200, 20),
            ScoreEntry::new("W", 100, 10),
        ];
        sort_score_board(&mut entries);
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Z", "Y", "X", "W"]);
    }

    #[test]
    fn test_parse_pads_and_sorts() {
        let lb = Leaderboard::parse("Bob,10,5\nAmy,30,9\n");
        assert_eq!(lb.entries()[0], ScoreEntry::new("Amy", 30, 9));
        assert_eq!(lb.entries()[1], ScoreEntry::new("Bob", 10, 5));
        assert_eq!(lb.entries()[2], ScoreEntry::default());
    }

    #[test]
    fn test_parse_malformed_counts_as_zero_entry() {
        let lb = Leaderboard::parse("garbage\nAmy,30,9\nBob,x,1\nCat,20,2\n");
        assert_eq!(lb.entries()[0], ScoreEntry::new("Amy", 30, 9));
        assert_eq!(lb.entries()[1], ScoreEntry::new("Cat", 20, 2));
        assert_eq!(lb.entries()[2].points, 0);
    }

    #[test]
    fn test_empty_name_reads_back_as_default() {
        let lb = Leaderboard::parse(",40,12\n\n\n");
        assert_eq!(lb.entries()[0].name, DEFAULT_PLAYER_NAME);
        assert_eq!(lb.entries()[0].points, 40);
    }

    #[test]
    fn test_text_roundtrip() {
        let lb = board([("A", 500, 100), ("B", 300, 50), ("C", 100, 10)]);
        let text = lb.to_text();
        assert_eq!(text, "A,500,100\nB,300,50\nC,100,10\n");
        assert_eq!(Leaderboard::parse(&text), lb);
    }

    #[test]
    fn test_display_helpers() {
        let empty = ScoreEntry::default();
        assert_eq!(empty.display_name(), "No name");
        assert_eq!(empty.display_points(), "No point");
        assert_eq!(empty.display_playtime(), "No time");

        let entry = ScoreEntry::new("Ann", 1200, 3725);
        assert_eq!(entry.display_points(), "1200");
        assert_eq!(entry.display_playtime(), "1 hours 2 minutes 5 seconds");
        assert_eq!(ScoreEntry::new("Ann", 1, 59).display_playtime(), "59 seconds");
        assert_eq!(
            ScoreEntry::new("Ann", 1, 120).display_playtime(),
            "2 minutes 0 seconds"
        );
    }
}
