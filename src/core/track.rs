use serde::{Deserialize, Serialize};
use std::fmt;

/// Content value used when the artist or title is unknown
pub const UNKNOWN: &str = "n/a";

/// One recognized (or unrecognized) window of the mix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackMatch {
    /// Performing artist, `"n/a"` when unknown
    pub artist: String,
    /// Song title, `"n/a"` when unknown
    pub title: String,
    /// Offset of the window in the mix, in seconds
    #[serde(rename = "timestamp")]
    pub timestamp_seconds: u64,
}

impl TrackMatch {
    /// Create a match
    pub fn new(artist: impl Into<String>, title: impl Into<String>, timestamp_seconds: u64) -> Self {
        TrackMatch {
            artist: artist.into(),
            title: title.into(),
            timestamp_seconds,
        }
    }

    /// Match recorded for a window that produced no usable result
    pub fn sentinel(timestamp_seconds: u64) -> Self {
        TrackMatch::new(UNKNOWN, UNKNOWN, timestamp_seconds)
    }

    /// Build a match from optional fields, substituting `"n/a"` per field
    pub fn from_parts(artist: Option<String>, title: Option<String>, timestamp_seconds: u64) -> Self {
        TrackMatch {
            artist: artist.unwrap_or_else(|| UNKNOWN.to_string()),
            title: title.unwrap_or_else(|| UNKNOWN.to_string()),
            timestamp_seconds,
        }
    }

    /// Whether both fields carry the sentinel
    pub fn is_sentinel(&self) -> bool {
        self.artist == UNKNOWN && self.title == UNKNOWN
    }
}

impl fmt::Display for TrackMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mins = self.timestamp_seconds / 60;
        let secs = self.timestamp_seconds % 60;
        write!(f, "[{}:{:02}] {} - {}", mins, secs, self.artist, self.title)
    }
}

/// Chronologically ordered track listing of a mix
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackListing(Vec<TrackMatch>);

impl TrackListing {
    /// Wrap entries that are already in ascending timestamp order
    pub(crate) fn from_sorted(entries: Vec<TrackMatch>) -> Self {
        debug_assert!(entries
            .windows(2)
            .all(|w| w[0].timestamp_seconds <= w[1].timestamp_seconds));
        TrackListing(entries)
    }

    /// Entries in ascending timestamp order
    pub fn as_slice(&self) -> &[TrackMatch] {
        &self.0
    }

    /// Iterate over entries
    pub fn iter(&self) -> std::slice::Iter<'_, TrackMatch> {
        self.0.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the listing is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Take the entries (consumes listing)
    pub fn into_inner(self) -> Vec<TrackMatch> {
        self.0
    }
}

impl<'a> IntoIterator for &'a TrackListing {
    type Item = &'a TrackMatch;
    type IntoIter = std::slice::Iter<'a, TrackMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel() {
        let m = TrackMatch::sentinel(40);
        assert_eq!(m.artist, "n/a");
        assert_eq!(m.title, "n/a");
        assert_eq!(m.timestamp_seconds, 40);
        assert!(m.is_sentinel());
    }

    #[test]
    fn test_partial_match_is_not_sentinel() {
        let m = TrackMatch::from_parts(None, Some("B".to_string()), 40);
        assert_eq!(m.artist, "n/a");
        assert_eq!(m.title, "B");
        assert!(!m.is_sentinel());
    }

    #[test]
    fn test_json_field_names() {
        let m = TrackMatch::new("X", "A", 0);
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"artist": "X", "title": "A", "timestamp": 0})
        );
    }

    #[test]
    fn test_listing_serializes_as_array() {
        let listing = TrackListing::from_sorted(vec![
            TrackMatch::new("X", "A", 0),
            TrackMatch::sentinel(20),
        ]);
        let json = serde_json::to_string(&listing).unwrap();
        assert_eq!(
            json,
            r#"[{"artist":"X","title":"A","timestamp":0},{"artist":"n/a","title":"n/a","timestamp":20}]"#
        );
    }

    #[test]
    fn test_display() {
        let m = TrackMatch::new("X", "A", 125);
        assert_eq!(m.to_string(), "[2:05] X - A");
    }
}
