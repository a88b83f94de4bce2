use crate::core::{TrackListing, TrackMatch};

/// Order recognition results into the final track listing.
///
/// Results may arrive in any order when windows are recognized concurrently;
/// a stable sort on the window offset restores mix order. Consecutive windows
/// that matched the same song stay separate entries.
pub fn assemble(mut matches: Vec<TrackMatch>) -> TrackListing {
    matches.sort_by_key(|m| m.timestamp_seconds);
    TrackListing::from_sorted(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timestamps(listing: &TrackListing) -> Vec<u64> {
        listing.iter().map(|m| m.timestamp_seconds).collect()
    }

    #[test]
    fn test_restores_time_order() {
        let listing = assemble(vec![
            TrackMatch::new("C", "c", 40),
            TrackMatch::new("A", "a", 0),
            TrackMatch::new("B", "b", 20),
        ]);

        assert_eq!(timestamps(&listing), vec![0, 20, 40]);
        assert_eq!(listing.as_slice()[0].artist, "A");
        assert_eq!(listing.as_slice()[2].artist, "C");
    }

    #[test]
    fn test_sorted_input_is_unchanged() {
        let sorted = vec![
            TrackMatch::new("X", "A", 0),
            TrackMatch::sentinel(20),
            TrackMatch::new("n/a", "B", 40),
        ];

        let listing = assemble(sorted.clone());
        assert_eq!(listing.as_slice(), sorted.as_slice());

        // Assembling again changes nothing
        let again = assemble(listing.clone().into_inner());
        assert_eq!(again, listing);
    }

    #[test]
    fn test_repeated_song_is_not_merged() {
        let listing = assemble(vec![
            TrackMatch::new("X", "Song A", 20),
            TrackMatch::new("X", "Song A", 0),
        ]);

        assert_eq!(listing.len(), 2);
        assert_eq!(timestamps(&listing), vec![0, 20]);
        assert!(listing.iter().all(|m| m.title == "Song A"));
    }

    #[test]
    fn test_empty_input() {
        assert!(assemble(Vec::new()).is_empty());
    }
}
