use super::Album;
use std::collections::HashSet;

/// Aggregates shown in the summary bar above the album grid. Computed over
/// the filtered collection, not the whole catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct AlbumSummary {
    pub total: usize,
    pub rated: usize,
    pub unique_artists: usize,
    /// Mean of present ratings, rounded to two decimals. `None` when no
    /// album in view is rated.
    pub avg_rating: Option<f64>,
}

impl AlbumSummary {
    pub fn compute(albums: &[Album]) -> AlbumSummary {
        let ratings: Vec<f64> = albums.iter().filter_map(|a| a.rating).collect();
        let artists: HashSet<&str> = albums.iter().map(|a| a.artist_name()).collect();
        let avg_rating = if ratings.is_empty() {
            None
        } else {
            let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
            Some((mean * 100.0).round() / 100.0)
        };
        AlbumSummary {
            total: albums.len(),
            rated: ratings.len(),
            unique_artists: artists.len(),
            avg_rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::album;

    #[test]
    fn computes_counts_and_rounded_average() {
        let mut a1 = album(1, "One", "Wire");
        a1.rating = Some(8.0);
        let mut a2 = album(2, "Two", "Wire");
        a2.rating = Some(8.5);
        let a3 = album(3, "Three", "Fugazi");

        let summary = AlbumSummary::compute(&[a1, a2, a3]);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.rated, 2);
        assert_eq!(summary.unique_artists, 2);
        assert_eq!(summary.avg_rating, Some(8.25));
    }

    #[test]
    fn empty_collection_has_no_average() {
        let summary = AlbumSummary::compute(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.avg_rating, None);
    }

    #[test]
    fn average_rounds_to_two_decimals() {
        let mut a1 = album(1, "One", "Wire");
        a1.rating = Some(7.0);
        let mut a2 = album(2, "Two", "Wire");
        a2.rating = Some(8.0);
        let mut a3 = album(3, "Three", "Wire");
        a3.rating = Some(8.0);
        let summary = AlbumSummary::compute(&[a1, a2, a3]);
        assert_eq!(summary.avg_rating, Some(7.67));
    }
}
