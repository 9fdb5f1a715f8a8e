//! Query-string codec for the album view state.
//!
//! A browse state serializes to at most eight parameters; anything left at
//! its default is omitted so shared URLs stay minimal, and the default
//! state encodes to the empty string. Decoding never fails: unknown keys
//! and malformed values fall back to defaults.

use super::filter::rating_string;
use super::state::BrowseState;
use super::{AlbumSortKey, SortOrder};
use std::borrow::Cow;

const PARAM_SEARCH: &str = "q";
const PARAM_LETTER: &str = "letter";
const PARAM_ARTIST: &str = "artist";
const PARAM_GENRE: &str = "genre";
const PARAM_YEAR: &str = "year";
const PARAM_MIN_RATING: &str = "min";
const PARAM_SORT_BY: &str = "sortby";
const PARAM_ORDER: &str = "order";

/// Serializes a state, omitting every parameter that holds its default.
pub fn encode(state: &BrowseState) -> String {
    let mut pairs: Vec<(&str, Cow<'_, str>)> = Vec::new();
    let filters = &state.filters;

    if !filters.search.is_empty() {
        pairs.push((PARAM_SEARCH, Cow::from(filters.search.as_str())));
    }
    if !filters.letter.is_empty() {
        pairs.push((PARAM_LETTER, Cow::from(filters.letter.as_str())));
    }
    if !filters.artist.is_empty() {
        pairs.push((PARAM_ARTIST, Cow::from(filters.artist.as_str())));
    }
    if !filters.genre.is_empty() {
        pairs.push((PARAM_GENRE, Cow::from(filters.genre.as_str())));
    }
    if !filters.year.is_empty() {
        pairs.push((PARAM_YEAR, Cow::from(filters.year.as_str())));
    }
    if let Some(min) = filters.min_rating {
        pairs.push((PARAM_MIN_RATING, Cow::from(rating_string(min))));
    }
    if state.sort_key != AlbumSortKey::default() {
        pairs.push((PARAM_SORT_BY, Cow::from(state.sort_key.as_str())));
    }
    if state.sort_order != SortOrder::default() {
        pairs.push((PARAM_ORDER, Cow::from(state.sort_order.as_str())));
    }

    pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Parses a query string (with or without a leading `?`). Unknown keys are
/// ignored and a minimum rating that does not parse as a finite number is
/// dropped rather than reported.
pub fn decode(query: &str) -> BrowseState {
    let mut state = BrowseState::default();
    let query = query.strip_prefix('?').unwrap_or(query);

    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        // Form encoding writes spaces as '+'; our encoder never emits a
        // bare '+', so this substitution is lossless.
        let value = match urlencoding::decode(&raw_value.replace('+', " ")) {
            Ok(value) => value.into_owned(),
            Err(_) => continue,
        };

        match key {
            PARAM_SEARCH => state.filters.search = value,
            PARAM_LETTER => state.filters.letter = value,
            PARAM_ARTIST => state.filters.artist = value,
            PARAM_GENRE => state.filters.genre = value,
            PARAM_YEAR => state.filters.year = value,
            PARAM_MIN_RATING => {
                state.filters.min_rating = value.parse::<f64>().ok().filter(|v| v.is_finite())
            }
            PARAM_SORT_BY => {
                if let Some(key) = AlbumSortKey::from_param(&value) {
                    state.sort_key = key;
                }
            }
            PARAM_ORDER => {
                if let Some(order) = SortOrder::from_param(&value) {
                    state.sort_order = order;
                }
            }
            _ => {}
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::AlbumFilters;

    fn representative() -> BrowseState {
        BrowseState {
            filters: AlbumFilters {
                letter: "B".into(),
                min_rating: Some(7.0),
                ..Default::default()
            },
            sort_key: AlbumSortKey::Rating,
            sort_order: SortOrder::Desc,
        }
    }

    #[test]
    fn default_state_encodes_to_empty_string() {
        assert_eq!(encode(&BrowseState::default()), "");
    }

    #[test]
    fn encodes_only_non_default_fields() {
        assert_eq!(
            encode(&representative()),
            "letter=B&min=7&sortby=rating&order=desc"
        );
    }

    #[test]
    fn round_trips_a_representative_state() {
        let state = representative();
        assert_eq!(decode(&encode(&state)), state);
    }

    #[test]
    fn round_trips_values_that_need_escaping() {
        let state = BrowseState {
            filters: AlbumFilters {
                search: "sgt. pepper & friends".into(),
                artist: "Sigur Rós".into(),
                genre: "post rock".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(decode(&encode(&state)), state);
    }

    #[test]
    fn accepts_a_leading_question_mark() {
        let state = decode("?letter=B&order=desc");
        assert_eq!(state.filters.letter, "B");
        assert_eq!(state.sort_order, SortOrder::Desc);
    }

    #[test]
    fn plus_decodes_as_space() {
        let state = decode("q=abbey+road");
        assert_eq!(state.filters.search, "abbey road");
    }

    #[test]
    fn malformed_values_fail_soft_to_defaults() {
        let state = decode("min=high&sortby=shuffle&order=sideways&bogus=1");
        assert_eq!(state, BrowseState::default());

        let nan = decode("min=NaN");
        assert_eq!(nan.filters.min_rating, None);
    }

    #[test]
    fn fractional_minimum_survives_the_round_trip() {
        let state = BrowseState {
            filters: AlbumFilters {
                min_rating: Some(7.5),
                ..Default::default()
            },
            ..Default::default()
        };
        let query = encode(&state);
        assert_eq!(query, "min=7.5");
        assert_eq!(decode(&query), state);
    }
}
