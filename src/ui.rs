//! Plain-text rendering of search states for the terminal.
//!
//! The binary prints states as they are published. [`ResultPrinter`] keeps
//! track of how many rows were already written so a load-more only prints
//! the new tail.

use std::fmt::Write;

use crate::domain::Species;
use crate::state::{SearchResults, SearchState};

/// Banner shown on the first launch.
pub const WELCOME_BANNER: &str = "\
Welcome to dexsearch!

Search Pokemon species by name:

    dexsearch search pika
    dexsearch search char --desc --pages 2

Results are ordered by capture rate. Only letters and hyphens are searched.";

// ============================================================================
// Row Formatting
// ============================================================================

/// One species as a header line plus one line per pokemon form.
#[must_use]
pub fn format_species(species: &Species) -> String {
    let mut out = format!("#{:<5} {}", species.id, species.name);

    let rate = species
        .capture_rate
        .map_or_else(|| "-".to_string(), |rate| rate.to_string());
    let _ = write!(out, "  capture rate {rate}");
    if let Some(color) = &species.color {
        let _ = write!(out, "  color {}", color.name);
    }

    for pokemon in &species.pokemons {
        let abilities = if pokemon.abilities.is_empty() {
            "no abilities".to_string()
        } else {
            pokemon
                .abilities
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let _ = write!(out, "\n       {}: {abilities}", pokemon.name);
    }

    out
}

/// Status line for a state, if it has one.
#[must_use]
pub fn status_line(state: &SearchState) -> Option<String> {
    match state {
        SearchState::Idle => None,
        SearchState::Loading => Some("Searching...".to_string()),
        SearchState::Error { message } => Some(format!("Error: {message}")),
        SearchState::Success(results) => results_status(results),
    }
}

fn results_status(results: &SearchResults) -> Option<String> {
    if results.is_loading_more {
        Some("Loading more...".to_string())
    } else if results.load_more_error {
        Some("Could not load more results".to_string())
    } else if results.is_empty() {
        Some("No species found".to_string())
    } else if !results.has_next_page {
        Some(format!("{} species, end of results", results.len()))
    } else {
        None
    }
}

// ============================================================================
// Incremental Printer
// ============================================================================

/// Renders each published state, printing result rows only once.
#[derive(Debug, Default)]
pub struct ResultPrinter {
    shown: usize,
}

impl ResultPrinter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows printed for the current search.
    #[must_use]
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Text to print for `state`, or `None` if nothing changed visibly.
    pub fn render(&mut self, state: &SearchState) -> Option<String> {
        let mut lines = Vec::new();

        // Every new search passes through `Loading`, which resets the count.
        if let SearchState::Success(results) = state {
            lines.extend(results.results.iter().skip(self.shown).map(format_species));
            self.shown = self.shown.max(results.len());
        } else {
            self.shown = 0;
        }

        lines.extend(status_line(state));
        (!lines.is_empty()).then(|| lines.join("\n"))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Page;
    use crate::test_utils::SpeciesMother;
    use insta::assert_snapshot;

    #[test]
    fn test_format_species_full() {
        assert_snapshot!(format_species(&SpeciesMother::pikachu()), @r"
        #25    pikachu  capture rate 190  color yellow
               pikachu: static, lightning-rod
        ");
    }

    #[test]
    fn test_format_species_sparse() {
        let mut species = SpeciesMother::named(10001, "missingno");
        species.capture_rate = None;
        assert_snapshot!(format_species(&species), @"#10001 missingno  capture rate -");
    }

    #[test]
    fn test_status_lines() {
        struct TestCase {
            name: &'static str,
            state: SearchState,
            expected: Option<&'static str>,
        }

        let loaded = SearchResults::first_page(Page::new(SpeciesMother::batch(&[1, 2])));
        let cases = [
            TestCase {
                name: "idle",
                state: SearchState::Idle,
                expected: None,
            },
            TestCase {
                name: "loading",
                state: SearchState::Loading,
                expected: Some("Searching..."),
            },
            TestCase {
                name: "error",
                state: SearchState::Error {
                    message: "Request timed out".into(),
                },
                expected: Some("Error: Request timed out"),
            },
            TestCase {
                name: "empty",
                state: SearchState::Success(SearchResults::first_page(Page::empty())),
                expected: Some("No species found"),
            },
            TestCase {
                name: "more available",
                state: SearchState::Success(loaded.clone()),
                expected: None,
            },
            TestCase {
                name: "loading more",
                state: SearchState::Success(SearchResults {
                    is_loading_more: true,
                    ..loaded.clone()
                }),
                expected: Some("Loading more..."),
            },
            TestCase {
                name: "load more failed",
                state: SearchState::Success(SearchResults {
                    load_more_error: true,
                    ..loaded.clone()
                }),
                expected: Some("Could not load more results"),
            },
            TestCase {
                name: "exhausted",
                state: SearchState::Success(SearchResults {
                    has_next_page: false,
                    ..loaded
                }),
                expected: Some("2 species, end of results"),
            },
        ];

        for case in cases {
            assert_eq!(
                status_line(&case.state).as_deref(),
                case.expected,
                "{}",
                case.name
            );
        }
    }

    #[test]
    fn test_printer_prints_each_row_once() {
        let mut printer = ResultPrinter::new();
        let first = SearchResults::first_page(Page::new(SpeciesMother::batch(&[1, 2])));

        assert_snapshot!(printer.render(&SearchState::Loading).unwrap(), @"Searching...");
        assert_snapshot!(printer.render(&SearchState::Success(first.clone())).unwrap(), @r"
        #1     species-1  capture rate 45
        #2     species-2  capture rate 45
        ");

        let loading = SearchResults {
            is_loading_more: true,
            ..first.clone()
        };
        assert_snapshot!(printer.render(&SearchState::Success(loading)).unwrap(), @"Loading more...");

        let appended = SearchResults {
            results: SpeciesMother::batch(&[1, 2, 3]),
            has_next_page: false,
            is_new_search: false,
            ..first
        };
        assert_snapshot!(printer.render(&SearchState::Success(appended)).unwrap(), @r"
        #3     species-3  capture rate 45
        3 species, end of results
        ");
        assert_eq!(printer.shown(), 3);
    }

    #[test]
    fn test_printer_failed_load_more_does_not_reprint() {
        let mut printer = ResultPrinter::new();
        let first = SearchResults::first_page(Page::new(SpeciesMother::batch(&[1, 2])));
        printer.render(&SearchState::Success(first.clone()));

        let failed = SearchResults {
            load_more_error: true,
            ..first
        };
        assert_snapshot!(printer.render(&SearchState::Success(failed)).unwrap(), @"Could not load more results");
    }

    #[test]
    fn test_printer_resets_on_new_search() {
        let mut printer = ResultPrinter::new();
        let page = SearchResults::first_page(Page::new(SpeciesMother::batch(&[1])));

        printer.render(&SearchState::Success(page.clone()));
        assert_eq!(printer.render(&SearchState::Idle), None);
        assert_eq!(printer.shown(), 0);

        let again = printer.render(&SearchState::Success(page)).unwrap();
        assert!(again.starts_with("#1"));
    }
}
