//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers instead of building species records or transport
//! doubles by hand in each test module.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use crate::client::{QueryDescriptor, Transport};
use crate::domain::{Ability, Page, Pokemon, Species, SpeciesColor, TransportError};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct SpeciesMother;

impl SpeciesMother {
    #[must_use]
    pub fn with_id(id: u32) -> Species {
        Self::named(id, &format!("species-{id}"))
    }

    #[must_use]
    pub fn named(id: u32, name: &str) -> Species {
        Species {
            id,
            name: name.to_string(),
            capture_rate: Some(45),
            color: None,
            pokemons: Vec::new(),
        }
    }

    #[must_use]
    pub fn pikachu() -> Species {
        Species {
            id: 25,
            name: "pikachu".to_string(),
            capture_rate: Some(190),
            color: Some(SpeciesColor {
                id: 10,
                name: "yellow".to_string(),
            }),
            pokemons: vec![Pokemon {
                id: 25,
                name: "pikachu".to_string(),
                abilities: vec![
                    Ability {
                        name: "static".to_string(),
                    },
                    Ability {
                        name: "lightning-rod".to_string(),
                    },
                ],
            }],
        }
    }

    #[must_use]
    pub fn charmander() -> Species {
        Species {
            capture_rate: Some(45),
            color: Some(SpeciesColor {
                id: 8,
                name: "red".to_string(),
            }),
            ..Self::named(4, "charmander")
        }
    }

    /// One species per id, in the given order.
    #[must_use]
    pub fn batch(ids: &[u32]) -> Vec<Species> {
        ids.iter().copied().map(Self::with_id).collect()
    }

    /// A page of `count` species with ids starting at `first_id`.
    #[must_use]
    pub fn page(first_id: u32, count: u32) -> Page {
        Page::new((first_id..first_id + count).map(Self::with_id).collect())
    }
}

/// Raw service payloads, shaped like the GraphQL endpoint's JSON.
pub struct JsonMother;

impl JsonMother {
    #[must_use]
    pub fn species(id: u32, name: &str, capture_rate: u32) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": name,
            "capture_rate": capture_rate,
            "pokemon_v2_pokemoncolor": null,
            "pokemon_v2_pokemons": []
        })
    }

    #[must_use]
    pub fn pikachu() -> serde_json::Value {
        serde_json::json!({
            "id": 25,
            "name": "pikachu",
            "capture_rate": 190,
            "pokemon_v2_pokemoncolor": {"id": 10, "name": "yellow"},
            "pokemon_v2_pokemons": [{
                "id": 25,
                "name": "pikachu",
                "pokemon_v2_pokemonabilities": [
                    {"id": 61, "pokemon_v2_ability": {"name": "static"}},
                    {"id": 62, "pokemon_v2_ability": {"name": "lightning-rod"}}
                ]
            }]
        })
    }

    #[must_use]
    pub fn sparse_species() -> serde_json::Value {
        serde_json::json!({
            "id": 10001,
            "name": "missingno",
            "capture_rate": null,
            "pokemon_v2_pokemoncolor": null,
            "pokemon_v2_pokemons": null
        })
    }

    /// The `data` object of a search response.
    #[must_use]
    pub fn page_data(species: &[serde_json::Value]) -> serde_json::Value {
        serde_json::json!({ "pokemon_v2_pokemonspecies": species })
    }
}

// ============================================================================
// Scripted Transport
// ============================================================================

struct Step {
    delay: Duration,
    reply: Result<Page, TransportError>,
}

/// In-memory transport that replays queued replies in order.
///
/// Every call is recorded. When the queue runs dry the reply is an empty page.
#[derive(Default)]
pub struct ScriptedTransport {
    steps: Mutex<VecDeque<Step>>,
    calls: Mutex<Vec<QueryDescriptor>>,
}

impl ScriptedTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, delay: Duration, reply: Result<Page, TransportError>) {
        self.steps.lock().unwrap().push_back(Step { delay, reply });
    }

    pub fn push_page(&self, page: impl Into<Page>) {
        self.push(Duration::ZERO, Ok(page.into()));
    }

    pub fn push_page_after(&self, delay: Duration, page: impl Into<Page>) {
        self.push(delay, Ok(page.into()));
    }

    pub fn push_error(&self, err: TransportError) {
        self.push(Duration::ZERO, Err(err));
    }

    pub fn push_error_after(&self, delay: Duration, err: TransportError) {
        self.push(delay, Err(err));
    }

    #[must_use]
    pub fn calls(&self) -> Vec<QueryDescriptor> {
        self.calls.lock().unwrap().clone()
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Offsets of every recorded call, in call order.
    #[must_use]
    pub fn offsets(&self) -> Vec<u32> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|d| d.variables.offset)
            .collect()
    }
}

impl Transport for ScriptedTransport {
    fn execute(
        &self,
        descriptor: QueryDescriptor,
    ) -> impl Future<Output = Result<Page, TransportError>> + Send {
        self.calls.lock().unwrap().push(descriptor);
        let step = self.steps.lock().unwrap().pop_front().unwrap_or(Step {
            delay: Duration::ZERO,
            reply: Ok(Page::empty()),
        });

        async move {
            if !step.delay.is_zero() {
                tokio::time::sleep(step.delay).await;
            }
            step.reply
        }
    }
}
