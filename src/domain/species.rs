//! Catalog entities returned by a species search.
//!
//! The remote schema nests records three levels deep
//! (species → pokemon → ability link → ability) and uses `pokemon_v2_*`
//! field names. The public types here are the flattened shape the rest of the
//! crate works with; the wire structs at the bottom of the file only exist to
//! decode the service payload.

use serde::Deserialize;

// ============================================================================
// Public Types
// ============================================================================

/// A pokemon ability.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ability {
    /// Ability name, e.g. `static`.
    pub name: String,
}

/// The catalog color a species is filed under.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpeciesColor {
    /// Color identifier.
    pub id: u32,
    /// Color name, e.g. `yellow`.
    pub name: String,
}

/// A pokemon form belonging to a species.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "WirePokemon")]
pub struct Pokemon {
    /// Pokemon identifier.
    pub id: u32,
    /// Pokemon name.
    pub name: String,
    /// Abilities in the order the service returned them.
    pub abilities: Vec<Ability>,
}

/// A species record, the unit of a search result.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "WireSpecies")]
pub struct Species {
    /// Species identifier.
    pub id: u32,
    /// Species name.
    pub name: String,
    /// Capture likelihood. Higher values are easier to catch.
    pub capture_rate: Option<u32>,
    /// Catalog color, when the service has one.
    pub color: Option<SpeciesColor>,
    /// Pokemon forms of this species.
    pub pokemons: Vec<Pokemon>,
}

impl Species {
    /// Iterate over every ability of every form, in order.
    pub fn abilities(&self) -> impl Iterator<Item = &Ability> {
        self.pokemons.iter().flat_map(|p| p.abilities.iter())
    }
}

/// One page of search results. An empty page means there is nothing more.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Page {
    #[serde(rename = "pokemon_v2_pokemonspecies", default)]
    species: Vec<Species>,
}

impl Page {
    #[must_use]
    pub fn new(species: Vec<Species>) -> Self {
        Self { species }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.species.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    #[must_use]
    pub fn species(&self) -> &[Species] {
        &self.species
    }

    #[must_use]
    pub fn into_species(self) -> Vec<Species> {
        self.species
    }
}

impl From<Vec<Species>> for Page {
    fn from(species: Vec<Species>) -> Self {
        Self::new(species)
    }
}

// ============================================================================
// Wire Format
// ============================================================================

#[derive(Deserialize)]
struct WireAbilityLink {
    pokemon_v2_ability: Ability,
}

#[derive(Deserialize)]
struct WirePokemon {
    id: u32,
    name: String,
    #[serde(default)]
    pokemon_v2_pokemonabilities: Option<Vec<WireAbilityLink>>,
}

impl From<WirePokemon> for Pokemon {
    fn from(wire: WirePokemon) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            abilities: wire
                .pokemon_v2_pokemonabilities
                .unwrap_or_default()
                .into_iter()
                .map(|link| link.pokemon_v2_ability)
                .collect(),
        }
    }
}

#[derive(Deserialize)]
struct WireSpecies {
    id: u32,
    name: String,
    #[serde(default)]
    capture_rate: Option<u32>,
    #[serde(default)]
    pokemon_v2_pokemoncolor: Option<SpeciesColor>,
    #[serde(default)]
    pokemon_v2_pokemons: Option<Vec<Pokemon>>,
}

impl From<WireSpecies> for Species {
    fn from(wire: WireSpecies) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            capture_rate: wire.capture_rate,
            color: wire.pokemon_v2_pokemoncolor,
            pokemons: wire.pokemon_v2_pokemons.unwrap_or_default(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
