//! Query construction for the species search endpoint.
//!
//! Sort direction is not a query variable. The endpoint is addressed with one
//! of two fixed documents that differ only in their `order_by` clause, and the
//! builder picks between them.

use serde::Serialize;

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::domain::{SearchQuery, SortOrder};

// ============================================================================
// Templates
// ============================================================================

macro_rules! species_search_document {
    ($direction:literal) => {
        concat!(
            "query searchPokemonSpecies($name: String, $limit: Int, $offset: Int) {\n",
            "  pokemon_v2_pokemonspecies(\n",
            "    where: {name: {_ilike: $name}}\n",
            "    limit: $limit\n",
            "    offset: $offset\n",
            "    order_by: {capture_rate: ",
            $direction,
            "}\n",
            "  ) {\n",
            "    id\n",
            "    name\n",
            "    capture_rate\n",
            "    pokemon_v2_pokemoncolor {\n",
            "      id\n",
            "      name\n",
            "    }\n",
            "    pokemon_v2_pokemons {\n",
            "      id\n",
            "      name\n",
            "      pokemon_v2_pokemonabilities {\n",
            "        id\n",
            "        pokemon_v2_ability {\n",
            "          name\n",
            "        }\n",
            "      }\n",
            "    }\n",
            "  }\n",
            "}\n",
        )
    };
}

/// Species search ordered by ascending capture rate.
pub const SEARCH_SPECIES_ASC: &str = species_search_document!("asc");

/// Species search ordered by descending capture rate.
pub const SEARCH_SPECIES_DESC: &str = species_search_document!("desc");

/// Returns the fixed document for a sort order.
#[must_use]
pub const fn template(sort_order: SortOrder) -> &'static str {
    match sort_order {
        SortOrder::Asc => SEARCH_SPECIES_ASC,
        SortOrder::Desc => SEARCH_SPECIES_DESC,
    }
}

// ============================================================================
// Query Descriptor
// ============================================================================

/// Variables bound into the search document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryVariables {
    /// Wildcard-wrapped name pattern, e.g. `%pika%`.
    pub name: String,
    pub limit: u32,
    pub offset: u32,
}

/// Transport-ready request: document plus variables.
///
/// Serializes directly into a GraphQL request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryDescriptor {
    pub query: &'static str,
    pub variables: QueryVariables,
}

impl QueryDescriptor {
    /// Descriptor for a [`SearchQuery`].
    #[must_use]
    pub fn for_query(query: &SearchQuery, page_size: u32) -> Self {
        Self {
            query: template(query.sort_order),
            variables: QueryVariables {
                name: format!("%{}%", query.name),
                limit: page_size,
                offset: query.offset(page_size),
            },
        }
    }

    /// Sort order implied by the selected document.
    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        if self.query == SEARCH_SPECIES_DESC {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }

    /// Zero-based page this descriptor addresses.
    #[must_use]
    pub fn page(&self) -> u32 {
        match self.variables.limit {
            0 => 0,
            limit => self.variables.offset / limit,
        }
    }
}

/// Builds the descriptor for a name search.
///
/// `name` is matched case-insensitively anywhere in the species name.
#[must_use]
pub fn build(name: &str, page: u32, sort_order: SortOrder, page_size: u32) -> QueryDescriptor {
    QueryDescriptor::for_query(&SearchQuery::new(name, sort_order).at_page(page), page_size)
}

/// Builds the descriptor with the default page size.
#[must_use]
pub fn build_default(name: &str, page: u32, sort_order: SortOrder) -> QueryDescriptor {
    build(name, page, sort_order, DEFAULT_PAGE_SIZE)
}

// ============================================================================
// Tests
// ============================================================================
