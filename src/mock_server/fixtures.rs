//! Test data fixtures for the mock server.

use super::state::MockState;

/// Collection of fixture factories for test data.
pub struct Fixtures;

/// The species served by [`MockServer::start`](super::MockServer::start).
const DEFAULT_SPECIES: &[(u32, &str)] = &[
    (1, "bulbasaur"),
    (4, "charmander"),
    (7, "squirtle"),
    (25, "pikachu"),
    (133, "eevee"),
    (151, "mew"),
];

impl Fixtures {
    /// The default set of (id, name) pairs.
    pub fn default_species() -> &'static [(u32, &'static str)] {
        DEFAULT_SPECIES
    }

    /// State seeded with the default species.
    pub fn default_state() -> MockState {
        DEFAULT_SPECIES
            .iter()
            .fold(MockState::new(), |state, (id, name)| state.with_species(*id, name))
    }
}
