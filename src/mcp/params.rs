//! MCP tool parameter types with JSON Schema support.

use schemars::JsonSchema;
use serde::Deserialize;

/// Parameters for the `get` MCP tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetParams {
    /// National dex number of the species (1 or greater).
    pub id: u32,
}

/// Parameters for the `count` MCP tool (takes none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct CountParams {}
