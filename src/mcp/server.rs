//! MCP Server handler for the species catalog.

use rmcp::{
    handler::server::ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Content, ErrorData as McpError, Implementation,
        ListToolsResult, PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
        ToolsCapability,
    },
    service::RequestContext,
    RoleServer,
};
use schemars::JsonSchema;
use std::sync::Arc;

use crate::{
    mcp::{CountParams, GetParams},
    Catalog, PokeApiClient, PokeApiError,
};

/// PokeAPI MCP Server.
///
/// Implements the MCP ServerHandler trait on top of any [`Catalog`].
///
/// # Tools
///
/// - `count` - Number of species in the catalog
/// - `get` - Fetch a single species by id
#[derive(Clone)]
pub struct PokeApiServer {
    catalog: Arc<dyn Catalog>,
}

impl PokeApiServer {
    /// Create a new server backed by a [`PokeApiClient`] configured from the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment configuration is invalid.
    pub fn from_env() -> crate::Result<Self> {
        let client = PokeApiClient::from_env()?;
        Ok(Self::new(client))
    }

    /// Create a new server over an existing catalog.
    pub fn new(catalog: impl Catalog + 'static) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Generate JSON Schema for a type.
    fn schema<T: JsonSchema>() -> Arc<serde_json::Map<String, serde_json::Value>> {
        let schema = schemars::schema_for!(T);
        let value = serde_json::to_value(&schema).unwrap_or(serde_json::json!({}));
        match value {
            serde_json::Value::Object(map) => Arc::new(map),
            _ => Arc::new(serde_json::Map::new()),
        }
    }

    /// Convert PokeApiError to McpError.
    fn to_mcp_error(err: PokeApiError) -> McpError {
        if err.is_not_found() {
            return McpError::resource_not_found(err.to_string(), None);
        }
        match &err {
            PokeApiError::ConfigInvalid(msg) => McpError::invalid_params(msg.clone(), None),
            _ => McpError::internal_error(err.to_string(), None),
        }
    }

    fn json_text(value: &serde_json::Value) -> Result<CallToolResult, McpError> {
        let text = serde_json::to_string_pretty(value)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Handle the `count` tool.
    ///
    /// Returns `{"count": n}` as pretty-printed JSON.
    pub async fn handle_count(&self, _params: CountParams) -> Result<CallToolResult, McpError> {
        let count = self.catalog.count().await.map_err(Self::to_mcp_error)?;
        Self::json_text(&serde_json::json!({ "count": count }))
    }

    /// Handle the `get` tool.
    ///
    /// Returns the species as pretty-printed JSON with an extra
    /// `displayName` field.
    ///
    /// # Errors
    ///
    /// Returns `resource_not_found` when the catalog has no such id and
    /// `internal_error` for transport or parse failures.
    pub async fn handle_get(&self, params: GetParams) -> Result<CallToolResult, McpError> {
        let species = self
            .catalog
            .fetch_by_id(params.id)
            .await
            .map_err(Self::to_mcp_error)?;

        let mut value = serde_json::to_value(&species)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        value["displayName"] = serde_json::Value::String(species.display_name());

        Self::json_text(&value)
    }
}

impl ServerHandler for PokeApiServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: "pokeapi".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                "PokeAPI species catalog - count species or fetch one by id.".to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: PaginatedRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = vec![
            Tool::new(
                "count",
                "Return the total number of species in the catalog.",
                Self::schema::<CountParams>(),
            ),
            Tool::new(
                "get",
                "Fetch a single species by national dex number. \
                 Returns id, name, displayName and imageUrl.",
                Self::schema::<GetParams>(),
            ),
        ];

        Ok(ListToolsResult {
            tools,
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let args = request
            .arguments
            .map(serde_json::Value::Object)
            .unwrap_or(serde_json::json!({}));

        match request.name.as_ref() {
            "count" => {
                let params: CountParams = serde_json::from_value(args)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                self.handle_count(params).await
            }
            "get" => {
                let params: GetParams = serde_json::from_value(args)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                self.handle_get(params).await
            }
            other => Err(McpError::invalid_params(
                format!("Unknown tool: {other}"),
                None,
            )),
        }
    }
}
