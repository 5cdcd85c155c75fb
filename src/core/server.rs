//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific registries.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool
//! and dispatched through the `ToolRegistry`. Dispatch is deliberately not
//! macro-routed: unknown tool names must surface as `isError=true` results
//! that the model can read, not as protocol-level errors.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::news::NewsStore;
use crate::domains::tools::ToolRegistry;
use crate::domains::widgets::WidgetRegistry;

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between the widget and tool registries to handle MCP protocol messages.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registry of widget descriptors, keyed by identifier and template URI.
    widgets: Arc<WidgetRegistry>,

    /// Registry for dispatching tool calls.
    tools: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Widget templates are read from disk eagerly. A missing or unreadable
    /// template file fails construction so the process never starts in a
    /// state where a declared widget cannot be served.
    pub fn new(config: Config) -> Result<Self> {
        let config = Arc::new(config);

        let store = Arc::new(NewsStore::with_seed_data());
        let widgets = Arc::new(WidgetRegistry::new(&config.widgets)?);
        let tools = Arc::new(ToolRegistry::new(store, widgets.clone()));

        Ok(Self {
            config,
            widgets,
            tools,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tools
            .tools()
            .into_iter()
            .map(|t| {
                let mut tool = serde_json::json!({
                    "name": t.name,
                    "title": t.title,
                    "description": t.description,
                    "inputSchema": t.input_schema
                });
                if let Some(meta) = t.meta {
                    tool["_meta"] = serde_json::Value::Object(meta.0);
                }
                tool
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// Never fails at this layer. Unknown tools and invalid arguments come
    /// back as error envelopes inside the result.
    pub fn call_tool(&self, name: &str, arguments: serde_json::Value) -> serde_json::Value {
        let arguments = match arguments {
            serde_json::Value::Object(map) => map,
            serde_json::Value::Null => JsonObject::new(),
            other => {
                let mut map = JsonObject::new();
                map.insert("_invalid".to_string(), other);
                map
            }
        };
        let result = self.tools.call(name, arguments);
        serde_json::to_value(&result).unwrap_or_else(|_| serde_json::json!({"isError": true}))
    }

    /// List all available resources (for HTTP transport).
    pub fn list_resources(&self) -> Vec<serde_json::Value> {
        self.widgets
            .list_resources()
            .into_iter()
            .map(|r| {
                let mut resource = serde_json::json!({
                    "uri": r.raw.uri,
                    "name": r.raw.name,
                    "title": r.raw.title,
                    "description": r.raw.description,
                    "mimeType": r.raw.mime_type
                });
                if let Some(meta) = r.raw.meta {
                    resource["_meta"] = serde_json::Value::Object(meta.0);
                }
                resource
            })
            .collect()
    }

    /// List all available resource templates (for HTTP transport).
    pub fn list_resource_templates(&self) -> Vec<serde_json::Value> {
        self.widgets
            .list_resource_templates()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "uriTemplate": t.raw.uri_template,
                    "name": t.raw.name,
                    "title": t.raw.title,
                    "description": t.raw.description,
                    "mimeType": t.raw.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI (for HTTP transport).
    ///
    /// Unrecognized URIs yield an empty contents list rather than an error.
    pub fn read_resource(&self, uri: &str) -> serde_json::Value {
        let contents: Vec<ResourceContents> =
            self.widgets.read_resource(uri).into_iter().collect();
        serde_json::json!({ "contents": contents })
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Serves curated news articles as interactive widgets. \
                 Use get_news for the latest articles and search_news to \
                 filter by keyword, category, or page."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tools.tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        let arguments = request.arguments.unwrap_or_default();
        Ok(self.tools.call(&request.name, arguments))
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        Ok(ListResourcesResult {
            resources: self.widgets.list_resources(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        Ok(ListResourceTemplatesResult {
            resource_templates: self.widgets.list_resource_templates(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        let contents = self.widgets.read_resource(&request.uri).into_iter().collect();
        Ok(ReadResourceResult { contents })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::WidgetsConfig;

    fn test_server() -> McpServer {
        let config = Config {
            widgets: WidgetsConfig::for_tests(),
            ..Config::default()
        };
        McpServer::new(config).unwrap()
    }

    #[test]
    fn test_server_construction() {
        let server = test_server();
        assert_eq!(server.name(), "news-mcp-server");
        assert!(!server.version().is_empty());
    }

    #[test]
    fn test_construction_fails_on_missing_assets() {
        let config = Config {
            widgets: WidgetsConfig {
                assets_dir: std::path::PathBuf::from("/nonexistent/assets"),
            },
            ..Config::default()
        };
        assert!(McpServer::new(config).is_err());
    }

    #[test]
    fn test_get_info_capabilities() {
        let server = test_server();
        let info = server.get_info();
        let capabilities = info.capabilities;
        assert!(capabilities.tools.is_some());
        assert!(capabilities.resources.is_some());
        assert!(capabilities.prompts.is_none());
        assert!(info.instructions.unwrap().contains("news"));
    }

    #[test]
    fn test_http_list_tools_shape() {
        let server = test_server();
        let tools = server.list_tools();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0]["name"], "get_news");
        assert_eq!(
            tools[0]["_meta"]["openai/outputTemplate"],
            "ui://widget/get_news.html"
        );
        assert_eq!(tools[0]["inputSchema"]["type"], "object");
    }

    #[test]
    fn test_http_call_tool_unknown_name() {
        let server = test_server();
        let result = server.call_tool("bogus", serde_json::json!({}));
        assert_eq!(result["isError"], true);
    }

    #[test]
    fn test_http_call_tool_success() {
        let server = test_server();
        let result = server.call_tool("get_news", serde_json::Value::Null);
        assert_eq!(result["isError"], false);
        assert_eq!(
            result["structuredContent"]["items"].as_array().unwrap().len(),
            4
        );
    }

    #[test]
    fn test_http_list_resources_shape() {
        let server = test_server();
        let resources = server.list_resources();
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0]["uri"], "ui://widget/get_news.html");
        assert_eq!(resources[0]["mimeType"], "text/html+skybridge");
        for resource in &resources {
            let meta = resource["_meta"].as_object().expect("resource _meta");
            assert_eq!(meta["openai/outputTemplate"], resource["uri"]);
            assert_eq!(meta["openai/widgetAccessible"], true);
            assert_eq!(meta["openai/resultCanProduceWidget"], true);
            assert!(meta.contains_key("openai/toolInvocation/invoking"));
            assert!(meta.contains_key("openai/toolInvocation/invoked"));
        }
    }

    #[test]
    fn test_http_read_resource_known_and_unknown() {
        let server = test_server();

        let known = server.read_resource("ui://widget/search_news.html");
        let contents = known["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 1);
        assert!(contents[0]["text"].as_str().unwrap().contains("news-list"));
        assert_eq!(contents[0]["_meta"]["title"], "Search News");

        let unknown = server.read_resource("ui://widget/missing.html");
        assert!(unknown["contents"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_http_list_resource_templates() {
        let server = test_server();
        let templates = server.list_resource_templates();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0]["uriTemplate"], "ui://widget/{widget}.html");
    }
}
