//! MCP server implementation.

use crate::{PromptRegistry, ResourceRegistry, ToolRegistry};
use influx_mcp_client::InfluxApi;
use mcp_server::Router;
use mcp_server::router::CapabilitiesBuilder;
use mcp_spec::{
    content::Content,
    handler::{PromptError, ResourceError, ToolError},
    prompt::Prompt,
    protocol::ServerCapabilities,
    resource::Resource,
    tool::Tool,
};
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// MCP server for InfluxDB implementing the Router trait.
#[derive(Clone)]
pub struct InfluxRouter {
    name: String,
    version: String,
    tools: ToolRegistry,
    resources: ResourceRegistry,
    prompts: PromptRegistry,
}

impl InfluxRouter {
    /// Creates a new router builder.
    pub fn builder() -> InfluxRouterBuilder {
        InfluxRouterBuilder::default()
    }

    /// Creates a router serving every InfluxDB resource, tool and prompt.
    pub fn with_api(api: Arc<dyn InfluxApi>, default_org: Option<String>) -> Self {
        Self::builder().api(api).default_org(default_org).build()
    }

    /// Tool registry served by this router.
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Resource registry served by this router.
    pub fn resources(&self) -> &ResourceRegistry {
        &self.resources
    }
}

impl Router for InfluxRouter {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn instructions(&self) -> String {
        format!(
            "InfluxDB MCP Server v{}\n\n\
            This server provides access to an InfluxDB v2 instance. \
            Read resources to discover organizations, buckets and measurements, \
            run Flux queries with the query-data tool, and write line protocol with write-data.\n\n\
            Resources: {}\n\
            Available tools: {}\n\
            Prompts: {}",
            self.version,
            self.resources
                .list()
                .iter()
                .map(|r| r.uri_template())
                .collect::<Vec<_>>()
                .join(", "),
            self.tools
                .list()
                .iter()
                .map(|t| t.name().to_string())
                .collect::<Vec<_>>()
                .join(", "),
            self.prompts
                .list()
                .iter()
                .map(|p| p.name())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }

    fn capabilities(&self) -> ServerCapabilities {
        CapabilitiesBuilder::new()
            .with_tools(false)
            .with_resources(false, false)
            .with_prompts(false)
            .build()
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .list()
            .iter()
            .map(|tool| {
                Tool::new(
                    tool.name().to_string(),
                    tool.description().to_string(),
                    tool.input_schema(),
                )
            })
            .collect()
    }

    #[instrument(skip(self, arguments), fields(tool = %tool_name))]
    fn call_tool(
        &self,
        tool_name: &str,
        arguments: Value,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Content>, ToolError>> + Send + 'static>> {
        debug!(tool = %tool_name, args = ?arguments, "Tool called");

        let tools = self.tools.clone();
        let tool_name = tool_name.to_string();

        Box::pin(async move {
            match tools.execute(&tool_name, arguments).await {
                Ok(result) => {
                    info!(tool = %tool_name, "Tool executed successfully");
                    let text = serde_json::to_string_pretty(&result)
                        .unwrap_or_else(|_| result.to_string());
                    Ok(vec![Content::text(text)])
                }
                Err(e) => {
                    warn!(tool = %tool_name, error = %e, "Tool execution failed");
                    Err(ToolError::from(e))
                }
            }
        })
    }

    #[instrument(skip(self))]
    fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .listings()
            .into_iter()
            .filter_map(|info| {
                match Resource::new(&info.uri, Some("text".to_string()), Some(info.name.clone())) {
                    Ok(resource) => Some(resource.with_description(info.description)),
                    Err(e) => {
                        warn!(uri = %info.uri, error = %e, "Skipping unlistable resource");
                        None
                    }
                }
            })
            .collect()
    }

    #[instrument(skip(self))]
    fn read_resource(
        &self,
        uri: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, ResourceError>> + Send + 'static>> {
        debug!(uri, "Reading resource");
        let resources = self.resources.clone();
        let uri = uri.to_string();

        Box::pin(async move {
            match resources.read(&uri).await {
                Ok(content) => {
                    info!(uri, "Resource read successfully");
                    Ok(content)
                }
                Err(e) => {
                    warn!(uri, error = %e, "Resource read failed");
                    Err(ResourceError::from(e))
                }
            }
        })
    }

    fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts
            .list()
            .iter()
            .map(|prompt| Prompt::new(prompt.name(), Some(prompt.description()), None))
            .collect()
    }

    fn get_prompt(
        &self,
        prompt_name: &str,
    ) -> Pin<Box<dyn Future<Output = Result<String, PromptError>> + Send + 'static>> {
        let rendered = self
            .prompts
            .render(prompt_name)
            .map_err(|e| PromptError::NotFound(e.to_string()));
        Box::pin(async move { rendered })
    }
}

/// Builder for the InfluxDB MCP router.
#[derive(Default)]
pub struct InfluxRouterBuilder {
    name: Option<String>,
    version: Option<String>,
    api: Option<Arc<dyn InfluxApi>>,
    default_org: Option<String>,
    tools: Option<ToolRegistry>,
    resources: Option<ResourceRegistry>,
    prompts: Option<PromptRegistry>,
}

impl InfluxRouterBuilder {
    /// Sets the server name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the server version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the InfluxDB API used by the default tools and resources.
    pub fn api(mut self, api: Arc<dyn InfluxApi>) -> Self {
        self.api = Some(api);
        self
    }

    /// Sets the organization used to list bucket measurements.
    pub fn default_org(mut self, org: Option<String>) -> Self {
        self.default_org = org;
        self
    }

    /// Sets the tool registry, replacing the defaults.
    pub fn tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = Some(tools);
        self
    }

    /// Sets the resource registry, replacing the defaults.
    pub fn resources(mut self, resources: ResourceRegistry) -> Self {
        self.resources = Some(resources);
        self
    }

    /// Sets the prompt registry, replacing the defaults.
    pub fn prompts(mut self, prompts: PromptRegistry) -> Self {
        self.prompts = Some(prompts);
        self
    }

    /// Builds the router.
    ///
    /// Registries not set explicitly are filled with the InfluxDB defaults
    /// when an API was given, and left empty otherwise.
    pub fn build(self) -> InfluxRouter {
        let api = self.api;
        let default_org = self.default_org;

        let tools = self.tools.unwrap_or_else(|| {
            api.clone()
                .map(ToolRegistry::with_defaults)
                .unwrap_or_default()
        });
        let resources = self.resources.unwrap_or_else(|| {
            api.clone()
                .map(|api| ResourceRegistry::with_defaults(api, default_org))
                .unwrap_or_default()
        });

        InfluxRouter {
            name: self.name.unwrap_or_else(|| "influxdb".to_string()),
            version: self
                .version
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
            tools,
            resources,
            prompts: self.prompts.unwrap_or_else(PromptRegistry::with_defaults),
        }
    }
}
