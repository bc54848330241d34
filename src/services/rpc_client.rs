// ============================================================================
// RPC CLIENT - JSON-RPC over HTTP (stateless)
// ============================================================================
// No business logic, just requests against the configured node endpoint.
// ============================================================================

use gloo_net::http::Request;
use serde::Deserialize;

#[derive(Clone, PartialEq)]
pub struct RpcClient {
    url: String,
}

#[derive(Deserialize)]
struct RpcResponse {
    result: Option<serde_json::Value>,
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

impl RpcClient {
    pub fn new(url: String) -> Self {
        Self { url }
    }

    pub async fn call(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let response = Request::post(&self.url)
            .json(&body)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        let rpc = response
            .json::<RpcResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        if let Some(error) = rpc.error {
            return Err(format!("RPC error {}: {}", error.code, error.message));
        }

        rpc.result.ok_or_else(|| "RPC response missing result".to_string())
    }

    /// Read-only contract call against the latest block.
    pub async fn eth_call(&self, to: &str, data: &str) -> Result<String, String> {
        let params = serde_json::json!([{ "to": to, "data": data }, "latest"]);
        let result = self.call("eth_call", params).await?;
        result
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| "eth_call returned a non-string result".to_string())
    }
}
