use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "reputation": {
                "type": "object",
                "properties": {
                    "base_url": { "type": "string", "format": "uri" },
                    "api_key": { "type": "string" },
                    "analysis_delay_secs": { "type": "integer", "minimum": 0 }
                }
            },
            "classifier": {
                "type": "object",
                "properties": {
                    "provider": { "type": "string", "enum": ["gemini", "heuristic"] },
                    "model": { "type": "string" },
                    "api_key": { "type": "string" },
                    "base_url": { "type": "string" }
                }
            },
            "storage": {
                "type": "object",
                "properties": {
                    "db_path": { "type": "string" },
                    "cache_dir": { "type": "string" }
                }
            },
            "server": {
                "type": "object",
                "properties": {
                    "host": { "type": "string" },
                    "port": { "type": "integer", "minimum": 1, "maximum": 65535 }
                }
            }
        },
        "additionalProperties": false
    })
});
