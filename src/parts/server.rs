//! Development-server part.

use super::Part;
use crate::config::{DevServerSection, PartialConfig, PluginSpec, WatchSection};
use serde_json::json;

/// Live-reload development server.
///
/// Host and port come from the environment hints snapshot; when unset the
/// keys are omitted and the engine falls back to its own defaults
/// (localhost:8080). With polling enabled, watch options are added for
/// filesystems without change events (network mounts, some VMs).
pub fn dev_server() -> Part {
    Part::pure("dev-server", |cx| {
        let mut config = PartialConfig {
            dev_server: DevServerSection {
                // History API fallback so client-side routing works on reload.
                history_api_fallback: Some(true),
                hot: Some(true),
                inline: Some(true),
                // Only errors, to keep the rebuild output readable.
                stats: Some("errors-only".to_string()),
                host: cx.hints.host.clone(),
                port: cx.hints.port,
            },
            plugins: vec![PluginSpec::new(
                "hot-module-replacement",
                json!({ "multiStep": true }),
            )],
            ..Default::default()
        };

        if cx.hints.poll {
            config.watch_options = Some(WatchSection {
                // Delay the rebuild after the first change.
                aggregate_timeout: Some(300),
                poll: Some(1000),
            });
        }

        config
    })
}
