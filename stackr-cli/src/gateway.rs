//! Docker gateway
//!
//! Implements the core [`Gateway`] trait over one long-lived bollard client.
//! All conversions from bollard's generated models into the core model
//! happen here so the core never sees the client types.

use async_trait::async_trait;
use bollard::Docker;
use bollard::container::{
    InspectContainerOptions, ListContainersOptions, RemoveContainerOptions,
    RestartContainerOptions, StartContainerOptions, Stats, StatsOptions, StopContainerOptions,
};
use bollard::models::{ContainerInspectResponse, ContainerSummary, Port};
use futures_util::StreamExt;

use stackr_core::format::dedup_preserve_order;
use stackr_core::gateway::{Gateway, GatewayError, GatewayResult};
use stackr_core::model;

pub struct DockerGateway {
    client: Docker,
}

impl DockerGateway {
    /// Connect and verify the daemon is reachable. A failure here is fatal;
    /// the caller reports it and exits before entering the UI loop.
    pub async fn connect() -> GatewayResult<Self> {
        let client = Docker::connect_with_local_defaults()
            .map_err(|e| GatewayError::new(format!("failed to connect to docker: {}", e)))?;
        client
            .ping()
            .await
            .map_err(|e| GatewayError::new(format!("docker ping failed: {}", e)))?;
        Ok(Self { client })
    }
}

fn gateway_err(e: bollard::errors::Error) -> GatewayError {
    GatewayError::new(e.to_string())
}

#[async_trait]
impl Gateway for DockerGateway {
    async fn list_containers(&self) -> GatewayResult<Vec<model::ContainerSummary>> {
        let options = ListContainersOptions::<String> {
            all: true,
            ..Default::default()
        };
        let list = self
            .client
            .list_containers(Some(options))
            .await
            .map_err(gateway_err)?;
        Ok(list.into_iter().map(summary_from).collect())
    }

    async fn inspect(&self, id: &str) -> GatewayResult<model::ContainerInspection> {
        let response = self
            .client
            .inspect_container(id, None::<InspectContainerOptions>)
            .await
            .map_err(gateway_err)?;
        Ok(inspection_from(response))
    }

    async fn stats(&self, id: &str) -> GatewayResult<model::ResourceStats> {
        let options = StatsOptions {
            stream: false,
            one_shot: false,
        };
        let mut stream = self.client.stats(id, Some(options));
        match stream.next().await {
            Some(Ok(stats)) => Ok(stats_from(stats)),
            Some(Err(e)) => Err(gateway_err(e)),
            None => Err(GatewayError::new("no stats sample returned")),
        }
    }

    async fn stop(&self, id: &str) -> GatewayResult<()> {
        self.client
            .stop_container(id, None::<StopContainerOptions>)
            .await
            .map_err(gateway_err)
    }

    async fn start(&self, id: &str) -> GatewayResult<()> {
        self.client
            .start_container(id, None::<StartContainerOptions<String>>)
            .await
            .map_err(gateway_err)
    }

    async fn restart(&self, id: &str) -> GatewayResult<()> {
        self.client
            .restart_container(id, None::<RestartContainerOptions>)
            .await
            .map_err(gateway_err)
    }

    async fn remove(&self, id: &str) -> GatewayResult<()> {
        self.client
            .remove_container(id, None::<RemoveContainerOptions>)
            .await
            .map_err(gateway_err)
    }
}

fn summary_from(c: ContainerSummary) -> model::ContainerSummary {
    let id = c.id.unwrap_or_default();
    let name = c
        .names
        .as_ref()
        .and_then(|names| names.first())
        .map(|n| n.trim_start_matches('/').to_string())
        .unwrap_or_else(|| id.chars().take(12).collect());

    model::ContainerSummary {
        name,
        image: c.image.unwrap_or_default(),
        state: model::ContainerState::parse(c.state.as_deref().unwrap_or("")),
        status: c.status.unwrap_or_default(),
        ports: c
            .ports
            .unwrap_or_default()
            .into_iter()
            .map(port_from)
            .collect(),
        id,
    }
}

fn port_from(p: Port) -> model::PortMapping {
    model::PortMapping {
        container_port: p.private_port,
        host_port: p.public_port,
    }
}

fn inspection_from(r: ContainerInspectResponse) -> model::ContainerInspection {
    let state = r
        .state
        .as_ref()
        .and_then(|s| s.status.as_ref())
        .map(|s| model::ContainerState::parse(&s.to_string()))
        .unwrap_or(model::ContainerState::Unknown);
    let started_at = r
        .state
        .as_ref()
        .and_then(|s| s.started_at.clone())
        .unwrap_or_default();

    let restart_policy = r
        .host_config
        .as_ref()
        .and_then(|h| h.restart_policy.as_ref())
        .and_then(|p| p.name.as_ref())
        .map(|n| n.to_string())
        .unwrap_or_else(|| "no".to_string());

    let config = r.config.unwrap_or_default();
    let mut labels: Vec<(String, String)> = config
        .labels
        .unwrap_or_default()
        .into_iter()
        .collect();
    labels.sort();

    let network_settings = r.network_settings.unwrap_or_default();
    let mut networks: Vec<model::NetworkAttachment> = network_settings
        .networks
        .unwrap_or_default()
        .into_iter()
        .map(|(name, endpoint)| model::NetworkAttachment {
            name,
            ip: endpoint.ip_address.unwrap_or_default(),
            gateway: endpoint.gateway.unwrap_or_default(),
        })
        .collect();
    networks.sort_by(|a, b| a.name.cmp(&b.name));

    // Flatten the port map to `hostPort:containerPort` strings; sort the
    // container-port keys first so the hash map's order never leaks into
    // the display, then collapse duplicates.
    let port_map = network_settings.ports.unwrap_or_default();
    let mut keys: Vec<&String> = port_map.keys().collect();
    keys.sort();
    let mut bindings = Vec::new();
    for key in keys {
        if let Some(Some(entries)) = port_map.get(key) {
            for entry in entries {
                if let Some(host_port) = &entry.host_port {
                    bindings.push(format!("{}:{}", host_port, key));
                }
            }
        }
    }
    let port_bindings = dedup_preserve_order(bindings);

    model::ContainerInspection {
        id: r.id.unwrap_or_default(),
        name: r
            .name
            .map(|n| n.trim_start_matches('/').to_string())
            .unwrap_or_default(),
        image: config.image.unwrap_or_default(),
        state,
        created_at: r.created.unwrap_or_default(),
        started_at,
        restart_policy,
        restart_count: r.restart_count.unwrap_or(0),
        platform: r.platform.unwrap_or_default(),
        mounts: r
            .mounts
            .unwrap_or_default()
            .into_iter()
            .map(|m| model::MountEntry {
                kind: m.typ.map(|t| t.to_string()).unwrap_or_default(),
                source: m.source.unwrap_or_default(),
                destination: m.destination.unwrap_or_default(),
                read_write: m.rw.unwrap_or(true),
            })
            .collect(),
        env: config.env.unwrap_or_default(),
        labels,
        networks,
        port_bindings,
    }
}

fn stats_from(s: Stats) -> model::ResourceStats {
    model::ResourceStats {
        cpu_total: s.cpu_stats.cpu_usage.total_usage,
        cpu_system: s.cpu_stats.system_cpu_usage.unwrap_or(0),
        precpu_total: s.precpu_stats.cpu_usage.total_usage,
        precpu_system: s.precpu_stats.system_cpu_usage.unwrap_or(0),
        online_cpus: s.cpu_stats.online_cpus.unwrap_or(0),
        mem_usage: s.memory_stats.usage.unwrap_or(0),
        mem_limit: s.memory_stats.limit.unwrap_or(0),
        pids: s.pids_stats.current.unwrap_or(0),
    }
}
