//! Container data model
//!
//! Plain owned snapshots of what the runtime gateway reports. Summaries are
//! replaced wholesale on every list fetch; inspection and stats belong to the
//! detail view and are torn down when it closes.

pub type ContainerId = String;

/// Lifecycle state of a container as reported by the daemon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerState {
    Created,
    Running,
    Paused,
    Restarting,
    Exited,
    Dead,
    Unknown,
}

impl ContainerState {
    pub fn parse(s: &str) -> Self {
        match s {
            "created" => ContainerState::Created,
            "running" => ContainerState::Running,
            "paused" => ContainerState::Paused,
            "restarting" => ContainerState::Restarting,
            "exited" => ContainerState::Exited,
            "dead" => ContainerState::Dead,
            _ => ContainerState::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContainerState::Created => "created",
            ContainerState::Running => "running",
            ContainerState::Paused => "paused",
            ContainerState::Restarting => "restarting",
            ContainerState::Exited => "exited",
            ContainerState::Dead => "dead",
            ContainerState::Unknown => "unknown",
        }
    }
}

/// One published port entry from a container summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortMapping {
    pub container_port: u16,
    /// Port published on the host, if any.
    pub host_port: Option<u16>,
}

impl PortMapping {
    /// Display key: `host:container` when published, else just the
    /// container port. Duplicate keys collapse in the list view.
    pub fn key(&self) -> String {
        match self.host_port {
            Some(host) => format!("{}:{}", host, self.container_port),
            None => format!("{}", self.container_port),
        }
    }
}

/// One row of the container inventory.
#[derive(Clone, Debug)]
pub struct ContainerSummary {
    pub id: ContainerId,
    pub name: String,
    pub image: String,
    pub state: ContainerState,
    /// Human status text from the daemon, e.g. "Up 3 days".
    pub status: String,
    pub ports: Vec<PortMapping>,
}

#[derive(Clone, Debug)]
pub struct MountEntry {
    pub kind: String,
    pub source: String,
    pub destination: String,
    pub read_write: bool,
}

#[derive(Clone, Debug)]
pub struct NetworkAttachment {
    pub name: String,
    pub ip: String,
    pub gateway: String,
}

/// Full descriptor of one container, owned by the detail view.
#[derive(Clone, Debug)]
pub struct ContainerInspection {
    pub id: ContainerId,
    /// Display name with the daemon's leading slash already stripped.
    pub name: String,
    pub image: String,
    pub state: ContainerState,
    /// Raw RFC 3339 timestamps; re-rendered at display time.
    pub created_at: String,
    pub started_at: String,
    pub restart_policy: String,
    pub restart_count: i64,
    pub platform: String,
    pub mounts: Vec<MountEntry>,
    pub env: Vec<String>,
    pub labels: Vec<(String, String)>,
    pub networks: Vec<NetworkAttachment>,
    /// De-duplicated `hostPort:containerPort` bindings, first-seen order.
    pub port_bindings: Vec<String>,
}

impl ContainerInspection {
    pub fn short_id(&self) -> &str {
        if self.id.len() > 12 { &self.id[..12] } else { &self.id }
    }
}

/// Point-in-time resource sample. Absent entirely when the container is not
/// running or the stats call fails; absence is not an error.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResourceStats {
    pub cpu_total: u64,
    pub cpu_system: u64,
    pub precpu_total: u64,
    pub precpu_system: u64,
    pub online_cpus: u64,
    pub mem_usage: u64,
    pub mem_limit: u64,
    pub pids: u64,
}

impl ResourceStats {
    /// CPU usage percentage from the two counter samples. Zero when either
    /// delta is non-positive (fresh container, clock skew, missing sample).
    pub fn cpu_percent(&self) -> f64 {
        let cpu_delta = self.cpu_total as f64 - self.precpu_total as f64;
        let system_delta = self.cpu_system as f64 - self.precpu_system as f64;
        if system_delta > 0.0 && cpu_delta > 0.0 {
            (cpu_delta / system_delta) * self.online_cpus as f64 * 100.0
        } else {
            0.0
        }
    }

    pub fn mem_percent(&self) -> f64 {
        if self.mem_limit > 0 {
            self.mem_usage as f64 / self.mem_limit as f64 * 100.0
        } else {
            0.0
        }
    }
}
