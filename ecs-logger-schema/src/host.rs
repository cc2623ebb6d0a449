use std::collections::BTreeMap;

field_set! {
    /// The `agent.*` field set.
    pub struct Agent {
        /// Ephemeral identifier of this agent.
        pub ephemeral_id: String,
        /// Unique identifier of this agent.
        pub id: String,
        /// Custom name of the agent.
        pub name: String,
        /// Type of the agent, e.g. `filebeat`.
        pub r#type: String,
        /// Version of the agent.
        pub version: String,
    }

    /// The `cloud.*` field set.
    pub struct Cloud {
        /// The cloud account or organization.
        pub account: CloudAccount,
        /// Availability zone in which this host is running.
        pub availability_zone: String,
        /// Instance of the machine.
        pub instance: CloudInstance,
        /// Machine type of the host.
        pub machine: CloudMachine,
        /// Name of the cloud provider, e.g. `aws`.
        pub provider: String,
        /// Region in which this host is running.
        pub region: String,
    }

    /// The `cloud.account.*` fields.
    pub struct CloudAccount {
        /// Cloud account ID.
        pub id: String,
        /// Cloud account name.
        pub name: String,
    }

    /// The `cloud.instance.*` fields.
    pub struct CloudInstance {
        /// Instance ID of the host machine.
        pub id: String,
        /// Instance name of the host machine.
        pub name: String,
    }

    /// The `cloud.machine.*` fields.
    pub struct CloudMachine {
        /// Machine type of the host machine.
        pub r#type: String,
    }

    /// The `container.*` field set.
    pub struct Container {
        /// Unique container id.
        pub id: String,
        /// Container image.
        pub image: ContainerImage,
        /// Image labels.
        pub labels: BTreeMap<String, String>,
        /// Container name.
        pub name: String,
        /// Runtime managing this container, e.g. `docker`.
        pub runtime: String,
    }

    /// The `container.image.*` fields.
    pub struct ContainerImage {
        /// Name of the image the container was built on.
        pub name: String,
        /// Container image tags.
        pub tag: Vec<String>,
    }

    /// The `file.*` field set.
    pub struct File {
        /// Directory where the file is located.
        pub directory: String,
        /// File extension, excluding the leading dot.
        pub extension: String,
        /// Name of the file including the extension.
        pub name: String,
        /// Full path to the file.
        pub path: String,
        /// File size in bytes.
        pub size: u64,
        /// File type: `file`, `dir` or `symlink`.
        pub r#type: String,
    }

    /// The `host.*` field set.
    pub struct Host {
        /// Operating system architecture.
        pub architecture: String,
        /// Name of the domain of which the host is a member.
        pub domain: String,
        /// Hostname of the host.
        pub hostname: String,
        /// Unique host id.
        pub id: String,
        /// Host ip addresses.
        pub ip: Vec<String>,
        /// Host MAC addresses.
        pub mac: Vec<String>,
        /// Name of the host.
        pub name: String,
        /// Operating system of the host.
        pub os: HostOs,
        /// Type of host.
        pub r#type: String,
        /// Seconds the host has been up.
        pub uptime: i64,
    }

    /// The `host.os.*` fields.
    pub struct HostOs {
        /// Operating system family, e.g. `debian`.
        pub family: String,
        /// Operating system kernel version.
        pub kernel: String,
        /// Operating system name, without the version.
        pub name: String,
        /// Operating system platform, e.g. `centos`.
        pub platform: String,
        /// Operating system version.
        pub version: String,
    }

    /// The `process.*` field set.
    pub struct Process {
        /// Array of process arguments, starting with the executable.
        pub args: Vec<String>,
        /// Full command line that started the process.
        pub command_line: String,
        /// Absolute path to the process executable.
        pub executable: String,
        /// Exit code of the process, if it exited.
        pub exit_code: i64,
        /// Process name.
        pub name: String,
        /// Process id.
        pub pid: u32,
        /// Time the process started, RFC 3339.
        pub start: String,
        /// Process title.
        pub title: String,
        /// Seconds the process has been up.
        pub uptime: i64,
        /// The working directory of the process.
        pub working_directory: String,
    }
}
