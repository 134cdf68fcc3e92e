//! Closed EC2 string enumerations.

use crate::domain::macros::wire_enum;

wire_enum! {
    /// Lifecycle state of an instance.
    pub enum InstanceStateName {
        Pending => "pending",
        Running => "running",
        ShuttingDown => "shutting-down",
        Terminated => "terminated",
        Stopping => "stopping",
        Stopped => "stopped",
    }
}

impl InstanceStateName {
    /// Low byte of the numeric state code EC2 reports alongside the name.
    pub fn code(&self) -> i32 {
        match self {
            Self::Pending => 0,
            Self::Running => 16,
            Self::ShuttingDown => 32,
            Self::Terminated => 48,
            Self::Stopping => 64,
            Self::Stopped => 80,
        }
    }
}

wire_enum! {
    pub enum InstanceType {
        T1Micro => "t1.micro",
        T2Nano => "t2.nano",
        T2Micro => "t2.micro",
        T2Small => "t2.small",
        T2Medium => "t2.medium",
        T2Large => "t2.large",
        T3Nano => "t3.nano",
        T3Micro => "t3.micro",
        T3Small => "t3.small",
        T3Medium => "t3.medium",
        T3Large => "t3.large",
        T4gMicro => "t4g.micro",
        M4Large => "m4.large",
        M4Xlarge => "m4.xlarge",
        M5Large => "m5.large",
        M5Xlarge => "m5.xlarge",
        M52xlarge => "m5.2xlarge",
        C4Large => "c4.large",
        C5Large => "c5.large",
        C5Xlarge => "c5.xlarge",
        R5Large => "r5.large",
        R5Xlarge => "r5.xlarge",
        I3Large => "i3.large",
        P3_2xlarge => "p3.2xlarge",
        G4dnXlarge => "g4dn.xlarge",
    }
}

wire_enum! {
    pub enum ArchitectureValues {
        I386 => "i386",
        X86_64 => "x86_64",
        Arm64 => "arm64",
    }
}

wire_enum! {
    pub enum PlatformValues {
        Windows => "Windows",
    }
}

wire_enum! {
    /// Placement tenancy of an instance or VPC.
    pub enum Tenancy {
        Default => "default",
        Dedicated => "dedicated",
        Host => "host",
    }
}

wire_enum! {
    pub enum VpcState {
        Pending => "pending",
        Available => "available",
    }
}

wire_enum! {
    pub enum SubnetState {
        Pending => "pending",
        Available => "available",
    }
}

wire_enum! {
    /// EBS volume type.
    pub enum VolumeType {
        Standard => "standard",
        Io1 => "io1",
        Io2 => "io2",
        Gp2 => "gp2",
        Gp3 => "gp3",
        Sc1 => "sc1",
        St1 => "st1",
    }
}

wire_enum! {
    pub enum VolumeState {
        Creating => "creating",
        Available => "available",
        InUse => "in-use",
        Deleting => "deleting",
        Deleted => "deleted",
        Error => "error",
    }
}

wire_enum! {
    pub enum VolumeAttachmentState {
        Attaching => "attaching",
        Attached => "attached",
        Detaching => "detaching",
        Detached => "detached",
        Busy => "busy",
    }
}

wire_enum! {
    pub enum AttachmentStatus {
        Attaching => "attaching",
        Attached => "attached",
        Detaching => "detaching",
        Detached => "detached",
    }
}

wire_enum! {
    /// Resource kinds accepted by tag specifications and tag filters.
    pub enum ResourceType {
        CustomerGateway => "customer-gateway",
        DhcpOptions => "dhcp-options",
        Image => "image",
        Instance => "instance",
        InternetGateway => "internet-gateway",
        NetworkAcl => "network-acl",
        NetworkInterface => "network-interface",
        ReservedInstances => "reserved-instances",
        RouteTable => "route-table",
        Snapshot => "snapshot",
        SpotInstancesRequest => "spot-instances-request",
        Subnet => "subnet",
        SecurityGroup => "security-group",
        Volume => "volume",
        Vpc => "vpc",
        VpnConnection => "vpn-connection",
        VpnGateway => "vpn-gateway",
    }
}

wire_enum! {
    pub enum MonitoringState {
        Disabled => "disabled",
        Disabling => "disabling",
        Enabled => "enabled",
        Pending => "pending",
    }
}

wire_enum! {
    /// Root device storage.
    pub enum DeviceType {
        Ebs => "ebs",
        InstanceStore => "instance-store",
    }
}

wire_enum! {
    pub enum VirtualizationType {
        Hvm => "hvm",
        Paravirtual => "paravirtual",
    }
}

wire_enum! {
    pub enum HypervisorType {
        Ovm => "ovm",
        Xen => "xen",
    }
}

wire_enum! {
    /// What happens when an instance shuts itself down.
    pub enum ShutdownBehavior {
        Stop => "stop",
        Terminate => "terminate",
    }
}
