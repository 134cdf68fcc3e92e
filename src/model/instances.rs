//! Instance shapes and the instance lifecycle operations.

use chrono::{DateTime, Utc};

use crate::domain::macros::{operation, shape};
use crate::model::common::{Filter, GroupIdentifier, StateReason, Tag, TagSpecification};
use crate::model::enums::{
    ArchitectureValues, AttachmentStatus, DeviceType, HypervisorType, InstanceStateName,
    InstanceType, MonitoringState, PlatformValues, ShutdownBehavior, Tenancy, VirtualizationType,
    VolumeType,
};
use crate::utils::error::{ModelError, Result};
use crate::utils::validation::{validate_range, validate_resource_ids, Validate};

shape! {
    pub struct InstanceState {
        /// 16-bit state code; the low byte matches [`InstanceStateName::code`].
        code: i32 => "Code",
        name: InstanceStateName => "Name",
    }
}

impl From<InstanceStateName> for InstanceState {
    fn from(name: InstanceStateName) -> Self {
        Self::new().with_code(name.code()).with_name(name)
    }
}

shape! {
    pub struct Placement {
        availability_zone: String => "AvailabilityZone",
        group_name: String => "GroupName",
        host_id: String => "HostId",
        tenancy: Tenancy => "Tenancy",
    }
}

shape! {
    pub struct Monitoring {
        state: MonitoringState => "State",
    }
}

shape! {
    pub struct EbsInstanceBlockDevice {
        attach_time: DateTime<Utc> => "AttachTime",
        delete_on_termination: bool => "DeleteOnTermination",
        status: AttachmentStatus => "Status",
        volume_id: String => "VolumeId",
    }
}

shape! {
    pub struct InstanceBlockDeviceMapping {
        device_name: String => "DeviceName",
        ebs: EbsInstanceBlockDevice => "Ebs",
    }
}

shape! {
    /// EBS settings for a volume created at launch.
    pub struct EbsBlockDevice {
        delete_on_termination: bool => "DeleteOnTermination",
        iops: i32 => "Iops",
        snapshot_id: String => "SnapshotId",
        volume_size: i32 => "VolumeSize",
        volume_type: VolumeType => "VolumeType",
        encrypted: bool => "Encrypted",
    }
}

shape! {
    pub struct BlockDeviceMapping {
        device_name: String => "DeviceName",
        virtual_name: String => "VirtualName",
        ebs: EbsBlockDevice => "Ebs",
        no_device: String => "NoDevice",
    }
}

shape! {
    /// A launched instance as reported by EC2.
    pub struct Instance {
        ami_launch_index: i32 => "AmiLaunchIndex",
        image_id: String => "ImageId",
        instance_id: String => "InstanceId",
        instance_type: InstanceType => "InstanceType",
        kernel_id: String => "KernelId",
        key_name: String => "KeyName",
        launch_time: DateTime<Utc> => "LaunchTime",
        monitoring: Monitoring => "Monitoring",
        placement: Placement => "Placement",
        platform: PlatformValues => "Platform",
        private_dns_name: String => "PrivateDnsName",
        private_ip_address: String => "PrivateIpAddress",
        public_dns_name: String => "PublicDnsName",
        public_ip_address: String => "PublicIpAddress",
        state: InstanceState => "State",
        state_transition_reason: String => "StateTransitionReason",
        subnet_id: String => "SubnetId",
        vpc_id: String => "VpcId",
        architecture: ArchitectureValues => "Architecture",
        block_device_mappings: Vec<InstanceBlockDeviceMapping> => "BlockDeviceMappings",
        ebs_optimized: bool => "EbsOptimized",
        hypervisor: HypervisorType => "Hypervisor",
        root_device_name: String => "RootDeviceName",
        root_device_type: DeviceType => "RootDeviceType",
        security_groups: Vec<GroupIdentifier> => "SecurityGroups",
        source_dest_check: bool => "SourceDestCheck",
        state_reason: StateReason => "StateReason",
        tags: Vec<Tag> => "Tags",
        virtualization_type: VirtualizationType => "VirtualizationType",
    }
}

shape! {
    /// Instances launched together by one request.
    pub struct Reservation {
        groups: Vec<GroupIdentifier> => "Groups",
        instances: Vec<Instance> => "Instances",
        owner_id: String => "OwnerId",
        requester_id: String => "RequesterId",
        reservation_id: String => "ReservationId",
    }
}

shape! {
    pub struct InstanceStateChange {
        current_state: InstanceState => "CurrentState",
        instance_id: String => "InstanceId",
        previous_state: InstanceState => "PreviousState",
    }
}

shape! {
    pub struct InstanceMonitoring {
        instance_id: String => "InstanceId",
        monitoring: Monitoring => "Monitoring",
    }
}

shape! {
    pub struct DescribeInstancesRequest {
        filters: Vec<Filter> => "Filters",
        instance_ids: Vec<String> => "InstanceIds",
        dry_run: bool => "DryRun",
        max_results: i32 => "MaxResults",
        next_token: String => "NextToken",
    }
}

shape! {
    pub struct DescribeInstancesResult {
        reservations: Vec<Reservation> => "Reservations",
        next_token: String => "NextToken",
    }
}

impl DescribeInstancesResult {
    /// Every instance across all reservations, in response order.
    pub fn instances(&self) -> impl Iterator<Item = &Instance> {
        self.reservations
            .iter()
            .flatten()
            .filter_map(Reservation::instances)
            .flatten()
    }
}

shape! {
    pub struct RunInstancesRequest {
        block_device_mappings: Vec<BlockDeviceMapping> => "BlockDeviceMappings",
        image_id: String => "ImageId",
        instance_type: InstanceType => "InstanceType",
        kernel_id: String => "KernelId",
        key_name: String => "KeyName",
        max_count: i32 => "MaxCount",
        min_count: i32 => "MinCount",
        monitoring: Monitoring => "Monitoring",
        placement: Placement => "Placement",
        security_group_ids: Vec<String> => "SecurityGroupIds",
        security_groups: Vec<String> => "SecurityGroups",
        subnet_id: String => "SubnetId",
        user_data: String => "UserData",
        client_token: String => "ClientToken",
        disable_api_termination: bool => "DisableApiTermination",
        dry_run: bool => "DryRun",
        ebs_optimized: bool => "EbsOptimized",
        instance_initiated_shutdown_behavior: ShutdownBehavior => "InstanceInitiatedShutdownBehavior",
        private_ip_address: String => "PrivateIpAddress",
        tag_specifications: Vec<TagSpecification> => "TagSpecifications",
    }
}

shape! {
    pub struct RunInstancesResult {
        reservation: Reservation => "Reservation",
    }
}

shape! {
    pub struct StartInstancesRequest {
        instance_ids: Vec<String> => "InstanceIds",
        additional_info: String => "AdditionalInfo",
        dry_run: bool => "DryRun",
    }
}

shape! {
    pub struct StartInstancesResult {
        starting_instances: Vec<InstanceStateChange> => "StartingInstances",
    }
}

shape! {
    pub struct StopInstancesRequest {
        instance_ids: Vec<String> => "InstanceIds",
        hibernate: bool => "Hibernate",
        dry_run: bool => "DryRun",
        force: bool => "Force",
    }
}

shape! {
    pub struct StopInstancesResult {
        stopping_instances: Vec<InstanceStateChange> => "StoppingInstances",
    }
}

shape! {
    pub struct TerminateInstancesRequest {
        instance_ids: Vec<String> => "InstanceIds",
        dry_run: bool => "DryRun",
    }
}

shape! {
    pub struct TerminateInstancesResult {
        terminating_instances: Vec<InstanceStateChange> => "TerminatingInstances",
    }
}

shape! {
    pub struct RebootInstancesRequest {
        instance_ids: Vec<String> => "InstanceIds",
        dry_run: bool => "DryRun",
    }
}

shape! {
    pub struct RebootInstancesResult {}
}

shape! {
    pub struct MonitorInstancesRequest {
        instance_ids: Vec<String> => "InstanceIds",
        dry_run: bool => "DryRun",
    }
}

shape! {
    pub struct MonitorInstancesResult {
        instance_monitorings: Vec<InstanceMonitoring> => "InstanceMonitorings",
    }
}

operation! {
    DescribeInstances: DescribeInstancesRequest => DescribeInstancesResult;
    RunInstances: RunInstancesRequest => RunInstancesResult;
    StartInstances: StartInstancesRequest => StartInstancesResult;
    StopInstances: StopInstancesRequest => StopInstancesResult;
    TerminateInstances: TerminateInstancesRequest => TerminateInstancesResult;
    RebootInstances: RebootInstancesRequest => RebootInstancesResult;
    MonitorInstances: MonitorInstancesRequest => MonitorInstancesResult;
}

impl Validate for DescribeInstancesRequest {
    fn validate(&self) -> Result<()> {
        if let Some(max_results) = self.max_results {
            validate_range("MaxResults", max_results, 5, 1000)?;
        }
        if let Some(instance_ids) = &self.instance_ids {
            validate_resource_ids("InstanceIds", instance_ids, "i")?;
            if self.max_results.is_some() && !instance_ids.is_empty() {
                return Err(ModelError::invalid_argument(
                    "MaxResults",
                    self.max_results.unwrap_or_default().to_string(),
                    "MaxResults cannot be combined with InstanceIds",
                ));
            }
        }
        Ok(())
    }
}

macro_rules! validate_instance_ids {
    ($($request:ty),+) => {
        $(
            impl Validate for $request {
                fn validate(&self) -> Result<()> {
                    match &self.instance_ids {
                        Some(instance_ids) => validate_resource_ids("InstanceIds", instance_ids, "i"),
                        None => Ok(()),
                    }
                }
            }
        )+
    };
}

validate_instance_ids!(
    StartInstancesRequest,
    StopInstancesRequest,
    TerminateInstancesRequest,
    RebootInstancesRequest
);
