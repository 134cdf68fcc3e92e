//! Static registry of every enum, shape and operation in the model.

use crate::core::codec::{decode_boxed, DynShape, InputFormat};
use crate::domain::ports::{Ec2Request, Shape, WireEnum};
use crate::model::*;
use crate::utils::error::{ModelError, Result};

pub struct EnumEntry {
    pub name: &'static str,
    pub values: &'static [&'static str],
    canonicalize: fn(&str) -> Result<&'static str>,
}

impl EnumEntry {
    /// Canonical wire string for `value`, or the enum's invalid-argument error.
    pub fn parse(&self, value: &str) -> Result<&'static str> {
        (self.canonicalize)(value)
    }
}

pub struct ShapeEntry {
    pub name: &'static str,
    decode: fn(InputFormat, &str) -> Result<Box<dyn DynShape>>,
}

impl ShapeEntry {
    pub fn decode(&self, format: InputFormat, text: &str) -> Result<Box<dyn DynShape>> {
        (self.decode)(format, text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationEntry {
    pub action: &'static str,
    pub request: &'static str,
    pub result: &'static str,
}

fn canonicalize<E: WireEnum>(value: &str) -> Result<&'static str> {
    E::from_value(value).map(|parsed| parsed.as_str())
}

macro_rules! enum_entries {
    ($($ty:ty),+ $(,)?) => {
        &[$(
            EnumEntry {
                name: <$ty as WireEnum>::NAME,
                values: <$ty as WireEnum>::VALUES,
                canonicalize: canonicalize::<$ty>,
            },
        )+]
    };
}

macro_rules! shape_entries {
    ($($ty:ty),+ $(,)?) => {
        &[$(
            ShapeEntry {
                name: <$ty as Shape>::SHAPE_NAME,
                decode: decode_boxed::<$ty>,
            },
        )+]
    };
}

macro_rules! operation_entries {
    ($($ty:ty),+ $(,)?) => {
        &[$(
            OperationEntry {
                action: <$ty as Ec2Request>::ACTION,
                request: <$ty as Shape>::SHAPE_NAME,
                result: <<$ty as Ec2Request>::Output as Shape>::SHAPE_NAME,
            },
        )+]
    };
}

static ENUMS: &[EnumEntry] = enum_entries![
    ArchitectureValues,
    AttachmentStatus,
    DeviceType,
    HypervisorType,
    InstanceStateName,
    InstanceType,
    MonitoringState,
    PlatformValues,
    ResourceType,
    ShutdownBehavior,
    SubnetState,
    Tenancy,
    VirtualizationType,
    VolumeAttachmentState,
    VolumeState,
    VolumeType,
    VpcState,
];

static SHAPES: &[ShapeEntry] = shape_entries![
    // common
    Tag,
    Filter,
    TagSpecification,
    GroupIdentifier,
    StateReason,
    // instances
    InstanceState,
    Placement,
    Monitoring,
    EbsInstanceBlockDevice,
    InstanceBlockDeviceMapping,
    EbsBlockDevice,
    BlockDeviceMapping,
    Instance,
    Reservation,
    InstanceStateChange,
    InstanceMonitoring,
    DescribeInstancesRequest,
    DescribeInstancesResult,
    RunInstancesRequest,
    RunInstancesResult,
    StartInstancesRequest,
    StartInstancesResult,
    StopInstancesRequest,
    StopInstancesResult,
    TerminateInstancesRequest,
    TerminateInstancesResult,
    RebootInstancesRequest,
    RebootInstancesResult,
    MonitorInstancesRequest,
    MonitorInstancesResult,
    // vpc
    Vpc,
    Subnet,
    VpcClassicLink,
    CreateVpcRequest,
    CreateVpcResult,
    DescribeVpcsRequest,
    DescribeVpcsResult,
    DeleteVpcRequest,
    DeleteVpcResult,
    CreateSubnetRequest,
    CreateSubnetResult,
    DescribeSubnetsRequest,
    DescribeSubnetsResult,
    EnableVpcClassicLinkRequest,
    EnableVpcClassicLinkResult,
    DisableVpcClassicLinkRequest,
    DisableVpcClassicLinkResult,
    DescribeVpcClassicLinkRequest,
    DescribeVpcClassicLinkResult,
    // volumes
    Volume,
    VolumeAttachment,
    CreateVolumeRequest,
    CreateVolumeResult,
    DescribeVolumesRequest,
    DescribeVolumesResult,
    AttachVolumeRequest,
    AttachVolumeResult,
    DetachVolumeRequest,
    DetachVolumeResult,
    DeleteVolumeRequest,
    DeleteVolumeResult,
    // security groups
    IpRange,
    UserIdGroupPair,
    IpPermission,
    SecurityGroup,
    CreateSecurityGroupRequest,
    CreateSecurityGroupResult,
    DescribeSecurityGroupsRequest,
    DescribeSecurityGroupsResult,
    AuthorizeSecurityGroupIngressRequest,
    AuthorizeSecurityGroupIngressResult,
    DeleteSecurityGroupRequest,
    DeleteSecurityGroupResult,
    // tags
    TagDescription,
    CreateTagsRequest,
    CreateTagsResult,
    DeleteTagsRequest,
    DeleteTagsResult,
    DescribeTagsRequest,
    DescribeTagsResult,
];

static OPERATIONS: &[OperationEntry] = operation_entries![
    AttachVolumeRequest,
    AuthorizeSecurityGroupIngressRequest,
    CreateSecurityGroupRequest,
    CreateSubnetRequest,
    CreateTagsRequest,
    CreateVolumeRequest,
    CreateVpcRequest,
    DeleteSecurityGroupRequest,
    DeleteTagsRequest,
    DeleteVolumeRequest,
    DeleteVpcRequest,
    DescribeInstancesRequest,
    DescribeSecurityGroupsRequest,
    DescribeSubnetsRequest,
    DescribeTagsRequest,
    DescribeVolumesRequest,
    DescribeVpcClassicLinkRequest,
    DescribeVpcsRequest,
    DetachVolumeRequest,
    DisableVpcClassicLinkRequest,
    EnableVpcClassicLinkRequest,
    MonitorInstancesRequest,
    RebootInstancesRequest,
    RunInstancesRequest,
    StartInstancesRequest,
    StopInstancesRequest,
    TerminateInstancesRequest,
];

pub fn enums() -> &'static [EnumEntry] {
    ENUMS
}

pub fn shapes() -> &'static [ShapeEntry] {
    SHAPES
}

pub fn operations() -> &'static [OperationEntry] {
    OPERATIONS
}

pub fn find_enum(name: &str) -> Result<&'static EnumEntry> {
    ENUMS
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| ModelError::UnknownEnum {
            name: name.to_string(),
        })
}

pub fn find_shape(name: &str) -> Result<&'static ShapeEntry> {
    SHAPES
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| ModelError::UnknownShape {
            name: name.to_string(),
        })
}

pub fn find_operation(action: &str) -> Option<&'static OperationEntry> {
    OPERATIONS.iter().find(|entry| entry.action == action)
}

/// Canonical wire string of `value` for the enum called `name`.
pub fn parse_enum(name: &str, value: &str) -> Result<&'static str> {
    find_enum(name)?.parse(value)
}

/// Decodes text into the shape called `name`.
pub fn decode_shape(name: &str, format: InputFormat, text: &str) -> Result<Box<dyn DynShape>> {
    find_shape(name)?.decode(format, text)
}
