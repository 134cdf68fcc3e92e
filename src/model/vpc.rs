//! VPC, subnet and ClassicLink shapes.

use crate::domain::macros::{operation, shape};
use crate::model::common::{Filter, Tag, TagSpecification};
use crate::model::enums::{SubnetState, Tenancy, VpcState};
use crate::utils::error::Result;
use crate::utils::validation::{validate_resource_id, validate_resource_ids, Validate};

shape! {
    pub struct Vpc {
        cidr_block: String => "CidrBlock",
        dhcp_options_id: String => "DhcpOptionsId",
        state: VpcState => "State",
        vpc_id: String => "VpcId",
        owner_id: String => "OwnerId",
        instance_tenancy: Tenancy => "InstanceTenancy",
        is_default: bool => "IsDefault",
        tags: Vec<Tag> => "Tags",
    }
}

shape! {
    pub struct Subnet {
        availability_zone: String => "AvailabilityZone",
        available_ip_address_count: i32 => "AvailableIpAddressCount",
        cidr_block: String => "CidrBlock",
        default_for_az: bool => "DefaultForAz",
        map_public_ip_on_launch: bool => "MapPublicIpOnLaunch",
        state: SubnetState => "State",
        subnet_id: String => "SubnetId",
        vpc_id: String => "VpcId",
        owner_id: String => "OwnerId",
        tags: Vec<Tag> => "Tags",
    }
}

shape! {
    /// ClassicLink status of a VPC.
    pub struct VpcClassicLink {
        classic_link_enabled: bool => "ClassicLinkEnabled",
        tags: Vec<Tag> => "Tags",
        vpc_id: String => "VpcId",
    }
}

shape! {
    pub struct CreateVpcRequest {
        cidr_block: String => "CidrBlock",
        amazon_provided_ipv6_cidr_block: bool => "AmazonProvidedIpv6CidrBlock",
        dry_run: bool => "DryRun",
        instance_tenancy: Tenancy => "InstanceTenancy",
        tag_specifications: Vec<TagSpecification> => "TagSpecifications",
    }
}

shape! {
    pub struct CreateVpcResult {
        vpc: Vpc => "Vpc",
    }
}

shape! {
    pub struct DescribeVpcsRequest {
        filters: Vec<Filter> => "Filters",
        vpc_ids: Vec<String> => "VpcIds",
        dry_run: bool => "DryRun",
        next_token: String => "NextToken",
        max_results: i32 => "MaxResults",
    }
}

shape! {
    pub struct DescribeVpcsResult {
        vpcs: Vec<Vpc> => "Vpcs",
        next_token: String => "NextToken",
    }
}

shape! {
    pub struct DeleteVpcRequest {
        vpc_id: String => "VpcId",
        dry_run: bool => "DryRun",
    }
}

shape! {
    pub struct DeleteVpcResult {}
}

shape! {
    pub struct CreateSubnetRequest {
        availability_zone: String => "AvailabilityZone",
        cidr_block: String => "CidrBlock",
        vpc_id: String => "VpcId",
        dry_run: bool => "DryRun",
        tag_specifications: Vec<TagSpecification> => "TagSpecifications",
    }
}

shape! {
    pub struct CreateSubnetResult {
        subnet: Subnet => "Subnet",
    }
}

shape! {
    pub struct DescribeSubnetsRequest {
        filters: Vec<Filter> => "Filters",
        subnet_ids: Vec<String> => "SubnetIds",
        dry_run: bool => "DryRun",
        next_token: String => "NextToken",
        max_results: i32 => "MaxResults",
    }
}

shape! {
    pub struct DescribeSubnetsResult {
        subnets: Vec<Subnet> => "Subnets",
        next_token: String => "NextToken",
    }
}

shape! {
    pub struct EnableVpcClassicLinkRequest {
        dry_run: bool => "DryRun",
        vpc_id: String => "VpcId",
    }
}

shape! {
    pub struct EnableVpcClassicLinkResult {
        /// `true` when the request succeeded.
        return_value: bool => "Return",
    }
}

shape! {
    pub struct DisableVpcClassicLinkRequest {
        dry_run: bool => "DryRun",
        vpc_id: String => "VpcId",
    }
}

shape! {
    pub struct DisableVpcClassicLinkResult {
        /// `true` when the request succeeded.
        return_value: bool => "Return",
    }
}

shape! {
    pub struct DescribeVpcClassicLinkRequest {
        filters: Vec<Filter> => "Filters",
        dry_run: bool => "DryRun",
        vpc_ids: Vec<String> => "VpcIds",
    }
}

shape! {
    pub struct DescribeVpcClassicLinkResult {
        vpcs: Vec<VpcClassicLink> => "Vpcs",
    }
}

operation! {
    CreateVpc: CreateVpcRequest => CreateVpcResult;
    DescribeVpcs: DescribeVpcsRequest => DescribeVpcsResult;
    DeleteVpc: DeleteVpcRequest => DeleteVpcResult;
    CreateSubnet: CreateSubnetRequest => CreateSubnetResult;
    DescribeSubnets: DescribeSubnetsRequest => DescribeSubnetsResult;
    EnableVpcClassicLink: EnableVpcClassicLinkRequest => EnableVpcClassicLinkResult;
    DisableVpcClassicLink: DisableVpcClassicLinkRequest => DisableVpcClassicLinkResult;
    DescribeVpcClassicLink: DescribeVpcClassicLinkRequest => DescribeVpcClassicLinkResult;
}

macro_rules! validate_vpc_id {
    ($($request:ty),+) => {
        $(
            impl Validate for $request {
                fn validate(&self) -> Result<()> {
                    match &self.vpc_id {
                        Some(vpc_id) => validate_resource_id("VpcId", vpc_id, "vpc"),
                        None => Ok(()),
                    }
                }
            }
        )+
    };
}

validate_vpc_id!(
    EnableVpcClassicLinkRequest,
    DisableVpcClassicLinkRequest,
    DeleteVpcRequest,
    CreateSubnetRequest
);

impl Validate for DescribeVpcClassicLinkRequest {
    fn validate(&self) -> Result<()> {
        match &self.vpc_ids {
            Some(vpc_ids) => validate_resource_ids("VpcIds", vpc_ids, "vpc"),
            None => Ok(()),
        }
    }
}
