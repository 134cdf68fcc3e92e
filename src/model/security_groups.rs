//! Security group shapes.

use crate::domain::macros::{operation, shape};
use crate::model::common::{Filter, Tag, TagSpecification};

shape! {
    pub struct IpRange {
        cidr_ip: String => "CidrIp",
        description: String => "Description",
    }
}

shape! {
    /// A security group referenced from another group's rule.
    pub struct UserIdGroupPair {
        description: String => "Description",
        group_id: String => "GroupId",
        group_name: String => "GroupName",
        user_id: String => "UserId",
        vpc_id: String => "VpcId",
    }
}

shape! {
    /// One ingress or egress rule.
    pub struct IpPermission {
        from_port: i32 => "FromPort",
        /// `tcp`, `udp`, `icmp`, a protocol number, or `-1` for all.
        ip_protocol: String => "IpProtocol",
        ip_ranges: Vec<IpRange> => "IpRanges",
        to_port: i32 => "ToPort",
        user_id_group_pairs: Vec<UserIdGroupPair> => "UserIdGroupPairs",
    }
}

impl IpPermission {
    /// A TCP rule for a single port open to one CIDR block.
    pub fn tcp(port: i32, cidr_ip: impl Into<String>) -> Self {
        Self::new()
            .with_ip_protocol("tcp")
            .with_from_port(port)
            .with_to_port(port)
            .with_ip_ranges([IpRange::new().with_cidr_ip(cidr_ip)])
    }
}

shape! {
    pub struct SecurityGroup {
        description: String => "Description",
        group_name: String => "GroupName",
        ip_permissions: Vec<IpPermission> => "IpPermissions",
        owner_id: String => "OwnerId",
        group_id: String => "GroupId",
        ip_permissions_egress: Vec<IpPermission> => "IpPermissionsEgress",
        tags: Vec<Tag> => "Tags",
        vpc_id: String => "VpcId",
    }
}

shape! {
    pub struct CreateSecurityGroupRequest {
        description: String => "Description",
        group_name: String => "GroupName",
        vpc_id: String => "VpcId",
        tag_specifications: Vec<TagSpecification> => "TagSpecifications",
        dry_run: bool => "DryRun",
    }
}

shape! {
    pub struct CreateSecurityGroupResult {
        group_id: String => "GroupId",
        tags: Vec<Tag> => "Tags",
    }
}

shape! {
    pub struct DescribeSecurityGroupsRequest {
        filters: Vec<Filter> => "Filters",
        group_ids: Vec<String> => "GroupIds",
        group_names: Vec<String> => "GroupNames",
        dry_run: bool => "DryRun",
        next_token: String => "NextToken",
        max_results: i32 => "MaxResults",
    }
}

shape! {
    pub struct DescribeSecurityGroupsResult {
        security_groups: Vec<SecurityGroup> => "SecurityGroups",
        next_token: String => "NextToken",
    }
}

shape! {
    pub struct AuthorizeSecurityGroupIngressRequest {
        cidr_ip: String => "CidrIp",
        from_port: i32 => "FromPort",
        group_id: String => "GroupId",
        group_name: String => "GroupName",
        ip_permissions: Vec<IpPermission> => "IpPermissions",
        ip_protocol: String => "IpProtocol",
        source_security_group_name: String => "SourceSecurityGroupName",
        source_security_group_owner_id: String => "SourceSecurityGroupOwnerId",
        to_port: i32 => "ToPort",
        dry_run: bool => "DryRun",
    }
}

shape! {
    pub struct AuthorizeSecurityGroupIngressResult {
        return_value: bool => "Return",
    }
}

shape! {
    pub struct DeleteSecurityGroupRequest {
        group_id: String => "GroupId",
        group_name: String => "GroupName",
        dry_run: bool => "DryRun",
    }
}

shape! {
    pub struct DeleteSecurityGroupResult {}
}

operation! {
    CreateSecurityGroup: CreateSecurityGroupRequest => CreateSecurityGroupResult;
    DescribeSecurityGroups: DescribeSecurityGroupsRequest => DescribeSecurityGroupsResult;
    AuthorizeSecurityGroupIngress: AuthorizeSecurityGroupIngressRequest => AuthorizeSecurityGroupIngressResult;
    DeleteSecurityGroup: DeleteSecurityGroupRequest => DeleteSecurityGroupResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tcp_permission() {
        let rule = IpPermission::tcp(22, "203.0.113.0/24");
        assert_eq!(
            rule.to_string(),
            "{FromPort: 22,IpProtocol: tcp,IpRanges: [{CidrIp: 203.0.113.0/24}],ToPort: 22}"
        );
    }

    #[test]
    fn test_authorize_request_equality() {
        let build = || {
            AuthorizeSecurityGroupIngressRequest::new()
                .with_group_id("sg-1a2b3c4d")
                .with_ip_permissions([IpPermission::tcp(443, "0.0.0.0/0")])
        };
        assert_eq!(build(), build());
        assert_ne!(build(), build().with_dry_run(true));
    }
}
