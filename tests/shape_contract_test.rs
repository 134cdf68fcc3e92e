use chrono::{TimeZone, Utc};
use ec2_model::model::{
    DescribeInstancesRequest, Filter, Instance, InstanceState, InstanceStateName, InstanceType,
    Placement, ResourceType, RunInstancesRequest, Tag, TagSpecification, Tenancy,
};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn sample_instance() -> Instance {
    Instance::new()
        .with_instance_id("i-1234567890abcdef0")
        .with_instance_type(InstanceType::T3Micro)
        .with_launch_time(Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap())
        .with_placement(
            Placement::new()
                .with_availability_zone("us-east-1a")
                .with_tenancy(Tenancy::Default),
        )
        .with_state(InstanceState::from(InstanceStateName::Running))
        .with_tags([Tag::pair("Name", "web-1")])
}

#[test]
fn equal_fields_mean_equal_values_and_hashes() {
    let a = sample_instance();
    let b = sample_instance();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn changing_any_field_breaks_equality() {
    let base = sample_instance();
    let variants = vec![
        base.clone().with_instance_id("i-0fedcba0987654321"),
        base.clone().with_instance_type(InstanceType::T3Small),
        base.clone().with_ebs_optimized(false),
        base.clone().with_tags([Tag::pair("Name", "web-2")]),
        base.clone().with_tags(Vec::<Tag>::new()),
        base.clone()
            .with_placement(Placement::new().with_availability_zone("us-east-1b")),
    ];
    for variant in variants {
        assert_ne!(variant, base);
    }

    let mut cleared = base.clone();
    cleared.set_launch_time(None);
    assert_ne!(cleared, base);
}

#[test]
fn with_chain_matches_setters() {
    let chained = RunInstancesRequest::new()
        .with_image_id("ami-0abcdef1234567890")
        .with_instance_type(InstanceType::M5Large)
        .with_min_count(1)
        .with_max_count(2)
        .with_tag_specifications([TagSpecification::new()
            .with_resource_type(ResourceType::Instance)
            .with_tags([Tag::pair("team", "infra")])]);

    let mut assigned = RunInstancesRequest::new();
    assigned.set_image_id(Some("ami-0abcdef1234567890".to_string()));
    assigned.set_instance_type(Some(InstanceType::M5Large));
    assigned.set_min_count(Some(1));
    assigned.set_max_count(Some(2));
    let mut tag_spec = TagSpecification::new();
    tag_spec.set_resource_type(Some(ResourceType::Instance));
    tag_spec.set_tags(Some(vec![Tag::pair("team", "infra")]));
    assigned.set_tag_specifications(Some(vec![tag_spec]));

    assert_eq!(chained, assigned);
    assert_eq!(hash_of(&chained), hash_of(&assigned));
    assert_eq!(chained.to_string(), assigned.to_string());
}

#[test]
fn display_skips_unset_fields_in_declaration_order() {
    // Set out of declaration order on purpose.
    let request = DescribeInstancesRequest::new()
        .with_next_token("abc")
        .with_filters([Filter::new()
            .with_name("tag:Name")
            .with_values(vec!["web-1".to_string()])]);

    assert_eq!(
        request.to_string(),
        "{Filters: [{Name: tag:Name,Values: [web-1]}],NextToken: abc}"
    );
    assert_eq!(DescribeInstancesRequest::new().to_string(), "{}");
}

#[test]
fn display_renders_nested_shapes_and_timestamps() {
    assert_eq!(
        sample_instance().to_string(),
        "{InstanceId: i-1234567890abcdef0,InstanceType: t3.micro,\
LaunchTime: 2024-01-15T08:00:00Z,\
Placement: {AvailabilityZone: us-east-1a,Tenancy: default},\
State: {Code: 16,Name: running},Tags: [{Key: Name,Value: web-1}]}"
    );
}

#[test]
fn empty_list_is_distinct_from_unset() {
    let empty = Filter::new().with_values(Vec::<String>::new());
    assert_eq!(empty.to_string(), "{Values: []}");
    assert_ne!(empty, Filter::new());
}

#[test]
fn json_round_trip_preserves_equality() {
    let instance = sample_instance();
    let json = serde_json::to_value(&instance).unwrap();

    assert_eq!(json["InstanceType"], "t3.micro");
    assert_eq!(json["State"]["Name"], "running");
    assert!(json.get("KernelId").is_none());

    let decoded: Instance = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, instance);
}
