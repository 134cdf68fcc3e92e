use ec2_model::catalog;
use ec2_model::model::{
    ArchitectureValues, AttachmentStatus, DeviceType, HypervisorType, InstanceStateName,
    InstanceType, MonitoringState, PlatformValues, ResourceType, ShutdownBehavior, SubnetState,
    Tenancy, VirtualizationType, VolumeAttachmentState, VolumeState, VolumeType, VpcState,
};
use ec2_model::{ModelError, WireEnum};
use rstest::rstest;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::str::FromStr;

#[test]
fn every_registered_enum_round_trips_its_values() {
    for entry in catalog::enums() {
        assert!(!entry.values.is_empty(), "{} has no values", entry.name);
        for value in entry.values {
            assert_eq!(entry.parse(value).unwrap(), *value, "{}", entry.name);
        }
    }
}

#[test]
fn every_registered_enum_rejects_empty_and_unknown() {
    for entry in catalog::enums() {
        assert!(matches!(
            entry.parse(""),
            Err(ModelError::EmptyEnumValue { .. })
        ));
        assert!(matches!(
            entry.parse("definitely-not-a-value"),
            Err(ModelError::UnknownEnumValue { .. })
        ));
    }
}

fn assert_round_trip<E>()
where
    E: WireEnum
        + FromStr<Err = ModelError>
        + for<'a> TryFrom<&'a str, Error = ModelError>
        + Serialize
        + DeserializeOwned,
{
    assert_eq!(E::variants().len(), E::VALUES.len());
    for (variant, value) in E::variants().iter().zip(E::VALUES) {
        assert_eq!(variant.as_str(), *value);
        assert_eq!(E::from_value(value).unwrap(), *variant);
        assert_eq!(variant.to_string(), *value);
        assert_eq!(value.parse::<E>().unwrap(), *variant);
        assert_eq!(E::try_from(*value).unwrap(), *variant);

        let json = serde_json::to_string(variant).unwrap();
        assert_eq!(json, format!("\"{}\"", value));
        assert_eq!(serde_json::from_str::<E>(&json).unwrap(), *variant);
    }
    assert!(E::from_optional_value(None).is_err());
    assert!(E::from_optional_value(Some("")).is_err());
    assert!(matches!(
        "".parse::<E>(),
        Err(ModelError::EmptyEnumValue { .. })
    ));
    assert!(matches!(
        E::try_from("definitely-not-a-value"),
        Err(ModelError::UnknownEnumValue { .. })
    ));
}

#[test]
fn typed_round_trips() {
    assert_round_trip::<InstanceStateName>();
    assert_round_trip::<InstanceType>();
    assert_round_trip::<ArchitectureValues>();
    assert_round_trip::<PlatformValues>();
    assert_round_trip::<Tenancy>();
    assert_round_trip::<VpcState>();
    assert_round_trip::<SubnetState>();
    assert_round_trip::<VolumeType>();
    assert_round_trip::<VolumeState>();
    assert_round_trip::<VolumeAttachmentState>();
    assert_round_trip::<AttachmentStatus>();
    assert_round_trip::<ResourceType>();
    assert_round_trip::<MonitoringState>();
    assert_round_trip::<DeviceType>();
    assert_round_trip::<VirtualizationType>();
    assert_round_trip::<HypervisorType>();
    assert_round_trip::<ShutdownBehavior>();
}

#[test]
fn variant_named_error_parses() {
    assert_eq!(VolumeState::try_from("error").unwrap(), VolumeState::Error);
    assert_eq!("error".parse::<VolumeState>().unwrap(), VolumeState::Error);
    assert_eq!(VolumeState::Error.to_string(), "error");
}

#[rstest]
#[case("shutting-down", InstanceStateName::ShuttingDown)]
#[case("running", InstanceStateName::Running)]
#[case("stopped", InstanceStateName::Stopped)]
fn instance_state_parse(#[case] input: &str, #[case] expected: InstanceStateName) {
    assert_eq!(InstanceStateName::from_value(input).unwrap(), expected);
    let parsed: InstanceStateName = input.parse().unwrap();
    assert_eq!(parsed, expected);
    assert_eq!(InstanceStateName::try_from(input).unwrap(), expected);
}

#[rstest]
#[case("Running")]
#[case(" running")]
#[case("running ")]
#[case("shutting_down")]
fn instance_state_rejects_near_misses(#[case] input: &str) {
    let err = InstanceStateName::from_value(input).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("InstanceStateName"));
}

#[test]
fn serde_uses_wire_strings() {
    let json = serde_json::to_string(&VolumeState::InUse).unwrap();
    assert_eq!(json, "\"in-use\"");

    let parsed: VolumeType = serde_json::from_str("\"gp3\"").unwrap();
    assert_eq!(parsed, VolumeType::Gp3);

    let err = serde_json::from_str::<VolumeType>("\"gp9\"").unwrap_err();
    assert!(err.to_string().contains("gp9"));
}
