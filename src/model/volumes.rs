//! EBS volume shapes.

use chrono::{DateTime, Utc};

use crate::domain::macros::{operation, shape};
use crate::model::common::{Filter, Tag, TagSpecification};
use crate::model::enums::{VolumeAttachmentState, VolumeState, VolumeType};

shape! {
    pub struct VolumeAttachment {
        attach_time: DateTime<Utc> => "AttachTime",
        device: String => "Device",
        instance_id: String => "InstanceId",
        state: VolumeAttachmentState => "State",
        volume_id: String => "VolumeId",
        delete_on_termination: bool => "DeleteOnTermination",
    }
}

shape! {
    pub struct Volume {
        attachments: Vec<VolumeAttachment> => "Attachments",
        availability_zone: String => "AvailabilityZone",
        create_time: DateTime<Utc> => "CreateTime",
        encrypted: bool => "Encrypted",
        kms_key_id: String => "KmsKeyId",
        size: i32 => "Size",
        snapshot_id: String => "SnapshotId",
        state: VolumeState => "State",
        volume_id: String => "VolumeId",
        iops: i32 => "Iops",
        tags: Vec<Tag> => "Tags",
        volume_type: VolumeType => "VolumeType",
        throughput: i32 => "Throughput",
    }
}

shape! {
    pub struct CreateVolumeRequest {
        availability_zone: String => "AvailabilityZone",
        encrypted: bool => "Encrypted",
        iops: i32 => "Iops",
        kms_key_id: String => "KmsKeyId",
        size: i32 => "Size",
        snapshot_id: String => "SnapshotId",
        volume_type: VolumeType => "VolumeType",
        throughput: i32 => "Throughput",
        dry_run: bool => "DryRun",
        tag_specifications: Vec<TagSpecification> => "TagSpecifications",
    }
}

shape! {
    pub struct CreateVolumeResult {
        volume: Volume => "Volume",
    }
}

shape! {
    pub struct DescribeVolumesRequest {
        filters: Vec<Filter> => "Filters",
        volume_ids: Vec<String> => "VolumeIds",
        dry_run: bool => "DryRun",
        max_results: i32 => "MaxResults",
        next_token: String => "NextToken",
    }
}

shape! {
    pub struct DescribeVolumesResult {
        volumes: Vec<Volume> => "Volumes",
        next_token: String => "NextToken",
    }
}

shape! {
    pub struct AttachVolumeRequest {
        device: String => "Device",
        instance_id: String => "InstanceId",
        volume_id: String => "VolumeId",
        dry_run: bool => "DryRun",
    }
}

shape! {
    pub struct AttachVolumeResult {
        attachment: VolumeAttachment => "Attachment",
    }
}

shape! {
    pub struct DetachVolumeRequest {
        device: String => "Device",
        force: bool => "Force",
        instance_id: String => "InstanceId",
        volume_id: String => "VolumeId",
        dry_run: bool => "DryRun",
    }
}

shape! {
    pub struct DetachVolumeResult {
        attachment: VolumeAttachment => "Attachment",
    }
}

shape! {
    pub struct DeleteVolumeRequest {
        volume_id: String => "VolumeId",
        dry_run: bool => "DryRun",
    }
}

shape! {
    pub struct DeleteVolumeResult {}
}

operation! {
    CreateVolume: CreateVolumeRequest => CreateVolumeResult;
    DescribeVolumes: DescribeVolumesRequest => DescribeVolumesResult;
    AttachVolume: AttachVolumeRequest => AttachVolumeResult;
    DetachVolume: DetachVolumeRequest => DetachVolumeResult;
    DeleteVolume: DeleteVolumeRequest => DeleteVolumeResult;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_attachment_renders_timestamp() {
        let attach_time = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let attachment = VolumeAttachment::new()
            .with_attach_time(attach_time)
            .with_device("/dev/sdf")
            .with_state(VolumeAttachmentState::Attached);
        assert_eq!(
            attachment.to_string(),
            "{AttachTime: 2024-03-01T12:30:00Z,Device: /dev/sdf,State: attached}"
        );
    }

    #[test]
    fn test_volume_json_round_trip() {
        let json = r#"{
            "VolumeId": "vol-049df61146c4d7901",
            "Size": 8,
            "State": "in-use",
            "VolumeType": "gp3",
            "CreateTime": "2024-03-01T12:30:00Z",
            "Attachments": [{"InstanceId": "i-1234567890abcdef0", "State": "attached"}]
        }"#;

        let volume: Volume = serde_json::from_str(json).unwrap();
        assert_eq!(volume.state(), Some(&VolumeState::InUse));
        assert_eq!(volume.size(), Some(&8));
        assert_eq!(volume.attachments().map(Vec::len), Some(1));

        let encoded = serde_json::to_string(&volume).unwrap();
        let decoded: Volume = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, volume);
    }
}
