//! Tagging operations.

use crate::domain::macros::{operation, shape};
use crate::model::common::{Filter, Tag};
use crate::model::enums::ResourceType;
use crate::utils::error::Result;
use crate::utils::validation::{validate_max_length, validate_non_empty_string, Validate};

const MAX_KEY_LENGTH: usize = 128;
const MAX_VALUE_LENGTH: usize = 256;

shape! {
    pub struct TagDescription {
        key: String => "Key",
        resource_id: String => "ResourceId",
        resource_type: ResourceType => "ResourceType",
        value: String => "Value",
    }
}

shape! {
    pub struct CreateTagsRequest {
        dry_run: bool => "DryRun",
        resources: Vec<String> => "Resources",
        tags: Vec<Tag> => "Tags",
    }
}

shape! {
    pub struct CreateTagsResult {}
}

shape! {
    /// A tag without a value deletes the key whatever its value.
    pub struct DeleteTagsRequest {
        dry_run: bool => "DryRun",
        resources: Vec<String> => "Resources",
        tags: Vec<Tag> => "Tags",
    }
}

shape! {
    pub struct DeleteTagsResult {}
}

shape! {
    pub struct DescribeTagsRequest {
        dry_run: bool => "DryRun",
        filters: Vec<Filter> => "Filters",
        max_results: i32 => "MaxResults",
        next_token: String => "NextToken",
    }
}

shape! {
    pub struct DescribeTagsResult {
        next_token: String => "NextToken",
        tags: Vec<TagDescription> => "Tags",
    }
}

operation! {
    CreateTags: CreateTagsRequest => CreateTagsResult;
    DeleteTags: DeleteTagsRequest => DeleteTagsResult;
    DescribeTags: DescribeTagsRequest => DescribeTagsResult;
}

fn validate_tags(tags: Option<&Vec<Tag>>) -> Result<()> {
    for tag in tags.into_iter().flatten() {
        if let Some(key) = tag.key() {
            validate_non_empty_string("Tags.Key", key)?;
            validate_max_length("Tags.Key", key, MAX_KEY_LENGTH)?;
        }
        if let Some(value) = tag.value() {
            validate_max_length("Tags.Value", value, MAX_VALUE_LENGTH)?;
        }
    }
    Ok(())
}

impl Validate for CreateTagsRequest {
    fn validate(&self) -> Result<()> {
        validate_tags(self.tags.as_ref())
    }
}

impl Validate for DeleteTagsRequest {
    fn validate(&self) -> Result<()> {
        validate_tags(self.tags.as_ref())
    }
}
