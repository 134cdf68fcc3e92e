//! Shapes shared across EC2 service areas.

use crate::domain::macros::shape;
use crate::model::enums::ResourceType;

shape! {
    /// A key/value tag on an EC2 resource.
    pub struct Tag {
        key: String => "Key",
        value: String => "Value",
    }
}

impl Tag {
    pub fn pair(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new().with_key(key).with_value(value)
    }
}

shape! {
    /// A named filter for `Describe*` operations; any listed value matches.
    pub struct Filter {
        name: String => "Name",
        values: Vec<String> => "Values",
    }
}

shape! {
    /// Tags to apply to resources created by a request.
    pub struct TagSpecification {
        resource_type: ResourceType => "ResourceType",
        tags: Vec<Tag> => "Tags",
    }
}

shape! {
    pub struct GroupIdentifier {
        group_name: String => "GroupName",
        group_id: String => "GroupId",
    }
}

shape! {
    /// Why an instance most recently changed state.
    pub struct StateReason {
        code: String => "Code",
        message: String => "Message",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_pair() {
        let tag = Tag::pair("Name", "web-1");
        assert_eq!(tag.to_string(), "{Key: Name,Value: web-1}");
    }

    #[test]
    fn test_filter_renders_list() {
        let filter = Filter::new()
            .with_name("instance-state-name")
            .with_values(vec!["running".to_string(), "stopped".to_string()]);
        assert_eq!(
            filter.to_string(),
            "{Name: instance-state-name,Values: [running, stopped]}"
        );
    }

    #[test]
    fn test_tag_specification() {
        let tag_spec = TagSpecification::new()
            .with_resource_type(ResourceType::Instance)
            .with_tags([Tag::pair("env", "prod")]);
        assert_eq!(
            tag_spec.to_string(),
            "{ResourceType: instance,Tags: [{Key: env,Value: prod}]}"
        );
    }
}
