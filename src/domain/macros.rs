//! Generators for EC2 enums, shapes and request/result bindings.

/// Generates a closed wire-string enumeration.
///
/// Each variant maps to exactly one wire string. The generated type
/// implements [`WireEnum`](crate::domain::ports::WireEnum), `Display`,
/// `FromStr`, `TryFrom<&str>` and serde, all backed by the same table.
macro_rules! wire_enum {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::domain::ports::WireEnum for $name {
            const NAME: &'static str = stringify!($name);
            const VALUES: &'static [&'static str] = &[$($wire),+];

            fn variants() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl $name {
            /// The canonical wire string.
            pub fn as_str(&self) -> &'static str {
                <Self as $crate::domain::ports::WireEnum>::as_str(self)
            }

            /// Parses a wire string; empty or unknown input is an invalid argument.
            pub fn from_value(value: &str) -> $crate::utils::error::Result<Self> {
                <Self as $crate::domain::ports::WireEnum>::from_value(value)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::utils::error::ModelError;

            fn from_str(value: &str) -> ::std::result::Result<Self, $crate::utils::error::ModelError> {
                Self::from_value(value)
            }
        }

        impl ::std::convert::TryFrom<&str> for $name {
            type Error = $crate::utils::error::ModelError;

            fn try_from(value: &str) -> ::std::result::Result<Self, $crate::utils::error::ModelError> {
                Self::from_value(value)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::from_value(&value).map_err(::serde::de::Error::custom)
            }
        }

        impl $crate::domain::render::RenderField for $name {
            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Generates an EC2 shape: a struct of optional fields with accessors.
///
/// For a field `foo: T => "Foo"` the shape gets `foo()`, `set_foo()` and
/// `with_foo()`. `"Foo"` is the wire name used by serde and `Display`.
macro_rules! shape {
    (
        $(#[$outer:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(rename = $wire, skip_serializing_if = "Option::is_none")]
                $field: Option<$ty>,
            )*
        }

        impl $name {
            /// Creates the shape with every field unset.
            pub fn new() -> Self {
                Self::default()
            }

            $(
                ::paste::paste! {
                    $(#[$field_meta])*
                    pub fn $field(&self) -> Option<&$ty> {
                        self.$field.as_ref()
                    }

                    pub fn [<set_ $field>](&mut self, value: Option<$ty>) {
                        self.$field = value;
                    }

                    #[must_use]
                    pub fn [<with_ $field>](mut self, value: impl Into<$ty>) -> Self {
                        self.$field = Some(value.into());
                        self
                    }
                }
            )*
        }

        impl $crate::domain::ports::Shape for $name {
            const SHAPE_NAME: &'static str = stringify!($name);
        }

        impl ::std::fmt::Display for $name {
            #[allow(unused_mut)]
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut fields = $crate::domain::render::FieldList::begin(f)?;
                $(
                    fields.entry($wire, self.$field.as_ref())?;
                )*
                fields.finish()
            }
        }

        impl $crate::domain::render::RenderField for $name {
            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }
    };
}

/// Binds request shapes to their action names and result shapes.
macro_rules! operation {
    ($($action:ident : $request:ty => $result:ty;)+) => {
        $(
            impl $crate::domain::ports::Ec2Request for $request {
                const ACTION: &'static str = stringify!($action);
                type Output = $result;
            }
        )+
    };
}

pub(crate) use operation;
pub(crate) use shape;
pub(crate) use wire_enum;
