//! Signatures of methods and fields.
use std::str::FromStr;

use crate::intrinsics::see_jvm_spec;

/// The kind of a class member.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, derive_more::Display)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum MemberKind {
    /// A method, including constructors and static initializers.
    #[display("method")]
    Method,
    /// A field.
    #[display("field")]
    Field,
}

/// The signature of a method or a field.
///
/// Two signatures are equal only if they are of the same [`MemberKind`], i.e., a method and a
/// field never compare equal even if they share the name and the descriptor.
#[derive(Debug, PartialEq, Eq, Hash, Clone, derive_more::Display, derive_more::From)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum JvmMemberSignature {
    /// The signature of a method.
    Method(JvmMethodSignature),
    /// The signature of a field.
    Field(JvmFieldSignature),
}

impl JvmMemberSignature {
    /// Creates the signature of a method.
    pub fn method(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self::Method(JvmMethodSignature::new(name, desc))
    }

    /// Creates the signature of a field.
    pub fn field(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self::Field(JvmFieldSignature::new(name, desc))
    }

    /// Returns the name of the member.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Method(it) => it.name(),
            Self::Field(it) => it.name(),
        }
    }

    /// Returns the JVM descriptor of the member.
    #[must_use]
    pub fn desc(&self) -> &str {
        match self {
            Self::Method(it) => it.desc(),
            Self::Field(it) => it.desc(),
        }
    }

    /// Returns the kind of the member.
    #[must_use]
    pub const fn kind(&self) -> MemberKind {
        match self {
            Self::Method(_) => MemberKind::Method,
            Self::Field(_) => MemberKind::Field,
        }
    }

    /// Returns the method signature if this is the signature of a method.
    #[must_use]
    pub const fn as_method(&self) -> Option<&JvmMethodSignature> {
        match self {
            Self::Method(it) => Some(it),
            Self::Field(_) => None,
        }
    }

    /// Returns the field signature if this is the signature of a field.
    #[must_use]
    pub const fn as_field(&self) -> Option<&JvmFieldSignature> {
        match self {
            Self::Field(it) => Some(it),
            Self::Method(_) => None,
        }
    }
}

/// The signature of a method, written as the name immediately followed by the descriptor,
/// e.g., `equals(Ljava/lang/Object;)Z`.
#[doc = see_jvm_spec!(4, 3, 3)]
#[derive(Debug, PartialEq, Eq, Hash, Clone, derive_more::Display)]
#[display("{name}{desc}")]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct JvmMethodSignature {
    #[cfg_attr(test, proptest(strategy = "crate::tests::arb_member_name()"))]
    name: String,
    #[cfg_attr(test, proptest(strategy = "crate::tests::arb_method_descriptor()"))]
    desc: String,
}

impl JvmMethodSignature {
    /// The name of instance initialization methods.
    pub const CONSTRUCTOR_NAME: &'static str = "<init>";
    /// The name of class initialization methods.
    pub const CLASS_INITIALIZER_NAME: &'static str = "<clinit>";

    /// Creates a new method signature.
    /// Neither the name nor the descriptor is validated.
    pub fn new(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
        }
    }

    /// The name of the method.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The descriptor of the method, e.g., `(Ljava/lang/Object;)Z`.
    #[must_use]
    pub fn desc(&self) -> &str {
        &self.desc
    }

    /// Consumes the signature and returns its name and descriptor.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.name, self.desc)
    }

    /// Checks if the signature belongs to a constructor.
    #[must_use]
    pub fn is_constructor(&self) -> bool {
        self.name == Self::CONSTRUCTOR_NAME
    }

    /// Checks if the signature belongs to a static initializer block.
    #[must_use]
    pub fn is_class_initializer(&self) -> bool {
        self.name == Self::CLASS_INITIALIZER_NAME
    }
}

/// The signature of a field, written as the name and the descriptor separated by a colon,
/// e.g., `name:Ljava/lang/String;`.
#[doc = see_jvm_spec!(4, 3, 2)]
#[derive(Debug, PartialEq, Eq, Hash, Clone, derive_more::Display)]
#[display("{name}:{desc}")]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct JvmFieldSignature {
    #[cfg_attr(test, proptest(strategy = "crate::tests::arb_member_name()"))]
    name: String,
    #[cfg_attr(test, proptest(strategy = "crate::tests::arb_field_descriptor()"))]
    desc: String,
}

impl JvmFieldSignature {
    /// Creates a new field signature.
    /// Neither the name nor the descriptor is validated.
    pub fn new(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
        }
    }

    /// The name of the field.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The descriptor of the type of the field, e.g., `Ljava/lang/String;`.
    #[must_use]
    pub fn desc(&self) -> &str {
        &self.desc
    }

    /// Consumes the signature and returns its name and descriptor.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.name, self.desc)
    }
}

/// An error indicating that a string is not a well-formed member signature.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum InvalidMemberSignature {
    /// The name and the descriptor cannot be told apart.
    #[error("Missing separator between name and descriptor in `{0}`")]
    MissingSeparator(String),
    /// The part before the separator is empty.
    #[error("Empty member name in `{0}`")]
    EmptyName(String),
    /// The part after the separator is empty.
    #[error("Empty descriptor in `{0}`")]
    EmptyDescriptor(String),
}

/// Checks that neither half of a split signature is empty.
fn split_checked(
    signature: &str,
    name: &str,
    desc: &str,
) -> Result<(String, String), InvalidMemberSignature> {
    if name.is_empty() {
        Err(InvalidMemberSignature::EmptyName(signature.to_owned()))
    } else if desc.is_empty() {
        Err(InvalidMemberSignature::EmptyDescriptor(signature.to_owned()))
    } else {
        Ok((name.to_owned(), desc.to_owned()))
    }
}

impl FromStr for JvmMethodSignature {
    type Err = InvalidMemberSignature;

    /// Parses a method signature. The name ends right before the first `(`.
    fn from_str(signature: &str) -> Result<Self, Self::Err> {
        let separator_at = signature
            .find('(')
            .ok_or_else(|| InvalidMemberSignature::MissingSeparator(signature.to_owned()))?;
        let (name, desc) = signature.split_at(separator_at);
        let (name, desc) = split_checked(signature, name, desc)?;
        Ok(Self { name, desc })
    }
}

impl FromStr for JvmFieldSignature {
    type Err = InvalidMemberSignature;

    /// Parses a field signature. The name ends right before the first `:`.
    fn from_str(signature: &str) -> Result<Self, Self::Err> {
        let (name, desc) = signature
            .split_once(':')
            .ok_or_else(|| InvalidMemberSignature::MissingSeparator(signature.to_owned()))?;
        let (name, desc) = split_checked(signature, name, desc)?;
        Ok(Self { name, desc })
    }
}

impl FromStr for JvmMemberSignature {
    type Err = InvalidMemberSignature;

    /// Parses a member signature.
    /// It is a method if a `(` comes before any `:`, and a field otherwise.
    fn from_str(signature: &str) -> Result<Self, Self::Err> {
        match signature.find(|c: char| c == '(' || c == ':') {
            Some(idx) if signature[idx..].starts_with('(') => signature.parse().map(Self::Method),
            Some(_) => signature.parse().map(Self::Field),
            None => Err(InvalidMemberSignature::MissingSeparator(signature.to_owned())),
        }
    }
}
