//! Conversion of member signatures read by a metadata deserializer into [`JvmMemberSignature`].
//!
//! A deserializer either emits [`RawMemberSignature`]s directly, or implements
//! [`InternalMemberSignature`] for its own representation so that [`wrap_as_public`] can
//! convert it.

use super::member_signature::{
    JvmFieldSignature, JvmMemberSignature, JvmMethodSignature, MemberKind,
};

/// A member signature as emitted by a metadata deserializer.
/// The textual form is the same as the one of [`JvmMemberSignature`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, derive_more::Display)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum RawMemberSignature {
    /// The signature of a method.
    #[display("{name}{desc}")]
    Method {
        /// The name of the method.
        name: String,
        /// The descriptor of the method.
        desc: String,
    },
    /// The signature of a field.
    #[display("{name}:{desc}")]
    Field {
        /// The name of the field.
        name: String,
        /// The descriptor of the type of the field.
        desc: String,
    },
}

/// A member signature owned by a metadata deserializer.
///
/// Every implementor is either a method or a field, as told by [`kind`](Self::kind).
pub trait InternalMemberSignature {
    /// The kind of the member.
    fn kind(&self) -> MemberKind;
    /// The name of the member.
    fn name(&self) -> &str;
    /// The JVM descriptor of the member.
    fn desc(&self) -> &str;
}

impl InternalMemberSignature for RawMemberSignature {
    fn kind(&self) -> MemberKind {
        match self {
            Self::Method { .. } => MemberKind::Method,
            Self::Field { .. } => MemberKind::Field,
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Method { name, .. } | Self::Field { name, .. } => name,
        }
    }

    fn desc(&self) -> &str {
        match self {
            Self::Method { desc, .. } | Self::Field { desc, .. } => desc,
        }
    }
}

/// Converts a signature owned by a deserializer into a [`JvmMemberSignature`] of the same kind.
/// The name and the descriptor are copied verbatim.
pub fn wrap_as_public<S>(internal: &S) -> JvmMemberSignature
where
    S: InternalMemberSignature + ?Sized,
{
    match internal.kind() {
        MemberKind::Method => JvmMethodSignature::new(internal.name(), internal.desc()).into(),
        MemberKind::Field => JvmFieldSignature::new(internal.name(), internal.desc()).into(),
    }
}

impl From<RawMemberSignature> for JvmMemberSignature {
    fn from(raw: RawMemberSignature) -> Self {
        match raw {
            RawMemberSignature::Method { name, desc } => Self::method(name, desc),
            RawMemberSignature::Field { name, desc } => Self::field(name, desc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// A deserializer-side representation unrelated to [`RawMemberSignature`].
    struct TaggedSignature {
        is_method: bool,
        name: &'static str,
        desc: &'static str,
    }

    impl InternalMemberSignature for TaggedSignature {
        fn kind(&self) -> MemberKind {
            if self.is_method {
                MemberKind::Method
            } else {
                MemberKind::Field
            }
        }

        fn name(&self) -> &str {
            self.name
        }

        fn desc(&self) -> &str {
            self.desc
        }
    }

    #[test]
    fn wrap_method() {
        let raw = RawMemberSignature::Method {
            name: "foo".to_owned(),
            desc: "(Ljava/lang/Object;)Z".to_owned(),
        };
        let public = wrap_as_public(&raw);
        assert!(matches!(public, JvmMemberSignature::Method(_)));
        assert_eq!(public.to_string(), "foo(Ljava/lang/Object;)Z");
    }

    #[test]
    fn wrap_field() {
        let raw = RawMemberSignature::Field {
            name: "count".to_owned(),
            desc: "I".to_owned(),
        };
        let public = wrap_as_public(&raw);
        assert!(matches!(public, JvmMemberSignature::Field(_)));
        assert_eq!(public.to_string(), "count:I");
    }

    #[test]
    fn wrap_foreign_representation() {
        let method = TaggedSignature {
            is_method: true,
            name: "<init>",
            desc: "()V",
        };
        let field = TaggedSignature {
            is_method: false,
            name: "INSTANCE",
            desc: "Lorg/pkg/Singleton;",
        };
        assert_eq!(
            wrap_as_public(&method),
            JvmMemberSignature::method("<init>", "()V")
        );
        assert_eq!(
            wrap_as_public(&field),
            JvmMemberSignature::field("INSTANCE", "Lorg/pkg/Singleton;")
        );
    }

    #[test]
    fn wrap_trait_object() {
        let raw: Box<dyn InternalMemberSignature> = Box::new(RawMemberSignature::Field {
            name: "count".to_owned(),
            desc: "I".to_owned(),
        });
        assert_eq!(
            wrap_as_public(raw.as_ref()),
            JvmMemberSignature::field("count", "I")
        );
    }

    proptest! {
        #[test]
        fn wrap_preserves_members(raw in any::<RawMemberSignature>()) {
            let public = wrap_as_public(&raw);
            prop_assert_eq!(public.kind(), raw.kind());
            prop_assert_eq!(public.name(), raw.name());
            prop_assert_eq!(public.desc(), raw.desc());
            prop_assert_eq!(public.to_string(), raw.to_string());
        }

        #[test]
        fn owned_conversion_agrees(raw in any::<RawMemberSignature>()) {
            let borrowed = wrap_as_public(&raw);
            let owned = JvmMemberSignature::from(raw);
            prop_assert_eq!(borrowed, owned);
        }
    }
}
