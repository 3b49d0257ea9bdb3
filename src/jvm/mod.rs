//! Module containing the APIs for the signatures of JVM class members.

pub mod deserialization;
pub mod member_signature;

pub use member_signature::{
    InvalidMemberSignature, JvmFieldSignature, JvmMemberSignature, JvmMethodSignature, MemberKind,
};
