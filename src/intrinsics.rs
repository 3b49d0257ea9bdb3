/// Expands to a doc line linking to a section of the JVM specification.
/// For example, `see_jvm_spec!(4, 3, 3)` links to §4.3.3.
macro_rules! see_jvm_spec {
    ($chapter:literal $(, $section:literal)*) => {
        concat!(
            "See the [JVM Specification §",
            $chapter, $(".", $section,)*
            "](https://docs.oracle.com/javase/specs/jvms/se21/html/jvms-",
            $chapter,
            ".html#jvms-",
            $chapter, $(".", $section,)*
            ") for more information."
        )
    };
}

pub(crate) use see_jvm_spec;
