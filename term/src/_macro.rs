/// Create a "vocabulary module"
/// defining a set of IRIs within a given namespace.
///
/// Every generated item is a `&'static str` constant,
/// built at compile time by concatenating the namespace and the suffix.
///
/// # Tests
/// This macro also creates a test module checking that all created IRIs are valid.
#[macro_export]
macro_rules! vocabulary {
    ($iri_prefix:literal, $($suffix:ident),*; $($r_id:ident, $r_sf:literal),*) => {
        /// Namespace IRI of this vocabulary.
        pub const NS: &str = $iri_prefix;
        $(
            /// Generated IRI.
            #[allow(non_upper_case_globals)]
            pub const $suffix: &str = concat!($iri_prefix, stringify!($suffix));
        )*
        $(
            /// Generated IRI.
            #[allow(non_upper_case_globals)]
            pub const $r_id: &str = concat!($iri_prefix, $r_sf);
        )*

    };
    ($iri_prefix:literal, $($suffix:ident),*) => {
        vocabulary!($iri_prefix, $($suffix),*;);
    };
}
