//! Procedural macros for mapis.
//!
//! - `#[derive(Variants)]` - declares an enum's variants as a closed set of
//!   selector values

use proc_macro::TokenStream;

mod variants;

/// Derive macro implementing `Variants` and `SelectorKey` for an enum.
///
/// Each variant maps to one selector value. Names are kept as written unless
/// renamed:
///
/// - `#[variants(rename_all = "...")]` on the enum, one of `lowercase`,
///   `UPPERCASE`, `snake_case`, `kebab-case` or `SCREAMING_SNAKE_CASE`
/// - `#[variant(rename = "...")]` on a single variant
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Variants)]
/// #[variants(rename_all = "snake_case")]
/// enum ShapeKind {
///     Circle,
///     RoundedSquare,
///     #[variant(rename = "tri")]
///     Triangle,
/// }
///
/// assert_eq!(ShapeKind::VARIANTS, &["circle", "rounded_square", "tri"]);
/// ```
#[proc_macro_derive(Variants, attributes(variants, variant))]
pub fn derive_variants(input: TokenStream) -> TokenStream {
    variants::derive_variants_impl(input)
}
