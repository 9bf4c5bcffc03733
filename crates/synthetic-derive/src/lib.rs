use proc_macro::TokenStream;

mod naming;
mod paths;
mod synthetic;

/// Derive a synthesized class for a struct with named fields.
///
/// ```ignore
/// #[derive(Synthetic)]
/// #[synthetic(constructor, naming = "plain")]
/// pub struct Point {
///     #[synthetic(default = 10)]
///     x: i64,
///     #[synthetic(default = 20, read_only)]
///     y: i64,
/// }
/// ```
#[proc_macro_derive(Synthetic, attributes(synthetic))]
pub fn derive_synthetic(input: TokenStream) -> TokenStream {
    synthetic::derive_synthetic(input.into()).into()
}
