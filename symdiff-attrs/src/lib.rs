mod structures;

use proc_macro::TokenStream;
use quote::quote;
use structures::ErrorKindTarget;
use syn::parse_macro_input;

/// Derives the `symdiff_error::ErrorKind` trait for the given struct.
///
/// The information of the error is customized using the `error` attribute:
/// ```ignore
/// use symdiff_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = format!("{} is not a valid operator", name), labels = ["unknown operator"])]
/// pub struct InvalidOperator {
///     pub name: String,
/// }
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message of the error; also used for its `Display` output.                |
/// | `labels`    | Label texts (any `IntoIterator`), one per span of the error, in span order.  |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
/// | `note`      | Optional note giving extra context about the error.                          |
///
/// Each tag accepts an expression. For structs with named fields, the expression is evaluated with
/// the members of the struct in scope, so they can be used in the expression (tuple structs are
/// not supported).
///
/// The generated code refers to the `ariadne` and `symdiff_error` crates, so both must be
/// dependencies of the crate using the derive.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl ::symdiff_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
            #target
        }
    }.into()
}
