use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, GenericArgument, Path, PathArguments, Type};

/// Implements `crate::Request` for a struct. Every field of type `Arc<Executor>` receives the
/// executor the struct was requested with.
#[proc_macro_derive(Request)]
pub fn derive_request(input: TokenStream) -> TokenStream {
    let DeriveInput {
        ident,
        generics,
        data,
        ..
    } = parse_macro_input!(input as DeriveInput);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let mut assignments = vec![];
    if let Data::Struct(data_struct) = &data {
        for field in data_struct.fields.iter() {
            let (Some(field_ident), Type::Path(ty)) = (&field.ident, &field.ty) else {
                continue;
            };
            if is_executor_arc(&ty.path) {
                assignments.push(quote! {
                    self.#field_ident = executor.clone();
                })
            }
        }
    }

    let expanded = quote! {
        impl #impl_generics crate::Request for #ident #ty_generics #where_clause {
            fn __set_executor(&mut self, executor: std::sync::Arc<crate::Executor>) {
                #(#assignments)*
            }
        }
    };
    expanded.into()
}

fn is_executor_arc(path: &Path) -> bool {
    let Some(segment) = path.segments.last() else {
        return false;
    };
    if segment.ident != "Arc" {
        return false;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return false;
    };
    matches!(
        args.args.first(),
        Some(GenericArgument::Type(Type::Path(inner))) if inner.path.is_ident("Executor")
    )
}
