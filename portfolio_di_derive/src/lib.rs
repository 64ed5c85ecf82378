use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, Field, Fields};

/// Derive `portfolio_di::Build` for a struct whose fields can all be built by
/// the provider.
///
/// Fields marked with `#[state]` are initialized with [`Default::default`]
/// instead. Built values are cached in the provider.
#[proc_macro_derive(Build, attributes(state))]
pub fn derive_build(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let ident = input.ident;

    let generics = input
        .generics
        .type_params()
        .map(|x| &x.ident)
        .collect::<Vec<_>>();

    let syn::Data::Struct(data) = input.data else {
        return quote! { ::core::compile_error!("Build can only be derived for structs"); }.into();
    };

    fn is_state(field: &Field) -> bool {
        field
            .attrs
            .iter()
            .any(|x| x.path().get_ident().is_some_and(|x| x == "state"))
    }

    let bounds = data
        .fields
        .iter()
        .filter(|x| !is_state(x))
        .map(|Field { ty, .. }| quote! { #ty: ::portfolio_di::Build<__Provider> })
        .collect::<Vec<_>>();

    let field_exprs = data.fields.iter().map(|f| {
        if is_state(f) {
            quote! { ::core::default::Default::default() }
        } else {
            quote! { ::portfolio_di::Build::build(provider) }
        }
    });

    let build_expr = match &data.fields {
        Fields::Named(fields) => {
            let idents = fields.named.iter().map(|f| &f.ident);
            quote! { Self { #(#idents: #field_exprs),* } }
        }
        Fields::Unnamed(_) => quote! { Self( #(#field_exprs),* ) },
        Fields::Unit => quote! { Self },
    };

    quote! {
        impl<__Provider, #(#generics),*> ::portfolio_di::Build<__Provider> for #ident<#(#generics),*>
        where
            Self: ::core::clone::Clone + 'static,
            __Provider: ::portfolio_di::Provider,
            #(#bounds),*
        {
            fn build(provider: &mut __Provider) -> Self {
                if let ::core::option::Option::Some(cached) =
                    ::portfolio_di::Provider::cache(provider).get::<Self>()
                {
                    return ::core::clone::Clone::clone(cached);
                }

                let value = #build_expr;
                ::portfolio_di::Provider::cache(provider).insert(::core::clone::Clone::clone(&value));
                value
            }
        }
    }
    .into()
}
