extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{parse_macro_input, punctuated::Punctuated, Item, Path};

// For DTO classes

#[derive(Debug, Default)]
struct DtoFlags {
    pub clone: bool,
    pub eq: bool,
    pub ui: bool,
    pub request: bool,
    pub response: bool,
}

fn compile_error(span: Span, message: impl std::fmt::Display) -> TokenStream {
    syn::Error::new(span, message).to_compile_error().into()
}

/// Declares a DTO shared between the sides of a precept.
///
/// `#[dto(convert, request)]` makes the type deserializable where the relay
/// is compiled in (`convert-in`) and serializable where the client is
/// (`convert-out`). `response` is the mirror image. Giving both flags derives
/// both traits unconditionally. `clone` and `eq` add universal derives, `ui`
/// adds `PartialEq` for the front (`convert-front`) only.
#[proc_macro_attribute]
pub fn dto(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr with Punctuated::<syn::Ident, syn::Token![,]>::parse_separated_nonempty);
    let mut args = args.into_iter();

    // The first argument is the precept name
    let Some(precept_name) = args.next() else {
        return compile_error(Span::call_site(), "Expected precept name as first argument");
    };

    let mut flags = DtoFlags::default();
    for flag in args {
        match flag.to_string().as_str() {
            "clone" => flags.clone = true,
            "eq" => flags.eq = true,
            "ui" => flags.ui = true,
            "request" => flags.request = true,
            "response" => flags.response = true,
            other => return compile_error(flag.span(), format!("Unknown flag: {}", other)),
        }
    }

    let mut item: Item = parse_macro_input!(item as Item);
    if !matches!(item, Item::Struct(_) | Item::Enum(_)) {
        return syn::Error::new_spanned(&item, "dto macro only supports structs and enums")
            .to_compile_error()
            .into();
    }

    let feature_in = format!("{}-in", precept_name);
    let feature_out = format!("{}-out", precept_name);
    let feature_front = format!("{}-front", precept_name);

    let item_attrs = match &mut item {
        Item::Struct(s) => &mut s.attrs,
        Item::Enum(e) => &mut e.attrs,
        _ => unreachable!(),
    };

    let mut universal_derives: Vec<Path> = vec![syn::parse_quote!(Debug)];

    if flags.clone {
        universal_derives.push(syn::parse_quote!(Clone));
    }

    if flags.eq {
        universal_derives.push(syn::parse_quote!(PartialEq));
    } else if flags.ui {
        item_attrs.push(syn::parse_quote! {
            #[cfg_attr(feature = #feature_front, derive(PartialEq))]
        });
    }

    if flags.request && flags.response {
        universal_derives.push(syn::parse_quote!(::serde::Serialize));
        universal_derives.push(syn::parse_quote!(::serde::Deserialize));
    } else if flags.request {
        item_attrs.push(syn::parse_quote! {
            #[cfg_attr(feature = #feature_in, derive(::serde::Deserialize))]
        });
        item_attrs.push(syn::parse_quote! {
            #[cfg_attr(feature = #feature_out, derive(::serde::Serialize))]
        });
    } else if flags.response {
        item_attrs.push(syn::parse_quote! {
            #[cfg_attr(feature = #feature_in, derive(::serde::Serialize))]
        });
        item_attrs.push(syn::parse_quote! {
            #[cfg_attr(feature = #feature_out, derive(::serde::Deserialize))]
        });
    }

    item_attrs.push(syn::parse_quote! {
        #[derive(#(#universal_derives),*)]
    });

    TokenStream::from(quote! { #item })
}
