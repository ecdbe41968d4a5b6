//! Implementation of the `#[describe_enum]` attribute.

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{Attribute, Error, Item, Result, parse2};

const MARKER: &str = "describe_enum";
const DESCRIPTION: &str = "description";

pub fn describe_enum_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    match describe_enum_inner(attr, item) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn describe_enum_inner(attr: TokenStream, item: TokenStream) -> Result<TokenStream> {
    if !attr.is_empty() {
        return Err(Error::new_spanned(attr, "`describe_enum` takes no arguments"));
    }

    let mut item_enum = match parse2::<Item>(item)? {
        Item::Enum(item_enum) => item_enum,
        other => {
            return Err(Error::new_spanned(
                other,
                "`describe_enum` can only be applied to enums",
            ));
        }
    };

    if let Some(repeated) = item_enum.attrs.iter().find(|attr| is_marker(attr)) {
        return Err(Error::new_spanned(
            repeated,
            "`describe_enum` may only be applied once",
        ));
    }

    for variant in &mut item_enum.variants {
        variant.attrs.retain(|attr| !attr.path().is_ident(DESCRIPTION));
    }

    Ok(item_enum.into_token_stream())
}

fn is_marker(attr: &Attribute) -> bool {
    attr.path()
        .segments
        .last()
        .is_some_and(|segment| segment.ident == MARKER)
}
