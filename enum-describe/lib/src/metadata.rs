//! Per-variant description metadata.

use proc_macro2::{Span, TokenStream, TokenTree};
use quote::{ToTokens, quote};
use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, Fields, Ident, ItemEnum, LitStr, Meta, Token};
use tracing::warn;

use crate::config::DESCRIPTION_ATTRIBUTE;
use crate::error::{GenerateError, Result};
use crate::namespace::ModulePath;

const INTEGER_REPRS: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
];

/// A variant name and the expression describing it.
#[derive(Debug, Clone)]
pub struct EnumMember {
    pub name: Ident,
    /// Spliced verbatim into generated code; never evaluated here.
    pub description: TokenStream,
}

/// Everything the synthesizer needs to render one enum.
#[derive(Debug, Clone)]
pub struct EnumModel {
    pub namespace: ModulePath,
    pub ident: Ident,
    /// Integer type of the discriminant, from `#[repr(..)]` or `isize`.
    pub repr: Ident,
    pub members: Vec<EnumMember>,
}

impl EnumModel {
    /// Extracts members, in declaration order, from a resolved candidate.
    pub fn from_item(namespace: ModulePath, item: &ItemEnum) -> Result<Self> {
        if !item.generics.params.is_empty() {
            return Err(GenerateError::GenericEnum {
                enum_name: item.ident.to_string(),
            });
        }

        let members = item
            .variants
            .iter()
            .map(|variant| {
                if !matches!(variant.fields, Fields::Unit) {
                    return Err(GenerateError::UnsupportedVariant {
                        enum_name: item.ident.to_string(),
                        variant: variant.ident.to_string(),
                    });
                }
                Ok(EnumMember {
                    name: variant.ident.clone(),
                    description: description_of(&variant.ident, &variant.attrs),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            namespace,
            ident: item.ident.clone(),
            repr: discriminant_repr(&item.attrs),
            members,
        })
    }

    /// `crate::<namespace>::<Enum>`.
    pub fn type_path(&self) -> Result<TokenStream> {
        let segments = self
            .namespace
            .segments()
            .iter()
            .map(|s| {
                syn::parse_str::<Ident>(s)
                    .map_err(|_| GenerateError::InvalidModuleName { name: s.clone() })
            })
            .collect::<Result<Vec<_>>>()?;
        let ident = &self.ident;
        Ok(quote!(crate #(:: #segments)* :: #ident))
    }
}

/// Resolves the description expression for one variant.
///
/// The first argument of the first `#[description(..)]` attribute is taken
/// as written. `#[description = ..]` is accepted too. Without an argument
/// the variant name becomes a string literal.
pub fn description_of(name: &Ident, attrs: &[Attribute]) -> TokenStream {
    let explicit = attrs
        .iter()
        .find(|attr| attr.path().is_ident(DESCRIPTION_ATTRIBUTE))
        .and_then(|attr| match attr.meta {
            Meta::List(ref list) => first_argument(&list.tokens),
            Meta::NameValue(ref nv) => Some(nv.value.to_token_stream()),
            Meta::Path(_) => None,
        });

    explicit.unwrap_or_else(|| {
        let lit = LitStr::new(&name.unraw().to_string(), name.span());
        lit.to_token_stream()
    })
}

/// The first comma-separated argument of an attribute list.
///
/// Arguments that parse as expressions are split on expression boundaries,
/// so `foo::<A, B>()` stays whole. Anything else is cut at the first
/// top-level comma and passed through untouched.
fn first_argument(tokens: &TokenStream) -> Option<TokenStream> {
    let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
    if let Ok(args) = syn::parse::Parser::parse2(parser, tokens.clone()) {
        return args.first().map(ToTokens::to_token_stream);
    }

    let first: TokenStream = tokens
        .clone()
        .into_iter()
        .take_while(|tt| !matches!(tt, TokenTree::Punct(p) if p.as_char() == ','))
        .collect();
    (!first.is_empty()).then_some(first)
}

/// Integer type named by `#[repr(..)]`, defaulting to `isize`.
fn discriminant_repr(attrs: &[Attribute]) -> Ident {
    let mut repr = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("repr")) {
        // `repr(C)`, `repr(align(..))` and friends are skipped
        let parsed = attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.get_ident()
                && INTEGER_REPRS.iter().any(|r| ident == r)
            {
                repr = Some(ident.clone());
            }
            if meta.input.peek(syn::token::Paren) {
                meta.input.parse::<TokenTree>()?;
            }
            Ok(())
        });
        if let Err(e) = parsed {
            warn!(error = %e, "Ignoring malformed #[repr] attribute");
        }
    }
    repr.unwrap_or_else(|| Ident::new("isize", Span::call_site()))
}
