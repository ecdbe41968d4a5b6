//! Rendering of description impls and the index unit.
//!
//! Everything is unrolled at generation time: the generated code contains
//! one match arm and one pair per variant and performs no reflection.
//!
//! Generated tokens are validated with `syn` and formatted with
//! `prettyplease`. When the tokens do not parse (a malformed description
//! argument), the raw token text is emitted instead so that `rustc` reports
//! the problem against the generated file.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use tracing::warn;

use crate::error::Result;
use crate::metadata::EnumModel;
use crate::sink::GeneratedUnit;

const GENERATED_NOTICE: &str = "// This code was automatically generated by enum-describe. Do not edit manually.";

/// Renders the inherent impl block for one enum.
pub fn render_impl(model: &EnumModel) -> Result<TokenStream> {
    let type_path = model.type_path()?;
    let repr = &model.repr;
    let names: Vec<_> = model.members.iter().map(|m| &m.name).collect();
    let descriptions: Vec<_> = model.members.iter().map(|m| &m.description).collect();

    // an enum without variants is uninhabited, so the match needs no arms
    let description_body = if names.is_empty() {
        quote!(match *self {})
    } else {
        quote! {
            match self {
                #(Self::#names => ::std::borrow::Cow::from(#descriptions),)*
            }
        }
    };

    Ok(quote! {
        #[allow(clippy::match_single_binding, clippy::useless_conversion)]
        impl #type_path {
            /// Human-readable description of this variant.
            pub fn description(&self) -> ::std::borrow::Cow<'static, str> {
                #description_body
            }

            /// Description of a raw discriminant.
            ///
            /// Values that match no variant are rendered as their decimal form.
            pub fn describe_value(value: #repr) -> ::std::borrow::Cow<'static, str> {
                match value {
                    #(v if v == Self::#names as #repr => ::std::borrow::Cow::from(#descriptions),)*
                    _ => ::std::borrow::Cow::Owned(value.to_string()),
                }
            }

            /// Every variant's discriminant and description, in declaration order.
            pub fn values_and_descriptions() -> ::std::vec::Vec<(#repr, ::std::borrow::Cow<'static, str>)> {
                ::std::vec![
                    #((Self::#names as #repr, ::std::borrow::Cow::from(#descriptions)),)*
                ]
            }
        }
    })
}

/// Unit name for an enum: namespace and enum name joined with `.`.
///
/// Rust identifiers never contain `.`, so distinct paths give distinct names.
pub fn unit_name(model: &EnumModel) -> String {
    let mut parts: Vec<String> = model.namespace.segments().to_vec();
    parts.push(model.ident.unraw().to_string());
    format!("{}.rs", parts.join("."))
}

/// Renders the complete generated unit for one enum.
pub fn synthesize_unit(model: &EnumModel) -> Result<GeneratedUnit> {
    let tokens = render_impl(model)?;
    let origin = format!("{}::{}", model.namespace, model.ident);
    let header = format!("{GENERATED_NOTICE}\n// Source: crate::{origin}");
    Ok(GeneratedUnit::new(unit_name(model), format_unit(&tokens, &header)))
}

/// Renders the index unit that includes every generated unit, in order.
pub fn synthesize_index(index_name: &str, unit_names: &[String]) -> GeneratedUnit {
    let tokens = quote! {
        #(include!(#unit_names);)*
    };
    GeneratedUnit::new(index_name, format_unit(&tokens, GENERATED_NOTICE))
}

/// Formats generated tokens behind `header`.
///
/// Falls back to the unformatted token text when the tokens are not a valid
/// Rust file.
pub fn format_unit(tokens: &TokenStream, header: &str) -> String {
    match syn::parse2::<syn::File>(tokens.clone()) {
        Ok(file) => format!("{header}\n\n{}", prettyplease::unparse(&file)),
        Err(e) => {
            warn!(error = %e, "Generated code is not valid Rust; emitting it unformatted");
            format!("{header}\n\n{tokens}\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::ModulePath;
    use syn::ItemEnum;
    use tracing_test::traced_test;

    fn model(namespace: &str, code: &str) -> EnumModel {
        let item: ItemEnum = syn::parse_str(code).unwrap();
        EnumModel::from_item(ModulePath::parse(namespace), &item).unwrap()
    }

    /// Drops whitespace so assertions do not depend on prettyplease layout.
    fn squash(s: &str) -> String {
        s.chars().filter(|c| !c.is_whitespace()).collect()
    }

    #[test]
    fn renders_lookup_and_pairs_for_scenario_enum() {
        let model = model("console_sample", r#"enum ETest { A, #[description("BofTest")] B }"#);
        let unit = synthesize_unit(&model).unwrap();
        let code = squash(unit.content());

        assert_eq!(unit.name(), "console_sample.ETest.rs");
        assert!(code.contains("implcrate::console_sample::ETest{"));
        assert!(code.contains(r#"Self::A=>::std::borrow::Cow::from("A"),"#));
        assert!(code.contains(r#"Self::B=>::std::borrow::Cow::from("BofTest"),"#));
        assert!(code.contains(r#"(Self::Aasisize,::std::borrow::Cow::from("A"))"#));
        assert!(code.contains(r#"(Self::Basisize,::std::borrow::Cow::from("BofTest"))"#));
        assert!(code.contains("_=>::std::borrow::Cow::Owned(value.to_string()),"));
    }

    #[test]
    fn arms_follow_declaration_order() {
        let forward = synthesize_unit(&model("m", "enum E { X, Y, Z }")).unwrap();
        let reordered = synthesize_unit(&model("m", "enum E { Z, X, Y }")).unwrap();

        let positions = |content: &str| -> Vec<usize> {
            ["Self::X as", "Self::Y as", "Self::Z as"]
                .iter()
                .map(|needle| content.find(needle).unwrap())
                .collect()
        };

        let fwd = positions(forward.content());
        assert!(fwd[0] < fwd[1] && fwd[1] < fwd[2]);

        let re = positions(reordered.content());
        assert!(re[2] < re[0] && re[0] < re[1]);
    }

    #[test]
    fn empty_enum_has_only_default_branch() {
        let unit = synthesize_unit(&model("m", "enum Never {}")).unwrap();
        let code = squash(unit.content());

        assert!(code.contains("match*self{}"));
        assert!(code.contains("matchvalue{_=>::std::borrow::Cow::Owned(value.to_string()),}"));
        assert!(code.contains("::std::vec![]"));
        assert!(!code.contains("Self::"));
    }

    #[test]
    fn repr_type_is_used_for_values() {
        let unit = synthesize_unit(&model("m", "#[repr(u8)] enum Small { A = 7 }")).unwrap();
        let code = squash(unit.content());

        assert!(code.contains("pubfndescribe_value(value:u8)"));
        assert!(code.contains("Vec<(u8,::std::borrow::Cow<'static,str>)>"));
        assert!(code.contains("(Self::Aasu8,"));
    }

    #[test]
    fn output_is_byte_identical_across_runs() {
        let code = r#"enum Status { Active, #[description(format!("{}", 1))] Retired }"#;
        let first = synthesize_unit(&model("a::b", code)).unwrap();
        let second = synthesize_unit(&model("a::b", code)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn unit_names_differ_across_namespaces() {
        let a = unit_name(&model("a::b", "enum Kind { A }"));
        let b = unit_name(&model("a", "enum Kind { A }"));

        assert_eq!(a, "a.b.Kind.rs");
        assert_eq!(b, "a.Kind.rs");
    }

    #[test]
    fn header_names_source_enum() {
        let unit = synthesize_unit(&model("net::proto", "enum Kind { A }")).unwrap();

        assert!(unit.content().starts_with(GENERATED_NOTICE));
        assert!(unit.content().contains("// Source: crate::net::proto::Kind"));
    }

    #[test]
    fn index_includes_every_unit_in_order() {
        let names = vec!["a.First.rs".to_string(), "b.Second.rs".to_string()];
        let index = synthesize_index("enum_describe.rs", &names);
        let code = squash(index.content());

        assert_eq!(index.name(), "enum_describe.rs");
        assert!(code.contains(r#"include!("a.First.rs");include!("b.Second.rs");"#));
    }

    #[test]
    fn empty_index_is_still_rendered() {
        let index = synthesize_index("enum_describe.rs", &[]);

        assert!(index.content().starts_with(GENERATED_NOTICE));
        assert!(!index.content().contains("include!"));
    }

    #[test]
    #[traced_test]
    fn malformed_description_is_emitted_unformatted() {
        let unit = synthesize_unit(&model("m", r#"enum E { #[description(=> nope)] A }"#)).unwrap();

        assert!(unit.content().contains("=> nope"));
        assert!(logs_contain("not valid Rust"));
    }
}
