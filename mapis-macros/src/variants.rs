//! `#[derive(Variants)]` implementation.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Fields, Ident, LitStr, Token,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// Case conversion applied to every variant name.
#[derive(Clone, Copy)]
enum RenameRule {
    Lower,
    Upper,
    Snake,
    Kebab,
    ScreamingSnake,
}

impl RenameRule {
    fn from_lit(lit: &LitStr) -> syn::Result<Self> {
        match lit.value().as_str() {
            "lowercase" => Ok(Self::Lower),
            "UPPERCASE" => Ok(Self::Upper),
            "snake_case" => Ok(Self::Snake),
            "kebab-case" => Ok(Self::Kebab),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnake),
            other => Err(syn::Error::new(
                lit.span(),
                format!("unknown rename rule: {}", other),
            )),
        }
    }

    fn apply(self, name: &str) -> String {
        match self {
            Self::Lower => name.to_lowercase(),
            Self::Upper => name.to_uppercase(),
            Self::Snake => words(name).join("_").to_lowercase(),
            Self::Kebab => words(name).join("-").to_lowercase(),
            Self::ScreamingSnake => words(name).join("_").to_uppercase(),
        }
    }
}

/// Split a `CamelCase` identifier into words. Acronyms stay together:
/// `HTTPRequest` becomes `HTTP`, `Request`.
fn words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_lower) {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Arguments of `#[variants(...)]` on the enum.
struct EnumArgs {
    rename_all: Option<RenameRule>,
}

impl Parse for EnumArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut rename_all = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "rename_all" => {
                    let lit: LitStr = input.parse()?;
                    rename_all = Some(RenameRule::from_lit(&lit)?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(EnumArgs { rename_all })
    }
}

/// Arguments of `#[variant(...)]` on a variant.
struct VariantArgs {
    rename: Option<LitStr>,
}

impl Parse for VariantArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut rename = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "rename" => {
                    rename = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(VariantArgs { rename })
    }
}

fn find_args<A: Parse>(attrs: &[Attribute], name: &str) -> syn::Result<Option<A>> {
    let mut found = None;
    for attr in attrs {
        if attr.path().is_ident(name) {
            if found.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    format!("duplicate #[{}] attribute", name),
                ));
            }
            found = Some(attr.parse_args::<A>()?);
        }
    }
    Ok(found)
}

/// Implementation of `#[derive(Variants)]`.
pub fn derive_variants_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let enum_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let variants = match &input.data {
        Data::Enum(data_enum) => &data_enum.variants,
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "#[derive(Variants)] can only be used on enums",
            ));
        }
    };
    if variants.is_empty() {
        return Err(syn::Error::new(
            Span::call_site(),
            "#[derive(Variants)] needs at least one variant",
        ));
    }

    let rule = find_args::<EnumArgs>(&input.attrs, "variants")?.and_then(|a| a.rename_all);

    let mut keys: Vec<String> = Vec::with_capacity(variants.len());
    let mut arms = Vec::with_capacity(variants.len());
    for variant in variants {
        let variant_name = &variant.ident;
        let args = find_args::<VariantArgs>(&variant.attrs, "variant")?;

        let key = match args.and_then(|a| a.rename) {
            Some(lit) => lit.value(),
            None => {
                let name = variant_name.to_string();
                match rule {
                    Some(rule) => rule.apply(&name),
                    None => name,
                }
            }
        };
        if keys.contains(&key) {
            return Err(syn::Error::new_spanned(
                variant,
                format!("selector value `{}` is used by more than one variant", key),
            ));
        }

        let pattern = match &variant.fields {
            Fields::Unit => quote! { #enum_name::#variant_name },
            Fields::Unnamed(_) => quote! { #enum_name::#variant_name(..) },
            Fields::Named(_) => quote! { #enum_name::#variant_name { .. } },
        };
        arms.push(quote! { #pattern => #key });
        keys.push(key);
    }

    Ok(quote! {
        impl #impl_generics ::mapis::Variants for #enum_name #ty_generics #where_clause {
            const VARIANTS: &'static [&'static str] = &[#(#keys),*];

            fn variant_key(&self) -> &'static str {
                match self {
                    #(#arms),*
                }
            }
        }

        impl #impl_generics ::mapis::SelectorKey for #enum_name #ty_generics #where_clause {
            fn selector_key(&self) -> ::std::borrow::Cow<'_, str> {
                ::std::borrow::Cow::Borrowed(::mapis::Variants::variant_key(self))
            }
        }
    })
}
