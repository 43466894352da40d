use proc_macro2::Span;
use syn::{
    parse::Parser, punctuated::Punctuated, spanned::Spanned, Attribute, Expr, ExprLit, Fields,
    ItemStruct, Lit, LitStr, MetaNameValue, Token,
};

#[derive(Default)]
pub struct SchemaArgs {
    pub name: Option<LitStr>,
    pub description: Option<LitStr>,
}

/// Parse `name = "..."` / `description = "..."` pairs from the attribute.
pub fn parse_schema_args(attr: proc_macro::TokenStream) -> syn::Result<SchemaArgs> {
    let mut args = SchemaArgs::default();
    if attr.is_empty() {
        return Ok(args);
    }

    let pairs = Punctuated::<MetaNameValue, Token![,]>::parse_terminated.parse(attr)?;

    for pair in pairs {
        let key = pair
            .path
            .get_ident()
            .ok_or_else(|| syn::Error::new_spanned(&pair.path, "expected identifier"))?;

        let value = match &pair.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(lit), ..
            }) => lit.clone(),
            other => return Err(syn::Error::new_spanned(other, "expected string literal")),
        };

        let slot = match key.to_string().as_str() {
            "name" => &mut args.name,
            "description" => &mut args.description,
            other => {
                return Err(syn::Error::new(
                    key.span(),
                    format!("unknown `completion_schema` argument `{other}`"),
                ))
            }
        };

        if slot.replace(value).is_some() {
            return Err(syn::Error::new(
                key.span(),
                format!("`{key}` given more than once"),
            ));
        }
    }

    Ok(args)
}

pub fn named_fields_only(item: &ItemStruct) -> syn::Result<()> {
    if matches!(item.fields, Fields::Named(_)) {
        Ok(())
    } else {
        Err(syn::Error::new(
            item.struct_token.span(),
            "`#[completion_schema]` requires a struct with named fields",
        ))
    }
}

/// Joined `///` lines of an item, if any.
pub fn struct_doc(attrs: &[Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            syn::Meta::NameValue(MetaNameValue {
                value: Expr::Lit(ExprLit {
                    lit: Lit::Str(lit), ..
                }),
                ..
            }) => Some(lit.value().trim().to_string()),
            _ => None,
        })
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

/// `(field name, doc text)` for every documented named field.
pub fn field_doc_pairs(item: &ItemStruct) -> Vec<(String, String)> {
    let Fields::Named(fields) = &item.fields else {
        return Vec::new();
    };

    fields
        .named
        .iter()
        .filter_map(|field| {
            let ident = field.ident.as_ref()?;
            let doc = struct_doc(&field.attrs)?;
            Some((ident.to_string(), doc))
        })
        .collect()
}

pub fn resolve_schema_name(item: &ItemStruct, explicit: Option<&LitStr>) -> LitStr {
    explicit
        .cloned()
        .unwrap_or_else(|| LitStr::new(&item.ident.to_string(), Span::call_site()))
}

pub fn resolve_description(explicit: Option<&LitStr>, doc: Option<String>) -> Option<LitStr> {
    explicit
        .cloned()
        .or_else(|| doc.map(|text| LitStr::new(&text, Span::call_site())))
}
