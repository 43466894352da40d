use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{parse_macro_input, spanned::Spanned, ItemStruct, LitStr};

use crate::schema_extraction::{
    field_doc_pairs, named_fields_only, parse_schema_args, resolve_description,
    resolve_schema_name, struct_doc,
};

pub fn completion_schema(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = match parse_schema_args(attr) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error().into(),
    };

    let item_struct = parse_macro_input!(item as ItemStruct);

    match expand(&item_struct, args.name.as_ref(), args.description.as_ref()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(
    item_struct: &ItemStruct,
    explicit_name: Option<&LitStr>,
    explicit_description: Option<&LitStr>,
) -> syn::Result<TokenStream2> {
    named_fields_only(item_struct)?;

    if !item_struct.generics.params.is_empty() {
        return Err(syn::Error::new(
            item_struct.generics.span(),
            "`#[completion_schema]` cannot be applied to generic structs",
        ));
    }

    let schema_name = resolve_schema_name(item_struct, explicit_name);
    let description = resolve_description(explicit_description, struct_doc(&item_struct.attrs));
    let description_tokens = match description {
        Some(lit) => quote! { Some(#lit) },
        None => quote! { None },
    };

    let field_docs = field_doc_pairs(item_struct).into_iter().map(|(field, doc)| {
        let field = LitStr::new(&field, Span::call_site());
        let doc = LitStr::new(&doc, Span::call_site());
        quote! { (#field, #doc) }
    });

    let ident = &item_struct.ident;
    let type_name = LitStr::new(&ident.to_string(), Span::call_site());

    Ok(quote! {
        #item_struct

        impl trip_planner_rs::schema::CompletionSchema for #ident {
            fn schema() -> &'static trip_planner_rs::schema::SchemaHandle {
                static HANDLE: std::sync::OnceLock<trip_planner_rs::schema::SchemaHandle> =
                    std::sync::OnceLock::new();
                HANDLE.get_or_init(|| {
                    let mut root = schemars::schema_for!(Self);
                    trip_planner_rs::schema::apply_doc_comments(
                        &mut root,
                        #schema_name,
                        #description_tokens,
                        &[#(#field_docs),*],
                    );
                    trip_planner_rs::schema::SchemaHandle::from_root_schema::<Self>(
                        #schema_name,
                        #type_name,
                        root,
                    )
                })
            }
        }
    })
}
