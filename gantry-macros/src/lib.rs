mod decode_field;

use decode_field::{FieldMetadata, decode_field};
use proc_macro::TokenStream;
use quote::quote;
use syn::{Fields, ItemStruct, parse_macro_input};

/// Derives the field descriptor table binding result columns to the fields
/// of a struct. Columns bind by field name with any leading underscore
/// stripped, `#[record(name = "...")]` overrides the column name and
/// `#[record(skip)]` keeps the field out of binding.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let item: ItemStruct = parse_macro_input!(input as ItemStruct);
    let name = &item.ident;
    if !item.generics.params.is_empty() {
        panic!("Record cannot be derived for generic structs");
    }
    let Fields::Named(..) = item.fields else {
        panic!("Record can only be derived for structs with named fields");
    };
    let fields = item
        .fields
        .iter()
        .map(decode_field)
        .collect::<Vec<FieldMetadata>>();
    for (i, field) in fields.iter().enumerate() {
        if let Some(previous) = fields[..i].iter().find(|v| v.name == field.name) {
            panic!(
                "Fields `{}` and `{}` are both bound to the column `{}`",
                previous.ident, field.ident, field.name,
            );
        }
    }
    let count = fields.len();
    let defs = fields.iter().map(|field| {
        let column = &field.name;
        let ident = &field.ident;
        let ty = &field.ty;
        if field.skip {
            quote! {
                ::gantry::FieldDef {
                    name: #column,
                    set: ::std::option::Option::None,
                }
            }
        } else {
            quote! {
                ::gantry::FieldDef {
                    name: #column,
                    set: ::std::option::Option::Some(
                        |record: &mut #name, value: ::gantry::Value| {
                            record.#ident = <#ty as ::gantry::AsValue>::try_from_value(value)?;
                            ::std::result::Result::Ok(())
                        },
                    ),
                }
            }
        }
    });
    quote! {
        impl ::gantry::Record for #name {
            fn fields() -> &'static [::gantry::FieldDef<Self>] {
                static FIELDS: [::gantry::FieldDef<#name>; #count] = [#(#defs),*];
                &FIELDS
            }
        }
    }
    .into()
}
