//! Derive macro for the `injector` crate.
//!
//! `#[derive(Component)]` implements `injector::Component` for a struct.
//! Fields tagged `#[inject]` must implement `injector::Injectable` (that is,
//! be an `Arc<T>`) and are resolved through the container; all other fields
//! are built with `Default::default()`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields, LitStr};

/// Generates the `Component` implementation for a struct.
#[proc_macro_derive(Component, attributes(inject))]
pub fn derive_component(input: TokenStream) -> TokenStream {
  let input = parse_macro_input!(input as DeriveInput);
  expand(input)
    .unwrap_or_else(syn::Error::into_compile_error)
    .into()
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
  let name = &input.ident;
  let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

  let data = match &input.data {
    Data::Struct(data) => data,
    Data::Enum(data) => {
      return Err(syn::Error::new(
        data.enum_token.span(),
        "Component can only be derived for structs",
      ))
    }
    Data::Union(data) => {
      return Err(syn::Error::new(
        data.union_token.span(),
        "Component can only be derived for structs",
      ))
    }
  };

  let mut injected = Vec::new();
  let body = match &data.fields {
    Fields::Named(fields) => {
      let inits = fields
        .named
        .iter()
        .map(|field| {
          let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new(field.span(), "expected a named field"))?;
          let label = LitStr::new(&ident.to_string(), ident.span());
          let inject = is_injected(field)?;
          let value = field_value(field, &label, inject);
          if inject {
            injected.push(label);
          }
          Ok(quote! { #ident: #value })
        })
        .collect::<syn::Result<Vec<_>>>()?;
      quote! { Self { #(#inits,)* } }
    }
    Fields::Unnamed(fields) => {
      let inits = fields
        .unnamed
        .iter()
        .enumerate()
        .map(|(i, field)| {
          let label = LitStr::new(&i.to_string(), field.span());
          let inject = is_injected(field)?;
          let value = field_value(field, &label, inject);
          if inject {
            injected.push(label);
          }
          Ok(value)
        })
        .collect::<syn::Result<Vec<_>>>()?;
      quote! { Self(#(#inits,)*) }
    }
    Fields::Unit => quote! { Self },
  };

  Ok(quote! {
    impl #impl_generics ::injector::Component for #name #ty_generics #where_clause {
      #[allow(unused_variables)]
      fn construct(
        injector: &::injector::Injector<'_>,
      ) -> ::injector::Result<Self> {
        ::std::result::Result::Ok(#body)
      }

      fn injected_fields() -> &'static [&'static str] {
        &[#(#injected),*]
      }
    }
  })
}

/// Whether the field carries `#[inject]`. The attribute takes no arguments.
fn is_injected(field: &Field) -> syn::Result<bool> {
  match field.attrs.iter().find(|attr| attr.path().is_ident("inject")) {
    Some(attr) => {
      attr.meta.require_path_only()?;
      Ok(true)
    }
    None => Ok(false),
  }
}

fn field_value(field: &Field, label: &LitStr, inject: bool) -> TokenStream2 {
  let ty = &field.ty;
  let span = ty.span();
  if inject {
    quote_spanned! {span=> <#ty as ::injector::Injectable>::inject(injector, #label)? }
  } else {
    quote_spanned! {span=> <#ty as ::std::default::Default>::default() }
  }
}
