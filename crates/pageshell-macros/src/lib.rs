use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::{Error, ItemStruct, LitStr};

struct Args {
    path: LitStr,
}

impl Parse for Args {
    fn parse(input: ParseStream) -> Result<Self> {
        let path: LitStr = input.parse()?;

        if !path.value().starts_with('/') {
            return Err(Error::new(
                path.span(),
                "route paths must start with `/`, e.g. `#[route(\"/about\")]`",
            ));
        }

        Ok(Args { path })
    }
}

/// Binds a view struct to the path it is rendered at.
///
/// See complete documentation in `crates/pageshell/src/route.rs`.
#[proc_macro_attribute]
pub fn route(attrs: TokenStream, item: TokenStream) -> TokenStream {
    let item_struct = syn::parse_macro_input!(item as ItemStruct);
    let attrs = syn::parse_macro_input!(attrs as Args);

    let struct_name = &item_struct.ident;
    let path = &attrs.path;

    let expanded = quote! {
        impl pageshell::route::InternalRoute for #struct_name {
            fn route_raw(&self) -> &'static str {
                #path
            }
        }

        impl pageshell::route::FullRoute for #struct_name {
            fn render_internal(
                &self,
                ctx: &mut pageshell::route::PageContext,
            ) -> pageshell::route::RenderResult {
                pageshell::route::Route::render(self, ctx).into()
            }
        }

        #item_struct
    };

    TokenStream::from(expanded)
}
