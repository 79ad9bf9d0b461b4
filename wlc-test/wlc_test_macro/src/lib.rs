/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use proc_macro::TokenStream;

use quote::quote;
use syn::{parse_macro_input, ItemFn, LitInt};

#[proc_macro_attribute]
pub fn wlc_test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut timeout_ms: Option<LitInt> = None;
    let properties = syn::meta::parser(|meta| {
        if meta.path.is_ident("timeout_ms") {
            timeout_ms = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported wlc_test property, expected `timeout_ms`"))
        }
    });
    parse_macro_input!(attr with properties);

    let input = parse_macro_input!(item as ItemFn);
    let vis = &input.vis;
    let sig = &input.sig;
    let body = &input.block;
    let attrs = &input.attrs;
    let name = &sig.ident;
    let inputs = &sig.inputs;
    let output = &sig.output;

    if sig.asyncness.is_none() {
        return syn::Error::new_spanned(sig.fn_token, "#[wlc_test] requires an async fn")
            .to_compile_error()
            .into();
    }

    let async_name = syn::Ident::new(&format!("__{}_async", name), name.span());

    let run = match &timeout_ms {
        Some(ms) => quote! {
            match ::nfc_wlc_test::__private::tokio::time::timeout(
                ::std::time::Duration::from_millis(#ms),
                #async_name(),
            )
            .await
            {
                Ok(result) => result,
                Err(_) => panic!("test `{}` timed out after {} ms", stringify!(#name), #ms),
            }
        },
        None => quote! { #async_name().await },
    };

    let output = quote! {
        #[test]
        #(#attrs)*
        #vis fn #name() #output {
            use ::nfc_wlc_test::__private::tracing::Instrument;

            let runtime = ::nfc_wlc_test::__private::tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .expect("failed to build the test runtime");

            let test_span = ::nfc_wlc_test::__private::tracing::info_span!(
                "wlc_test",
                name = stringify!(#name)
            );
            runtime.block_on(async { #run }.instrument(test_span))
        }

        async fn #async_name(#inputs) #output #body
    };

    output.into()
}
