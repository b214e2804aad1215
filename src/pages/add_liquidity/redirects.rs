use super::AddLiquidity;
use crate::{
    constants::{NATIVE_SYMBOL, WRAPPED_NATIVE},
    routes::{use_route_params, Navigate, NavigateTo},
};
use leptos::prelude::*;
use tracing::{debug, info};

fn is_native_or_wrapped(currency_id: &str) -> bool {
    currency_id == NATIVE_SYMBOL || currency_id.eq_ignore_ascii_case(WRAPPED_NATIVE)
}

/// Where `/add/:a/:b` should go instead when both sides name the same token. The native
/// currency and its wrapped token count as the same token.
pub fn duplicate_token_redirect(
    currency_id_a: Option<&str>,
    currency_id_b: Option<&str>,
) -> Option<String> {
    let (a, b) = (currency_id_a?, currency_id_b?);
    let duplicate =
        a.eq_ignore_ascii_case(b) || (is_native_or_wrapped(a) && is_native_or_wrapped(b));
    duplicate.then(|| format!("/add/{a}"))
}

pub fn duplicate_token_redirect_v2(
    currency_id_a: Option<&str>,
    currency_id_b: Option<&str>,
) -> Option<String> {
    let (a, b) = (currency_id_a?, currency_id_b?);
    a.eq_ignore_ascii_case(b).then(|| format!("/add/v2/{a}"))
}

#[component]
pub fn RedirectDuplicateTokenIds() -> impl IntoView {
    info!("rendering <RedirectDuplicateTokenIds/>");

    let params = use_route_params();

    move || {
        let current = params.get();
        match duplicate_token_redirect(current.get("currencyIdA"), current.get("currencyIdB")) {
            Some(to) => {
                debug!(to, "duplicate token ids");
                view! { <NavigateTo navigate=Navigate::replace(to) /> }.into_any()
            }
            None => view! { <AddLiquidity /> }.into_any(),
        }
    }
}

#[component]
pub fn RedirectDuplicateTokenIdsV2() -> impl IntoView {
    info!("rendering <RedirectDuplicateTokenIdsV2/>");

    let params = use_route_params();

    move || {
        let current = params.get();
        match duplicate_token_redirect_v2(current.get("currencyIdA"), current.get("currencyIdB")) {
            Some(to) => {
                debug!(to, "duplicate token ids");
                view! { <NavigateTo navigate=Navigate::replace(to) /> }.into_any()
            }
            None => view! { <AddLiquidity v2=true /> }.into_any(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAI: &str = "0x6B175474E89094C44Da98b954EedeAC495271d0F";

    #[test]
    fn distinct_tokens_stay() {
        assert_eq!(duplicate_token_redirect(Some("ETH"), Some(DAI)), None);
        assert_eq!(duplicate_token_redirect_v2(Some("ETH"), Some(DAI)), None);
    }

    #[test]
    fn missing_side_never_redirects() {
        assert_eq!(duplicate_token_redirect(Some(DAI), None), None);
        assert_eq!(duplicate_token_redirect(None, None), None);
        assert_eq!(duplicate_token_redirect_v2(None, Some(DAI)), None);
    }

    #[test]
    fn same_token_ignoring_case_redirects_to_first() {
        assert_eq!(
            duplicate_token_redirect(Some(DAI), Some(&DAI.to_lowercase())),
            Some(format!("/add/{DAI}"))
        );
        assert_eq!(
            duplicate_token_redirect_v2(Some(DAI), Some(DAI)),
            Some(format!("/add/v2/{DAI}"))
        );
    }

    #[test]
    fn native_and_wrapped_count_as_duplicates() {
        assert_eq!(
            duplicate_token_redirect(Some("ETH"), Some(&WRAPPED_NATIVE.to_lowercase())),
            Some("/add/ETH".to_string())
        );
        // the v2 flow only compares ids
        assert_eq!(
            duplicate_token_redirect_v2(Some("ETH"), Some(WRAPPED_NATIVE)),
            None
        );
    }
}
